mod freelance;
mod mortgage;
mod ptkp_status;
mod tax;
mod tax_bracket;

pub use freelance::{FreelanceInput, FreelanceResult};
pub use mortgage::{MortgageInput, MortgageResult};
pub use ptkp_status::PtkpStatus;
pub use tax::{BracketContribution, TaxInput, TaxResult};
pub use tax_bracket::TaxBracket;
