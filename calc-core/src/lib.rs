pub mod calculations;
pub mod format;
pub mod models;

pub use calculations::{compute_freelance_rate, compute_mortgage, compute_tax};
pub use format::format_currency;
pub use models::*;
