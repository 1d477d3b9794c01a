//! Calculators for income tax, mortgage instalments and freelance rates.
//!
//! Each calculator is a pure function: it reads no state, performs no I/O and
//! is defined for every input, using explicit zero guards instead of
//! failing on division by zero.

pub mod common;
pub mod freelance;
pub mod mortgage;
pub mod tax;

pub use freelance::compute_freelance_rate;
pub use mortgage::compute_mortgage;
pub use tax::{compute_tax, compute_tax_with};
