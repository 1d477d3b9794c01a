//! Command-line definition.
//!
//! Calculator inputs are taken as raw strings so that missing or malformed
//! values can fall back to the configured defaults instead of aborting.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Income tax, mortgage and freelance rate calculators.
#[derive(Debug, Parser)]
#[command(name = "site-calc", version)]
pub struct Cli {
    /// Path to the config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results without the chart.
    #[arg(long, global = true)]
    pub no_chart: bool,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Progressive income tax on an annual income.
    Tax(TaxArgs),
    /// Monthly instalment of a fixed-rate mortgage.
    Mortgage(MortgageArgs),
    /// Hourly, daily and weekly rates for a monthly income target.
    Freelance(FreelanceArgs),
    /// Show or change the colour theme.
    Theme(ThemeArgs),
    /// List the PTKP status codes accepted by `tax --ptkp`.
    Ptkp,
}

#[derive(Debug, Default, Args)]
pub struct TaxArgs {
    /// Annual gross income.
    #[arg(long)]
    pub gross: Option<String>,

    /// Tax-free threshold: an amount or a status code such as `K/1`.
    #[arg(long)]
    pub ptkp: Option<String>,
}

#[derive(Debug, Default, Args)]
pub struct MortgageArgs {
    /// Property price.
    #[arg(long)]
    pub price: Option<String>,

    /// Down payment, percent of the price.
    #[arg(long = "down-payment")]
    pub down_payment: Option<String>,

    /// Yearly interest rate, percent.
    #[arg(long)]
    pub rate: Option<String>,

    /// Loan length in years.
    #[arg(long)]
    pub tenor: Option<String>,
}

#[derive(Debug, Default, Args)]
pub struct FreelanceArgs {
    /// Monthly living expenses.
    #[arg(long)]
    pub expenses: Option<String>,

    /// Monthly savings target.
    #[arg(long)]
    pub savings: Option<String>,

    /// Billable hours per month.
    #[arg(long)]
    pub hours: Option<String>,
}

#[derive(Debug, Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub action: Option<ThemeAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ThemeAction {
    /// Print the current theme (the default).
    Show,
    /// Switch between light and dark.
    Toggle,
    /// Set the theme explicitly.
    Set {
        /// `light` or `dark`.
        theme: String,
    },
}
