//! Text rendering of calculator results.
//!
//! Results arrive as plain numbers; this is the only place they are turned
//! into currency and percentage strings.

use std::io::{self, Write};

use calc_core::format::{format_currency, format_percent};
use calc_core::{FreelanceResult, MortgageResult, TaxResult};
use rust_decimal::Decimal;

fn field(
    out: &mut impl Write,
    label: &str,
    value: &str,
) -> io::Result<()> {
    writeln!(out, "  {label:<20}{value:>20}")
}

fn money(
    out: &mut impl Write,
    label: &str,
    amount: Decimal,
) -> io::Result<()> {
    field(out, label, &format_currency(amount))
}

pub fn render_tax(
    result: &TaxResult,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "Income tax")?;
    money(out, "Gross income", result.gross_income)?;
    money(out, "PTKP", result.ptkp)?;
    money(out, "Taxable income", result.taxable_income)?;
    money(out, "Yearly tax", result.yearly_tax)?;
    money(out, "Monthly tax", result.monthly_tax)?;
    money(out, "Take-home", result.take_home)?;
    field(out, "Effective rate", &format_percent(result.effective_rate, 2))?;

    if !result.brackets.is_empty() {
        writeln!(out, "  Brackets")?;
        for bracket in &result.brackets {
            writeln!(
                out,
                "    {:<6}{:>22}{:>20}",
                bracket.rate_label,
                format_currency(bracket.amount),
                format_currency(bracket.tax),
            )?;
        }
    }
    Ok(())
}

pub fn render_mortgage(
    result: &MortgageResult,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "Mortgage")?;
    money(out, "Down payment", result.down_payment)?;
    money(out, "Principal", result.principal)?;
    field(out, "Tenor", &format!("{} months", result.tenor_months))?;
    money(out, "Monthly payment", result.monthly_payment)?;
    money(out, "Total payment", result.total_payment)?;
    money(out, "Total interest", result.total_interest)?;
    field(out, "Interest ratio", &format_percent(result.interest_ratio, 1))
}

pub fn render_freelance(
    result: &FreelanceResult,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "Freelance rate")?;
    money(out, "Target income", result.target_income)?;
    money(out, "Hourly rate", result.hourly_rate)?;
    money(out, "Daily rate", result.daily_rate)?;
    money(out, "Weekly rate", result.weekly_rate)?;
    field(
        out,
        "Hourly range",
        &format!(
            "{} - {}",
            format_currency(result.min_hourly_rate),
            format_currency(result.max_hourly_rate)
        ),
    )
}
