//! Two-slice charts for calculator results.
//!
//! Every calculator is visualised as a split of one total into two parts:
//! take-home pay against tax, principal against interest, expenses against
//! savings. Charts are drawn as a single proportional bar.

use std::collections::HashMap;
use std::io::{self, Write};

use calc_core::calculations::common::round_to;
use calc_core::format::{format_currency, format_percent};
use calc_core::{FreelanceInput, MortgageResult, TaxResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::theme::Palette;

const BAR_CHAR: char = '█';
const EMPTY_CHAR: char = '░';

/// Which calculator a chart belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorKind {
    Tax,
    Mortgage,
    Freelance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    pub label: &'static str,
    pub value: Decimal,
}

/// A chart of exactly two slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieChart {
    pub title: &'static str,
    pub slices: [Slice; 2],
}

impl PieChart {
    pub fn new(
        title: &'static str,
        first: Slice,
        second: Slice,
    ) -> Self {
        Self {
            title,
            slices: [first, second],
        }
    }

    pub fn tax(result: &TaxResult) -> Self {
        Self::new(
            "Income split",
            Slice {
                label: "Take-home",
                value: result.take_home,
            },
            Slice {
                label: "Tax",
                value: result.yearly_tax,
            },
        )
    }

    pub fn mortgage(result: &MortgageResult) -> Self {
        Self::new(
            "Repayment split",
            Slice {
                label: "Principal",
                value: result.principal,
            },
            Slice {
                label: "Interest",
                value: result.total_interest,
            },
        )
    }

    pub fn freelance(input: &FreelanceInput) -> Self {
        Self::new(
            "Income target split",
            Slice {
                label: "Expenses",
                value: input.monthly_expenses,
            },
            Slice {
                label: "Savings",
                value: input.monthly_savings,
            },
        )
    }

    /// Sum of the slices, counting negative values as zero.
    pub fn total(&self) -> Decimal {
        self.slices.iter().map(|s| s.value.max(Decimal::ZERO)).sum()
    }

    /// Percentage of the total taken by each slice, one decimal.
    ///
    /// Both shares are zero when the total is zero.
    pub fn shares(&self) -> [Decimal; 2] {
        let total = self.total();
        if total.is_zero() {
            return [Decimal::ZERO; 2];
        }
        self.slices
            .each_ref()
            .map(|s| round_to(s.value.max(Decimal::ZERO) / total * Decimal::ONE_HUNDRED, 1))
    }

    /// Draws the chart as a bar of `width` cells followed by a legend.
    ///
    /// `palette` colours the two slices; pass `None` for plain output.
    pub fn render(
        &self,
        width: usize,
        palette: Option<&Palette>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let [first_share, _] = self.shares();
        let total = self.total();
        let first_cells = if total.is_zero() {
            0
        } else {
            (first_share * Decimal::from(width) / Decimal::ONE_HUNDRED)
                .round()
                .to_usize()
                .unwrap_or(0)
                .min(width)
        };
        let second_cells = if total.is_zero() { 0 } else { width - first_cells };

        let (c1, c2, muted, reset) = match palette {
            Some(p) => (p.primary, p.secondary, p.muted, Palette::RESET),
            None => ("", "", "", ""),
        };

        writeln!(out, "{}", self.title)?;
        if total.is_zero() {
            writeln!(out, "  {muted}{}{reset}", EMPTY_CHAR.to_string().repeat(width))?;
        } else {
            writeln!(
                out,
                "  {c1}{}{reset}{c2}{}{reset}",
                BAR_CHAR.to_string().repeat(first_cells),
                BAR_CHAR.to_string().repeat(second_cells),
            )?;
        }

        for ((slice, share), colour) in self.slices.iter().zip(self.shares()).zip([c1, c2]) {
            writeln!(
                out,
                "  {colour}{BAR_CHAR}{reset} {:<10} {:>20}  {}",
                slice.label,
                format_currency(slice.value),
                format_percent(share, 1),
            )?;
        }
        Ok(())
    }
}

/// The charts currently on display, one per calculator.
///
/// Drawing a chart for a calculator replaces whatever was shown for it
/// before.
#[derive(Debug, Default)]
pub struct ChartBoard {
    charts: HashMap<CalculatorKind, PieChart>,
}

impl ChartBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(
        &mut self,
        kind: CalculatorKind,
        chart: PieChart,
    ) -> &PieChart {
        if self.charts.contains_key(&kind) {
            debug!(?kind, "replacing chart");
        }
        self.charts.insert(kind, chart);
        &self.charts[&kind]
    }

    pub fn get(
        &self,
        kind: CalculatorKind,
    ) -> Option<&PieChart> {
        self.charts.get(&kind)
    }
}
