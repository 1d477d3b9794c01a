//! Command dispatch: turns parsed arguments into engine calls and output.

use std::io::Write;

use anyhow::{Context, Result};
use calc_core::format::format_currency;
use calc_core::{
    FreelanceInput, FreelanceResult, MortgageInput, MortgageResult, PtkpStatus, TaxInput,
    TaxResult,
};
use tracing::{debug, info};

use crate::chart::{CalculatorKind, ChartBoard, PieChart};
use crate::cli::{Command, FreelanceArgs, MortgageArgs, TaxArgs, ThemeAction, ThemeArgs};
use crate::config::InputDefaults;
use crate::prefs::KeyValueStore;
use crate::render;
use crate::theme::{Theme, ThemeManager};
use crate::utils::{decimal_or, ptkp_or, years_or};

/// Width of the chart bar in cells.
pub const CHART_WIDTH: usize = 40;

pub fn tax_input(
    args: &TaxArgs,
    defaults: &InputDefaults,
) -> TaxInput {
    TaxInput {
        gross_income: decimal_or(args.gross.as_deref(), defaults.gross_income),
        ptkp: ptkp_or(args.ptkp.as_deref(), defaults.ptkp),
    }
}

pub fn mortgage_input(
    args: &MortgageArgs,
    defaults: &InputDefaults,
) -> MortgageInput {
    MortgageInput {
        property_price: decimal_or(args.price.as_deref(), defaults.property_price),
        down_payment_percent: decimal_or(
            args.down_payment.as_deref(),
            defaults.down_payment_percent,
        ),
        yearly_rate_percent: decimal_or(args.rate.as_deref(), defaults.yearly_rate_percent),
        tenor_years: years_or(args.tenor.as_deref(), defaults.tenor_years),
    }
}

pub fn freelance_input(
    args: &FreelanceArgs,
    defaults: &InputDefaults,
) -> FreelanceInput {
    FreelanceInput {
        monthly_expenses: decimal_or(args.expenses.as_deref(), defaults.monthly_expenses),
        monthly_savings: decimal_or(args.savings.as_deref(), defaults.monthly_savings),
        billable_hours: decimal_or(args.hours.as_deref(), defaults.billable_hours),
    }
}

/// The presentation layer: owns the theme, the chart board and the input
/// defaults, and writes everything it renders to a caller-supplied sink.
pub struct App<S: KeyValueStore> {
    defaults: InputDefaults,
    theme: ThemeManager<S>,
    charts: ChartBoard,
    show_chart: bool,
    colour: bool,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(
        defaults: InputDefaults,
        store: S,
    ) -> Self {
        Self {
            defaults,
            theme: ThemeManager::load(store),
            charts: ChartBoard::new(),
            show_chart: true,
            colour: false,
        }
    }

    pub fn with_chart(
        mut self,
        show_chart: bool,
    ) -> Self {
        self.show_chart = show_chart;
        self
    }

    /// Enables ANSI colours in charts, using the current theme's palette.
    pub fn with_colour(
        mut self,
        colour: bool,
    ) -> Self {
        self.colour = colour;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn charts(&self) -> &ChartBoard {
        &self.charts
    }

    pub fn run(
        &mut self,
        command: &Command,
        out: &mut impl Write,
    ) -> Result<()> {
        match command {
            Command::Tax(args) => self.tax(args, out).map(|_| ()),
            Command::Mortgage(args) => self.mortgage(args, out).map(|_| ()),
            Command::Freelance(args) => self.freelance(args, out).map(|_| ()),
            Command::Theme(args) => self.theme_command(args, out).map(|_| ()),
            Command::Ptkp => list_ptkp(out),
        }
    }

    pub fn tax(
        &mut self,
        args: &TaxArgs,
        out: &mut impl Write,
    ) -> Result<TaxResult> {
        let input = tax_input(args, &self.defaults);
        debug!(?input, "tax input");
        let result = input.calculate();

        render::render_tax(&result, out).context("writing tax result")?;
        self.draw(CalculatorKind::Tax, PieChart::tax(&result), out)?;
        Ok(result)
    }

    pub fn mortgage(
        &mut self,
        args: &MortgageArgs,
        out: &mut impl Write,
    ) -> Result<MortgageResult> {
        let input = mortgage_input(args, &self.defaults);
        debug!(?input, "mortgage input");
        let result = input.calculate();

        render::render_mortgage(&result, out).context("writing mortgage result")?;
        self.draw(CalculatorKind::Mortgage, PieChart::mortgage(&result), out)?;
        Ok(result)
    }

    pub fn freelance(
        &mut self,
        args: &FreelanceArgs,
        out: &mut impl Write,
    ) -> Result<FreelanceResult> {
        let input = freelance_input(args, &self.defaults);
        debug!(?input, "freelance input");
        let result = input.calculate();

        render::render_freelance(&result, out).context("writing freelance result")?;
        self.draw(CalculatorKind::Freelance, PieChart::freelance(&input), out)?;
        Ok(result)
    }

    pub fn theme_command(
        &mut self,
        args: &ThemeArgs,
        out: &mut impl Write,
    ) -> Result<Theme> {
        let theme = match args.action.as_ref().unwrap_or(&ThemeAction::Show) {
            ThemeAction::Show => self.theme.current(),
            ThemeAction::Toggle => self.theme.toggle().context("saving theme")?,
            ThemeAction::Set { theme } => {
                let theme = Theme::parse(theme)
                    .with_context(|| format!("unknown theme '{theme}', expected light or dark"))?;
                self.theme.set(theme).context("saving theme")?
            }
        };
        info!(%theme, "theme");
        writeln!(out, "{theme}")?;
        Ok(theme)
    }

    fn draw(
        &mut self,
        kind: CalculatorKind,
        chart: PieChart,
        out: &mut impl Write,
    ) -> Result<()> {
        let palette = self.theme.current().palette();
        let chart = self.charts.draw(kind, chart);
        if !self.show_chart {
            return Ok(());
        }
        writeln!(out)?;
        chart
            .render(CHART_WIDTH, self.colour.then_some(&palette), out)
            .context("writing chart")
    }
}

fn list_ptkp(out: &mut impl Write) -> Result<()> {
    for status in PtkpStatus::all() {
        writeln!(
            out,
            "{:<6}{:>18}  {}",
            status.as_str(),
            format_currency(status.amount()),
            status.label()
        )?;
    }
    Ok(())
}
