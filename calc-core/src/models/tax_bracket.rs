use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One marginal bracket of a progressive schedule.
///
/// Brackets are described by their width rather than their bounds; a
/// schedule is an ascending list whose last entry has no width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Amount of taxable income this bracket covers, `None` when unbounded.
    pub width: Option<Decimal>,
    /// Marginal rate as a fraction (0.05 for 5%).
    pub rate: Decimal,
}

const SCHEDULE: [TaxBracket; 5] = [
    TaxBracket {
        width: Some(dec!(60000000)),
        rate: dec!(0.05),
    },
    TaxBracket {
        width: Some(dec!(190000000)),
        rate: dec!(0.15),
    },
    TaxBracket {
        width: Some(dec!(250000000)),
        rate: dec!(0.25),
    },
    TaxBracket {
        width: Some(dec!(4500000000)),
        rate: dec!(0.30),
    },
    TaxBracket {
        width: None,
        rate: dec!(0.35),
    },
];

impl TaxBracket {
    /// The fixed income tax schedule applied by [`compute_tax`](crate::calculations::compute_tax).
    pub fn schedule() -> &'static [TaxBracket] {
        &SCHEDULE
    }

    /// Display label for the marginal rate, e.g. `"15%"`.
    pub fn rate_label(&self) -> String {
        format!("{}%", (self.rate * Decimal::ONE_HUNDRED).normalize())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn schedule_is_ascending_with_unbounded_top() {
        let schedule = TaxBracket::schedule();

        assert_eq!(schedule.len(), 5);
        assert!(schedule.windows(2).all(|w| w[0].rate < w[1].rate));
        assert!(schedule[..4].iter().all(|b| b.width.is_some()));
        assert_eq!(schedule[4].width, None);
    }

    #[test]
    fn rate_label_drops_trailing_zeros() {
        let labels: Vec<String> = TaxBracket::schedule().iter().map(|b| b.rate_label()).collect();

        assert_eq!(labels, vec!["5%", "15%", "25%", "30%", "35%"]);
    }
}
