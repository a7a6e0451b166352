//! Everyday purchases the monthly cigarette budget could cover instead.
//!
//! The pipeline is filter → stable sort → truncate → quantity, with a
//! single [`AlternativeRecommendation::EmergencyFund`] entry standing in for
//! an empty result.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{Alternative, AlternativeRecommendation};

/// Maximum number of recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 4;

/// The built-in catalog, in display order.
pub fn default_catalog() -> Vec<Alternative> {
    vec![
        Alternative::new("Gym membership", Decimal::from(50), "🏋️"),
        Alternative::new("Streaming services", Decimal::from(15), "📺"),
        Alternative::new("Coffee for a month", Decimal::from(120), "☕"),
        Alternative::new("Nice dinner out", Decimal::from(80), "🍽️"),
        Alternative::new("Books", Decimal::from(25), "📚"),
        Alternative::new("Movie tickets", Decimal::from(30), "🎬"),
        Alternative::new("Gas for car", Decimal::from(100), "⛽"),
        Alternative::new("Phone bill", Decimal::from(70), "📱"),
    ]
}

/// Picks up to four affordable catalog entries, most expensive first.
///
/// Entries costing more than `monthly_spend` are skipped. Equal costs keep
/// their catalog order. When nothing is affordable the result is the
/// emergency-fund sentinel alone, so the list is never empty.
///
/// ```
/// use rust_decimal_macros::dec;
/// use cost_core::AlternativeRecommendation;
/// use cost_core::calculations::{default_catalog, recommend_alternatives};
///
/// let picks = recommend_alternatives(dec!(10), &default_catalog());
///
/// assert_eq!(picks, vec![AlternativeRecommendation::EmergencyFund]);
/// ```
pub fn recommend_alternatives(
    monthly_spend: Decimal,
    catalog: &[Alternative],
) -> Vec<AlternativeRecommendation> {
    let mut affordable: Vec<&Alternative> = catalog
        .iter()
        .filter(|alt| alt.unit_cost <= monthly_spend)
        .collect();

    // `sort_by` is stable, which keeps catalog order for ties.
    affordable.sort_by(|a, b| b.unit_cost.cmp(&a.unit_cost));

    let picks: Vec<AlternativeRecommendation> = affordable
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|alt| AlternativeRecommendation::Item {
            alternative: alt.clone(),
            quantity: quantity(monthly_spend, alt.unit_cost),
        })
        .collect();

    if picks.is_empty() {
        tracing::debug!(%monthly_spend, "nothing affordable, recommending emergency fund");
        return vec![AlternativeRecommendation::EmergencyFund];
    }

    picks
}

/// Whole units of `unit_cost` that `monthly_spend` buys. Zero-cost entries
/// report zero rather than an unbounded count.
fn quantity(
    monthly_spend: Decimal,
    unit_cost: Decimal,
) -> u64 {
    if unit_cost <= Decimal::ZERO {
        return 0;
    }
    monthly_spend
        .checked_div(unit_cost)
        .map(|q| q.floor())
        .and_then(|q| q.to_u64())
        .unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn costs(picks: &[AlternativeRecommendation]) -> Vec<Decimal> {
        picks.iter().filter_map(|p| p.unit_cost()).collect()
    }

    #[test]
    fn zero_spend_returns_only_the_sentinel() {
        let picks = recommend_alternatives(Decimal::ZERO, &default_catalog());

        assert_eq!(picks, vec![AlternativeRecommendation::EmergencyFund]);
    }

    #[test]
    fn empty_catalog_returns_the_sentinel() {
        let picks = recommend_alternatives(dec!(1000), &[]);

        assert_eq!(picks, vec![AlternativeRecommendation::EmergencyFund]);
    }

    #[test]
    fn reference_example_keeps_top_four() {
        let picks = recommend_alternatives(dec!(303.1), &default_catalog());

        assert_eq!(costs(&picks), vec![dec!(120), dec!(100), dec!(80), dec!(70)]);
    }

    #[test]
    fn reference_example_quantities() {
        let picks = recommend_alternatives(dec!(303.1), &default_catalog());
        let quantities: Vec<u64> = picks
            .iter()
            .map(|p| match p {
                AlternativeRecommendation::Item { quantity, .. } => *quantity,
                AlternativeRecommendation::EmergencyFund => 0,
            })
            .collect();

        assert_eq!(quantities, vec![2, 3, 3, 4]);
    }

    #[test]
    fn cost_equal_to_spend_is_affordable() {
        let picks = recommend_alternatives(dec!(15), &default_catalog());

        assert_eq!(costs(&picks), vec![dec!(15)]);
        assert_eq!(picks[0].caption(), "1x per month");
    }

    #[test]
    fn results_are_affordable_sorted_and_bounded() {
        for spend in [dec!(16), dec!(49.99), dec!(75), dec!(119), dec!(5000)] {
            let picks = recommend_alternatives(spend, &default_catalog());
            let costs = costs(&picks);

            assert!(picks.len() <= MAX_RECOMMENDATIONS);
            assert!(costs.iter().all(|c| *c <= spend));
            assert!(costs.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = vec![
            Alternative::new("First", dec!(20), "1"),
            Alternative::new("Cheap", dec!(5), "c"),
            Alternative::new("Second", dec!(20), "2"),
        ];

        let picks = recommend_alternatives(dec!(40), &catalog);
        let names: Vec<&str> = picks.iter().map(|p| p.name()).collect();

        assert_eq!(names, vec!["First", "Second", "Cheap"]);
    }

    #[test]
    fn zero_cost_entry_has_zero_quantity() {
        let catalog = vec![Alternative::new("Free", Decimal::ZERO, "🆓")];

        let picks = recommend_alternatives(dec!(10), &catalog);

        assert_eq!(picks[0].caption(), "0x per month");
    }

    #[test]
    fn recommend_is_idempotent() {
        let catalog = default_catalog();

        assert_eq!(
            recommend_alternatives(dec!(250), &catalog),
            recommend_alternatives(dec!(250), &catalog)
        );
    }

    #[test]
    fn sentinel_describes_itself() {
        let sentinel = AlternativeRecommendation::EmergencyFund;

        assert_eq!(sentinel.name(), "Savings account");
        assert_eq!(sentinel.icon(), "💰");
        assert_eq!(sentinel.caption(), "Build your emergency fund");
        assert_eq!(sentinel.unit_cost(), None);
    }
}
