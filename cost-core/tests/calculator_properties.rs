//! Whole-pipeline checks against the published calculator behaviour.

use cost_core::calculations::{
    CostModel, MAX_RECOMMENDATIONS, compute_spend, compute_time, default_catalog, format_duration,
    recommend_alternatives,
};
use cost_core::{AlternativeRecommendation, CalculatorInputs};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn spend_identities_hold_across_a_grid() {
    let prices = [dec!(0), dec!(1), dec!(6.49), dec!(13.2), dec!(50)];
    let packs = [dec!(0), dec!(0.5), dec!(3), dec!(14)];
    let years = [0u32, 1, 7, 50];

    for price in prices {
        for pack in packs {
            for year in years {
                let spend = compute_spend(&CalculatorInputs::new(price, pack, year));

                assert_eq!(spend.monthly, spend.weekly * dec!(4.33));
                assert_eq!(spend.yearly, spend.weekly * dec!(52));
                assert_eq!(spend.lifetime, spend.yearly * Decimal::from(year));
                if year >= 1 {
                    assert!(spend.weekly <= spend.monthly && spend.monthly <= spend.yearly);
                    assert!(spend.lifetime >= spend.yearly);
                }
            }
        }
    }
}

#[test]
fn duration_boundaries() {
    assert_eq!(format_duration(dec!(59)), "59 min");
    assert_eq!(format_duration(dec!(60)), "1 hours");
    assert_eq!(format_duration(dec!(1439)), "24 hours");
    assert_eq!(format_duration(dec!(1440)), "1 days");
}

#[test]
fn recommendations_never_empty_and_bounded() {
    let catalog = default_catalog();
    let mut spend = Decimal::ZERO;

    while spend <= dec!(400) {
        let picks = recommend_alternatives(spend, &catalog);

        assert!(!picks.is_empty());
        assert!(picks.len() <= MAX_RECOMMENDATIONS);
        if spend < dec!(15) {
            assert_eq!(picks, vec![AlternativeRecommendation::EmergencyFund]);
        }
        spend += dec!(7.5);
    }
}

#[test]
fn end_to_end_reference_example() {
    let catalog = default_catalog();
    let inputs = CalculatorInputs::parse(Some("10"), Some("7"), Some("10"));

    let report = CostModel::new(&catalog).calculate(&inputs);

    assert_eq!(report.spend.monthly, dec!(303.1));
    assert_eq!(report.time, compute_time(dec!(7), 10));
    assert_eq!(report.display.time_per_day, "2 hours");
    let costs: Vec<_> = report.alternatives.iter().filter_map(|a| a.unit_cost()).collect();
    assert_eq!(costs, vec![dec!(120), dec!(100), dec!(80), dec!(70)]);
}

#[test]
fn malformed_text_inputs_calculate_as_zero() {
    let catalog = default_catalog();
    let inputs = CalculatorInputs::parse(Some("n/a"), Some(""), None);

    let report = CostModel::new(&catalog).calculate(&inputs);

    assert_eq!(report.display.total_cost, "$0");
    assert_eq!(report.alternatives, vec![AlternativeRecommendation::EmergencyFund]);
}
