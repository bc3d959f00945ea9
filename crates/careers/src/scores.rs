use serde::{Deserialize, Serialize};

use crate::career::CareerSelection;

/// Per-career stability and diversification, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerScores {
    pub name: String,
    /// `10 - risk_level`, in `[0, 9]`.
    pub stability: u8,
    /// Share of total selected earnings, in percent.
    pub diversification_pct: f64,
}

/// Stability score per career: the inverse of its risk level.
pub fn stability_scores(selection: &CareerSelection) -> Vec<(String, u8)> {
    selection
        .iter()
        .map(|c| (c.name.clone(), c.risk_level.stability()))
        .collect()
}

/// Each career's share of the selection's total earnings, in percent.
///
/// A zero total is replaced by 1 so an all-zero selection scores 0 everywhere.
pub fn diversification_scores(selection: &CareerSelection) -> Vec<(String, f64)> {
    let total = selection.total_earnings();
    let denom = if total == 0.0 { 1.0 } else { total };

    selection
        .iter()
        .map(|c| (c.name.clone(), c.base_earning.amount() / denom * 100.0))
        .collect()
}

pub fn career_scores(selection: &CareerSelection) -> Vec<CareerScores> {
    stability_scores(selection)
        .into_iter()
        .zip(diversification_scores(selection))
        .map(|((name, stability), (_, diversification_pct))| CareerScores {
            name,
            stability,
            diversification_pct,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::CareerInput;
    use careernav_core::{AnnualEarnings, RiskLevel};
    use proptest::prelude::*;

    fn selection(rows: &[(&str, f64, u8)]) -> CareerSelection {
        CareerSelection::new(
            rows.iter()
                .map(|(n, e, r)| {
                    CareerInput::new(*n, AnnualEarnings::new(*e).unwrap(), RiskLevel::new(*r).unwrap())
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn diversification_splits_by_share_of_total() {
        let sel = selection(&[("A", 60000.0, 3), ("B", 40000.0, 7)]);
        let scores = diversification_scores(&sel);
        assert_eq!(scores[0].0, "A");
        assert!((scores[0].1 - 60.0).abs() < 1e-9);
        assert_eq!(scores[1].0, "B");
        assert!((scores[1].1 - 40.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_earnings_score_zero_without_dividing_by_zero() {
        let sel = selection(&[("A", 0.0, 3), ("B", 0.0, 7)]);
        for (_, pct) in diversification_scores(&sel) {
            assert_eq!(pct, 0.0);
        }
    }

    #[test]
    fn stability_is_ten_minus_risk() {
        let sel = selection(&[("A", 1.0, 1), ("B", 1.0, 10)]);
        assert_eq!(
            stability_scores(&sel),
            vec![("A".to_string(), 9), ("B".to_string(), 0)]
        );
    }

    #[test]
    fn combined_scores_keep_selection_order() {
        let sel = selection(&[("Lecturing", 50000.0, 2), ("Consulting", 150000.0, 6)]);
        let scores = career_scores(&sel);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].name, "Lecturing");
        assert_eq!(scores[0].stability, 8);
        assert!((scores[0].diversification_pct - 25.0).abs() < 1e-9);
        assert_eq!(scores[1].name, "Consulting");
        assert_eq!(scores[1].stability, 4);
    }

    #[test]
    fn empty_selection_has_no_scores() {
        assert!(career_scores(&CareerSelection::empty()).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: for a positive total, percentages sum to 100.
        #[test]
        fn diversification_sums_to_one_hundred(
            earnings in prop::collection::vec(0u32..1_000_000u32, 1..8)
        ) {
            prop_assume!(earnings.iter().any(|e| *e > 0));
            let rows: Vec<CareerInput> = earnings
                .iter()
                .enumerate()
                .map(|(i, e)| CareerInput::new(
                    format!("career-{i}"),
                    AnnualEarnings::new(f64::from(*e)).unwrap(),
                    RiskLevel::default(),
                ))
                .collect();
            let sel = CareerSelection::new(rows).unwrap();

            let sum: f64 = diversification_scores(&sel).iter().map(|(_, p)| p).sum();
            prop_assert!((sum - 100.0).abs() < 1e-6);
        }
    }
}
