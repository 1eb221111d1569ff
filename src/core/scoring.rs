use crate::models::{Area, Category, PreferenceWeights};

/// Weight at or above which a top-scoring category earns an "Excellent" reason.
pub const EXCELLENT_WEIGHT_BAND: u8 = 60;
/// Weight at or above which a well-scoring category earns a "Good" reason.
pub const GOOD_WEIGHT_BAND: u8 = 40;

// Area-score thresholds expressed as fractions of the scale maximum, so the
// 8-of-10 / 7-of-10 boundaries hold on any configured scale.
const EXCELLENT_SCORE_FRACTION: f64 = 0.8;
const GOOD_SCORE_FRACTION: f64 = 0.7;

/// Maximum number of reason strings attached to one recommendation.
pub const MAX_REASONS: usize = 3;

/// Fallback reason when no weighted category qualifies.
pub const BALANCED_REASON: &str = "Balanced scores across your preferences";

/// Score an area against the user's weights.
///
/// Returns the normalized match score (0-100, one decimal place) and up to
/// [`MAX_REASONS`] human-readable reasons, collected in category-declaration
/// order. Categories with weight 0 contribute nothing: not to the weighted
/// sum, not to the normalization ceiling, not to reason generation.
///
/// Callers must ensure `weights.total() > 0`; the all-zero case is handled
/// upstream by the engine's neutral fallback.
pub fn score_area(
    area: &Area,
    weights: &PreferenceWeights,
    scale_max: u8,
) -> (f64, Vec<String>) {
    let total_weight = weights.total();
    debug_assert!(total_weight > 0, "all-zero weights must be handled upstream");

    let mut weighted: u64 = 0;
    let mut reasons: Vec<String> = Vec::new();

    for category in Category::ALL {
        let weight = weights.get(category);
        if weight == 0 {
            continue;
        }

        let area_score = area.scores.get(category);
        weighted += area_score as u64 * weight as u64;

        if reasons.len() < MAX_REASONS {
            let fraction = area_score as f64 / scale_max as f64;
            if fraction >= EXCELLENT_SCORE_FRACTION && weight >= EXCELLENT_WEIGHT_BAND {
                reasons.push(format!(
                    "Excellent {} ({}/{})",
                    category.label(),
                    area_score,
                    scale_max
                ));
            } else if fraction >= GOOD_SCORE_FRACTION && weight >= GOOD_WEIGHT_BAND {
                reasons.push(format!(
                    "Good {} ({}/{})",
                    category.label(),
                    area_score,
                    scale_max
                ));
            }
        }
    }

    // Normalize against the best score achievable under these weights, which
    // keeps the result in [0, 100] no matter how many categories are weighted.
    let max_possible = scale_max as u64 * total_weight as u64;
    let match_score = round1(100.0 * weighted as f64 / max_possible as f64);

    if reasons.is_empty() {
        reasons.push(BALANCED_REASON.to_string());
    }

    (match_score, reasons)
}

/// Round to one decimal place.
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AreaScores;

    fn test_area(scores: AreaScores) -> Area {
        Area {
            id: "1".to_string(),
            name: "Test Area".to_string(),
            latitude: 40.7128,
            longitude: -74.0060,
            scores,
            population: 10_000,
            mayor: "Test Mayor".to_string(),
            lifestyle: "Testing".to_string(),
            fun_fact: "None".to_string(),
        }
    }

    fn zero_weights() -> PreferenceWeights {
        PreferenceWeights {
            hospitals: 0,
            schools: 0,
            parks: 0,
            safety: 0,
            community_centers: 0,
        }
    }

    #[test]
    fn test_single_category_full_weight() {
        let area = test_area(AreaScores {
            hospitals: 10,
            schools: 5,
            parks: 3,
            safety: 5,
            community_centers: 9,
        });
        let weights = PreferenceWeights {
            hospitals: 100,
            ..zero_weights()
        };

        let (score, reasons) = score_area(&area, &weights, 10);

        assert_eq!(score, 100.0);
        assert_eq!(reasons, vec!["Excellent hospital proximity (10/10)"]);
    }

    #[test]
    fn test_excellent_requires_high_weight() {
        let area = test_area(AreaScores {
            hospitals: 9,
            schools: 1,
            parks: 1,
            safety: 1,
            community_centers: 1,
        });
        // Weight 59 is below the excellent band but above the good band.
        let weights = PreferenceWeights {
            hospitals: 59,
            ..zero_weights()
        };

        let (_, reasons) = score_area(&area, &weights, 10);
        assert_eq!(reasons, vec!["Good hospital proximity (9/10)"]);
    }

    #[test]
    fn test_good_band_boundaries() {
        let area = test_area(AreaScores {
            hospitals: 7,
            schools: 7,
            parks: 1,
            safety: 1,
            community_centers: 1,
        });
        let weights = PreferenceWeights {
            hospitals: 40,
            schools: 39,
            ..zero_weights()
        };

        let (_, reasons) = score_area(&area, &weights, 10);
        // Schools at weight 39 falls below the good band.
        assert_eq!(reasons, vec!["Good hospital proximity (7/10)"]);
    }

    #[test]
    fn test_zero_weight_category_never_generates_reason() {
        let area = test_area(AreaScores {
            hospitals: 10,
            schools: 10,
            parks: 1,
            safety: 1,
            community_centers: 1,
        });
        let weights = PreferenceWeights {
            schools: 100,
            ..zero_weights()
        };

        let (score, reasons) = score_area(&area, &weights, 10);

        // Hospitals score 10 but carry no weight.
        assert_eq!(score, 100.0);
        assert_eq!(reasons, vec!["Excellent school quality (10/10)"]);
    }

    #[test]
    fn test_fallback_reason_when_nothing_qualifies() {
        let area = test_area(AreaScores {
            hospitals: 5,
            schools: 5,
            parks: 5,
            safety: 5,
            community_centers: 5,
        });
        let weights = PreferenceWeights::balanced();

        let (score, reasons) = score_area(&area, &weights, 10);

        assert_eq!(score, 50.0);
        assert_eq!(reasons, vec![BALANCED_REASON]);
    }

    #[test]
    fn test_reasons_capped_at_three() {
        let area = test_area(AreaScores {
            hospitals: 10,
            schools: 10,
            parks: 10,
            safety: 10,
            community_centers: 10,
        });
        let weights = PreferenceWeights {
            hospitals: 100,
            schools: 100,
            parks: 100,
            safety: 100,
            community_centers: 100,
        };

        let (score, reasons) = score_area(&area, &weights, 10);

        assert_eq!(score, 100.0);
        assert_eq!(reasons.len(), 3);
        // First three categories in declaration order.
        assert!(reasons[0].contains("hospital proximity"));
        assert!(reasons[1].contains("school quality"));
        assert!(reasons[2].contains("park access"));
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(33.333333), 33.3);
        assert_eq!(round1(66.666666), 66.7);
        assert_eq!(round1(100.0), 100.0);
        assert_eq!(round1(0.05), 0.1);
    }

    #[test]
    fn test_score_is_one_decimal() {
        let area = test_area(AreaScores {
            hospitals: 7,
            schools: 3,
            parks: 1,
            safety: 1,
            community_centers: 1,
        });
        let weights = PreferenceWeights {
            hospitals: 30,
            schools: 30,
            ..zero_weights()
        };

        let (score, _) = score_area(&area, &weights, 10);
        assert_eq!(round1(score), score);
        assert!(score >= 0.0 && score <= 100.0);
    }
}
