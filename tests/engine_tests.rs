// Engine behavior tests for Relocate Algo

use relocate_algo::core::{score_area, Recommender, BALANCED_REASON};
use relocate_algo::models::{Area, AreaScores, Category, PreferenceWeights};

fn area(id: &str, name: &str, scores: [u8; 5]) -> Area {
    Area {
        id: id.to_string(),
        name: name.to_string(),
        latitude: 40.7128,
        longitude: -74.0060,
        scores: AreaScores {
            hospitals: scores[0],
            schools: scores[1],
            parks: scores[2],
            safety: scores[3],
            community_centers: scores[4],
        },
        population: 10_000,
        mayor: "Test Mayor".to_string(),
        lifestyle: "Testing".to_string(),
        fun_fact: "None".to_string(),
    }
}

fn weights(values: [u8; 5]) -> PreferenceWeights {
    PreferenceWeights {
        hospitals: values[0],
        schools: values[1],
        parks: values[2],
        safety: values[3],
        community_centers: values[4],
    }
}

#[test]
fn test_hospital_only_weighting() {
    // Area A is hospital-heavy, area B is not.
    let catalog = vec![
        area("a", "A", [10, 5, 3, 5, 9]),
        area("b", "B", [4, 9, 10, 9, 5]),
    ];
    let prefs = weights([100, 0, 0, 0, 0]);

    let result = Recommender::with_defaults()
        .recommend(&prefs, &catalog)
        .unwrap();

    assert_eq!(result.len(), 2);

    // maxPossible = 10 * 100 = 1000; A scores 1000, B scores 400.
    assert_eq!(result[0].name, "A");
    assert_eq!(result[0].match_score, 100.0);
    assert!(result[0]
        .match_reasons
        .contains(&"Excellent hospital proximity (10/10)".to_string()));

    assert_eq!(result[1].name, "B");
    assert_eq!(result[1].match_score, 40.0);
    assert_eq!(result[1].match_reasons, vec![BALANCED_REASON]);
}

#[test]
fn test_scores_always_within_bounds() {
    let engine = Recommender::with_defaults();
    let catalog = vec![
        area("1", "Worst", [1, 1, 1, 1, 1]),
        area("2", "Best", [10, 10, 10, 10, 10]),
        area("3", "Mixed", [1, 10, 1, 10, 1]),
        area("4", "Mid", [5, 6, 4, 7, 3]),
    ];

    let vectors = [
        [100, 100, 100, 100, 100],
        [1, 0, 0, 0, 0],
        [0, 0, 0, 0, 1],
        [100, 0, 100, 0, 100],
        [33, 67, 50, 40, 60],
        [1, 1, 1, 1, 1],
        [99, 2, 57, 13, 88],
    ];

    for vector in vectors {
        let result = engine.recommend(&weights(vector), &catalog).unwrap();
        assert_eq!(result.len(), 3);
        for rec in &result {
            assert!(
                rec.match_score >= 0.0 && rec.match_score <= 100.0,
                "score {} out of range for weights {:?}",
                rec.match_score,
                vector
            );
            assert!(!rec.match_reasons.is_empty());
            assert!(rec.match_reasons.len() <= 3);
        }
    }
}

#[test]
fn test_monotonicity_in_weighted_category() {
    let prefs = weights([30, 20, 0, 50, 0]);

    let mut previous = -1.0;
    for safety in 1..=10 {
        let candidate = area("x", "X", [5, 5, 5, safety, 5]);
        let (score, _) = score_area(&candidate, &prefs, 10);
        assert!(
            score >= previous,
            "score decreased ({} -> {}) when safety rose to {}",
            previous,
            score,
            safety
        );
        previous = score;
    }
}

#[test]
fn test_zero_weight_category_does_not_affect_score() {
    let prefs = weights([100, 0, 50, 0, 0]);

    let low_schools = area("x", "X", [7, 1, 6, 5, 5]);
    let high_schools = area("x", "X", [7, 10, 6, 5, 5]);

    let (low, _) = score_area(&low_schools, &prefs, 10);
    let (high, _) = score_area(&high_schools, &prefs, 10);

    assert_eq!(low, high);
}

#[test]
fn test_reason_order_follows_category_declaration() {
    // Parks and safety qualify before community centers is considered.
    let candidate = area("x", "X", [2, 2, 9, 9, 9]);
    let prefs = weights([100, 100, 100, 100, 100]);

    let (_, reasons) = score_area(&candidate, &prefs, 10);

    assert_eq!(
        reasons,
        vec![
            format!("Excellent {} (9/10)", Category::Parks.label()),
            format!("Excellent {} (9/10)", Category::Safety.label()),
            format!("Excellent {} (9/10)", Category::CommunityCenters.label()),
        ]
    );
}

#[test]
fn test_custom_scale() {
    // A 1-5 scale engine keeps the same relative thresholds: 4/5 = 0.8.
    let engine = Recommender::new(5, 3);
    let catalog = vec![area("1", "A", [4, 2, 2, 2, 2])];
    let prefs = weights([100, 0, 0, 0, 0]);

    let result = engine.recommend(&prefs, &catalog).unwrap();

    assert_eq!(result[0].match_score, 80.0);
    assert_eq!(
        result[0].match_reasons,
        vec!["Excellent hospital proximity (4/5)"]
    );
}

#[test]
fn test_top_n_never_exceeds_catalog() {
    let engine = Recommender::with_defaults();
    let catalog = vec![
        area("1", "A", [5, 5, 5, 5, 5]),
        area("2", "B", [6, 6, 6, 6, 6]),
    ];

    let result = engine
        .recommend(&PreferenceWeights::balanced(), &catalog)
        .unwrap();

    assert_eq!(result.len(), 2);
}
