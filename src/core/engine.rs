use thiserror::Error;

use crate::core::scoring::score_area;
use crate::models::{Area, Category, PreferenceWeights, Recommendation};

/// Neutral score given to every fallback recommendation when the user has
/// not weighted any category.
pub const NEUTRAL_MATCH_SCORE: f64 = 50.0;

/// Reason attached to fallback recommendations.
pub const UNSET_PREFERENCES_REASON: &str =
    "Set your preferences to get personalized recommendations";

/// Errors produced by the recommendation engine.
///
/// Malformed input is rejected outright rather than clamped, so the
/// normalization guarantee (scores in 0-100) never depends on a silent
/// correction the caller cannot observe.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("weight for {category:?} is {value}, above the maximum of {max}")]
    WeightOutOfRange {
        category: Category,
        value: u8,
        max: u8,
    },
}

/// Recommendation engine: pure function of a preference vector and a catalog.
///
/// Parameterized by the catalog's score scale and the result cap so it can be
/// exercised against arbitrary synthetic catalogs in tests.
#[derive(Debug, Clone, Copy)]
pub struct Recommender {
    scale_max: u8,
    top_n: usize,
}

impl Recommender {
    pub fn new(scale_max: u8, top_n: usize) -> Self {
        Self { scale_max, top_n }
    }

    /// Engine with the production scale (scores 1-10, top 3 results).
    pub fn with_defaults() -> Self {
        Self::new(10, 3)
    }

    pub fn scale_max(&self) -> u8 {
        self.scale_max
    }

    /// Rank the catalog against the user's weights.
    ///
    /// Deterministic and side-effect free: identical inputs yield identical
    /// output, including reason order. Returns at most `top_n` entries,
    /// sorted by match score descending; equal scores keep their relative
    /// catalog order. An empty catalog yields an empty result, and all-zero
    /// weights yield the leading catalog entries at a neutral score.
    pub fn recommend(
        &self,
        weights: &PreferenceWeights,
        catalog: &[Area],
    ) -> Result<Vec<Recommendation>, EngineError> {
        self.validate(weights)?;

        if catalog.is_empty() {
            return Ok(Vec::new());
        }

        if weights.total() == 0 {
            return Ok(catalog
                .iter()
                .take(self.top_n)
                .map(|area| {
                    to_recommendation(
                        area,
                        NEUTRAL_MATCH_SCORE,
                        vec![UNSET_PREFERENCES_REASON.to_string()],
                    )
                })
                .collect());
        }

        let mut scored: Vec<Recommendation> = catalog
            .iter()
            .map(|area| {
                let (match_score, match_reasons) = score_area(area, weights, self.scale_max);
                to_recommendation(area, match_score, match_reasons)
            })
            .collect();

        // sort_by is stable, so ties retain catalog order.
        scored.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored.truncate(self.top_n);
        Ok(scored)
    }

    /// Reject weights outside the declared 0-100 bounds.
    fn validate(&self, weights: &PreferenceWeights) -> Result<(), EngineError> {
        for category in Category::ALL {
            let value = weights.get(category);
            if value > PreferenceWeights::MAX_WEIGHT {
                return Err(EngineError::WeightOutOfRange {
                    category,
                    value,
                    max: PreferenceWeights::MAX_WEIGHT,
                });
            }
        }
        Ok(())
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn to_recommendation(area: &Area, match_score: f64, match_reasons: Vec<String>) -> Recommendation {
    Recommendation {
        id: area.id.clone(),
        name: area.name.clone(),
        latitude: area.latitude,
        longitude: area.longitude,
        match_score,
        match_reasons,
        population: area.population,
        mayor: area.mayor.clone(),
        lifestyle: area.lifestyle.clone(),
        fun_fact: area.fun_fact.clone(),
    }
}
