use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{PreferenceWeights, Recommendation};

/// Request to compute recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    /// Free-text current location; required non-empty, mirrors the UI gate.
    #[validate(length(min = 1))]
    pub location: String,
    pub preferences: PreferenceWeights,
}

/// Request to save a user profile to the remote store
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveProfileRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(alias = "home_location", rename = "homeLocation", default)]
    pub home_location: Option<String>,
}

/// Request to persist a (preferences, recommendations) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveUserDataRequest {
    pub preferences: PreferenceWeights,
    pub recommendations: Vec<Recommendation>,
}
