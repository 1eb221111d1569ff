use serde::{Deserialize, Serialize};

/// The five lifestyle criteria a user can weight.
///
/// Declaration order is significant: match reasons are emitted in this order
/// and the order is part of the engine's deterministic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Hospitals,
    Schools,
    Parks,
    Safety,
    CommunityCenters,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Hospitals,
        Category::Schools,
        Category::Parks,
        Category::Safety,
        Category::CommunityCenters,
    ];

    /// Human-readable label used in match-reason strings.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Hospitals => "hospital proximity",
            Category::Schools => "school quality",
            Category::Parks => "park access",
            Category::Safety => "safety level",
            Category::CommunityCenters => "community centers",
        }
    }
}

/// User-assigned importance per category, each on a 0-100 scale.
///
/// All five fields are required on the wire; a missing key is a
/// deserialization error, not a defaulted weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceWeights {
    pub hospitals: u8,
    pub schools: u8,
    pub parks: u8,
    pub safety: u8,
    #[serde(rename = "communityCenters")]
    pub community_centers: u8,
}

impl PreferenceWeights {
    /// Upper bound of the weight scale (inclusive).
    pub const MAX_WEIGHT: u8 = 100;

    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Hospitals => self.hospitals,
            Category::Schools => self.schools,
            Category::Parks => self.parks,
            Category::Safety => self.safety,
            Category::CommunityCenters => self.community_centers,
        }
    }

    /// Sum of all five weights.
    pub fn total(&self) -> u32 {
        Category::ALL.iter().map(|c| self.get(*c) as u32).sum()
    }

    /// Uniform weights at the midpoint of the scale (the UI default).
    pub fn balanced() -> Self {
        Self {
            hospitals: 50,
            schools: 50,
            parks: 50,
            safety: 50,
            community_centers: 50,
        }
    }
}

/// Fixed per-category quality scores for an area (1-10 scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaScores {
    pub hospitals: u8,
    pub schools: u8,
    pub parks: u8,
    pub safety: u8,
    #[serde(rename = "communityCenters")]
    pub community_centers: u8,
}

impl AreaScores {
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Hospitals => self.hospitals,
            Category::Schools => self.schools,
            Category::Parks => self.parks,
            Category::Safety => self.safety,
            Category::CommunityCenters => self.community_centers,
        }
    }
}

/// A candidate area from the static catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub scores: AreaScores,
    pub population: u32,
    pub mayor: String,
    pub lifestyle: String,
    #[serde(rename = "funFact")]
    pub fun_fact: String,
}

/// Engine output: an area annotated with its match score and reasons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
    pub population: u32,
    pub mayor: String,
    pub lifestyle: String,
    #[serde(rename = "funFact")]
    pub fun_fact: String,
}

/// User profile held by the remote profile store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(rename = "homeLocation", default)]
    pub home_location: Option<String>,
}

/// Saved (preferences, recommendations) pair in the remote store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub preferences: PreferenceWeights,
    pub recommendations: Vec<Recommendation>,
    #[serde(rename = "savedAt")]
    pub saved_at: chrono::DateTime<chrono::Utc>,
}

/// One entry in a user's search history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: String,
    pub location: String,
    pub preferences: PreferenceWeights,
    pub recommendations: Vec<Recommendation>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
