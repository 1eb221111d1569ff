// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Area, AreaScores, Category, PreferenceWeights, Recommendation, SearchRecord, UserData,
    UserProfile,
};
pub use requests::{RecommendRequest, SaveProfileRequest, SaveUserDataRequest};
pub use responses::{
    AckResponse, ErrorResponse, HealthResponse, HistoryResponse, RecommendResponse,
};
