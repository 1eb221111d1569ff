//! Relocate Algo - recommendation scoring service for the Relocate Right app
//!
//! This library provides the recommendation engine behind Relocate Right: a
//! pure scoring function that ranks a fixed catalog of candidate areas
//! against a user's weighted lifestyle preferences, plus the HTTP surface,
//! search history, and remote profile-store plumbing around it.

pub mod config;
pub mod core;
pub mod data;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{EngineError, Recommender};
pub use data::AreaCatalog;
pub use models::{Area, Category, PreferenceWeights, Recommendation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let catalog = AreaCatalog::builtin();
        let result = Recommender::with_defaults()
            .recommend(&PreferenceWeights::balanced(), catalog.areas())
            .unwrap();
        assert_eq!(result.len(), 3);
    }
}
