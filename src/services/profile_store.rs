use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use crate::models::{UserData, UserProfile};

/// Errors that can occur when interacting with the remote profile store
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the remote profile/data store.
///
/// The store owns durable user state; this service only proxies four
/// operations to it:
/// - fetch / save a user profile
/// - fetch / save a (preferences, recommendations) pair
pub struct ProfileStoreClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl ProfileStoreClient {
    /// Create a new store client
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    fn user_url(&self, user_id: &str, resource: &str) -> String {
        format!(
            "{}/users/{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(user_id),
            resource
        )
    }

    /// Fetch the profile for a user
    pub async fn get_profile(&self, user_id: &str) -> Result<UserProfile, ProfileStoreError> {
        let url = self.user_url(user_id, "profile");
        tracing::debug!("Fetching profile from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(ProfileStoreError::NotFound(format!(
                    "Profile not found for user {}",
                    user_id
                )))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(ProfileStoreError::Unauthorized)
            }
            status if !status.is_success() => {
                return Err(ProfileStoreError::ApiError(format!(
                    "Failed to fetch profile: {}",
                    status
                )))
            }
            _ => {}
        }

        response
            .json()
            .await
            .map_err(|e| ProfileStoreError::InvalidResponse(format!("Failed to parse profile: {}", e)))
    }

    /// Save the profile for a user
    pub async fn save_profile(
        &self,
        user_id: &str,
        profile: &UserProfile,
    ) -> Result<(), ProfileStoreError> {
        let url = self.user_url(user_id, "profile");

        let response = self
            .client
            .put(&url)
            .header("X-Api-Key", &self.api_key)
            .json(profile)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ProfileStoreError::Unauthorized);
        }
        if !response.status().is_success() {
            return Err(ProfileStoreError::ApiError(format!(
                "Failed to save profile: {}",
                response.status()
            )));
        }

        tracing::debug!("Saved profile for user {}", user_id);
        Ok(())
    }

    /// Fetch the saved (preferences, recommendations) pair for a user.
    ///
    /// A user who has never saved anything yields `Ok(None)`.
    pub async fn get_user_data(
        &self,
        user_id: &str,
    ) -> Result<Option<UserData>, ProfileStoreError> {
        let url = self.user_url(user_id, "data");
        tracing::debug!("Fetching user data from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => return Ok(None),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(ProfileStoreError::Unauthorized)
            }
            status if !status.is_success() => {
                return Err(ProfileStoreError::ApiError(format!(
                    "Failed to fetch user data: {}",
                    status
                )))
            }
            _ => {}
        }

        response
            .json()
            .await
            .map(Some)
            .map_err(|e| {
                ProfileStoreError::InvalidResponse(format!("Failed to parse user data: {}", e))
            })
    }

    /// Save the (preferences, recommendations) pair for a user
    pub async fn save_user_data(
        &self,
        user_id: &str,
        data: &UserData,
    ) -> Result<(), ProfileStoreError> {
        let url = self.user_url(user_id, "data");

        let response = self
            .client
            .put(&url)
            .header("X-Api-Key", &self.api_key)
            .json(data)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ProfileStoreError::Unauthorized);
        }
        if !response.status().is_success() {
            return Err(ProfileStoreError::ApiError(format!(
                "Failed to save user data: {}",
                response.status()
            )));
        }

        tracing::debug!("Saved user data for user {}", user_id);
        Ok(())
    }
}
