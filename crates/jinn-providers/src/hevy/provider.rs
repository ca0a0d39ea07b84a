// ABOUTME: Hevy REST API data source implementing WorkoutDataSource
// ABOUTME: Pages GET /workouts with the api-key header and maps status codes to ProviderError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Hevy `WorkoutDataSource` implementation
//!
//! Requests are plain `GET {base}/workouts?page=N&pageSize=10` calls
//! authenticated by the `api-key` header. There is no retry and no caching:
//! a failed request surfaces as a [`ProviderError`] on the first attempt.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use super::api::WorkoutsPage;
use crate::constants::hevy::{
    API_KEY_HEADER, DEFAULT_BASE_URL, DEFAULT_MAX_PAGES, ERROR_BODY_EXCERPT_CHARS, PAGE_SIZE,
    PROVIDER_NAME,
};
use crate::core::WorkoutDataSource;
use crate::errors::provider::{ProviderError, ProviderResult};
use crate::http_client::shared_client;
use crate::models::WorkoutRecord;

/// Connection settings for the Hevy API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HevyProviderConfig {
    /// Personal API key; requests fail with `MissingCredentials` without one
    pub api_key: Option<String>,
    /// API base URL without the trailing `/workouts`
    pub base_url: String,
    /// Upper bound on pages walked by `workout_history`
    pub max_pages: u32,
}

impl Default for HevyProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl HevyProviderConfig {
    /// Default settings with the given API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }
}

/// Workout history from the Hevy REST API
pub struct HevyProvider {
    config: HevyProviderConfig,
    client: &'static Client,
}

impl HevyProvider {
    /// Create a provider using the shared HTTP client
    #[must_use]
    pub fn new(config: HevyProviderConfig) -> Self {
        Self {
            config,
            client: shared_client(),
        }
    }

    /// Connection settings in use
    #[must_use]
    pub const fn config(&self) -> &HevyProviderConfig {
        &self.config
    }

    fn workouts_url(&self) -> String {
        format!("{}/workouts", self.config.base_url.trim_end_matches('/'))
    }

    /// Fetch one page of workouts (1-based)
    ///
    /// # Errors
    ///
    /// - `MissingCredentials` if no API key is configured
    /// - `Network` if the request produced no response
    /// - `AuthenticationFailed` on HTTP 401
    /// - `ApiError` on any other non-success status
    /// - `Parse` if the body is not a workouts page
    #[instrument(skip(self), fields(provider = PROVIDER_NAME, api_call = "get_workouts"))]
    pub async fn fetch_page(&self, page: u32) -> ProviderResult<WorkoutsPage> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ProviderError::MissingCredentials {
                provider: PROVIDER_NAME,
            })?;

        let response = self
            .client
            .get(self.workouts_url())
            .query(&[("page", page), ("pageSize", PAGE_SIZE)])
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(|e| ProviderError::Network {
                provider: PROVIDER_NAME,
                message: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!("Hevy rejected the API key");
            return Err(ProviderError::AuthenticationFailed {
                provider: PROVIDER_NAME,
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                provider: PROVIDER_NAME,
                status: status.as_u16(),
                message: body_excerpt(&body),
            });
        }

        let body = response.text().await.map_err(|e| ProviderError::Network {
            provider: PROVIDER_NAME,
            message: e.to_string(),
        })?;
        parse_page(&body)
    }
}

/// Decode a workouts page
///
/// # Errors
///
/// Returns `ProviderError::Parse` if the body is not a workouts document.
pub fn parse_page(body: &str) -> ProviderResult<WorkoutsPage> {
    serde_json::from_str(body).map_err(|e| ProviderError::Parse {
        provider: PROVIDER_NAME,
        message: e.to_string(),
    })
}

/// First characters of an error body, on a char boundary
#[must_use]
pub fn body_excerpt(body: &str) -> String {
    body.chars().take(ERROR_BODY_EXCERPT_CHARS).collect()
}

#[async_trait]
impl WorkoutDataSource for HevyProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn recent_workouts(&self) -> ProviderResult<Vec<WorkoutRecord>> {
        Ok(self.fetch_page(1).await?.into_records())
    }

    async fn workout_history(&self) -> ProviderResult<Vec<WorkoutRecord>> {
        let mut history = Vec::new();
        for page in 1..=self.config.max_pages.max(1) {
            let batch = self.fetch_page(page).await?;
            let has_next = batch.has_next();
            let count = batch.workouts.len();
            history.extend(batch.into_records());
            debug!(page, count, has_next, "fetched Hevy workout page");
            if !has_next || count == 0 {
                break;
            }
        }
        Ok(history)
    }
}
