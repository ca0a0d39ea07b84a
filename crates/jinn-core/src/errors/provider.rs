// ABOUTME: Workout data source error types for Hevy and file-backed providers
// ABOUTME: Structured errors carrying the provider name and HTTP status where relevant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised while fetching workout history
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No API key was configured for a provider that requires one
    #[error("{provider}: no API key configured")]
    MissingCredentials {
        /// Provider name
        provider: &'static str,
    },

    /// The provider rejected the API key (HTTP 401)
    #[error("{provider}: invalid API key ({provider} returned 401 Unauthorized)")]
    AuthenticationFailed {
        /// Provider name
        provider: &'static str,
    },

    /// The provider answered with a non-success status
    #[error("{provider} API error {status}: {message}")]
    ApiError {
        /// Provider name
        provider: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body excerpt
        message: String,
    },

    /// The request never produced a response
    #[error("{provider}: network error: {message}")]
    Network {
        /// Provider name
        provider: &'static str,
        /// Transport error description
        message: String,
    },

    /// The response or file was not valid workout JSON
    #[error("{provider}: response was not valid workout JSON: {message}")]
    Parse {
        /// Provider name
        provider: &'static str,
        /// Decoder error description
        message: String,
    },

    /// Reading a local workout file failed
    #[error("{provider}: failed to read {path}: {message}")]
    Io {
        /// Provider name
        provider: &'static str,
        /// Path that could not be read
        path: String,
        /// I/O error description
        message: String,
    },
}

impl ProviderError {
    /// Name of the provider that produced this error
    #[must_use]
    pub const fn provider(&self) -> &'static str {
        match self {
            Self::MissingCredentials { provider }
            | Self::AuthenticationFailed { provider }
            | Self::ApiError { provider, .. }
            | Self::Network { provider, .. }
            | Self::Parse { provider, .. }
            | Self::Io { provider, .. } => provider,
        }
    }
}

/// Result alias for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
