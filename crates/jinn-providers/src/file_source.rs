// ABOUTME: Offline workout data source backed by a JSON export on disk
// ABOUTME: Accepts the Hevy workouts document shape and serves it newest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Reverse;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, instrument};

use crate::constants::hevy::PAGE_SIZE;
use crate::core::WorkoutDataSource;
use crate::errors::provider::{ProviderError, ProviderResult};
use crate::hevy::provider::parse_page;
use crate::models::WorkoutRecord;

const PROVIDER_NAME: &str = "file";

/// Workouts loaded once from a `{"workouts": [...]}` document
///
/// The "recent" page holds as many workouts as one Hevy page, so file-backed
/// planning sees the same window as the live API.
#[derive(Debug, Clone)]
pub struct FileDataSource {
    workouts: Vec<WorkoutRecord>,
}

impl FileDataSource {
    /// Read and parse a workouts document
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Io` if the file cannot be read and
    /// `ProviderError::Parse` if it is not a workouts document.
    #[instrument(fields(provider = PROVIDER_NAME))]
    pub async fn open(path: &Path) -> ProviderResult<Self> {
        let body = fs::read_to_string(path)
            .await
            .map_err(|e| ProviderError::Io {
                provider: PROVIDER_NAME,
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        let source = Self::from_json(&body)?;
        debug!(workouts = source.workouts.len(), "loaded workout export");
        Ok(source)
    }

    /// Parse a workouts document already in memory
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Parse` if `body` is not a workouts document.
    pub fn from_json(body: &str) -> ProviderResult<Self> {
        let page = parse_page(body).map_err(|e| match e {
            ProviderError::Parse { message, .. } => ProviderError::Parse {
                provider: PROVIDER_NAME,
                message,
            },
            other => other,
        })?;
        Ok(Self::from_records(page.into_records()))
    }

    /// Serve the given records; they are re-sorted newest first
    #[must_use]
    pub fn from_records(mut workouts: Vec<WorkoutRecord>) -> Self {
        workouts.sort_by_key(|w| Reverse(w.event_time()));
        Self { workouts }
    }

    /// Every loaded workout, newest first
    #[must_use]
    pub fn workouts(&self) -> &[WorkoutRecord] {
        &self.workouts
    }
}

#[async_trait]
impl WorkoutDataSource for FileDataSource {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn recent_workouts(&self) -> ProviderResult<Vec<WorkoutRecord>> {
        Ok(self
            .workouts
            .iter()
            .take(PAGE_SIZE as usize)
            .cloned()
            .collect())
    }

    async fn workout_history(&self) -> ProviderResult<Vec<WorkoutRecord>> {
        Ok(self.workouts.clone())
    }
}
