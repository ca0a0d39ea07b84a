// ABOUTME: Command modules for jinn-cli
// ABOUTME: Planning, listing, and progress recomputation plus data source selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod list;
pub mod plan;
pub mod progress;

use std::sync::Arc;

use tracing::info;
use volume_jinn::config::JinnConfig;
use volume_jinn::errors::AppResult;
use volume_jinn::providers::{
    initialize_shared_client, FileDataSource, HevyProvider, WorkoutDataSource,
};

use crate::SourceArgs;

/// Open the JSON export if one was given, otherwise the Hevy API
pub async fn open_source(
    config: &JinnConfig,
    args: &SourceArgs,
) -> AppResult<Arc<dyn WorkoutDataSource>> {
    if let Some(path) = &args.input {
        info!(path = %path.display(), "reading workouts from file");
        return Ok(Arc::new(FileDataSource::open(path).await?));
    }

    initialize_shared_client(config.hevy.timeout_secs, config.hevy.connect_timeout_secs);
    let mut provider_config = config.hevy.provider_config();
    if let Some(key) = &args.api_key {
        provider_config.api_key = Some(key.clone());
    }
    Ok(Arc::new(HevyProvider::new(provider_config)))
}
