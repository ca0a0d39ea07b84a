// ABOUTME: Volume calculator re-exported from jinn-core
// ABOUTME: Shared by the optimizer and by callers recomputing edited plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use jinn_core::volume::*;
