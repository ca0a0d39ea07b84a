// ABOUTME: Helper modules for jinn-cli
// ABOUTME: Output formatting for plans, phase traces, and progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
