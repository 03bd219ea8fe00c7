// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Segmentation search: where the rubber meets the road.
//!
//! The match index says which words start where. This module strings them
//! together into every tiling of the subject, scores each tiling, and keeps
//! the results ranked as they arrive.
//!
//! - `iterative`: the engine. Explicit stack, per-position memo, ceiling.
//! - `recursive`: the textbook definition, used as a test oracle.
//! - `accumulator`: the sorted result list with its pruning threshold.

pub mod accumulator;
pub mod iterative;
pub mod recursive;

pub use accumulator::HashTagAccumulator;
pub use iterative::{
    suggest_hashtags, suggest_hashtags_with_stats, MemoCache, SearchLimits, SearchStats,
    DEFAULT_RESULT_CEILING,
};
pub use recursive::compute_hashtags;
