// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how hashtags get their numbers.
//!
//! Each word is scored on its own (`core`), a hashtag's score is the mean of
//! its words, and `ranking` turns those numbers into a total order.

mod core;
pub mod ranking;

pub use self::core::*;
