// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The request pipeline shared by the CLI and the HTTP server.
//!
//! ```text
//! input ──guard──▶ Vocabulary::find_matches ──▶ StringMatches::build
//!                                                     │
//!        CompleteResponse ◀── truncate(count) ◀── suggest_hashtags
//! ```
//!
//! Both phases are timed separately and reported in the response.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::index::StringMatches;
use crate::matcher::Vocabulary;
use crate::scoring::FrequencyTable;
use crate::search::{suggest_hashtags_with_stats, SearchLimits, DEFAULT_RESULT_CEILING};
use crate::types::{HashTag, Match};

/// Inputs longer than this (in characters) get an empty result, unsearched.
pub const MAX_INPUT_CHARS: usize = 60;

/// Results per input when the caller does not say.
pub const DEFAULT_COUNT: usize = 5;

// =============================================================================
// WIRE TYPES
// =============================================================================

/// One suggested hashtag on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashTagDto {
    pub tag: String,
    pub score: f64,
    pub words: Vec<String>,
    pub scores: Vec<f64>,
}

impl From<&HashTag> for HashTagDto {
    fn from(tag: &HashTag) -> Self {
        Self {
            tag: tag.tag(),
            score: tag.score(),
            words: tag.words().map(String::from).collect(),
            scores: tag.scores().to_vec(),
        }
    }
}

/// One vocabulary match, reported in debug mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDto {
    pub pos: usize,
    pub word: String,
    pub score: f64,
}

impl From<&Match> for MatchDto {
    fn from(m: &Match) -> Self {
        Self {
            pos: m.pos,
            word: m.text.clone(),
            score: m.score,
        }
    }
}

/// Suggestions for a single input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteResponse {
    pub input: String,
    /// The count that was asked for; `hashtags` may hold fewer.
    pub count: usize,
    pub hashtags: Vec<HashTagDto>,
    /// Every scored match, only when debugging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<MatchDto>>,
    pub match_duration_ns: u64,
    pub suggest_duration_ns: u64,
}

impl CompleteResponse {
    fn empty(input: &str, count: usize, debug: bool) -> Self {
        Self {
            input: input.to_string(),
            count,
            hashtags: Vec::new(),
            matches: debug.then(Vec::new),
            match_duration_ns: 0,
            suggest_duration_ns: 0,
        }
    }
}

/// Batch request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteRequest {
    pub inputs: Vec<String>,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub debug: bool,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

// =============================================================================
// SUGGESTER
// =============================================================================

/// Vocabulary plus optional frequencies: everything a request needs.
///
/// Immutable after construction. Wrap in an `Arc` to share across threads.
#[derive(Debug, Clone)]
pub struct Suggester {
    vocabulary: Vocabulary,
    frequency: Option<FrequencyTable>,
    result_ceiling: usize,
}

impl Suggester {
    pub fn new(vocabulary: Vocabulary, frequency: Option<FrequencyTable>) -> Self {
        Self {
            vocabulary,
            frequency,
            result_ceiling: DEFAULT_RESULT_CEILING,
        }
    }

    /// Override the per-search ceiling on completed segmentations.
    pub fn with_result_ceiling(mut self, result_ceiling: usize) -> Self {
        self.result_ceiling = result_ceiling;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn frequency(&self) -> Option<&FrequencyTable> {
        self.frequency.as_ref()
    }

    /// Scored match index for `input`.
    pub fn match_index(&self, input: &str) -> StringMatches {
        StringMatches::build(
            input,
            self.vocabulary.find_matches(input),
            self.frequency.as_ref(),
        )
    }

    /// Top `count` hashtags for `input`, best first.
    pub fn suggest(&self, input: &str, count: usize) -> Vec<HashTag> {
        if input.chars().count() > MAX_INPUT_CHARS {
            return Vec::new();
        }
        let index = self.match_index(input);
        let (mut tags, _) = suggest_hashtags_with_stats(&index, &self.limits(count));
        tags.truncate(count);
        tags
    }

    /// Full response for `input`, with timings and optionally the matches.
    pub fn complete(&self, input: &str, count: usize, debug: bool) -> CompleteResponse {
        if input.chars().count() > MAX_INPUT_CHARS {
            tracing::debug!(input, max = MAX_INPUT_CHARS, "input too long, skipping");
            return CompleteResponse::empty(input, count, debug);
        }

        let start = Instant::now();
        let index = self.match_index(input);
        let match_duration_ns = elapsed_ns(start);
        tracing::debug!(
            input,
            matches = index.match_count(),
            duration_ns = match_duration_ns,
            "match"
        );

        let start = Instant::now();
        let (mut tags, stats) = suggest_hashtags_with_stats(&index, &self.limits(count));
        tags.truncate(count);
        let hashtags: Vec<HashTagDto> = tags.iter().map(HashTagDto::from).collect();
        let suggest_duration_ns = elapsed_ns(start);
        tracing::debug!(
            input,
            found = stats.completed,
            steps = stats.steps,
            duration_ns = suggest_duration_ns,
            "suggest"
        );

        CompleteResponse {
            input: input.to_string(),
            count,
            hashtags,
            matches: debug.then(|| index.iter().map(MatchDto::from).collect()),
            match_duration_ns,
            suggest_duration_ns,
        }
    }

    /// One response per input, in request order.
    pub fn complete_all(&self, request: &CompleteRequest) -> Vec<CompleteResponse> {
        request
            .inputs
            .iter()
            .map(|input| self.complete(input, request.count, request.debug))
            .collect()
    }

    fn limits(&self, count: usize) -> SearchLimits {
        SearchLimits {
            max_results: count,
            result_ceiling: self.result_ceiling,
        }
    }
}

fn elapsed_ns(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX)
}
