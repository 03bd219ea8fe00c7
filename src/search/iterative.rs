// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Iterative segmentation search: explicit stack, per-position memo.
//!
//! The search walks the match index depth-first from position 0, always
//! trying the best-scoring word at a position first. Instead of recursion it
//! keeps a `Vec<WorkItem>`, so depth and step count stay observable and the
//! whole thing can be cut off by the result ceiling.
//!
//! # How a position gets memoized
//!
//! The first time the search lands on position `q` (a *miss*), it pushes a
//! `Resolve` marker and then one `Explore` item per word at `q`. Everything
//! pushed above the marker explores positions `>= q`, so by the time the
//! marker pops, every way to finish the string from `q` is in the cache and
//! `q` is marked resolved. Any later prefix that reaches `q` (a *hit*) just
//! combines with the cached suffixes.
//!
//! A position is only reused once resolved. Reusing a half-filled entry would
//! silently drop every suffix that goes through a word still being explored.
//!
//! # Where results come from
//!
//! Full hashtags are emitted in exactly two places: when a word ends the
//! string, and on a cache hit. `Resolve` never emits, it only lifts suffixes
//! from `q` up to the position of the word that led there. Each segmentation
//! is therefore emitted once.

use crate::contracts::{check_covers_subject, check_hashtag_well_formed};
use crate::index::StringMatches;
use crate::types::{HashTag, Match};

use super::accumulator::HashTagAccumulator;

/// Default hard cap on completed segmentations per search.
pub const DEFAULT_RESULT_CEILING: usize = 400;

// =============================================================================
// LIMITS AND STATS
// =============================================================================

/// Bounds on a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Results the caller intends to keep. `0` means all of them.
    ///
    /// Completed hashtags that can no longer make this cut are dropped instead
    /// of inserted. Exploration is unaffected, so the top `max_results` are
    /// the same as in an unbounded run.
    pub max_results: usize,
    /// Stop once this many segmentations have been completed.
    pub result_ceiling: usize,
}

impl SearchLimits {
    /// Keep the top `max_results`, default ceiling.
    pub fn top(max_results: usize) -> Self {
        Self {
            max_results,
            ..Self::default()
        }
    }

    /// No result cap and no ceiling. Exponential on adversarial input.
    pub fn unbounded() -> Self {
        Self {
            max_results: 0,
            result_ceiling: usize::MAX,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_results: 0,
            result_ceiling: DEFAULT_RESULT_CEILING,
        }
    }
}

/// What the search did, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Work items popped.
    pub steps: usize,
    /// Largest stack size seen.
    pub peak_stack_depth: usize,
    /// Explore items that reused a resolved position.
    pub cache_hits: usize,
    /// Positions explored for the first time.
    pub cache_misses: usize,
    /// Segmentations completed (kept or pruned).
    pub completed: usize,
    /// Completed segmentations dropped because they could not make the cut.
    pub pruned: usize,
    /// Whether the ceiling stopped the search with work left.
    pub ceiling_hit: bool,
}

// =============================================================================
// MEMO CACHE
// =============================================================================

/// Per-position suffix results: every way found so far to finish the subject
/// from a position, plus the best score among them.
#[derive(Debug, Clone)]
pub struct MemoCache {
    suffixes: Vec<Vec<HashTag>>,
    best: Vec<Option<f64>>,
    resolved: Vec<bool>,
}

impl MemoCache {
    /// Empty cache for a subject of `len` bytes.
    pub fn new(len: usize) -> Self {
        Self {
            suffixes: vec![Vec::new(); len],
            best: vec![None; len],
            resolved: vec![false; len],
        }
    }

    /// Suffixes recorded at `pos`.
    pub fn suffixes(&self, pos: usize) -> &[HashTag] {
        self.suffixes.get(pos).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Best suffix score recorded at `pos`.
    pub fn best_score(&self, pos: usize) -> Option<f64> {
        self.best.get(pos).copied().flatten()
    }

    /// Has every continuation from `pos` been explored?
    pub fn is_resolved(&self, pos: usize) -> bool {
        self.resolved.get(pos).copied().unwrap_or(false)
    }

    fn record(&mut self, pos: usize, suffix: HashTag) {
        let score = suffix.score();
        let best = &mut self.best[pos];
        if best.map_or(true, |b| score > b) {
            *best = Some(score);
        }
        self.suffixes[pos].push(suffix);
    }

    fn mark_resolved(&mut self, pos: usize) {
        self.resolved[pos] = true;
    }
}

// =============================================================================
// SEARCH
// =============================================================================

/// One unit of pending work.
#[derive(Debug, Clone)]
enum WorkItem<'a> {
    /// `prefix` ends exactly where `candidate` begins: try extending with it.
    Explore {
        prefix: HashTag,
        candidate: &'a Match,
    },
    /// Everything from `candidate.end()` onward has been explored: lift those
    /// suffixes to `candidate.pos` and mark `candidate.end()` resolved.
    Resolve { candidate: &'a Match },
}

/// Ranked hashtags for the whole subject.
///
/// Returns every segmentation found (subject to `limits`), best first. An
/// unsegmentable subject yields an empty list.
pub fn suggest_hashtags(index: &StringMatches, limits: &SearchLimits) -> Vec<HashTag> {
    suggest_hashtags_with_stats(index, limits).0
}

/// [`suggest_hashtags`], also reporting what the search did.
pub fn suggest_hashtags_with_stats(
    index: &StringMatches,
    limits: &SearchLimits,
) -> (Vec<HashTag>, SearchStats) {
    let mut search = Search::new(index, *limits);
    search.run();

    tracing::trace!(
        subject = index.subject(),
        steps = search.stats.steps,
        peak_stack_depth = search.stats.peak_stack_depth,
        cache_hits = search.stats.cache_hits,
        completed = search.stats.completed,
        pruned = search.stats.pruned,
        best_from_start = ?search.cache.best_score(0),
        "search finished"
    );
    if search.stats.ceiling_hit {
        tracing::debug!(
            subject = index.subject(),
            ceiling = limits.result_ceiling,
            "result ceiling reached, results truncated"
        );
    }

    let stats = search.stats;
    (search.results.into_ranked(), stats)
}

struct Search<'a> {
    index: &'a StringMatches,
    limits: SearchLimits,
    stack: Vec<WorkItem<'a>>,
    cache: MemoCache,
    results: HashTagAccumulator,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(index: &'a StringMatches, limits: SearchLimits) -> Self {
        let mut search = Self {
            index,
            limits,
            stack: Vec::new(),
            cache: MemoCache::new(index.len()),
            results: HashTagAccumulator::new(),
            stats: SearchStats::default(),
        };
        search.push_candidates(&HashTag::empty(), 0);
        search
    }

    fn run(&mut self) {
        loop {
            if self.stats.completed >= self.limits.result_ceiling {
                self.stats.ceiling_hit = !self.stack.is_empty();
                break;
            }
            let Some(item) = self.stack.pop() else {
                break;
            };
            self.stats.steps += 1;

            match item {
                WorkItem::Explore { prefix, candidate } => self.explore(&prefix, candidate),
                WorkItem::Resolve { candidate } => self.resolve(candidate),
            }
        }
    }

    fn explore(&mut self, prefix: &HashTag, candidate: &'a Match) {
        let next = candidate.end();

        if next == self.index.len() {
            self.complete(prefix, candidate, &HashTag::empty());
        } else if self.cache.is_resolved(next) {
            self.stats.cache_hits += 1;
            let suffixes = std::mem::take(&mut self.cache.suffixes[next]);
            for suffix in &suffixes {
                self.complete(prefix, candidate, suffix);
            }
            self.cache.suffixes[next] = suffixes;
        } else {
            self.stats.cache_misses += 1;
            self.stack.push(WorkItem::Resolve { candidate });
            let extended = prefix.append_word(&candidate.text, candidate.score);
            self.push_candidates(&extended, next);
        }
    }

    fn resolve(&mut self, candidate: &'a Match) {
        let next = candidate.end();
        let suffixes = std::mem::take(&mut self.cache.suffixes[next]);
        for suffix in &suffixes {
            self.cache
                .record(candidate.pos, suffix.prepend_word(&candidate.text, candidate.score));
        }
        self.cache.suffixes[next] = suffixes;
        self.cache.mark_resolved(next);
    }

    /// `prefix + candidate + suffix` is a full segmentation.
    fn complete(&mut self, prefix: &HashTag, candidate: &Match, suffix: &HashTag) {
        let full = prefix.append_word_with_suffix(&candidate.text, candidate.score, suffix);
        check_hashtag_well_formed(&full);
        check_covers_subject(&full, self.index.subject());

        self.cache
            .record(candidate.pos, suffix.prepend_word(&candidate.text, candidate.score));
        self.stats.completed += 1;

        if self.results.can_enter(&full, self.limits.max_results) {
            self.results.insert_sorted(full);
        } else {
            self.stats.pruned += 1;
        }
    }

    /// Push every word at `pos` in reverse score order, so the best pops first.
    fn push_candidates(&mut self, prefix: &HashTag, pos: usize) {
        let index = self.index;
        for candidate in index.at(pos).iter().rev() {
            self.stack.push(WorkItem::Explore {
                prefix: prefix.clone(),
                candidate,
            });
        }
        self.stats.peak_stack_depth = self.stats.peak_stack_depth.max(self.stack.len());
    }
}
