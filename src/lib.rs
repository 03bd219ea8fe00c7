//! Hashtag segmentation: turn `thisisatest` into `ThisIsATest`.
//!
//! Given a run-together string and a vocabulary, this crate finds every way to
//! tile the string with vocabulary words, scores each tiling by how
//! salient its words are, and returns the tilings ranked as capitalized
//! hashtags.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────────┐
//! │ matcher.rs  │────▶│  index.rs    │────▶│  search/           │
//! │ (Vocabulary,│     │(StringMatches│     │  iterative.rs      │
//! │  RawMatch)  │     │ scored Match)│     │  (suggest_hashtags)│
//! └─────────────┘     └──────────────┘     └────────────────────┘
//!        ▲                   ▲                       │
//!        │                   │                       ▼
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────────┐
//! │  load.rs    │────▶│ scoring/     │     │ search/            │
//! │ (files)     │     │ (word_score, │◀────│ accumulator.rs     │
//! │             │     │  ranking)    │     │ (ranked HashTags)  │
//! └─────────────┘     └──────────────┘     └────────────────────┘
//!                                                    │
//!                          service.rs ◀──────────────┘
//!                       (CompleteResponse) ──▶ server.rs / CLI
//! ```
//!
//! # Usage
//!
//! ```
//! use majuscule::{suggest_hashtags, SearchLimits, StringMatches, Vocabulary};
//!
//! let vocabulary = Vocabulary::new(["clean", "cleaner", "leaner"]).unwrap();
//! let subject = "cleaner";
//! let index = StringMatches::build(subject, vocabulary.find_matches(subject), None);
//!
//! let tags = suggest_hashtags(&index, &SearchLimits::top(2));
//! assert_eq!(tags[0].tag(), "Cleaner");
//! assert_eq!(tags[1].tag(), "CLeaner");
//! ```

// Module declarations
pub mod contracts;
pub mod error;
pub mod index;
pub mod load;
pub mod matcher;
pub mod scoring;
pub mod search;
pub mod service;
pub mod testing;
pub mod types;
mod utils;

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "cli")]
pub mod tracing;

// Re-exports for public API
pub use error::LoadError;
pub use index::StringMatches;
pub use load::{load_frequencies, load_vocabulary, load_words};
pub use matcher::Vocabulary;
pub use scoring::ranking::compare_hashtags;
pub use scoring::{word_score, FrequencyTable};
pub use search::{
    compute_hashtags, suggest_hashtags, suggest_hashtags_with_stats, SearchLimits, SearchStats,
};
pub use service::{CompleteRequest, CompleteResponse, Suggester, MAX_INPUT_CHARS};
pub use types::{HashTag, Match, RawMatch};
pub use utils::capitalize;
