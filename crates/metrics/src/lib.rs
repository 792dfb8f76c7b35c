// ABOUTME: Readability scoring library for readscore.
// ABOUTME: Provides text counting primitives, the standard readability formulas, and the Analyzer.

pub mod analyzer;
pub mod counts;
pub mod easy_words;
pub mod error;
pub mod formulas;
pub mod record;

pub use analyzer::{Analyzer, Lang};
pub use counts::{char_count, letter_count, lexicon_count, sentence_count, syllable_count};
pub use error::ScoreError;
pub use record::{ReadabilityRecord, FIELD_NAMES};
