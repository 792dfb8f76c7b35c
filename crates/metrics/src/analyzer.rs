// ABOUTME: The Analyzer runs the full battery of readability formulas over one document.
// ABOUTME: Language is an explicit constructor parameter, fixed for the analyzer's lifetime.

use crate::counts::{char_count, lexicon_count};
use crate::error::ScoreError;
use crate::formulas;
use crate::record::ReadabilityRecord;

/// Language variant for the readability formulas. The syllable heuristics
/// and familiar-word list are keyed to this; one variant per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    EnUs,
}

/// Computes the fixed set of readability metrics for extracted page text.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    lang: Lang,
}

impl Analyzer {
    /// Create an analyzer for the given language variant.
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    /// The language variant this analyzer was built with.
    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Score `text` as one document and return the full record.
    ///
    /// Empty or whitespace-only text cannot be scored. Degenerate but
    /// non-empty input (for example a single word) scores with the
    /// formulas' 0.0 sentinels where a formula is undefined.
    pub fn analyze(&self, url: &str, text: &str) -> Result<ReadabilityRecord, ScoreError> {
        if text.trim().is_empty() {
            return Err(ScoreError::EmptyText);
        }

        // Only US English tables exist today; the match keeps the seam
        // explicit for when more variants land.
        let Lang::EnUs = self.lang;

        Ok(ReadabilityRecord {
            url: url.to_string(),
            flesch_reading_ease: formulas::flesch_reading_ease(text),
            flesch_kincaid_grade: formulas::flesch_kincaid_grade(text),
            gunning_fog: formulas::gunning_fog(text),
            smog_index: formulas::smog_index(text),
            automated_readability_index: formulas::automated_readability_index(text),
            coleman_liau_index: formulas::coleman_liau_index(text),
            linsear_write_formula: formulas::linsear_write_formula(text),
            dale_chall_readability_score: formulas::dale_chall_readability_score(text),
            text_standard: formulas::text_standard(text),
            character_count: char_count(text),
            word_count: lexicon_count(text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PROSE: &str = "Reading is one of the best ways to learn about the world. \
                         Some people read every single day. Others read only when they must. \
                         Either way, the habit rewards everyone who keeps at it.";

    #[test]
    fn test_analyze_populates_every_field() {
        let analyzer = Analyzer::new(Lang::EnUs);
        let record = analyzer.analyze("http://example.com", PROSE).unwrap();

        assert_eq!(record.url, "http://example.com");
        assert!(record.word_count > 30);
        assert!(record.character_count > record.word_count);
        assert!(record.flesch_reading_ease > 0.0);
        assert!(record.flesch_kincaid_grade != 0.0);
        assert!(record.gunning_fog > 0.0);
        assert!(record.smog_index > 0.0);
        assert!(record.automated_readability_index != 0.0);
        assert!(record.coleman_liau_index != 0.0);
        assert!(record.linsear_write_formula != 0.0);
        assert!(record.dale_chall_readability_score > 0.0);
        assert!(record.text_standard >= 0.0);
    }

    #[test]
    fn test_analyze_rejects_empty_text() {
        let analyzer = Analyzer::default();
        assert!(matches!(
            analyzer.analyze("http://example.com", "   "),
            Err(ScoreError::EmptyText)
        ));
    }

    #[test]
    fn test_single_word_scores_with_sentinels() {
        let analyzer = Analyzer::default();
        let record = analyzer.analyze("http://example.com", "hello").unwrap();
        assert_eq!(record.word_count, 1);
        assert_eq!(record.smog_index, 0.0);
    }
}
