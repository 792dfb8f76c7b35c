// ABOUTME: ReadabilityRecord struct holding the scored metrics for one page.
// ABOUTME: Field order here is the canonical column order for reports and CSV output.

use serde::{Deserialize, Serialize};

/// CSV header / report field names, in canonical order.
pub const FIELD_NAMES: [&str; 12] = [
    "url",
    "flesch_reading_ease",
    "flesch_kincaid_grade",
    "gunning_fog",
    "smog_index",
    "automated_readability_index",
    "coleman_liau_index",
    "linsear_write_formula",
    "dale_chall_readability_score",
    "text_standard",
    "character_count",
    "word_count",
];

/// The scored result for one page. Either fully present or absent;
/// there is no partial scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityRecord {
    pub url: String,
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub gunning_fog: f64,
    pub smog_index: f64,
    pub automated_readability_index: f64,
    pub coleman_liau_index: f64,
    pub linsear_write_formula: f64,
    pub dale_chall_readability_score: f64,
    pub text_standard: f64,
    pub character_count: usize,
    pub word_count: usize,
}

impl ReadabilityRecord {
    /// Metric name/value pairs in canonical order, excluding `url`.
    /// Values are rendered the same way for console and CSV output.
    pub fn metric_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("flesch_reading_ease", self.flesch_reading_ease.to_string()),
            ("flesch_kincaid_grade", self.flesch_kincaid_grade.to_string()),
            ("gunning_fog", self.gunning_fog.to_string()),
            ("smog_index", self.smog_index.to_string()),
            (
                "automated_readability_index",
                self.automated_readability_index.to_string(),
            ),
            ("coleman_liau_index", self.coleman_liau_index.to_string()),
            (
                "linsear_write_formula",
                self.linsear_write_formula.to_string(),
            ),
            (
                "dale_chall_readability_score",
                self.dale_chall_readability_score.to_string(),
            ),
            ("text_standard", self.text_standard.to_string()),
            ("character_count", self.character_count.to_string()),
            ("word_count", self.word_count.to_string()),
        ]
    }

    /// All field values in canonical order, `url` first.
    pub fn field_values(&self) -> Vec<String> {
        let mut values = vec![self.url.clone()];
        values.extend(self.metric_fields().into_iter().map(|(_, v)| v));
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ReadabilityRecord {
        ReadabilityRecord {
            url: "http://example.com".to_string(),
            flesch_reading_ease: 64.75,
            flesch_kincaid_grade: 8.2,
            gunning_fog: 10.1,
            smog_index: 9.6,
            automated_readability_index: 7.9,
            coleman_liau_index: 11.3,
            linsear_write_formula: 6.5,
            dale_chall_readability_score: 7.04,
            text_standard: 8.0,
            character_count: 4217,
            word_count: 803,
        }
    }

    #[test]
    fn test_field_values_match_field_names() {
        let record = sample();
        assert_eq!(record.field_values().len(), FIELD_NAMES.len());
        assert_eq!(record.field_values()[0], "http://example.com");
    }

    #[test]
    fn test_metric_fields_order_matches_header() {
        let names: Vec<&str> = sample().metric_fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(&FIELD_NAMES[1..], names.as_slice());
    }
}
