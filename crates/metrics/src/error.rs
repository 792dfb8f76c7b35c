// ABOUTME: Error types for readability scoring.
// ABOUTME: Provides ScoreError for inputs the formulas cannot meaningfully score.

use thiserror::Error;

/// Errors that can occur while scoring text.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The input text is empty or whitespace-only; no metrics can be computed.
    #[error("text is empty: nothing to score")]
    EmptyText,
}
