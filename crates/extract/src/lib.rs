// ABOUTME: Page text extraction library for readscore.
// ABOUTME: Fetches a page over blocking HTTP and strips its markup down to normalized plain text.

pub mod error;
pub mod fetch;
pub mod text;

pub use error::ExtractError;
pub use fetch::Extractor;
pub use text::html_to_text;
