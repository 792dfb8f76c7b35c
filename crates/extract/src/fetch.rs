// ABOUTME: Blocking HTTP fetch for page text extraction.
// ABOUTME: One GET per URL with transport defaults; 4xx/5xx and transport failures are errors.

use reqwest::blocking::Client;
use url::Url;

use crate::error::ExtractError;
use crate::text::html_to_text;

/// Fetches pages and extracts their plain text.
///
/// Holds one blocking HTTP client, reused across URLs. The client is built
/// with transport defaults: no retries, no custom headers, default
/// redirect policy.
#[derive(Debug, Clone)]
pub struct Extractor {
    client: Client,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch `url` with a single GET and return its normalized plain text.
    ///
    /// Any transport failure, a 4xx/5xx status, or an unparseable URL is an
    /// error; redirects are followed per the client default. The extracted
    /// text may be empty for pages with no visible content.
    pub fn fetch_page_text(&self, url: &str) -> Result<String, ExtractError> {
        Url::parse(url).map_err(|source| ExtractError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| ExtractError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(ExtractError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| ExtractError::Fetch {
            url: url.to_string(),
            source,
        })?;

        Ok(html_to_text(&body))
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
