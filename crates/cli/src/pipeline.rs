// ABOUTME: Sequential pipeline driving fetch -> extract -> score for each URL in order.
// ABOUTME: Per-URL failures are logged with (url, stage, error) and skipped; the run continues.

use std::fmt;

use readscore_extract::Extractor;
use readscore_metrics::{Analyzer, ReadabilityRecord};
use tracing::warn;

/// The pipeline stage at which a URL was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Extract,
    Score,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Fetch => "fetch",
            Stage::Extract => "extract",
            Stage::Score => "score",
        };
        write!(f, "{}", s)
    }
}

/// Runs every URL through the extractor and analyzer, in input order.
///
/// Returns one record per URL that survived both stages; failed URLs are
/// logged and omitted. Never retries, never aborts.
pub fn run(extractor: &Extractor, analyzer: &Analyzer, urls: &[String]) -> Vec<ReadabilityRecord> {
    let mut results = Vec::new();

    for url in urls {
        let text = match extractor.fetch_page_text(url) {
            Ok(text) => text,
            Err(err) => {
                warn!(url = %url, stage = %Stage::Fetch, error = %err, "skipping url");
                continue;
            }
        };

        if text.is_empty() {
            warn!(url = %url, stage = %Stage::Extract, "skipping url: no visible text");
            continue;
        }

        match analyzer.analyze(url, &text) {
            Ok(record) => results.push(record),
            Err(err) => {
                warn!(url = %url, stage = %Stage::Score, error = %err, "skipping url");
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;
    use readscore_metrics::Lang;

    const PAGE: &str = "<html><body><p>Reading is one of the best ways to learn. \
                        Some people read every day. Others read only when they must.</p></body></html>";

    #[test]
    fn test_failed_urls_are_skipped_in_order() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/one");
            then.status(200).body(PAGE);
        });
        server.mock(|when, then| {
            when.method(GET).path("/gone");
            then.status(404);
        });
        server.mock(|when, then| {
            when.method(GET).path("/two");
            then.status(200).body(PAGE);
        });

        let urls = vec![
            server.url("/one"),
            server.url("/gone"),
            server.url("/two"),
        ];
        let records = run(&Extractor::new(), &Analyzer::new(Lang::EnUs), &urls);

        let got: Vec<&str> = records.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(got, vec![urls[0].as_str(), urls[2].as_str()]);
    }

    #[test]
    fn test_empty_page_produces_no_record() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/blank");
            then.status(200).body("<html><body><script>only()</script></body></html>");
        });

        let urls = vec![server.url("/blank")];
        let records = run(&Extractor::new(), &Analyzer::new(Lang::EnUs), &urls);
        assert!(records.is_empty());
    }

    #[test]
    fn test_no_urls_yields_no_records() {
        let records = run(&Extractor::new(), &Analyzer::new(Lang::EnUs), &[]);
        assert!(records.is_empty());
    }
}
