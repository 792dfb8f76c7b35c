// ABOUTME: HTML-to-text conversion for readability scoring.
// ABOUTME: Drops script/style subtrees and joins the remaining text nodes with single spaces.

use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Element types whose entire subtree is removed before text extraction.
/// Nothing else (nav, footer, ads) is filtered.
const STRIPPED_TAGS: [&str; 2] = ["script", "style"];

/// Converts an HTML document to normalized plain text.
///
/// Every text node outside a stripped subtree is trimmed; empty fragments
/// are dropped and the rest are joined with a single space. No further
/// whitespace normalization is applied.
pub fn html_to_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let mut fragments: Vec<&str> = Vec::new();
    collect_text(doc.tree.root(), &mut fragments);
    fragments.join(" ")
}

fn collect_text<'a>(node: NodeRef<'a, Node>, out: &mut Vec<&'a str>) {
    for child in node.children() {
        match child.value() {
            Node::Element(el) => {
                if STRIPPED_TAGS.contains(&el.name()) {
                    continue;
                }
                collect_text(child, out);
            }
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    out.push(trimmed);
                }
            }
            _ => {}
        }
    }
}
