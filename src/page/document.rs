//! HTML document wrapper
//!
//! Parsing goes through html5ever via `scraper`, which recovers from
//! unclosed tags, stray entities and the other defects real pages carry.
//! The wrapper exposes only what the extractors need: visible text and
//! anchor hrefs.

use scraper::{Html, Node, Selector};

/// Elements whose text content is never rendered
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// An `<a>` element with a non-empty href
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// The href attribute, trimmed
    pub href: String,
}

/// A parsed HTML page
pub struct Document {
    html: Html,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("title", &self.title())
            .finish_non_exhaustive()
    }
}

impl Document {
    /// Parses HTML text into a document tree
    ///
    /// # Example
    ///
    /// ```
    /// use lead_extractor::page::Document;
    ///
    /// let doc = Document::parse("<p>Hello <b>world</p>");
    /// assert_eq!(doc.visible_text(), "Hello world");
    /// ```
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Returns the page title (from the `<title>` tag)
    pub fn title(&self) -> Option<String> {
        let title_selector = Selector::parse("title").ok()?;

        self.html
            .select(&title_selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Returns all visible text as one whitespace-normalized string
    ///
    /// Text nodes are split on whitespace and rejoined with single spaces,
    /// so adjacent nodes never fuse into one word. Text inside `<script>`,
    /// `<style>`, `<noscript>` and `<template>` is skipped.
    pub fn visible_text(&self) -> String {
        let mut words: Vec<&str> = Vec::new();

        for node in self.html.tree.root().descendants() {
            let Node::Text(text) = node.value() else {
                continue;
            };

            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
            });

            if !hidden {
                words.extend(text.split_whitespace());
            }
        }

        words.join(" ")
    }

    /// Returns every anchor with a non-empty href, in document order
    pub fn anchors(&self) -> Vec<Anchor> {
        let Ok(a_selector) = Selector::parse("a[href]") else {
            return Vec::new();
        };

        self.html
            .select(&a_selector)
            .filter_map(|element| element.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .map(|href| Anchor {
                href: href.to_string(),
            })
            .collect()
    }
}
