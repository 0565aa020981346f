//! Text fragments and their doc-tag counterpart.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Key of the doc-tag parameter that marks HTML content.
pub const CONTENT_TYPE_PARAM: &str = "content-type";
/// Value of [`CONTENT_TYPE_PARAM`] for HTML-encoded content.
pub const CONTENT_TYPE_HTML: &str = "html";

/// How a fragment's content has to be written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FragmentKind {
    /// Literal text.
    Plain,
    /// A single code point that needs HTML entity escaping.
    HtmlEncoded,
}

/// One contiguous span of normalised text.
///
/// Content is never blank: the tokenizer drops empty and whitespace-only spans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextFragment {
    content: String,
    kind: FragmentKind,
}

impl TextFragment {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: FragmentKind::Plain,
        }
    }

    pub fn html_encoded(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: FragmentKind::HtmlEncoded,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    pub fn is_html_encoded(&self) -> bool {
        self.kind == FragmentKind::HtmlEncoded
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl fmt::Display for TextFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Dokka's `Text` doc tag: a body plus string parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocText {
    pub body: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

impl DocText {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            params: BTreeMap::new(),
        }
    }

    /// A text tag carrying `content-type=html`.
    pub fn html(body: impl Into<String>) -> Self {
        let mut params = BTreeMap::new();
        params.insert(CONTENT_TYPE_PARAM.to_string(), CONTENT_TYPE_HTML.to_string());
        Self {
            body: body.into(),
            params,
        }
    }

    pub fn is_html(&self) -> bool {
        self.params.get(CONTENT_TYPE_PARAM).map(String::as_str) == Some(CONTENT_TYPE_HTML)
    }
}

impl From<TextFragment> for DocText {
    fn from(fragment: TextFragment) -> Self {
        match fragment.kind {
            FragmentKind::Plain => DocText::new(fragment.content),
            FragmentKind::HtmlEncoded => DocText::html(fragment.content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fragment_becomes_paramless_text() {
        let text = DocText::from(TextFragment::plain("hello"));
        assert_eq!(text.body, "hello");
        assert!(text.params.is_empty());
        assert!(!text.is_html());
    }

    #[test]
    fn encoded_fragment_carries_content_type() {
        let text = DocText::from(TextFragment::html_encoded("&"));
        assert_eq!(text.body, "&");
        assert_eq!(
            text.params.get(CONTENT_TYPE_PARAM).map(String::as_str),
            Some("html")
        );
        assert!(text.is_html());
    }

    #[test]
    fn fragment_serializes_kind_in_kebab_case() {
        let json = serde_json::to_string(&TextFragment::html_encoded("<")).unwrap();
        assert_eq!(json, r#"{"content":"<","kind":"html-encoded"}"#);
    }

    #[test]
    fn doc_text_omits_empty_params() {
        let json = serde_json::to_string(&DocText::new("x")).unwrap();
        assert_eq!(json, r#"{"body":"x"}"#);
    }
}
