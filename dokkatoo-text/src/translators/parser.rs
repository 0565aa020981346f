use super::chars::{is_blank, is_invisible, is_whitespace};
use super::entities::{EntityResolver, Html5EverResolver};
use super::escape::{Charset, EntityEscaper, HtmlEscaper};
use crate::doc::TextFragment;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Parse text into fragments, resolving entity references first when there can be any.
///
/// Text without an `&` cannot contain an entity reference and goes straight to the scanner.
pub fn parse_with_normalised_spaces(
    text: &str,
    render_whitespace_as_spaces: bool,
) -> Vec<TextFragment> {
    TextParser::with_collaborators(
        Html5EverResolver,
        EntityEscaper::default(),
        render_whitespace_as_spaces,
    )
    .parse(text)
}

/// Single pass over already resolved text.
///
/// Whitespace runs collapse to one space when `render_whitespace_as_spaces` is set; every
/// code point the escaper flags becomes its own [`HtmlEncoded`](crate::FragmentKind) fragment;
/// invisible code points are dropped. Blank fragments are never emitted.
pub fn parse_html_encoded_with_normalised_spaces<E: HtmlEscaper>(
    text: &str,
    render_whitespace_as_spaces: bool,
    escaper: &E,
) -> Vec<TextFragment> {
    let mut accum = Accumulator::default();

    for c in text.chars() {
        if render_whitespace_as_spaces && is_whitespace(c) {
            accum.push_space();
        } else if escaper.requires_escaping(c) {
            accum.flush();
            accum.push_encoded(c);
        } else if !is_invisible(c) {
            accum.push_char(c);
        }
    }

    accum.finish()
}

/// Whether `text` has to go through entity resolution before scanning.
pub fn requires_html_decoding(text: &str) -> bool {
    text.contains('&')
}

/// Knobs of the default parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    pub render_whitespace_as_spaces: bool,
    pub charset: Charset,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            render_whitespace_as_spaces: true,
            charset: Charset::Utf8,
        }
    }
}

/// Tokenizer bundled with its collaborators.
#[derive(Debug, Clone)]
pub struct TextParser<R = Html5EverResolver, E = EntityEscaper> {
    resolver: R,
    escaper: E,
    render_whitespace_as_spaces: bool,
}

impl TextParser {
    pub fn new(options: ParserOptions) -> Self {
        Self::with_collaborators(
            Html5EverResolver,
            EntityEscaper::new(options.charset),
            options.render_whitespace_as_spaces,
        )
    }
}

impl Default for TextParser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl<R: EntityResolver, E: HtmlEscaper> TextParser<R, E> {
    pub fn with_collaborators(resolver: R, escaper: E, render_whitespace_as_spaces: bool) -> Self {
        Self {
            resolver,
            escaper,
            render_whitespace_as_spaces,
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn escaper(&self) -> &E {
        &self.escaper
    }

    pub fn renders_whitespace_as_spaces(&self) -> bool {
        self.render_whitespace_as_spaces
    }

    pub fn parse(&self, text: &str) -> Vec<TextFragment> {
        if !requires_html_decoding(text) {
            trace!(len = text.len(), "no ampersand, scanning raw text");
            return parse_html_encoded_with_normalised_spaces(
                text,
                self.render_whitespace_as_spaces,
                &self.escaper,
            );
        }

        let resolved = self.resolver.resolve_entities(text);
        let fragments = parse_html_encoded_with_normalised_spaces(
            &resolved,
            self.render_whitespace_as_spaces,
            &self.escaper,
        );
        debug!(
            len = text.len(),
            resolved_len = resolved.len(),
            fragments = fragments.len(),
            "resolved entities before scanning"
        );
        fragments
    }
}

#[derive(Default)]
struct Accumulator {
    buffer: String,
    last_was_white: bool,
    fragments: Vec<TextFragment>,
}

impl Accumulator {
    fn push_space(&mut self) {
        if !self.last_was_white {
            self.buffer.push(' ');
            self.last_was_white = true;
        }
    }

    fn push_char(&mut self, c: char) {
        self.buffer.push(c);
        self.last_was_white = false;
    }

    fn push_encoded(&mut self, c: char) {
        self.fragments.push(TextFragment::html_encoded(c.to_string()));
    }

    /// Emit the buffer as plain text unless blank. The buffer is empty afterwards, so it no
    /// longer ends in a collapsed space.
    fn flush(&mut self) {
        let text = std::mem::take(&mut self.buffer);
        self.last_was_white = false;
        if !is_blank(&text) {
            self.fragments.push(TextFragment::plain(text));
        }
    }

    fn finish(mut self) -> Vec<TextFragment> {
        self.flush();
        self.fragments
    }
}
