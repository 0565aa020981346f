//! Text translation primitives
//!
//! This module exposes the normalising tokenizer together with the two seams it depends on:
//! [`EntityResolver`] turns entity references back into characters, [`HtmlEscaper`] decides
//! which characters must stay encoded. The defaults follow HTML5 parsing (html5ever) and the
//! escaping rules of Dokka's HTML renderer.

mod chars;
mod entities;
mod escape;
mod parser;

pub use chars::{is_blank, is_invisible, is_whitespace};
pub use entities::{EntityResolver, Html5EverResolver};
pub use escape::{Charset, EntityEscaper, HtmlEscaper};
pub use parser::{
    parse_html_encoded_with_normalised_spaces, parse_with_normalised_spaces, requires_html_decoding,
    ParserOptions, TextParser,
};
