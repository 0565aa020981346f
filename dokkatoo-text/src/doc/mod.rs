//! Output model of the text translator.
//!
//! [`TextFragment`] is what the tokenizer produces. [`DocText`] is the same data shaped like
//! Dokka's `Text` doc tag, where HTML-encoded content is flagged through a `content-type`
//! parameter instead of a dedicated kind. [`render_tag`] prints fragments on one line.

mod nodes;
mod tag;

pub use nodes::{DocText, FragmentKind, TextFragment, CONTENT_TYPE_HTML, CONTENT_TYPE_PARAM};
pub use tag::render_tag;
