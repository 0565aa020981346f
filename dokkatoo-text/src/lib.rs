//! # dokkatoo-text
//!
//! The text translator from the Dokkatoo patch of the Dokka base plugin.
//!
//! Dokka turns every run of documentation text into `Text` doc tags. Text that needs HTML
//! escaping (`&`, `<`, a non-breaking space, ...) is emitted as separate tags carrying a
//! `content-type=html` parameter so renderers can write it out encoded. Upstream ran a full
//! HTML parser over every single string to find entity references; the patch only does so when
//! the string contains an `&`, which is what made large projects document in reasonable time.
//!
//! File Layout
//!
//!     src
//!     ├── doc                 Fragment model, its doc-tag view and tag rendering
//!     ├── translators         The tokenizer and its collaborators
//!     │   ├── parser.rs       Dispatch and the single pass scanner
//!     │   ├── entities.rs     Entity resolution (html5ever)
//!     │   ├── escape.rs       Escaping rules
//!     │   └── chars.rs        Whitespace / invisible classification
//!     └── testing.rs          Instrumented collaborators
//!
//! Usage
//!
//! ```ignore
//! use dokkatoo_text::translators::parse_with_normalised_spaces;
//!
//! let fragments = parse_with_normalised_spaces("a &amp; b", true);
//! ```

pub mod doc;
pub mod testing;
pub mod translators;

pub use doc::{render_tag, DocText, FragmentKind, TextFragment};
pub use translators::{
    parse_html_encoded_with_normalised_spaces, parse_with_normalised_spaces, Charset,
    EntityEscaper, EntityResolver, Html5EverResolver, HtmlEscaper, ParserOptions, TextParser,
};
