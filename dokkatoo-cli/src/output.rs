//! Output formats
//!
//! `tag` prints the compact `kind("content")` form, `json` the fragments as they are and
//! `doc-json` the fragments as Dokka `Text` doc tags.

use dokkatoo_config::{OutputConfig, OutputFormat};
use dokkatoo_text::{render_tag, DocText, TextFragment};
use serde::Serialize;

pub fn render(fragments: Vec<TextFragment>, output: &OutputConfig) -> serde_json::Result<String> {
    match output.format {
        OutputFormat::Tag => Ok(render_tag(&fragments)),
        OutputFormat::Json => to_json(&fragments, output.pretty),
        OutputFormat::DocJson => {
            let tags: Vec<DocText> = fragments.into_iter().map(DocText::from).collect();
            to_json(&tags, output.pretty)
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
