//! Compact single line rendering of fragments.
//!
//! ```text
//! plain("a ") html("&") plain(" b")
//! ```

use super::nodes::{FragmentKind, TextFragment};

/// Render fragments as `kind("content")` separated by single spaces.
pub fn render_tag(fragments: &[TextFragment]) -> String {
    fragments
        .iter()
        .map(|fragment| {
            let tag = match fragment.kind() {
                FragmentKind::Plain => "plain",
                FragmentKind::HtmlEncoded => "html",
            };
            format!("{}(\"{}\")", tag, fragment.content().escape_debug())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_kinds_and_escapes_content() {
        let fragments = vec![
            TextFragment::plain("say \"hi\""),
            TextFragment::html_encoded("&"),
            TextFragment::plain("a\tb"),
        ];
        assert_eq!(
            render_tag(&fragments),
            r#"plain("say \"hi\"") html("&") plain("a\tb")"#
        );
    }

    #[test]
    fn renders_nothing_for_no_fragments() {
        assert_eq!(render_tag(&[]), "");
    }
}
