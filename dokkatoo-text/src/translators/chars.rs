//! Character classes used while normalising text.

/// HTML whitespace: space, tab, line feed, form feed and carriage return.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0C}' | '\r')
}

/// Code points that render as nothing and are dropped from the output: zero width space, zero
/// width non-joiner and soft hyphen.
///
/// Zero width joiner is not listed since emoji sequences and Indic shaping depend on it.
pub fn is_invisible(c: char) -> bool {
    matches!(c, '\u{200B}' | '\u{200C}' | '\u{AD}')
}

/// Empty or made of whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}
