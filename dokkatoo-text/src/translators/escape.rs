//! Escaping rules
//!
//! A character needs escaping when its minimal HTML form in text content differs from the
//! character itself. The table follows the base escape mode used by Dokka's renderer: markup
//! characters and the non-breaking space always, C0 controls except tab/newline/carriage
//! return, and whatever the output charset cannot represent.

use serde::{Deserialize, Serialize};

/// Decides per code point whether it must be written as an entity.
pub trait HtmlEscaper {
    fn requires_escaping(&self, c: char) -> bool;
}

impl<E: HtmlEscaper + ?Sized> HtmlEscaper for &E {
    fn requires_escaping(&self, c: char) -> bool {
        (**self).requires_escaping(c)
    }
}

/// Output charset the escaped text is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    #[default]
    Utf8,
    Ascii,
}

impl Charset {
    pub fn can_encode(self, c: char) -> bool {
        match self {
            Charset::Utf8 => true,
            Charset::Ascii => c.is_ascii(),
        }
    }
}

/// Default escaper, in text (not attribute) context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntityEscaper {
    charset: Charset,
}

impl EntityEscaper {
    pub fn new(charset: Charset) -> Self {
        Self { charset }
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }
}

impl HtmlEscaper for EntityEscaper {
    fn requires_escaping(&self, c: char) -> bool {
        match c {
            '&' | '<' | '>' | '\u{A0}' => true,
            '\t' | '\n' | '\r' => false,
            c if (c as u32) < 0x20 => true,
            c => !self.charset.can_encode(c),
        }
    }
}
