//! Entity resolution
//!
//! Only used on the slow path, when the text contains an `&`. The default resolver parses the
//! text as the content of an HTML `<body>` and concatenates the whole text of the body, which
//! is where every entity reference (`&amp;`, `&nbsp;`, `&#x1F980;`, ...) gets turned back into
//! the character it names. Markup in the text is dropped along the way.

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Replaces entity references in `text` with the characters they stand for.
pub trait EntityResolver {
    fn resolve_entities(&self, text: &str) -> String;
}

impl<R: EntityResolver + ?Sized> EntityResolver for &R {
    fn resolve_entities(&self, text: &str) -> String {
        (**self).resolve_entities(text)
    }
}

/// HTML5 resolver backed by html5ever and an `RcDom`.
///
/// Malformed references are handled the way the HTML5 tokenizer handles them, which for
/// unknown names means literal pass-through.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html5EverResolver;

impl EntityResolver for Html5EverResolver {
    fn resolve_entities(&self, text: &str) -> String {
        // An explicit <body> keeps leading whitespace, which the parser would otherwise skip
        // before implying the html element.
        let source = format!("<body>{}", text);
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(source.as_str());

        let mut resolved = String::with_capacity(text.len());
        if let Some(body) = find_body(&dom.document) {
            collect_whole_text(&body, &mut resolved);
        }
        resolved
    }
}

fn is_element(node: &Handle, local: &str) -> bool {
    matches!(&node.data, NodeData::Element { name, .. } if &*name.local == local)
}

/// `<body>` always sits at document → html → body once the parser has finished.
fn find_body(document: &Handle) -> Option<Handle> {
    let html = document
        .children
        .borrow()
        .iter()
        .find(|child| is_element(child, "html"))
        .cloned()?;
    let body = html
        .children
        .borrow()
        .iter()
        .find(|child| is_element(child, "body"))
        .cloned();
    body
}

/// Text of every descendant text node in document order, unnormalised. `<br>` counts as a
/// newline, template contents are walked like ordinary children, and the raw contents of
/// script and style elements are not text.
///
/// Walks with an explicit stack: nesting depth is unbounded in user input.
fn collect_whole_text(root: &Handle, out: &mut String) {
    let mut stack: Vec<Handle> = root.children.borrow().iter().rev().cloned().collect();

    while let Some(node) = stack.pop() {
        match &node.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element {
                name,
                template_contents,
                ..
            } => match &*name.local {
                "br" => out.push('\n'),
                "script" | "style" => {}
                _ => {
                    if let Some(contents) = template_contents.borrow().as_ref() {
                        stack.push(contents.clone());
                    }
                    stack.extend(node.children.borrow().iter().rev().cloned());
                }
            },
            NodeData::Document => {
                stack.extend(node.children.borrow().iter().rev().cloned());
            }
            _ => {}
        }
    }
}
