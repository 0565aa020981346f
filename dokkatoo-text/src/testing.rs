//! Test helpers
//!
//! [`RecordingResolver`] wraps a resolver and counts how often the slow path ran, which is the
//! only way to observe the `&` pre-check from the outside. [`render_tag`] is re-exported so
//! assertions can compare fragments against their one line form.

pub use crate::doc::render_tag;
use crate::translators::{EntityResolver, Html5EverResolver};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Resolver that counts its invocations and delegates to `inner`.
#[derive(Debug, Default)]
pub struct RecordingResolver<R = Html5EverResolver> {
    inner: R,
    calls: AtomicUsize,
}

impl<R: EntityResolver> RecordingResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<R: EntityResolver> EntityResolver for RecordingResolver<R> {
    fn resolve_entities(&self, text: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve_entities(text)
    }
}
