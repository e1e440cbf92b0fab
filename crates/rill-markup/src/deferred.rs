//! Asynchronous markup content.

use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;

use crate::Markup;

/// Outcome of a deferred computation.
///
/// Both variants carry a markup sequence: `Ok` holds the resolved content,
/// `Err` holds the error content. Consumers treat them identically once
/// obtained; the split only exists so a producer can route a failure into
/// different markup.
pub type DeferredResult = Result<Markup, Markup>;

/// A chunk whose content is produced by a pending computation.
///
/// Deferred chunks are terminal leaves of markup expansion: iterating a
/// [`Markup`] yields them unresolved, and whoever drains the sequence
/// decides when to await them. Each chunk carries a best-effort placeholder
/// string that stands in for the content wherever the sequence is coerced
/// to text before the computation settles.
pub struct DeferredChunk {
    placeholder: String,
    future: BoxFuture<'static, DeferredResult>,
}

impl DeferredChunk {
    /// Wrap a pending computation with an empty placeholder.
    pub fn new(future: impl Future<Output = DeferredResult> + Send + 'static) -> Self {
        Self {
            placeholder: String::new(),
            future: Box::pin(future),
        }
    }

    /// Set the placeholder text shown while the computation is pending.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Get the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Split into placeholder text and the underlying computation.
    pub fn into_parts(self) -> (String, BoxFuture<'static, DeferredResult>) {
        (self.placeholder, self.future)
    }

    /// Await the computation, funneling success and failure content into
    /// the same markup sequence.
    pub async fn settle(self) -> Markup {
        match self.future.await {
            Ok(markup) | Err(markup) => markup,
        }
    }
}

impl fmt::Debug for DeferredChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredChunk")
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}
