//! Error types for the suspense combinator.

use thiserror::Error;

/// Errors raised when creating a suspension.
#[derive(Debug, Error)]
pub enum SuspenseError {
    /// The placeholder itself contained deferred content.
    ///
    /// Placeholders must be renderable synchronously; pending content
    /// belongs behind the suspension, not inside its stand-in.
    #[error("placeholder contains deferred content; placeholders must render synchronously")]
    DeferredPlaceholder,
}
