//! Error types for markup construction.

use thiserror::Error;

/// Errors raised while building a markup sequence.
///
/// These are structural errors: they indicate a malformed template and are
/// raised synchronously at build time, before anything is streamed.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// Literal spans and values cannot be interleaved.
    ///
    /// A template of `n + 1` literal spans interleaves exactly `n` values.
    #[error("template shape mismatch: {literals} literal spans cannot interleave {values} values")]
    TemplateShape {
        /// Number of literal spans supplied.
        literals: usize,
        /// Number of values supplied.
        values: usize,
    },
}
