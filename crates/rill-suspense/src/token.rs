//! Per-render unique token generation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rand::Rng;

#[derive(Debug)]
enum Inner {
    Random,
    Sequential { prefix: String, next: AtomicU64 },
}

/// Source of unique suspension tokens.
///
/// Tokens correlate a placeholder container with its eventual injection
/// fragment, so they must be collision-free across one whole render,
/// nested suspensions included. The source is threaded through each
/// `suspend` call rather than hidden in a global, which keeps concurrent
/// renders independent.
#[derive(Debug, Clone)]
pub struct TokenSource {
    inner: Arc<Inner>,
}

impl TokenSource {
    /// Create a source issuing random 128-bit hex tokens.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner::Random),
        }
    }

    /// Create a source issuing `prefix-0`, `prefix-1`, ... in order.
    ///
    /// Deterministic output, intended for tests and snapshots.
    pub fn sequential(prefix: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner::Sequential {
                prefix: prefix.into(),
                next: AtomicU64::new(0),
            }),
        }
    }

    /// Issue the next token.
    pub fn issue(&self) -> String {
        match &*self.inner {
            Inner::Random => format!("{:032x}", rand::thread_rng().gen::<u128>()),
            Inner::Sequential { prefix, next } => {
                format!("{}-{}", prefix, next.fetch_add(1, Ordering::Relaxed))
            }
        }
    }
}

impl Default for TokenSource {
    fn default() -> Self {
        Self::new()
    }
}
