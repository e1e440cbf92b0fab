//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag for one stream invocation.
///
/// Cancellation is cooperative: every enqueue checks the flag before
/// writing, so once it is set no further bytes reach the consumer.
/// Outstanding computations are not interrupted mid-await; their results
/// are simply discarded.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    canceled: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Create an unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag. Idempotent.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation was requested.
    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_starts_unset() {
        assert!(!CancelFlag::new().is_canceled());
    }

    #[test]
    fn test_cancel_is_visible_through_clones() {
        let flag = CancelFlag::new();
        let clone = flag.clone();

        flag.cancel();

        assert!(clone.is_canceled());
    }
}
