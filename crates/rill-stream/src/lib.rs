//! Streaming materializer for lazy markup sequences.
//!
//! This crate drains a markup sequence into a byte stream:
//! - `stream` - Materialize a sequence, shell first
//! - `HtmlStream` - Cancellable byte stream, usable as a response body
//! - `CancelFlag` - Cooperative cancellation checked at every enqueue

mod cancel;
mod stream;

pub use cancel::*;
pub use stream::*;
