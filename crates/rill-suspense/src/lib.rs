//! Suspense combinator pairing placeholders with deferred markup.
//!
//! This crate provides:
//! - `suspend` - Pair a synchronous placeholder with pending content
//! - `SuspendHandle` - Dual-natured handle (placeholder text or deferred chunk)
//! - `TokenSource` - Per-render unique token generation

mod error;
mod handle;
mod token;

pub use error::*;
pub use handle::*;
pub use token::*;
