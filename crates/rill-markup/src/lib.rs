//! Lazy markup sequences for shell-first HTML streaming.
//!
//! This crate provides the fundamental types:
//! - `Markup` - One-shot, depth-first sequence of output chunks
//! - `Value` - Anything a template slot accepts
//! - `DeferredChunk` - Asynchronous content that resolves later
//! - `escape_html` - Text escaping for untrusted input

mod deferred;
mod error;
mod escape;
mod markup;
mod value;

pub use deferred::*;
pub use error::*;
pub use escape::*;
pub use markup::*;
pub use value::*;
