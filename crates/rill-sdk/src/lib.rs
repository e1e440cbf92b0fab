//! Public SDK for the rill streaming markup toolkit.
//!
//! This crate re-exports the whole toolkit:
//!
//! ```ignore
//! use rill_sdk::prelude::*;
//!
//! let tokens = TokenSource::new();
//! let page = Markup::build()
//!     .lit("<h1>shell</h1>")
//!     .val(suspend(
//!         Markup::raw("<p>Loading</p>"),
//!         async { Ok(load_content().await) },
//!         &tokens,
//!     )?)
//!     .finish();
//!
//! let body = stream(page); // cancellable byte stream, shell first
//! ```

pub use rill_islands;
pub use rill_markup;
pub use rill_router;
pub use rill_stream;
pub use rill_suspense;

/// Prelude for convenient imports.
pub mod prelude {
    pub use rill_islands::*;
    pub use rill_markup::*;
    pub use rill_router::*;
    pub use rill_stream::*;
    pub use rill_suspense::*;
}
