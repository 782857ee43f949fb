//! View module.
//!
//! Rendering of stored messages into HTML fragments.

pub use supermessenger_view::*;
