//! Flash message data model for SuperMessenger
//!
//! This crate holds the pieces a view layer reads from when it displays
//! one-time notifications to users.
//!
//! ## Features
//!
//! - **Severities**: the four well-known namespaces (`info`, `error`, `success`, `default`)
//! - **Nested Groups**: messages stored as arbitrarily nested sequences of strings
//! - **Store Capability**: the [`MessageStore`] trait (read, check, clear)
//! - **Memory Backend**: a shared in-memory store with JSON snapshots
//!
//! ## Example
//!
//! ```rust
//! use supermessenger_messages::{MemoryMessageStore, MessageStore};
//!
//! let store = MemoryMessageStore::new();
//! store.add_success("Operation completed successfully!").unwrap();
//! store.add_error("Please review your settings").unwrap();
//!
//! let errors = store.messages_from_namespace("error").unwrap();
//! assert_eq!(errors.len(), 1);
//! ```

pub mod error;
pub mod group;
pub mod severity;
pub mod storage;
pub mod store;

pub use error::StoreError;
pub use group::{Flatten, MessageGroup, MessageNode};
pub use severity::Severity;
pub use storage::MemoryMessageStore;
pub use store::MessageStore;

/// Re-export commonly used types
pub mod prelude {
	pub use crate::error::StoreError;
	pub use crate::group::*;
	pub use crate::severity::*;
	pub use crate::storage::*;
	pub use crate::store::*;
}
