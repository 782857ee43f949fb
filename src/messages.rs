//! Messages module.
//!
//! Severities, nested message groups and message stores.
//!
//! # Examples
//!
//! ```rust
//! use supermessenger::messages::{MemoryMessageStore, MessageStore};
//!
//! let store = MemoryMessageStore::new();
//! store.add_info("Hello").unwrap();
//! assert!(store.has_messages("info").unwrap());
//! ```

pub use supermessenger_messages::*;
