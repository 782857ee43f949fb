//! Error types for message storage

use thiserror::Error;

/// Error type for message store operations
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
	/// A thread panicked while holding the store lock
	#[error("Message store lock poisoned")]
	LockPoisoned,

	/// Messages could not be serialized or deserialized
	#[error("Message serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for message store operations
pub type Result<T> = std::result::Result<T, StoreError>;
