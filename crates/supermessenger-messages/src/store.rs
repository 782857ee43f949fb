//! Message store capability

use crate::group::MessageGroup;
use std::sync::Arc;

/// Read and clear access to namespaced flash messages
///
/// This is the whole surface a renderer needs from a session-backed
/// messenger. Errors are the store's own and are handed back to callers
/// untouched.
pub trait MessageStore {
	/// Error raised by the backing store
	type Error: std::error::Error;

	/// Get the messages stored under `namespace`
	///
	/// Returns an empty group when the namespace holds nothing. Must not
	/// consume the messages.
	fn messages_from_namespace(&self, namespace: &str) -> Result<MessageGroup, Self::Error>;

	/// Whether `namespace` holds at least one message string
	fn has_messages(&self, namespace: &str) -> Result<bool, Self::Error> {
		Ok(!self.messages_from_namespace(namespace)?.is_empty())
	}

	/// Drop every message stored under `namespace`
	///
	/// Returns `true` if anything was removed.
	fn clear_messages(&self, namespace: &str) -> Result<bool, Self::Error>;
}

impl<T: MessageStore + ?Sized> MessageStore for &T {
	type Error = T::Error;

	fn messages_from_namespace(&self, namespace: &str) -> Result<MessageGroup, Self::Error> {
		(**self).messages_from_namespace(namespace)
	}

	fn has_messages(&self, namespace: &str) -> Result<bool, Self::Error> {
		(**self).has_messages(namespace)
	}

	fn clear_messages(&self, namespace: &str) -> Result<bool, Self::Error> {
		(**self).clear_messages(namespace)
	}
}

impl<T: MessageStore + ?Sized> MessageStore for Arc<T> {
	type Error = T::Error;

	fn messages_from_namespace(&self, namespace: &str) -> Result<MessageGroup, Self::Error> {
		(**self).messages_from_namespace(namespace)
	}

	fn has_messages(&self, namespace: &str) -> Result<bool, Self::Error> {
		(**self).has_messages(namespace)
	}

	fn clear_messages(&self, namespace: &str) -> Result<bool, Self::Error> {
		(**self).clear_messages(namespace)
	}
}

impl<T: MessageStore + ?Sized> MessageStore for Box<T> {
	type Error = T::Error;

	fn messages_from_namespace(&self, namespace: &str) -> Result<MessageGroup, Self::Error> {
		(**self).messages_from_namespace(namespace)
	}

	fn has_messages(&self, namespace: &str) -> Result<bool, Self::Error> {
		(**self).has_messages(namespace)
	}

	fn clear_messages(&self, namespace: &str) -> Result<bool, Self::Error> {
		(**self).clear_messages(namespace)
	}
}
