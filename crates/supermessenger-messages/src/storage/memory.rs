//! In-memory message store

use crate::error::{Result, StoreError};
use crate::group::MessageGroup;
use crate::severity::Severity;
use crate::store::MessageStore;
use indexmap::IndexMap;
use std::sync::{Arc, Mutex, MutexGuard};

type Buckets = IndexMap<String, MessageGroup>;

/// In-memory flash message store
///
/// Clones share the same buckets, so one handle can be given to the
/// renderer while request code keeps adding through another. Namespaces
/// keep the order in which they were first written.
#[derive(Debug, Clone, Default)]
pub struct MemoryMessageStore {
	buckets: Arc<Mutex<Buckets>>,
}

impl MemoryMessageStore {
	/// Create an empty store
	///
	/// # Examples
	///
	/// ```
	/// use supermessenger_messages::MemoryMessageStore;
	///
	/// let store = MemoryMessageStore::new();
	/// assert!(store.namespaces().unwrap().is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	fn lock(&self) -> Result<MutexGuard<'_, Buckets>> {
		self.buckets.lock().map_err(|_| {
			tracing::warn!("message store lock poisoned");
			StoreError::LockPoisoned
		})
	}

	/// Append a message string to `namespace`
	///
	/// # Examples
	///
	/// ```
	/// use supermessenger_messages::{MemoryMessageStore, MessageStore};
	///
	/// let store = MemoryMessageStore::new();
	/// store.add_message("custom", "Saved").unwrap();
	/// assert!(store.has_messages("custom").unwrap());
	/// ```
	pub fn add_message(&self, namespace: impl Into<String>, text: impl Into<String>) -> Result<()> {
		let namespace = namespace.into();
		tracing::debug!(namespace = %namespace, "adding flash message");
		self.lock()?.entry(namespace).or_default().push(text);
		Ok(())
	}

	/// Append a nested group to `namespace`
	pub fn add_group(&self, namespace: impl Into<String>, group: MessageGroup) -> Result<()> {
		let namespace = namespace.into();
		tracing::debug!(namespace = %namespace, size = group.len(), "adding flash message group");
		self.lock()?.entry(namespace).or_default().push_group(group);
		Ok(())
	}

	/// Append a message string to the namespace of `severity`
	pub fn add_severity(&self, severity: Severity, text: impl Into<String>) -> Result<()> {
		self.add_message(severity.as_str(), text)
	}

	/// Append an `info` message
	pub fn add_info(&self, text: impl Into<String>) -> Result<()> {
		self.add_severity(Severity::Info, text)
	}

	/// Append an `error` message
	pub fn add_error(&self, text: impl Into<String>) -> Result<()> {
		self.add_severity(Severity::Error, text)
	}

	/// Append a `success` message
	pub fn add_success(&self, text: impl Into<String>) -> Result<()> {
		self.add_severity(Severity::Success, text)
	}

	/// Append a `default` message
	pub fn add_default(&self, text: impl Into<String>) -> Result<()> {
		self.add_severity(Severity::Default, text)
	}

	/// Namespaces currently holding a bucket, in first-write order
	pub fn namespaces(&self) -> Result<Vec<String>> {
		Ok(self.lock()?.keys().cloned().collect())
	}

	/// Number of message strings stored under `namespace`
	pub fn count(&self, namespace: &str) -> Result<usize> {
		Ok(self.lock()?.get(namespace).map_or(0, MessageGroup::len))
	}

	/// Read and remove the messages of `namespace`
	///
	/// This is the display-once step a session layer performs after the
	/// messages have been shown.
	///
	/// # Examples
	///
	/// ```
	/// use supermessenger_messages::{MemoryMessageStore, MessageStore};
	///
	/// let store = MemoryMessageStore::new();
	/// store.add_info("Welcome back").unwrap();
	///
	/// let taken = store.take_namespace("info").unwrap();
	/// assert_eq!(taken.len(), 1);
	/// assert!(!store.has_messages("info").unwrap());
	/// ```
	pub fn take_namespace(&self, namespace: &str) -> Result<MessageGroup> {
		let taken = self.lock()?.shift_remove(namespace).unwrap_or_default();
		tracing::debug!(namespace = %namespace, size = taken.len(), "took flash messages");
		Ok(taken)
	}

	/// Remove every namespace
	pub fn clear_all(&self) -> Result<()> {
		self.lock()?.clear();
		tracing::debug!("cleared all flash messages");
		Ok(())
	}

	/// Serialize every bucket to JSON for a session layer to persist
	pub fn to_json(&self) -> Result<String> {
		let buckets = self.lock()?;
		Ok(serde_json::to_string(&*buckets)?)
	}

	/// Rebuild a store from JSON produced by [`MemoryMessageStore::to_json`]
	pub fn from_json(data: &str) -> Result<Self> {
		let buckets: Buckets = serde_json::from_str(data)?;
		Ok(Self {
			buckets: Arc::new(Mutex::new(buckets)),
		})
	}
}

impl MessageStore for MemoryMessageStore {
	type Error = StoreError;

	fn messages_from_namespace(&self, namespace: &str) -> Result<MessageGroup> {
		Ok(self.lock()?.get(namespace).cloned().unwrap_or_default())
	}

	fn has_messages(&self, namespace: &str) -> Result<bool> {
		Ok(self
			.lock()?
			.get(namespace)
			.is_some_and(|group| !group.is_empty()))
	}

	fn clear_messages(&self, namespace: &str) -> Result<bool> {
		let removed = self.lock()?.shift_remove(namespace);
		tracing::debug!(namespace = %namespace, "cleared flash messages");
		Ok(removed.is_some_and(|group| !group.is_empty()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::group::MessageNode;
	use rstest::{fixture, rstest};

	#[fixture]
	fn store() -> MemoryMessageStore {
		MemoryMessageStore::new()
	}

	#[rstest]
	fn test_empty_namespace(store: MemoryMessageStore) {
		let messages = store.messages_from_namespace("info").unwrap();
		assert!(messages.is_empty());
		assert!(!store.has_messages("info").unwrap());
		assert_eq!(store.count("info").unwrap(), 0);
	}

	#[rstest]
	fn test_add_messages(store: MemoryMessageStore) {
		store.add_message("info", "Test message 1").unwrap();
		store.add_message("info", "Test message 2").unwrap();

		let messages = store.messages_from_namespace("info").unwrap();
		assert_eq!(
			messages.flatten().collect::<Vec<_>>(),
			vec!["Test message 1", "Test message 2"]
		);
		assert_eq!(store.count("info").unwrap(), 2);
	}

	#[rstest]
	fn test_reading_does_not_consume(store: MemoryMessageStore) {
		store.add_error("Bad input").unwrap();

		let first = store.messages_from_namespace("error").unwrap();
		let second = store.messages_from_namespace("error").unwrap();
		assert_eq!(first, second);
		assert_eq!(store.count("error").unwrap(), 1);
	}

	#[rstest]
	fn test_namespaces_are_independent(store: MemoryMessageStore) {
		store.add_info("Info message").unwrap();
		store.add_success("Success message").unwrap();
		store.add_error("Error message").unwrap();
		store.add_default("Default message").unwrap();

		for severity in Severity::ALL {
			assert_eq!(store.count(severity.as_str()).unwrap(), 1);
		}
		assert_eq!(
			store.namespaces().unwrap(),
			vec!["info", "success", "error", "default"]
		);
	}

	#[rstest]
	fn test_add_group_keeps_nesting(store: MemoryMessageStore) {
		store
			.add_group("custom", MessageGroup::from(vec!["x", "y"]))
			.unwrap();
		store.add_message("custom", "z").unwrap();

		let messages = store.messages_from_namespace("custom").unwrap();
		assert_eq!(
			messages.nodes(),
			&[MessageNode::group(["x", "y"]), MessageNode::text("z")]
		);
	}

	#[rstest]
	fn test_clear_messages(store: MemoryMessageStore) {
		store.add_info("Test").unwrap();
		store.add_error("Other").unwrap();

		assert!(store.clear_messages("info").unwrap());
		assert!(!store.clear_messages("info").unwrap());
		assert!(!store.has_messages("info").unwrap());
		assert!(store.has_messages("error").unwrap());
	}

	#[rstest]
	fn test_clear_all(store: MemoryMessageStore) {
		store.add_info("Test").unwrap();
		store.add_error("Other").unwrap();

		store.clear_all().unwrap();
		assert!(store.namespaces().unwrap().is_empty());
	}

	#[rstest]
	fn test_take_namespace(store: MemoryMessageStore) {
		store.add_success("Saved").unwrap();

		let taken = store.take_namespace("success").unwrap();
		assert_eq!(taken.flatten().collect::<Vec<_>>(), vec!["Saved"]);
		assert!(store.take_namespace("success").unwrap().is_empty());
	}

	#[rstest]
	fn test_clones_share_buckets(store: MemoryMessageStore) {
		let handle = store.clone();
		handle.add_info("Shared").unwrap();
		assert!(store.has_messages("info").unwrap());
	}

	#[rstest]
	fn test_json_round_trip(store: MemoryMessageStore) {
		store.add_info("one").unwrap();
		store
			.add_group("custom", MessageGroup::from(vec!["a", "b"]))
			.unwrap();

		let json = store.to_json().unwrap();
		assert_eq!(json, r#"{"info":["one"],"custom":[["a","b"]]}"#);

		let restored = MemoryMessageStore::from_json(&json).unwrap();
		assert_eq!(restored.namespaces().unwrap(), vec!["info", "custom"]);
		assert_eq!(
			restored.messages_from_namespace("custom").unwrap(),
			store.messages_from_namespace("custom").unwrap()
		);
	}

	#[rstest]
	fn test_from_invalid_json() {
		let result = MemoryMessageStore::from_json("not json");
		assert!(matches!(result, Err(StoreError::Serialization(_))));
	}

	#[rstest]
	fn test_poisoned_lock_is_reported(store: MemoryMessageStore) {
		let handle = store.clone();
		let _ = std::thread::spawn(move || {
			let _guard = handle.buckets.lock().unwrap();
			panic!("poison the store");
		})
		.join();

		let result = store.messages_from_namespace("info");
		assert!(matches!(result, Err(StoreError::LockPoisoned)));
	}
}
