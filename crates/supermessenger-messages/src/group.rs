//! Nested message collections
//!
//! A namespace holds a [`MessageGroup`]: an ordered sequence whose entries
//! are either message strings or further groups. Groups nest to any depth,
//! and readers see them through [`MessageGroup::flatten`], which yields the
//! leaves depth-first in the order they were stored.
//!
//! ## Example
//!
//! ```rust
//! use supermessenger_messages::{MessageGroup, MessageNode};
//!
//! let group = MessageGroup::from(vec![
//!     MessageNode::group(["x", "y"]),
//!     MessageNode::text("z"),
//! ]);
//!
//! let leaves: Vec<&str> = group.flatten().collect();
//! assert_eq!(leaves, vec!["x", "y", "z"]);
//! ```

use serde::{Deserialize, Serialize};

/// A single entry of a message group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageNode {
	/// A message string
	Text(String),
	/// A nested sequence of entries
	Group(Vec<MessageNode>),
}

impl MessageNode {
	/// Create a text node
	pub fn text(text: impl Into<String>) -> Self {
		MessageNode::Text(text.into())
	}

	/// Create a nested group of text nodes
	pub fn group<I, T>(texts: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<String>,
	{
		MessageNode::Group(texts.into_iter().map(|text| MessageNode::Text(text.into())).collect())
	}
}

impl From<String> for MessageNode {
	fn from(text: String) -> Self {
		MessageNode::Text(text)
	}
}

impl From<&str> for MessageNode {
	fn from(text: &str) -> Self {
		MessageNode::Text(text.to_string())
	}
}

impl From<Vec<MessageNode>> for MessageNode {
	fn from(nodes: Vec<MessageNode>) -> Self {
		MessageNode::Group(nodes)
	}
}

/// Ordered, possibly nested collection of messages for one namespace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageGroup {
	nodes: Vec<MessageNode>,
}

impl MessageGroup {
	/// Create an empty group
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a message string
	pub fn push(&mut self, text: impl Into<String>) {
		self.nodes.push(MessageNode::Text(text.into()));
	}

	/// Append a nested group
	pub fn push_group(&mut self, group: MessageGroup) {
		self.nodes.push(MessageNode::Group(group.nodes));
	}

	/// Top-level entries, without flattening
	pub fn nodes(&self) -> &[MessageNode] {
		&self.nodes
	}

	/// Iterate over every message string, depth-first and left-to-right
	///
	/// # Examples
	///
	/// ```
	/// use supermessenger_messages::{MessageGroup, MessageNode};
	///
	/// let group = MessageGroup::from(vec![
	///     MessageNode::text("a"),
	///     MessageNode::Group(vec![MessageNode::group(["b", "c"]), MessageNode::text("d")]),
	/// ]);
	/// assert_eq!(group.flatten().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
	/// ```
	pub fn flatten(&self) -> Flatten<'_> {
		Flatten {
			stack: vec![self.nodes.iter()],
		}
	}

	/// Number of message strings at any depth
	pub fn len(&self) -> usize {
		self.flatten().count()
	}

	/// True when the group holds no message string at any depth
	///
	/// Nested groups that are themselves empty do not count as messages.
	pub fn is_empty(&self) -> bool {
		self.flatten().next().is_none()
	}

	/// Consume the group into its flattened message strings
	pub fn into_flat_vec(self) -> Vec<String> {
		fn collect(nodes: Vec<MessageNode>, out: &mut Vec<String>) {
			for node in nodes {
				match node {
					MessageNode::Text(text) => out.push(text),
					MessageNode::Group(children) => collect(children, out),
				}
			}
		}

		let mut out = Vec::new();
		collect(self.nodes, &mut out);
		out
	}
}

impl From<Vec<MessageNode>> for MessageGroup {
	fn from(nodes: Vec<MessageNode>) -> Self {
		Self { nodes }
	}
}

impl From<Vec<String>> for MessageGroup {
	fn from(texts: Vec<String>) -> Self {
		texts.into_iter().collect()
	}
}

impl From<Vec<&str>> for MessageGroup {
	fn from(texts: Vec<&str>) -> Self {
		texts.into_iter().collect()
	}
}

impl<T: Into<MessageNode>> FromIterator<T> for MessageGroup {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self {
			nodes: iter.into_iter().map(Into::into).collect(),
		}
	}
}

impl<T: Into<MessageNode>> Extend<T> for MessageGroup {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.nodes.extend(iter.into_iter().map(Into::into));
	}
}

/// Depth-first iterator over the message strings of a [`MessageGroup`]
#[derive(Debug, Clone)]
pub struct Flatten<'a> {
	stack: Vec<std::slice::Iter<'a, MessageNode>>,
}

impl<'a> Iterator for Flatten<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		while let Some(top) = self.stack.last_mut() {
			match top.next() {
				Some(MessageNode::Text(text)) => return Some(text.as_str()),
				Some(MessageNode::Group(children)) => self.stack.push(children.iter()),
				None => {
					self.stack.pop();
				}
			}
		}
		None
	}
}
