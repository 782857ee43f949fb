//! Flash message rendering
//!
//! [`MessageRenderer`] reads one namespace from a [`MessageStore`], flattens
//! its nested groups, escapes every message and wraps the result in the
//! configured [`RenderTemplate`].
//!
//! ## Example
//!
//! ```rust
//! use supermessenger_messages::MemoryMessageStore;
//! use supermessenger_view::MessageRenderer;
//!
//! let store = MemoryMessageStore::new();
//! store.add_error("Bad input").unwrap();
//!
//! let renderer = MessageRenderer::with_default_escaper(store);
//! assert_eq!(
//!     renderer.render("error", &[]).unwrap(),
//!     r#"<ul class="error"><li>Bad input</li></ul>"#
//! );
//! ```

use crate::classes::ClassMap;
use crate::escape::{DefaultEscaper, HtmlEscaper};
use crate::settings::RendererSettings;
use crate::template::RenderTemplate;
use supermessenger_messages::{MessageGroup, MessageStore};

/// Renders the messages of a namespace as an HTML fragment
///
/// The store and the escaper are injected at construction. Rendering only
/// reads from the store; errors it raises are returned unchanged.
#[derive(Debug, Clone)]
pub struct MessageRenderer<S, E = DefaultEscaper> {
	store: S,
	escaper: E,
	template: RenderTemplate,
	classes: ClassMap,
}

impl<S: MessageStore> MessageRenderer<S, DefaultEscaper> {
	/// Create a renderer that escapes with [`DefaultEscaper`]
	pub fn with_default_escaper(store: S) -> Self {
		Self::new(store, DefaultEscaper)
	}
}

impl<S: MessageStore, E: HtmlEscaper> MessageRenderer<S, E> {
	/// Create a renderer with the default template and classes
	pub fn new(store: S, escaper: E) -> Self {
		Self {
			store,
			escaper,
			template: RenderTemplate::default(),
			classes: ClassMap::default(),
		}
	}

	/// Create a renderer configured from `settings`
	pub fn from_settings(store: S, escaper: E, settings: &RendererSettings) -> Self {
		Self {
			store,
			escaper,
			template: settings.template.clone(),
			classes: settings.classes.clone(),
		}
	}

	/// Replace the wrapping markup
	pub fn with_template(mut self, template: RenderTemplate) -> Self {
		self.template = template;
		self
	}

	/// Replace the severity classes
	pub fn with_class_map(mut self, classes: ClassMap) -> Self {
		self.classes = classes;
		self
	}

	/// Render the messages of `namespace`
	///
	/// `classes` overrides the class lookup when non-empty; otherwise the
	/// class mapped to `namespace` is used, or the `default` class for
	/// unmapped namespaces. Returns an empty string when there is nothing
	/// to show.
	///
	/// # Examples
	///
	/// ```
	/// use supermessenger_messages::MemoryMessageStore;
	/// use supermessenger_view::{MessageRenderer, RenderTemplate};
	///
	/// let store = MemoryMessageStore::new();
	/// store.add_message("notice", "a").unwrap();
	/// store.add_message("notice", "b").unwrap();
	///
	/// let renderer = MessageRenderer::with_default_escaper(&store).with_template(
	///     RenderTemplate::new()
	///         .with_open_format("<div%s>")
	///         .with_separator("|")
	///         .with_close("</div>"),
	/// );
	///
	/// assert_eq!(renderer.render("notice", &["x"]).unwrap(), r#"<div class="x">a|b</div>"#);
	/// assert_eq!(renderer.render("empty", &["x"]).unwrap(), "");
	/// ```
	pub fn render(&self, namespace: &str, classes: &[&str]) -> Result<String, S::Error> {
		let messages = self.store.messages_from_namespace(namespace)?;

		let items: Vec<_> = messages
			.flatten()
			.map(|item| self.escaper.escape(item))
			.collect();

		if items.is_empty() {
			tracing::trace!(namespace = %namespace, "no flash messages to render");
			return Ok(String::new());
		}

		let class_attr = if classes.is_empty() {
			format!(" class=\"{}\"", self.classes.class_for(namespace))
		} else {
			format!(" class=\"{}\"", classes.join(" "))
		};

		tracing::debug!(
			namespace = %namespace,
			count = items.len(),
			explicit_classes = !classes.is_empty(),
			"rendering flash messages"
		);

		let mut markup = self.template.open_tag(&class_attr);
		markup.push_str(&items.join(self.template.separator()));
		markup.push_str(self.template.close());
		Ok(markup)
	}

	/// Raw messages of `namespace`, without rendering
	pub fn messages(&self, namespace: &str) -> Result<MessageGroup, S::Error> {
		self.store.messages_from_namespace(namespace)
	}

	/// Whether `namespace` holds anything to render
	pub fn has_messages(&self, namespace: &str) -> Result<bool, S::Error> {
		self.store.has_messages(namespace)
	}

	/// Drop the messages of `namespace` from the store
	pub fn clear_messages(&self, namespace: &str) -> Result<bool, S::Error> {
		self.store.clear_messages(namespace)
	}
}

impl<S, E> MessageRenderer<S, E> {
	/// Wrapping markup
	pub fn template(&self) -> &RenderTemplate {
		&self.template
	}

	/// Wrapping markup, for in-place changes
	pub fn template_mut(&mut self) -> &mut RenderTemplate {
		&mut self.template
	}

	/// Class per severity
	pub fn class_map(&self) -> &ClassMap {
		&self.classes
	}

	/// The underlying message store
	pub fn store(&self) -> &S {
		&self.store
	}

	/// The escaper applied to every message
	pub fn escaper(&self) -> &E {
		&self.escaper
	}
}
