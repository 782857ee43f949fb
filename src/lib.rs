//! # SuperMessenger
//!
//! Flash message rendering for web sessions.
//!
//! Requests add short-lived notifications under a namespace (`info`,
//! `error`, `success`, `default` or any custom key). A view then renders
//! one namespace as an HTML fragment: nested groups are flattened, every
//! message is escaped, and the list is wrapped in configurable markup with
//! a class chosen from the severity.
//!
//! ## Feature Flags
//!
//! - `messages` - Severities, message groups and stores
//! - `view` - The HTML renderer (implies `messages`)
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust
//! use supermessenger::prelude::*;
//!
//! let store = MemoryMessageStore::new();
//! store.add_error("Bad input").unwrap();
//!
//! let renderer = MessageRenderer::with_default_escaper(&store);
//! assert_eq!(
//!     renderer.render("error", &[]).unwrap(),
//!     r#"<ul class="error"><li>Bad input</li></ul>"#
//! );
//! ```

#[cfg(feature = "messages")]
pub mod messages;
#[cfg(feature = "view")]
pub mod view;

#[cfg(feature = "messages")]
pub use supermessenger_messages::{
	MemoryMessageStore, MessageGroup, MessageNode, MessageStore, Severity, StoreError,
};

#[cfg(feature = "view")]
pub use supermessenger_view::{
	ClassMap, DefaultEscaper, HtmlEscaper, MessageRenderer, RenderTemplate, RendererSettings,
	SettingsError,
};

/// Re-export commonly used types
pub mod prelude {
	#[cfg(feature = "messages")]
	pub use supermessenger_messages::prelude::*;

	#[cfg(feature = "view")]
	pub use supermessenger_view::prelude::*;
}

#[cfg(all(test, feature = "full"))]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_facade_renders_through_reexports() {
		let store = MemoryMessageStore::new();
		store.add_severity(Severity::Success, "Done").unwrap();

		let renderer = MessageRenderer::new(&store, DefaultEscaper);
		assert_eq!(
			renderer.render("success", &[]).unwrap(),
			r#"<ul class="success"><li>Done</li></ul>"#
		);
	}
}
