//! HTML rendering of flash messages
//!
//! Turns the messages stored under a namespace into a single HTML fragment:
//! nested groups are flattened, each message is escaped, and the result is
//! wrapped in configurable open/separator/close markup with a class chosen
//! from the message severity.
//!
//! ## Example
//!
//! ```rust
//! use supermessenger_messages::MemoryMessageStore;
//! use supermessenger_view::MessageRenderer;
//!
//! let store = MemoryMessageStore::new();
//! store.add_info("Profile updated").unwrap();
//!
//! let renderer = MessageRenderer::with_default_escaper(&store);
//! assert_eq!(
//!     renderer.render("info", &[]).unwrap(),
//!     r#"<ul class="info"><li>Profile updated</li></ul>"#
//! );
//! assert_eq!(renderer.render("error", &[]).unwrap(), "");
//! ```

pub mod classes;
pub mod escape;
pub mod renderer;
pub mod settings;
pub mod template;

pub use classes::ClassMap;
pub use escape::{DefaultEscaper, HtmlEscaper};
pub use renderer::MessageRenderer;
pub use settings::{RendererSettings, SettingsError};
pub use template::RenderTemplate;

/// Re-export commonly used types
pub mod prelude {
	pub use crate::classes::*;
	pub use crate::escape::*;
	pub use crate::renderer::*;
	pub use crate::settings::*;
	pub use crate::template::*;
}
