//! Wrapping markup for a rendered message list

use serde::{Deserialize, Serialize};

/// Default opening markup, `%s` receives the class attribute
pub const DEFAULT_OPEN_FORMAT: &str = "<ul%s><li>";
/// Default markup between two messages
pub const DEFAULT_SEPARATOR: &str = "</li><li>";
/// Default closing markup
pub const DEFAULT_CLOSE: &str = "</li></ul>";

/// Open, separator and close strings wrapped around escaped messages
///
/// The templates are not validated: output is only as well-formed as the
/// markup configured here.
///
/// # Examples
///
/// ```
/// use supermessenger_view::RenderTemplate;
///
/// let template = RenderTemplate::new()
///     .with_open_format("<div%s>")
///     .with_separator("|")
///     .with_close("</div>");
///
/// assert_eq!(template.open_tag(r#" class="x""#), r#"<div class="x">"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderTemplate {
	open_format: String,
	separator: String,
	close: String,
}

impl RenderTemplate {
	/// Create a template with the default list markup
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the opening format
	pub fn with_open_format(mut self, open_format: impl Into<String>) -> Self {
		self.open_format = open_format.into();
		self
	}

	/// Set the separator
	pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
		self.separator = separator.into();
		self
	}

	/// Set the closing string
	pub fn with_close(mut self, close: impl Into<String>) -> Self {
		self.close = close.into();
		self
	}

	/// Get the formatted string used to open the message list
	pub fn open_format(&self) -> &str {
		&self.open_format
	}

	/// Set the formatted string used to open the message list
	pub fn set_open_format(&mut self, open_format: impl Into<String>) -> &mut Self {
		self.open_format = open_format.into();
		self
	}

	/// Get the string placed between two messages
	pub fn separator(&self) -> &str {
		&self.separator
	}

	/// Set the string placed between two messages
	pub fn set_separator(&mut self, separator: impl Into<String>) -> &mut Self {
		self.separator = separator.into();
		self
	}

	/// Get the string used to close the message list
	pub fn close(&self) -> &str {
		&self.close
	}

	/// Set the string used to close the message list
	pub fn set_close(&mut self, close: impl Into<String>) -> &mut Self {
		self.close = close.into();
		self
	}

	/// Fill the open format with `class_attr`
	///
	/// The first `%s` receives `class_attr` and `%%` produces a literal `%`.
	/// Any other `%` is copied as is. Without a `%s` slot the attribute is
	/// dropped.
	///
	/// # Examples
	///
	/// ```
	/// use supermessenger_view::RenderTemplate;
	///
	/// let template = RenderTemplate::new().with_open_format("<p%s data-w=\"100%%\">");
	/// assert_eq!(template.open_tag(" class=\"a\""), "<p class=\"a\" data-w=\"100%\">");
	/// ```
	pub fn open_tag(&self, class_attr: &str) -> String {
		let mut out = String::with_capacity(self.open_format.len() + class_attr.len());
		let mut filled = false;
		let mut chars = self.open_format.chars().peekable();

		while let Some(ch) = chars.next() {
			if ch != '%' {
				out.push(ch);
				continue;
			}
			match chars.peek() {
				Some('%') => {
					chars.next();
					out.push('%');
				}
				Some('s') if !filled => {
					chars.next();
					out.push_str(class_attr);
					filled = true;
				}
				_ => out.push('%'),
			}
		}
		out
	}
}

impl Default for RenderTemplate {
	fn default() -> Self {
		Self {
			open_format: DEFAULT_OPEN_FORMAT.to_string(),
			separator: DEFAULT_SEPARATOR.to_string(),
			close: DEFAULT_CLOSE.to_string(),
		}
	}
}
