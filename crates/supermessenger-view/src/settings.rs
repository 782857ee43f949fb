//! Renderer settings loaded from TOML
//!
//! Every key is optional; anything left out keeps the default list markup
//! and severity classes.
//!
//! ```toml
//! [template]
//! open_format = "<ul%s><li>"
//! separator = "</li><li>"
//! close = "</li></ul>"
//!
//! [classes]
//! info = "info"
//! error = "error"
//! success = "success"
//! default = "default"
//! ```

use crate::classes::ClassMap;
use crate::template::RenderTemplate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for loading renderer settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Template and class configuration for a [`MessageRenderer`](crate::MessageRenderer)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
	/// Wrapping markup
	pub template: RenderTemplate,
	/// Class per severity
	pub classes: ClassMap,
}

impl RendererSettings {
	/// Parse settings from a TOML document
	///
	/// # Examples
	///
	/// ```
	/// use supermessenger_view::RendererSettings;
	///
	/// let settings = RendererSettings::from_toml_str(r#"
	///     [classes]
	///     error = "alert-danger"
	/// "#).unwrap();
	///
	/// assert_eq!(settings.classes.class_for("error"), "alert-danger");
	/// assert_eq!(settings.template.close(), "</li></ul>");
	/// ```
	pub fn from_toml_str(data: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(data)?)
	}

	/// Read and parse settings from a TOML file
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let data = fs::read_to_string(path)?;
		let settings = Self::from_toml_str(&data)?;
		tracing::debug!(path = %path.display(), "loaded renderer settings");
		Ok(settings)
	}

	/// Wrapping markup
	pub fn template(&self) -> &RenderTemplate {
		&self.template
	}

	/// Class per severity
	pub fn class_map(&self) -> &ClassMap {
		&self.classes
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_empty_document_uses_defaults() {
		let settings = RendererSettings::from_toml_str("").unwrap();
		assert_eq!(settings, RendererSettings::default());
	}

	#[rstest]
	fn test_full_document() {
		let settings = RendererSettings::from_toml_str(
			r#"
			[template]
			open_format = "<div%s>"
			separator = "|"
			close = "</div>"

			[classes]
			info = "i"
			error = "e"
			success = "s"
			default = "d"
			"#,
		)
		.unwrap();

		assert_eq!(settings.template().open_format(), "<div%s>");
		assert_eq!(settings.template().separator(), "|");
		assert_eq!(settings.template().close(), "</div>");
		assert_eq!(settings.class_map(), &ClassMap::new("i", "e", "s", "d"));
	}

	#[rstest]
	fn test_invalid_document() {
		let result = RendererSettings::from_toml_str("[template\nclose = ");
		assert!(matches!(result, Err(SettingsError::Toml(_))));
	}

	#[rstest]
	fn test_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[template]\nseparator = \"</li>\\n<li>\"").unwrap();

		let settings = RendererSettings::from_toml_file(file.path()).unwrap();
		assert_eq!(settings.template().separator(), "</li>\n<li>");
	}

	#[rstest]
	fn test_missing_file() {
		let result = RendererSettings::from_toml_file("/nonexistent/supermessenger.toml");
		assert!(matches!(result, Err(SettingsError::Io(_))));
	}
}
