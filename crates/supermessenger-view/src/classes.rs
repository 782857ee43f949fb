//! Style classes per severity

use serde::{Deserialize, Serialize};
use supermessenger_messages::Severity;

/// Mapping from each [`Severity`] to the class put on its wrapper tag
///
/// Unmapped namespaces resolve to the `default` entry.
///
/// # Examples
///
/// ```
/// use supermessenger_view::ClassMap;
///
/// let classes = ClassMap::default();
/// assert_eq!(classes.class_for("error"), "error");
/// assert_eq!(classes.class_for("custom"), "default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassMap {
	info: String,
	error: String,
	success: String,
	default: String,
}

impl ClassMap {
	/// Build a map with one class per severity
	pub fn new(
		info: impl Into<String>,
		error: impl Into<String>,
		success: impl Into<String>,
		default: impl Into<String>,
	) -> Self {
		Self {
			info: info.into(),
			error: error.into(),
			success: success.into(),
			default: default.into(),
		}
	}

	/// Class of a severity
	pub fn get(&self, severity: Severity) -> &str {
		match severity {
			Severity::Info => &self.info,
			Severity::Error => &self.error,
			Severity::Success => &self.success,
			Severity::Default => &self.default,
		}
	}

	/// Class for a namespace, falling back to the `default` entry
	pub fn class_for(&self, namespace: &str) -> &str {
		self.get(Severity::from_namespace(namespace).unwrap_or(Severity::Default))
	}
}

impl Default for ClassMap {
	fn default() -> Self {
		Self::new(
			Severity::Info.as_str(),
			Severity::Error.as_str(),
			Severity::Success.as_str(),
			Severity::Default.as_str(),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("info", "info")]
	#[case("error", "error")]
	#[case("success", "success")]
	#[case("default", "default")]
	#[case("custom", "default")]
	#[case("", "default")]
	#[case("Error", "default")]
	fn test_default_classes(#[case] namespace: &str, #[case] expected: &str) {
		assert_eq!(ClassMap::default().class_for(namespace), expected);
	}

	#[rstest]
	fn test_custom_classes() {
		let classes = ClassMap::new("alert alert-info", "alert alert-danger", "alert alert-success", "alert");

		assert_eq!(classes.class_for("info"), "alert alert-info");
		assert_eq!(classes.class_for("error"), "alert alert-danger");
		assert_eq!(classes.get(Severity::Success), "alert alert-success");
		assert_eq!(classes.class_for("warning"), "alert");
	}

	#[rstest]
	fn test_partial_deserialization_keeps_defaults() {
		let classes: ClassMap = toml::from_str(r#"error = "danger""#).unwrap();
		assert_eq!(classes.class_for("error"), "danger");
		assert_eq!(classes.class_for("info"), "info");
		assert_eq!(classes.class_for("other"), "default");
	}
}
