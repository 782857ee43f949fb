//! Message severity definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four well-known message namespaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	Info,
	Error,
	Success,
	Default,
}

impl Severity {
	/// Every severity, in declaration order
	pub const ALL: [Severity; 4] = [
		Severity::Info,
		Severity::Error,
		Severity::Success,
		Severity::Default,
	];

	/// Returns the namespace key of the severity
	///
	/// # Examples
	///
	/// ```
	/// use supermessenger_messages::Severity;
	///
	/// assert_eq!(Severity::Info.as_str(), "info");
	/// assert_eq!(Severity::Error.as_str(), "error");
	/// assert_eq!(Severity::Success.as_str(), "success");
	/// assert_eq!(Severity::Default.as_str(), "default");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			Severity::Info => "info",
			Severity::Error => "error",
			Severity::Success => "success",
			Severity::Default => "default",
		}
	}

	/// Resolves a namespace key to a severity
	///
	/// Namespaces are plain keys, so the match is exact and case-sensitive.
	///
	/// # Examples
	///
	/// ```
	/// use supermessenger_messages::Severity;
	///
	/// assert_eq!(Severity::from_namespace("error"), Some(Severity::Error));
	/// assert_eq!(Severity::from_namespace("ERROR"), None);
	/// assert_eq!(Severity::from_namespace("custom"), None);
	/// ```
	pub fn from_namespace(namespace: &str) -> Option<Self> {
		match namespace {
			"info" => Some(Severity::Info),
			"error" => Some(Severity::Error),
			"success" => Some(Severity::Success),
			"default" => Some(Severity::Default),
			_ => None,
		}
	}
}

impl Default for Severity {
	fn default() -> Self {
		Severity::Default
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl AsRef<str> for Severity {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
