//! HTML escaping for rendered messages
//!
//! Message text comes from the session and is never trusted. Every item
//! passes through an [`HtmlEscaper`] before it is joined into markup.
//!
//! Escaped characters ([`DefaultEscaper`]):
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`

use std::borrow::Cow;

/// Deterministic, side-effect free HTML escaping
pub trait HtmlEscaper {
	/// Escape `value` for use as HTML text
	fn escape<'a>(&self, value: &'a str) -> Cow<'a, str>;
}

/// Escaper used when none is injected
///
/// # Examples
///
/// ```
/// use supermessenger_view::{DefaultEscaper, HtmlEscaper};
///
/// let escaper = DefaultEscaper;
/// assert_eq!(escaper.escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escaper.escape("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escaper.escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEscaper;

impl HtmlEscaper for DefaultEscaper {
	fn escape<'a>(&self, value: &'a str) -> Cow<'a, str> {
		html_escape::encode_quoted_attribute(value)
	}
}

impl<F> HtmlEscaper for F
where
	F: Fn(&str) -> String,
{
	fn escape<'a>(&self, value: &'a str) -> Cow<'a, str> {
		Cow::Owned(self(value))
	}
}
