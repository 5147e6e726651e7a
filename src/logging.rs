//! Structured log entry for a `DddError`.
//!
//! # Properties
//!
//! - Borrows from the error with an explicit lifetime
//! - Cannot outlive the error that created it
//! - Accessors are allocation-free; only derived fields are materialized once
//!   when the entry is built
//!
//! The crate does not pick a logging framework. Callers either read the
//! structured fields and hand them to their logger, or render a single line
//! with [`ErrorLog::write_to`].

use crate::kinds::{ErrorGroup, ErrorKind};
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Maximum length for any individual field in formatted output
pub const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated strings
pub const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Structured log entry with data borrowed from a `DddError`.
///
/// ```rust
/// # use ddd_errors::DddError;
/// let err = DddError::required("email");
/// err.with_log(|log| {
///     assert_eq!(log.status(), "EmailIsRequired");
///     assert_eq!(log.description(), "The property email is required");
/// });
/// ```
pub struct ErrorLog<'a> {
    /// Layer that raised the error.
    pub group: ErrorGroup,
    /// Taxonomy bucket.
    pub kind: ErrorKind,
    /// Field or resource concerned.
    pub property: &'a str,
    /// Short summary.
    pub title: &'a str,
    /// Resolved description.
    pub description: Cow<'a, str>,
    /// Resolved status name.
    pub status: Cow<'a, str>,
    /// Underlying cause, if any.
    pub parent: Option<&'a (dyn Error + Send + Sync + 'static)>,
}

impl ErrorLog<'_> {
    /// Write a single structured line to `f`.
    ///
    /// Format: `[Group/Kind] status='..' property='..' title='..' description='..'`
    /// followed by ` parent='..'` when a cause is attached. Every field is
    /// truncated to [`MAX_FIELD_OUTPUT_LEN`].
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "[{}/{}] status='{}' property='{}' title='{}' description='{}'",
            self.group,
            self.kind,
            truncate_with_indicator(&self.status),
            truncate_with_indicator(self.property),
            truncate_with_indicator(self.title),
            truncate_with_indicator(&self.description),
        )?;

        if let Some(parent) = self.parent {
            let rendered = parent.to_string();
            write!(f, " parent='{}'", truncate_with_indicator(&rendered))?;
        }

        Ok(())
    }

    /// Error group.
    #[inline]
    pub const fn group(&self) -> ErrorGroup {
        self.group
    }

    /// Error kind.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Property the error concerns.
    #[inline]
    pub const fn property(&self) -> &str {
        self.property
    }

    /// Error title.
    #[inline]
    pub const fn title(&self) -> &str {
        self.title
    }

    /// Description, pinned or derived.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Status name, pinned or derived.
    #[inline]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Attached cause.
    #[inline]
    pub const fn parent(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.parent
    }
}

impl fmt::Display for ErrorLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl fmt::Debug for ErrorLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorLog")
            .field("group", &self.group)
            .field("kind", &self.kind)
            .field("property", &self.property)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("status", &self.status)
            .field("parent", &self.parent.map(|_| "<PRESENT>"))
            .finish()
    }
}

/// Cap a field at [`MAX_FIELD_OUTPUT_LEN`] bytes, cutting on a char boundary.
///
/// Fields within the cap are borrowed unchanged.
fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let max_content_len = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());

    // Last valid UTF-8 boundary at or before the limit
    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}
