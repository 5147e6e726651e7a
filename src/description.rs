//! Message formulas and the fixed/derived field model.
//!
//! Descriptions and status names are either pinned by the caller or derived
//! on every read from the current kind, property and auxiliary data. Keeping
//! the state as an explicit [`Field`] means there is no cached string that can
//! go stale when the property changes.

use crate::identifier::status_name;
use crate::kinds::ErrorKind;
use std::borrow::Cow;

/// State of a dynamic text field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field {
    /// Recomputed from the error's current state on every access.
    #[default]
    Derived,
    /// Set explicitly; immune to later property changes.
    Fixed(String),
}

impl Field {
    /// Whether the field has been pinned.
    #[inline]
    pub const fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// Resolve the field, deriving it with `derive` when not fixed.
    #[inline]
    pub(crate) fn resolve<'a>(&'a self, derive: impl FnOnce() -> String) -> Cow<'a, str> {
        match self {
            Self::Fixed(value) => Cow::Borrowed(value.as_str()),
            Self::Derived => Cow::Owned(derive()),
        }
    }
}

/// Inputs the formulas need besides the kind.
pub(crate) struct Subject<'a> {
    pub property: &'a str,
    pub bounds: (i64, i64),
    pub formats: &'a [Cow<'static, str>],
}

/// Description formula for `kind`. Generic kinds derive to an empty string.
pub(crate) fn describe(kind: ErrorKind, subject: &Subject<'_>) -> String {
    let property = subject.property;
    match kind {
        ErrorKind::Required => required(property),
        ErrorKind::InvalidFormat => invalid_format(property, subject.formats),
        ErrorKind::OutOfRange => out_of_range(property, subject.bounds.0, subject.bounds.1),
        ErrorKind::AlreadyExists => already_exists(property),
        ErrorKind::NotFound => not_found(property),
        ErrorKind::FailedRemoteCall => remote_call(property),
        ErrorKind::Unknown | ErrorKind::UnknownInfrastructure => String::new(),
    }
}

/// Status-name formula for `kind`. Generic kinds derive to an empty string.
pub(crate) fn status(kind: ErrorKind, property: &str) -> String {
    kind.status_suffix()
        .map(|suffix| status_name(property, suffix))
        .unwrap_or_default()
}

fn required(property: &str) -> String {
    if property.is_empty() {
        return "required".to_owned();
    }
    format!("The property {property} is required")
}

fn invalid_format(property: &str, formats: &[Cow<'static, str>]) -> String {
    let expected = formats.join(",");
    if property.is_empty() {
        return format!("invalid format, expected [{expected}]");
    }
    format!("The property {property} has an invalid format, expected [{expected}]")
}

fn out_of_range(property: &str, lower: i64, upper: i64) -> String {
    if property.is_empty() {
        return format!("out of range [{lower},{upper})");
    }
    format!("The property {property} is out of range [{lower},{upper})")
}

fn already_exists(resource: &str) -> String {
    if resource.is_empty() {
        return "already exists".to_owned();
    }
    format!("The resource {resource} already exists")
}

fn not_found(resource: &str) -> String {
    if resource.is_empty() {
        return "not found".to_owned();
    }
    format!("The resource {resource} was not found")
}

fn remote_call(resource: &str) -> String {
    if resource.is_empty() {
        return "Failed to call external resource".to_owned();
    }
    format!("Failed to call external resource [{resource}]")
}
