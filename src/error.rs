//! The categorized error value.
//!
//! A `DddError` carries its taxonomy position (group + kind), the property or
//! resource it concerns, and two dynamic text fields: description and status
//! name. Both are derived from the current state until pinned with
//! [`DddError::with_description`] / [`DddError::with_status`].
//!
//! # Value Semantics
//!
//! Every setter consumes the error and returns the updated value. `Clone` is
//! cheap enough for error paths: the parent is behind an `Arc`, so clones
//! share the underlying cause read-only.
//!
//! # Example
//!
//! ```rust
//! use ddd_errors::DddError;
//!
//! let err = DddError::out_of_range("foo", 8, 256);
//! assert_eq!(err.description(), "The property foo is out of range [8,256)");
//! assert_eq!(err.status(), "FooOutOfRange");
//!
//! // Status keeps following the property, the pinned description does not.
//! let err = err.with_description("too many bits").with_property("key_size");
//! assert_eq!(err.description(), "too many bits");
//! assert_eq!(err.status(), "KeySizeOutOfRange");
//! ```

use crate::description::{self, Field, Subject};
use crate::kinds::{ErrorGroup, ErrorKind};
use crate::logging::ErrorLog;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Shared handle to an underlying cause.
pub type Parent = Arc<dyn Error + Send + Sync + 'static>;

/// Accepted format names; most validations list only a handful.
pub(crate) type Formats = SmallVec<[Cow<'static, str>; 4]>;

/// Categorized domain/infrastructure error.
#[derive(Clone)]
#[must_use = "errors should be returned, mapped or logged"]
pub struct DddError {
    group: ErrorGroup,
    kind: ErrorKind,
    property: String,
    title: Cow<'static, str>,
    description: Field,
    status: Field,
    parent: Option<Parent>,
    bounds: (i64, i64),
    formats: Formats,
}

impl DddError {
    fn for_kind(kind: ErrorKind, property: String) -> Self {
        Self {
            group: kind.group(),
            kind,
            property,
            title: Cow::Borrowed(kind.default_title()),
            description: Field::Derived,
            status: Field::Derived,
            parent: None,
            bounds: (0, 0),
            formats: SmallVec::new(),
        }
    }

    fn generic(kind: ErrorKind, title: Cow<'static, str>, description: String) -> Self {
        Self {
            title,
            description: Field::Fixed(description),
            ..Self::for_kind(kind, String::new())
        }
    }

    // ------------------------------------------------------------------------
    // Constructors
    // ------------------------------------------------------------------------

    /// Generic domain error with a caller-provided title and description.
    #[inline]
    pub fn domain(title: impl Into<Cow<'static, str>>, description: impl Into<String>) -> Self {
        Self::generic(ErrorKind::Unknown, title.into(), description.into())
    }

    /// Generic infrastructure error with a caller-provided title and description.
    #[inline]
    pub fn infrastructure(
        title: impl Into<Cow<'static, str>>,
        description: impl Into<String>,
    ) -> Self {
        Self::generic(
            ErrorKind::UnknownInfrastructure,
            title.into(),
            description.into(),
        )
    }

    /// A required property is missing.
    ///
    /// Description: `The property {property} is required`.
    #[inline]
    pub fn required(property: impl Into<String>) -> Self {
        Self::for_kind(ErrorKind::Required, property.into())
    }

    /// A property does not match any of the accepted formats.
    ///
    /// Description: `The property {property} has an invalid format, expected [f1,f2]`.
    /// See also the [`invalid_format!`](crate::invalid_format) macro.
    pub fn invalid_format<I, S>(property: impl Into<String>, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
            ..Self::for_kind(ErrorKind::InvalidFormat, property.into())
        }
    }

    /// A property is outside the half-open range `[lower, upper)`.
    #[inline]
    pub fn out_of_range(property: impl Into<String>, lower: i64, upper: i64) -> Self {
        Self {
            bounds: (lower, upper),
            ..Self::for_kind(ErrorKind::OutOfRange, property.into())
        }
    }

    /// The resource already exists.
    #[inline]
    pub fn already_exists(resource: impl Into<String>) -> Self {
        Self::for_kind(ErrorKind::AlreadyExists, resource.into())
    }

    /// The resource was not found.
    #[inline]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::for_kind(ErrorKind::NotFound, resource.into())
    }

    /// A call to an external resource failed (database, peer service, ...).
    #[inline]
    pub fn remote_call(resource: impl Into<String>) -> Self {
        Self::for_kind(ErrorKind::FailedRemoteCall, resource.into())
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Layer that raised the error.
    #[inline]
    pub const fn group(&self) -> ErrorGroup {
        self.group
    }

    /// Taxonomy bucket of the error.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Field or resource the error concerns; may be empty.
    #[inline]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Short summary shown to humans.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Detailed message, derived unless pinned.
    pub fn description(&self) -> Cow<'_, str> {
        self.description.resolve(|| {
            description::describe(
                self.kind,
                &Subject {
                    property: &self.property,
                    bounds: self.bounds,
                    formats: &self.formats,
                },
            )
        })
    }

    /// Machine-friendly status name (e.g. `FooNotFound`), derived unless pinned.
    pub fn status(&self) -> Cow<'_, str> {
        self.status
            .resolve(|| description::status(self.kind, &self.property))
    }

    /// Underlying cause, if one was attached.
    #[inline]
    pub fn parent(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.parent.as_deref()
    }

    /// Range bounds used by `OutOfRange` descriptions.
    #[inline]
    pub const fn bounds(&self) -> (i64, i64) {
        self.bounds
    }

    /// Accepted formats used by `InvalidFormat` descriptions.
    #[inline]
    pub fn formats(&self) -> &[Cow<'static, str>] {
        &self.formats
    }

    /// Whether the description was pinned by the caller.
    #[inline]
    pub const fn is_description_fixed(&self) -> bool {
        self.description.is_fixed()
    }

    /// Whether the status name was pinned by the caller.
    #[inline]
    pub const fn is_status_fixed(&self) -> bool {
        self.status.is_fixed()
    }

    // ------------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------------

    /// Raised by business rules or validation.
    #[inline]
    pub fn is_domain(&self) -> bool {
        self.group == ErrorGroup::Domain
    }

    /// Raised outside the process boundary.
    #[inline]
    pub fn is_infrastructure(&self) -> bool {
        self.group == ErrorGroup::Infrastructure
    }

    /// Kind is [`ErrorKind::Required`].
    #[inline]
    pub fn is_required(&self) -> bool {
        self.kind == ErrorKind::Required
    }

    /// Kind is [`ErrorKind::InvalidFormat`].
    #[inline]
    pub fn is_invalid_format(&self) -> bool {
        self.kind == ErrorKind::InvalidFormat
    }

    /// Kind is [`ErrorKind::OutOfRange`].
    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        self.kind == ErrorKind::OutOfRange
    }

    /// Kind is [`ErrorKind::AlreadyExists`].
    #[inline]
    pub fn is_already_exists(&self) -> bool {
        self.kind == ErrorKind::AlreadyExists
    }

    /// Kind is [`ErrorKind::NotFound`].
    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    /// Kind is [`ErrorKind::FailedRemoteCall`].
    #[inline]
    pub fn is_remote_call(&self) -> bool {
        self.kind == ErrorKind::FailedRemoteCall
    }

    // ------------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------------

    /// Change the kind. The group follows the kind so the pair always
    /// matches the taxonomy.
    #[inline]
    pub fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self.group = kind.group();
        self
    }

    /// Replace the title.
    #[inline]
    pub fn with_title(mut self, title: impl Into<Cow<'static, str>>) -> Self {
        self.title = title.into();
        self
    }

    /// Change the property. Derived fields follow it, pinned fields do not.
    #[inline]
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = property.into();
        self
    }

    /// Pin the description.
    #[inline]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Field::Fixed(description.into());
        self
    }

    /// Pin the status name.
    #[inline]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Field::Fixed(status.into());
        self
    }

    /// Attach an underlying cause.
    #[inline]
    pub fn with_parent<E>(mut self, parent: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.parent = Some(Arc::new(parent));
        self
    }

    /// Attach an already shared cause.
    #[inline]
    pub fn with_shared_parent(mut self, parent: Parent) -> Self {
        self.parent = Some(parent);
        self
    }

    // ------------------------------------------------------------------------
    // Logging
    // ------------------------------------------------------------------------

    /// Structured log entry borrowing from this error.
    ///
    /// ```rust
    /// # use ddd_errors::DddError;
    /// let err = DddError::not_found("foo");
    /// let mut line = String::new();
    /// err.log_entry().write_to(&mut line).unwrap();
    /// assert!(line.starts_with("[Domain/NotFound] status='FooNotFound'"));
    /// ```
    #[inline]
    pub fn log_entry(&self) -> ErrorLog<'_> {
        ErrorLog {
            group: self.group,
            kind: self.kind,
            property: &self.property,
            title: &self.title,
            description: self.description(),
            status: self.status(),
            parent: self.parent(),
        }
    }

    /// Callback-style access to the log entry; the entry dies with the closure.
    #[inline]
    pub fn with_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ErrorLog<'_>) -> R,
    {
        let log = self.log_entry();
        f(&log)
    }
}

impl fmt::Debug for DddError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DddError")
            .field("group", &self.group)
            .field("kind", &self.kind)
            .field("property", &self.property)
            .field("title", &self.title)
            .field("description", &self.description())
            .field("status", &self.status())
            .field("parent", &self.parent.as_ref().map(|p| p.to_string()))
            .finish_non_exhaustive()
    }
}

impl fmt::Display for DddError {
    /// Writes the current description.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl Error for DddError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.parent
            .as_deref()
            .map(|p| p as &(dyn Error + 'static))
    }
}
