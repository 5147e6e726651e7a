//! Error taxonomy - the fixed set of groups and kinds every `DddError` belongs to.
//!
//! # Taxonomy
//!
//! | Group          | Kinds                                                            |
//! |----------------|------------------------------------------------------------------|
//! | Domain         | Required, InvalidFormat, OutOfRange, AlreadyExists, NotFound, Unknown |
//! | Infrastructure | FailedRemoteCall, UnknownInfrastructure                          |
//!
//! `AlreadyExists` and `NotFound` are Domain kinds: they describe the state of
//! an aggregate, not the storage engine that reported it.
//!
//! # Copy Semantics
//!
//! Both enums are small, `Copy`, and carry no data. Auxiliary data needed to
//! render messages (range bounds, accepted formats) lives on the error itself.
//!
//! # Example
//!
//! ```rust
//! use ddd_errors::{ErrorGroup, ErrorKind};
//!
//! assert_eq!(ErrorKind::NotFound.group(), ErrorGroup::Domain);
//! assert_eq!(ErrorKind::FailedRemoteCall.to_string(), "FailedRemoteCall");
//! assert_eq!(ErrorKind::Required.status_suffix(), Some("IsRequired"));
//! ```

use std::fmt;

// ============================================================================
// Error Group
// ============================================================================

/// Architectural layer that raised the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorGroup {
    /// Business rules, validation, aggregate state.
    Domain,
    /// Databases, remote services, anything outside the process boundary.
    Infrastructure,
}

impl ErrorGroup {
    /// Stable label for logs and machine consumers.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::Infrastructure => "Infrastructure",
        }
    }
}

impl fmt::Display for ErrorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ============================================================================
// Error Kind
// ============================================================================

/// Specific taxonomy bucket of an error.
///
/// The group of each kind is fixed; see [`ErrorKind::group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic domain failure with a caller-provided description.
    Unknown,
    /// A field/resource is missing from the call or request.
    Required,
    /// A field/resource has an invalid format or type.
    InvalidFormat,
    /// A field/resource is outside the accepted range.
    OutOfRange,
    /// The resource already exists.
    AlreadyExists,
    /// The resource was not found.
    NotFound,
    /// A call to an external resource failed.
    FailedRemoteCall,
    /// Generic infrastructure failure with a caller-provided description.
    UnknownInfrastructure,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 8] = [
        Self::Unknown,
        Self::Required,
        Self::InvalidFormat,
        Self::OutOfRange,
        Self::AlreadyExists,
        Self::NotFound,
        Self::FailedRemoteCall,
        Self::UnknownInfrastructure,
    ];

    /// Group this kind belongs to.
    #[inline]
    pub const fn group(self) -> ErrorGroup {
        match self {
            Self::FailedRemoteCall | Self::UnknownInfrastructure => ErrorGroup::Infrastructure,
            Self::Unknown
            | Self::Required
            | Self::InvalidFormat
            | Self::OutOfRange
            | Self::AlreadyExists
            | Self::NotFound => ErrorGroup::Domain,
        }
    }

    /// Stable label for logs and machine consumers.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "UnknownDomain",
            Self::Required => "Required",
            Self::InvalidFormat => "InvalidFormat",
            Self::OutOfRange => "OutOfRange",
            Self::AlreadyExists => "AlreadyExists",
            Self::NotFound => "NotFound",
            Self::FailedRemoteCall => "FailedRemoteCall",
            Self::UnknownInfrastructure => "UnknownInfrastructure",
        }
    }

    /// Suffix appended to the sanitized property to build a status name.
    ///
    /// Generic kinds have no suffix and therefore no derived status.
    #[inline]
    pub const fn status_suffix(self) -> Option<&'static str> {
        match self {
            Self::Required => Some("IsRequired"),
            Self::InvalidFormat => Some("InvalidFormat"),
            Self::OutOfRange => Some("OutOfRange"),
            Self::AlreadyExists => Some("AlreadyExists"),
            Self::NotFound => Some("NotFound"),
            Self::FailedRemoteCall => Some("FailedRemoteCall"),
            Self::Unknown | Self::UnknownInfrastructure => None,
        }
    }

    /// Title assigned by the kind-specific constructors.
    #[inline]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::Required => "Missing property",
            Self::InvalidFormat => "Property is not a valid format",
            Self::OutOfRange => "Property is out of the specified range",
            Self::AlreadyExists => "Resource already exists",
            Self::NotFound => "Resource not found",
            Self::FailedRemoteCall => "Remote call failed",
            Self::Unknown | Self::UnknownInfrastructure => "",
        }
    }

    /// Whether this is one of the two catch-all kinds.
    #[inline]
    pub const fn is_generic(self) -> bool {
        matches!(self, Self::Unknown | Self::UnknownInfrastructure)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
