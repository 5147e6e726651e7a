//! Convenience macros for building errors.
//!
//! # Usage
//!
//! ```rust
//! use ddd_errors::{domain_err, invalid_format};
//!
//! let err = invalid_format!("avatar", "jpeg", "gif");
//! assert_eq!(
//!     err.description(),
//!     "The property avatar has an invalid format, expected [jpeg,gif]"
//! );
//!
//! let limit = 3;
//! let err = domain_err!("Too many drafts", "at most {} drafts per user", limit);
//! assert_eq!(err.description(), "at most 3 drafts per user");
//! ```
//!
//! Note: the formatting macros allocate, which is fine for error paths.

/// Build an `InvalidFormat` error from a property and a list of formats.
///
/// ```rust
/// # use ddd_errors::invalid_format;
/// let err = invalid_format!("created_at");
/// assert_eq!(err.description(), "The property created_at has an invalid format, expected []");
/// ```
#[macro_export]
macro_rules! invalid_format {
    ($property:expr $(, $format:expr)* $(,)?) => {{
        let formats: ::std::vec::Vec<::std::borrow::Cow<'static, str>> =
            ::std::vec![$(::std::borrow::Cow::from($format)),*];
        $crate::DddError::invalid_format($property, formats)
    }};
}

/// Build a generic domain error with a formatted description.
#[macro_export]
macro_rules! domain_err {
    ($title:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::DddError::domain($title, ::std::format!($fmt $(, $arg)*))
    };
}

/// Build a generic infrastructure error with a formatted description.
///
/// ```rust
/// # use ddd_errors::infrastructure_err;
/// let err = infrastructure_err!("Queue unavailable", "broker {} refused the connection", "amqp-1");
/// assert!(err.is_infrastructure());
/// ```
#[macro_export]
macro_rules! infrastructure_err {
    ($title:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::DddError::infrastructure($title, ::std::format!($fmt $(, $arg)*))
    };
}
