//! # DDD Errors
//!
//! Domain-driven error taxonomy with RFC 7807 problem details mapping.
//!
//! ## Design Philosophy
//!
//! 1. **Every error has a place in the taxonomy**: a group (domain or
//!    infrastructure) and a kind (not found, required, ...)
//! 2. **Messages are derived, not hand-written**: descriptions and status
//!    names follow fixed formulas from the kind and the property
//! 3. **Explicit overrides stick**: a pinned description or status is never
//!    overwritten by later property changes
//! 4. **Errors are values**: setters consume and return, clones are independent
//! 5. **HTTP mapping is a pure function** of the error's public accessors
//!
//! ## Taxonomy
//!
//! | Kind                  | Group          | HTTP |
//! |-----------------------|----------------|------|
//! | AlreadyExists         | Domain         | 409  |
//! | NotFound              | Domain         | 404  |
//! | Required              | Domain         | 400  |
//! | InvalidFormat         | Domain         | 400  |
//! | OutOfRange            | Domain         | 400  |
//! | Unknown               | Domain         | 400  |
//! | FailedRemoteCall      | Infrastructure | 502  |
//! | UnknownInfrastructure | Infrastructure | 500  |
//!
//! ## Quick Start
//!
//! ```rust
//! use ddd_errors::{DddError, Result};
//!
//! fn find_user(id: &str) -> Result<()> {
//!     Err(DddError::not_found(format!("user {id}")))
//! }
//!
//! let err = find_user("42").unwrap_err();
//! assert_eq!(err.description(), "The resource user 42 was not found");
//! assert_eq!(err.status(), "UserNotFound");
//! ```
//!
//! ## Problem Details
//!
//! ```rust
//! use ddd_errors::{DddError, build_problem};
//!
//! let err = DddError::not_found("foo");
//! let problem = build_problem("", "/u/1", Some(&err));
//!
//! assert_eq!(problem.type_url, "Not Found");
//! assert_eq!(problem.status, "FooNotFound");
//! assert_eq!(problem.status_code, 404);
//! assert_eq!(problem.detail, "The resource foo was not found");
//! ```
//!
//! ## Logging
//!
//! ```rust
//! use ddd_errors::DddError;
//!
//! let err = DddError::remote_call("payments");
//! err.with_log(|log| {
//!     // logger.error(log.status(), log.description());
//!     assert_eq!(log.status(), "PaymentsFailedRemoteCall");
//! });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::result;

pub mod convenience;
pub mod description;
pub mod error;
pub mod identifier;
pub mod inspect;
pub mod kinds;
pub mod logging;
pub mod problem;

pub use description::Field;
pub use error::{DddError, Parent};
pub use identifier::sanitize_to_identifier;
pub use inspect::{description_of, find_ddd_error, is_domain, is_infrastructure, parent_description_of};
pub use kinds::{ErrorGroup, ErrorKind};
pub use logging::{ErrorLog, MAX_FIELD_OUTPUT_LEN, TRUNCATION_INDICATOR};
pub use problem::{APPLICATION_PROBLEM_JSON, Problem, build_problem, http_status};

/// Type alias for Results using our error type.
pub type Result<T> = result::Result<T, DddError>;

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn end_to_end_out_of_range() {
        let err = DddError::out_of_range("foo", 8, 256);
        assert_eq!(err.description(), "The property foo is out of range [8,256)");
        assert_eq!(err.status(), "FooOutOfRange");
        assert_eq!(err.http_status().as_u16(), 400);
    }

    #[test]
    fn end_to_end_invalid_format() {
        let err = crate::invalid_format!("foo", "jpeg", "gif");
        assert_eq!(
            err.description(),
            "The property foo has an invalid format, expected [jpeg,gif]"
        );
    }

    #[test]
    fn question_mark_propagation() {
        fn load(raw: Option<&str>) -> Result<String> {
            let value = raw.ok_or_else(|| DddError::required("name"))?;
            Ok(value.to_owned())
        }

        let err = load(None).unwrap_err();
        assert!(err.is_required());
        assert_eq!(load(Some("ada")).unwrap(), "ada");
    }

    #[test]
    fn boxed_errors_still_map() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(DddError::not_found("foo"));
        assert!(is_domain(&*boxed));
        let problem = build_problem("", "", Some(&*boxed));
        assert_eq!(problem.status_code, 404);
    }
}
