//! RFC 7807 Problem Details mapping (pure data model, no HTTP framework dependencies)
//!
//! Maps a [`DddError`] (or any `std::error::Error`) to an HTTP status code and a
//! serializable problem object. Transport is the caller's concern.

use crate::error::DddError;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// Content type for Problem Details as per RFC 7807.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// RFC 7807 problem object.
///
/// Empty strings and a zero status code are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Problem {
    /// Problem type; defaults to the reason phrase of the status code.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub type_url: String,
    /// Short, human-readable summary of the problem type.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Machine-readable status name (e.g. `FooNotFound`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    /// HTTP status code for this occurrence.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub status_code: u16,
    /// Human-readable explanation specific to this occurrence.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,
    /// Identifier of this specific occurrence.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instance: String,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
fn is_zero(code: &u16) -> bool {
    *code == 0
}

impl Problem {
    /// Typed view of `status_code`; `None` for the empty problem or an invalid code.
    pub fn http_status(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status_code).ok()
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// HTTP status code for a `DddError`.
///
/// Checks run in priority order: specific kinds first, then the generic
/// domain fallback, then 500.
pub fn http_status(err: &DddError) -> StatusCode {
    if err.is_already_exists() {
        StatusCode::CONFLICT
    } else if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else if err.is_invalid_format() || err.is_required() || err.is_out_of_range() {
        StatusCode::BAD_REQUEST
    } else if err.is_remote_call() {
        StatusCode::BAD_GATEWAY
    } else if err.is_domain() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Build a problem object from an arbitrary error.
///
/// - `None` yields the empty problem.
/// - A foreign error maps to 500 with its message as title and detail.
/// - A `DddError` maps through [`http_status`] and its accessors.
///
/// `type_override` replaces the reason phrase in `type` when non-empty. For
/// foreign errors it also becomes `status`, since there is no status name.
pub fn build_problem(
    type_override: &str,
    instance: &str,
    err: Option<&(dyn Error + 'static)>,
) -> Problem {
    let Some(err) = err else {
        return Problem::default();
    };

    match err.downcast_ref::<DddError>() {
        Some(ddd) => ddd.to_problem(type_override, instance),
        None => {
            let code = StatusCode::INTERNAL_SERVER_ERROR;
            let message = err.to_string();
            let kind = problem_type(type_override, code);
            Problem {
                type_url: kind.clone(),
                title: message.clone(),
                status: kind,
                status_code: code.as_u16(),
                detail: message,
                instance: instance.to_owned(),
            }
        }
    }
}

impl DddError {
    /// HTTP status code for this error; see [`http_status`].
    #[inline]
    pub fn http_status(&self) -> StatusCode {
        http_status(self)
    }

    /// Problem object for this error.
    pub fn to_problem(&self, type_override: &str, instance: &str) -> Problem {
        let code = http_status(self);
        let status = self.status();
        Problem {
            type_url: problem_type(type_override, code),
            title: self.title().to_owned(),
            status: if status.is_empty() {
                reason_phrase(code).to_owned()
            } else {
                status.into_owned()
            },
            status_code: code.as_u16(),
            detail: self.description().into_owned(),
            instance: instance.to_owned(),
        }
    }
}

impl From<&DddError> for Problem {
    fn from(err: &DddError) -> Self {
        err.to_problem("", "")
    }
}

fn problem_type(type_override: &str, code: StatusCode) -> String {
    if type_override.is_empty() {
        reason_phrase(code).to_owned()
    } else {
        type_override.to_owned()
    }
}

fn reason_phrase(code: StatusCode) -> &'static str {
    code.canonical_reason().unwrap_or_default()
}
