//! Inspection helpers for arbitrary `std::error::Error` values.
//!
//! Application code usually passes errors around as `Box<dyn Error>` or
//! similar. These helpers look through the `source()` chain for a
//! [`DddError`] so callers can branch on the taxonomy without downcasting
//! by hand.

use crate::error::DddError;
use crate::kinds::ErrorGroup;
use std::error::Error;

/// First `DddError` in the source chain of `err`, starting with `err` itself.
pub fn find_ddd_error<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a DddError> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(ddd) = e.downcast_ref::<DddError>() {
            return Some(ddd);
        }
        current = e.source();
    }
    None
}

fn belongs_to(err: &(dyn Error + 'static), group: ErrorGroup) -> bool {
    find_ddd_error(err).is_some_and(|ddd| ddd.group() == group)
}

/// Whether `err` (or a cause) is a domain `DddError`.
pub fn is_domain(err: &(dyn Error + 'static)) -> bool {
    belongs_to(err, ErrorGroup::Domain)
}

/// Whether `err` (or a cause) is an infrastructure `DddError`.
pub fn is_infrastructure(err: &(dyn Error + 'static)) -> bool {
    belongs_to(err, ErrorGroup::Infrastructure)
}

/// Detailed description of `err`: the `DddError` description when `err` is
/// one, otherwise its `Display` output.
pub fn description_of(err: &(dyn Error + 'static)) -> String {
    match err.downcast_ref::<DddError>() {
        Some(ddd) => ddd.description().into_owned(),
        None => err.to_string(),
    }
}

/// Message of the parent attached to a `DddError`.
///
/// Returns `None` for foreign errors and for `DddError`s without a parent.
pub fn parent_description_of(err: &(dyn Error + 'static)) -> Option<String> {
    err.downcast_ref::<DddError>()
        .and_then(DddError::parent)
        .map(ToString::to_string)
}
