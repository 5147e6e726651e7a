//! Property-based tests for ddd_errors
//!
//! These tests use proptest to generate random inputs and verify invariants hold.

use ddd_errors::{DddError, ErrorKind, build_problem, http_status, sanitize_to_identifier};
use proptest::prelude::*;

fn kind_constructor() -> impl Strategy<Value = fn(String) -> DddError> {
    prop_oneof![
        Just((|p: String| DddError::required(p)) as fn(String) -> DddError),
        Just((|p: String| DddError::already_exists(p)) as fn(String) -> DddError),
        Just((|p: String| DddError::not_found(p)) as fn(String) -> DddError),
        Just((|p: String| DddError::remote_call(p)) as fn(String) -> DddError),
        Just((|p: String| DddError::out_of_range(p, 8, 256)) as fn(String) -> DddError),
        Just((|p: String| DddError::invalid_format(p, ["jpeg", "gif"])) as fn(String) -> DddError),
    ]
}

// ============================================================================
// SANITIZATION PROPERTIES
// ============================================================================

proptest! {
    /// No ASCII separator or digit survives sanitization
    #[test]
    fn sanitized_drops_ascii_non_letters(s in "\\PC*") {
        let id = sanitize_to_identifier(&s);
        prop_assert!(id.chars().all(|c| !c.is_ascii() || c.is_ascii_alphabetic()));
    }

    /// Sanitizing never changes the number of letters for ASCII input
    #[test]
    fn sanitized_keeps_ascii_letters(s in "[a-zA-Z0-9_#-]{0,64}") {
        let letters = s.chars().filter(char::is_ascii_alphabetic).count();
        prop_assert_eq!(sanitize_to_identifier(&s).len(), letters);
    }

    /// Separator-joined lowercase words become TitleCase
    #[test]
    fn separators_title_case(words in prop::collection::vec("[a-z]{1,8}", 1..5), sep in "[-_# .]") {
        let joined = words.join(sep.as_str());
        let expected: String = words
            .iter()
            .map(|w| {
                let mut chars = w.chars();
                let first = chars.next().map(|c| c.to_ascii_uppercase());
                first.into_iter().chain(chars).collect::<String>()
            })
            .collect();
        prop_assert_eq!(sanitize_to_identifier(&joined), expected);
    }

    /// Sanitizing is idempotent
    #[test]
    fn sanitize_idempotent(s in "[a-zA-Z0-9 _#.-]{0,64}") {
        let once = sanitize_to_identifier(&s);
        prop_assert_eq!(sanitize_to_identifier(&once), once.clone());
    }
}

// ============================================================================
// DESCRIPTION PROPERTIES
// ============================================================================

proptest! {
    /// Fresh errors render the exact formula for their kind
    #[test]
    fn descriptions_match_formulas(p in "[a-zA-Z_]{1,32}") {
        prop_assert_eq!(
            DddError::required(p.clone()).description().into_owned(),
            format!("The property {p} is required")
        );
        prop_assert_eq!(
            DddError::not_found(p.clone()).description().into_owned(),
            format!("The resource {p} was not found")
        );
        prop_assert_eq!(
            DddError::already_exists(p.clone()).description().into_owned(),
            format!("The resource {p} already exists")
        );
        prop_assert_eq!(
            DddError::remote_call(p.clone()).description().into_owned(),
            format!("Failed to call external resource [{p}]")
        );
        prop_assert_eq!(
            DddError::out_of_range(p.clone(), -3, 7).description().into_owned(),
            format!("The property {p} is out of range [-3,7)")
        );
        prop_assert_eq!(
            DddError::invalid_format(p.clone(), ["a", "b"]).description().into_owned(),
            format!("The property {p} has an invalid format, expected [a,b]")
        );
    }

    /// Status names are the sanitized property plus the kind suffix
    #[test]
    fn status_matches_formula(make in kind_constructor(), p in "\\PC{0,32}") {
        let err = make(p.clone());
        let suffix = err.kind().status_suffix().unwrap();
        prop_assert_eq!(err.status().into_owned(), format!("{}{}", sanitize_to_identifier(&p), suffix));
    }

    /// Re-deriving after a property change equals constructing with that property
    #[test]
    fn property_change_equals_construction(make in kind_constructor(), a in "\\PC{0,16}", b in "\\PC{0,16}") {
        let changed = make(a).with_property(b.clone());
        let fresh = make(b);
        prop_assert_eq!(changed.description(), fresh.description());
        prop_assert_eq!(changed.status(), fresh.status());
    }

    /// Setting the same property twice is the same as setting it once
    #[test]
    fn set_property_idempotent(make in kind_constructor(), p in "\\PC{0,16}") {
        let once = make(String::new()).with_property(p.clone());
        let twice = once.clone().with_property(p);
        prop_assert_eq!(once.description(), twice.description());
        prop_assert_eq!(once.status(), twice.status());
    }

    /// A pinned description survives property changes; the status still follows
    #[test]
    fn pinned_description_is_permanent(
        make in kind_constructor(),
        d in "\\PC{0,32}",
        p in "[a-z]{1,16}",
    ) {
        let err = make("orig".to_owned()).with_description(d.clone()).with_property(p.clone());
        prop_assert_eq!(err.description().into_owned(), d);
        let suffix = err.kind().status_suffix().unwrap();
        prop_assert_eq!(err.status().into_owned(), format!("{}{}", sanitize_to_identifier(&p), suffix));
    }

    /// A pinned status survives property changes; the description still follows
    #[test]
    fn pinned_status_is_permanent(make in kind_constructor(), s in "\\PC{0,32}", p in "[a-z]{1,16}") {
        let err = make("orig".to_owned()).with_status(s.clone()).with_property(p.clone());
        prop_assert_eq!(err.status().into_owned(), s);
        prop_assert_eq!(err.description().into_owned(), make(p).description().into_owned());
    }

    /// Constructors are total over arbitrary input
    #[test]
    fn construction_never_panics(p in "\\PC{0,1000}", a in any::<i64>(), b in any::<i64>()) {
        let _ = DddError::out_of_range(p.clone(), a, b).description();
        let _ = DddError::invalid_format(p.clone(), [p.clone()]).status();
        let _ = DddError::domain(p.clone(), p).to_string();
    }
}

// ============================================================================
// HTTP MAPPING PROPERTIES
// ============================================================================

proptest! {
    /// Mapping depends on the kind only, never on the property
    #[test]
    fn http_status_ignores_property(make in kind_constructor(), a in "\\PC{0,16}", b in "\\PC{0,16}") {
        prop_assert_eq!(http_status(&make(a)), http_status(&make(b)));
    }

    /// Problems mirror the error's accessors
    #[test]
    fn problem_mirrors_error(make in kind_constructor(), p in "\\PC{0,32}", instance in "\\PC{0,32}") {
        let err = make(p);
        let problem = build_problem("", &instance, Some(&err));
        prop_assert_eq!(problem.status_code, http_status(&err).as_u16());
        prop_assert_eq!(problem.title.as_str(), err.title());
        prop_assert_eq!(problem.detail, err.description().into_owned());
        prop_assert_eq!(problem.status, err.status().into_owned());
        prop_assert_eq!(problem.instance, instance);
        prop_assert_eq!(Some(problem.type_url.as_str()), http_status(&err).canonical_reason());
    }

    /// Custom types are passed through untouched
    #[test]
    fn type_override_passthrough(t in "[a-z:/.]{1,40}") {
        let problem = build_problem(&t, "", Some(&DddError::remote_call("db")));
        prop_assert_eq!(problem.type_url, t);
        prop_assert_eq!(problem.status_code, 502);
    }
}

#[test]
fn generic_kinds_map_by_group() {
    for kind in ErrorKind::ALL {
        let err = DddError::domain("t", "d").with_kind(kind);
        let code = http_status(&err).as_u16();
        match kind {
            ErrorKind::AlreadyExists => assert_eq!(code, 409),
            ErrorKind::NotFound => assert_eq!(code, 404),
            ErrorKind::FailedRemoteCall => assert_eq!(code, 502),
            ErrorKind::UnknownInfrastructure => assert_eq!(code, 500),
            ErrorKind::Unknown
            | ErrorKind::Required
            | ErrorKind::InvalidFormat
            | ErrorKind::OutOfRange => assert_eq!(code, 400),
        }
    }
}
