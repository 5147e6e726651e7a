#![no_main]

use ddd_errors::{DddError, ErrorKind, build_problem};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let property = String::from_utf8_lossy(rest).into_owned();
    let kind = ErrorKind::ALL[usize::from(selector) % ErrorKind::ALL.len()];

    let err = DddError::not_found(property.clone())
        .with_kind(kind)
        .with_property(property);
    let problem = build_problem("", "", Some(&err));

    assert_eq!(problem.status_code, err.http_status().as_u16());
    assert_eq!(problem.detail, err.description());

    let mut line = String::new();
    err.log_entry().write_to(&mut line).unwrap();
});
