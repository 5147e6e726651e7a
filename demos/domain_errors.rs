use ddd_errors::{DddError, ErrorKind, domain_err, invalid_format};

fn main() {
    println!("--- Domain Errors ---\n");

    let errors = [
        DddError::required("email"),
        invalid_format!("avatar", "png", "jpeg"),
        DddError::out_of_range("page_size", 1, 100),
        DddError::already_exists("username"),
        DddError::not_found("order"),
        domain_err!("Cart is locked", "cart {} is being checked out", "c-81"),
    ];

    for err in &errors {
        assert!(err.is_domain());
        println!("[{:<13}] {:<24} {}", err.kind(), err.status(), err.description());
    }

    // Kinds can be re-targeted; derived messages follow.
    let err = DddError::required("sku").with_kind(ErrorKind::NotFound);
    println!("\nre-targeted: {}", err);
    // Output: re-targeted: The resource sku was not found
}
