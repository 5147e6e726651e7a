use ddd_errors::{APPLICATION_PROBLEM_JSON, DddError, build_problem};
use std::error::Error;

fn get_foo_by_id(_id: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    Err(Box::new(DddError::not_found("foo")))
}

fn main() {
    if let Err(err) = get_foo_by_id("123") {
        // Problem is ready to be serialized; an empty type falls back to the
        // reason phrase of the status code.
        let problem = build_problem("", "/foos/123", Some(&*err));

        println!("content-type: {APPLICATION_PROBLEM_JSON}");
        println!("status:       {}", problem.status_code); // 404
        println!("type:         {}", problem.type_url); // Not Found
        println!("detail:       {}", problem.detail); // The resource foo was not found

        match serde_json::to_string_pretty(&problem) {
            Ok(body) => println!("\n{body}"),
            Err(e) => eprintln!("serialization failed: {e}"),
        }
    }
}
