use ddd_errors::{DddError, Result};

struct User {
    name: String,
    age: i64,
}

fn validate(name: &str, age: i64) -> Result<User> {
    if name.is_empty() {
        return Err(DddError::required("name"));
    }
    if !(0..150).contains(&age) {
        return Err(DddError::out_of_range("age", 0, 150));
    }
    Ok(User {
        name: name.to_owned(),
        age,
    })
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    for (name, age) in [("ada", 36), ("", 20), ("bob", 400)] {
        match validate(name, age) {
            Ok(user) => println!("valid user {} ({})", user.name, user.age),
            Err(err) => {
                // Kind and group drive branching; status is the stable machine name.
                println!("{:<10} {:<16} {}", err.group(), err.status(), err);
            }
        }
    }

    // Pinned descriptions survive property changes, the status keeps following.
    let err = DddError::not_found("foo")
        .with_description("no such account")
        .with_property("account_id");
    println!("\n{} / {}", err.status(), err.description());
    // Output: AccountIdNotFound / no such account
}
