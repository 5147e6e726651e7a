use ddd_errors::{DddError, description_of, is_infrastructure, parent_description_of};
use std::error::Error;
use std::io;

fn charge(amount: u64) -> Result<(), Box<dyn Error + Send + Sync>> {
    let cause = io::Error::new(io::ErrorKind::TimedOut, "payments-api: read timed out");
    Err(Box::new(
        DddError::remote_call("payments-api")
            .with_parent(cause)
            .with_title(format!("Charge of {amount} failed")),
    ))
}

fn main() {
    println!("--- Infrastructure Errors ---\n");

    if let Err(err) = charge(1200) {
        println!("infrastructure: {}", is_infrastructure(&*err));
        println!("description:    {}", description_of(&*err));
        println!(
            "parent:         {}",
            parent_description_of(&*err).unwrap_or_default()
        );

        if let Some(ddd) = err.downcast_ref::<DddError>() {
            ddd.with_log(|log| println!("log line:       {log}"));
        }
    }
}
