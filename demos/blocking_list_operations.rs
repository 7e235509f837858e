//! List the endpoint catalog known to the client.
//!
//! Run:
//! `cargo run --example blocking_list_operations`

use aircall_client::{BlockingAircallClient, DEFAULT_BASE_URL};

fn main() {
    println!("Default server: {DEFAULT_BASE_URL}");

    let operations = BlockingAircallClient::operations();
    println!("Loaded {} operations", operations.len());

    for operation in operations {
        println!(
            "- {:<6} {:<60} ({})",
            operation.method, operation.path_template, operation.operation_id
        );
    }
}
