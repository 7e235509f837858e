//! List the first page of users with the async client.
//!
//! Run:
//! `AIRCALL_API_ID=<id> AIRCALL_API_TOKEN=<token> cargo run --example async_get_users`
//!
//! Optional env vars:
//! - `AIRCALL_PER_PAGE` (defaults to `20`)

use aircall_client::{AircallClient, Credentials};
use serde::Serialize;

#[derive(Serialize)]
struct Page {
    page: u32,
    per_page: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (Ok(api_id), Ok(api_token)) = (
        std::env::var("AIRCALL_API_ID"),
        std::env::var("AIRCALL_API_TOKEN"),
    ) else {
        eprintln!("Set AIRCALL_API_ID and AIRCALL_API_TOKEN before running this example.");
        std::process::exit(2);
    };
    let per_page = std::env::var("AIRCALL_PER_PAGE")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(20);

    let client = AircallClient::new(Credentials::new(api_id, api_token))?;
    let users = client.get_users(&Page { page: 1, per_page }).await?;

    println!("{}", serde_json::to_string_pretty(&users)?);
    Ok(())
}
