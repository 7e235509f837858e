//! Check credentials against the `/ping` endpoint.
//!
//! Run:
//! `AIRCALL_API_ID=<id> AIRCALL_API_TOKEN=<token> cargo run --example blocking_ping`
//!
//! Optional env vars:
//! - `AIRCALL_BASE_URL` (defaults to the public Aircall v1 API)

use aircall_client::{BlockingAircallClient, Credentials};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (Ok(api_id), Ok(api_token)) = (
        std::env::var("AIRCALL_API_ID"),
        std::env::var("AIRCALL_API_TOKEN"),
    ) else {
        eprintln!("Set AIRCALL_API_ID and AIRCALL_API_TOKEN before running this example.");
        std::process::exit(2);
    };

    let mut client = BlockingAircallClient::new(Credentials::new(api_id, api_token))?;
    if let Ok(url) = std::env::var("AIRCALL_BASE_URL") {
        client = client.with_base_url(url)?;
    }

    let pong = client.ping()?;
    println!("{}", serde_json::to_string_pretty(&pong)?);
    Ok(())
}
