use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use aircall_client::{AircallClient, ContentType, Credentials};
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use reqwest::Method;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "aircall-cli",
    version,
    about = "Small async CLI for querying the Aircall API"
)]
struct Cli {
    /// Aircall API id.
    #[arg(long, env = "AIRCALL_API_ID")]
    api_id: Option<String>,

    /// Aircall API token.
    #[arg(long, env = "AIRCALL_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Base URL for the API. Defaults to the public Aircall v1 endpoint.
    #[arg(long, env = "AIRCALL_BASE_URL")]
    base_url: Option<String>,

    /// Send request bodies as form data instead of JSON.
    #[arg(long)]
    form: bool,

    /// Emit compact JSON instead of pretty-printed output.
    #[arg(long)]
    compact: bool,

    /// Log requests and responses to stderr.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List known endpoint operation ids.
    Operations {
        /// Filter operations by substring match on operation id (case-insensitive).
        #[arg(long)]
        filter: Option<String>,
    },
    /// Call an endpoint by operation id.
    Call(CallArgs),
    /// Send a raw HTTP request using method + route.
    Request(RequestArgs),
}

#[derive(Debug, Args)]
struct CallArgs {
    /// Operation id (for example: getUser).
    operation_id: String,

    /// Path parameter in form key=value. Repeat as needed.
    #[arg(long = "path-param", value_name = "KEY=VALUE")]
    path_param: Vec<String>,

    #[command(flatten)]
    params: ParamsInput,
}

#[derive(Debug, Args)]
struct RequestArgs {
    /// HTTP method (GET, POST, PUT, DELETE, ...).
    method: String,

    /// Route relative to the base URL (for example: /users/42).
    route: String,

    #[command(flatten)]
    params: ParamsInput,
}

#[derive(Debug, Args)]
struct ParamsInput {
    /// Parameters as a JSON object literal. Sent as query string for GET, as body otherwise.
    #[arg(long, conflicts_with = "params_file")]
    params_json: Option<String>,

    /// Path to a file containing the JSON parameters.
    #[arg(long, value_name = "PATH", conflicts_with = "params_json")]
    params_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // `operations` is metadata-only; it does not require credentials.
    if let Command::Operations { filter } = &cli.command {
        print_operations(filter.as_deref());
        return Ok(());
    }

    let client = build_client(&cli)?;

    let output = match &cli.command {
        Command::Operations { .. } => unreachable!("handled above"),
        Command::Call(args) => call_operation(&client, args)
            .await
            .with_context(|| format!("operation call failed: '{}'", args.operation_id))?,
        Command::Request(args) => send_request(&client, args)
            .await
            .with_context(|| format!("request failed: {} {}", args.method, args.route))?,
    };

    print_json(&output, cli.compact).context("failed to print JSON output")?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "aircall_client=debug"
    } else {
        "aircall_client=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn build_client(cli: &Cli) -> Result<AircallClient> {
    let (Some(api_id), Some(api_token)) = (&cli.api_id, &cli.api_token) else {
        bail!("missing credentials: set --api-id/--api-token or AIRCALL_API_ID/AIRCALL_API_TOKEN");
    };

    let mut client = AircallClient::new(Credentials::new(api_id.clone(), api_token.clone()))
        .context("failed to create client")?;

    if let Some(url) = &cli.base_url {
        client = client
            .with_base_url(url)
            .with_context(|| format!("failed to create client with base URL '{url}'"))?;
    }

    if cli.form {
        client = client.with_content_type(ContentType::Form);
    }

    Ok(client)
}

/// Prints the endpoint catalog, optionally filtered by operation id.
fn print_operations(filter: Option<&str>) {
    let filter = filter.map(str::to_ascii_lowercase);

    let operations: Vec<_> = AircallClient::operations()
        .iter()
        .filter(|operation| {
            filter
                .as_ref()
                .is_none_or(|needle| operation.operation_id.to_ascii_lowercase().contains(needle))
        })
        .collect();

    let (operation_id_width, method_width) =
        operations
            .iter()
            .fold((0usize, 0usize), |(id_max, method_max), operation| {
                (
                    id_max.max(operation.operation_id.len()),
                    method_max.max(operation.method.len()),
                )
            });

    for operation in operations {
        println!(
            "{:<operation_id_width$}  {:<method_width$}  {}",
            operation.operation_id, operation.method, operation.path_template
        );
    }
}

async fn call_operation(client: &AircallClient, args: &CallArgs) -> Result<Value> {
    let path_params = parse_pairs(&args.path_param, "--path-param")
        .context("failed to parse --path-param arguments")?;
    let params = parse_params(&args.params).context("failed to parse request parameters")?;

    let borrowed_path: Vec<(&str, &str)> = path_params
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    let value = client
        .call_operation(&args.operation_id, &borrowed_path, &params)
        .await
        .with_context(|| format!("operation '{}' returned an error", args.operation_id))?;
    Ok(value)
}

async fn send_request(client: &AircallClient, args: &RequestArgs) -> Result<Value> {
    // Validate method eagerly so CLI errors are explicit before any network call.
    let method = Method::from_str(&args.method.to_ascii_uppercase())
        .with_context(|| format!("invalid HTTP method '{}'", args.method))?;
    let params = parse_params(&args.params).context("failed to parse request parameters")?;

    let value = client
        .request_json(method, &args.route, &params)
        .await
        .with_context(|| format!("HTTP request failed for route '{}'", args.route))?;
    Ok(value)
}

/// Parses repeated `key=value` arguments into owned key/value pairs.
fn parse_pairs(values: &[String], flag_name: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::with_capacity(values.len());
    for item in values {
        let Some((key, value)) = item.split_once('=') else {
            bail!("invalid {flag_name} value '{item}': expected key=value");
        };
        if key.is_empty() {
            bail!("invalid {flag_name} value '{item}': empty key");
        }
        pairs.push((key.to_owned(), value.to_owned()));
    }
    Ok(pairs)
}

/// Parses optional JSON parameters from inline text or a file path.
///
/// Returns [`Value::Null`] when neither is given.
fn parse_params(params: &ParamsInput) -> Result<Value> {
    match (&params.params_json, &params.params_file) {
        (Some(raw), None) => {
            serde_json::from_str(raw).context("failed to parse JSON from --params-json")
        }
        (None, Some(path)) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read --params-file '{}'", path.display()))?;
            serde_json::from_str(&raw).with_context(|| {
                format!("failed to parse JSON in --params-file '{}'", path.display())
            })
        }
        (None, None) => Ok(Value::Null),
        (Some(_), Some(_)) => bail!("use only one of --params-json or --params-file"),
    }
}

/// Prints a JSON value either compact or pretty-formatted.
fn print_json(value: &Value, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("failed to render JSON")?;
    println!("{rendered}");
    Ok(())
}
