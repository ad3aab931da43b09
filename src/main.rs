// src/main.rs
//! Command-line probe for Ethereum-compatible JSON-RPC endpoints.
//! Runs a quick read-method sweep or a single ad-hoc call.
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use eth_rpc_conformance::config::SuiteConfig;
use eth_rpc_conformance::rpc::RpcClient;
use serde_json::Value;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Read-only methods exercised by `probe`. Kept to calls that are safe
/// against any endpoint and need no parameters.
const PROBE_METHODS: &[&str] = &[
    "eth_chainId",
    "eth_blockNumber",
    "eth_gasPrice",
    "eth_syncing",
    "net_version",
    "net_listening",
    "web3_clientVersion",
    "system_health",
];

#[derive(Parser)]
#[command(name = "rpc-probe")]
#[command(about = "Probe an Ethereum-compatible JSON-RPC endpoint")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Endpoint URL; overrides configuration and environment.
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep a fixed set of read methods and report per-method status
    Probe,
    /// Issue one JSON-RPC call and print the raw response
    Call {
        /// Method name, e.g. eth_getBalance
        method: String,
        /// Parameters as a JSON array, e.g. '["0xabc...", "latest"]'
        params: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging()?;

    let mut config = SuiteConfig::from_env()?;
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }

    match args.command {
        Commands::Probe => run_probe(&config).await,
        Commands::Call { method, params } => run_call(&config, &method, params.as_deref()).await,
    }
}

async fn run_probe(config: &SuiteConfig) -> Result<()> {
    let client = RpcClient::new(config)?;
    println!("probing {}", client.endpoint());

    let mut failures = 0usize;
    for method in PROBE_METHODS {
        match client.call_no_params(method).await {
            Ok(response) => match response.error {
                None => println!("ok    {method}"),
                Some(error) => {
                    println!("rpc   {method}: {} (code {})", error.message, error.code);
                    failures += 1;
                }
            },
            Err(e) => {
                println!("fail  {method}: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} probes failed", PROBE_METHODS.len());
    }
    println!("all {} probes passed", PROBE_METHODS.len());
    Ok(())
}

async fn run_call(config: &SuiteConfig, method: &str, params: Option<&str>) -> Result<()> {
    let params: Vec<Value> = match params {
        Some(raw) => serde_json::from_str(raw).context("params must be a JSON array")?,
        None => Vec::new(),
    };

    let client = RpcClient::new(config)?;
    let response = client.call(method, params).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=info,h2=info"));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
