// tests/util.rs
// Shared helpers for the conformance test files.

use eth_rpc_conformance::config::SuiteConfig;
use eth_rpc_conformance::rpc::RpcClient;

/// Build the effective configuration and a client for the live suite.
/// Endpoint and fixture values can be overridden through the
/// `RPC_SUITE_*` environment variables.
#[allow(dead_code)]
pub fn live_client() -> (SuiteConfig, RpcClient) {
    let config = SuiteConfig::from_env().expect("suite configuration should load");
    let client = RpcClient::new(&config).expect("HTTP client should build");
    (config, client)
}

/// Client pointed at an arbitrary endpoint (mock servers in hermetic tests).
#[allow(dead_code)]
pub fn client_for(endpoint: &str) -> RpcClient {
    let config = SuiteConfig { endpoint: endpoint.to_string(), ..SuiteConfig::default() };
    RpcClient::new(&config).expect("HTTP client should build")
}
