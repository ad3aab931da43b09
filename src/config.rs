use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Configuration for one conformance run.
///
/// Built once at startup and passed by reference to the RPC client and the
/// test harness. Defaults point at the Asset Hub testnet ETH-RPC deployment
/// the suite was originally written against.
#[derive(Debug, Clone, Deserialize)]
pub struct SuiteConfig {
    /// HTTPS URL of the JSON-RPC endpoint.
    #[serde(default = "SuiteConfig::default_endpoint")]
    pub endpoint: String,

    /// Funded account used by balance/nonce assertions.
    #[serde(default = "SuiteConfig::default_test_address")]
    pub test_address: String,

    /// Deployed contract used by code/storage assertions.
    #[serde(default = "SuiteConfig::default_contract_address")]
    pub contract_address: String,

    /// Known mined transaction used by the debug-trace assertions.
    #[serde(default = "SuiteConfig::default_transaction_hash")]
    pub transaction_hash: String,

    /// Per-request timeout applied to the HTTP client.
    #[serde(default = "SuiteConfig::default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl SuiteConfig {
    fn default_endpoint() -> String {
        "https://testnet-passet-hub-eth-rpc.polkadot.io".to_string()
    }

    fn default_test_address() -> String {
        "0xB082590E17F2C74a9DB0d851081676EaC63a8bD3".to_string()
    }

    fn default_contract_address() -> String {
        "0xe6d0407394a44e82b07c69407332fc96ecc18872".to_string()
    }

    fn default_transaction_hash() -> String {
        "0xc4536236effbdec265aa0aa91036ee07eb6afec12bad0deafc0824f343e441e6".to_string()
    }

    fn default_timeout_secs() -> u64 {
        30
    }

    /// Load configuration from a TOML file. All fields are optional in the
    /// file; absent ones fall back to the defaults above.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: SuiteConfig = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Build the effective configuration: defaults (or the TOML file named
    /// by `RPC_SUITE_CONFIG`), then per-field environment overrides.
    ///
    /// Addresses and hashes are not validated here; malformed values only
    /// surface as RPC-level results downstream.
    pub fn from_env() -> Result<Self> {
        let mut config = match env::var("RPC_SUITE_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(endpoint) = env::var("RPC_SUITE_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Ok(address) = env::var("RPC_SUITE_TEST_ADDRESS") {
            config.test_address = address;
        }
        if let Ok(address) = env::var("RPC_SUITE_CONTRACT_ADDRESS") {
            config.contract_address = address;
        }
        if let Ok(hash) = env::var("RPC_SUITE_TRANSACTION_HASH") {
            config.transaction_hash = hash;
        }
        if let Ok(timeout) = env::var("RPC_SUITE_TIMEOUT_SECS") {
            config.request_timeout_secs = timeout
                .parse()
                .with_context(|| format!("invalid RPC_SUITE_TIMEOUT_SECS value: {timeout}"))?;
        }

        Ok(config)
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            test_address: Self::default_test_address(),
            contract_address: Self::default_contract_address(),
            transaction_hash: Self::default_transaction_hash(),
            request_timeout_secs: Self::default_timeout_secs(),
        }
    }
}
