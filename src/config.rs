//! Build-time application configuration
//!
//! Values come from compile-time environment variables so a single wasm
//! bundle is baked per deployment. Anything not set falls back to the
//! public testnet defaults below.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Default backend base URL
const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Polygon Amoy testnet
const DEFAULT_CHAIN_ID: u64 = 80002;
const DEFAULT_CHAIN_NAME: &str = "Polygon Amoy Testnet";
const DEFAULT_RPC_URL: &str = "https://rpc-amoy.polygon.technology";
const DEFAULT_EXPLORER_URL: &str = "https://amoy.polygonscan.com";
const DEFAULT_CURRENCY_NAME: &str = "POL";
const DEFAULT_CURRENCY_SYMBOL: &str = "POL";

/// Receipt polling: every 2s for up to 5 minutes
const DEFAULT_RECEIPT_POLL_INTERVAL_MS: u32 = 2_000;
const DEFAULT_RECEIPT_POLL_ATTEMPTS: u32 = 150;

/// Default page size for paginated lists
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Global configuration, resolved once on first access
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

/// Shortcut for `&CONFIG`
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend REST base URL without trailing slash
    pub api_url: String,
    /// Network the purchase contract lives on
    pub network: NetworkConfig,
    pub receipt_polling: ReceiptPolling,
    pub page_size: u32,
}

impl AppConfig {
    fn from_env() -> Self {
        let api_url = option_env!("ARTMARKET_API_URL")
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let chain_id = option_env!("ARTMARKET_CHAIN_ID")
            .and_then(parse_chain_id)
            .unwrap_or(DEFAULT_CHAIN_ID);

        let mut network = NetworkConfig::default();
        network.chain_id = chain_id;
        if let Some(name) = option_env!("ARTMARKET_CHAIN_NAME") {
            network.chain_name = name.to_string();
        }
        if let Some(rpc) = option_env!("ARTMARKET_RPC_URL") {
            network.rpc_urls = vec![rpc.to_string()];
        }
        if let Some(explorer) = option_env!("ARTMARKET_EXPLORER_URL") {
            network.block_explorer_urls = vec![explorer.to_string()];
        }

        let config = Self {
            api_url,
            network,
            receipt_polling: ReceiptPolling::default(),
            page_size: DEFAULT_PAGE_SIZE,
        };

        log::info!(
            "Config: api={} chain={} ({})",
            config.api_url,
            config.network.chain_id,
            config.network.chain_name
        );

        config
    }
}

/// Parameters of the chain purchases are settled on.
///
/// Serializes to the `wallet_addEthereumChain` parameter object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    #[serde(serialize_with = "serialize_chain_id")]
    pub chain_id: u64,
    pub chain_name: String,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
    pub native_currency: NativeCurrency,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl NetworkConfig {
    /// Chain id as the `0x`-prefixed hex quantity wallets expect
    pub fn chain_id_hex(&self) -> String {
        format!("{:#x}", self.chain_id)
    }

    /// Transaction URL on the block explorer, if one is configured
    pub fn explorer_tx_url(&self, tx_hash: &str) -> Option<String> {
        self.block_explorer_urls
            .first()
            .map(|base| format!("{}/tx/{}", base.trim_end_matches('/'), tx_hash))
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            chain_name: DEFAULT_CHAIN_NAME.to_string(),
            rpc_urls: vec![DEFAULT_RPC_URL.to_string()],
            block_explorer_urls: vec![DEFAULT_EXPLORER_URL.to_string()],
            native_currency: NativeCurrency {
                name: DEFAULT_CURRENCY_NAME.to_string(),
                symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
                decimals: 18,
            },
        }
    }
}

fn serialize_chain_id<S: serde::Serializer>(chain_id: &u64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{:#x}", chain_id))
}

/// How long to wait for a transaction receipt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReceiptPolling {
    pub interval_ms: u32,
    pub max_attempts: u32,
}

impl Default for ReceiptPolling {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_RECEIPT_POLL_INTERVAL_MS,
            max_attempts: DEFAULT_RECEIPT_POLL_ATTEMPTS,
        }
    }
}

/// Parse a chain id given either as decimal ("80002") or hex ("0x13882")
pub fn parse_chain_id(value: &str) -> Option<u64> {
    let value = value.trim();
    match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => value.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chain_id() {
        assert_eq!(parse_chain_id("80002"), Some(80002));
        assert_eq!(parse_chain_id("0x13882"), Some(80002));
        assert_eq!(parse_chain_id("0X13882"), Some(80002));
        assert_eq!(parse_chain_id(" 0x1 "), Some(1));
        assert_eq!(parse_chain_id("mainnet"), None);
        assert_eq!(parse_chain_id("0xzz"), None);
    }

    #[test]
    fn test_add_chain_params_shape() {
        let network = NetworkConfig::default();
        let value = serde_json::to_value(&network).unwrap();

        assert_eq!(value["chainId"], "0x13882");
        assert_eq!(value["chainName"], DEFAULT_CHAIN_NAME);
        assert_eq!(value["rpcUrls"][0], DEFAULT_RPC_URL);
        assert_eq!(value["blockExplorerUrls"][0], DEFAULT_EXPLORER_URL);
        assert_eq!(value["nativeCurrency"]["symbol"], "POL");
        assert_eq!(value["nativeCurrency"]["decimals"], 18);
    }

    #[test]
    fn test_explorer_tx_url() {
        let mut network = NetworkConfig::default();
        network.block_explorer_urls = vec!["https://scan.example/".to_string()];
        assert_eq!(
            network.explorer_tx_url("0xabc").as_deref(),
            Some("https://scan.example/tx/0xabc")
        );

        network.block_explorer_urls.clear();
        assert!(network.explorer_tx_url("0xabc").is_none());
    }
}
