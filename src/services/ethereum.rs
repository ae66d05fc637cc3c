//! EIP-1193 wallet bridge
//!
//! The injected `window.ethereum` object is wrapped by [`BrowserProvider`];
//! everything else talks to the [`Eip1193Provider`] trait so the purchase
//! flow can run against a scripted provider in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

use crate::config::{parse_chain_id, NetworkConfig};

#[cfg(target_family = "wasm")]
use wasm_bindgen::prelude::*;

/// User rejected the request
pub const USER_REJECTED: i64 = 4001;
/// The requested chain has not been added to the wallet
pub const UNRECOGNIZED_CHAIN: i64 = 4902;
/// Local code for errors that did not come with one
pub const INTERNAL_ERROR: i64 = -32603;

/// Error object returned by an EIP-1193 `request`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderError {
    pub code: i64,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(INTERNAL_ERROR, message)
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == USER_REJECTED
    }

    pub fn is_unrecognized_chain(&self) -> bool {
        self.code == UNRECOGNIZED_CHAIN
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl std::error::Error for ProviderError {}

/// Anything that answers EIP-1193 `request({ method, params })`
#[async_trait(?Send)]
pub trait Eip1193Provider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;
}

/// Transaction fields for `eth_sendTransaction`, all hex encoded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub data: String,
    pub value: String,
}

/// Subset of a transaction receipt we look at
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    #[serde(default)]
    pub block_number: Option<String>,
    /// "0x1" success, "0x0" reverted
    #[serde(default)]
    pub status: Option<String>,
}

impl TransactionReceipt {
    /// Pre-byzantium receipts have no status; treat those as success
    pub fn succeeded(&self) -> bool {
        match self.status.as_deref() {
            Some(status) => parse_quantity(status) == Some(1),
            None => true,
        }
    }
}

/// JSON-RPC hex quantity ("0x1a") as a number
pub fn parse_quantity(value: &str) -> Option<u64> {
    let digits = value.trim().strip_prefix("0x")?;
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

/// `eth_requestAccounts`; prompts the user to connect if needed
pub async fn request_accounts<P: Eip1193Provider + ?Sized>(provider: &P) -> Result<Vec<String>, ProviderError> {
    let value = provider.request("eth_requestAccounts", json!([])).await?;
    serde_json::from_value(value).map_err(|e| ProviderError::internal(format!("Invalid accounts response: {}", e)))
}

/// `eth_chainId` parsed into a number
pub async fn chain_id<P: Eip1193Provider + ?Sized>(provider: &P) -> Result<u64, ProviderError> {
    let value = provider.request("eth_chainId", json!([])).await?;
    value
        .as_str()
        .and_then(parse_chain_id)
        .ok_or_else(|| ProviderError::internal(format!("Invalid chain id: {}", value)))
}

pub async fn switch_chain<P: Eip1193Provider + ?Sized>(provider: &P, network: &NetworkConfig) -> Result<(), ProviderError> {
    provider
        .request("wallet_switchEthereumChain", json!([{ "chainId": network.chain_id_hex() }]))
        .await
        .map(|_| ())
}

pub async fn add_chain<P: Eip1193Provider + ?Sized>(provider: &P, network: &NetworkConfig) -> Result<(), ProviderError> {
    let params = serde_json::to_value(network)
        .map_err(|e| ProviderError::internal(format!("Failed to encode network: {}", e)))?;
    provider
        .request("wallet_addEthereumChain", Value::Array(vec![params]))
        .await
        .map(|_| ())
}

/// Make sure the wallet is on `network`, switching or adding it as needed.
///
/// A switch the user rejects is returned as is. Any other switch failure
/// (4902 or wallets that report unknown chains with their own codes) falls
/// through to `wallet_addEthereumChain`.
pub async fn ensure_network<P: Eip1193Provider + ?Sized>(provider: &P, network: &NetworkConfig) -> Result<(), ProviderError> {
    let current = chain_id(provider).await?;
    if current == network.chain_id {
        return Ok(());
    }

    log::info!("Wallet on chain {}, switching to {}", current, network.chain_id);

    match switch_chain(provider, network).await {
        Ok(()) => Ok(()),
        Err(e) if e.is_user_rejection() => Err(e),
        Err(e) => {
            log::info!("Switch failed ({}), asking wallet to add {}", e, network.chain_name);
            add_chain(provider, network).await
        }
    }
}

/// `eth_sendTransaction`, returns the transaction hash
pub async fn send_transaction<P: Eip1193Provider + ?Sized>(provider: &P, tx: &TransactionRequest) -> Result<String, ProviderError> {
    let params = serde_json::to_value(tx)
        .map_err(|e| ProviderError::internal(format!("Failed to encode transaction: {}", e)))?;
    let value = provider.request("eth_sendTransaction", Value::Array(vec![params])).await?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ProviderError::internal("Wallet returned no transaction hash"))
}

/// `eth_getTransactionReceipt`; `None` while the transaction is pending
pub async fn transaction_receipt<P: Eip1193Provider + ?Sized>(
    provider: &P,
    tx_hash: &str,
) -> Result<Option<TransactionReceipt>, ProviderError> {
    let value = provider.request("eth_getTransactionReceipt", json!([tx_hash])).await?;
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| ProviderError::internal(format!("Invalid receipt: {}", e)))
}

/// `personal_sign` over a UTF-8 message
pub async fn personal_sign<P: Eip1193Provider + ?Sized>(provider: &P, message: &str, address: &str) -> Result<String, ProviderError> {
    let hex_message = format!("0x{}", hex::encode(message.as_bytes()));
    let value = provider.request("personal_sign", json!([hex_message, address])).await?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ProviderError::internal("Wallet returned no signature"))
}

// ============================================================================
// Browser provider
// ============================================================================

#[cfg(target_family = "wasm")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "ethereum"], js_name = request)]
    async fn ethereum_request(args: JsValue) -> Result<JsValue, JsValue>;
}

/// Whether a wallet extension injected `window.ethereum`
pub fn is_wallet_installed() -> bool {
    #[cfg(target_family = "wasm")]
    {
        if let Some(window) = web_sys::window() {
            return js_sys::Reflect::get(&window, &JsValue::from_str("ethereum"))
                .map(|v| !v.is_undefined() && !v.is_null())
                .unwrap_or(false);
        }
    }
    false
}

/// The injected wallet
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserProvider;

impl BrowserProvider {
    /// Returns `None` when no wallet extension is present
    pub fn detect() -> Option<Self> {
        if is_wallet_installed() {
            Some(Self)
        } else {
            None
        }
    }
}

#[async_trait(?Send)]
impl Eip1193Provider for BrowserProvider {
    #[cfg(target_family = "wasm")]
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        use serde::Serialize as _;

        log::debug!("wallet request: {}", method);

        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let args = json!({ "method": method, "params": params })
            .serialize(&serializer)
            .map_err(|e| ProviderError::internal(format!("Failed to encode request: {}", e)))?;

        match ethereum_request(args).await {
            Ok(result) => {
                if result.is_undefined() || result.is_null() {
                    return Ok(Value::Null);
                }
                serde_wasm_bindgen::from_value(result)
                    .map_err(|e| ProviderError::internal(format!("Failed to decode response: {}", e)))
            }
            Err(err) => Err(provider_error_from_js(&err)),
        }
    }

    #[cfg(not(target_family = "wasm"))]
    async fn request(&self, method: &str, _params: Value) -> Result<Value, ProviderError> {
        Err(ProviderError::internal(format!("No browser wallet available for {}", method)))
    }
}

#[cfg(target_family = "wasm")]
fn provider_error_from_js(err: &JsValue) -> ProviderError {
    let code = js_sys::Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|c| c as i64)
        .unwrap_or(INTERNAL_ERROR);
    let message = js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "Wallet request failed".to_string());
    ProviderError::new(code, message)
}

#[cfg(test)]
pub mod mock {
    //! Scripted provider shared by wallet-facing tests

    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Answers from a per-method script and records every call in order
    #[derive(Default)]
    pub struct MockProvider {
        responses: RefCell<HashMap<String, Vec<Result<Value, ProviderError>>>>,
        pub calls: RefCell<Vec<(String, Value)>>,
    }

    impl MockProvider {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a response; the last queued one repeats once the queue drains
        pub fn on(self, method: &str, response: Result<Value, ProviderError>) -> Self {
            self.responses
                .borrow_mut()
                .entry(method.to_string())
                .or_default()
                .push(response);
            self
        }

        pub fn methods(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|(m, _)| m.clone()).collect()
        }

        pub fn params_of(&self, method: &str) -> Option<Value> {
            self.calls
                .borrow()
                .iter()
                .find(|(m, _)| m == method)
                .map(|(_, p)| p.clone())
        }
    }

    #[async_trait(?Send)]
    impl Eip1193Provider for MockProvider {
        async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
            self.calls.borrow_mut().push((method.to_string(), params));
            let mut responses = self.responses.borrow_mut();
            match responses.get_mut(method) {
                Some(queue) if queue.len() > 1 => queue.remove(0),
                Some(queue) if !queue.is_empty() => queue[0].clone(),
                _ => Err(ProviderError::internal(format!("unexpected call: {}", method))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockProvider;
    use super::*;

    fn network() -> NetworkConfig {
        NetworkConfig::default()
    }

    #[tokio::test]
    async fn test_ensure_network_noop_when_on_chain() {
        let provider = MockProvider::new().on("eth_chainId", Ok(json!("0x13882")));
        ensure_network(&provider, &network()).await.unwrap();
        assert_eq!(provider.methods(), vec!["eth_chainId"]);
    }

    #[tokio::test]
    async fn test_ensure_network_switches() {
        let provider = MockProvider::new()
            .on("eth_chainId", Ok(json!("0x1")))
            .on("wallet_switchEthereumChain", Ok(Value::Null));
        ensure_network(&provider, &network()).await.unwrap();

        assert_eq!(provider.methods(), vec!["eth_chainId", "wallet_switchEthereumChain"]);
        assert_eq!(
            provider.params_of("wallet_switchEthereumChain").unwrap(),
            json!([{ "chainId": "0x13882" }])
        );
    }

    #[tokio::test]
    async fn test_ensure_network_adds_unknown_chain() {
        let provider = MockProvider::new()
            .on("eth_chainId", Ok(json!("0x1")))
            .on("wallet_switchEthereumChain", Err(ProviderError::new(UNRECOGNIZED_CHAIN, "Unrecognized chain")))
            .on("wallet_addEthereumChain", Ok(Value::Null));
        ensure_network(&provider, &network()).await.unwrap();

        assert_eq!(
            provider.methods(),
            vec!["eth_chainId", "wallet_switchEthereumChain", "wallet_addEthereumChain"]
        );
        let params = provider.params_of("wallet_addEthereumChain").unwrap();
        assert_eq!(params[0]["chainId"], "0x13882");
        assert_eq!(params[0]["rpcUrls"][0], "https://rpc-amoy.polygon.technology");
    }

    #[tokio::test]
    async fn test_ensure_network_user_rejects_switch() {
        let provider = MockProvider::new()
            .on("eth_chainId", Ok(json!("0x1")))
            .on("wallet_switchEthereumChain", Err(ProviderError::new(USER_REJECTED, "User rejected")));
        let err = ensure_network(&provider, &network()).await.unwrap_err();

        assert!(err.is_user_rejection());
        assert!(!provider.methods().contains(&"wallet_addEthereumChain".to_string()));
    }

    #[tokio::test]
    async fn test_receipt_pending_and_status() {
        let provider = MockProvider::new()
            .on("eth_getTransactionReceipt", Ok(Value::Null))
            .on(
                "eth_getTransactionReceipt",
                Ok(json!({ "transactionHash": "0xabc", "blockNumber": "0x10", "status": "0x0" })),
            );

        assert!(transaction_receipt(&provider, "0xabc").await.unwrap().is_none());
        let receipt = transaction_receipt(&provider, "0xabc").await.unwrap().unwrap();
        assert_eq!(receipt.transaction_hash, "0xabc");
        assert!(!receipt.succeeded());
    }

    #[test]
    fn test_receipt_success_variants() {
        let ok = TransactionReceipt { transaction_hash: "0x1".into(), block_number: None, status: Some("0x1".into()) };
        let legacy = TransactionReceipt { status: None, ..ok.clone() };
        assert!(ok.succeeded());
        assert!(legacy.succeeded());

        let reverted = TransactionReceipt { status: Some("0x0".into()), ..ok.clone() };
        // Decimal "1" is not a JSON-RPC quantity
        let decimal = TransactionReceipt { status: Some("1".into()), ..ok.clone() };
        assert!(!reverted.succeeded());
        assert!(!decimal.succeeded());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0x1"), Some(1));
        assert_eq!(parse_quantity("0x10"), Some(16));
        assert_eq!(parse_quantity("0x"), None);
        assert_eq!(parse_quantity("16"), None);
        assert_eq!(parse_quantity("0xzz"), None);
    }

    #[tokio::test]
    async fn test_personal_sign_hex_encodes_message() {
        let provider = MockProvider::new().on("personal_sign", Ok(json!("0xsig")));
        let sig = personal_sign(&provider, "hi", "0xabc").await.unwrap();

        assert_eq!(sig, "0xsig");
        assert_eq!(provider.params_of("personal_sign").unwrap(), json!(["0x6869", "0xabc"]));
    }
}
