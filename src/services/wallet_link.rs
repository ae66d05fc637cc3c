//! Linking a wallet address to the signed-in account
//!
//! Ownership is proven by signing a backend-issued nonce message with
//! `personal_sign`.

use serde::{Deserialize, Serialize};

use crate::services::api::{ApiClient, ApiError};
use crate::services::auth::CurrentUser;
use crate::services::ethereum::{personal_sign, request_accounts, Eip1193Provider};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletNonce {
    /// Exact text the wallet must sign
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkWalletRequest {
    pub wallet_address: String,
    pub signature: String,
    pub message: String,
}

async fn fetch_nonce(address: &str) -> Result<WalletNonce, ApiError> {
    ApiClient::new()
        .get(&format!("/users/wallet/nonce?address={}", urlencoding::encode(address)))
        .await
}

async fn submit_link(request: &LinkWalletRequest) -> Result<CurrentUser, ApiError> {
    ApiClient::new().post("/users/wallet", request).await
}

/// Connect, sign the nonce and register the wallet. Returns the updated user.
pub async fn link_wallet<P: Eip1193Provider + ?Sized>(provider: &P) -> Result<CurrentUser, String> {
    let accounts = request_accounts(provider)
        .await
        .map_err(|e| format!("Wallet connection failed: {}", e.message))?;
    let address = accounts
        .into_iter()
        .next()
        .ok_or_else(|| "No wallet account available".to_string())?;

    let nonce = fetch_nonce(&address).await?;

    let signature = personal_sign(provider, &nonce.message, &address).await.map_err(|e| {
        if e.is_user_rejection() {
            "Signature request was rejected".to_string()
        } else {
            format!("Failed to sign message: {}", e.message)
        }
    })?;

    log::info!("Linking wallet {}", address);

    let user = submit_link(&LinkWalletRequest {
        wallet_address: address,
        signature,
        message: nonce.message,
    })
    .await?;

    Ok(user)
}

pub async fn unlink_wallet() -> Result<(), ApiError> {
    ApiClient::new().delete("/users/wallet").await
}
