//! Purchase flow error types
//!
//! Each variant knows which step it belongs to so the state machine can
//! park in `Failed` at the right stage.

use std::fmt;

use super::state::PaymentStatus;
use crate::services::api::ApiError;
use crate::services::ethereum::ProviderError;

/// Generic text shown for failures the user cannot act on
pub const GENERIC_PURCHASE_ERROR: &str = "Purchase failed. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseError {
    // ==========================================================================
    // Preconditions
    // ==========================================================================
    NotAuthenticated,
    WalletNotInstalled,
    AlreadyPurchasing,

    // ==========================================================================
    // Preparation
    // ==========================================================================
    Prepare(ApiError),
    NetworkSwitch(ProviderError),

    // ==========================================================================
    // Signing and settlement
    // ==========================================================================
    NoAccounts,
    InvalidPrice(String),
    ContractEncoding(String),
    SigningRejected,
    Wallet(ProviderError),
    TransactionReverted { tx_hash: String },
    ReceiptTimeout { tx_hash: String },

    // ==========================================================================
    // Backend confirmation
    // ==========================================================================
    Completion { tx_hash: String, error: ApiError },
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAuthenticated => write!(f, "Not signed in"),
            Self::WalletNotInstalled => write!(f, "No wallet extension found"),
            Self::AlreadyPurchasing => write!(f, "A purchase is already in progress"),

            Self::Prepare(e) => write!(f, "Failed to prepare purchase: {}", e),
            Self::NetworkSwitch(e) => write!(f, "Failed to switch network: {}", e),

            Self::NoAccounts => write!(f, "Wallet returned no accounts"),
            Self::InvalidPrice(msg) => write!(f, "{}", msg),
            Self::ContractEncoding(msg) => write!(f, "Failed to build contract call: {}", msg),
            Self::SigningRejected => write!(f, "Transaction rejected in wallet"),
            Self::Wallet(e) => write!(f, "Wallet error: {}", e),
            Self::TransactionReverted { tx_hash } => write!(f, "Transaction {} reverted", tx_hash),
            Self::ReceiptTimeout { tx_hash } => {
                write!(f, "Timed out waiting for transaction {}", tx_hash)
            }

            Self::Completion { tx_hash, error } => {
                write!(f, "Payment {} sent but not confirmed by server: {}", tx_hash, error)
            }
        }
    }
}

impl std::error::Error for PurchaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Prepare(e) => Some(e),
            Self::Completion { error, .. } => Some(error),
            Self::NetworkSwitch(e) | Self::Wallet(e) => Some(e),
            _ => None,
        }
    }
}

impl PurchaseError {
    /// Map a wallet error raised while signing/sending
    pub fn from_signing(err: ProviderError) -> Self {
        if err.is_user_rejection() {
            Self::SigningRejected
        } else {
            Self::Wallet(err)
        }
    }

    /// Step the flow was in when this error happened
    pub fn stage(&self) -> PaymentStatus {
        match self {
            Self::NotAuthenticated
            | Self::WalletNotInstalled
            | Self::AlreadyPurchasing
            | Self::Prepare(_)
            | Self::NetworkSwitch(_) => PaymentStatus::Processing,
            Self::NoAccounts
            | Self::InvalidPrice(_)
            | Self::ContractEncoding(_)
            | Self::SigningRejected
            | Self::Wallet(_)
            | Self::TransactionReverted { .. }
            | Self::ReceiptTimeout { .. } => PaymentStatus::Waiting,
            Self::Completion { .. } => PaymentStatus::Verifying,
        }
    }

    /// Hash of a transaction that was broadcast before the failure
    pub fn tx_hash(&self) -> Option<&str> {
        match self {
            Self::TransactionReverted { tx_hash }
            | Self::ReceiptTimeout { tx_hash }
            | Self::Completion { tx_hash, .. } => Some(tx_hash),
            _ => None,
        }
    }

    /// Funds left the wallet but the backend has not recorded access
    pub fn is_paid_but_unconfirmed(&self) -> bool {
        matches!(self, Self::Completion { .. })
    }

    /// Broadcast transaction with no receipt yet; it may still be mined
    pub fn is_pending_on_chain(&self) -> bool {
        matches!(self, Self::ReceiptTimeout { .. })
    }

    /// Toast text
    pub fn user_message(&self) -> String {
        match self {
            Self::NotAuthenticated => "Please sign in to purchase this collection.".to_string(),
            Self::WalletNotInstalled => {
                "No wallet found. Install a browser wallet such as MetaMask to continue.".to_string()
            }
            Self::AlreadyPurchasing => "A purchase is already in progress.".to_string(),
            Self::NetworkSwitch(e) if e.is_user_rejection() => {
                "Network switch was rejected in your wallet.".to_string()
            }
            Self::SigningRejected => "Transaction was rejected in your wallet.".to_string(),
            Self::TransactionReverted { .. } => {
                "The transaction was reverted on chain. No purchase was made.".to_string()
            }
            Self::ReceiptTimeout { .. } => {
                "Your transaction is still pending. Check again once it has been mined.".to_string()
            }
            Self::Completion { .. } => {
                "Payment sent, but we could not confirm it yet. Retry verification to unlock the collection."
                    .to_string()
            }
            Self::Prepare(e) => e.message.clone(),
            _ => GENERIC_PURCHASE_ERROR.to_string(),
        }
    }
}

impl From<ApiError> for PurchaseError {
    fn from(err: ApiError) -> Self {
        Self::Prepare(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ethereum::USER_REJECTED;

    #[test]
    fn test_signing_rejection_mapping() {
        let rejected = PurchaseError::from_signing(ProviderError::new(USER_REJECTED, "denied"));
        assert_eq!(rejected, PurchaseError::SigningRejected);

        let other = PurchaseError::from_signing(ProviderError::new(-32000, "insufficient funds"));
        assert!(matches!(other, PurchaseError::Wallet(_)));
        assert_eq!(other.user_message(), GENERIC_PURCHASE_ERROR);
    }

    #[test]
    fn test_stages() {
        assert_eq!(PurchaseError::WalletNotInstalled.stage(), PaymentStatus::Processing);
        assert_eq!(PurchaseError::SigningRejected.stage(), PaymentStatus::Waiting);
        let completion = PurchaseError::Completion {
            tx_hash: "0x1".into(),
            error: ApiError::transport("offline"),
        };
        assert_eq!(completion.stage(), PaymentStatus::Verifying);
        assert_eq!(completion.tx_hash(), Some("0x1"));
        assert!(completion.is_paid_but_unconfirmed());
        assert!(!completion.is_pending_on_chain());

        let timeout = PurchaseError::ReceiptTimeout { tx_hash: "0x2".into() };
        assert_eq!(timeout.stage(), PaymentStatus::Waiting);
        assert!(timeout.is_pending_on_chain());
        assert!(!PurchaseError::TransactionReverted { tx_hash: "0x2".into() }.is_pending_on_chain());
    }

    #[test]
    fn test_prepare_error_surfaces_backend_message() {
        let err: PurchaseError = ApiError::from_body(409, r#"{"message":"Already purchased"}"#).into();
        assert_eq!(err.user_message(), "Already purchased");
    }
}
