//! Purchase progress as an explicit state machine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse phase of an in-flight purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Preparing the purchase and checking the wallet network
    Processing,
    /// Waiting for the wallet signature and on-chain confirmation
    Waiting,
    /// Backend is recording the transaction
    Verifying,
    Purchased,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Processing => "Preparing purchase",
            Self::Waiting => "Waiting for wallet confirmation",
            Self::Verifying => "Verifying payment",
            Self::Purchased => "Purchased",
        }
    }

    /// Step index for progress indicators
    pub fn step(&self) -> usize {
        match self {
            Self::Processing => 0,
            Self::Waiting => 1,
            Self::Verifying => 2,
            Self::Purchased => 3,
        }
    }

    pub fn all() -> [PaymentStatus; 4] {
        [Self::Processing, Self::Waiting, Self::Verifying, Self::Purchased]
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Proof of a completed purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub collection_id: String,
    pub tx_hash: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PurchaseState {
    #[default]
    Idle,
    Processing,
    /// `tx_hash` is set once the wallet has broadcast the transaction
    Waiting { tx_hash: Option<String> },
    Verifying { tx_hash: String },
    Purchased(PurchaseReceipt),
    /// Terminal failure at `stage`. `pending` marks a broadcast
    /// transaction whose outcome is still unknown.
    Failed {
        stage: PaymentStatus,
        error: String,
        tx_hash: Option<String>,
        pending: bool,
    },
}

impl PurchaseState {
    /// Coarse status; a failure reports the stage it stopped at
    pub fn status(&self) -> Option<PaymentStatus> {
        match self {
            Self::Idle => None,
            Self::Processing => Some(PaymentStatus::Processing),
            Self::Waiting { .. } => Some(PaymentStatus::Waiting),
            Self::Verifying { .. } => Some(PaymentStatus::Verifying),
            Self::Purchased(_) => Some(PaymentStatus::Purchased),
            Self::Failed { stage, .. } => Some(*stage),
        }
    }

    /// Any step between start and a terminal state
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Processing | Self::Waiting { .. } | Self::Verifying { .. })
    }

    pub fn is_purchased(&self) -> bool {
        matches!(self, Self::Purchased(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn tx_hash(&self) -> Option<&str> {
        match self {
            Self::Waiting { tx_hash } => tx_hash.as_deref(),
            Self::Verifying { tx_hash } => Some(tx_hash),
            Self::Purchased(receipt) => Some(&receipt.tx_hash),
            Self::Failed { tx_hash, .. } => tx_hash.as_deref(),
            _ => None,
        }
    }

    /// Paid on chain, backend confirmation failed: only completion can be retried
    pub fn can_retry_completion(&self) -> bool {
        matches!(
            self,
            Self::Failed { stage: PaymentStatus::Verifying, tx_hash: Some(_), .. }
        )
    }

    /// Sent but no receipt within the polling window: only re-polling that
    /// same hash is allowed
    pub fn can_check_receipt(&self) -> bool {
        matches!(
            self,
            Self::Failed { stage: PaymentStatus::Waiting, tx_hash: Some(_), pending: true, .. }
        )
    }

    /// Failure that continues an existing transaction instead of starting over
    pub fn is_resumable(&self) -> bool {
        self.can_retry_completion() || self.can_check_receipt()
    }

    /// A fresh attempt is allowed from idle or any failure that sent no funds
    pub fn can_start(&self) -> bool {
        match self {
            Self::Idle => true,
            Self::Failed { .. } => !self.is_resumable(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_of_failed_is_stage() {
        let state = PurchaseState::Failed {
            stage: PaymentStatus::Waiting,
            error: "rejected".into(),
            tx_hash: None,
            pending: false,
        };
        assert_eq!(state.status(), Some(PaymentStatus::Waiting));
        assert!(state.can_start());
        assert!(!state.can_retry_completion());
    }

    #[test]
    fn test_completion_retry_guard() {
        let state = PurchaseState::Failed {
            stage: PaymentStatus::Verifying,
            error: "offline".into(),
            tx_hash: Some("0xabc".into()),
            pending: false,
        };
        assert!(state.can_retry_completion());
        assert!(!state.can_check_receipt());
        assert!(!state.can_start());
        assert_eq!(state.tx_hash(), Some("0xabc"));
    }

    #[test]
    fn test_receipt_timeout_cannot_restart() {
        let timed_out = PurchaseState::Failed {
            stage: PaymentStatus::Waiting,
            error: "still pending".into(),
            tx_hash: Some("0xabc".into()),
            pending: true,
        };
        assert!(timed_out.can_check_receipt());
        assert!(timed_out.is_resumable());
        assert!(!timed_out.can_start());
        assert!(!timed_out.can_retry_completion());

        // A reverted transaction moved no funds, so starting over is fine
        let reverted = PurchaseState::Failed {
            stage: PaymentStatus::Waiting,
            error: "reverted".into(),
            tx_hash: Some("0xabc".into()),
            pending: false,
        };
        assert!(!reverted.can_check_receipt());
        assert!(reverted.can_start());
    }

    #[test]
    fn test_in_flight() {
        assert!(!PurchaseState::Idle.is_in_flight());
        assert!(PurchaseState::Processing.is_in_flight());
        assert!(PurchaseState::Waiting { tx_hash: None }.is_in_flight());
        assert!(!PurchaseState::Idle.is_purchased());
        assert!(PaymentStatus::Processing < PaymentStatus::Purchased);
    }
}
