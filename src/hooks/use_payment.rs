//! use_payment hook - collection purchases from a component
//!
//! Wires the purchase coordinator to the browser wallet, the REST client,
//! toasts and the auth store, and exposes its progress as signals.

use dioxus::prelude::*;
use dioxus_primitives::toast::{consume_toast, ToastOptions, Toasts};
use std::rc::Rc;
use std::time::Duration;

use crate::config::config;
use crate::services::api::ApiClient;
use crate::services::collections::PurchaseIntent;
use crate::services::ethereum::{BrowserProvider, Eip1193Provider};
use crate::stores::auth_store;
use crate::stores::payment::{self, PaymentStatus, PurchaseError, PurchaseFlow, PurchaseNotifier, PurchaseState};

/// Purchase outcome toasts
struct ToastNotifier {
    toasts: Toasts,
}

impl PurchaseNotifier for ToastNotifier {
    fn success(&self, message: &str) {
        self.toasts.success(
            message.to_string(),
            ToastOptions::new().duration(Duration::from_secs(4)),
        );
    }

    fn error(&self, message: &str) {
        self.toasts.error(
            message.to_string(),
            ToastOptions::new().duration(Duration::from_secs(6)),
        );
    }
}

/// Return type for the use_payment hook
#[derive(Clone, Copy, PartialEq)]
pub struct UsePayment {
    pub state: Signal<PurchaseState>,
    /// True from click until the flow reaches a terminal state
    pub is_purchasing: Signal<bool>,
    /// Start a purchase: (collection id, artist wallet address)
    pub purchase_collection: Callback<(String, String)>,
    /// Re-send backend confirmation after `Failed { stage: Verifying }`
    pub retry_verification: Callback<()>,
    /// Poll again for a transaction whose receipt timed out
    pub check_receipt: Callback<()>,
    /// Back to `Idle` after a terminal state that sent no funds
    pub reset: Callback<()>,
}

impl UsePayment {
    pub fn status(&self) -> Option<PaymentStatus> {
        self.state.read().status()
    }
}

fn build_flow(toasts: Toasts) -> PurchaseFlow {
    let wallet = BrowserProvider::detect().map(|p| Rc::new(p) as Rc<dyn Eip1193Provider>);
    let settings = config();
    PurchaseFlow::new(
        wallet,
        Rc::new(ApiClient::new()),
        Rc::new(ToastNotifier { toasts }),
        settings.network.clone(),
        settings.receipt_polling,
    )
}

pub fn use_payment() -> UsePayment {
    let toasts = consume_toast();
    let mut state = use_signal(PurchaseState::default);
    let mut is_purchasing = use_signal(|| false);
    let mut last_intent = use_signal(|| None::<PurchaseIntent>);

    let purchase_collection = use_callback(move |(collection_id, artist_wallet_address): (String, String)| {
        if *is_purchasing.peek() {
            log::warn!("{}", PurchaseError::AlreadyPurchasing);
            return;
        }
        if !state.peek().can_start() {
            log::warn!("Purchase blocked in state {:?}", *state.peek());
            return;
        }

        is_purchasing.set(true);
        let buyer_id = auth_store::get_user_id();
        if let Some(buyer_id) = &buyer_id {
            last_intent.set(Some(PurchaseIntent {
                collection_id: collection_id.clone(),
                buyer_id: buyer_id.clone(),
                artist_wallet_address: artist_wallet_address.clone(),
            }));
        }

        let flow = build_flow(toasts.clone());
        spawn(async move {
            let result = flow
                .run(&collection_id, &artist_wallet_address, buyer_id.as_deref(), &mut |next| state.set(next))
                .await;
            if let Ok(receipt) = result {
                payment::mark_purchased(&receipt.collection_id);
            }
            is_purchasing.set(false);
        });
    });

    let retry_verification = use_callback(move |_: ()| {
        if *is_purchasing.peek() {
            return;
        }
        let (intent, tx_hash) = match (last_intent.peek().clone(), state.peek().tx_hash().map(str::to_string)) {
            (Some(intent), Some(tx_hash)) if state.peek().can_retry_completion() => (intent, tx_hash),
            _ => {
                log::warn!("Nothing to re-verify");
                return;
            }
        };

        is_purchasing.set(true);
        let flow = build_flow(toasts.clone());
        spawn(async move {
            let result = flow.retry_completion(&intent, &tx_hash, &mut |next| state.set(next)).await;
            if let Ok(receipt) = result {
                payment::mark_purchased(&receipt.collection_id);
            }
            is_purchasing.set(false);
        });
    });

    let check_receipt = use_callback(move |_: ()| {
        if *is_purchasing.peek() {
            return;
        }
        let (intent, tx_hash) = match (last_intent.peek().clone(), state.peek().tx_hash().map(str::to_string)) {
            (Some(intent), Some(tx_hash)) if state.peek().can_check_receipt() => (intent, tx_hash),
            _ => {
                log::warn!("No pending transaction to check");
                return;
            }
        };

        is_purchasing.set(true);
        let flow = build_flow(toasts.clone());
        spawn(async move {
            let result = flow.check_receipt(&intent, &tx_hash, &mut |next| state.set(next)).await;
            if let Ok(receipt) = result {
                payment::mark_purchased(&receipt.collection_id);
            }
            is_purchasing.set(false);
        });
    });

    // A broadcast transaction is never forgotten, or "Try again" would pay twice
    let reset = use_callback(move |_: ()| {
        if *is_purchasing.peek() || state.peek().is_resumable() {
            return;
        }
        state.set(PurchaseState::Idle);
    });

    UsePayment { state, is_purchasing, purchase_collection, retry_verification, check_receipt, reset }
}
