//! Collection purchases: state machine, errors and the coordinator

mod errors;
mod flow;
mod state;

use dioxus::prelude::*;
use std::collections::HashSet;

pub use errors::{PurchaseError, GENERIC_PURCHASE_ERROR};
pub use flow::{PurchaseFlow, PurchaseNotifier, PURCHASE_SUCCESS_MESSAGE};
pub use state::{PaymentStatus, PurchaseReceipt, PurchaseState};

/// Collections bought in this session, so cards show ownership without a refetch
pub static PURCHASED_COLLECTION_IDS: GlobalSignal<HashSet<String>> = Signal::global(HashSet::new);

pub fn mark_purchased(collection_id: &str) {
    PURCHASED_COLLECTION_IDS.write().insert(collection_id.to_string());
}

pub fn is_purchased_in_session(collection_id: &str) -> bool {
    PURCHASED_COLLECTION_IDS.read().contains(collection_id)
}

pub fn clear_purchases() {
    PURCHASED_COLLECTION_IDS.write().clear();
}
