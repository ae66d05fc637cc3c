//! Collection purchase coordinator
//!
//! Drives one purchase from intent to backend confirmation:
//! wallet check, prepare, network check, sign + send, receipt, complete.
//! Steps run strictly in order; nothing is retried automatically. Once a
//! transaction is broadcast the flow never sends another one: a missing
//! receipt or a failed confirmation is resumed for the same hash.

use std::rc::Rc;

use super::errors::PurchaseError;
use super::state::{PurchaseReceipt, PurchaseState};
use crate::config::{NetworkConfig, ReceiptPolling};
use crate::services::collections::{CompletePurchaseRequest, PreparedPurchase, PurchaseApi, PurchaseIntent};
use crate::services::contract::{build_purchase_transaction, price_to_wei};
use crate::services::ethereum::{self, Eip1193Provider};
use crate::utils::time::sleep_ms;

/// Receives user-facing outcome messages (toasts in the app)
pub trait PurchaseNotifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

pub const PURCHASE_SUCCESS_MESSAGE: &str = "Collection purchased! Enjoy your new art.";

/// Everything one purchase attempt talks to
pub struct PurchaseFlow {
    wallet: Option<Rc<dyn Eip1193Provider>>,
    api: Rc<dyn PurchaseApi>,
    notifier: Rc<dyn PurchaseNotifier>,
    network: NetworkConfig,
    polling: ReceiptPolling,
}

impl PurchaseFlow {
    pub fn new(
        wallet: Option<Rc<dyn Eip1193Provider>>,
        api: Rc<dyn PurchaseApi>,
        notifier: Rc<dyn PurchaseNotifier>,
        network: NetworkConfig,
        polling: ReceiptPolling,
    ) -> Self {
        Self { wallet, api, notifier, network, polling }
    }

    /// Purchase `collection_id` for `buyer_id`, reporting every transition
    /// through `on_state`. Ends in `Purchased` or `Failed`.
    pub async fn run(
        &self,
        collection_id: &str,
        artist_wallet_address: &str,
        buyer_id: Option<&str>,
        on_state: &mut dyn FnMut(PurchaseState),
    ) -> Result<PurchaseReceipt, PurchaseError> {
        let result = self
            .execute(collection_id, artist_wallet_address, buyer_id, on_state)
            .await;
        self.finish(result, on_state)
    }

    /// Re-send only the backend confirmation for an already mined transaction
    pub async fn retry_completion(
        &self,
        intent: &PurchaseIntent,
        tx_hash: &str,
        on_state: &mut dyn FnMut(PurchaseState),
    ) -> Result<PurchaseReceipt, PurchaseError> {
        log::info!("Retrying confirmation of {} for {}", tx_hash, intent.collection_id);
        let result = self.complete(intent, tx_hash.to_string(), on_state).await;
        self.finish(result, on_state)
    }

    /// Poll again for a transaction that timed out waiting for its receipt,
    /// then confirm it with the backend
    pub async fn check_receipt(
        &self,
        intent: &PurchaseIntent,
        tx_hash: &str,
        on_state: &mut dyn FnMut(PurchaseState),
    ) -> Result<PurchaseReceipt, PurchaseError> {
        log::info!("Checking receipt of {} for {}", tx_hash, intent.collection_id);
        let result = self.resume_waiting(intent, tx_hash, on_state).await;
        self.finish(result, on_state)
    }

    async fn resume_waiting(
        &self,
        intent: &PurchaseIntent,
        tx_hash: &str,
        on_state: &mut dyn FnMut(PurchaseState),
    ) -> Result<PurchaseReceipt, PurchaseError> {
        on_state(PurchaseState::Waiting { tx_hash: Some(tx_hash.to_string()) });
        // Without a wallet the hash stays pending rather than becoming restartable
        let wallet = self
            .wallet
            .clone()
            .ok_or_else(|| PurchaseError::ReceiptTimeout { tx_hash: tx_hash.to_string() })?;
        self.wait_for_receipt(wallet.as_ref(), tx_hash).await?;
        self.complete(intent, tx_hash.to_string(), on_state).await
    }

    async fn execute(
        &self,
        collection_id: &str,
        artist_wallet_address: &str,
        buyer_id: Option<&str>,
        on_state: &mut dyn FnMut(PurchaseState),
    ) -> Result<PurchaseReceipt, PurchaseError> {
        let buyer_id = buyer_id.ok_or(PurchaseError::NotAuthenticated)?;
        let wallet = self.wallet.clone().ok_or(PurchaseError::WalletNotInstalled)?;

        let intent = PurchaseIntent {
            collection_id: collection_id.to_string(),
            buyer_id: buyer_id.to_string(),
            artist_wallet_address: artist_wallet_address.to_string(),
        };

        // Step 1: prepare
        on_state(PurchaseState::Processing);
        let prepared = self
            .api
            .prepare_collection_purchase(&intent)
            .await
            .map_err(PurchaseError::Prepare)?;
        log::info!(
            "Prepared purchase of {} at {} for {}",
            intent.collection_id,
            prepared.contract_address,
            prepared.parameters.price
        );

        // Step 2: network
        ethereum::ensure_network(wallet.as_ref(), &self.network)
            .await
            .map_err(PurchaseError::NetworkSwitch)?;

        // Step 3: sign and send
        on_state(PurchaseState::Waiting { tx_hash: None });
        let tx_hash = self.send_purchase(wallet.as_ref(), &intent, &prepared).await?;
        log::info!("Purchase transaction sent: {}", tx_hash);
        on_state(PurchaseState::Waiting { tx_hash: Some(tx_hash.clone()) });

        // Step 4: confirmation
        self.wait_for_receipt(wallet.as_ref(), &tx_hash).await?;

        // Steps 5 and 6
        self.complete(&intent, tx_hash, on_state).await
    }

    async fn send_purchase(
        &self,
        wallet: &dyn Eip1193Provider,
        intent: &PurchaseIntent,
        prepared: &PreparedPurchase,
    ) -> Result<String, PurchaseError> {
        // Surface a bad price on its own before building the call
        price_to_wei(&prepared.parameters.price).map_err(PurchaseError::InvalidPrice)?;

        let accounts = ethereum::request_accounts(wallet)
            .await
            .map_err(PurchaseError::from_signing)?;
        let from = accounts.into_iter().next().ok_or(PurchaseError::NoAccounts)?;

        let tx = build_purchase_transaction(
            prepared,
            &from,
            &intent.collection_id,
            &intent.buyer_id,
            &intent.artist_wallet_address,
        )
        .map_err(PurchaseError::ContractEncoding)?;

        ethereum::send_transaction(wallet, &tx)
            .await
            .map_err(PurchaseError::from_signing)
    }

    /// Bounded polling. RPC errors count as "not yet": the transaction is
    /// already out, so giving up early must still leave it resumable.
    async fn wait_for_receipt(&self, wallet: &dyn Eip1193Provider, tx_hash: &str) -> Result<(), PurchaseError> {
        for attempt in 0..self.polling.max_attempts {
            if attempt > 0 {
                sleep_ms(self.polling.interval_ms).await;
            }

            let receipt = match ethereum::transaction_receipt(wallet, tx_hash).await {
                Ok(receipt) => receipt,
                Err(e) => {
                    log::warn!("Receipt poll {} for {} failed: {}", attempt + 1, tx_hash, e);
                    continue;
                }
            };

            if let Some(receipt) = receipt {
                if receipt.succeeded() {
                    log::info!("Transaction {} confirmed", tx_hash);
                    return Ok(());
                }
                return Err(PurchaseError::TransactionReverted { tx_hash: tx_hash.to_string() });
            }
        }

        Err(PurchaseError::ReceiptTimeout { tx_hash: tx_hash.to_string() })
    }

    async fn complete(
        &self,
        intent: &PurchaseIntent,
        tx_hash: String,
        on_state: &mut dyn FnMut(PurchaseState),
    ) -> Result<PurchaseReceipt, PurchaseError> {
        on_state(PurchaseState::Verifying { tx_hash: tx_hash.clone() });

        let request = CompletePurchaseRequest {
            collection_id: intent.collection_id.clone(),
            buyer_id: intent.buyer_id.clone(),
            tx_hash: tx_hash.clone(),
        };

        let confirmation = self
            .api
            .complete_collection_purchase(&request)
            .await
            .map_err(|error| PurchaseError::Completion { tx_hash: tx_hash.clone(), error })?;

        if confirmation.success == Some(false) {
            let message = confirmation
                .message
                .unwrap_or_else(|| "Purchase was not recorded".to_string());
            return Err(PurchaseError::Completion {
                tx_hash,
                error: crate::services::api::ApiError::transport(message),
            });
        }

        Ok(PurchaseReceipt {
            collection_id: intent.collection_id.clone(),
            tx_hash,
        })
    }

    fn finish(
        &self,
        result: Result<PurchaseReceipt, PurchaseError>,
        on_state: &mut dyn FnMut(PurchaseState),
    ) -> Result<PurchaseReceipt, PurchaseError> {
        match &result {
            Ok(receipt) => {
                on_state(PurchaseState::Purchased(receipt.clone()));
                self.notifier.success(PURCHASE_SUCCESS_MESSAGE);
            }
            Err(e) => {
                if e.is_paid_but_unconfirmed() {
                    log::error!("Paid but unconfirmed purchase: {}", e);
                } else {
                    log::warn!("Purchase failed: {}", e);
                }
                let message = e.user_message();
                on_state(PurchaseState::Failed {
                    stage: e.stage(),
                    error: message.clone(),
                    tx_hash: e.tx_hash().map(str::to_string),
                    pending: e.is_pending_on_chain(),
                });
                self.notifier.error(&message);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::ApiError;
    use crate::services::collections::PurchaseConfirmation;
    use crate::services::ethereum::mock::MockProvider;
    use crate::services::ethereum::{ProviderError, UNRECOGNIZED_CHAIN, USER_REJECTED};
    use crate::stores::payment::PaymentStatus;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::cell::RefCell;

    const ARTIST: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    const CONTRACT: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";
    const BUYER_ACCOUNT: &str = "0x1111111111111111111111111111111111111111";
    const TX: &str = "0xfeedfacefeedfacefeedfacefeedfacefeedfacefeedfacefeedfacefeedface";

    struct MockApi {
        prepare: Result<PreparedPurchase, ApiError>,
        complete: RefCell<Vec<Result<PurchaseConfirmation, ApiError>>>,
        prepare_calls: RefCell<Vec<PurchaseIntent>>,
        complete_calls: RefCell<Vec<CompletePurchaseRequest>>,
    }

    impl MockApi {
        fn new(price: &str) -> Self {
            Self {
                prepare: Ok(prepared(price)),
                complete: RefCell::new(vec![Ok(confirmed())]),
                prepare_calls: RefCell::default(),
                complete_calls: RefCell::default(),
            }
        }

        fn failing_completion(self, times: usize) -> Self {
            let mut queue: Vec<_> = (0..times).map(|_| Err(ApiError::transport("offline"))).collect();
            queue.push(Ok(confirmed()));
            *self.complete.borrow_mut() = queue;
            self
        }
    }

    fn confirmed() -> PurchaseConfirmation {
        PurchaseConfirmation { success: Some(true), message: None, purchase_id: Some("p1".into()) }
    }

    fn prepared(price: &str) -> PreparedPurchase {
        serde_json::from_value(json!({
            "contractAddress": CONTRACT,
            "abi": [{
                "type": "function",
                "name": "purchaseCollection",
                "stateMutability": "payable",
                "inputs": [
                    { "name": "collectionId", "type": "string" },
                    { "name": "buyerId", "type": "string" },
                    { "name": "price", "type": "uint256" },
                    { "name": "artist", "type": "address" }
                ],
                "outputs": []
            }],
            "parameters": { "price": price }
        }))
        .unwrap()
    }

    #[async_trait(?Send)]
    impl PurchaseApi for MockApi {
        async fn prepare_collection_purchase(&self, intent: &PurchaseIntent) -> Result<PreparedPurchase, ApiError> {
            self.prepare_calls.borrow_mut().push(intent.clone());
            self.prepare.clone()
        }

        async fn complete_collection_purchase(
            &self,
            request: &CompletePurchaseRequest,
        ) -> Result<PurchaseConfirmation, ApiError> {
            self.complete_calls.borrow_mut().push(request.clone());
            let mut queue = self.complete.borrow_mut();
            if queue.len() > 1 {
                queue.remove(0)
            } else {
                queue[0].clone()
            }
        }
    }

    #[derive(Default)]
    struct MockNotifier {
        successes: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl PurchaseNotifier for MockNotifier {
        fn success(&self, message: &str) {
            self.successes.borrow_mut().push(message.to_string());
        }
        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    fn on_chain_wallet() -> MockProvider {
        MockProvider::new()
            .on("eth_chainId", Ok(json!("0x13882")))
            .on("eth_requestAccounts", Ok(json!([BUYER_ACCOUNT])))
            .on("eth_sendTransaction", Ok(json!(TX)))
            .on("eth_getTransactionReceipt", Ok(json!({ "transactionHash": TX, "status": "0x1" })))
    }

    struct Harness {
        wallet: Option<Rc<MockProvider>>,
        api: Rc<MockApi>,
        notifier: Rc<MockNotifier>,
        flow: PurchaseFlow,
    }

    fn harness(wallet: Option<MockProvider>, api: MockApi) -> Harness {
        let wallet = wallet.map(Rc::new);
        let api = Rc::new(api);
        let notifier = Rc::new(MockNotifier::default());
        let polling = ReceiptPolling { interval_ms: 0, max_attempts: 3 };
        let flow = PurchaseFlow::new(
            wallet.clone().map(|w| w as Rc<dyn Eip1193Provider>),
            api.clone(),
            notifier.clone(),
            NetworkConfig::default(),
            polling,
        );
        Harness { wallet, api, notifier, flow }
    }

    async fn run(h: &Harness) -> (Result<PurchaseReceipt, PurchaseError>, Vec<PurchaseState>) {
        let mut states = Vec::new();
        let result = h
            .flow
            .run("col_1", ARTIST, Some("user_9"), &mut |s| states.push(s))
            .await;
        (result, states)
    }

    #[tokio::test]
    async fn test_happy_path_transitions_and_single_completion() {
        let h = harness(Some(on_chain_wallet()), MockApi::new("0.015"));
        let (result, states) = run(&h).await;

        let receipt = result.unwrap();
        assert_eq!(receipt.tx_hash, TX);

        let statuses: Vec<_> = states.iter().filter_map(|s| s.status()).collect();
        assert_eq!(
            statuses,
            vec![
                PaymentStatus::Processing,
                PaymentStatus::Waiting,
                PaymentStatus::Waiting,
                PaymentStatus::Verifying,
                PaymentStatus::Purchased,
            ]
        );

        let completes = h.api.complete_calls.borrow();
        assert_eq!(completes.len(), 1);
        assert_eq!(completes[0].tx_hash, TX);
        assert_eq!(completes[0].collection_id, "col_1");
        assert_eq!(completes[0].buyer_id, "user_9");
        assert_eq!(h.notifier.successes.borrow().len(), 1);
        assert!(h.notifier.errors.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_transaction_carries_price_in_wei() {
        let h = harness(Some(on_chain_wallet()), MockApi::new("0.015"));
        run(&h).await.0.unwrap();

        let params = h.wallet.as_ref().unwrap().params_of("eth_sendTransaction").unwrap();
        assert_eq!(params[0]["value"], "0x354a6ba7a18000");
        assert_eq!(params[0]["from"], BUYER_ACCOUNT);
        assert_eq!(params[0]["to"], CONTRACT);
    }

    #[tokio::test]
    async fn test_network_switch_happens_before_signing() {
        let wallet = MockProvider::new()
            .on("eth_chainId", Ok(json!("0x1")))
            .on("wallet_switchEthereumChain", Err(ProviderError::new(UNRECOGNIZED_CHAIN, "unknown chain")))
            .on("wallet_addEthereumChain", Ok(Value::Null))
            .on("eth_requestAccounts", Ok(json!([BUYER_ACCOUNT])))
            .on("eth_sendTransaction", Ok(json!(TX)))
            .on("eth_getTransactionReceipt", Ok(json!({ "transactionHash": TX, "status": "0x1" })));
        let h = harness(Some(wallet), MockApi::new("1"));
        run(&h).await.0.unwrap();

        let methods = h.wallet.as_ref().unwrap().methods();
        let pos = |m: &str| methods.iter().position(|x| x == m).unwrap();
        assert!(pos("wallet_switchEthereumChain") < pos("eth_sendTransaction"));
        assert!(pos("wallet_addEthereumChain") < pos("eth_sendTransaction"));

        let add = h.wallet.as_ref().unwrap().params_of("wallet_addEthereumChain").unwrap();
        assert_eq!(add[0]["chainId"], NetworkConfig::default().chain_id_hex());
    }

    #[tokio::test]
    async fn test_user_rejects_signing() {
        let wallet = MockProvider::new()
            .on("eth_chainId", Ok(json!("0x13882")))
            .on("eth_requestAccounts", Ok(json!([BUYER_ACCOUNT])))
            .on("eth_sendTransaction", Err(ProviderError::new(USER_REJECTED, "User denied")));
        let h = harness(Some(wallet), MockApi::new("0.2"));
        let (result, states) = run(&h).await;

        assert_eq!(result.unwrap_err(), PurchaseError::SigningRejected);
        let last = states.last().unwrap();
        assert!(last.is_failed());
        assert_eq!(last.status(), Some(PaymentStatus::Waiting));
        assert!(states.iter().all(|s| s.status() <= Some(PaymentStatus::Waiting)));
        assert!(h.api.complete_calls.borrow().is_empty());
        assert_eq!(h.notifier.errors.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_no_wallet_fails_before_backend() {
        let h = harness(None, MockApi::new("0.2"));
        let (result, states) = run(&h).await;

        assert_eq!(result.unwrap_err(), PurchaseError::WalletNotInstalled);
        assert!(h.api.prepare_calls.borrow().is_empty());
        assert!(h.api.complete_calls.borrow().is_empty());
        assert_eq!(states.len(), 1);
        assert!(states[0].is_failed());
        assert_eq!(h.notifier.errors.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_unauthenticated_fails_before_backend() {
        let h = harness(Some(on_chain_wallet()), MockApi::new("0.2"));
        let mut states = Vec::new();
        let result = h.flow.run("col_1", ARTIST, None, &mut |s| states.push(s)).await;

        assert_eq!(result.unwrap_err(), PurchaseError::NotAuthenticated);
        assert!(h.api.prepare_calls.borrow().is_empty());
        assert!(h.wallet.as_ref().unwrap().methods().is_empty());
    }

    #[tokio::test]
    async fn test_reverted_transaction_is_not_completed() {
        let wallet = MockProvider::new()
            .on("eth_chainId", Ok(json!("0x13882")))
            .on("eth_requestAccounts", Ok(json!([BUYER_ACCOUNT])))
            .on("eth_sendTransaction", Ok(json!(TX)))
            .on("eth_getTransactionReceipt", Ok(Value::Null))
            .on("eth_getTransactionReceipt", Ok(json!({ "transactionHash": TX, "status": "0x0" })));
        let h = harness(Some(wallet), MockApi::new("0.2"));
        let (result, states) = run(&h).await;

        assert!(matches!(result, Err(PurchaseError::TransactionReverted { .. })));
        assert_eq!(states.last().unwrap().tx_hash(), Some(TX));
        assert!(h.api.complete_calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_receipt_timeout() {
        let wallet = MockProvider::new()
            .on("eth_chainId", Ok(json!("0x13882")))
            .on("eth_requestAccounts", Ok(json!([BUYER_ACCOUNT])))
            .on("eth_sendTransaction", Ok(json!(TX)))
            .on("eth_getTransactionReceipt", Ok(Value::Null));
        let h = harness(Some(wallet), MockApi::new("0.2"));
        let (result, _) = run(&h).await;

        assert!(matches!(result, Err(PurchaseError::ReceiptTimeout { .. })));
        let polls = h
            .wallet
            .as_ref()
            .unwrap()
            .methods()
            .iter()
            .filter(|m| *m == "eth_getTransactionReceipt")
            .count();
        assert_eq!(polls, 3);
    }

    #[tokio::test]
    async fn test_receipt_timeout_resumes_same_transaction() {
        let wallet = MockProvider::new()
            .on("eth_chainId", Ok(json!("0x13882")))
            .on("eth_requestAccounts", Ok(json!([BUYER_ACCOUNT])))
            .on("eth_sendTransaction", Ok(json!(TX)))
            .on("eth_getTransactionReceipt", Ok(Value::Null))
            .on("eth_getTransactionReceipt", Ok(Value::Null))
            .on("eth_getTransactionReceipt", Ok(Value::Null))
            .on("eth_getTransactionReceipt", Ok(json!({ "transactionHash": TX, "status": "0x1" })));
        let h = harness(Some(wallet), MockApi::new("0.2"));
        let (result, states) = run(&h).await;

        assert!(matches!(result, Err(PurchaseError::ReceiptTimeout { .. })));
        let failed = states.last().unwrap().clone();
        assert!(failed.can_check_receipt());
        assert!(!failed.can_start());
        assert!(h.api.complete_calls.borrow().is_empty());

        let intent = PurchaseIntent {
            collection_id: "col_1".into(),
            buyer_id: "user_9".into(),
            artist_wallet_address: ARTIST.into(),
        };
        let mut resumed = Vec::new();
        let receipt = h
            .flow
            .check_receipt(&intent, failed.tx_hash().unwrap(), &mut |s| resumed.push(s))
            .await
            .unwrap();

        assert_eq!(receipt.tx_hash, TX);
        assert!(resumed.last().unwrap().is_purchased());
        let methods = h.wallet.as_ref().unwrap().methods();
        assert_eq!(methods.iter().filter(|m| *m == "eth_sendTransaction").count(), 1);
        assert_eq!(h.api.complete_calls.borrow().len(), 1);
        assert_eq!(h.api.complete_calls.borrow()[0].tx_hash, TX);
    }

    #[tokio::test]
    async fn test_receipt_rpc_error_keeps_polling() {
        let wallet = MockProvider::new()
            .on("eth_chainId", Ok(json!("0x13882")))
            .on("eth_requestAccounts", Ok(json!([BUYER_ACCOUNT])))
            .on("eth_sendTransaction", Ok(json!(TX)))
            .on("eth_getTransactionReceipt", Err(ProviderError::internal("rate limited")))
            .on("eth_getTransactionReceipt", Ok(json!({ "transactionHash": TX, "status": "0x1" })));
        let h = harness(Some(wallet), MockApi::new("0.2"));
        let (result, _) = run(&h).await;

        assert_eq!(result.unwrap().tx_hash, TX);
    }

    #[tokio::test]
    async fn test_completion_failure_then_manual_retry() {
        let h = harness(Some(on_chain_wallet()), MockApi::new("0.2").failing_completion(1));
        let (result, states) = run(&h).await;

        let err = result.unwrap_err();
        assert!(err.is_paid_but_unconfirmed());
        let failed = states.last().unwrap().clone();
        assert!(failed.can_retry_completion());

        let intent = PurchaseIntent {
            collection_id: "col_1".into(),
            buyer_id: "user_9".into(),
            artist_wallet_address: ARTIST.into(),
        };
        let mut retry_states = Vec::new();
        let receipt = h
            .flow
            .retry_completion(&intent, failed.tx_hash().unwrap(), &mut |s| retry_states.push(s))
            .await
            .unwrap();

        assert_eq!(receipt.tx_hash, TX);
        assert_eq!(h.api.complete_calls.borrow().len(), 2);
        // Retrying never touches the wallet again
        let sends = h
            .wallet
            .as_ref()
            .unwrap()
            .methods()
            .iter()
            .filter(|m| *m == "eth_sendTransaction")
            .count();
        assert_eq!(sends, 1);
        assert!(retry_states.last().unwrap().is_purchased());
    }

    #[tokio::test]
    async fn test_backend_success_false_is_failure() {
        let api = MockApi::new("0.2");
        *api.complete.borrow_mut() = vec![Ok(PurchaseConfirmation {
            success: Some(false),
            message: Some("Duplicate purchase".into()),
            purchase_id: None,
        })];
        let h = harness(Some(on_chain_wallet()), api);
        let (result, _) = run(&h).await;

        assert!(matches!(result, Err(PurchaseError::Completion { .. })));
    }

    #[tokio::test]
    async fn test_invalid_price_stops_before_wallet_send() {
        let h = harness(Some(on_chain_wallet()), MockApi::new("free"));
        let (result, _) = run(&h).await;

        assert!(matches!(result, Err(PurchaseError::InvalidPrice(_))));
        assert!(!h.wallet.as_ref().unwrap().methods().contains(&"eth_sendTransaction".to_string()));
    }
}
