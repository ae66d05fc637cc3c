//! Art collection endpoints, including the two purchase calls

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::services::api::{page_query, ApiClient, ApiError, Page};
use crate::services::artworks::Artwork;

/// A priced bundle of artworks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Decimal string in native currency units
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    pub artist_id: String,
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default)]
    pub artist_wallet_address: Option<String>,
    #[serde(default)]
    pub artwork_count: u32,
    #[serde(default)]
    pub is_purchased: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Collection {
    /// Free collections have no price or a zero price
    pub fn is_paid(&self) -> bool {
        self.price
            .as_deref()
            .and_then(|p| p.trim().parse::<f64>().ok())
            .map(|p| p > 0.0)
            .unwrap_or(false)
    }
}

/// Entry in "my purchased collections"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedCollection {
    pub id: String,
    pub collection: Collection,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub purchased_at: Option<String>,
}

/// What the buyer intends to purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseIntent {
    pub collection_id: String,
    pub buyer_id: String,
    pub artist_wallet_address: String,
}

/// Contract details for one purchase attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedPurchase {
    pub contract_address: String,
    /// JSON ABI array of the purchase contract
    pub abi: serde_json::Value,
    pub parameters: PurchaseParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseParameters {
    /// Decimal string, e.g. "0.015"
    pub price: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletePurchaseRequest {
    pub collection_id: String,
    pub buyer_id: String,
    pub tx_hash: String,
}

/// Backend acknowledgement of a completed purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseConfirmation {
    /// Some backends answer 200 with `success: false`
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub purchase_id: Option<String>,
}

/// Create/update payload for a collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub artwork_ids: Vec<String>,
}

/// Backend side of the purchase flow
#[async_trait(?Send)]
pub trait PurchaseApi {
    async fn prepare_collection_purchase(&self, intent: &PurchaseIntent) -> Result<PreparedPurchase, ApiError>;

    async fn complete_collection_purchase(
        &self,
        request: &CompletePurchaseRequest,
    ) -> Result<PurchaseConfirmation, ApiError>;
}

#[async_trait(?Send)]
impl PurchaseApi for ApiClient {
    async fn prepare_collection_purchase(&self, intent: &PurchaseIntent) -> Result<PreparedPurchase, ApiError> {
        log::info!("Preparing purchase of collection {}", intent.collection_id);
        self.post("/art-collections/prepare-collection-purchase", intent).await
    }

    async fn complete_collection_purchase(
        &self,
        request: &CompletePurchaseRequest,
    ) -> Result<PurchaseConfirmation, ApiError> {
        log::info!("Completing purchase of {} with tx {}", request.collection_id, request.tx_hash);
        self.post("/art-collections/complete-collection-purchase", request).await
    }
}

pub async fn list_collections(page: u32, limit: u32, tag: Option<&str>) -> Result<Page<Collection>, ApiError> {
    let query = page_query(page, limit, &[("tag", tag.unwrap_or(""))]);
    ApiClient::new().get(&format!("/art-collections{}", query)).await
}

pub async fn get_collection(id: &str) -> Result<Collection, ApiError> {
    ApiClient::new()
        .get(&format!("/art-collections/{}", urlencoding::encode(id)))
        .await
}

pub async fn collection_artworks(id: &str, page: u32, limit: u32) -> Result<Page<Artwork>, ApiError> {
    ApiClient::new()
        .get(&format!(
            "/art-collections/{}/art{}",
            urlencoding::encode(id),
            page_query(page, limit, &[])
        ))
        .await
}

/// Collections owned by the signed-in artist
pub async fn my_collections() -> Result<Vec<Collection>, ApiError> {
    ApiClient::new().get("/art-collections/my").await
}

pub async fn purchased_collections(page: u32, limit: u32) -> Result<Page<PurchasedCollection>, ApiError> {
    ApiClient::new()
        .get(&format!("/art-collections/my/purchased-collections{}", page_query(page, limit, &[])))
        .await
}

pub async fn create_collection(input: &CollectionInput) -> Result<Collection, ApiError> {
    ApiClient::new().post("/art-collections", input).await
}

pub async fn update_collection(id: &str, input: &CollectionInput) -> Result<Collection, ApiError> {
    ApiClient::new()
        .patch(&format!("/art-collections/{}", urlencoding::encode(id)), input)
        .await
}

pub async fn delete_collection(id: &str) -> Result<(), ApiError> {
    ApiClient::new()
        .delete(&format!("/art-collections/{}", urlencoding::encode(id)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_intent_wire_format() {
        let intent = PurchaseIntent {
            collection_id: "c1".into(),
            buyer_id: "u1".into(),
            artist_wallet_address: "0xabc".into(),
        };
        assert_eq!(
            serde_json::to_value(&intent).unwrap(),
            json!({ "collectionId": "c1", "buyerId": "u1", "artistWalletAddress": "0xabc" })
        );
    }

    #[test]
    fn test_prepared_purchase_keeps_extra_parameters() {
        let prepared: PreparedPurchase = serde_json::from_value(json!({
            "contractAddress": "0xdead",
            "abi": [],
            "parameters": { "price": "0.5", "currency": "POL" }
        }))
        .unwrap();

        assert_eq!(prepared.parameters.price, "0.5");
        assert_eq!(prepared.parameters.extra.get("currency"), Some(&json!("POL")));
    }

    #[test]
    fn test_is_paid() {
        let mut collection: Collection = serde_json::from_value(json!({
            "id": "c1", "name": "Dusk", "artistId": "a1"
        }))
        .unwrap();
        assert!(!collection.is_paid());

        collection.price = Some("0".into());
        assert!(!collection.is_paid());

        collection.price = Some("0.01".into());
        assert!(collection.is_paid());
    }
}
