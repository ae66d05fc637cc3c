//! Purchase contract call encoding
//!
//! The backend hands us the contract ABI as JSON. The purchase method's
//! arguments are coerced to whatever input types that ABI declares, so the
//! same code works whether ids are `string` or `uint256` on chain.

use alloy_dyn_abi::{DynSolType, DynSolValue, JsonAbiExt, Specifier};
use alloy_json_abi::{Function, JsonAbi};
use alloy_primitives::utils::parse_ether;
use alloy_primitives::{Address, U256};
use std::str::FromStr;

use crate::services::collections::PreparedPurchase;
use crate::services::ethereum::TransactionRequest;

/// Contract method that grants collection access
pub const PURCHASE_METHOD: &str = "purchaseCollection";

/// Convert a decimal native-currency amount ("0.015") to wei.
///
/// Exact decimal parsing; more than 18 fractional digits is an error rather
/// than a silent truncation.
pub fn price_to_wei(price: &str) -> Result<U256, String> {
    let trimmed = price.trim();
    if trimmed.is_empty() {
        return Err("Price is empty".to_string());
    }
    if trimmed.starts_with('-') {
        return Err(format!("Invalid price: {}", price));
    }
    parse_ether(trimmed).map_err(|e| format!("Invalid price {}: {}", price, e))
}

/// Validate and normalise a 0x-prefixed EVM address
pub fn parse_address(address: &str) -> Result<Address, String> {
    let trimmed = address.trim();
    if !trimmed.starts_with("0x") {
        return Err(format!("Invalid wallet address: {}", address));
    }
    Address::from_str(trimmed).map_err(|_| format!("Invalid wallet address: {}", address))
}

/// Arguments to the purchase method, in ABI order
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseCall<'a> {
    pub collection_id: &'a str,
    pub buyer_id: &'a str,
    pub price_wei: U256,
    pub artist_wallet_address: &'a str,
}

fn find_purchase_function(abi: &JsonAbi) -> Result<&Function, String> {
    abi.function(PURCHASE_METHOD)
        .and_then(|overloads| overloads.iter().find(|f| f.inputs.len() == 4))
        .ok_or_else(|| format!("Contract ABI has no {}(4 args) method", PURCHASE_METHOD))
}

fn coerce_arg(ty: &DynSolType, raw: &str, name: &str) -> Result<DynSolValue, String> {
    ty.coerce_str(raw)
        .map_err(|e| format!("Cannot pass {} as {}: {}", name, ty.sol_type_name(), e))
}

/// ABI-encode the purchase call (selector + arguments)
pub fn encode_purchase_call(abi: &JsonAbi, call: &PurchaseCall<'_>) -> Result<Vec<u8>, String> {
    let function = find_purchase_function(abi)?;

    let types = function
        .inputs
        .iter()
        .map(|param| param.resolve().map_err(|e| format!("Unsupported ABI type {}: {}", param.ty, e)))
        .collect::<Result<Vec<DynSolType>, String>>()?;

    let price = call.price_wei.to_string();
    let raw_args = [
        (call.collection_id, "collection id"),
        (call.buyer_id, "buyer id"),
        (price.as_str(), "price"),
        (call.artist_wallet_address, "artist wallet"),
    ];

    let values = types
        .iter()
        .zip(raw_args.iter())
        .map(|(ty, (raw, name))| coerce_arg(ty, raw, name))
        .collect::<Result<Vec<DynSolValue>, String>>()?;

    function
        .abi_encode_input(&values)
        .map_err(|e| format!("Failed to encode {}: {}", PURCHASE_METHOD, e))
}

/// Build the `eth_sendTransaction` payload for a prepared purchase
pub fn build_purchase_transaction(
    prepared: &PreparedPurchase,
    from: &str,
    collection_id: &str,
    buyer_id: &str,
    artist_wallet_address: &str,
) -> Result<TransactionRequest, String> {
    let abi: JsonAbi = serde_json::from_value(prepared.abi.clone())
        .map_err(|e| format!("Invalid contract ABI: {}", e))?;
    let contract = parse_address(&prepared.contract_address)?;
    let price_wei = price_to_wei(&prepared.parameters.price)?;

    let data = encode_purchase_call(
        &abi,
        &PurchaseCall {
            collection_id,
            buyer_id,
            price_wei,
            artist_wallet_address,
        },
    )?;

    Ok(TransactionRequest {
        from: from.to_string(),
        to: contract.to_checksum(None),
        data: format!("0x{}", hex::encode(data)),
        value: format!("{:#x}", price_wei),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::collections::PurchaseParameters;
    use serde_json::json;

    const ARTIST: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    const CONTRACT: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

    fn purchase_abi(id_type: &str) -> serde_json::Value {
        json!([{
            "type": "function",
            "name": "purchaseCollection",
            "stateMutability": "payable",
            "inputs": [
                { "name": "collectionId", "type": id_type },
                { "name": "buyerId", "type": id_type },
                { "name": "price", "type": "uint256" },
                { "name": "artist", "type": "address" }
            ],
            "outputs": []
        }])
    }

    #[test]
    fn test_price_to_wei_exact() {
        assert_eq!(price_to_wei("0.015").unwrap(), U256::from(15_000_000_000_000_000u64));
        assert_eq!(price_to_wei("1").unwrap(), U256::from(1_000_000_000_000_000_000u64));
        assert_eq!(price_to_wei("0.25").unwrap(), U256::from(250_000_000_000_000_000u64));
        assert_eq!(price_to_wei("12.345678").unwrap(), U256::from(12_345_678_000_000_000_000u128));
        assert_eq!(price_to_wei(" 0.000001 ").unwrap(), U256::from(1_000_000_000_000u64));
    }

    #[test]
    fn test_price_to_wei_rejects_garbage() {
        assert!(price_to_wei("").is_err());
        assert!(price_to_wei("abc").is_err());
        assert!(price_to_wei("-1").is_err());
    }

    #[test]
    fn test_parse_address() {
        assert!(parse_address(ARTIST).is_ok());
        assert!(parse_address("0x1234").is_err());
        assert!(parse_address("not an address").is_err());
        // Bare hex is not accepted from users or the backend
        assert!(parse_address(&ARTIST[2..]).is_err());
    }

    #[test]
    fn test_encode_with_string_ids() {
        let abi: JsonAbi = serde_json::from_value(purchase_abi("string")).unwrap();
        let call = PurchaseCall {
            collection_id: "col_1",
            buyer_id: "user_9",
            price_wei: U256::from(15u64),
            artist_wallet_address: ARTIST,
        };
        let data = encode_purchase_call(&abi, &call).unwrap();

        let function = &abi.function(PURCHASE_METHOD).unwrap()[0];
        assert_eq!(&data[..4], function.selector().as_slice());

        let decoded = function.abi_decode_input(&data[4..]).unwrap();
        assert_eq!(decoded[0], DynSolValue::String("col_1".into()));
        assert_eq!(decoded[1], DynSolValue::String("user_9".into()));
        assert_eq!(decoded[2], DynSolValue::Uint(U256::from(15u64), 256));
        assert_eq!(decoded[3], DynSolValue::Address(parse_address(ARTIST).unwrap()));
    }

    #[test]
    fn test_encode_rejects_non_numeric_id_for_uint_abi() {
        let abi: JsonAbi = serde_json::from_value(purchase_abi("uint256")).unwrap();
        let call = PurchaseCall {
            collection_id: "col_1",
            buyer_id: "7",
            price_wei: U256::from(1u64),
            artist_wallet_address: ARTIST,
        };
        assert!(encode_purchase_call(&abi, &call).is_err());
    }

    #[test]
    fn test_missing_method() {
        let abi: JsonAbi = serde_json::from_value(json!([])).unwrap();
        let call = PurchaseCall {
            collection_id: "1",
            buyer_id: "2",
            price_wei: U256::ZERO,
            artist_wallet_address: ARTIST,
        };
        assert!(encode_purchase_call(&abi, &call).unwrap_err().contains("purchaseCollection"));
    }

    #[test]
    fn test_build_transaction_attaches_price_as_value() {
        let prepared = PreparedPurchase {
            contract_address: CONTRACT.to_string(),
            abi: purchase_abi("string"),
            parameters: PurchaseParameters {
                price: "0.015".to_string(),
                extra: Default::default(),
            },
        };
        let tx = build_purchase_transaction(&prepared, "0xbuyer", "col_1", "user_9", ARTIST).unwrap();

        assert_eq!(tx.from, "0xbuyer");
        assert_eq!(tx.to, CONTRACT);
        assert_eq!(tx.value, "0x354a6ba7a18000");
        assert!(tx.data.starts_with("0x"));
    }
}
