//! # Payment Request Types
//!
//! The native payment request constructed from the host application's
//! argument bag, one per `requestPayment` call. Nothing here is persisted.

use crate::error::{BridgeError, BridgeResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Card networks accepted by the payment sheet.
///
/// The set is fixed; the host application cannot extend it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardNetwork {
    Visa,
    MasterCard,
}

impl CardNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "visa",
            CardNetwork::MasterCard => "mastercard",
        }
    }
}

impl std::fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Merchant capability advertised to the payment network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MerchantCapability {
    /// 3-D Secure authentication
    ThreeDSecure,
}

/// A labeled monetary amount shown in the authorization sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryItem {
    /// Display label; empty when the input item carried no `name`
    pub label: String,

    /// Decimal amount parsed from the input `price` string
    pub amount: Decimal,
}

/// A native payment request, constructed fresh for every `requestPayment`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Platform-registered merchant identifier
    pub merchant_identifier: String,

    /// ISO 4217 currency code
    pub currency_code: String,

    /// ISO 3166 country code
    pub country_code: String,

    /// Summary items, in input order
    pub summary_items: Vec<SummaryItem>,

    /// Fixed to 3-D Secure
    pub merchant_capability: MerchantCapability,

    /// Fixed to {Visa, MasterCard}
    pub supported_networks: Vec<CardNetwork>,
}

impl PaymentRequest {
    /// The fixed set of card networks every request advertises
    pub const SUPPORTED_NETWORKS: [CardNetwork; 2] = [CardNetwork::Visa, CardNetwork::MasterCard];

    /// Validate and convert the host application's argument bag.
    ///
    /// Required keys: `merchantIdentifier`, `currencyCode`, `countryCode`
    /// (non-empty strings) and `items` (array of maps). Each item needs a
    /// `price` that parses as a decimal; `name` is optional and defaults to
    /// the empty string.
    pub fn from_arguments(arguments: &Value) -> BridgeResult<Self> {
        let params = arguments.as_object().ok_or_else(|| {
            BridgeError::InvalidArguments("arguments must be a string-keyed map".to_string())
        })?;

        let merchant_identifier = require_string(params, "merchantIdentifier")?;
        let currency_code = require_string(params, "currencyCode")?;
        let country_code = require_string(params, "countryCode")?;

        let items = params
            .get("items")
            .ok_or_else(|| BridgeError::MissingField {
                field: "items".to_string(),
            })?
            .as_array()
            .ok_or_else(|| {
                BridgeError::InvalidArguments("items must be an array".to_string())
            })?;

        let mut summary_items = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            summary_items.push(parse_summary_item(index, item)?);
        }

        Ok(Self {
            merchant_identifier,
            currency_code,
            country_code,
            summary_items,
            merchant_capability: MerchantCapability::ThreeDSecure,
            supported_networks: Self::SUPPORTED_NETWORKS.to_vec(),
        })
    }

    /// Sum of all summary item amounts
    pub fn total(&self) -> Decimal {
        self.summary_items.iter().map(|item| item.amount).sum()
    }

    /// Number of summary items
    pub fn item_count(&self) -> usize {
        self.summary_items.len()
    }
}

fn parse_summary_item(index: usize, item: &Value) -> BridgeResult<SummaryItem> {
    let entry = item.as_object().ok_or_else(|| {
        BridgeError::InvalidArguments(format!("items[{index}] must be a string-keyed map"))
    })?;

    let label = entry
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let price = entry
        .get("price")
        .and_then(Value::as_str)
        .ok_or_else(|| BridgeError::MissingField {
            field: format!("items[{index}].price"),
        })?;

    let amount: Decimal = price.parse().map_err(|_| BridgeError::InvalidPrice {
        index,
        value: price.to_string(),
    })?;

    Ok(SummaryItem { label, amount })
}

fn require_string(params: &Map<String, Value>, key: &str) -> BridgeResult<String> {
    let value = params.get(key).ok_or_else(|| BridgeError::MissingField {
        field: key.to_string(),
    })?;

    let text = value.as_str().ok_or_else(|| {
        BridgeError::InvalidArguments(format!("{key} must be a string"))
    })?;

    if text.is_empty() {
        return Err(BridgeError::InvalidArguments(format!(
            "{key} must be a non-empty string"
        )));
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_arguments() -> Value {
        json!({
            "merchantIdentifier": "merchant.test",
            "currencyCode": "USD",
            "countryCode": "US",
            "items": [
                { "name": "Coffee", "price": "3.50" },
                { "name": "Bagel", "price": "2.25" }
            ]
        })
    }

    #[test]
    fn test_from_valid_arguments() {
        let request = PaymentRequest::from_arguments(&valid_arguments()).unwrap();

        assert_eq!(request.merchant_identifier, "merchant.test");
        assert_eq!(request.currency_code, "USD");
        assert_eq!(request.country_code, "US");
        assert_eq!(request.item_count(), 2);
        assert_eq!(request.summary_items[0].label, "Coffee");
        assert_eq!(request.summary_items[0].amount, "3.50".parse().unwrap());
        assert_eq!(request.total(), "5.75".parse().unwrap());
        assert_eq!(request.merchant_capability, MerchantCapability::ThreeDSecure);
        assert_eq!(
            request.supported_networks,
            vec![CardNetwork::Visa, CardNetwork::MasterCard]
        );
    }

    #[test]
    fn test_item_order_preserved() {
        let args = json!({
            "merchantIdentifier": "merchant.test",
            "currencyCode": "USD",
            "countryCode": "US",
            "items": [
                { "name": "c", "price": "3" },
                { "name": "a", "price": "1" },
                { "name": "b", "price": "2" }
            ]
        });
        let request = PaymentRequest::from_arguments(&args).unwrap();
        let labels: Vec<_> = request.summary_items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_missing_items_field() {
        let args = json!({
            "merchantIdentifier": "merchant.test",
            "currencyCode": "USD",
            "countryCode": "US"
        });

        let err = PaymentRequest::from_arguments(&args).unwrap_err();
        assert!(matches!(err, BridgeError::MissingField { ref field } if field == "items"));
    }

    #[test]
    fn test_missing_merchant_identifier() {
        let args = json!({
            "currencyCode": "USD",
            "countryCode": "US",
            "items": []
        });

        let err = PaymentRequest::from_arguments(&args).unwrap_err();
        assert!(
            matches!(err, BridgeError::MissingField { ref field } if field == "merchantIdentifier")
        );
    }

    #[test]
    fn test_empty_merchant_identifier_rejected() {
        let args = json!({
            "merchantIdentifier": "",
            "currencyCode": "USD",
            "countryCode": "US",
            "items": []
        });

        assert!(matches!(
            PaymentRequest::from_arguments(&args),
            Err(BridgeError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_unparsable_price() {
        let args = json!({
            "merchantIdentifier": "merchant.test",
            "currencyCode": "USD",
            "countryCode": "US",
            "items": [{ "name": "Coffee", "price": "three fifty" }]
        });

        let err = PaymentRequest::from_arguments(&args).unwrap_err();
        assert!(
            matches!(err, BridgeError::InvalidPrice { index: 0, ref value } if value == "three fifty")
        );
    }

    #[test]
    fn test_item_name_defaults_to_empty() {
        let args = json!({
            "merchantIdentifier": "merchant.test",
            "currencyCode": "USD",
            "countryCode": "US",
            "items": [{ "price": "1.00" }]
        });

        let request = PaymentRequest::from_arguments(&args).unwrap();
        assert_eq!(request.summary_items[0].label, "");
    }

    #[test]
    fn test_non_map_arguments() {
        let err = PaymentRequest::from_arguments(&json!("not a map")).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidArguments(_)));
    }

    #[test]
    fn test_item_missing_price() {
        let args = json!({
            "merchantIdentifier": "merchant.test",
            "currencyCode": "USD",
            "countryCode": "US",
            "items": [{ "name": "Coffee" }]
        });

        let err = PaymentRequest::from_arguments(&args).unwrap_err();
        assert!(
            matches!(err, BridgeError::MissingField { ref field } if field == "items[0].price")
        );
    }
}
