use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decode::{decode_record, FromPayload, Payload};
use crate::{CoreError, FormatError, UtcDateTime};

/// Exchange order.
///
/// Decoded from snake_case payloads that encode ids as strings and dates in
/// the `YYYY-MM-DD HH:MM:SS` layout; serialized as camelCase JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: Uuid,
    pub customer_id: i64,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<UtcDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_to_customer_at: Option<UtcDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_to_carrier_at: Option<UtcDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_estimated_at: Option<UtcDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_at: Option<UtcDateTime>,
}

impl Order {
    /// Decode an exchange payload; see [`FromPayload`] for the coercion rules.
    pub fn from_exchange_json(data: &[u8]) -> Result<Self, CoreError> {
        decode_record(data)
    }
}

impl FromPayload for Order {
    fn from_payload(payload: &Payload) -> Result<Self, FormatError> {
        Ok(Self {
            order_id: payload.uuid("order_id")?,
            customer_id: payload.i64("customer_id")?,
            status: payload.string("order_status")?,
            approved_at: payload.timestamp("order_approved_at")?,
            delivered_to_customer_at: payload.timestamp("order_delivered_customer_date")?,
            delivered_to_carrier_at: payload.timestamp("order_delivered_carrier_date")?,
            delivery_estimated_at: payload.timestamp("order_estimated_delivery_date")?,
            purchase_at: payload.timestamp("order_purchase_timestamp")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &[u8] = br#"{
        "order_id": "b68d69564a79dea4776afa33d1d2fcab",
        "customer_id": "41",
        "order_status": "shipped",
        "order_approved_at": "2018-02-28 10:40:35",
        "order_delivered_customer_date": "2018-03-05 16:10:13",
        "order_delivered_carrier_date": "2018-03-05 16:10:13",
        "order_estimated_delivery_date": "2018-03-23 00:00:00",
        "order_purchase_timestamp": "2018-02-28 08:57:03"
    }"#;

    #[test]
    fn decodes_string_encoded_fields() {
        let order = Order::from_exchange_json(VALID).expect("must decode");
        assert_eq!(order.order_id.to_string(), "b68d6956-4a79-dea4-776a-fa33d1d2fcab");
        assert_eq!(order.customer_id, 41);
        assert_eq!(order.status, "shipped");
        assert_eq!(
            order.approved_at.map(UtcDateTime::format_exchange).as_deref(),
            Some("2018-02-28 10:40:35")
        );
        assert!(order.purchase_at.is_some());
    }

    #[test]
    fn invalid_customer_id_aborts_decode() {
        let data = String::from_utf8_lossy(VALID).replace("\"41\"", "\"invalid\"");
        let err = Order::from_exchange_json(data.as_bytes()).expect_err("must fail");
        match err {
            CoreError::Format(FormatError::InvalidInteger { field, value }) => {
                assert_eq!(field, "customer_id");
                assert_eq!(value, "invalid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_dates_are_absent() {
        let order = Order::from_exchange_json(
            br#"{"order_id": "550e8400-e29b-41d4-a716-446655440000", "customer_id": "1",
                 "order_status": "created", "order_approved_at": ""}"#,
        )
        .expect("must decode");
        assert_eq!(order.approved_at, None);
        assert_eq!(order.delivered_to_carrier_at, None);
    }

    #[test]
    fn serializes_camel_case_without_absent_dates() {
        let order = Order {
            customer_id: 41,
            status: "shipped".to_owned(),
            ..Order::default()
        };
        let json = serde_json::to_value(&order).expect("serialize");
        assert_eq!(json["customerId"], 41);
        assert_eq!(json["orderId"], "00000000-0000-0000-0000-000000000000");
        assert!(json.get("approvedAt").is_none());
    }
}
