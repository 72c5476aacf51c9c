use super::{
    domain::{OrderNumber, OrdersState},
    error::FetchError,
    protocol::Order,
};

const SAMPLE_ORDER: &str = r#"{
    "order_number": 4021,
    "customer": {
        "first_name": "Ada",
        "last_name": "Byron",
        "address": {
            "line1": "12 Analytical Way",
            "line2": "",
            "city": "Springfield",
            "state": "IL",
            "zip": "62701"
        }
    },
    "order_details": { "value": 129.5, "date": "2021-03-04T10:00:00Z" },
    "shipping_details": { "date": "2021-03-06" },
    "status": "Shipped"
}"#;

#[test]
fn order_decodes_from_snake_case_payload() {
    let order: Order = serde_json::from_str(SAMPLE_ORDER).expect("decode");
    assert_eq!(order.order_number, OrderNumber(4021));
    assert_eq!(order.customer.address.city, "Springfield");
    assert_eq!(order.order_details.value, 129.5);
    assert_eq!(order.shipping_details.date, "2021-03-06");
    assert_eq!(order.status, "Shipped");
}

#[test]
fn missing_address_line2_defaults_to_empty() {
    let payload = SAMPLE_ORDER.replace("\"line2\": \"\",", "");
    let order: Order = serde_json::from_str(&payload).expect("decode");
    assert!(order.customer.address.line2.is_empty());
}

#[test]
fn order_number_serializes_as_plain_integer() {
    let encoded = serde_json::to_string(&OrderNumber(7)).expect("encode");
    assert_eq!(encoded, "7");
    assert_eq!(OrderNumber(7).to_string(), "7");
}

#[test]
fn default_state_is_idle_and_empty() {
    let state = OrdersState::default();
    assert!(state.orders.is_empty());
    assert!(!state.meta.is_loading);
    assert!(!state.meta.is_error);
}

#[test]
fn json_errors_map_to_decode_failures() {
    let err = serde_json::from_str::<Vec<Order>>("{").expect_err("must fail");
    let mapped = FetchError::from(err);
    assert!(matches!(mapped, FetchError::Decode(_)));
    assert!(mapped.to_string().starts_with("malformed order payload"));
}
