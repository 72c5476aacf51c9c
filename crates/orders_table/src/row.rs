//! Flattened, display-oriented projection of an order.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use shared::{domain::OrderNumber, protocol::Order};

use crate::{
    error::ParseError,
    sorting::{FieldValue, SortKey},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub order_number: OrderNumber,
    pub ordered_date: String,
    pub status: String,
    pub shipped_date: String,
    pub customer_address: String,
    pub ordered_value: f64,
}

impl Row {
    pub fn from_order(order: &Order) -> Self {
        let address = &order.customer.address;
        Self {
            order_number: order.order_number,
            ordered_date: order.order_details.date.clone(),
            status: order.status.clone(),
            shipped_date: order.shipping_details.date.clone(),
            customer_address: format!(
                "{} {}, {} {}",
                address.line1, address.city, address.state, address.zip
            ),
            ordered_value: order.order_details.value,
        }
    }
}

pub fn project(orders: &[Order]) -> Vec<Row> {
    orders.iter().map(Row::from_order).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowField {
    #[default]
    OrderNumber,
    OrderedDate,
    Status,
    ShippedDate,
    CustomerAddress,
    OrderedValue,
}

impl RowField {
    pub const ALL: [Self; 6] = [
        Self::OrderNumber,
        Self::OrderedDate,
        Self::Status,
        Self::ShippedDate,
        Self::CustomerAddress,
        Self::OrderedValue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OrderNumber => "orderNumber",
            Self::OrderedDate => "orderedDate",
            Self::Status => "status",
            Self::ShippedDate => "shippedDate",
            Self::CustomerAddress => "customerAddress",
            Self::OrderedValue => "orderedValue",
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowField {
    type Err = ParseError;

    /// Accepts both `orderNumber` and `order_number` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().to_ascii_lowercase() == normalized)
            .ok_or_else(|| ParseError::UnknownField(s.trim().to_string()))
    }
}

impl SortKey for RowField {
    type Record = Row;

    fn value_of(self, row: &Row) -> FieldValue<'_> {
        match self {
            Self::OrderNumber => FieldValue::Integer(row.order_number.0),
            Self::OrderedDate => FieldValue::Text(&row.ordered_date),
            Self::Status => FieldValue::Text(&row.status),
            Self::ShippedDate => FieldValue::Text(&row.shipped_date),
            Self::CustomerAddress => FieldValue::Text(&row.customer_address),
            Self::OrderedValue => FieldValue::Number(row.ordered_value),
        }
    }
}

#[cfg(test)]
#[path = "tests/row_tests.rs"]
mod tests;
