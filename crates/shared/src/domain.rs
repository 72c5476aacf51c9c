use serde::{Deserialize, Serialize};

use crate::protocol::Order;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(OrderNumber);

/// Loading/error flags published alongside the order list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdersMeta {
    pub is_loading: bool,
    pub is_error: bool,
}

/// Observable state of the order data store.
///
/// `orders` is replaced wholesale on every successful fetch and never
/// partially mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrdersState {
    pub orders: Vec<Order>,
    pub meta: OrdersMeta,
}
