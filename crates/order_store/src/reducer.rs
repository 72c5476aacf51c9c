//! Reducer-style transitions for the order store state.

use shared::{domain::OrdersState, protocol::Order};

#[derive(Debug, Clone, PartialEq)]
pub enum OrdersAction {
    FetchStarted,
    FetchSucceeded(Vec<Order>),
    FetchFailed,
}

pub fn reduce(state: &mut OrdersState, action: OrdersAction) {
    match action {
        OrdersAction::FetchStarted => {
            state.meta.is_loading = true;
        }
        OrdersAction::FetchSucceeded(orders) => {
            state.orders = orders;
            state.meta.is_loading = false;
            state.meta.is_error = false;
        }
        OrdersAction::FetchFailed => {
            state.meta.is_loading = false;
            state.meta.is_error = true;
        }
    }
}
