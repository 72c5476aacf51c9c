//! Holder of the fetched order list and its loading/error flags.
//!
//! The store is constructed explicitly around an [`OrderSource`] and handed
//! to whoever renders it; there is no process-wide instance.

use std::sync::Arc;

use async_trait::async_trait;
use shared::{domain::OrdersState, error::FetchError, protocol::Order};
use tokio::sync::watch;
use tracing::{info, warn};

pub mod reducer;
pub mod source;

pub use reducer::{reduce, OrdersAction};
pub use source::{FileOrderSource, HttpOrderSource, DEFAULT_ORDERS_URL};

#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn fetch_orders(&self) -> Result<Vec<Order>, FetchError>;

    /// Human-readable origin used in logs.
    fn describe(&self) -> String;
}

pub struct OrderStore {
    source: Arc<dyn OrderSource>,
    state: watch::Sender<OrdersState>,
}

impl OrderStore {
    pub fn new(source: Arc<dyn OrderSource>) -> Self {
        let (state, _) = watch::channel(OrdersState::default());
        Self { source, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<OrdersState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> OrdersState {
        self.state.borrow().clone()
    }

    pub fn dispatch(&self, action: OrdersAction) {
        self.state.send_modify(|state| reduce(state, action));
    }

    /// Fetches the full order list and publishes the outcome.
    ///
    /// Failures are logged and reduced to the error flag; the previous
    /// orders are kept.
    pub async fn fetch_orders(&self) {
        let origin = self.source.describe();
        self.dispatch(OrdersAction::FetchStarted);

        match self.source.fetch_orders().await {
            Ok(orders) => {
                info!(%origin, count = orders.len(), "orders fetched");
                self.dispatch(OrdersAction::FetchSucceeded(orders));
            }
            Err(error) => {
                warn!(%origin, %error, "order fetch failed");
                self.dispatch(OrdersAction::FetchFailed);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
