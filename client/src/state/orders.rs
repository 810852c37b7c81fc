//! Previous-orders list state for the home view.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use crate::net::api::ApiError;
use crate::net::types::Order;

pub const ORDERS_FAILED: &str = "Could not load your previous orders.";

/// Orders fetched for the signed-in user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrdersState {
    pub items: Vec<Order>,
    pub loading: bool,
    pub error: Option<String>,
}

impl OrdersState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store a fetch result, newest orders first.
    pub fn finish_load(&mut self, result: Result<Vec<Order>, ApiError>) {
        self.loading = false;
        match result {
            Ok(mut orders) => {
                orders.sort_by(|a, b| b.order_date.cmp(&a.order_date).then_with(|| b.id.cmp(&a.id)));
                self.items = orders;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(ORDERS_FAILED.to_owned());
                leptos::logging::warn!("orders fetch failed: {e}");
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}
