//! Previous-orders list shown on the home view.

#[cfg(test)]
#[path = "previous_orders_test.rs"]
mod previous_orders_test;

use std::fmt::Write;

use leptos::prelude::*;

use crate::net::types::{Order, ShoppedItem};
use crate::state::orders::OrdersState;

/// Display label for a line item, e.g. `"Oat milk (1 l) x2"`.
pub fn item_label(item: &ShoppedItem) -> String {
    let mut label = item.raw_name.trim().to_owned();
    if let Some(size) = item.weight_or_volume.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        let _ = write!(label, " ({size})");
    }
    if item.quantity > 1 {
        let _ = write!(label, " x{}", item.quantity);
    }
    label
}

/// Short summary line, e.g. `"14 Mar 2025 · 3 items"`.
pub fn order_summary(order: &Order) -> String {
    let count: i64 = order.items.iter().map(|i| i64::from(i.quantity.max(0))).sum();
    let noun = if count == 1 { "item" } else { "items" };
    format!("{} · {count} {noun}", order.order_date.format("%-d %b %Y"))
}

/// Fetches the user's orders on mount and renders them newest first.
#[component]
pub fn PreviousOrders() -> impl IntoView {
    let orders = RwSignal::new(OrdersState::default());

    #[cfg(feature = "hydrate")]
    {
        orders.update(OrdersState::begin_load);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_orders().await;
            orders.update(|s| s.finish_load(result));
        });
    }

    view! {
        <section class="orders">
            <h2 class="orders__title">"Previous orders"</h2>
            <Show when=move || orders.get().error.is_some()>
                <p class="orders__error" role="alert">{move || orders.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || orders.get().loading>
                <p class="orders__status">"Loading orders..."</p>
            </Show>
            <Show when=move || orders.get().is_empty()>
                <p class="orders__status">"No orders yet."</p>
            </Show>
            <ul class="orders__list">
                {move || {
                    orders
                        .get()
                        .items
                        .into_iter()
                        .map(|order| view! { <OrderCard order=order/> })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}

#[component]
fn OrderCard(order: Order) -> impl IntoView {
    let summary = order_summary(&order);
    let labels: Vec<String> = order.items.iter().map(item_label).collect();
    view! {
        <li class="order-card">
            <header class="order-card__header">
                <span class="order-card__number">{order.order_number}</span>
                <span class="order-card__summary">{summary}</span>
            </header>
            <ul class="order-card__items">
                {labels.into_iter().map(|label| view! { <li>{label}</li> }).collect::<Vec<_>>()}
            </ul>
        </li>
    }
}
