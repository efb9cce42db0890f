use dioxus::prelude::*;

use crate::{
    domain::{paginate, Manifest, ManifestOrder, OrderSelection, ITEMS_PER_PAGE},
    ui::{
        components::{
            toast::{push_toast, ToastKind, ToastMessage},
            OrderTable, Pager, StatCard, StatusBadge,
        },
        theme,
    },
};

#[component]
pub fn ManifestPage() -> Element {
    let manifest = Manifest::bundled();
    let selection = use_signal(OrderSelection::default);
    let summary = &manifest.summary;

    rsx! {
        div { class: "sr-stack",
            div { class: "sr-page-head",
                p { class: "sr-breadcrumb", "Manifest > View" }
                div { class: "sr-page-head-row",
                    h1 { class: "sr-page-title", "View Manifest : {manifest.code}" }
                    StatusBadge { status: manifest.status.clone() }
                }
            }

            div { class: "sr-address",
                span { class: "sr-address-icon", "📍" }
                p { "{manifest.pickup_address}" }
            }

            div { class: "sr-stat-grid",
                StatCard { label: "Shipment Cost", value: summary.shipment_cost_label() }
                StatCard { label: "Total Invoice Value", value: summary.invoice_value_label() }
                StatCard { label: "Total Order Weight", value: summary.weight_label() }
                StatCard { label: "Box Count", value: summary.box_count_label() }
            }

            OrderSection {
                title: "Same Address Orders",
                orders: manifest.same_address.clone(),
                selection,
                show_add_button: true,
                bulk_add: true,
            }
            OrderSection {
                title: "Other Address Orders",
                orders: manifest.other_address.clone(),
                selection,
                show_add_button: true,
                bulk_add: false,
            }
            OrderSection {
                title: "Manifested Orders",
                orders: manifest.manifested.clone(),
                selection,
                show_add_button: false,
                bulk_add: false,
            }
        }
    }
}

#[component]
fn OrderSection(
    title: &'static str,
    orders: Vec<ManifestOrder>,
    selection: Signal<OrderSelection>,
    show_add_button: bool,
    bulk_add: bool,
) -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut page = use_signal(|| 1usize);
    let mut selection = selection;

    let slice = paginate(&orders, page(), ITEMS_PER_PAGE);
    let page_orders = slice.items.to_vec();
    let caption = slice.caption();
    let current_page = slice.page;
    let total_pages = slice.total_pages;
    let has_previous = slice.has_previous();
    let has_next = slice.has_next();
    let has_rows = slice.total_items > 0;
    let selected_count = selection.with(|s| (!s.is_empty()).then(|| s.len()));

    let on_bulk_add = move |_| match selection.with_mut(|s| s.take_for_bulk_add()) {
        Ok(ids) => {
            tracing::info!(count = ids.len(), "bulk added orders to manifest");
            push_toast(
                toasts,
                ToastKind::Success,
                format!("Added {} orders to manifest", ids.len()),
            );
        }
        Err(message) => push_toast(toasts, ToastKind::Warning, message),
    };

    rsx! {
        section {
            class: theme::CARD,
            div { class: "sr-section-head",
                h2 { class: theme::SECTION_TITLE, "{title}" }
                if bulk_add {
                    if let Some(count) = selected_count {
                        span { class: theme::MUTED, "{count} selected" }
                    }
                    button {
                        class: theme::BTN_PRIMARY,
                        onclick: on_bulk_add,
                        "+ Bulk Add to Manifest"
                    }
                }
            }
            OrderTable {
                orders: page_orders,
                selection: selection(),
                show_add_button,
                on_toggle: move |id: String| selection.with_mut(|s| s.toggle(&id)),
                on_toggle_all: move |visible: Vec<ManifestOrder>| {
                    selection.with_mut(|s| s.toggle_all(&visible))
                },
                on_view: move |order: ManifestOrder| {
                    push_toast(toasts, ToastKind::Info, order_details(&order));
                },
                on_add: move |id: String| {
                    tracing::info!(%id, "added order to manifest");
                    push_toast(toasts, ToastKind::Success, format!("Added order {id} to manifest"));
                },
            }
            if has_rows {
                Pager {
                    page: current_page,
                    total_pages,
                    has_previous,
                    has_next,
                    caption,
                    on_change: move |next: usize| page.set(next.clamp(1, total_pages.max(1))),
                }
            }
        }
    }
}

fn order_details(order: &ManifestOrder) -> String {
    format!(
        "{}: {} ({}), {} {}, ship to {}",
        order.id,
        order.customer_name,
        order.customer_phone,
        order.weight,
        order.package_type,
        order.address
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_manifest_splits_same_address_over_two_pages() {
        let manifest = Manifest::bundled();
        let first = paginate(&manifest.same_address, 1, ITEMS_PER_PAGE);
        let last = paginate(&manifest.same_address, 2, ITEMS_PER_PAGE);
        assert_eq!(first.caption(), "Showing 1 to 10 of 19 entries");
        assert_eq!(last.caption(), "Showing 11 to 19 of 19 entries");
    }

    #[test]
    fn order_details_mentions_customer_and_address() {
        let order = &Manifest::bundled().other_address[0];
        let details = order_details(order);
        assert!(details.starts_with(&order.id));
        assert!(details.contains(&order.customer_name));
        assert!(details.ends_with(&order.address));
    }
}
