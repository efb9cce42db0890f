use dioxus::prelude::*;

use crate::domain::{ManifestOrder, OrderSelection};
use crate::ui::theme;

#[component]
pub fn OrderTable(
    orders: Vec<ManifestOrder>,
    selection: OrderSelection,
    show_add_button: bool,
    on_toggle: EventHandler<String>,
    on_toggle_all: EventHandler<Vec<ManifestOrder>>,
    on_view: EventHandler<ManifestOrder>,
    on_add: EventHandler<String>,
) -> Element {
    let is_empty = orders.is_empty();
    let all_selected = selection.all_selected(&orders);
    let columns = if show_add_button { "9" } else { "8" };
    let page_orders = orders.clone();
    let rows = orders
        .into_iter()
        .map(|order| {
            let selected = selection.contains(&order.id);
            (order, selected)
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "scroll-x",
            table {
                class: "sr-table",
                thead {
                    tr {
                        th {
                            class: "sr-th sr-th-check",
                            input {
                                r#type: "checkbox",
                                checked: all_selected,
                                disabled: is_empty,
                                onchange: move |_| on_toggle_all.call(page_orders.clone()),
                            }
                        }
                        th { class: "sr-th", "Order ID" }
                        th { class: "sr-th", "Customer Details" }
                        th { class: "sr-th", "Order Date" }
                        th { class: "sr-th", "Package Details" }
                        th { class: "sr-th", "Address" }
                        th { class: "sr-th", "Last Mile AWB" }
                        th { class: "sr-th", "View Order" }
                        if show_add_button {
                            th { class: "sr-th", "Action" }
                        }
                    }
                }
                tbody {
                    for (index, (order, selected)) in rows.into_iter().enumerate() {
                        OrderRow {
                            key: "{order.id}",
                            order,
                            index,
                            selected,
                            show_add_button,
                            on_toggle,
                            on_view,
                            on_add,
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "sr-td sr-empty",
                                colspan: columns,
                                "No results."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OrderRow(
    order: ManifestOrder,
    index: usize,
    selected: bool,
    show_add_button: bool,
    on_toggle: EventHandler<String>,
    on_view: EventHandler<ManifestOrder>,
    on_add: EventHandler<String>,
) -> Element {
    let toggle_id = order.id.clone();
    let add_id = order.id.clone();
    let view_order = order.clone();

    rsx! {
        tr {
            class: theme::row_class(index),
            td {
                class: "sr-td sr-td-check",
                input {
                    r#type: "checkbox",
                    checked: selected,
                    onchange: move |_| on_toggle.call(toggle_id.clone()),
                }
            }
            td { class: "sr-td sr-strong sr-link", "{order.id}" }
            td {
                class: "sr-td",
                p { class: "sr-strong", "{order.customer_name}" }
                p { class: theme::MUTED, "{order.customer_phone}" }
            }
            td {
                class: "sr-td sr-nowrap",
                p { "{order.order_date}" }
                p { class: theme::MUTED, "{order.order_time}" }
            }
            td {
                class: "sr-td",
                p { "{order.weight}" }
                p { class: theme::MUTED, "{order.package_type}" }
            }
            td { class: "sr-td sr-td-address", "{order.address}" }
            td { class: "sr-td sr-mono", "{order.last_mile_awb}" }
            td {
                class: "sr-td",
                button {
                    class: "sr-icon-btn",
                    title: "View order",
                    onclick: move |_| on_view.call(view_order.clone()),
                    "👁"
                }
            }
            if show_add_button {
                td {
                    class: "sr-td",
                    button {
                        class: "sr-btn sr-btn-small sr-btn-primary",
                        onclick: move |_| on_add.call(add_id.clone()),
                        "Add to Manifest"
                    }
                }
            }
        }
    }
}
