use dioxus::prelude::*;

use crate::domain::{rates::format_rupees, RateTier, ServiceLevel};
use crate::ui::theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WeightOrder {
    Ascending,
    Descending,
}

impl WeightOrder {
    fn flipped(self) -> Self {
        match self {
            WeightOrder::Ascending => WeightOrder::Descending,
            WeightOrder::Descending => WeightOrder::Ascending,
        }
    }

    fn arrow(self) -> &'static str {
        match self {
            WeightOrder::Ascending => "↑",
            WeightOrder::Descending => "↓",
        }
    }
}

#[component]
pub fn RateTable(tiers: Vec<RateTier>) -> Element {
    let mut order = use_signal(|| WeightOrder::Ascending);
    let current = order();
    let rows = ordered_rows(tiers, current);
    let is_empty = rows.is_empty();

    rsx! {
        div {
            class: "scroll-x",
            table {
                class: "sr-table",
                thead {
                    tr {
                        th {
                            class: "sr-th sr-th-weight",
                            button {
                                class: "sr-th-sort",
                                onclick: move |_| order.set(current.flipped()),
                                "Weight {current.arrow()}"
                            }
                        }
                        for service in ServiceLevel::ALL {
                            ServiceHeader { service }
                        }
                    }
                }
                tbody {
                    for (index, tier) in rows.into_iter().enumerate() {
                        tr {
                            class: theme::row_class(index),
                            td { class: "sr-td sr-weight", "{tier.weight}" }
                            td { class: "sr-td sr-price", {format_rupees(tier.standard)} }
                            td { class: "sr-td sr-price", {format_rupees(tier.express)} }
                            td { class: "sr-td sr-price", {format_rupees(tier.priority)} }
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "sr-td sr-empty",
                                colspan: "4",
                                "No rates published for this country yet."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ServiceHeader(service: ServiceLevel) -> Element {
    let (background, foreground) = theme::service_badge(service);
    rsx! {
        th {
            class: "sr-th",
            div { class: "sr-th-with-badge",
                span { "{service.name()}" }
                span {
                    class: "sr-delivery-badge",
                    style: "background-color: {background}; color: {foreground};",
                    "{service.delivery_window()}"
                }
            }
        }
    }
}

fn ordered_rows(mut tiers: Vec<RateTier>, order: WeightOrder) -> Vec<RateTier> {
    if order == WeightOrder::Descending {
        tiers.reverse();
    }
    tiers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(weight: &str) -> RateTier {
        RateTier {
            weight: weight.into(),
            standard: 1,
            express: 2,
            priority: 3,
        }
    }

    #[test]
    fn descending_order_reverses_card() {
        let tiers = vec![tier("0.50 kg"), tier("0.75 kg")];
        let rows = ordered_rows(tiers.clone(), WeightOrder::Descending);
        assert_eq!(rows[0].weight, "0.75 kg");
        assert_eq!(ordered_rows(tiers, WeightOrder::Ascending)[0].weight, "0.50 kg");
        assert_eq!(WeightOrder::Ascending.flipped(), WeightOrder::Descending);
    }
}
