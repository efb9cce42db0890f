use dioxus::prelude::*;

use crate::domain::TrackingEvent;
use crate::ui::theme;

/// Shipment history, rendered in the order the record carries it.
#[component]
pub fn HistoryTable(events: Vec<TrackingEvent>) -> Element {
    let is_empty = events.is_empty();
    rsx! {
        div {
            class: "scroll-x",
            table {
                class: "sr-table",
                thead {
                    tr {
                        th { class: "sr-th", "Update Timestamp" }
                        th { class: "sr-th", "Location" }
                        th { class: "sr-th", "Shipment History" }
                    }
                }
                tbody {
                    for (index, event) in events.into_iter().enumerate() {
                        tr {
                            class: theme::row_class(index),
                            td { class: "sr-td sr-nowrap", "{event.timestamp}" }
                            td { class: "sr-td", "{event.location}" }
                            td { class: "sr-td sr-strong", "{event.event}" }
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "sr-td sr-empty",
                                colspan: "3",
                                "No tracking events recorded yet."
                            }
                        }
                    }
                }
            }
        }
    }
}
