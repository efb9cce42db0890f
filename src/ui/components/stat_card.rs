use dioxus::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "sr-stat-card",
            p { class: "sr-stat-value", "{value}" }
            p { class: "sr-stat-label", "{label}" }
        }
    }
}
