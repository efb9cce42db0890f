use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn StatusBadge(status: String) -> Element {
    let style = theme::status_badge_style(&status);

    rsx! {
        span {
            class: "sr-status-badge",
            style: "{style}",
            "{status}"
        }
    }
}
