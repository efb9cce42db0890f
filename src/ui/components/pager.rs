use dioxus::prelude::*;

use crate::domain::{visible_pages, ITEMS_PER_PAGE};
use crate::ui::theme;

#[component]
pub fn Pager(
    page: usize,
    total_pages: usize,
    has_previous: bool,
    has_next: bool,
    caption: String,
    on_change: EventHandler<usize>,
) -> Element {
    let pages = visible_pages(page, total_pages);

    rsx! {
        div {
            class: "sr-pager",
            p { class: theme::MUTED, "{caption}" }
            div {
                class: "sr-pager-controls",
                span { class: theme::MUTED, "Items per page {ITEMS_PER_PAGE}" }
                button {
                    class: "sr-page-btn",
                    disabled: !has_previous,
                    onclick: move |_| {
                        if has_previous {
                            on_change.call(page - 1);
                        }
                    },
                    "<"
                }
                for number in pages {
                    button {
                        class: theme::page_button(number == page),
                        onclick: move |_| on_change.call(number),
                        "{number}"
                    }
                }
                button {
                    class: "sr-page-btn",
                    disabled: !has_next,
                    onclick: move |_| {
                        if has_next {
                            on_change.call(page + 1);
                        }
                    },
                    ">"
                }
            }
        }
    }
}
