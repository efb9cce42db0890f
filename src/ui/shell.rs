use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{APP_NAME, COPYRIGHT};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "sr-app",
            header {
                class: "sr-header",
                div { class: "sr-header-inner",
                    div { class: "sr-brand",
                        span { class: "sr-brand-mark", "📦" }
                        h1 { class: "sr-brand-name", "{APP_NAME}" }
                    }
                    nav { class: "sr-nav",
                        NavButton { active: matches!(current_route, Route::Track {}), onclick: move |_| { nav.push(Route::Track {}); }, label: "Track" }
                        NavButton { active: matches!(current_route, Route::Rates {}), onclick: move |_| { nav.push(Route::Rates {}); }, label: "Rates" }
                        NavButton { active: matches!(current_route, Route::Manifest {}), onclick: move |_| { nav.push(Route::Manifest {}); }, label: "Manifest" }
                        NavButton { active: matches!(current_route, Route::Support {}), onclick: move |_| { nav.push(Route::Support {}); }, label: "Support" }
                        NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "⚙️" }
                    }
                }
            }
            main { class: "sr-main",
                {children}
            }
            footer { class: "sr-footer", "{COPYRIGHT}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::nav_class(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
