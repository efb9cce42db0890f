use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{rate_lookup, AppState, Country, RECENT_SEARCH_LIMIT},
    infra::tracking::TrackingProvider,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::version::{version_label, APP_HOMEPAGE, APP_NAME},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let provider = use_context::<Arc<dyn TrackingProvider>>();

    let current_country = state.with(|st| st.default_country);
    let search_count = state.with(|st| st.recent_searches.len());
    let source = provider.source_label();

    let on_country_change = {
        let mut state = state;
        move |evt: Event<FormData>| {
            let key = evt.value();
            if let Err(err) = rate_lookup(&key) {
                push_toast(toasts, ToastKind::Error, err.to_string());
                return;
            }
            let Ok(country) = key.parse::<Country>() else {
                return;
            };
            state.with_mut(|st| st.default_country = country);
            persist_user_state(&state);
            push_toast(
                toasts,
                ToastKind::Success,
                format!("Rate table now opens on {}.", country.label()),
            );
        }
    };

    let on_clear_searches = {
        let mut state = state;
        move |_| {
            state.with_mut(|st| st.clear_recent_searches());
            persist_user_state(&state);
            push_toast(toasts, ToastKind::Info, "Cleared recent searches.");
        }
    };

    rsx! {
        div { class: "sr-stack",
            h1 { class: "sr-page-title", "Settings" }

            section {
                class: theme::CARD,
                h2 { class: theme::SECTION_TITLE, "Rate Table" }
                label { class: "sr-label", r#for: "default-country", "Default destination" }
                select {
                    id: "default-country",
                    class: theme::INPUT,
                    onchange: on_country_change,
                    for country in Country::ALL {
                        option {
                            value: country.id(),
                            selected: country == current_country,
                            "{country.label()}"
                        }
                    }
                }
            }

            section {
                class: theme::CARD,
                h2 { class: theme::SECTION_TITLE, "Recent Searches" }
                p { class: theme::MUTED, "{search_count} of {RECENT_SEARCH_LIMIT} saved tracking numbers." }
                button {
                    class: theme::BTN_OUTLINE,
                    disabled: search_count == 0,
                    onclick: on_clear_searches,
                    "Clear Recent Searches"
                }
            }

            section {
                class: theme::CARD,
                h2 { class: theme::SECTION_TITLE, "Tracking Data" }
                p { class: theme::MUTED, "Source: {source}" }
            }

            section {
                class: "sr-card sr-about",
                h2 { class: theme::SECTION_TITLE, "About" }
                a {
                    href: APP_HOMEPAGE,
                    target: "_blank",
                    rel: "noreferrer",
                    class: "sr-contact-link",
                    "{APP_NAME}"
                }
                p { class: theme::MUTED, "Version {version_label()}" }
            }
        }
    }
}
