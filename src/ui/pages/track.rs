use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, LookupState, RecentSearch, TrackingError, TrackingRecord, TrackingSession},
    infra::tracking::TrackingProvider,
    ui::{
        components::{
            toast::{push_toast, ToastKind, ToastMessage},
            HistoryTable, StatusBadge,
        },
        theme,
    },
};

#[component]
pub fn TrackPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let provider = use_context::<Arc<dyn TrackingProvider>>();

    let mut input = use_signal(String::new);
    let session = use_signal(TrackingSession::new);

    let track = use_callback(move |raw: String| {
        let mut session = session;
        let mut state = state;

        let (ticket, awb) = match session.with_mut(|s| s.begin(&raw)) {
            Ok(started) => started,
            Err(TrackingError::EmptyInput) => return,
            Err(err) => {
                push_toast(toasts, ToastKind::Error, err.to_string());
                return;
            }
        };
        input.set(awb.clone());

        let provider = provider.clone();
        spawn(async move {
            let result = provider.lookup(&awb).await;
            let failure = result.as_ref().err().cloned();

            if !session.with_mut(|s| s.resolve(ticket, result)) {
                return;
            }

            match failure {
                None => {
                    tracing::info!(%awb, "tracking record loaded");
                    state.with_mut(|st| st.record_search(RecentSearch::now(awb.clone())));
                    persist_user_state(&state);
                }
                Some(err) => {
                    tracing::warn!(%awb, "tracking lookup failed: {err}");
                    let kind = if err.is_retryable() {
                        ToastKind::Warning
                    } else {
                        ToastKind::Error
                    };
                    push_toast(toasts, kind, err.to_string());
                }
            }
        });
    });

    let snapshot = session.read().clone();
    let loading = snapshot.state().is_loading();
    let displayed = snapshot.displayed().cloned();
    let recent = state.with(|st| st.recent_searches.clone());

    rsx! {
        div { class: "sr-stack",
            section {
                class: theme::CARD,
                h1 { class: "sr-page-title", "Track Your Shipment" }
                label { class: "sr-label", r#for: "awb-input", "Enter Tracking Number" }
                div { class: "sr-search-row",
                    input {
                        id: "awb-input",
                        class: theme::INPUT,
                        placeholder: "e.g., SR1234567890",
                        value: input(),
                        oninput: move |evt| input.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                track.call(input());
                            }
                        },
                    }
                    button {
                        class: theme::BTN_PRIMARY,
                        disabled: loading,
                        onclick: move |_| track.call(input()),
                        if loading { "Tracking..." } else { "Track" }
                    }
                }
                p {
                    class: theme::MUTED,
                    "Enter your ShipReward tracking number to see the status of your shipment."
                }
            }

            LookupFeedback {
                state: snapshot.state().clone(),
                on_retry: move |awb: String| track.call(awb),
            }

            if let Some(record) = displayed {
                TrackingDetails { record }
            }

            RecentSearches {
                searches: recent,
                on_select: move |awb: String| track.call(awb),
                on_clear: move |_| {
                    let mut state = state;
                    state.with_mut(|st| st.clear_recent_searches());
                    persist_user_state(&state);
                },
            }
        }
    }
}

#[component]
fn LookupFeedback(state: LookupState, on_retry: EventHandler<String>) -> Element {
    match state {
        LookupState::Loading { awb } => rsx! {
            p { class: "sr-notice", "Looking up {awb}..." }
        },
        LookupState::Failed {
            error: TrackingError::NotFound(awb),
            ..
        } => rsx! {
            div { class: "sr-notice sr-notice-empty",
                p { class: "sr-strong", "No shipment found" }
                p { class: theme::MUTED, "We couldn't find any shipment for {awb}. Check the number and try again." }
            }
        },
        LookupState::Failed { awb, error } if error.is_retryable() => rsx! {
            div { class: "sr-notice sr-notice-warning",
                p { "{error}" }
                button {
                    class: theme::BTN_OUTLINE,
                    onclick: move |_| on_retry.call(awb.clone()),
                    "Retry"
                }
            }
        },
        _ => rsx! { Fragment {} },
    }
}

#[component]
fn TrackingDetails(record: TrackingRecord) -> Element {
    let history = record.history.clone();
    rsx! {
        section {
            class: theme::CARD,
            h2 { class: theme::SECTION_TITLE, "Shipping Details" }
            div { class: "sr-detail-grid",
                DetailItem { label: "AWB", value: record.awb.clone() }
                DetailItem { label: "Booking Date", value: record.booking_date.clone() }
                DetailItem { label: "Consignee", value: record.consignee.clone() }
                DetailItem { label: "Destination", value: record.destination.clone() }
                div { class: "sr-detail",
                    p { class: "sr-detail-label", "Status" }
                    StatusBadge { status: record.status.clone() }
                }
                DetailItem { label: "Lastmile AWB", value: record.lastmile_awb.clone() }
            }
        }
        section {
            class: theme::CARD,
            h2 { class: theme::SECTION_TITLE, "Shipment History" }
            HistoryTable { events: history }
        }
    }
}

#[component]
fn DetailItem(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "sr-detail",
            p { class: "sr-detail-label", "{label}" }
            p { class: "sr-detail-value", "{value}" }
        }
    }
}

#[component]
fn RecentSearches(
    searches: Vec<RecentSearch>,
    on_select: EventHandler<String>,
    on_clear: EventHandler<()>,
) -> Element {
    let is_empty = searches.is_empty();
    rsx! {
        section {
            class: theme::CARD,
            div { class: "sr-section-head",
                h2 { class: theme::SECTION_TITLE, "Recent Searches" }
                if !is_empty {
                    button {
                        class: "sr-link-btn",
                        onclick: move |_| on_clear.call(()),
                        "Clear"
                    }
                }
            }
            if is_empty {
                p { class: "sr-empty", "No recent searches" }
            } else {
                ul { class: "sr-recent-list",
                    for search in searches {
                        RecentSearchItem { search, on_select }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentSearchItem(search: RecentSearch, on_select: EventHandler<String>) -> Element {
    let awb = search.awb.clone();
    rsx! {
        li {
            button {
                class: "sr-recent-item",
                onclick: move |_| on_select.call(awb.clone()),
                span { class: "sr-mono sr-strong", "{search.awb}" }
                span { class: theme::MUTED, "{search.searched_label()}" }
            }
        }
    }
}
