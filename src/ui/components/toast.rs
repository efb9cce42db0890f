use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const MAX_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Failures stay on screen longer than confirmations.
    fn dismiss_after(self) -> Duration {
        match self {
            ToastKind::Info | ToastKind::Success => Duration::from_secs(4),
            ToastKind::Warning | ToastKind::Error => Duration::from_secs(7),
        }
    }

    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "sr-toast sr-toast-info",
            ToastKind::Success => "sr-toast sr-toast-success",
            ToastKind::Warning => "sr-toast sr-toast-warning",
            ToastKind::Error => "sr-toast sr-toast-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

/// Appends a toast, replacing an identical one still on screen and evicting
/// the oldest beyond the cap.
fn enqueue(entries: &mut Vec<ToastMessage>, kind: ToastKind, text: String) {
    entries.retain(|existing| !(existing.kind == kind && existing.text == text));
    while entries.len() >= MAX_TOASTS {
        entries.remove(0);
    }
    entries.push(ToastMessage {
        id: generate_id("toast"),
        kind,
        text,
    });
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let text = message.into();
    tracing::debug!(?kind, "toast: {text}");
    toasts.with_mut(|entries| enqueue(entries, kind, text));
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "sr-toast-stack",
            ul {
                for message in messages {
                    ToastCard { key: "{message.id}", message, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let timer_id = message.id.clone();
    let delay = message.kind.dismiss_after();
    let _auto_dismiss = use_future(move || {
        let id = timer_id.clone();
        async move {
            tokio::time::sleep(delay).await;
            dismiss(toasts, &id);
        }
    });

    let dismiss_id = message.id.clone();
    rsx! {
        li {
            class: message.kind.class(),
            role: "status",
            span { class: "sr-toast-icon", "{message.kind.icon()}" }
            p { class: "sr-toast-text", "{message.text}" }
            button {
                class: "sr-toast-dismiss",
                onclick: move |_| dismiss(toasts, &dismiss_id),
                "✕"
            }
        }
    }
}

fn dismiss(mut toasts: Signal<Vec<ToastMessage>>, id: &str) {
    toasts.with_mut(|items| items.retain(|toast| toast.id != id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_keeps_newest_three() {
        let mut entries = Vec::new();
        for n in 0..5 {
            enqueue(&mut entries, ToastKind::Info, format!("message {n}"));
        }
        let texts: Vec<_> = entries.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["message 2", "message 3", "message 4"]);
    }

    #[test]
    fn repeated_message_replaces_earlier_copy() {
        let mut entries = Vec::new();
        enqueue(&mut entries, ToastKind::Warning, "Please select orders to add".into());
        enqueue(&mut entries, ToastKind::Info, "Cleared recent searches.".into());
        enqueue(&mut entries, ToastKind::Warning, "Please select orders to add".into());

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].text, "Please select orders to add");
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[test]
    fn failures_linger_longer_than_confirmations() {
        assert!(ToastKind::Error.dismiss_after() > ToastKind::Success.dismiss_after());
    }
}
