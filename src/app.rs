use std::sync::Arc;

use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{AppState, TrackingRecord},
    infra::tracking::{provider_from_config, SampleTrackingProvider, TrackingProvider},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{ManifestPage, RatesPage, SettingsPage, SupportPage, TrackPage},
        shell::Shell,
    },
    util::{
        assets,
        config::{AppConfig, ConfigError},
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/track")]
    Track {},
    #[route("/rates")]
    Rates {},
    #[route("/manifest")]
    Manifest {},
    #[route("/support")]
    Support {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(|| {
        let mut initial = AppState::default();
        if let Some(saved) = load_persisted_state() {
            initial.apply_persisted(saved);
        }
        initial
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let (provider, startup_errors) = use_hook(build_provider);
    use_context_provider(|| provider);

    // Toasts are written after the first render, never from inside it.
    use_effect(move || {
        for message in &startup_errors {
            push_toast(toasts, ToastKind::Error, message.clone());
        }
    });

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Resolves the tracking source once per app. Bad configuration degrades to
/// the bundled sample; the returned messages are shown as error toasts.
fn build_provider() -> (Arc<dyn TrackingProvider>, Vec<String>) {
    provider_for(AppConfig::from_env())
}

fn provider_for(
    config: Result<AppConfig, ConfigError>,
) -> (Arc<dyn TrackingProvider>, Vec<String>) {
    let mut errors = Vec::new();
    let config = config.unwrap_or_else(|err| {
        tracing::error!("invalid configuration, using defaults: {err}");
        errors.push(format!("Configuration error: {err}"));
        AppConfig::default()
    });

    let provider = match provider_from_config(&config) {
        Ok(provider) => provider,
        Err(message) => {
            tracing::error!("tracking provider unavailable: {message}");
            errors.push(format!("Tracking unavailable: {message}"));
            let fallback = SampleTrackingProvider::bundled()
                .unwrap_or_else(|_| SampleTrackingProvider::new(empty_record()));
            Arc::new(fallback) as Arc<dyn TrackingProvider>
        }
    };
    (provider, errors)
}

fn empty_record() -> TrackingRecord {
    TrackingRecord {
        awb: String::new(),
        booking_date: String::new(),
        consignee: String::new(),
        destination: String::new(),
        status: "Unknown".to_string(),
        lastmile_awb: String::new(),
        history: Vec::new(),
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        tracing::warn!("failed to persist user state: {err}");
    }
}

#[component]
pub fn Track() -> Element {
    rsx! { Shell { TrackPage {} } }
}

#[component]
pub fn Rates() -> Element {
    rsx! { Shell { RatesPage {} } }
}

#[component]
pub fn Manifest() -> Element {
    rsx! { Shell { ManifestPage {} } }
}

#[component]
pub fn Support() -> Element {
    rsx! { Shell { SupportPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::config::TIMEOUT_VAR;

    #[test]
    fn valid_config_starts_without_errors() {
        let (provider, errors) = provider_for(Ok(AppConfig::default()));
        assert!(errors.is_empty());
        assert_eq!(provider.source_label(), "Bundled sample data");
    }

    #[test]
    fn config_error_falls_back_to_sample_with_message() {
        let (provider, errors) = provider_for(Err(ConfigError::InvalidTimeout {
            var: TIMEOUT_VAR,
            value: "0".into(),
        }));
        assert_eq!(provider.source_label(), "Bundled sample data");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Configuration error:"));
    }
}
