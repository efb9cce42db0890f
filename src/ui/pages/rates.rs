use dioxus::prelude::*;

use crate::{
    domain::{quote, rates::format_rupees, rates_for, AppState, Country, QuoteError, ServiceLevel},
    ui::{components::RateTable, theme},
};

#[component]
pub fn RatesPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let mut active = use_signal(|| state.with(|st| st.default_country));

    let country = active();
    let tiers = rates_for(country).to_vec();

    rsx! {
        div { class: "sr-stack",
            div {
                h1 { class: "sr-page-title", "Rate Table" }
                p { class: theme::MUTED, "{country.label()}" }
            }

            div { class: "sr-tabs",
                for option in Country::ALL {
                    button {
                        key: "{option.id()}",
                        class: theme::tab_class(option == country),
                        onclick: move |_| active.set(option),
                        img { class: "sr-flag", src: option.flag_url(), alt: "" }
                        span { "{option.label()}" }
                    }
                }
            }

            section {
                class: theme::CARD,
                h2 { class: theme::SECTION_TITLE, "Shipping Rates to {country.label()}" }
                p { class: theme::MUTED, "ⓘ All prices are in INR (₹) inclusive of GST" }
                RateTable { key: "{country.id()}", tiers }
            }

            QuoteCalculator { country }
        }
    }
}

#[component]
fn QuoteCalculator(country: Country) -> Element {
    let mut weight_input = use_signal(|| "0.50".to_string());
    let mut service = use_signal(|| ServiceLevel::Standard);

    let outcome = estimate(country, &weight_input(), service());

    rsx! {
        section {
            class: theme::CARD,
            h2 { class: theme::SECTION_TITLE, "Quick Quote" }
            div { class: "sr-form-row",
                div {
                    label { class: "sr-label", r#for: "quote-weight", "Weight (kg)" }
                    input {
                        id: "quote-weight",
                        class: theme::INPUT,
                        value: weight_input(),
                        oninput: move |evt| weight_input.set(evt.value()),
                    }
                }
                div {
                    label { class: "sr-label", r#for: "quote-service", "Service" }
                    select {
                        id: "quote-service",
                        class: theme::INPUT,
                        onchange: move |evt| {
                            if let Some(level) = parse_service(&evt.value()) {
                                service.set(level);
                            }
                        },
                        for level in ServiceLevel::ALL {
                            option {
                                value: level.name(),
                                selected: level == service(),
                                "{level.name()} ({level.delivery_window()})"
                            }
                        }
                    }
                }
            }
            match outcome {
                Ok(line) => rsx! { p { class: "sr-quote", "{line}" } },
                Err(message) => rsx! { p { class: "sr-quote sr-quote-error", "{message}" } },
            }
        }
    }
}

fn parse_service(value: &str) -> Option<ServiceLevel> {
    ServiceLevel::ALL
        .into_iter()
        .find(|level| level.name() == value)
}

fn estimate(country: Country, raw_weight: &str, service: ServiceLevel) -> Result<String, String> {
    let weight_kg = raw_weight
        .trim()
        .parse::<f64>()
        .map_err(|_| "Enter the parcel weight in kilograms.".to_string())?;

    match quote(country, weight_kg, service) {
        Ok(found) => Ok(format!(
            "{} via {} ({} tier, {}): {}",
            found.country.label(),
            found.service.name(),
            found.tier.weight,
            found.service.delivery_window(),
            format_rupees(found.price)
        )),
        Err(err @ QuoteError::OverweightForCountry { .. }) => {
            Err(format!("{err}. Contact support for heavier parcels."))
        }
        Err(err) => Err(err.to_string()),
    }
}
