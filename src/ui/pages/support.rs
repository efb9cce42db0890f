use dioxus::prelude::*;

use crate::{domain::SUPPORT_CONTACT, ui::theme};

#[component]
pub fn SupportPage() -> Element {
    let contact = SUPPORT_CONTACT;

    rsx! {
        div { class: "sr-stack",
            h1 { class: "sr-page-title", "Support Center" }
            section {
                class: theme::CARD,
                h2 { class: theme::SECTION_TITLE, "Dedicated Account Manager" }
                p { class: theme::MUTED, "Dedicated Account Manager is available to assist you." }

                div { class: "sr-contact-list",
                    div { class: "sr-contact-row",
                        span { class: "sr-contact-label", "👤 Customer Support" }
                        a {
                            class: "sr-contact-link",
                            href: contact.mailto_href(),
                            "✉ {contact.email}"
                        }
                    }
                    div { class: "sr-contact-row",
                        span { class: "sr-contact-label", "📞 Phone" }
                        a {
                            class: "sr-contact-link",
                            href: contact.tel_href(),
                            "{contact.phone}"
                        }
                    }
                }
            }
        }
    }
}
