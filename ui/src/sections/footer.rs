use dioxus::prelude::*;

use crate::content::SITE;
use crate::core::share::{instagram_profile_url, whatsapp_chat_url};
use crate::t;

const FOUNDED: u16 = 2024;

#[component]
pub fn Footer() -> Element {
    let config = &SITE.config;
    let contacts = &config.contacts;

    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "footer__columns",
                    div {
                        h3 { class: "footer__title", {t!("footer-about-title")} }
                        p { class: "footer__text", {t!("footer-about-love")} }
                        p { class: "footer__text", {t!("footer-about-delivery")} }
                    }
                    div {
                        h3 { class: "footer__title", {t!("footer-contact-title")} }
                        p { class: "footer__text", {t!("footer-email")} ": {contacts.email}" }
                        p { class: "footer__text", {t!("footer-whatsapp")} ": {contacts.whatsapp_display}" }
                        div { class: "footer__social",
                            a {
                                href: whatsapp_chat_url(contacts),
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: t!("footer-whatsapp"),
                                "💬"
                            }
                            a {
                                href: instagram_profile_url(contacts),
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "Instagram",
                                "📷"
                            }
                        }
                    }
                    div {
                        h3 { class: "footer__title", {t!("footer-follow-title")} }
                        p { class: "footer__text", {t!("footer-follow-body")} }
                    }
                }

                div { class: "footer__bottom",
                    p { class: "footer__text footer__love",
                        {t!("footer-about-love")}
                        span { class: "footer__heart", aria_hidden: "true", " ♥" }
                    }
                    p { class: "footer__text", "© {FOUNDED} {config.brand}. " {t!("footer-rights")} }
                }
            }
        }
    }
}
