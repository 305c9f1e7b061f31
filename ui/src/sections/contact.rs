use dioxus::prelude::*;

use crate::contact::ContactFormView;
use crate::content::SITE;
use crate::core::nav::Section;
use crate::core::share::{instagram_profile_url, whatsapp_chat_url};
use crate::t;

#[component]
pub fn Contact() -> Element {
    let contacts = &SITE.config.contacts;
    let instagram = instagram_profile_url(contacts);
    let whatsapp = whatsapp_chat_url(contacts);

    rsx! {
        section { id: Section::Contact.anchor(), class: "section section--soft",
            div { class: "container",
                h2 { class: "section-title", {t!("contact-title")} }
                p { class: "section-subtitle", {t!("contact-subtitle")} }

                div { class: "contact__inner",
                    div { class: "contact__channels",
                        a {
                            class: "contact-channel",
                            href: "{instagram}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            span { class: "contact-channel__icon", aria_hidden: "true", "📷" }
                            div { class: "contact-channel__text",
                                div { class: "contact-channel__title", {t!("contact-follow")} }
                                div { class: "contact-channel__detail", "@{contacts.instagram_handle}" }
                            }
                        }
                        a {
                            class: "contact-channel",
                            href: "{whatsapp}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            span { class: "contact-channel__icon", aria_hidden: "true", "💬" }
                            div { class: "contact-channel__text",
                                div { class: "contact-channel__title", {t!("contact-chat")} }
                                div { class: "contact-channel__detail", "{contacts.whatsapp_display}" }
                            }
                        }
                    }

                    ContactFormView {}
                }
            }
        }
    }
}
