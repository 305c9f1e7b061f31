use dioxus::prelude::*;

use crate::content::{Product, SITE};
use crate::core::format::stagger_style;
use crate::core::share::{self, SharePlatform};
use crate::t;

fn open_share(product: &Product, target: SharePlatform) {
    if let Err(err) = share::dispatch(product, target, &SITE.config) {
        tracing::warn!(%err, ?target, "share link not opened");
    }
}

/// Gallery card with WhatsApp/Instagram order buttons. Cards fade in one after another.
#[component]
pub fn ProductCard(product: Product, index: usize) -> Element {
    let whatsapp_product = product.clone();
    let instagram_product = product.clone();

    rsx! {
        article {
            class: "product-card reveal",
            style: stagger_style(0.0, 0.2, index),
            img {
                class: "product-card__image",
                src: "{product.image}",
                alt: "{product.title}",
            }
            div { class: "product-card__body",
                h3 { class: "product-card__title", "{product.title}" }
                p { class: "product-card__description", "{product.description}" }
                div { class: "product-card__share",
                    button {
                        r#type: "button",
                        class: "product-card__share-button product-card__share-button--whatsapp",
                        aria_label: t!("product-share-whatsapp"),
                        onclick: move |_| open_share(&whatsapp_product, SharePlatform::WhatsApp),
                        "💬"
                    }
                    button {
                        r#type: "button",
                        class: "product-card__share-button product-card__share-button--instagram",
                        aria_label: t!("product-share-instagram"),
                        onclick: move |_| open_share(&instagram_product, SharePlatform::Instagram),
                        "📷"
                    }
                }
            }
        }
    }
}
