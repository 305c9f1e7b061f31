use dioxus::prelude::*;

use crate::content::{FeatureHighlight, Perk};
use crate::core::format::stagger_style;

#[component]
pub fn FeatureCard(perk: Perk, index: usize) -> Element {
    rsx! {
        div { class: "feature-card reveal", style: stagger_style(0.6, 0.1, index),
            div { class: "feature-card__icon", aria_hidden: "true", "{perk.icon}" }
            h3 { class: "feature-card__title", "{perk.title}" }
            p { class: "feature-card__description", "{perk.description}" }
        }
    }
}

/// Image tile with a caption overlay, used for the hero's highlighted items.
#[component]
pub fn HighlightTile(highlight: FeatureHighlight, index: usize) -> Element {
    rsx! {
        div { class: "highlight-tile reveal", style: stagger_style(0.2, 0.1, index),
            img {
                class: "highlight-tile__image",
                src: "{highlight.image}",
                alt: "{highlight.label}",
            }
            div { class: "highlight-tile__caption",
                span { class: "highlight-tile__label", "{highlight.label}" }
                span { class: "highlight-tile__description", "{highlight.description}" }
            }
        }
    }
}
