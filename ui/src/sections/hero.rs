use dioxus::prelude::*;

use crate::components::{FeatureCard, HighlightTile};
use crate::content::SITE;
use crate::core::nav::Section;
use crate::t;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero__backdrop", aria_hidden: "true",
                div { class: "hero__blob hero__blob--primary" }
                div { class: "hero__blob hero__blob--secondary" }
            }

            div { class: "container hero__content reveal",
                span { class: "hero__badge", {t!("hero-badge")} }
                h2 { class: "hero__title", {t!("hero-title")} }
                p { class: "hero__intro", {t!("hero-intro")} }

                div { class: "hero__actions",
                    a { class: "button button--primary", href: Section::Products.href(),
                        {t!("hero-cta-collection")}
                    }
                    a { class: "button button--outline", href: Section::Contact.href(),
                        {t!("hero-cta-contact")}
                    }
                }

                div { class: "hero__highlights",
                    for (index, highlight) in SITE.highlights.iter().enumerate() {
                        HighlightTile { key: "{index}", highlight: highlight.clone(), index }
                    }
                }

                div { class: "hero__perks",
                    for (index, perk) in SITE.perks.iter().enumerate() {
                        FeatureCard { key: "{index}", perk: perk.clone(), index }
                    }
                }
            }
        }
    }
}
