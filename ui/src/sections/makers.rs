use dioxus::prelude::*;

use crate::content::SITE;
use crate::core::nav::Section;
use crate::t;

/// Cards slide in from alternating sides.
fn maker_card_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "maker-card reveal reveal--from-left"
    } else {
        "maker-card reveal reveal--from-right"
    }
}

#[component]
pub fn Makers() -> Element {
    rsx! {
        section { id: Section::Makers.anchor(), class: "section section--tinted",
            div { class: "container",
                h2 { class: "section-title", {t!("makers-title")} }
                p { class: "section-subtitle", {t!("makers-subtitle")} }

                div { class: "makers__grid",
                    for (index, maker) in SITE.makers.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: maker_card_class(index),
                            img { class: "maker-card__photo", src: "{maker.photo}", alt: "{maker.name}" }
                            h3 { class: "maker-card__name", "{maker.name}" }
                            p { class: "maker-card__bio", "{maker.bio}" }
                        }
                    }
                }
            }
        }
    }
}
