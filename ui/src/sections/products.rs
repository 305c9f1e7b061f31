use dioxus::prelude::*;

use crate::components::ProductCard;
use crate::content::SITE;
use crate::core::nav::Section;
use crate::t;

#[component]
pub fn Products() -> Element {
    rsx! {
        section { id: Section::Products.anchor(), class: "section section--tinted",
            div { class: "container",
                h2 { class: "section-title", {t!("products-title")} }
                p { class: "section-subtitle", {t!("products-subtitle")} }

                div { class: "products__grid",
                    for (index, product) in SITE.products.iter().enumerate() {
                        ProductCard { key: "{index}", product: product.clone(), index }
                    }
                }
            }
        }
    }
}
