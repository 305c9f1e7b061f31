use dioxus::prelude::*;

/// Full-screen splash shown while the loading gate is closed.
#[component]
pub fn Splash(brand: String) -> Element {
    rsx! {
        div {
            class: "splash",
            role: "status",
            aria_label: crate::t!("splash-loading"),
            span { class: "splash__mark", aria_hidden: "true", "🧶" }
            h2 { class: "splash__brand", "{brand}" }
        }
    }
}
