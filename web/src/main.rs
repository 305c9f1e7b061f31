use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::views::Site;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger init failed: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Ulfa Crochet" }
        document::Link { rel: "icon", href: FAVICON }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

        Site {}
    }
}
