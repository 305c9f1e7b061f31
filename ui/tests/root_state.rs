//! State held by the root view survives its consumers being unmounted.
#![cfg(not(target_arch = "wasm32"))]

use std::cell::{Cell, RefCell};
use std::time::Duration;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use ui::contact::{use_contact_draft_provider, ContactDraft, Field};
use ui::core::state::SiteEvent;
use ui::views::{use_site, use_site_provider};

const ACK_MS: u64 = 20;

thread_local! {
    static ACK_SHOWN: Cell<bool> = const { Cell::new(false) };
    static ACK_VISIBLE: Cell<bool> = const { Cell::new(false) };
    static FORM_MOUNTS: Cell<u32> = const { Cell::new(0) };
    static TYPED_NAME: RefCell<String> = const { RefCell::new(String::new()) };
}

fn site_root() -> Element {
    let site = use_site_provider(ACK_MS);
    let mut form_mounted = use_signal(|| true);

    let visible = site.state().ack.visible;
    ACK_VISIBLE.with(|v| v.set(visible));
    if visible {
        ACK_SHOWN.with(|v| v.set(true));
    }

    rsx! {
        if form_mounted() {
            SubmitOnce { on_sent: move |_| form_mounted.set(false) }
        }
    }
}

#[component]
fn SubmitOnce(on_sent: EventHandler<()>) -> Element {
    let site = use_site();
    use_hook(move || {
        site.dispatch(SiteEvent::SplashElapsed);
        site.dispatch(SiteEvent::FormAccepted);
        on_sent.call(());
    });
    rsx! { "sending" }
}

#[tokio::test]
async fn ack_hides_after_submitting_component_unmounts() {
    let mut dom = VirtualDom::new(site_root);
    dom.rebuild_in_place();

    let settled = tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            dom.render_immediate(&mut NoOpMutations);
            if ACK_SHOWN.with(Cell::get) && !ACK_VISIBLE.with(Cell::get) {
                break;
            }
            dom.wait_for_work().await;
        }
    })
    .await;

    assert!(ACK_SHOWN.with(Cell::get), "acknowledgement was never shown");
    assert!(settled.is_ok(), "acknowledgement stayed visible");
}

fn keyed_page() -> Element {
    use_contact_draft_provider();
    let mut lang = use_signal(|| "en-US".to_string());

    rsx! {
        div { key: "{lang}",
            NameInput { on_typed: move |_| lang.set("ar-EG".to_string()) }
        }
    }
}

#[component]
fn NameInput(on_typed: EventHandler<()>) -> Element {
    let draft = use_context::<ContactDraft>();
    use_hook(move || {
        FORM_MOUNTS.with(|m| m.set(m.get() + 1));
        if draft.form().name.is_empty() {
            draft.edit(Field::Name, "Amal".to_string());
            on_typed.call(());
        }
    });
    TYPED_NAME.with(|n| *n.borrow_mut() = draft.form().name);
    rsx! { "name" }
}

#[tokio::test]
async fn draft_survives_language_remount() {
    let mut dom = VirtualDom::new(keyed_page);
    dom.rebuild_in_place();
    dom.render_immediate(&mut NoOpMutations);

    assert_eq!(FORM_MOUNTS.with(Cell::get), 2, "form was not remounted");
    assert_eq!(TYPED_NAME.with(|n| n.borrow().clone()), "Amal");
}
