use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::components::Header;
use crate::contact::{use_contact_draft_provider, SharedSink};
use crate::content::SITE;
use crate::core::platform;
use crate::core::state::{Effect, SiteEvent, SiteState};
use crate::core::timing;
use crate::i18n;
use crate::sections::{Contact, Footer, Hero, Makers, Products};

use super::Splash;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Request to hide the acknowledgement `ticket` after `after_ms`.
struct AckTimer {
    ticket: u64,
    after_ms: u64,
}

/// Copyable handle to the root state. Components read the state through it and send
/// events with [`SiteHandle::dispatch`], which also runs the resulting effects.
#[derive(Clone, Copy)]
pub struct SiteHandle {
    state: Signal<SiteState>,
    ack_timers: Coroutine<AckTimer>,
    ack_ms: u64,
}

impl SiteHandle {
    pub fn state(&self) -> SiteState {
        self.state.read().clone()
    }

    pub fn dispatch(&self, event: SiteEvent) {
        let mut state = self.state;
        let effects = state.with_mut(|s| s.reduce(event, self.ack_ms));
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::ApplyTheme(theme) => platform::apply_theme_marker(theme),
            Effect::HideAckAfter { ticket, after_ms } => {
                self.ack_timers.send(AckTimer { ticket, after_ms })
            }
        }
    }
}

pub fn use_site() -> SiteHandle {
    use_context::<SiteHandle>()
}

/// Create the site state in the calling scope and share it with descendants.
///
/// Acknowledgement timers run in a coroutine of the calling scope, so they outlive
/// whichever component dispatched the event. A newer timer cancels the pending one.
pub fn use_site_provider(ack_ms: u64) -> SiteHandle {
    let state = use_signal(SiteState::default);
    let ack_timers = use_coroutine(move |mut rx: UnboundedReceiver<AckTimer>| async move {
        let site = consume_context::<SiteHandle>();
        let mut pending: Option<Task> = None;
        while let Some(AckTimer { ticket, after_ms }) = rx.next().await {
            if let Some(previous) = pending.take() {
                previous.cancel();
            }
            pending = Some(spawn(async move {
                timing::sleep_ms(after_ms).await;
                site.dispatch(SiteEvent::AckElapsed { ticket });
            }));
        }
    });
    use_context_provider(|| SiteHandle {
        state,
        ack_timers,
        ack_ms,
    })
}

/// Root view. Owns the UI state, the timers, the contact draft and the shared contact sink.
#[component]
pub fn Site() -> Element {
    i18n::init();

    let handle = use_site_provider(SITE.config.ack_ms);
    use_context_provider(SharedSink::default);
    use_contact_draft_provider();

    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    let splash_timer = use_hook(move || {
        let splash_ms = SITE.config.splash_ms;
        tracing::debug!(splash_ms, "site mounted");
        spawn(async move {
            timing::sleep_ms(splash_ms).await;
            handle.dispatch(SiteEvent::SplashElapsed);
        })
    });
    use_drop(move || splash_timer.cancel());

    let snapshot = handle.state();
    let lang = lang_code();
    let dir = i18n::text_direction(&lang);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{THEME_CSS_INLINE}" }
        }

        if snapshot.is_loading() {
            Splash { brand: SITE.config.brand.clone() }
        } else {
            // Keyed by language so every localized string re-renders on a switch; the
            // contact draft and ack timers are held above the key.
            div {
                key: "{lang}",
                class: "site",
                "data-theme": snapshot.theme.css_value(),
                lang: "{lang}",
                dir: dir,
                Header {}
                main { class: "site__main",
                    Hero {}
                    Makers {}
                    Products {}
                    Contact {}
                }
                Footer {}
            }
        }
    }
}
