use dioxus::prelude::*;

use crate::content::SITE;
use crate::core::nav::Section;
use crate::core::state::SiteEvent;
use crate::i18n;
use crate::t;
use crate::views::use_site;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

fn section_label(section: Section) -> String {
    match section {
        Section::Makers => t!("nav-makers"),
        Section::Products => t!("nav-products"),
        Section::Contact => t!("nav-contact"),
    }
}

/// Fixed page header: brand, section links, language picker and theme toggle. Below the
/// tablet breakpoint the links collapse into a panel opened by the menu button.
#[component]
pub fn Header() -> Element {
    let site = use_site();
    let menu_open = site.state().menu_open;

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header { id: "navbar", class: "header",
            div { class: "header__inner",
                nav { class: "header__nav",
                    h1 { class: "header__brand", "{SITE.config.brand}" }

                    button {
                        r#type: "button",
                        class: "header__menu-toggle",
                        aria_label: t!("nav-menu"),
                        aria_expanded: "{menu_open}",
                        onclick: move |_| site.dispatch(SiteEvent::ToggleMenu),
                        "☰"
                    }

                    div { class: "header__links",
                        for section in Section::ALL {
                            a {
                                key: "{section.anchor()}",
                                class: "nav-link",
                                href: section.href(),
                                {section_label(section)}
                            }
                        }
                    }

                    div { class: "header__actions",
                        LocaleSelect {}
                        ThemeToggle {}
                    }

                    if menu_open {
                        div { class: "header__mobile-panel",
                            for section in Section::ALL {
                                a {
                                    key: "{section.anchor()}",
                                    class: "nav-link",
                                    href: section.href(),
                                    onclick: move |_| site.dispatch(SiteEvent::Navigate(section)),
                                    {section_label(section)}
                                }
                            }
                            LocaleSelect {}
                            ThemeToggle {}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let site = use_site();
    let theme = site.state().theme;
    let label = if theme.is_dark() {
        t!("theme-to-light")
    } else {
        t!("theme-to-dark")
    };

    rsx! {
        button {
            r#type: "button",
            class: "header__theme-toggle",
            aria_label: "{label}",
            title: "{label}",
            onclick: move |_| site.dispatch(SiteEvent::ToggleTheme),
            "{theme.toggle_glyph()}"
        }
    }
}

#[component]
fn LocaleSelect() -> Element {
    let mut lang_code = use_context::<Signal<String>>();
    let langs = use_signal(i18n::available_languages);

    if langs.read().len() < 2 {
        return rsx! {};
    }

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => lang_code.set(val),
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    rsx! {
        div { class: "header__locale",
            label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
            select {
                id: "locale-select",
                value: "{lang_code()}",
                oninput: on_change,
                for code in langs() {
                    option { key: "{code}", value: "{code}", "{code}" }
                }
            }
        }
    }
}
