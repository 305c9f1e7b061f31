//! Platform boundary. Side effects that differ between the web build and the native
//! shells live here; everything else in the crate is target-agnostic.

use thiserror::Error;

use super::theme::Theme;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no browser window available")]
    NoWindow,
    #[error("could not open {url}: {reason}")]
    Open { url: String, reason: String },
}

/// Open `url` in a new browsing context (a new tab on web, the system browser natively).
#[cfg(target_arch = "wasm32")]
pub fn open_external(url: &str) -> Result<(), PlatformError> {
    let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(PlatformError::Open {
            url: url.to_string(),
            reason: "blocked by the browser".to_string(),
        }),
        Err(err) => Err(PlatformError::Open {
            url: url.to_string(),
            reason: format!("{err:?}"),
        }),
    }
}

/// Open `url` in a new browsing context (a new tab on web, the system browser natively).
#[cfg(not(target_arch = "wasm32"))]
pub fn open_external(url: &str) -> Result<(), PlatformError> {
    webbrowser::open(url).map_err(|err| PlatformError::Open {
        url: url.to_string(),
        reason: err.to_string(),
    })
}

/// Set the theme marker class on `<html>`. Goes through the renderer's JS bridge, so it
/// works the same in the browser and in the desktop webview.
pub fn apply_theme_marker(theme: Theme) {
    tracing::debug!(theme = theme.css_value(), "applying theme marker");
    // The script returns nothing, so the eval handle is not awaited.
    let _ = dioxus::document::eval(&theme.marker_script());
}
