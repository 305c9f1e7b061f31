//! Light/dark theme selection.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Class toggled on `<html>`; every stylesheet variant keys off it.
    pub const MARKER_CLASS: &'static str = "dark";

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Value for the site root's `data-theme` attribute.
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Glyph for the toggle button: offer the sun while dark, the moon while light.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    /// Script that sets the marker class on the document root to match this theme.
    pub fn marker_script(self) -> String {
        format!(
            "document.documentElement.classList.toggle('{}', {});",
            Self::MARKER_CLASS,
            self.is_dark()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_eq!(theme.toggled().toggled().marker_script(), theme.marker_script());
        }
    }

    #[test]
    fn marker_script_forces_class_state() {
        assert_eq!(
            Theme::Dark.marker_script(),
            "document.documentElement.classList.toggle('dark', true);"
        );
        assert!(Theme::Light.marker_script().ends_with("false);"));
    }
}
