//! Theme selection as seen by the hosting app.
//!
//! # Design
//! - The app owns the current [`Theme`] and passes it by value to every
//!   fragment; nothing here keeps global state.
//! - Persisted selectors go through the strict parser. A rejected value is
//!   reported to the caller, which decides how to log it and what to start with.

use studydeck_tokens::{Theme, TokenError};

/// Storage key for the persisted theme preference.
pub const THEME_KEY: &str = "studydeck.theme";

/// Resolve the starting theme from a persisted selector.
///
/// A missing value starts with [`Theme::default`].
///
/// # Errors
///
/// Returns [`TokenError::InvalidTheme`] when a value was stored but is not a theme.
pub fn initial_theme(stored: Option<&str>) -> Result<Theme, TokenError> {
    stored.map_or_else(|| Ok(Theme::default()), str::parse)
}

/// Accessible label for the theme toggle button.
#[must_use]
pub const fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    }
}

/// Short label for the current theme.
#[must_use]
pub const fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Light",
        Theme::Dark => "Dark",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_preference_starts_dark() {
        assert_eq!(initial_theme(None), Ok(Theme::Dark));
    }

    #[test]
    fn stored_preference_is_parsed_strictly() {
        assert_eq!(initial_theme(Some("light")), Ok(Theme::Light));
        assert_eq!(
            initial_theme(Some("studydeck-dark")),
            Err(TokenError::InvalidTheme {
                value: "studydeck-dark".to_string()
            })
        );
    }

    #[test]
    fn labels_follow_the_toggle() {
        for theme in Theme::ALL {
            assert_ne!(theme_label(theme), theme_label(theme.toggle()));
            assert_ne!(toggle_label(theme), toggle_label(theme.toggle()));
        }
        assert_eq!(toggle_label(Theme::Dark), "Switch to light theme");
    }
}
