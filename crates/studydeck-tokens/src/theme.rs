//! Theme selector and the per-theme lookup pair.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// Light or dark presentation theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Theme {
    /// Light theme.
    Light,
    /// Dark theme.
    #[default]
    Dark,
}

impl Theme {
    /// Every supported theme, light first.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// String identifier used in CSS datasets and persisted preferences.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme; the only transition the selector has.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark theme.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl Display for Theme {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = TokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(TokenError::InvalidTheme {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<&str> for Theme {
    type Error = TokenError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Theme {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Theme> for &'static str {
    fn from(theme: Theme) -> Self {
        theme.as_str()
    }
}

/// A value defined once per theme.
///
/// Both fields are required, so a table built from `ThemePair` can never be
/// partially defined across themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ThemePair<T> {
    /// Value used by [`Theme::Light`].
    pub light: T,
    /// Value used by [`Theme::Dark`].
    pub dark: T,
}

impl<T> ThemePair<T> {
    /// Build a pair from its two branches.
    #[must_use]
    pub const fn new(light: T, dark: T) -> Self {
        Self { light, dark }
    }

    /// Select the branch for `theme`.
    #[must_use]
    pub const fn get(&self, theme: Theme) -> &T {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    /// Derive a new pair by applying `f` to both branches.
    #[must_use]
    pub fn map<U>(&self, mut f: impl FnMut(Theme, &T) -> U) -> ThemePair<U> {
        ThemePair {
            light: f(Theme::Light, &self.light),
            dark: f(Theme::Dark, &self.dark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_to_str() {
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn toggle_alternates_without_terminal_state() {
        for theme in Theme::ALL {
            assert_ne!(theme.toggle(), theme);
            assert_eq!(theme.toggle().toggle(), theme);
        }
    }

    #[test]
    fn parse_accepts_only_exact_identifiers() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(Theme::try_from("dark"), Ok(Theme::Dark));
        for bad in ["", "Dark", "LIGHT", " light", "system", "studydeck-dark"] {
            assert_eq!(
                bad.parse::<Theme>(),
                Err(TokenError::InvalidTheme {
                    value: bad.to_string()
                })
            );
        }
    }

    #[test]
    fn serde_round_trips_through_the_strict_parser() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_string(&Theme::Light)?, "\"light\"");
        assert_eq!(serde_json::from_str::<Theme>("\"dark\"")?, Theme::Dark);
        assert!(serde_json::from_str::<Theme>("\"sepia\"").is_err());
        Ok(())
    }

    #[test]
    fn pair_selects_and_maps_per_theme() {
        let pair = ThemePair::new("sun", "moon");
        assert_eq!(*pair.get(Theme::Light), "sun");
        assert_eq!(*pair.get(Theme::Dark), "moon");

        let tagged = pair.map(|theme, value| format!("{theme}:{value}"));
        assert_eq!(tagged.light, "light:sun");
        assert_eq!(tagged.dark, "dark:moon");
    }
}
