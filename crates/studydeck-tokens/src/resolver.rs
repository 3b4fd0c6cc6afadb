//! Theme resolution over token tables.
//!
//! # Design
//! - Fragments resolve through [`resolve`] with an already-typed [`Theme`];
//!   the match is exhaustive, so there is no fallthrough.
//! - String selectors from outside the process (storage, query strings)
//!   enter through [`resolve_str`], which rejects anything but `light` or
//!   `dark` instead of defaulting.

use tracing::warn;

use crate::colors::{COLORS, ColorTable, ColorValue, ThemeColors};
use crate::error::Result;
use crate::theme::{Theme, ThemePair};

/// A table with one branch per theme.
pub trait Themed {
    /// Value stored per theme.
    type Branch;

    /// Branch for `theme`.
    fn branch(&self, theme: Theme) -> &Self::Branch;
}

impl<T> Themed for ThemePair<T> {
    type Branch = T;

    fn branch(&self, theme: Theme) -> &T {
        self.get(theme)
    }
}

impl Themed for ColorTable {
    type Branch = ThemeColors;

    fn branch(&self, theme: Theme) -> &ThemeColors {
        self.themes.get(theme)
    }
}

/// Select the branch of `table` for `theme`.
#[must_use]
pub fn resolve<T: Themed + ?Sized>(theme: Theme, table: &T) -> &T::Branch {
    table.branch(theme)
}

/// Parse `selector` and select the matching branch of `table`.
///
/// # Errors
///
/// Returns [`crate::TokenError::InvalidTheme`] when `selector` is not `light` or `dark`.
pub fn resolve_str<'a, T: Themed + ?Sized>(selector: &str, table: &'a T) -> Result<&'a T::Branch> {
    let theme = selector.parse::<Theme>().inspect_err(|err| {
        warn!(selector, error = %err, "rejected theme selector");
    })?;
    Ok(table.branch(theme))
}

/// Look up a theme color by semantic name (e.g. `text.muted`) in [`COLORS`].
///
/// # Errors
///
/// Returns [`crate::TokenError::UnknownToken`] when `name` is not a theme color.
pub fn lookup_color(theme: Theme, name: &str) -> Result<ColorValue> {
    resolve(theme, &COLORS).get(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{DARK, LIGHT};
    use crate::error::TokenError;

    #[test]
    fn resolve_picks_the_matching_branch() {
        assert_eq!(resolve(Theme::Dark, &COLORS), &DARK);
        assert_eq!(resolve(Theme::Light, &COLORS), &LIGHT);
        assert_eq!(*resolve(Theme::Light, &ThemePair::new(1, 2)), 1);
    }

    #[test]
    fn resolve_is_idempotent() {
        for theme in Theme::ALL {
            let first = resolve(theme, &COLORS);
            let second = resolve(theme, &COLORS);
            assert!(std::ptr::eq(first, second));
        }
    }

    #[test]
    fn resolve_str_rejects_unknown_selectors() -> anyhow::Result<()> {
        assert_eq!(resolve_str("dark", &COLORS)?, &DARK);
        assert_eq!(
            resolve_str("midnight", &COLORS),
            Err(TokenError::InvalidTheme {
                value: "midnight".to_string()
            })
        );
        Ok(())
    }

    #[test]
    fn lookup_color_reports_shape_mismatch() -> anyhow::Result<()> {
        assert_eq!(lookup_color(Theme::Light, "border")?, LIGHT.border);
        assert!(matches!(
            lookup_color(Theme::Dark, "accent"),
            Err(TokenError::UnknownToken { .. })
        ));
        Ok(())
    }
}
