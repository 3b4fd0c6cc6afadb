//! Button-like affordances.
//!
//! Theme and intent are independent axes. Colors come from [`SURFACES`] and
//! the brand classes, so the token values reported in [`ActionStyle`] are
//! the ones its classes paint.
//!
//! [`SURFACES`]: super::SURFACES

use studydeck_tokens::colors::BRAND;
use studydeck_tokens::{ColorValue, Theme, ThemeColors};
use yew::{Classes, classes};

use super::{
    BRAND_FILL, BRAND_FILL_HOVER, BRAND_FOCUS, BRAND_TINT_RING, palette, surfaces,
};

/// Semantic intent of an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Intent {
    /// Main call to action.
    #[default]
    Primary,
    /// Neutral, bordered action.
    Secondary,
}

impl Intent {
    /// Every intent.
    pub const ALL: [Self; 2] = [Self::Primary, Self::Secondary];
}

/// Action sizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActionSize {
    /// Inline and toolbar actions.
    Sm,
    /// Default size.
    #[default]
    Md,
    /// Hero and empty-state actions.
    Lg,
}

impl ActionSize {
    /// Padding and text size classes.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1.5 text-sm",
            Self::Md => "px-4 py-2 text-sm",
            Self::Lg => "px-6 py-3 text-base",
        }
    }
}

const BASE: &str = "inline-flex items-center justify-center gap-2 rounded-lg font-medium transition-colors focus-visible:outline-none focus-visible:ring-2";
const DISABLED: &str = "cursor-not-allowed opacity-50";

/// Resolved style for an action.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionStyle {
    /// Class composition for the element.
    pub classes: Classes,
    /// Fill color token.
    pub background: ColorValue,
    /// Text color token.
    pub foreground: ColorValue,
    /// Outline color token, for bordered intents.
    pub border: Option<ColorValue>,
    /// Translucent tint layered over the fill, for tinted states.
    pub tint: Option<ColorValue>,
    /// Palette branch consulted.
    pub palette: &'static ThemeColors,
}

/// Compose the style for an action.
#[must_use]
pub fn action_style(theme: Theme, intent: Intent, size: ActionSize, disabled: bool) -> ActionStyle {
    let surface = surfaces(theme);
    let palette = palette(theme);
    let (colors, hover, focus) = match intent {
        Intent::Primary => (
            classes!(
                BRAND_FILL,
                surface.on_brand,
                if theme.is_dark() {
                    classes!("ring-1", BRAND_TINT_RING)
                } else {
                    classes!("shadow-sm")
                }
            ),
            BRAND_FILL_HOVER,
            BRAND_FOCUS,
        ),
        Intent::Secondary => (
            classes!("border", surface.border, surface.surface, surface.text_secondary),
            surface.surface_hover,
            surface.focus_ring,
        ),
    };
    let classes = classes!(
        BASE,
        size.as_class(),
        colors,
        focus,
        (!disabled).then_some(hover),
        disabled.then_some(DISABLED)
    );
    let (background, foreground, border, tint) = match (intent, theme) {
        (Intent::Primary, Theme::Light) => (BRAND.primary, palette.surface, None, None),
        (Intent::Primary, Theme::Dark) => (
            BRAND.primary,
            palette.background,
            None,
            Some(BRAND.primary_light),
        ),
        (Intent::Secondary, _) => (
            palette.surface,
            palette.text.secondary,
            Some(palette.border),
            None,
        ),
    };
    ActionStyle {
        classes,
        background,
        foreground,
        border,
        tint,
        palette,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::styles::test_support::{has_class, painted};
    use std::collections::HashSet;
    use studydeck_tokens::COLORS;

    #[test]
    fn theme_and_intent_form_four_distinct_compositions() {
        let mut seen = HashSet::new();
        for theme in Theme::ALL {
            for intent in Intent::ALL {
                let style = action_style(theme, intent, ActionSize::Md, false);
                assert!(seen.insert(style.classes.to_string()), "{theme} {intent:?}");
            }
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn classes_paint_the_reported_tokens() {
        for theme in Theme::ALL {
            for intent in Intent::ALL {
                let style = action_style(theme, intent, ActionSize::Md, false);
                let label = format!("{theme} {intent:?}");
                assert_eq!(
                    painted(&style.classes, "bg").as_deref(),
                    Some(style.background.as_str()),
                    "{label} background"
                );
                assert_eq!(
                    painted(&style.classes, "text").as_deref(),
                    Some(style.foreground.as_str()),
                    "{label} foreground"
                );
                assert_eq!(
                    painted(&style.classes, "border"),
                    style.border.map(|color| color.as_str().to_string()),
                    "{label} border"
                );
                assert_eq!(
                    painted(&style.classes, "ring"),
                    style.tint.map(|color| color.as_str().to_string()),
                    "{label} tint"
                );
            }
        }
    }

    #[test]
    fn dark_secondary_paints_dark_surface_tokens() {
        let style = action_style(Theme::Dark, Intent::Secondary, ActionSize::Md, false);
        assert_eq!(painted(&style.classes, "bg").as_deref(), Some("#141414"));
        assert_eq!(painted(&style.classes, "border").as_deref(), Some("#2e2e2e"));
        assert_eq!(painted(&style.classes, "text").as_deref(), Some("#a3a3a3"));
    }

    #[test]
    fn dark_primary_uses_brand_fill_with_tint() {
        let style = action_style(Theme::Dark, Intent::Primary, ActionSize::Md, false);
        assert_eq!(style.background, COLORS.brand.primary);
        assert_eq!(style.background.as_str(), "#10b981");
        assert_eq!(style.tint, Some(COLORS.brand.primary_light));
        assert!(has_class(&style.classes, "ring-1"));
        assert_eq!(style.palette, COLORS.themes.get(Theme::Dark));
    }

    #[test]
    fn light_secondary_is_bordered_and_neutral() {
        let secondary = action_style(Theme::Light, Intent::Secondary, ActionSize::Md, false);
        let primary = action_style(Theme::Light, Intent::Primary, ActionSize::Md, false);
        assert!(has_class(&secondary.classes, "border"));
        assert!(!has_class(&primary.classes, "border"));
        assert_eq!(secondary.border, Some(COLORS.themes.light.border));
        assert_eq!(secondary.background, COLORS.themes.light.surface);
        assert_ne!(secondary.background, primary.background);
    }

    #[test]
    fn disabled_drops_hover_and_dims() {
        let style = action_style(Theme::Light, Intent::Primary, ActionSize::Sm, true);
        assert!(has_class(&style.classes, "opacity-50"));
        assert!(!has_class(&style.classes, BRAND_FILL_HOVER));
        assert!(has_class(&style.classes, "px-3"));
    }

    #[test]
    fn composition_is_deterministic() {
        for theme in Theme::ALL {
            for intent in Intent::ALL {
                assert_eq!(
                    action_style(theme, intent, ActionSize::Lg, false),
                    action_style(theme, intent, ActionSize::Lg, false)
                );
            }
        }
    }
}
