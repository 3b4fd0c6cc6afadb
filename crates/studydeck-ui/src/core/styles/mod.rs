//! Theme-conditioned class compositions for the view fragments.
//!
//! # Design
//! - Every fragment is a pure function of a [`Theme`] plus its own display
//!   state; the Yew components only render what these return.
//! - Theme-dependent class fragments come from one table, [`SURFACES`],
//!   whose color classes name the theme-qualified custom properties that
//!   `tokens.css` declares from `studydeck_tokens::COLORS`. Palette changes
//!   happen in the token table only.
//! - Each style value carries the palette branch it consulted, so callers
//!   and tests can see which theme was used.

use studydeck_tokens::{COLORS, Theme, ThemeColors, ThemePair, resolve};

pub mod action;
pub mod conversation;
pub mod panel;
pub mod row;

/// Utility classes for a theme's surfaces and text.
///
/// Every color class is an arbitrary value over a theme-qualified custom
/// property from `tokens.css`, so the painted color is the token itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceClasses {
    /// Page background.
    pub background: &'static str,
    /// Card and panel fill.
    pub surface: &'static str,
    /// Slide-in panels and popovers.
    pub surface_elevated: &'static str,
    /// Hover fill for rows.
    pub surface_hover: &'static str,
    /// Border color.
    pub border: &'static str,
    /// Primary text.
    pub text_primary: &'static str,
    /// Secondary text.
    pub text_secondary: &'static str,
    /// Muted text.
    pub text_muted: &'static str,
    /// Text on a brand-filled element.
    pub on_brand: &'static str,
    /// Focus ring for neutral controls.
    pub focus_ring: &'static str,
    /// Dimming layer behind open panels.
    pub backdrop: &'static str,
}

impl SurfaceClasses {
    /// Color classes paired with the semantic token each one paints, in
    /// `THEME_COLOR_KEYS` order.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, &'static str); 8] {
        [
            ("background", self.background),
            ("surface", self.surface),
            ("surfaceElevated", self.surface_elevated),
            ("surfaceHover", self.surface_hover),
            ("border", self.border),
            ("text.primary", self.text_primary),
            ("text.secondary", self.text_secondary),
            ("text.muted", self.text_muted),
        ]
    }
}

/// Light and dark surface classes.
pub static SURFACES: ThemePair<SurfaceClasses> = ThemePair::new(
    SurfaceClasses {
        background: "bg-[color:var(--color-light-background)]",
        surface: "bg-[color:var(--color-light-surface)]",
        surface_elevated: "bg-[color:var(--color-light-surface-elevated)]",
        surface_hover: "hover:bg-[color:var(--color-light-surface-hover)]",
        border: "border-[color:var(--color-light-border)]",
        text_primary: "text-[color:var(--color-light-text-primary)]",
        text_secondary: "text-[color:var(--color-light-text-secondary)]",
        text_muted: "text-[color:var(--color-light-text-muted)]",
        on_brand: "text-[color:var(--color-light-surface)]",
        focus_ring: "focus-visible:ring-[color:var(--color-light-border)]",
        backdrop: "bg-black/30",
    },
    SurfaceClasses {
        background: "bg-[color:var(--color-dark-background)]",
        surface: "bg-[color:var(--color-dark-surface)]",
        surface_elevated: "bg-[color:var(--color-dark-surface-elevated)]",
        surface_hover: "hover:bg-[color:var(--color-dark-surface-hover)]",
        border: "border-[color:var(--color-dark-border)]",
        text_primary: "text-[color:var(--color-dark-text-primary)]",
        text_secondary: "text-[color:var(--color-dark-text-secondary)]",
        text_muted: "text-[color:var(--color-dark-text-muted)]",
        on_brand: "text-[color:var(--color-dark-background)]",
        focus_ring: "focus-visible:ring-[color:var(--color-dark-border)]",
        backdrop: "bg-black/60",
    },
);

/// Brand fill.
pub const BRAND_FILL: &str = "bg-[color:var(--color-brand-primary)]";
/// Brand fill on hover.
pub const BRAND_FILL_HOVER: &str = "hover:bg-[color:var(--color-brand-primary-hover)]";
/// Translucent brand fill for selected and toggled states.
pub const BRAND_TINT: &str = "bg-[color:var(--color-brand-primary-light)]";
/// Brand border for the active item in a list.
pub const BRAND_BORDER: &str = "border-[color:var(--color-brand-primary)]";
/// Brand ring for selected items.
pub const BRAND_RING: &str = "ring-[color:var(--color-brand-primary)]";
/// Translucent brand ring layered over a brand fill.
pub const BRAND_TINT_RING: &str = "ring-[color:var(--color-brand-primary-light)]";
/// Focus ring for brand controls.
pub const BRAND_FOCUS: &str = "focus-visible:ring-[color:var(--color-brand-primary)]";

/// Surface classes for `theme`.
#[must_use]
pub fn surfaces(theme: Theme) -> &'static SurfaceClasses {
    resolve(theme, &SURFACES)
}

/// Color tokens for `theme`.
#[must_use]
pub fn palette(theme: Theme) -> &'static ThemeColors {
    resolve(theme, &COLORS)
}

#[cfg(test)]
pub(crate) mod test_support {
    use studydeck_tokens::export::root_block;
    use yew::Classes;

    /// Whether `classes` contains the single class `name`.
    pub(crate) fn has_class(classes: &Classes, name: &str) -> bool {
        classes.to_string().split_whitespace().any(|class| class == name)
    }

    /// Custom property named by an unprefixed `{utility}-[color:var(--x)]` class.
    pub(crate) fn color_var(class: &str, utility: &str) -> Option<String> {
        class
            .strip_prefix(utility)?
            .strip_prefix("-[color:var(")?
            .strip_suffix(")]")
            .map(str::to_string)
    }

    /// Literal color `classes` paint through `utility`, resolved against the
    /// exported `:root` block.
    pub(crate) fn painted(classes: &Classes, utility: &str) -> Option<String> {
        let var = classes
            .to_string()
            .split_whitespace()
            .find_map(|class| color_var(class, utility))?;
        let prefix = format!("{var}: ");
        root_block().lines().find_map(|line| {
            line.trim()
                .strip_prefix(prefix.as_str())?
                .strip_suffix(';')
                .map(str::to_string)
        })
    }
}
