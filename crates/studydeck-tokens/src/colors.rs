//! Color palette for the Studydeck dashboard.
//!
//! Theme-dependent surfaces live in [`ThemeColors`], one per theme, with an
//! identical shape. Brand, semantic and module colors are shared by both
//! themes.

use serde::Serialize;

use crate::error::{Result, TokenError};
use crate::theme::ThemePair;

/// A literal color value (hex or `rgba(...)`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColorValue(&'static str);

impl ColorValue {
    /// Wrap a literal color string.
    #[must_use]
    pub const fn new(literal: &'static str) -> Self {
        Self(literal)
    }

    /// The literal as written in the table.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Whether the literal is a `#rgb`, `#rrggbb`, `#rrggbbaa` or `rgba(r, g, b, a)` color.
    #[must_use]
    pub fn is_valid_literal(self) -> bool {
        is_hex_color(self.0) || is_rgba_color(self.0)
    }
}

fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}

fn is_rgba_color(value: &str) -> bool {
    let Some(inner) = value
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return false;
    };
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let [r, g, b, alpha] = parts.as_slice() else {
        return false;
    };
    let channels_ok = [r, g, b].iter().all(|channel| channel.parse::<u8>().is_ok());
    let alpha_ok = alpha
        .parse::<f32>()
        .is_ok_and(|alpha| (0.0..=1.0).contains(&alpha));
    channels_ok && alpha_ok
}

/// Text colors for a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TextColors {
    /// Headings and body copy.
    pub primary: ColorValue,
    /// Supporting copy.
    pub secondary: ColorValue,
    /// Timestamps, placeholders and other low-emphasis text.
    pub muted: ColorValue,
}

/// Surface, border and text colors for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Page background.
    pub background: ColorValue,
    /// Cards and panels.
    pub surface: ColorValue,
    /// Popovers and slide-in panels above a surface.
    pub surface_elevated: ColorValue,
    /// Hover state for rows on a surface.
    pub surface_hover: ColorValue,
    /// Dividers and outlines.
    pub border: ColorValue,
    /// Text colors.
    pub text: TextColors,
}

/// Semantic names of every [`ThemeColors`] entry, in [`ThemeColors::entries`] order.
pub const THEME_COLOR_KEYS: [&str; 8] = [
    "background",
    "surface",
    "surfaceElevated",
    "surfaceHover",
    "border",
    "text.primary",
    "text.secondary",
    "text.muted",
];

impl ThemeColors {
    /// Every entry as `(semantic name, value)`, in [`THEME_COLOR_KEYS`] order.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, ColorValue); 8] {
        [
            (THEME_COLOR_KEYS[0], self.background),
            (THEME_COLOR_KEYS[1], self.surface),
            (THEME_COLOR_KEYS[2], self.surface_elevated),
            (THEME_COLOR_KEYS[3], self.surface_hover),
            (THEME_COLOR_KEYS[4], self.border),
            (THEME_COLOR_KEYS[5], self.text.primary),
            (THEME_COLOR_KEYS[6], self.text.secondary),
            (THEME_COLOR_KEYS[7], self.text.muted),
        ]
    }

    /// Look up an entry by semantic name (e.g. `text.primary`).
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::UnknownToken`] when `name` is not a theme color.
    pub fn get(&self, name: &str) -> Result<ColorValue> {
        self.entries()
            .into_iter()
            .find_map(|(key, value)| (key == name).then_some(value))
            .ok_or_else(|| TokenError::UnknownToken {
                path: name.to_string(),
            })
    }
}

/// Brand colors shared by both themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColors {
    /// Primary accent used by call-to-action affordances.
    pub primary: ColorValue,
    /// Hover shade of the primary accent.
    pub primary_hover: ColorValue,
    /// Translucent tint of the primary accent.
    pub primary_light: ColorValue,
    /// Secondary accent.
    pub secondary: ColorValue,
}

/// Status colors shared by both themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SemanticColors {
    /// Completed or healthy state.
    pub success: ColorValue,
    /// Attention needed.
    pub warning: ColorValue,
    /// Failure state.
    pub error: ColorValue,
    /// Neutral information.
    pub info: ColorValue,
}

/// Accent colors for dashboard modules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ModuleColors {
    /// Courses, grades and assignments.
    pub academics: ColorValue,
    /// Health and wellbeing check-ins.
    pub wellness: ColorValue,
    /// Research sessions.
    pub research: ColorValue,
    /// Internships and applications.
    pub career: ColorValue,
    /// Clubs and events.
    pub social: ColorValue,
}

impl ModuleColors {
    /// Every module color as `(name, value)`.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, ColorValue); 5] {
        [
            ("academics", self.academics),
            ("wellness", self.wellness),
            ("research", self.research),
            ("career", self.career),
            ("social", self.social),
        ]
    }
}

/// The complete color table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColorTable {
    /// Theme-dependent surfaces and text.
    pub themes: ThemePair<ThemeColors>,
    /// Brand accents.
    pub brand: BrandColors,
    /// Status colors.
    pub semantic: SemanticColors,
    /// Module accents.
    pub modules: ModuleColors,
}

/// Dark theme surfaces.
pub const DARK: ThemeColors = ThemeColors {
    background: ColorValue::new("#0a0a0a"),
    surface: ColorValue::new("#141414"),
    surface_elevated: ColorValue::new("#1f1f1f"),
    surface_hover: ColorValue::new("#262626"),
    border: ColorValue::new("#2e2e2e"),
    text: TextColors {
        primary: ColorValue::new("#fafafa"),
        secondary: ColorValue::new("#a3a3a3"),
        muted: ColorValue::new("#737373"),
    },
};

/// Light theme surfaces.
pub const LIGHT: ThemeColors = ThemeColors {
    background: ColorValue::new("#f9fafb"),
    surface: ColorValue::new("#ffffff"),
    surface_elevated: ColorValue::new("#ffffff"),
    surface_hover: ColorValue::new("#f3f4f6"),
    border: ColorValue::new("#e5e7eb"),
    text: TextColors {
        primary: ColorValue::new("#111827"),
        secondary: ColorValue::new("#4b5563"),
        muted: ColorValue::new("#9ca3af"),
    },
};

/// Brand accents.
pub const BRAND: BrandColors = BrandColors {
    primary: ColorValue::new("#10b981"),
    primary_hover: ColorValue::new("#059669"),
    primary_light: ColorValue::new("rgba(16, 185, 129, 0.1)"),
    secondary: ColorValue::new("#6366f1"),
};

/// Status colors.
pub const SEMANTIC: SemanticColors = SemanticColors {
    success: ColorValue::new("#22c55e"),
    warning: ColorValue::new("#f59e0b"),
    error: ColorValue::new("#ef4444"),
    info: ColorValue::new("#3b82f6"),
};

/// Module accents.
pub const MODULES: ModuleColors = ModuleColors {
    academics: ColorValue::new("#3b82f6"),
    wellness: ColorValue::new("#ec4899"),
    research: ColorValue::new("#8b5cf6"),
    career: ColorValue::new("#f59e0b"),
    social: ColorValue::new("#06b6d4"),
};

/// Palette used across the UI.
pub static COLORS: ColorTable = ColorTable {
    themes: ThemePair::new(LIGHT, DARK),
    brand: BRAND,
    semantic: SEMANTIC,
    modules: MODULES,
};
