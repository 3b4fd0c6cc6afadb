//! Typography scales and text-style presets.
//!
//! Presets hold scale enums rather than literals, so a preset can only ever
//! reference a value that exists on its scale.

use serde::{Serialize, Serializer};

/// Font stacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FontFamilies {
    /// Interface text.
    pub sans: &'static str,
    /// Code and numeric tables.
    pub mono: &'static str,
}

/// Font size scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontSize {
    /// 0.75rem.
    Xs,
    /// 0.875rem.
    Sm,
    /// 1rem.
    Base,
    /// 1.125rem.
    Lg,
    /// 1.25rem.
    Xl,
    /// 1.5rem.
    Xl2,
    /// 1.875rem.
    Xl3,
    /// 2.25rem.
    Xl4,
}

impl FontSize {
    /// Every size, smallest first.
    pub const ALL: [Self; 8] = [
        Self::Xs,
        Self::Sm,
        Self::Base,
        Self::Lg,
        Self::Xl,
        Self::Xl2,
        Self::Xl3,
        Self::Xl4,
    ];

    /// Scale key (e.g. `2xl`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xl2 => "2xl",
            Self::Xl3 => "3xl",
            Self::Xl4 => "4xl",
        }
    }

    /// CSS length for the size.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Xs => "0.75rem",
            Self::Sm => "0.875rem",
            Self::Base => "1rem",
            Self::Lg => "1.125rem",
            Self::Xl => "1.25rem",
            Self::Xl2 => "1.5rem",
            Self::Xl3 => "1.875rem",
            Self::Xl4 => "2.25rem",
        }
    }

    /// Look a size up by scale key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.key() == key)
    }
}

/// Font weight scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// 400.
    Normal,
    /// 500.
    Medium,
    /// 600.
    Semibold,
    /// 700.
    Bold,
}

impl FontWeight {
    /// Every weight, lightest first.
    pub const ALL: [Self; 4] = [Self::Normal, Self::Medium, Self::Semibold, Self::Bold];

    /// Scale key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::Semibold => "semibold",
            Self::Bold => "bold",
        }
    }

    /// Numeric CSS weight.
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::Normal => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
        }
    }

    /// Look a weight up by scale key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|weight| weight.key() == key)
    }
}

/// Line height scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineHeight {
    /// 1.25.
    Tight,
    /// 1.375.
    Snug,
    /// 1.5.
    Normal,
    /// 1.625.
    Relaxed,
}

impl LineHeight {
    /// Every line height, tightest first.
    pub const ALL: [Self; 4] = [Self::Tight, Self::Snug, Self::Normal, Self::Relaxed];

    /// Scale key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Tight => "tight",
            Self::Snug => "snug",
            Self::Normal => "normal",
            Self::Relaxed => "relaxed",
        }
    }

    /// Unitless CSS line height.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Tight => "1.25",
            Self::Snug => "1.375",
            Self::Normal => "1.5",
            Self::Relaxed => "1.625",
        }
    }

    /// Look a line height up by scale key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|height| height.key() == key)
    }
}

impl Serialize for FontSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

impl Serialize for FontWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.value())
    }
}

impl Serialize for LineHeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

/// Font families plus the three scales.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Typography {
    /// Font stacks.
    pub font_family: FontFamilies,
    /// Size scale.
    pub font_size: &'static [FontSize],
    /// Weight scale.
    pub font_weight: &'static [FontWeight],
    /// Line height scale.
    pub line_height: &'static [LineHeight],
}

/// Base typography tables.
pub const TYPOGRAPHY: Typography = Typography {
    font_family: FontFamilies {
        sans: "Inter, ui-sans-serif, system-ui, -apple-system, sans-serif",
        mono: "\"JetBrains Mono\", ui-monospace, SFMono-Regular, monospace",
    },
    font_size: &FontSize::ALL,
    font_weight: &FontWeight::ALL,
    line_height: &LineHeight::ALL,
};

/// A fixed `(size, weight, line height)` triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Size from [`FontSize`].
    pub font_size: FontSize,
    /// Weight from [`FontWeight`].
    pub font_weight: FontWeight,
    /// Line height from [`LineHeight`].
    pub line_height: LineHeight,
}

impl TextStyle {
    const fn new(font_size: FontSize, font_weight: FontWeight, line_height: LineHeight) -> Self {
        Self {
            font_size,
            font_weight,
            line_height,
        }
    }
}

/// Named text-style presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyles {
    /// Page titles.
    pub h1: TextStyle,
    /// Section titles.
    pub h2: TextStyle,
    /// Card titles.
    pub h3: TextStyle,
    /// Body copy.
    pub body: TextStyle,
    /// Secondary body copy.
    pub body_small: TextStyle,
    /// Timestamps and footnotes.
    pub caption: TextStyle,
    /// Form labels and badges.
    pub label: TextStyle,
    /// Inline code.
    pub code: TextStyle,
}

impl TextStyles {
    /// Every preset as `(name, style)`.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, TextStyle); 8] {
        [
            ("h1", self.h1),
            ("h2", self.h2),
            ("h3", self.h3),
            ("body", self.body),
            ("bodySmall", self.body_small),
            ("caption", self.caption),
            ("label", self.label),
            ("code", self.code),
        ]
    }
}

/// Text-style presets used by headings, copy and labels.
pub const TEXT_STYLES: TextStyles = TextStyles {
    h1: TextStyle::new(FontSize::Xl2, FontWeight::Bold, LineHeight::Tight),
    h2: TextStyle::new(FontSize::Xl, FontWeight::Semibold, LineHeight::Tight),
    h3: TextStyle::new(FontSize::Lg, FontWeight::Semibold, LineHeight::Snug),
    body: TextStyle::new(FontSize::Base, FontWeight::Normal, LineHeight::Normal),
    body_small: TextStyle::new(FontSize::Sm, FontWeight::Normal, LineHeight::Normal),
    caption: TextStyle::new(FontSize::Xs, FontWeight::Medium, LineHeight::Normal),
    label: TextStyle::new(FontSize::Sm, FontWeight::Medium, LineHeight::Snug),
    code: TextStyle::new(FontSize::Sm, FontWeight::Normal, LineHeight::Relaxed),
};
