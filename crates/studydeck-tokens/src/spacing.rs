//! Spacing scale and the layout patterns derived from it.

use serde::Serialize;

/// A CSS length drawn from the spacing scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Length(&'static str);

impl Length {
    /// The literal length (e.g. `"1.5rem"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Base spacing scale as `(step, length)`, ascending.
pub const SPACING: [(u8, Length); 11] = [
    (0, Length("0")),
    (1, Length("0.25rem")),
    (2, Length("0.5rem")),
    (3, Length("0.75rem")),
    (4, Length("1rem")),
    (5, Length("1.25rem")),
    (6, Length("1.5rem")),
    (8, Length("2rem")),
    (10, Length("2.5rem")),
    (12, Length("3rem")),
    (16, Length("4rem")),
];

/// Length for a scale step, if the step exists.
#[must_use]
pub const fn length(step: u8) -> Option<Length> {
    let mut index = 0;
    while index < SPACING.len() {
        if SPACING[index].0 == step {
            return Some(SPACING[index].1);
        }
        index += 1;
    }
    None
}

// Only used in const items, so an unknown step fails the build.
const fn step(value: u8) -> Length {
    match length(value) {
        Some(length) => length,
        None => panic!("spacing step is not on the base scale"),
    }
}

/// Padding inside cards and panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardPadding {
    /// Compact cards (list rows).
    pub sm: Length,
    /// Regular cards.
    pub default: Length,
    /// Feature cards and slide-in panels.
    pub lg: Length,
}

/// Gaps between siblings in flex and grid layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GapScale {
    /// Icon and label.
    pub xs: Length,
    /// Inline controls.
    pub sm: Length,
    /// List items.
    pub md: Length,
    /// Cards in a grid.
    pub lg: Length,
}

/// Vertical rhythm between page sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SectionSpacing {
    /// Between related groups.
    pub sm: Length,
    /// Between sections.
    pub md: Length,
    /// Between page regions.
    pub lg: Length,
}

/// Named layout patterns expressed in terms of the base scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingPatterns {
    /// Card padding.
    pub card_padding: CardPadding,
    /// Sibling gaps.
    pub gap: GapScale,
    /// Section spacing.
    pub section: SectionSpacing,
}

impl SpacingPatterns {
    /// Every pattern as `(dotted name, length)`.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, Length); 10] {
        [
            ("cardPadding.sm", self.card_padding.sm),
            ("cardPadding.default", self.card_padding.default),
            ("cardPadding.lg", self.card_padding.lg),
            ("gap.xs", self.gap.xs),
            ("gap.sm", self.gap.sm),
            ("gap.md", self.gap.md),
            ("gap.lg", self.gap.lg),
            ("section.sm", self.section.sm),
            ("section.md", self.section.md),
            ("section.lg", self.section.lg),
        ]
    }
}

/// Layout patterns used by cards, lists and page sections.
pub const SPACING_PATTERNS: SpacingPatterns = SpacingPatterns {
    card_padding: CardPadding {
        sm: step(4),
        default: step(6),
        lg: step(8),
    },
    gap: GapScale {
        xs: step(1),
        sm: step(2),
        md: step(4),
        lg: step(6),
    },
    section: SectionSpacing {
        sm: step(8),
        md: step(12),
        lg: step(16),
    },
};
