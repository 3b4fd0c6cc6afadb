//! List rows: timeline entries and research-session entries.

use studydeck_tokens::{Theme, ThemeColors};
use yew::{Classes, classes};

use super::{BRAND_BORDER, BRAND_RING, BRAND_TINT, palette, surfaces};
use crate::models::ModuleKind;

/// Resolved classes for a list row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowStyle {
    /// Row container.
    pub container: Classes,
    /// Headline text.
    pub title: Classes,
    /// Supporting line.
    pub detail: Classes,
    /// Timestamp or counter.
    pub meta: Classes,
    /// Palette branch consulted.
    pub palette: &'static ThemeColors,
}

/// Style for a timeline entry; `active` highlights the current item.
#[must_use]
pub fn timeline_row_style(theme: Theme, active: bool) -> RowStyle {
    let surface = surfaces(theme);
    RowStyle {
        container: classes!(
            "relative",
            "flex",
            "gap-4",
            "border-l-2",
            "py-3",
            "pl-4",
            "transition-colors",
            if active { BRAND_BORDER } else { surface.border },
            surface.surface_hover
        ),
        title: classes!("text-sm", "font-medium", surface.text_primary),
        detail: classes!("text-sm", surface.text_secondary),
        meta: classes!("text-xs", "tabular-nums", surface.text_muted),
        palette: palette(theme),
    }
}

/// Classes for the module marker dot on a timeline entry.
#[must_use]
pub fn timeline_marker(module: ModuleKind) -> Classes {
    classes!(
        "absolute",
        "-left-[5px]",
        "top-4",
        "h-2",
        "w-2",
        "rounded-full",
        module.marker_class()
    )
}

/// Style for a research-session entry; `selected` marks the open session.
#[must_use]
pub fn session_row_style(theme: Theme, selected: bool) -> RowStyle {
    let surface = surfaces(theme);
    let state = if selected {
        classes!(BRAND_TINT, "ring-1", BRAND_RING)
    } else {
        classes!("border", surface.border, surface.surface_hover)
    };
    RowStyle {
        container: classes!(
            "flex",
            "w-full",
            "flex-col",
            "gap-1",
            "rounded-lg",
            "px-3",
            "py-2",
            "text-left",
            "transition-colors",
            state
        ),
        title: classes!("truncate", "text-sm", "font-medium", surface.text_primary),
        detail: classes!("line-clamp-2", "text-xs", surface.text_secondary),
        meta: classes!("text-xs", surface.text_muted),
        palette: palette(theme),
    }
}
