//! Slide-in panels: the session list and the session detail view.
//!
//! Visibility and theme are independent inputs; every combination yields a
//! complete style.

use studydeck_tokens::{Theme, ThemeColors};
use yew::{Classes, classes};

use super::{palette, surfaces};

/// Edge a panel slides in from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelSide {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

/// Which slide-in panel is being styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKind {
    /// List of research sessions.
    SessionList,
    /// Detail view of one session.
    SessionDetail,
}

impl PanelKind {
    /// Edge the panel is anchored to.
    #[must_use]
    pub const fn side(self) -> PanelSide {
        match self {
            Self::SessionList => PanelSide::Left,
            Self::SessionDetail => PanelSide::Right,
        }
    }

    const fn width(self) -> &'static str {
        match self {
            Self::SessionList => "w-80",
            Self::SessionDetail => "w-[28rem]",
        }
    }
}

/// Resolved classes for a slide-in panel.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelStyle {
    /// Sliding container.
    pub container: Classes,
    /// Dimming layer; present only while open.
    pub backdrop: Option<Classes>,
    /// Header row.
    pub header: Classes,
    /// Header title.
    pub title: Classes,
    /// Close button.
    pub close_button: Classes,
    /// Scrollable body.
    pub body: Classes,
    /// Value for `aria-hidden` on the container.
    pub hidden: bool,
    /// Palette branch consulted.
    pub palette: &'static ThemeColors,
}

/// Compose the style for `kind` in `theme`, open or closed.
#[must_use]
pub fn panel_style(theme: Theme, open: bool, kind: PanelKind) -> PanelStyle {
    let surface = surfaces(theme);
    let (anchor, edge_border, offscreen) = match kind.side() {
        PanelSide::Left => ("left-0", "border-r", "-translate-x-full"),
        PanelSide::Right => ("right-0", "border-l", "translate-x-full"),
    };
    let visibility = if open {
        classes!("translate-x-0")
    } else {
        classes!(offscreen, "pointer-events-none")
    };
    PanelStyle {
        container: classes!(
            "fixed",
            "inset-y-0",
            "z-40",
            "flex",
            "max-w-full",
            "flex-col",
            "shadow-xl",
            "transition-transform",
            "duration-300",
            kind.width(),
            anchor,
            edge_border,
            surface.border,
            surface.surface_elevated,
            visibility
        ),
        backdrop: open.then(|| classes!("fixed", "inset-0", "z-30", surface.backdrop)),
        header: classes!(
            "flex",
            "items-center",
            "justify-between",
            "border-b",
            "px-5",
            "py-4",
            surface.border
        ),
        title: classes!("text-base", "font-semibold", surface.text_primary),
        close_button: classes!(
            "rounded-md",
            "p-1.5",
            surface.text_muted,
            surface.surface_hover
        ),
        body: classes!("flex-1", "overflow-y-auto", "px-5", "py-4", "space-y-2"),
        hidden: !open,
        palette: palette(theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::styles::test_support::{has_class, painted};

    const KINDS: [PanelKind; 2] = [PanelKind::SessionList, PanelKind::SessionDetail];

    #[test]
    fn all_visibility_theme_combinations_are_complete() {
        for kind in KINDS {
            for theme in Theme::ALL {
                for open in [true, false] {
                    let style = panel_style(theme, open, kind);
                    assert_eq!(style.hidden, !open);
                    assert_eq!(style.backdrop.is_some(), open);
                    assert!(has_class(&style.container, surfaces(theme).surface_elevated));
                    assert!(std::ptr::eq(style.palette, palette(theme)));
                    assert_eq!(
                        painted(&style.container, "bg").as_deref(),
                        Some(style.palette.surface_elevated.as_str())
                    );
                    assert_eq!(
                        painted(&style.title, "text").as_deref(),
                        Some(style.palette.text.primary.as_str())
                    );
                }
            }
        }
    }

    #[test]
    fn closed_panels_slide_off_their_own_edge() {
        let list = panel_style(Theme::Light, false, PanelKind::SessionList);
        let detail = panel_style(Theme::Dark, false, PanelKind::SessionDetail);
        assert!(has_class(&list.container, "-translate-x-full"));
        assert!(has_class(&list.container, "left-0"));
        assert!(has_class(&detail.container, "translate-x-full"));
        assert!(has_class(&detail.container, "right-0"));
        assert!(has_class(&detail.container, "pointer-events-none"));
    }

    #[test]
    fn toggling_visibility_keeps_theme_classes() {
        for theme in Theme::ALL {
            let open = panel_style(theme, true, PanelKind::SessionDetail);
            let closed = panel_style(theme, false, PanelKind::SessionDetail);
            assert_eq!(open.header, closed.header);
            assert_eq!(open.title, closed.title);
            assert!(has_class(&open.container, "translate-x-0"));
        }
    }

    #[test]
    fn backdrop_tracks_theme() -> anyhow::Result<()> {
        let light = panel_style(Theme::Light, true, PanelKind::SessionList)
            .backdrop
            .ok_or_else(|| anyhow::anyhow!("light backdrop missing"))?;
        let dark = panel_style(Theme::Dark, true, PanelKind::SessionList)
            .backdrop
            .ok_or_else(|| anyhow::anyhow!("dark backdrop missing"))?;
        assert!(has_class(&light, "bg-black/30"));
        assert!(has_class(&dark, "bg-black/60"));
        Ok(())
    }
}
