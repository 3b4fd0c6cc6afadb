//! Conversation thread with a collapsible notes panel.

use studydeck_tokens::{Theme, ThemeColors};
use yew::{Classes, classes};

use super::{BRAND_FILL, BRAND_TINT, palette, surfaces};
use crate::models::MessageRole;

/// Resolved classes for the conversation view.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversationStyle {
    /// Outer layout.
    pub container: Classes,
    /// Message list.
    pub thread: Classes,
    /// Bubble for the student's messages.
    pub user_bubble: Classes,
    /// Bubble for assistant messages.
    pub assistant_bubble: Classes,
    /// Author line above a bubble.
    pub author: Classes,
    /// Notes side panel.
    pub notes_panel: Classes,
    /// Button that expands or collapses the notes panel.
    pub notes_toggle: Classes,
    /// One note in the panel.
    pub note_item: Classes,
    /// Palette branch consulted.
    pub palette: &'static ThemeColors,
}

impl ConversationStyle {
    /// Bubble classes for a message from `role`.
    #[must_use]
    pub const fn bubble(&self, role: MessageRole) -> &Classes {
        match role {
            MessageRole::User => &self.user_bubble,
            MessageRole::Assistant => &self.assistant_bubble,
        }
    }
}

/// Compose the conversation style; `notes_expanded` only affects the notes panel.
#[must_use]
pub fn conversation_style(theme: Theme, notes_expanded: bool) -> ConversationStyle {
    let surface = surfaces(theme);
    let notes_state = if notes_expanded {
        classes!("w-72", "opacity-100", "border-l")
    } else {
        classes!("w-0", "opacity-0", "overflow-hidden")
    };
    ConversationStyle {
        container: classes!("flex", "h-full", "min-h-0", surface.background),
        thread: classes!(
            "flex",
            "flex-1",
            "flex-col",
            "gap-4",
            "overflow-y-auto",
            "px-6",
            "py-6"
        ),
        user_bubble: classes!(
            "ml-auto",
            "max-w-[75%]",
            "rounded-2xl",
            "rounded-br-sm",
            BRAND_FILL,
            "px-4",
            "py-2",
            "text-sm",
            surface.on_brand
        ),
        assistant_bubble: classes!(
            "mr-auto",
            "max-w-[75%]",
            "rounded-2xl",
            "rounded-bl-sm",
            "border",
            "px-4",
            "py-2",
            "text-sm",
            surface.surface,
            surface.border,
            surface.text_primary
        ),
        author: classes!("mb-1", "text-xs", "font-medium", surface.text_muted),
        notes_panel: classes!(
            "flex",
            "flex-col",
            "gap-2",
            "transition-all",
            "duration-200",
            surface.surface,
            surface.border,
            notes_state
        ),
        notes_toggle: classes!(
            "rounded-md",
            "px-2",
            "py-1",
            "text-xs",
            "font-medium",
            surface.text_secondary,
            surface.surface_hover,
            notes_expanded.then_some(BRAND_TINT)
        ),
        note_item: classes!(
            "rounded-md",
            "border",
            "px-3",
            "py-2",
            "text-sm",
            surface.border,
            surface.text_secondary
        ),
        palette: palette(theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::styles::test_support::{has_class, painted};
    use studydeck_tokens::COLORS;

    #[test]
    fn notes_flag_never_changes_the_theme_branch() {
        for theme in Theme::ALL {
            let collapsed = conversation_style(theme, false);
            let expanded = conversation_style(theme, true);
            assert!(std::ptr::eq(collapsed.palette, expanded.palette));
            assert!(std::ptr::eq(collapsed.palette, palette(theme)));
            assert_eq!(collapsed.thread, expanded.thread);
            assert_eq!(collapsed.user_bubble, expanded.user_bubble);
            assert_eq!(collapsed.assistant_bubble, expanded.assistant_bubble);
            assert_eq!(collapsed.note_item, expanded.note_item);
        }
    }

    #[test]
    fn notes_panel_expands_and_collapses() {
        let expanded = conversation_style(Theme::Light, true);
        let collapsed = conversation_style(Theme::Light, false);
        assert!(has_class(&expanded.notes_panel, "w-72"));
        assert!(has_class(&collapsed.notes_panel, "w-0"));
        assert!(has_class(&expanded.notes_toggle, BRAND_TINT));
        assert!(!has_class(&collapsed.notes_toggle, BRAND_TINT));
    }

    #[test]
    fn bubbles_follow_role_and_theme() {
        let dark = conversation_style(Theme::Dark, false);
        let light = conversation_style(Theme::Light, false);
        assert_eq!(
            painted(dark.bubble(MessageRole::User), "text").as_deref(),
            Some(COLORS.themes.dark.background.as_str())
        );
        assert_eq!(
            painted(light.bubble(MessageRole::User), "text").as_deref(),
            Some(COLORS.themes.light.surface.as_str())
        );
        assert_eq!(
            painted(dark.bubble(MessageRole::User), "bg").as_deref(),
            Some(COLORS.brand.primary.as_str())
        );
        assert_eq!(
            painted(dark.bubble(MessageRole::Assistant), "bg").as_deref(),
            Some(COLORS.themes.dark.surface.as_str())
        );
        assert_eq!(
            painted(light.bubble(MessageRole::Assistant), "bg").as_deref(),
            Some(COLORS.themes.light.surface.as_str())
        );
        assert_ne!(
            dark.bubble(MessageRole::User),
            dark.bubble(MessageRole::Assistant)
        );
    }
}
