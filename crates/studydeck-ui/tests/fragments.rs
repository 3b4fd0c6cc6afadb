use studydeck_tokens::COLORS;
use studydeck_ui::Theme;
use studydeck_ui::core::styles::action::{ActionSize, Intent, action_style};
use studydeck_ui::core::styles::conversation::conversation_style;
use studydeck_ui::core::styles::panel::{PanelKind, panel_style};
use studydeck_ui::core::styles::row::{session_row_style, timeline_row_style};
use studydeck_ui::core::theme::initial_theme;

#[test]
fn dark_primary_and_light_secondary_end_to_end() {
    let theme = initial_theme(Some("dark")).unwrap_or_else(|err| panic!("{err}"));
    let primary = action_style(theme, Intent::Primary, ActionSize::Md, false);
    assert_eq!(primary.background, COLORS.brand.primary);
    assert_eq!(primary.background.as_str(), "#10b981");
    assert!(primary.tint.is_some());

    let secondary = action_style(theme.toggle(), Intent::Secondary, ActionSize::Md, false);
    assert_eq!(secondary.border, Some(COLORS.themes.light.border));
    assert_ne!(secondary.classes, primary.classes);
    assert_ne!(
        secondary.classes,
        action_style(Theme::Light, Intent::Primary, ActionSize::Md, false).classes
    );
}

#[test]
fn every_fragment_consults_the_injected_theme() {
    for theme in Theme::ALL {
        let expected = COLORS.themes.get(theme);
        assert_eq!(action_style(theme, Intent::Secondary, ActionSize::Sm, false).palette, expected);
        assert_eq!(timeline_row_style(theme, false).palette, expected);
        assert_eq!(session_row_style(theme, true).palette, expected);
        for open in [true, false] {
            assert_eq!(panel_style(theme, open, PanelKind::SessionList).palette, expected);
            assert_eq!(panel_style(theme, open, PanelKind::SessionDetail).palette, expected);
        }
        for expanded in [true, false] {
            assert_eq!(conversation_style(theme, expanded).palette, expected);
        }
    }
}

#[test]
fn rejected_preference_surfaces_an_error() {
    assert!(initial_theme(Some("auto")).is_err());
}
