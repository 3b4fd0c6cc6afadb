//! CSS custom-property and JSON renderings of the token tables.
//!
//! The stylesheet carries one `:root` block with theme-independent tokens and
//! one `[data-theme="..."]` block per theme. Output is deterministic so the
//! export tool can hash it.

use std::fmt::Write;

use serde_json::{Map, Value, json};

use crate::colors::{COLORS, ColorValue};
use crate::resolver::resolve;
use crate::spacing::{SPACING, SPACING_PATTERNS};
use crate::theme::Theme;
use crate::typography::{FontSize, FontWeight, LineHeight, TEXT_STYLES, TYPOGRAPHY};

/// Convert a semantic token name into a CSS custom property name.
///
/// `("color", "surfaceElevated")` becomes `--color-surface-elevated` and
/// `("color", "text.primary")` becomes `--color-text-primary`.
#[must_use]
pub fn css_var_name(prefix: &str, name: &str) -> String {
    let mut out = format!("--{prefix}-");
    for ch in name.chars() {
        if ch == '.' || ch == '_' {
            out.push('-');
        } else if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Theme-qualified custom property for a theme color (e.g. `--color-dark-text-muted`).
///
/// Declared in the `:root` block so a class can name one theme's value
/// without depending on the `data-theme` scope it is rendered in.
#[must_use]
pub fn theme_var_name(theme: Theme, name: &str) -> String {
    css_var_name("color", &format!("{}.{name}", theme.as_str()))
}

/// Selector for a theme's block (e.g. `[data-theme="dark"]`).
#[must_use]
pub fn theme_selector(theme: Theme) -> String {
    format!("[data-theme=\"{}\"]", theme.as_str())
}

/// Custom properties for one theme's surfaces and text.
#[must_use]
pub fn theme_block(theme: Theme) -> String {
    let mut css = String::new();
    let _ = writeln!(css, "{} {{", theme_selector(theme));
    let _ = writeln!(css, "  color-scheme: {};", theme.as_str());
    for (name, value) in resolve(theme, &COLORS).entries() {
        push_var(&mut css, &css_var_name("color", name), value.as_str());
    }
    css.push_str("}\n");
    css
}

/// Custom properties shared by both themes.
#[must_use]
pub fn root_block() -> String {
    let mut css = String::from(":root {\n");
    let brand = COLORS.brand;
    let semantic = COLORS.semantic;
    let shared: [(&str, ColorValue); 8] = [
        ("brand.primary", brand.primary),
        ("brand.primaryHover", brand.primary_hover),
        ("brand.primaryLight", brand.primary_light),
        ("brand.secondary", brand.secondary),
        ("semantic.success", semantic.success),
        ("semantic.warning", semantic.warning),
        ("semantic.error", semantic.error),
        ("semantic.info", semantic.info),
    ];
    for (name, value) in shared {
        push_var(&mut css, &css_var_name("color", name), value.as_str());
    }
    for theme in Theme::ALL {
        for (name, value) in resolve(theme, &COLORS).entries() {
            push_var(&mut css, &theme_var_name(theme, name), value.as_str());
        }
    }
    for (name, value) in COLORS.modules.entries() {
        push_var(&mut css, &css_var_name("color-module", name), value.as_str());
    }
    for (step, length) in SPACING {
        push_var(&mut css, &format!("--space-{step}"), length.as_str());
    }
    for (name, length) in SPACING_PATTERNS.entries() {
        push_var(&mut css, &css_var_name("space", name), length.as_str());
    }
    push_var(&mut css, "--font-sans", TYPOGRAPHY.font_family.sans);
    push_var(&mut css, "--font-mono", TYPOGRAPHY.font_family.mono);
    for size in TYPOGRAPHY.font_size {
        push_var(&mut css, &format!("--font-size-{}", size.key()), size.value());
    }
    for weight in TYPOGRAPHY.font_weight {
        push_var(
            &mut css,
            &format!("--font-weight-{}", weight.key()),
            &weight.value().to_string(),
        );
    }
    for height in TYPOGRAPHY.line_height {
        push_var(
            &mut css,
            &format!("--line-height-{}", height.key()),
            height.value(),
        );
    }
    css.push_str("}\n");
    css
}

/// Full stylesheet: the shared block followed by one block per theme.
#[must_use]
pub fn stylesheet() -> String {
    let mut css = root_block();
    for theme in Theme::ALL {
        css.push('\n');
        css.push_str(&theme_block(theme));
    }
    css
}

/// Every token table as a JSON document.
#[must_use]
pub fn tokens_value() -> Value {
    let spacing: Map<String, Value> = SPACING
        .iter()
        .map(|(step, length)| (step.to_string(), json!(length)))
        .collect();
    let font_size: Map<String, Value> = FontSize::ALL
        .iter()
        .map(|size| (size.key().to_string(), json!(size.value())))
        .collect();
    let font_weight: Map<String, Value> = FontWeight::ALL
        .iter()
        .map(|weight| (weight.key().to_string(), json!(weight.value())))
        .collect();
    let line_height: Map<String, Value> = LineHeight::ALL
        .iter()
        .map(|height| (height.key().to_string(), json!(height.value())))
        .collect();

    json!({
        "colors": {
            "light": COLORS.themes.light,
            "dark": COLORS.themes.dark,
            "brand": COLORS.brand,
            "semantic": COLORS.semantic,
            "modules": COLORS.modules,
        },
        "spacing": spacing,
        "spacingPatterns": SPACING_PATTERNS,
        "typography": {
            "fontFamily": TYPOGRAPHY.font_family,
            "fontSize": font_size,
            "fontWeight": font_weight,
            "lineHeight": line_height,
        },
        "textStyles": TEXT_STYLES,
    })
}

/// Pretty-printed [`tokens_value`].
///
/// # Errors
///
/// Returns an error if serialisation fails.
pub fn tokens_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&tokens_value())
}

fn push_var(css: &mut String, name: &str, value: &str) {
    let _ = writeln!(css, "  {name}: {value};");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::THEME_COLOR_KEYS;

    #[test]
    fn var_names_are_kebab_case() {
        assert_eq!(
            css_var_name("color", "surfaceElevated"),
            "--color-surface-elevated"
        );
        assert_eq!(css_var_name("color", "text.primary"), "--color-text-primary");
        assert_eq!(
            css_var_name("space", "cardPadding.default"),
            "--space-card-padding-default"
        );
    }

    #[test]
    fn theme_blocks_declare_the_same_properties() {
        let names = |theme| -> Vec<String> {
            theme_block(theme)
                .lines()
                .filter_map(|line| line.trim().split_once(':').map(|(name, _)| name.to_string()))
                .filter(|name| name.starts_with("--"))
                .collect()
        };
        let light = names(Theme::Light);
        assert_eq!(light, names(Theme::Dark));
        assert_eq!(light.len(), THEME_COLOR_KEYS.len());
    }

    #[test]
    fn root_block_declares_every_theme_color_per_theme() {
        let block = root_block();
        for theme in Theme::ALL {
            for (name, value) in resolve(theme, &COLORS).entries() {
                let line = format!("  {}: {};", theme_var_name(theme, name), value.as_str());
                assert!(block.contains(&line), "missing {line}");
            }
        }
        assert_eq!(
            theme_var_name(Theme::Dark, "surfaceElevated"),
            "--color-dark-surface-elevated"
        );
        assert!(block.contains("  --color-dark-surface: #141414;"));
    }

    #[test]
    fn dark_block_carries_dark_values() {
        let block = theme_block(Theme::Dark);
        assert!(block.starts_with("[data-theme=\"dark\"] {"));
        assert!(block.contains("  --color-background: #0a0a0a;"));
        assert!(block.contains("  color-scheme: dark;"));
    }

    #[test]
    fn root_block_carries_shared_tokens() {
        let block = root_block();
        assert!(block.contains("  --color-brand-primary: #10b981;"));
        assert!(block.contains("  --space-6: 1.5rem;"));
        assert!(block.contains("  --space-card-padding-default: 1.5rem;"));
        assert!(block.contains("  --font-size-2xl: 1.5rem;"));
        assert!(block.contains("  --font-weight-bold: 700;"));
    }

    #[test]
    fn stylesheet_is_deterministic() {
        let sheet = stylesheet();
        assert_eq!(sheet, stylesheet());
        assert!(sheet.contains(&theme_selector(Theme::Light)));
        assert!(sheet.contains(&theme_selector(Theme::Dark)));
    }

    #[test]
    fn json_document_mirrors_tables() -> anyhow::Result<()> {
        let value: Value = serde_json::from_str(&tokens_json()?)?;
        assert_eq!(value["colors"]["brand"]["primary"], "#10b981");
        assert_eq!(value["colors"]["dark"]["text"]["primary"], "#fafafa");
        assert_eq!(value["spacing"]["6"], "1.5rem");
        assert_eq!(value["spacingPatterns"]["cardPadding"]["default"], "1.5rem");
        assert_eq!(value["typography"]["fontSize"]["2xl"], "1.5rem");
        assert_eq!(value["textStyles"]["h1"]["fontWeight"], 700);
        Ok(())
    }
}
