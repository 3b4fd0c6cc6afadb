use std::fs;

use serde_json::Value;
use studydeck_tokens::{COLORS, Theme};
use token_export::{ExportConfig, ExportError, OUTPUT_ENV, export_tokens, run};

#[test]
fn exported_stylesheet_declares_both_theme_blocks() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    export_tokens(temp.path())?;

    let css = fs::read_to_string(temp.path().join("tokens.css"))?;
    assert!(css.contains("[data-theme=\"light\"]"));
    assert!(css.contains("[data-theme=\"dark\"]"));
    assert!(css.contains(COLORS.brand.primary.as_str()));
    for theme in Theme::ALL {
        assert!(css.contains(COLORS.themes.get(theme).background.as_str()));
    }
    Ok(())
}

#[test]
fn exported_json_mirrors_the_color_table() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    export_tokens(temp.path())?;

    let raw = fs::read_to_string(temp.path().join("tokens.json"))?;
    let doc: Value = serde_json::from_str(&raw)?;
    assert_eq!(
        doc["colors"]["dark"]["background"],
        Value::from(COLORS.themes.dark.background.as_str())
    );
    assert_eq!(
        doc["colors"]["light"]["text"]["primary"],
        Value::from(COLORS.themes.light.text.primary.as_str())
    );
    Ok(())
}

#[test]
fn run_honours_the_output_override() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    let target = temp.path().join("out");
    let target_str = target.to_string_lossy().into_owned();
    let config = ExportConfig::from_lookup(
        |key| (key == OUTPUT_ENV).then(|| target_str.clone()),
        temp.path(),
    );
    let summary = run(&config)?;
    assert_eq!(summary.output_dir, target);
    assert!(target.join("TOKENS_LOCK.txt").is_file());
    Ok(())
}

#[test]
fn io_failures_surface_as_typed_errors() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "")?;
    let err = export_tokens(&blocker)
        .err()
        .ok_or_else(|| anyhow::anyhow!("export into a file path should fail"))?;
    assert!(matches!(err, ExportError::Io { .. }));
    assert!(err.to_string().contains("blocker"));
    Ok(())
}
