#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Mounts the dashboard in the browser. Native builds print how to serve it
//! and which theme a fresh browser starts with.

#[cfg(target_arch = "wasm32")]
fn main() {
    studydeck_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    write_usage(&mut std::io::stderr().lock())
}

#[cfg(not(target_arch = "wasm32"))]
fn write_usage(out: &mut impl std::io::Write) -> std::io::Result<()> {
    use studydeck_ui::core::theme::{THEME_KEY, initial_theme};

    let first_theme = initial_theme(None).unwrap_or_default();
    writeln!(out, "studydeck-ui runs in the browser; serve it with `trunk serve`.")?;
    writeln!(
        out,
        "Generate static/tokens/tokens.css first with `cargo run -p token_export`."
    )?;
    writeln!(
        out,
        "Theme preference is stored under `{THEME_KEY}`; a fresh browser starts {first_theme}."
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn usage_names_the_token_export_and_default_theme() -> std::io::Result<()> {
        let mut out = Vec::new();
        write_usage(&mut out)?;
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("token_export"));
        assert!(text.contains("studydeck.theme"));
        assert!(text.contains("starts dark"));
        Ok(())
    }
}
