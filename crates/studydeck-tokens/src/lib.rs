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
#![allow(clippy::module_name_repetitions)]
//! Design tokens for the Studydeck dashboard UI.
//!
//! Layout: `theme.rs` (the two-valued selector and its lookup pair),
//! `colors.rs`, `spacing.rs`, `typography.rs` (static token tables),
//! `resolver.rs` (theme branch selection) and `export.rs` (CSS/JSON output).
//!
//! Every table is `const` data built at compile time; nothing here allocates
//! long-lived state or performs I/O.

pub mod colors;
pub mod error;
pub mod export;
pub mod resolver;
pub mod spacing;
pub mod theme;
pub mod typography;

pub use colors::{COLORS, ColorTable, ColorValue, ThemeColors};
pub use error::{Result, TokenError};
pub use resolver::{Themed, lookup_color, resolve, resolve_str};
pub use spacing::{Length, SPACING, SPACING_PATTERNS};
pub use theme::{Theme, ThemePair};
pub use typography::{FontSize, FontWeight, LineHeight, TEXT_STYLES, TYPOGRAPHY, TextStyle};
