//! Core, DOM-free primitives and helpers for the Web UI.
pub mod styles;
pub mod theme;
