//! Terminal output: design tokens, capability detection and text views.

pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;

pub use context::UiContext;
