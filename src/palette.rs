//! Colors and per-run color schemes.

mod color;
mod scheme;

pub use color::ColorDef;
pub use scheme::{ColorScheme, SchemePreset};
