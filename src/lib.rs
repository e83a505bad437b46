//! densegrid generates the cell layouts behind "dense vs sparse" explainer videos.
//!
//! The crate is renderer-agnostic. It produces plain data:
//!
//! - [`generate`] turns [`Dimensions`], a [`Mode`] and a [`DensityRule`] into positioned,
//!   classified [`Cell`]s
//! - [`ColorScheme`] maps fill classes and text roles to concrete colors for one run
//! - [`scene::sparse_vs_dense`] assembles a declarative [`Storyboard`] that a rendering engine
//!   can play back
#![forbid(unsafe_code)]

mod foundation;

pub mod config;
pub mod grid;
pub mod palette;
pub mod scene;

pub use crate::foundation::core::{Fps, FrameIndex, Point, Rect, Rgba8Premul, Vec2};
pub use crate::foundation::error::{DenseGridError, DenseGridResult};

pub use crate::config::{RuleSpec, RunConfig, SchemeConfig};
pub use crate::grid::{
    Cell, CellCoord, CellGroup, DensityRule, Dimensions, FillClass, Mode, Parity, UniformDraw,
    ZeroInjection, generate, position_of,
};
pub use crate::palette::{ColorDef, ColorScheme, SchemePreset};
pub use crate::scene::{Storyboard, StoryboardBuilder, StoryboardOpts};
