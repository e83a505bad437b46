//! Dense/sparse cell generation.

mod cell;
mod dims;
mod generate;
mod position;
mod rule;

pub use cell::{Cell, CellCoord, CellGroup, FillClass, Mode};
pub use dims::Dimensions;
pub use generate::generate;
pub use position::position_of;
pub use rule::{DensityRule, Parity, UniformDraw, ZeroInjection};
