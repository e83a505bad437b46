use crate::foundation::core::Point;
use crate::grid::{CellCoord, Dimensions};

/// Unit-spaced position of `coord`, centered on the origin.
///
/// Rows grow downwards (decreasing `y`). Arrays use their wrapped row/col, so a cell's
/// position depends only on its index and the declared dimensions.
pub fn position_of(dims: &Dimensions, coord: CellCoord) -> Point {
    let cols = dims.visual_cols() as f64;
    let rows = dims.visual_rows() as f64;
    Point::new(
        coord.col as f64 - cols / 2.0,
        rows / 2.0 - coord.row as f64,
    )
}
