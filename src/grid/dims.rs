use crate::foundation::error::{DenseGridError, DenseGridResult};

const DEFAULT_ARRAY_ROW_WIDTH: usize = 10;

/// Requested extent of a layout.
///
/// Arrays are one-dimensional but are laid out visually in rows of `row_width` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dimensions {
    Grid { rows: usize, cols: usize },
    Array { size: usize, row_width: usize },
}

impl Dimensions {
    pub fn grid(rows: usize, cols: usize) -> Self {
        Self::Grid { rows, cols }
    }

    pub fn array(size: usize) -> Self {
        Self::Array {
            size,
            row_width: size.clamp(1, DEFAULT_ARRAY_ROW_WIDTH),
        }
    }

    pub fn array_with_width(size: usize, row_width: usize) -> Self {
        Self::Array { size, row_width }
    }

    pub fn validate(&self) -> DenseGridResult<()> {
        match *self {
            Self::Grid { rows, cols } => {
                if rows == 0 {
                    return Err(DenseGridError::invalid_dimension("rows must be > 0"));
                }
                if cols == 0 {
                    return Err(DenseGridError::invalid_dimension("cols must be > 0"));
                }
                if rows.checked_mul(cols).is_none() {
                    return Err(DenseGridError::invalid_dimension(format!(
                        "rows * cols overflows ({rows} x {cols})"
                    )));
                }
            }
            Self::Array { size, row_width } => {
                if size == 0 {
                    return Err(DenseGridError::invalid_dimension("size must be > 0"));
                }
                if row_width == 0 {
                    return Err(DenseGridError::invalid_dimension("row_width must be > 0"));
                }
            }
        }
        Ok(())
    }

    /// Total number of coordinates. Saturates for extents that `validate` rejects.
    pub fn cell_count(&self) -> usize {
        match *self {
            Self::Grid { rows, cols } => rows.saturating_mul(cols),
            Self::Array { size, .. } => size,
        }
    }

    /// Number of visual rows (arrays wrap at `row_width`).
    pub fn visual_rows(&self) -> usize {
        match *self {
            Self::Grid { rows, .. } => rows,
            Self::Array { size, row_width } => size.div_ceil(row_width.max(1)),
        }
    }

    /// Number of visual columns.
    pub fn visual_cols(&self) -> usize {
        match *self {
            Self::Grid { cols, .. } => cols,
            Self::Array { row_width, .. } => row_width,
        }
    }
}
