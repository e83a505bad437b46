use crate::foundation::error::DenseGridResult;
use crate::grid::{Cell, CellCoord, DensityRule, Dimensions, FillClass, Mode, position_of};

// Upper bound on the up-front allocation; larger layouts grow as cells are pushed.
const MAX_CAPACITY_HINT: usize = 1 << 16;

/// Generates the cells of a layout in row-major (or index) order.
///
/// Dense layouts emit one cell per coordinate, flagging zeros. Sparse layouts skip zero
/// coordinates entirely. Dimensions are checked before the rule is consulted.
#[tracing::instrument(skip(rule))]
pub fn generate<R>(dims: Dimensions, mode: Mode, rule: &mut R) -> DenseGridResult<Vec<Cell>>
where
    R: DensityRule + ?Sized,
{
    dims.validate()?;

    let total = dims.cell_count();
    let width = dims.visual_cols();
    let hint = match mode {
        Mode::Dense => total,
        Mode::Sparse => total / 2,
    };
    let mut cells = Vec::with_capacity(hint.min(MAX_CAPACITY_HINT));

    for index in 0..total {
        let coord = CellCoord {
            row: index / width,
            col: index % width,
            index,
        };
        let value = rule.value_at(coord);
        let is_zero = value == 0;
        if mode == Mode::Sparse && is_zero {
            continue;
        }

        let fill = FillClass::classify(mode, is_zero);
        cells.push(Cell {
            coord,
            value,
            is_zero,
            position: position_of(&dims, coord),
            fill,
            fill_intensity: fill.intensity(),
        });
    }

    tracing::debug!(emitted = cells.len(), total, "generated cells");
    Ok(cells)
}
