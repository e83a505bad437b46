use crate::foundation::core::{Point, Rect, Vec2};
use crate::foundation::error::DenseGridResult;
use crate::grid::{DensityRule, Dimensions, generate};

/// Layout mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Every coordinate is materialized, zeros included.
    Dense,
    /// Only non-zero coordinates are materialized.
    Sparse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillClass {
    DenseFill,
    SparseFill,
    ZeroFill,
}

impl FillClass {
    pub(crate) fn classify(mode: Mode, is_zero: bool) -> Self {
        match (mode, is_zero) {
            (Mode::Dense, true) => Self::ZeroFill,
            (Mode::Dense, false) => Self::DenseFill,
            // Sparse layouts never emit zero cells.
            (Mode::Sparse, _) => Self::SparseFill,
        }
    }

    /// Fill opacity used for squares of this class.
    pub fn intensity(self) -> f64 {
        match self {
            Self::DenseFill | Self::SparseFill => 0.5,
            Self::ZeroFill => 0.1,
        }
    }
}

/// Grid coordinate of a cell. `index` is the row-major linear index.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
    pub index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cell {
    pub coord: CellCoord,
    pub value: u32,
    pub is_zero: bool,
    pub position: Point,
    pub fill: FillClass,
    pub fill_intensity: f64,
}

impl Cell {
    /// Square of side `side` centered on the cell position.
    pub fn bounds(&self, side: f64) -> Rect {
        Rect::from_center_size(self.position, (side, side))
    }
}

/// Cells generated for one layout, with the request that produced them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CellGroup {
    pub dims: Dimensions,
    pub mode: Mode,
    pub cells: Vec<Cell>,
}

impl CellGroup {
    pub fn generate<R>(dims: Dimensions, mode: Mode, rule: &mut R) -> DenseGridResult<Self>
    where
        R: DensityRule + ?Sized,
    {
        let cells = generate(dims, mode, rule)?;
        Ok(Self { dims, mode, cells })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn non_zero_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_zero).count()
    }

    /// Union of all cell squares, or `None` when no cell was materialized.
    pub fn bounds(&self, side: f64) -> Option<Rect> {
        self.cells
            .iter()
            .map(|c| c.bounds(side))
            .reduce(|acc, r| acc.union(r))
    }

    pub fn shifted(&self, by: Vec2) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|c| Cell {
                position: c.position + by,
                ..*c
            })
            .collect();
        Self {
            dims: self.dims,
            mode: self.mode,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Parity;

    #[test]
    fn fill_classes_follow_mode_and_zero_flag() {
        assert_eq!(FillClass::classify(Mode::Dense, true), FillClass::ZeroFill);
        assert_eq!(FillClass::classify(Mode::Dense, false), FillClass::DenseFill);
        assert_eq!(FillClass::classify(Mode::Sparse, false), FillClass::SparseFill);
        assert!(FillClass::ZeroFill.intensity() < FillClass::DenseFill.intensity());
    }

    #[test]
    fn group_bounds_cover_every_square() {
        let g = CellGroup::generate(Dimensions::grid(2, 2), Mode::Dense, &mut Parity).unwrap();
        let b = g.bounds(0.5).unwrap();
        // Positions span x in [-1, 0], y in [0, 1].
        assert_eq!(b, Rect::new(-1.25, -0.25, 0.25, 1.25));
    }

    #[test]
    fn empty_group_has_no_bounds() {
        let mut never = |_: CellCoord| 0u32;
        let g = CellGroup::generate(Dimensions::grid(3, 3), Mode::Sparse, &mut never).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.bounds(0.5), None);
    }

    #[test]
    fn shifted_moves_positions_only() {
        let g = CellGroup::generate(Dimensions::grid(2, 3), Mode::Sparse, &mut Parity).unwrap();
        let s = g.shifted(Vec2::new(-3.0, 0.5));
        assert_eq!(s.len(), g.len());
        for (a, b) in g.cells.iter().zip(&s.cells) {
            assert_eq!(a.coord, b.coord);
            assert_eq!(b.position, a.position + Vec2::new(-3.0, 0.5));
        }
    }
}
