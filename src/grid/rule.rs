use std::ops::Range;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::foundation::error::{DenseGridError, DenseGridResult};
use crate::grid::CellCoord;

/// Decides the value of each coordinate. A value of `0` marks the cell as zero.
///
/// Rules are called exactly once per coordinate, in generation order, whatever the mode.
/// Randomized rules therefore produce the same draws for dense and sparse runs of one seed.
pub trait DensityRule {
    fn value_at(&mut self, coord: CellCoord) -> u32;
}

impl<F> DensityRule for F
where
    F: FnMut(CellCoord) -> u32,
{
    fn value_at(&mut self, coord: CellCoord) -> u32 {
        self(coord)
    }
}

/// Checkerboard: non-zero where `(row + col)` is even.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Parity;

impl DensityRule for Parity {
    fn value_at(&mut self, coord: CellCoord) -> u32 {
        u32::from((coord.row + coord.col) % 2 == 0)
    }
}

/// Uniform integer draw per coordinate; the draw is the value.
#[derive(Clone, Debug)]
pub struct UniformDraw {
    rng: StdRng,
    range: Range<u32>,
}

impl UniformDraw {
    pub fn new(seed: u64, range: Range<u32>) -> DenseGridResult<Self> {
        if range.is_empty() {
            return Err(DenseGridError::validation(format!(
                "uniform draw range {}..{} is empty",
                range.start, range.end
            )));
        }
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            range,
        })
    }

    /// Draws over `0..10`.
    pub fn digits(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            range: 0..10,
        }
    }
}

impl DensityRule for UniformDraw {
    fn value_at(&mut self, _coord: CellCoord) -> u32 {
        self.rng.gen_range(self.range.clone())
    }
}

/// Zero with probability `zero_probability`, otherwise a magnitude in `1..=max`.
#[derive(Clone, Debug)]
pub struct ZeroInjection {
    rng: StdRng,
    zero_probability: f64,
    max: u32,
}

impl ZeroInjection {
    pub fn new(seed: u64, zero_probability: f64, max: u32) -> DenseGridResult<Self> {
        if !zero_probability.is_finite() || !(0.0..=1.0).contains(&zero_probability) {
            return Err(DenseGridError::validation(format!(
                "zero probability must be within 0..=1, got {zero_probability}"
            )));
        }
        if max == 0 {
            return Err(DenseGridError::validation(
                "zero injection max magnitude must be > 0",
            ));
        }
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            zero_probability,
            max,
        })
    }
}

impl DensityRule for ZeroInjection {
    fn value_at(&mut self, _coord: CellCoord) -> u32 {
        // Both draws happen unconditionally so the stream stays aligned across coordinates.
        let zero = self.rng.gen_bool(self.zero_probability);
        let magnitude = self.rng.gen_range(1..=self.max);
        if zero { 0 } else { magnitude }
    }
}
