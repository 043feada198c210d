//! Square spiral walk over the plot lattice.
//!
//! Plots are handed out along an outward spiral around the origin:
//!
//! ```text
//!         z
//!         ▲
//!    24  9 10 11 12
//!    23  8  1  2 13
//!    22  7  0  3 14   ─▶ x
//!    21  6  5  4 15
//!    20 19 18 17 16
//! ```
//!
//! Each ring `r` (Chebyshev radius in lattice units) starts at `(1 - r, r)`
//! and holds `8r` plots, so the first index of ring `r` is `(2r - 1)^2`.

use std::iter::FusedIterator;

use crate::{Cell, Magnitude};

/// One step of the spiral from lattice-aligned `(x, z)`.
///
/// This table is the legacy plot layout; allocation order depends on it exactly.
pub(crate) const fn step(x: i64, z: i64, m: i64) -> (i64, i64) {
    if x < z {
        if -x < z {
            return (x + m, z);
        }
        return (x, z + m);
    }
    if x > z {
        if -x >= z {
            return (x - m, z);
        }
        return (x, z - m);
    }
    if x <= 0 { (x, z + m) } else { (x, z - m) }
}

/// Spiral index of the lattice point `(x, z)`.
///
/// Walks the ring containing the point from its entry cell.
pub(crate) fn index_of(x: i64, z: i64, m: i64) -> u64 {
    let mag = x.abs().max(z.abs());
    if mag == 0 {
        return 0;
    }

    // Cells strictly inside this ring
    let root = 2 * (mag / m - 1) + 1;
    let mut index = (root * root) as u64;

    let (mut cx, mut cz) = (m - mag, mag);
    while (cx, cz) != (x, z) && cz.abs() <= mag {
        (cx, cz) = step(cx, cz, m);
        index += 1;
    }
    index
}

/// Iterator over plots in spiral order.
///
/// Yields its starting cell first. Ends only if the walk would leave the
/// `i32` coordinate range.
#[derive(Debug, Clone)]
pub struct Spiral {
    next: Option<Cell>,
}

impl Spiral {
    /// Spiral starting at `start`.
    #[must_use]
    pub const fn from_cell(start: Cell) -> Self {
        Self { next: Some(start) }
    }

    /// Spiral starting at the origin plot.
    #[must_use]
    pub const fn origin(magnitude: Magnitude) -> Self {
        Self::from_cell(Cell::origin(magnitude))
    }

    /// First cell yielded by the spiral for which `taken` returns false.
    ///
    /// This is how a host picks the next plot to hand out.
    pub fn first_free<F>(mut self, mut taken: F) -> Option<Cell>
    where
        F: FnMut(&Cell) -> bool,
    {
        self.find(|cell| !taken(cell))
    }
}

impl Iterator for Spiral {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let current = self.next?;
        self.next = current.checked_next();
        Some(current)
    }
}

impl FusedIterator for Spiral {}
