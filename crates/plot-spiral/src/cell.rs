//! Lattice-aligned plot cells.

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::spiral::{self, Spiral};
use crate::{Magnitude, PlotError, PlotResult, WorldPosition};

/// A single plot: a square of `magnitude` blocks centered on `(x, z)`.
///
/// Both coordinates are multiples of the magnitude. Cells order by their
/// position along the allocation spiral, see [`Cell::spiral_index`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    x: i32,
    z: i32,
    magnitude: Magnitude,
}

impl Cell {
    /// Create a cell from lattice-aligned coordinates.
    pub fn new(magnitude: Magnitude, x: i32, z: i32) -> PlotResult<Self> {
        if !magnitude.aligns(x) || !magnitude.aligns(z) {
            return Err(PlotError::InvalidAlignment {
                x,
                z,
                magnitude: magnitude.get(),
            });
        }
        Ok(Self { x, z, magnitude })
    }

    /// The plot at the origin, index 0 of the spiral.
    #[must_use]
    pub const fn origin(magnitude: Magnitude) -> Self {
        Self {
            x: 0,
            z: 0,
            magnitude,
        }
    }

    /// The plot nearest to a world point.
    ///
    /// Points beyond the outermost lattice line that fits in `i32`
    /// (including infinities) clamp onto that line, so the returned plot
    /// need not contain them. NaN snaps to 0.
    #[must_use]
    pub fn from_point(magnitude: Magnitude, x: f64, z: f64) -> Self {
        let cell = Self {
            x: round_to_lattice(x, magnitude),
            z: round_to_lattice(z, magnitude),
            magnitude,
        };
        trace!("Rounding ({x:.2}, {z:.2}) to {cell}");
        cell
    }

    /// The plot nearest to a world position.
    #[must_use]
    pub fn from_position<P: WorldPosition>(magnitude: Magnitude, position: &P) -> Self {
        Self::from_point(magnitude, position.x(), position.z())
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn z(&self) -> i32 {
        self.z
    }

    #[must_use]
    pub const fn magnitude(&self) -> Magnitude {
        self.magnitude
    }

    /// Whether a world point lies inside this plot.
    ///
    /// Points exactly half a plot away on either axis are outside.
    #[must_use]
    pub fn contains(&self, x: f64, z: f64) -> bool {
        let half = f64::from(self.magnitude.half());
        (f64::from(self.x) - x).abs() < half && (f64::from(self.z) - z).abs() < half
    }

    /// Whether a block coordinate lies inside this plot.
    #[must_use]
    pub fn contains_block(&self, block_x: i32, block_z: i32) -> bool {
        self.contains(f64::from(block_x), f64::from(block_z))
    }

    /// Whether the block at `position` lies inside this plot.
    #[must_use]
    pub fn contains_position<P: WorldPosition>(&self, position: &P) -> bool {
        self.contains_block(position.block_x(), position.block_z())
    }

    /// Whether a world point lies inside this plot once `boundary_width`
    /// blocks are shaved off every side.
    ///
    /// A negative width is treated as zero, so the interior never exceeds
    /// the plot. See [`PlotConfig::boundary_width`] for validated widths.
    ///
    /// [`PlotConfig::boundary_width`]: crate::PlotConfig::boundary_width
    #[must_use]
    pub fn contains_interior(&self, x: f64, z: f64, boundary_width: i32) -> bool {
        let half = f64::from(self.magnitude.half()) - f64::from(boundary_width.max(0));
        (f64::from(self.x) - x).abs() < half && (f64::from(self.z) - z).abs() < half
    }

    /// Chebyshev distance from the origin in plots.
    #[must_use]
    pub const fn ring(&self) -> u32 {
        let mag = if self.x.unsigned_abs() > self.z.unsigned_abs() {
            self.x.unsigned_abs()
        } else {
            self.z.unsigned_abs()
        };
        mag / self.magnitude.get().unsigned_abs()
    }

    /// Position of this plot along the allocation spiral.
    ///
    /// Costs one walk around the plot's ring.
    #[must_use]
    pub fn spiral_index(&self) -> u64 {
        let index = spiral::index_of(
            i64::from(self.x),
            i64::from(self.z),
            i64::from(self.magnitude.get()),
        );
        trace!("{self} has spiral index {index}");
        index
    }

    /// The plot following this one along the spiral.
    ///
    /// Saturates on the outermost lattice line at the edge of the `i32`
    /// range, returning a plot already seen; see [`Cell::checked_next`].
    #[must_use]
    pub fn next(&self) -> Self {
        let m = self.magnitude.get();
        let (x, z) = spiral::step(i64::from(self.x), i64::from(self.z), i64::from(m));
        let line = i64::from(self.magnitude.outermost_line());
        Self {
            x: x.clamp(-line, line) as i32,
            z: z.clamp(-line, line) as i32,
            magnitude: self.magnitude,
        }
    }

    /// The plot following this one, or `None` if it would fall outside the
    /// `i32` range.
    #[must_use]
    pub fn checked_next(&self) -> Option<Self> {
        let m = self.magnitude.get();
        let (x, z) = spiral::step(i64::from(self.x), i64::from(self.z), i64::from(m));
        Some(Self {
            x: i32::try_from(x).ok()?,
            z: i32::try_from(z).ok()?,
            magnitude: self.magnitude,
        })
    }

    /// Iterate the spiral starting at this plot.
    #[must_use]
    pub const fn spiral(self) -> Spiral {
        Spiral::from_cell(self)
    }
}

/// Compare two plots by spiral index.
#[must_use]
pub fn compare(a: &Cell, b: &Cell) -> Ordering {
    a.cmp(b)
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.spiral_index()
            .cmp(&other.spiral_index())
            .then(self.magnitude.cmp(&other.magnitude))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {} /{})", self.x, self.z, self.magnitude)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell[{}, {}]", self.x, self.z)
    }
}

/// Snap one axis onto the lattice.
///
/// Rounds half a plot or more away from zero, then truncates toward zero.
/// Clamps onto the outermost lattice line inside `i32`.
fn round_to_lattice(value: f64, magnitude: Magnitude) -> i32 {
    let m = magnitude.get();
    let sign = if value < 0.0 { -1 } else { 1 };

    let mut abs = value.abs();
    if abs % f64::from(m) >= f64::from(magnitude.half()) {
        abs += f64::from(m);
    }

    let steps = (abs / f64::from(m)).trunc();
    let max_steps = magnitude.outermost_line() / m;
    let steps = if steps.is_nan() {
        0
    } else if steps >= f64::from(max_steps) {
        max_steps
    } else {
        steps as i32
    };
    sign * steps * m
}
