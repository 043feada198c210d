//! Cell edge length.

use std::fmt;

use crate::{PlotError, PlotResult};

/// Full edge length of a plot in world units.
///
/// Always positive and even, so [`Magnitude::half`] is an exact half-width.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Magnitude(i32);

impl Magnitude {
    /// Edge length used when nothing is configured.
    pub const DEFAULT: Self = Self(100);

    /// Validate a raw plot size.
    pub fn new(size: i32) -> PlotResult<Self> {
        if size <= 0 || size % 2 != 0 {
            return Err(PlotError::InvalidConfiguration(size));
        }
        Ok(Self(size))
    }

    /// Get the raw edge length.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Half of the edge length.
    #[must_use]
    pub const fn half(self) -> i32 {
        self.0 / 2
    }

    /// Largest lattice line that fits in `i32`. Its negation is the smallest.
    #[must_use]
    pub const fn outermost_line(self) -> i32 {
        (i32::MAX / self.0) * self.0
    }

    /// Whether `value` lies on a lattice line.
    #[must_use]
    pub const fn aligns(self, value: i32) -> bool {
        value % self.0 == 0
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i32> for Magnitude {
    type Error = PlotError;

    fn try_from(size: i32) -> PlotResult<Self> {
        Self::new(size)
    }
}

impl fmt::Debug for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Magnitude({})", self.0)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
