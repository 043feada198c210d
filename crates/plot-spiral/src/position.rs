//! World coordinate sources.

/// Anything that can report a horizontal world position.
///
/// Only the two horizontal axes matter for plot placement; height is ignored.
pub trait WorldPosition {
    /// World X coordinate.
    fn x(&self) -> f64;

    /// World Z coordinate.
    fn z(&self) -> f64;

    /// X coordinate of the block containing this position.
    fn block_x(&self) -> i32 {
        self.x().floor() as i32
    }

    /// Z coordinate of the block containing this position.
    fn block_z(&self) -> i32 {
        self.z().floor() as i32
    }
}

impl WorldPosition for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn z(&self) -> f64 {
        self.1
    }
}

impl WorldPosition for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn z(&self) -> f64 {
        self[1]
    }
}

impl<P: WorldPosition + ?Sized> WorldPosition for &P {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn z(&self) -> f64 {
        (**self).z()
    }
}
