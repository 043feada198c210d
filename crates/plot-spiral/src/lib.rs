//! Spiral plot allocation.
//!
//! Divides the world into square plots of a configured edge length (the
//! [`Magnitude`]) and orders them along an outward spiral around the origin.
//! A host handing out plots walks the spiral to find the next free one, and
//! snaps arbitrary world coordinates onto the plot that encloses them.
//!
//! # Usage
//!
//! ```
//! use plot_spiral::{Cell, PlotConfig};
//!
//! let magnitude = PlotConfig::default().magnitude()?;
//!
//! let home = Cell::from_point(magnitude, 149.0, -20.0);
//! assert_eq!((home.x(), home.z()), (100, 0));
//! assert_eq!(home.spiral_index(), 3);
//!
//! let order: Vec<_> = Cell::origin(magnitude).spiral().take(3).collect();
//! assert_eq!(order[1], Cell::new(magnitude, 0, 100)?);
//! assert_eq!(order[2], Cell::new(magnitude, 100, 100)?);
//! # Ok::<(), plot_spiral::PlotError>(())
//! ```

mod cell;
mod config;
mod error;
mod magnitude;
mod position;
mod spiral;

pub use cell::{Cell, compare};
pub use config::{BOUNDARY_WIDTH_ENV, PLOT_SIZE_ENV, PlotConfig};
pub use error::{PlotError, PlotResult};
pub use magnitude::Magnitude;
pub use position::WorldPosition;
pub use spiral::Spiral;
