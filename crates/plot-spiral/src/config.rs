//! Plot configuration supplied by the host at startup.

use tracing::debug;

use crate::{Magnitude, PlotError, PlotResult};

/// Environment variable overriding [`PlotConfig::plot_size`].
pub const PLOT_SIZE_ENV: &str = "PLOT_SIZE";
/// Environment variable overriding [`PlotConfig::boundary_width`].
pub const BOUNDARY_WIDTH_ENV: &str = "PLOT_BOUNDARY_WIDTH";

/// Configuration for plot allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotConfig {
    /// Edge length of a plot in blocks (default: 100). Must be even.
    pub plot_size: i32,
    /// Width of the border strip kept free inside each plot (default: 2)
    pub boundary_width: i32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            plot_size: Magnitude::DEFAULT.get(),
            boundary_width: 2,
        }
    }
}

impl PlotConfig {
    /// Build a config from the process environment.
    ///
    /// Unset variables keep their defaults; set but unparseable ones are an error.
    pub fn from_env() -> PlotResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> PlotResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            plot_size: parse_override(&lookup, PLOT_SIZE_ENV)?.unwrap_or(defaults.plot_size),
            boundary_width: parse_override(&lookup, BOUNDARY_WIDTH_ENV)?
                .unwrap_or(defaults.boundary_width),
        };
        debug!(
            "Plot config: size={} boundary={}",
            config.plot_size, config.boundary_width
        );
        Ok(config)
    }

    /// Validate the plot size into a [`Magnitude`].
    pub fn magnitude(&self) -> PlotResult<Magnitude> {
        Magnitude::new(self.plot_size)
    }

    /// Validate the border strip against the plot size.
    ///
    /// The strip must leave some interior: `0 <= width < plot_size / 2`.
    pub fn boundary_width(&self) -> PlotResult<i32> {
        let half = self.magnitude()?.half();
        if !(0..half).contains(&self.boundary_width) {
            return Err(PlotError::InvalidBoundaryWidth {
                width: self.boundary_width,
                plot_size: self.plot_size,
            });
        }
        Ok(self.boundary_width)
    }
}

fn parse_override<F>(lookup: &F, key: &'static str) -> PlotResult<Option<i32>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| PlotError::InvalidEnv { key, value: raw })
}
