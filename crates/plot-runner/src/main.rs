//! Plot runner - stands in for the host plugin framework.
//!
//! Reads the plot configuration from the environment and answers plot
//! queries from the command line.
//!
//! Usage:
//! - `plot-runner list [COUNT]` - print the first COUNT plots in allocation order (default 9)
//! - `plot-runner locate X Z` - print the plot containing world point (X, Z)
//!
//! Environment:
//! - `PLOT_SIZE` - plot edge length in blocks (default 100, must be even)
//! - `PLOT_BOUNDARY_WIDTH` - border kept free inside each plot (default 2)

use eyre::{WrapErr, bail};
use plot_spiral::{Cell, Magnitude, PlotConfig, Spiral};
use tracing::info;

/// Commands accepted on the command line
#[derive(Debug)]
enum Command {
    List { count: usize },
    Locate { x: f64, z: f64 },
}

fn parse_command(args: &[String]) -> eyre::Result<Command> {
    match args.get(1).map(String::as_str) {
        None | Some("list") => {
            let count = match args.get(2) {
                Some(raw) => raw
                    .parse()
                    .wrap_err_with(|| format!("invalid plot count {raw:?}"))?,
                None => 9,
            };
            Ok(Command::List { count })
        }
        Some("locate") => {
            let (Some(x), Some(z)) = (args.get(2), args.get(3)) else {
                bail!("usage: plot-runner locate X Z");
            };
            Ok(Command::Locate {
                x: parse_coordinate("x", x)?,
                z: parse_coordinate("z", z)?,
            })
        }
        Some(other) => bail!("unknown command {other:?}, expected `list` or `locate`"),
    }
}

fn parse_coordinate(axis: &str, raw: &str) -> eyre::Result<f64> {
    let value: f64 = raw
        .parse()
        .wrap_err_with(|| format!("invalid {axis} {raw:?}"))?;
    if !value.is_finite() {
        bail!("{axis} must be a finite coordinate, got {raw:?}");
    }
    Ok(value)
}

#[allow(clippy::print_stdout)]
fn list(magnitude: Magnitude, count: usize) {
    for (index, cell) in Spiral::origin(magnitude).take(count).enumerate() {
        println!("{index:>6}  {cell}");
    }
}

#[allow(clippy::print_stdout)]
fn locate(magnitude: Magnitude, boundary_width: i32, x: f64, z: f64) {
    let cell = Cell::from_point(magnitude, x, z);
    let interior = cell.contains_interior(x, z, boundary_width);

    println!("{cell}  index {}", cell.spiral_index());
    if !cell.contains(x, z) {
        println!("  ({x}, {z}) lies on the boundary between plots");
    } else if !interior {
        println!("  ({x}, {z}) lies in the border strip");
    }
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("plot_runner=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let command = parse_command(&args)?;

    let config = PlotConfig::from_env()?;
    let magnitude = config.magnitude()?;
    let boundary_width = config.boundary_width()?;
    info!("Plot size {} (boundary {})", magnitude, boundary_width);

    match command {
        Command::List { count } => list(magnitude, count),
        Command::Locate { x, z } => locate(magnitude, boundary_width, x, z),
    }

    Ok(())
}
