//! Integration tests for spiral ordering over bounded radii.

use std::cmp::Ordering;
use std::collections::HashSet;

use plot_spiral::{Cell, Magnitude, PlotError, Spiral, compare};
use pretty_assertions::assert_eq;

const RADIUS: i32 = 6;

// ============================================================================
// Helpers
// ============================================================================

/// All cells with Chebyshev radius at most `RADIUS`, in row-major order.
fn cells_within(magnitude: Magnitude) -> Vec<Cell> {
    let m = magnitude.get();
    let mut cells = Vec::new();
    for lz in -RADIUS..=RADIUS {
        for lx in -RADIUS..=RADIUS {
            cells.push(Cell::new(magnitude, lx * m, lz * m).unwrap());
        }
    }
    cells
}

fn magnitudes() -> Vec<Magnitude> {
    [2, 16, 100]
        .into_iter()
        .map(|m| Magnitude::new(m).unwrap())
        .collect()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_aligned_construction() {
    for magnitude in magnitudes() {
        let m = magnitude.get();
        for k in -5..=5 {
            assert!(Cell::new(magnitude, k * m, k * m).is_ok());
            assert_eq!(
                Cell::new(magnitude, k * m + 1, 0),
                Err(PlotError::InvalidAlignment {
                    x: k * m + 1,
                    z: 0,
                    magnitude: m,
                })
            );
        }
    }
}

// ============================================================================
// Spiral index
// ============================================================================

#[test]
fn test_indices_are_a_permutation() {
    for magnitude in magnitudes() {
        let mut indices: Vec<u64> = cells_within(magnitude)
            .iter()
            .map(Cell::spiral_index)
            .collect();
        indices.sort_unstable();

        let side = (2 * RADIUS + 1) as u64;
        let expected: Vec<u64> = (0..side * side).collect();
        assert_eq!(indices, expected);
    }
}

#[test]
fn test_walk_visits_cells_in_index_order() {
    let magnitude = Magnitude::DEFAULT;
    let side = (2 * RADIUS + 1) as usize;

    let mut seen = HashSet::new();
    for (index, cell) in Spiral::origin(magnitude).take(side * side).enumerate() {
        assert_eq!(cell.spiral_index(), index as u64, "{cell}");
        assert!(seen.insert(cell), "{cell} visited twice");
    }
}

#[test]
fn test_each_ring_is_walked_once() {
    let magnitude = Magnitude::DEFAULT;
    let mut cell = Cell::origin(magnitude);
    for ring in 1..=RADIUS as u32 {
        cell = cell.next();
        assert_eq!(cell.ring(), ring);

        let mut ring_cells = HashSet::new();
        while cell.ring() == ring {
            assert!(ring_cells.insert(cell), "{cell} repeated in ring {ring}");
            if ring_cells.len() == 8 * ring as usize {
                break;
            }
            cell = cell.next();
        }
        assert_eq!(ring_cells.len(), 8 * ring as usize);
    }
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_total_order() {
    let cells = cells_within(Magnitude::new(16).unwrap());
    for a in &cells {
        assert_eq!(compare(a, a), Ordering::Equal);
        for b in &cells {
            let ab = compare(a, b);
            assert_eq!(ab, compare(b, a).reverse(), "{a} vs {b}");
            assert_eq!(ab == Ordering::Equal, a == b, "{a} vs {b}");
        }
    }
}

#[test]
fn test_sorting_reproduces_spiral() {
    let magnitude = Magnitude::DEFAULT;
    let mut cells = cells_within(magnitude);
    cells.sort();

    let spiral: Vec<Cell> = Spiral::origin(magnitude).take(cells.len()).collect();
    assert_eq!(cells, spiral);
}

// ============================================================================
// Rounding and containment
// ============================================================================

#[test]
fn test_points_round_to_containing_cell() {
    let magnitude = Magnitude::DEFAULT;
    let offsets = [-49.5, -25.0, 0.0, 10.25, 49.5];
    for cell in cells_within(magnitude) {
        for dx in offsets {
            for dz in offsets {
                let px = f64::from(cell.x()) + dx;
                let pz = f64::from(cell.z()) + dz;
                assert!(cell.contains(px, pz), "{cell} should contain ({px}, {pz})");
                assert_eq!(Cell::from_point(magnitude, px, pz), cell, "({px}, {pz})");
            }
        }
    }
}

#[test]
fn test_half_cell_boundary_excluded() {
    for magnitude in magnitudes() {
        let half = f64::from(magnitude.half());
        for cell in cells_within(magnitude) {
            let (x, z) = (f64::from(cell.x()), f64::from(cell.z()));
            assert!(cell.contains(x, z));
            assert!(!cell.contains(x + half, z));
            assert!(!cell.contains(x, z - half));
            assert!(cell.contains(x + half - 1e-6, z - half + 1e-6));
        }
    }
}

#[test]
fn test_fixed_point_rounding() {
    let magnitude = Magnitude::DEFAULT;
    let cases = [
        ((149.0, 0.0), (100, 0)),
        ((151.0, 0.0), (200, 0)),
        ((150.0, -150.0), (200, -200)),
        ((-49.0, 49.0), (0, 0)),
        ((1234.5, -987.6), (1200, -1000)),
    ];
    for ((px, pz), (x, z)) in cases {
        let cell = Cell::from_point(magnitude, px, pz);
        assert_eq!((cell.x(), cell.z()), (x, z), "({px}, {pz})");
    }
}
