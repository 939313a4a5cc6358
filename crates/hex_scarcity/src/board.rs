//! Board shapes and the deterministic coordinate layout derived from them.
//!
//! A [`BoardShape`] is either an explicit list of axial coordinates or a
//! generated hexagon of a given radius. [`layout_coordinates`] turns a shape into
//! the ordered tile coordinates that sampling iterates over.
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::hex::AxialCoord;

/// Radius of the full hexagonal board.
pub const FULL_BOARD_RADIUS: i32 = 3;

/// Largest radius accepted for generated boards.
pub const MAX_RADIUS: i32 = 1024;

/// The fixed 17-tile small board, in draw order.
pub const LEGACY_BOARD: [AxialCoord; 17] = [
    AxialCoord::new(0, 0),
    AxialCoord::new(0, 1),
    AxialCoord::new(0, -1),
    AxialCoord::new(1, 0),
    AxialCoord::new(-1, 0),
    AxialCoord::new(1, -1),
    AxialCoord::new(-1, 1),
    AxialCoord::new(0, 2),
    AxialCoord::new(0, -2),
    AxialCoord::new(2, 0),
    AxialCoord::new(-2, 0),
    AxialCoord::new(1, 1),
    AxialCoord::new(-1, -1),
    AxialCoord::new(1, -2),
    AxialCoord::new(-1, 2),
    AxialCoord::new(2, -1),
    AxialCoord::new(-2, 1),
];

/// Which axial coordinates belong to a board.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoardShape {
    /// An enumerated list of coordinates, laid out in the given order.
    Explicit(Vec<AxialCoord>),
    /// Every `(x, y)` with `|x| <= R`, `|y| <= R` and `|x + y| <= R`.
    Radius(i32),
}

impl BoardShape {
    /// The 17-tile small board.
    pub fn legacy() -> Self {
        BoardShape::Explicit(LEGACY_BOARD.to_vec())
    }

    /// The radius-3 hexagon (37 tiles).
    pub fn full() -> Self {
        BoardShape::Radius(FULL_BOARD_RADIUS)
    }

    pub fn hexagon(radius: i32) -> Self {
        BoardShape::Radius(radius)
    }

    pub fn explicit<I, C>(coords: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<AxialCoord>,
    {
        BoardShape::Explicit(coords.into_iter().map(Into::into).collect())
    }

    /// Checks the shape without enumerating it.
    pub fn validate(&self) -> Result<()> {
        match self {
            BoardShape::Explicit(coords) => {
                if coords.is_empty() {
                    return Err(Error::InvalidShape("explicit board has no tiles".into()));
                }
                let mut seen = HashSet::with_capacity(coords.len());
                for c in coords {
                    if !seen.insert(*c) {
                        return Err(Error::InvalidShape(format!(
                            "duplicate coordinate ({}, {})",
                            c.x, c.y
                        )));
                    }
                }
                Ok(())
            }
            BoardShape::Radius(r) => {
                if *r < 0 {
                    return Err(Error::InvalidShape(format!(
                        "radius must be >= 0, got {r}"
                    )));
                }
                if *r > MAX_RADIUS {
                    return Err(Error::InvalidShape(format!(
                        "radius {r} exceeds the maximum of {MAX_RADIUS}"
                    )));
                }
                Ok(())
            }
        }
    }

    /// Number of tiles the shape lays out.
    pub fn tile_count(&self) -> Result<usize> {
        self.validate()?;
        match self {
            BoardShape::Explicit(coords) => Ok(coords.len()),
            BoardShape::Radius(r) => Ok(hexagon_tile_count(*r)),
        }
    }

    /// Whether `coord` is part of the shape.
    pub fn contains(&self, coord: AxialCoord) -> bool {
        match self {
            BoardShape::Explicit(coords) => coords.contains(&coord),
            BoardShape::Radius(r) => {
                *r >= 0 && coord.distance(AxialCoord::ORIGIN) <= u64::from(r.unsigned_abs())
            }
        }
    }
}

impl Default for BoardShape {
    fn default() -> Self {
        Self::legacy()
    }
}

/// `3R(R + 1) + 1` for a validated radius.
fn hexagon_tile_count(radius: i32) -> usize {
    let r = radius as usize;
    3 * r * (r + 1) + 1
}

/// Ordered tile coordinates for `shape`.
///
/// Generated hexagons are enumerated row-major, `x` ascending then `y`
/// ascending. Explicit lists keep their given order.
pub fn layout_coordinates(shape: &BoardShape) -> Result<Vec<AxialCoord>> {
    shape.validate()?;

    let coords = match shape {
        BoardShape::Explicit(coords) => coords.clone(),
        BoardShape::Radius(r) => {
            let r = *r;
            let mut out = Vec::with_capacity(hexagon_tile_count(r));
            for x in -r..=r {
                let y_min = (-r).max(-r - x);
                let y_max = r.min(r - x);
                for y in y_min..=y_max {
                    out.push(AxialCoord::new(x, y));
                }
            }
            out
        }
    };

    debug!("Laid out {} tiles for {}.", coords.len(), shape_label(shape));
    Ok(coords)
}

fn shape_label(shape: &BoardShape) -> String {
    match shape {
        BoardShape::Explicit(c) => format!("explicit({})", c.len()),
        BoardShape::Radius(r) => format!("radius({r})"),
    }
}
