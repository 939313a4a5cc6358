//! Axial hex coordinates and their Cartesian projection.
//!
//! A hex cell is addressed by an axial pair `(x, y)`. The implicit third cube
//! coordinate is `-x - y`, which is what bounds the generated hexagonal boards in
//! [`crate::board`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod projection;

pub use projection::{hex_corners, project, project_coord};

/// Axial offsets of the six neighbours of a cell, counter-clockwise starting east.
pub const NEIGHBOR_OFFSETS: [AxialCoord; 6] = [
    AxialCoord::new(1, 0),
    AxialCoord::new(0, 1),
    AxialCoord::new(-1, 1),
    AxialCoord::new(-1, 0),
    AxialCoord::new(0, -1),
    AxialCoord::new(1, -1),
];

/// Integer axial coordinate of a hex cell. Unique per board.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxialCoord {
    pub x: i32,
    pub y: i32,
}

impl AxialCoord {
    pub const ORIGIN: AxialCoord = AxialCoord::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The derived third cube component, `-x - y`, widened to `i64`.
    #[inline]
    pub fn z(self) -> i64 {
        -i64::from(self.x) - i64::from(self.y)
    }

    /// Number of steps between two cells on an unbounded hex grid.
    pub fn distance(self, other: AxialCoord) -> u64 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        let dz = (self.z() - other.z()).unsigned_abs();
        dx.max(dy).max(dz)
    }

    /// Neighbour at `offset`, or `None` past the edge of the `i32` range.
    pub fn checked_offset(self, offset: AxialCoord) -> Option<AxialCoord> {
        Some(AxialCoord::new(
            self.x.checked_add(offset.x)?,
            self.y.checked_add(offset.y)?,
        ))
    }

    /// The surrounding cells, in [`NEIGHBOR_OFFSETS`] order. Cells at the edge
    /// of the `i32` range have fewer than six.
    pub fn neighbors(self) -> impl Iterator<Item = AxialCoord> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |o| self.checked_offset(o))
    }

    pub fn is_neighbor(self, other: AxialCoord) -> bool {
        self.distance(other) == 1
    }
}

impl From<(i32, i32)> for AxialCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<AxialCoord> for (i32, i32) {
    fn from(c: AxialCoord) -> Self {
        (c.x, c.y)
    }
}
