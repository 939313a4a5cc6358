//! Scarcity-weighted categorical sampling over a hex board.
//!
//! One pass visits every coordinate of a [`crate::board::BoardShape`] in layout
//! order, decides per tile whether it fails, otherwise picks a resource category
//! uniformly, and tallies the outcome into a [`result::SamplingResult`].
use std::fmt;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hex::AxialCoord;

pub mod events;
pub mod result;
pub mod runner;

/// Label shown for failed tiles.
pub const FAILED_LABEL: &str = "FAILED";

pub type CategoryId = String;

/// Outcome of sampling a single tile.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TileCategory {
    /// One of the caller-supplied resource categories.
    Resource(CategoryId),
    /// The tile failed its scarcity trial.
    Failed,
}

impl TileCategory {
    pub fn resource(id: impl Into<CategoryId>) -> Self {
        TileCategory::Resource(id.into())
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TileCategory::Failed)
    }

    pub fn label(&self) -> &str {
        match self {
            TileCategory::Resource(id) => id,
            TileCategory::Failed => FAILED_LABEL,
        }
    }
}

impl fmt::Display for TileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A sampled board cell.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    /// Axial coordinate, unique within the board.
    pub coord: AxialCoord,
    /// Cartesian center, see [`crate::hex::project`].
    pub position: DVec2,
    pub category: TileCategory,
}

impl Tile {
    pub fn new(coord: AxialCoord, position: DVec2, category: TileCategory) -> Self {
        Self {
            coord,
            position,
            category,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.category.is_failed()
    }

    /// Center as a [`mint`] vector for renderers that do not use glam.
    pub fn position_mint(&self) -> mint::Vector2<f64> {
        self.position.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(TileCategory::Failed.to_string(), "FAILED");
        assert_eq!(TileCategory::resource("Ore").label(), "Ore");
        assert!(TileCategory::Failed.is_failed());
        assert!(!TileCategory::resource("Ore").is_failed());
        assert_eq!(format!("{:>6}", TileCategory::resource("Ore")), "   Ore");
    }

    #[test]
    fn tile_constructor_sets_fields() {
        let tile = Tile::new(
            AxialCoord::new(1, 0),
            DVec2::new(1.0, 0.0),
            TileCategory::Failed,
        );
        assert_eq!(tile.coord, AxialCoord::new(1, 0));
        assert!(tile.is_failed());
        let m = tile.position_mint();
        assert_eq!((m.x, m.y), (1.0, 0.0));
    }
}
