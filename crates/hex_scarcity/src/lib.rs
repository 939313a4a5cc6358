#![forbid(unsafe_code)]
//! hex_scarcity: stochastic hex-grid resource sampling driven by a scarcity percentage.
//!
//! Modules:
//! - hex: axial coordinates, Cartesian projection, hexagon corners
//! - board: board shapes (explicit lists, generated hexagons) and their layout
//! - sampling: random draws, validated scarcity, per-session seeds
//! - sampler: sampling passes, results, events
//!
//! Positions use [`glam::DVec2`]; convert to [`mint`] types at API boundaries if needed.
pub mod board;
pub mod error;
pub mod hex;
pub mod sampler;
pub mod sampling;

pub use glam;
pub use mint;

/// Convenient re-exports for common types. Import with `use hex_scarcity::prelude::*;`.
pub mod prelude {
    pub use crate::board::{layout_coordinates, BoardShape, FULL_BOARD_RADIUS, LEGACY_BOARD};
    pub use crate::error::{Error, Result};
    pub use crate::hex::{hex_corners, project, project_coord, AxialCoord};
    pub use crate::sampler::events::{
        EventSink, FnSink, KindFilterSink, MultiSink, SampleEvent, SampleEventKind, VecSink,
    };
    pub use crate::sampler::result::{CategoryCounts, SamplingResult, SamplingSummary};
    pub use crate::sampler::runner::{
        sample, sample_with_events, HexGridSampler, DEFAULT_CATEGORIES,
    };
    pub use crate::sampler::{CategoryId, Tile, TileCategory};
    pub use crate::sampling::{seed_for_session, session_rng, Scarcity};
}
