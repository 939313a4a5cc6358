//! Sampling passes over a hex board.
//!
//! [`HexGridSampler`] validates a shape and category list once and caches the
//! layout; [`sample`] and [`sample_with_events`] are one-shot wrappers around it.
//! Both paths share a single pass routine.
use std::collections::HashSet;

use glam::DVec2;
use rand::RngCore;
use tracing::{info, warn};

use crate::board::{layout_coordinates, BoardShape};
use crate::error::{Error, Result};
use crate::hex::{project_coord, AxialCoord};
use crate::sampler::events::{EventSink, SampleEvent, SampleEventKind};
use crate::sampler::result::{CategoryCounts, SamplingResult};
use crate::sampler::{CategoryId, Tile, TileCategory};
use crate::sampling::{pick_index, rand01, Scarcity};

/// The five resource categories of the classic board.
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Wheat", "Ore", "Brick", "Wood", "Sheep"];

/// A validated board and category list, ready to run sampling passes.
///
/// The sampler holds no per-pass state; share it by reference and give each
/// caller its own RNG.
#[derive(Debug, Clone)]
pub struct HexGridSampler {
    shape: BoardShape,
    categories: Vec<CategoryId>,
    layout: Vec<AxialCoord>,
    positions: Vec<DVec2>,
}

impl HexGridSampler {
    pub fn try_new<I>(shape: BoardShape, categories: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<CategoryId>,
    {
        let categories = validate_categories(categories)?;
        let layout = layout_coordinates(&shape)?;
        let positions = layout.iter().copied().map(project_coord).collect();

        Ok(Self {
            shape,
            categories,
            layout,
            positions,
        })
    }

    /// The 17-tile small board.
    pub fn legacy<I>(categories: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<CategoryId>,
    {
        Self::try_new(BoardShape::legacy(), categories)
    }

    /// The radius-3 hexagon.
    pub fn full_board<I>(categories: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<CategoryId>,
    {
        Self::try_new(BoardShape::full(), categories)
    }

    pub fn shape(&self) -> &BoardShape {
        &self.shape
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    /// Tile coordinates in layout order.
    pub fn coordinates(&self) -> &[AxialCoord] {
        &self.layout
    }

    pub fn tile_count(&self) -> usize {
        self.layout.len()
    }

    /// Runs one pass at `scarcity` percent.
    pub fn sample<R: RngCore>(&self, scarcity: f64, rng: &mut R) -> Result<SamplingResult> {
        let scarcity = Scarcity::try_new(scarcity)?;
        Ok(self.run(scarcity, rng, &mut ()))
    }

    pub fn sample_with_events<R: RngCore>(
        &self,
        scarcity: f64,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> Result<SamplingResult> {
        let scarcity = Scarcity::try_new(scarcity)?;
        Ok(self.run(scarcity, rng, sink))
    }

    /// Runs one pass with an already validated [`Scarcity`]. Cannot fail.
    pub fn run<R: RngCore>(
        &self,
        scarcity: Scarcity,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> SamplingResult {
        run_pass(self, scarcity, rng, sink)
    }
}

/// Samples `shape` once. Validates everything before the first draw.
pub fn sample<R, S>(
    shape: &BoardShape,
    categories: &[S],
    scarcity: f64,
    rng: &mut R,
) -> Result<SamplingResult>
where
    R: RngCore,
    S: AsRef<str>,
{
    sample_with_events(shape, categories, scarcity, rng, &mut ())
}

pub fn sample_with_events<R, S>(
    shape: &BoardShape,
    categories: &[S],
    scarcity: f64,
    rng: &mut R,
    sink: &mut dyn EventSink,
) -> Result<SamplingResult>
where
    R: RngCore,
    S: AsRef<str>,
{
    let scarcity = Scarcity::try_new(scarcity)?;
    let sampler = HexGridSampler::try_new(
        shape.clone(),
        categories.iter().map(|c| c.as_ref().to_owned()),
    )?;
    Ok(sampler.run(scarcity, rng, sink))
}

fn validate_categories<I>(categories: I) -> Result<Vec<CategoryId>>
where
    I: IntoIterator,
    I::Item: Into<CategoryId>,
{
    let categories: Vec<CategoryId> = categories.into_iter().map(Into::into).collect();
    if categories.is_empty() {
        return Err(Error::InvalidCategories(
            "at least one resource category is required".into(),
        ));
    }
    let mut seen = HashSet::with_capacity(categories.len());
    for c in &categories {
        if !seen.insert(c.as_str()) {
            return Err(Error::InvalidCategories(format!(
                "duplicate category '{c}'"
            )));
        }
    }
    Ok(categories)
}

fn run_pass(
    sampler: &HexGridSampler,
    scarcity: Scarcity,
    rng: &mut dyn RngCore,
    sink: &mut dyn EventSink,
) -> SamplingResult {
    let tile_count = sampler.tile_count();
    let category_count = sampler.categories.len();

    if sink.wants(SampleEventKind::SamplingStarted) {
        sink.send(SampleEvent::SamplingStarted {
            tile_count,
            scarcity,
            category_count,
        });
    }

    if scarcity.is_total() {
        warn!("Scarcity is {}; every tile will fail.", scarcity);
        if sink.wants(SampleEventKind::Warning) {
            sink.send(SampleEvent::Warning {
                context: "scarcity".into(),
                message: "Scarcity is 100%; every tile fails".into(),
            });
        }
    }
    if category_count == 1 {
        warn!(
            "Only one resource category ('{}'); every surviving tile gets it.",
            sampler.categories[0]
        );
        if sink.wants(SampleEventKind::Warning) {
            sink.send(SampleEvent::Warning {
                context: "categories".into(),
                message: "Single resource category; category draw is constant".into(),
            });
        }
    }

    let p_fail = scarcity.probability();
    let mut counts = CategoryCounts::seeded(&sampler.categories);
    let mut tiles = Vec::with_capacity(tile_count);

    for (index, (coord, position)) in sampler
        .layout
        .iter()
        .zip(sampler.positions.iter())
        .enumerate()
    {
        let category = if rand01(rng) < p_fail {
            counts.bump_failed();
            TileCategory::Failed
        } else {
            let pick = pick_index(category_count, rng);
            counts.bump_resource(pick);
            TileCategory::Resource(sampler.categories[pick].clone())
        };

        let tile = Tile::new(*coord, *position, category);
        if sink.wants(SampleEventKind::TileSampled) {
            sink.send(SampleEvent::TileSampled {
                index,
                tile: tile.clone(),
            });
        }
        tiles.push(tile);
    }

    let result = SamplingResult {
        tiles,
        counts,
        scarcity,
    };

    info!(
        "Sampled {} tiles at {} scarcity: {} failed.",
        result.tile_count(),
        scarcity,
        result.failed_count(),
    );

    if sink.wants(SampleEventKind::SamplingFinished) {
        sink.send(SampleEvent::SamplingFinished {
            summary: result.summary(),
        });
    }

    result
}
