//! Sampling results and per-category tallies.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sampler::{CategoryId, Tile, TileCategory};
use crate::sampling::Scarcity;

/// Tile counts per category, pre-seeded with zeros for every known category.
///
/// Resource categories keep the caller's order; the failed count is tracked
/// separately.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    resources: Vec<(CategoryId, usize)>,
    failed: usize,
}

impl CategoryCounts {
    /// Zeroed counts for `categories`.
    pub fn seeded<'a, I>(categories: I) -> Self
    where
        I: IntoIterator<Item = &'a CategoryId>,
    {
        Self {
            resources: categories.into_iter().map(|c| (c.clone(), 0)).collect(),
            failed: 0,
        }
    }

    pub(crate) fn bump_resource(&mut self, index: usize) {
        self.resources[index].1 += 1;
    }

    pub(crate) fn bump_failed(&mut self) {
        self.failed += 1;
    }

    /// Count for `category`, or `None` if it is not a known category.
    pub fn get(&self, category: &TileCategory) -> Option<usize> {
        match category {
            TileCategory::Failed => Some(self.failed),
            TileCategory::Resource(id) => self
                .resources
                .iter()
                .find(|(c, _)| c == id)
                .map(|(_, n)| *n),
        }
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Resource counts in caller order.
    pub fn resources(&self) -> &[(CategoryId, usize)] {
        &self.resources
    }

    /// All counts, resources first, failed last.
    pub fn iter(&self) -> impl Iterator<Item = (TileCategory, usize)> + '_ {
        self.resources
            .iter()
            .map(|(c, n)| (TileCategory::Resource(c.clone()), *n))
            .chain(std::iter::once((TileCategory::Failed, self.failed)))
    }

    /// Sum over every category including failed.
    pub fn total(&self) -> usize {
        self.failed + self.resources.iter().map(|(_, n)| n).sum::<usize>()
    }
}

/// Tiles and tallies from one sampling pass.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SamplingResult {
    /// Tiles in layout order.
    pub tiles: Vec<Tile>,
    pub counts: CategoryCounts,
    /// Scarcity the pass ran with.
    pub scarcity: Scarcity,
}

impl SamplingResult {
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn failed_count(&self) -> usize {
        self.counts.failed()
    }

    pub fn count(&self, category: &TileCategory) -> usize {
        self.counts.get(category).unwrap_or(0)
    }

    /// Share of failed tiles in [0, 1]; zero for an empty result.
    pub fn failed_fraction(&self) -> f64 {
        if self.tiles.is_empty() {
            return 0.0;
        }
        self.failed_count() as f64 / self.tile_count() as f64
    }

    pub fn summary(&self) -> SamplingSummary {
        SamplingSummary {
            tile_count: self.tile_count(),
            failed_count: self.failed_count(),
            counts: self.counts.clone(),
        }
    }
}

/// Tile-free digest of a [`SamplingResult`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SamplingSummary {
    pub tile_count: usize,
    pub failed_count: usize,
    pub counts: CategoryCounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<CategoryId> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn seeded_counts_start_at_zero() {
        let cats = ids(&["Wheat", "Ore"]);
        let counts = CategoryCounts::seeded(&cats);
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.get(&TileCategory::resource("Wheat")), Some(0));
        assert_eq!(counts.get(&TileCategory::Failed), Some(0));
        assert_eq!(counts.get(&TileCategory::resource("Gold")), None);
    }

    #[test]
    fn bumps_accumulate_and_iterate_in_order() {
        let cats = ids(&["Wheat", "Ore"]);
        let mut counts = CategoryCounts::seeded(&cats);
        counts.bump_resource(1);
        counts.bump_resource(1);
        counts.bump_failed();
        assert_eq!(counts.total(), 3);
        let listed: Vec<_> = counts.iter().collect();
        assert_eq!(
            listed,
            vec![
                (TileCategory::resource("Wheat"), 0),
                (TileCategory::resource("Ore"), 2),
                (TileCategory::Failed, 1),
            ]
        );
    }

    #[test]
    fn failed_fraction_of_empty_result_is_zero() {
        let result = SamplingResult {
            tiles: Vec::new(),
            counts: CategoryCounts::default(),
            scarcity: Scarcity::DEFAULT,
        };
        assert_eq!(result.failed_fraction(), 0.0);
        assert_eq!(result.summary().tile_count, 0);
    }
}
