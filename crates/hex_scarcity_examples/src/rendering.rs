//! PNG rendering of sampled boards and shared example setup.
use std::collections::HashMap;
use std::path::Path;

use anyhow::{ensure, Context};
use glam::DVec2;
use hex_scarcity::hex::projection::{HALF_SQRT_3, SQRT_3};
use hex_scarcity::prelude::*;
use image::{Rgb, RgbImage};
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber. `RUST_LOG` wins over the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("Tracing subscriber already installed.");
    }
}

/// Fill colors per category. Unknown categories use `fallback`.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: HashMap<CategoryId, [u8; 3]>,
    failed: [u8; 3],
    fallback: [u8; 3],
}

impl Palette {
    pub fn new(failed: [u8; 3]) -> Self {
        Self {
            colors: HashMap::new(),
            failed,
            fallback: [255, 0, 255],
        }
    }

    /// Wheat, Ore, Brick, Wood and Sheep, with failed tiles in slate.
    pub fn dashboard() -> Self {
        Self::new([0x2C, 0x3E, 0x50])
            .with_color("Wheat", [0xF1, 0xC4, 0x0F])
            .with_color("Ore", [0x7F, 0x8C, 0x8D])
            .with_color("Brick", [0xC0, 0x39, 0x2B])
            .with_color("Wood", [0x27, 0xAE, 0x60])
            .with_color("Sheep", [0xEC, 0xF0, 0xF1])
    }

    pub fn with_color(mut self, category: impl Into<CategoryId>, color: [u8; 3]) -> Self {
        self.colors.insert(category.into(), color);
        self
    }

    pub fn with_fallback(mut self, color: [u8; 3]) -> Self {
        self.fallback = color;
        self
    }

    pub fn color_for(&self, category: &TileCategory) -> [u8; 3] {
        match category {
            TileCategory::Failed => self.failed,
            TileCategory::Resource(id) => self.colors.get(id).copied().unwrap_or(self.fallback),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dashboard()
    }
}

/// Output image and view window for [`render_board_to_png`].
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    /// World-space lower-left corner of the view.
    pub view_min: DVec2,
    /// World-space upper-right corner of the view.
    pub view_max: DVec2,
    pub background: [u8; 3],
    pub edge_color: [u8; 3],
    /// Outline width in world units.
    pub edge_width: f64,
    /// Hexagon circumradius in world units.
    pub tile_radius: f64,
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_size: (600, 600),
            view_min: DVec2::splat(-4.0),
            view_max: DVec2::splat(4.0),
            background: [0xFD, 0xFB, 0xF7],
            edge_color: [0x2C, 0x3E, 0x50],
            edge_width: 0.06,
            tile_radius: 1.0,
            palette: Palette::dashboard(),
        }
    }
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self {
            image_size,
            ..Default::default()
        }
    }

    pub fn with_view(mut self, view_min: DVec2, view_max: DVec2) -> Self {
        self.view_min = view_min;
        self.view_max = view_max;
        self
    }

    /// Square view that contains every tile of `result` plus `margin`.
    pub fn fit_to(mut self, result: &SamplingResult, margin: f64) -> Self {
        let reach = result
            .tiles
            .iter()
            .map(|t| t.position.abs().max_element())
            .fold(0.0_f64, f64::max)
            + self.tile_radius
            + margin;
        self.view_min = DVec2::splat(-reach);
        self.view_max = DVec2::splat(reach);
        self
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_edge(mut self, color: [u8; 3], width: f64) -> Self {
        self.edge_color = color;
        self.edge_width = width;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.image_size.0 > 0 && self.image_size.1 > 0,
            "image_size must be > 0 in both components"
        );
        ensure!(
            self.view_max.x > self.view_min.x && self.view_max.y > self.view_min.y,
            "view_max must exceed view_min"
        );
        ensure!(self.tile_radius > 0.0, "tile_radius must be > 0");
        ensure!(self.edge_width >= 0.0, "edge_width must be >= 0");
        Ok(())
    }

    fn world_per_pixel(&self) -> DVec2 {
        (self.view_max - self.view_min)
            / DVec2::new(self.image_size.0 as f64, self.image_size.1 as f64)
    }

    /// World position of the center of pixel `(px, py)`; image y grows downwards.
    fn pixel_to_world(&self, px: u32, py: u32) -> DVec2 {
        let step = self.world_per_pixel();
        DVec2::new(
            self.view_min.x + (px as f64 + 0.5) * step.x,
            self.view_max.y - (py as f64 + 0.5) * step.y,
        )
    }

    fn world_to_pixel(&self, p: DVec2) -> (i64, i64) {
        let step = self.world_per_pixel();
        (
            ((p.x - self.view_min.x) / step.x).floor() as i64,
            ((self.view_max.y - p.y) / step.y).floor() as i64,
        )
    }
}

/// Signed distance from `p` to the edge of a pointy-top hexagon centered at the
/// origin; positive inside.
fn hex_inset(p: DVec2, radius: f64) -> f64 {
    let ax = p.x.abs();
    let ay = p.y.abs();
    let to_side = HALF_SQRT_3 * radius - ax;
    let to_slant = (radius - ay - ax / SQRT_3) * HALF_SQRT_3;
    to_side.min(to_slant)
}

/// Draw every tile of `result` into an RGB image.
pub fn render_board(result: &SamplingResult, config: &RenderConfig) -> anyhow::Result<RgbImage> {
    config.validate()?;
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    for tile in &result.tiles {
        let fill = config.palette.color_for(&tile.category);
        let r = config.tile_radius;
        let (x0, y0) = config.world_to_pixel(tile.position + DVec2::new(-r, r));
        let (x1, y1) = config.world_to_pixel(tile.position + DVec2::new(r, -r));

        let x0 = x0.clamp(0, w as i64 - 1) as u32;
        let x1 = x1.clamp(0, w as i64 - 1) as u32;
        let y0 = y0.clamp(0, h as i64 - 1) as u32;
        let y1 = y1.clamp(0, h as i64 - 1) as u32;

        for py in y0..=y1 {
            for px in x0..=x1 {
                let local = config.pixel_to_world(px, py) - tile.position;
                let inset = hex_inset(local, r);
                if inset < 0.0 {
                    continue;
                }
                let color = if inset < config.edge_width * 0.5 {
                    config.edge_color
                } else {
                    fill
                };
                img.put_pixel(px, py, Rgb(color));
            }
        }
    }

    Ok(img)
}

/// Render `result` and write it as PNG to `out_path`.
pub fn render_board_to_png(
    result: &SamplingResult,
    config: &RenderConfig,
    out_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let out_path = out_path.as_ref();
    let img = render_board(result, config)?;
    img.save(out_path)
        .with_context(|| format!("writing {}", out_path.display()))?;
    tracing::info!("Wrote {}.", out_path.display());
    Ok(())
}
