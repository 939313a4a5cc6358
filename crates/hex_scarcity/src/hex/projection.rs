//! Axial to Cartesian projection for unit hex tiles.
//!
//! Tiles have circumradius 1 and are rotated by 30 degrees (pointy-top), so the
//! horizontal spacing between centers is `sqrt(3)` and the row spacing is `1.5`.
//! Neighbouring tiles placed with [`project`] meet edge to edge.
use glam::DVec2;

use crate::hex::AxialCoord;

/// `sqrt(3)` as an `f64`.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2_f64;

/// Half of [`SQRT_3`], the x offset contributed by one step along the y axis.
pub const HALF_SQRT_3: f64 = SQRT_3 * 0.5;

/// Vertical distance between two adjacent rows.
pub const ROW_SPACING: f64 = 1.5;

/// Orientation of the first corner returned by [`hex_corners`], in degrees.
pub const ORIENTATION_DEG: f64 = 30.0;

/// Map an axial coordinate `(x, y)` to its tile center.
#[inline]
pub fn project(x: i32, y: i32) -> DVec2 {
    let x = x as f64;
    let y = y as f64;
    DVec2::new(x * SQRT_3 + y * HALF_SQRT_3, y * ROW_SPACING)
}

#[inline]
pub fn project_coord(coord: AxialCoord) -> DVec2 {
    project(coord.x, coord.y)
}

/// Corners of the pointy-top hexagon centered at `center`, counter-clockwise
/// starting at 30 degrees.
pub fn hex_corners(center: DVec2, circumradius: f64) -> [DVec2; 6] {
    std::array::from_fn(|k| {
        let angle = (ORIENTATION_DEG + 60.0 * k as f64).to_radians();
        center + DVec2::new(angle.cos(), angle.sin()) * circumradius
    })
}
