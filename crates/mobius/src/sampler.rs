use std::f64::consts::PI;

use mobius_mesh::Vector3;

use crate::grid::{GridIndex, CROSS_SECTION_POINTS, WIDTH_SEGMENTS};

/// Total angle swept along the strip.
///
/// The cross-section only returns to its starting orientation after two full turns, so the
/// length parameter runs over `[0, 4π]` rather than `[0, 2π]`.
pub const SWEEP: f64 = 4.0 * PI;

/// The length parameter `s` of cross-section `i`.
///
/// A strip with zero segments has a single cross-section at `s = 0`.
pub fn longitudinal_angle(i: u32, segments: u32) -> f64 {
    if segments == 0 {
        return 0.0;
    }
    SWEEP * (i as f64 / segments as f64)
}

/// Offset from the centerline to the point at width parameter `t`.
///
/// The half-angle terms rotate the cross-section half a turn for every full turn of `s`; this
/// is the twist.
pub fn cross_section(s: f64, t: f64, width: f64) -> Vector3 {
    let half = t * (width / 2.0);
    let reach = half * (s / 2.0).cos();
    Vector3::new(reach * s.cos(), reach * s.sin(), half * (s / 2.0).sin())
}

/// Evaluates the Möbius parametrization at `(s, t)`.
pub fn surface_point(s: f64, t: f64, width: f64, radius: f64) -> Vector3 {
    let half = t * (width / 2.0);
    let r = radius + half * (s / 2.0).cos();
    Vector3::new(r * s.cos(), r * s.sin(), half * (s / 2.0).sin())
}

/// Samples `segments + 1` cross-sections of two points each.
///
/// Points are ordered by cross-section, then by width sample, matching
/// [`GridIndex::flat`]. Inputs are not validated.
pub fn sample_surface(segments: u32, width: f64, radius: f64) -> Vec<Vector3> {
    let mut points = Vec::with_capacity((segments as usize + 1) * CROSS_SECTION_POINTS as usize);
    for i in 0..=segments {
        let s = longitudinal_angle(i, segments);
        for j in 0..=WIDTH_SEGMENTS {
            let index = GridIndex::new(i, j);
            debug_assert_eq!(points.len(), index.flat() as usize);
            points.push(surface_point(s, index.width_param(), width, radius));
        }
    }
    points
}
