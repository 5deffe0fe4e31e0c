use mobius_mesh::Rgba;

/// Maps a hue to a fully saturated, full value color.
///
/// The hue is wrapped into `[0, 1)` first, so `1.0` gives the same red as `0.0`. NaN and
/// infinite hues have no position on the wheel and map to red.
///
/// The wheel is split into six sectors; inside each one a single channel ramps while the
/// other two are held at 0 or 1.
pub fn hue_to_rgba(hue: f64) -> Rgba {
    if !hue.is_finite() {
        return Rgba::RED;
    }
    let mut h = hue.rem_euclid(1.0);
    // rem_euclid rounds tiny negative hues up to exactly 1.0.
    if h >= 1.0 {
        h = 0.0;
    }
    let h6 = h * 6.0;
    let sector = h6.floor();
    let f = (h6 - sector) as f32;
    let q = 1.0 - f;
    match sector as u8 {
        0 => Rgba::opaque(1.0, f, 0.0),
        1 => Rgba::opaque(q, 1.0, 0.0),
        2 => Rgba::opaque(0.0, 1.0, f),
        3 => Rgba::opaque(0.0, q, 1.0),
        4 => Rgba::opaque(f, 0.0, 1.0),
        _ => Rgba::opaque(1.0, 0.0, q),
    }
}
