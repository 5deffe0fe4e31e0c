use crate::config::SeamMode;

/// Subdivisions across the width of the strip.
pub const WIDTH_SEGMENTS: u32 = 1;

/// Points sampled on every cross-section.
pub const CROSS_SECTION_POINTS: u32 = WIDTH_SEGMENTS + 1;

/// Position of a sample on the parameter grid.
///
/// `i` walks along the strip (`0..=segments`), `j` across it (`0..=WIDTH_SEGMENTS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridIndex {
    pub i: u32,
    pub j: u32,
}

impl GridIndex {
    pub fn new(i: u32, j: u32) -> Self {
        debug_assert!(j <= WIDTH_SEGMENTS);
        Self { i, j }
    }

    /// Index of this sample in the flat point list.
    ///
    /// Points are stored cross-section by cross-section, so the two edge points of
    /// cross-section `i` sit next to each other.
    pub fn flat(self) -> u32 {
        self.i * CROSS_SECTION_POINTS + self.j
    }

    #[cfg(test)]
    fn from_flat(index: u32) -> Self {
        Self {
            i: index / CROSS_SECTION_POINTS,
            j: index % CROSS_SECTION_POINTS,
        }
    }

    /// The width parameter `t` in `[-1, 1]` for this sample.
    pub fn width_param(self) -> f64 {
        -1.0 + 2.0 * self.j as f64 / WIDTH_SEGMENTS as f64
    }
}

/// Cross-sections that carry their own vertices.
pub fn ring_count(segments: u32, seam: SeamMode) -> u32 {
    match seam {
        SeamMode::Open => segments + 1,
        SeamMode::Welded => segments,
    }
}

/// Maps a grid sample to the vertex that represents it in a mesh of `segments` quads.
///
/// With a welded seam the final cross-section does not exist and its samples resolve to the
/// first cross-section, which occupies the same place in space.
pub fn vertex_index(index: GridIndex, segments: u32, seam: SeamMode) -> u32 {
    match seam {
        SeamMode::Open => index.flat(),
        SeamMode::Welded if segments > 0 => GridIndex {
            i: index.i % segments,
            ..index
        }
        .flat(),
        SeamMode::Welded => index.flat(),
    }
}
