use mobius_mesh::{Quad, Rgba};

use crate::color::hue_to_rgba;
use crate::config::SeamMode;
use crate::grid::{vertex_index, GridIndex};
use crate::sampler::{longitudinal_angle, SWEEP};

/// Faces and corner colors of a strip, in matching order.
#[derive(Debug, Clone, PartialEq)]
pub struct StripTopology {
    pub faces: Vec<Quad>,
    /// Four entries per face, in the winding order of that face.
    pub corner_colors: Vec<Rgba>,
}

/// Grid samples at the corners of face `i`, in winding order.
///
/// ```text
///  (i,0) ---- (i+1,0)
///    |           |
///  (i,1) ---- (i+1,1)
/// ```
fn face_corners(i: u32) -> [GridIndex; 4] {
    [
        GridIndex::new(i, 0),
        GridIndex::new(i + 1, 0),
        GridIndex::new(i + 1, 1),
        GridIndex::new(i, 1),
    ]
}

/// Hue of every point on cross-section `i`; runs from 0 at the start of the strip to 1 at the
/// end.
pub fn hue_at(i: u32, segments: u32) -> f64 {
    longitudinal_angle(i, segments) / SWEEP
}

/// One quad per segment. Zero segments give zero faces.
pub fn strip_faces(segments: u32, seam: SeamMode) -> Vec<Quad> {
    (0..segments)
        .map(|i| {
            let [a, b, c, d] = face_corners(i).map(|g| vertex_index(g, segments, seam));
            Quad::new(a, b, c, d)
        })
        .collect()
}

/// Hue of every face corner, face by face.
///
/// The hue only depends on how far along the strip a corner is, so it is taken from the
/// corner's cross-section rather than from the vertex it resolves to. This keeps the final
/// corners at hue 1 even when the seam is welded.
pub fn corner_hues(segments: u32) -> Vec<f64> {
    (0..segments)
        .flat_map(face_corners)
        .map(|g| hue_at(g.i, segments))
        .collect()
}

pub fn corner_colors(segments: u32) -> Vec<Rgba> {
    corner_hues(segments).into_iter().map(hue_to_rgba).collect()
}

pub fn build_topology(segments: u32, seam: SeamMode) -> StripTopology {
    StripTopology {
        faces: strip_faces(segments, seam),
        corner_colors: corner_colors(segments),
    }
}

#[cfg(test)]
mod tests {
    use float_eq::assert_float_eq;

    use super::*;
    use crate::grid::CROSS_SECTION_POINTS;

    #[test]
    fn open_faces() {
        assert_eq!(
            vec![Quad::new(0, 2, 3, 1), Quad::new(2, 4, 5, 3), Quad::new(4, 6, 7, 5)],
            strip_faces(3, SeamMode::Open)
        );
    }

    #[test]
    fn welded_faces_close_on_the_first_ring() {
        assert_eq!(
            vec![Quad::new(0, 2, 3, 1), Quad::new(2, 4, 5, 3), Quad::new(4, 0, 1, 5)],
            strip_faces(3, SeamMode::Welded)
        );
    }

    #[test]
    fn faces_have_four_distinct_corners() {
        for seam in [SeamMode::Open, SeamMode::Welded] {
            for segments in 2..9 {
                for face in strip_faces(segments, seam) {
                    let mut corners = face.corners();
                    corners.sort_unstable();
                    assert!(
                        corners.windows(2).all(|w| w[0] != w[1]),
                        "{seam:?} strip of {segments} has a repeated corner in {face:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn no_segments_no_faces() {
        let topology = build_topology(0, SeamMode::Open);
        assert!(topology.faces.is_empty());
        assert!(topology.corner_colors.is_empty());
    }

    #[test]
    fn hue_matches_vertex_cross_section() {
        let segments = 16;
        let faces = strip_faces(segments, SeamMode::Open);
        let hues = corner_hues(segments);
        let corners = faces.iter().flat_map(|f| f.corners());
        for (vertex, hue) in corners.zip(hues) {
            let i = vertex / CROSS_SECTION_POINTS;
            assert_float_eq!(hue, i as f64 / segments as f64, abs <= 1e-12);
        }
    }

    #[test]
    fn hue_spans_exactly_one_cycle() {
        assert_eq!(0.0, hue_at(0, 256));
        assert_eq!(1.0, hue_at(256, 256));
        assert_float_eq!(hue_at(128, 256), 0.5, abs <= 1e-12);
    }

    #[test]
    fn both_ends_are_red() {
        let colors = corner_colors(8);
        // First corner of the first face and second corner of the last face.
        assert_eq!(Rgba::RED, colors[0]);
        assert_eq!(Rgba::RED, colors[colors.len() - 3]);
    }

    #[test]
    fn corners_on_a_cross_section_share_a_color() {
        let colors = corner_colors(8);
        for face in colors.chunks(4) {
            assert_eq!(face[0], face[3]);
            assert_eq!(face[1], face[2]);
        }
        // The trailing edge of one face is the leading edge of the next.
        for pair in colors.chunks(4).collect::<Vec<_>>().windows(2) {
            assert_eq!(pair[0][1], pair[1][0]);
        }
    }

    #[test]
    fn seam_modes_share_colors() {
        assert_eq!(
            build_topology(5, SeamMode::Open).corner_colors,
            build_topology(5, SeamMode::Welded).corner_colors
        );
    }
}
