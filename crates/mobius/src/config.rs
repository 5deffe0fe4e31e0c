use crate::error::{Error, Result};
use crate::grid::CROSS_SECTION_POINTS;

/// Name of the corner color layer the generator writes and the material reads.
pub const COLOR_LAYER: &str = "Col";

/// Largest segment count whose point indices still fit in an `i32`.
pub const MAX_SEGMENTS: u32 = i32::MAX as u32 / CROSS_SECTION_POINTS - 1;

/// How the last cross-section of the strip relates to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeamMode {
    /// Sample `segments + 1` cross-sections. The last one coincides with the first but keeps
    /// its own vertices, so the strip is closed geometrically but not topologically.
    #[default]
    Open,
    /// Sample `segments` cross-sections and point the last faces back at the first one.
    Welded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MobiusConfig {
    /// Number of quads along the length of the strip.
    pub segments: u32,
    /// Distance between the two edges of the strip.
    pub width: f64,
    /// Distance from the center of the strip to its centerline.
    pub radius: f64,
    /// Base name the scene entities are derived from.
    pub name: String,
    pub seam: SeamMode,
}

impl Default for MobiusConfig {
    fn default() -> Self {
        Self {
            segments: 256,
            width: 0.4,
            radius: 1.0,
            name: "MobiusStrip".to_string(),
            seam: SeamMode::Open,
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            reason: format!("must be a positive finite number, got {value}"),
        })
    }
}

impl MobiusConfig {
    /// Rejects parameters that would produce degenerate geometry.
    pub fn validate(&self) -> Result<()> {
        if self.segments == 0 {
            return Err(Error::InvalidParameter {
                name: "segments",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.segments > MAX_SEGMENTS {
            return Err(Error::InvalidParameter {
                name: "segments",
                reason: format!("must be at most {MAX_SEGMENTS}, got {}", self.segments),
            });
        }
        // A single welded segment would fold its far cross-section onto its near one.
        if self.seam == SeamMode::Welded && self.segments < 2 {
            return Err(Error::InvalidParameter {
                name: "segments",
                reason: "a welded seam needs at least 2 segments".to_string(),
            });
        }
        positive("width", self.width)?;
        positive("radius", self.radius)?;
        if self.name.trim().is_empty() {
            return Err(Error::InvalidParameter {
                name: "name",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn object_name(&self) -> &str {
        &self.name
    }

    pub fn mesh_name(&self) -> String {
        format!("{}_Mesh", self.name)
    }

    pub fn material_name(&self) -> String {
        format!("{}_Material", self.name)
    }

    /// Every scene entity name a run creates.
    pub fn entity_names(&self) -> [String; 3] {
        [
            self.object_name().to_string(),
            self.mesh_name(),
            self.material_name(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(config: MobiusConfig) -> &'static str {
        match config.validate() {
            Err(Error::InvalidParameter { name, .. }) => name,
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn segment_limits() {
        let base = MobiusConfig::default();
        assert_eq!(
            "segments",
            invalid(MobiusConfig {
                segments: MAX_SEGMENTS + 1,
                ..base.clone()
            })
        );
        assert_eq!(
            "segments",
            invalid(MobiusConfig {
                segments: u32::MAX,
                ..base.clone()
            })
        );
        let largest = MobiusConfig {
            segments: MAX_SEGMENTS,
            ..base
        };
        assert!(largest.validate().is_ok());
        let point_count = (largest.segments + 1) as u64 * CROSS_SECTION_POINTS as u64;
        assert!(point_count <= i32::MAX as u64);
    }

    #[test]
    fn welded_seam_needs_two_segments() {
        let welded = MobiusConfig {
            seam: SeamMode::Welded,
            ..MobiusConfig::default()
        };
        assert_eq!(
            "segments",
            invalid(MobiusConfig {
                segments: 1,
                ..welded.clone()
            })
        );
        assert!(MobiusConfig {
            segments: 2,
            ..welded
        }
        .validate()
        .is_ok());
        assert!(MobiusConfig {
            segments: 1,
            ..MobiusConfig::default()
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn default_is_valid() {
        assert!(MobiusConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_parameters() {
        let base = MobiusConfig::default();
        assert_eq!(
            "segments",
            invalid(MobiusConfig {
                segments: 0,
                ..base.clone()
            })
        );
        assert_eq!(
            "width",
            invalid(MobiusConfig {
                width: 0.0,
                ..base.clone()
            })
        );
        assert_eq!(
            "width",
            invalid(MobiusConfig {
                width: f64::NAN,
                ..base.clone()
            })
        );
        assert_eq!(
            "radius",
            invalid(MobiusConfig {
                radius: -1.0,
                ..base.clone()
            })
        );
        assert_eq!(
            "radius",
            invalid(MobiusConfig {
                radius: f64::INFINITY,
                ..base.clone()
            })
        );
        assert_eq!(
            "name",
            invalid(MobiusConfig {
                name: "  ".into(),
                ..base
            })
        );
    }

    #[test]
    fn derived_names() {
        let config = MobiusConfig::default();
        assert_eq!(
            ["MobiusStrip", "MobiusStrip_Mesh", "MobiusStrip_Material"],
            config.entity_names()
        );
    }
}
