/// Strip parameters together with the counts a generator must produce for them.
pub struct TestStrip {
    pub segments: u32,
    pub width: f64,
    pub radius: f64,
    pub vertex_count: usize,
    pub face_count: usize,
}

/// The parameters the generator ships with.
pub const DEFAULT_STRIP: TestStrip = TestStrip {
    segments: 256,
    width: 0.4,
    radius: 1.0,
    vertex_count: 514,
    face_count: 256,
};

/// The smallest valid strip: one quad spanning the whole sweep.
pub const SINGLE_SEGMENT: TestStrip = TestStrip {
    segments: 1,
    width: 0.4,
    radius: 1.0,
    vertex_count: 4,
    face_count: 1,
};

pub const WIDE_STRIP: TestStrip = TestStrip {
    segments: 12,
    width: 1.5,
    radius: 2.0,
    vertex_count: 26,
    face_count: 12,
};

/// An odd segment count, so no ring lands exactly on the half-way angle.
pub const ODD_STRIP: TestStrip = TestStrip {
    segments: 7,
    width: 0.4,
    radius: 1.0,
    vertex_count: 16,
    face_count: 7,
};

pub const ALL_STRIPS: &[TestStrip] = &[DEFAULT_STRIP, SINGLE_SEGMENT, WIDE_STRIP, ODD_STRIP];
