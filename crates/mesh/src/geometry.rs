pub type Vector3 = cgmath::Vector3<f64>;

// We rely on Vector3 being repr(c).
static_assertions::assert_eq_size!(Vector3, [f64; 3]);
static_assertions::assert_eq_align!(Vector3, f64);

// Hosts consume corner colors as packed RGBA floats.
static_assertions::assert_eq_size!(Rgba, [f32; 4]);
static_assertions::assert_eq_align!(Rgba, f32);

/// A single quadrilateral face.
///
/// The four entries are indices into the point list of the owning mesh and are
/// listed in winding order: `p0 -> p1 -> p2 -> p3 -> p0`.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash)]
#[repr(C)]
pub struct Quad {
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
    pub p3: u32,
}

impl Quad {
    pub fn new(p0: u32, p1: u32, p2: u32, p3: u32) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Returns the face corners in winding order.
    pub fn corners(&self) -> [u32; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// The largest vertex index referenced by this face.
    pub fn max_index(&self) -> u32 {
        self.p0.max(self.p1).max(self.p2).max(self.p3)
    }
}

/// A linear RGBA color with f32 channels in `[0, 1]`.
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const RED: Rgba = Rgba::opaque(1.0, 0.0, 0.0);

    /// Creates a fully opaque color.
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl std::default::Default for Rgba {
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

impl From<Rgba> for (f32, f32, f32, f32) {
    fn from(c: Rgba) -> Self {
        (c.r, c.g, c.b, c.a)
    }
}
