//! World-space point type and rail-plane utilities.
//!
//! Coordinates follow the fab-floor convention: X right, Y up, Z toward the
//! viewer, all in metres.  Vehicles live on the horizontal rail plane at
//! `y = rail_height`, so most distance queries ignore Y.

/// A world-space position stored as single-precision floats.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A point on the rail plane at `rail_height`.
    #[inline]
    pub fn on_rail(x: f32, z: f32, rail_height: f32) -> Self {
        Self { x, y: rail_height, z }
    }

    /// Straight-line distance projected onto the rail plane (Y ignored).
    #[inline]
    pub fn planar_distance(self, other: Point3) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Rail distance between two points when travel is restricted to X and Z
    /// axis-aligned segments.
    #[inline]
    pub fn manhattan_distance(self, other: Point3) -> f32 {
        (other.x - self.x).abs() + (other.z - self.z).abs()
    }

    /// `true` if the two points share an X or a Z coordinate within
    /// `tolerance`, i.e. a single axis-aligned segment joins them.
    #[inline]
    pub fn axis_aligned_with(self, other: Point3, tolerance: f32) -> bool {
        (self.x - other.x).abs() <= tolerance || (self.z - other.z).abs() <= tolerance
    }

    /// Yaw (rotation about +Y) of the direction from `self` toward `other`,
    /// measured so that 0 faces +Z and π/2 faces +X.
    ///
    /// Returns `None` when the points coincide on the rail plane.
    #[inline]
    pub fn heading_to(self, other: Point3) -> Option<f32> {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        if dx.abs() <= f32::EPSILON && dz.abs() <= f32::EPSILON {
            return None;
        }
        Some(dx.atan2(dz))
    }
}

impl std::fmt::Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
