//! Frustum plane in Hessian normal form

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

/// Normal magnitudes below this are treated as degenerate.
pub const NORMAL_EPSILON: f32 = 1e-6;

/// A plane defined by a unit normal and signed distance from the origin
/// (coefficients (a,b,c,d) with ax + by + cz + d = 0).
///
/// 16 bytes, `Pod`, so plane arrays can go straight into GPU culling buffers.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    /// The all-zero sentinel plane (degenerate).
    pub const ZERO: Plane = Plane {
        normal: Vec3::ZERO,
        d: 0.0,
    };

    pub fn new(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Build a plane from raw (a,b,c,d) coefficients without normalizing
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        Self {
            normal: coefficients.truncate(),
            d: coefficients.w,
        }
    }

    /// Scale the coefficients so the normal has unit length.
    ///
    /// A near-zero normal (singular source transform) yields [`Plane::ZERO`]
    /// instead of dividing by ~0, so NaN never reaches the distance tests.
    pub fn normalized(self) -> Plane {
        let len = self.normal.length();
        if len < NORMAL_EPSILON {
            log::warn!("normalizing plane with near-zero normal {:?}", self.normal);
            return Plane::ZERO;
        }
        Plane {
            normal: self.normal / len,
            d: self.d / len,
        }
    }

    /// Signed distance from point to plane (positive = in front)
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }

    /// True if the normal is too short for distance tests to mean anything
    pub fn is_degenerate(&self) -> bool {
        self.normal.length_squared() < NORMAL_EPSILON * NORMAL_EPSILON
    }
}
