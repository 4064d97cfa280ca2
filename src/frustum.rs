//! View frustum extraction and intersection tests
//!
//! Planes are extracted from a view-projection matrix with the
//! Gribb/Hartmann method. Convention: glam column-major matrices,
//! right-handed view space, zero-to-one depth range (`Mat4::perspective_rh`
//! and friends). Plane normals point into the frustum, so a point is inside
//! when its signed distance to every plane is non-negative.

use glam::{Mat4, Vec3};

use crate::aabb::Aabb;
use crate::error::{Error, Result};
use crate::plane::Plane;

/// Identifies one of the six bounding planes of a [`Frustum`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrustumPlane {
    Near = 0,
    Far,
    Left,
    Right,
    Top,
    Bottom,
}

/// Camera view frustum as six inward-facing planes.
///
/// The source view-projection matrix is retained for debugging and
/// re-derivation; queries only touch the planes. A default-constructed
/// frustum is degenerate and every containment query against it is false.
///
/// A `Frustum` is a plain value: share `&Frustum` freely across culling
/// threads, and serialize writers (`set_view_projection`) against readers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frustum {
    planes: [Plane; 6],
    view_projection: Mat4,
    degenerate: bool,
}

impl Default for Frustum {
    fn default() -> Self {
        Self {
            planes: [Plane::ZERO; 6],
            view_projection: Mat4::ZERO,
            degenerate: true,
        }
    }
}

impl Frustum {
    /// Create a zero-extent frustum with no valid interior
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract frustum planes from a view-projection matrix
    pub fn from_view_projection(view_projection: &Mat4) -> Self {
        let mut frustum = Self::new();
        frustum.set_view_projection(view_projection);
        frustum
    }

    /// Like [`Frustum::from_view_projection`], but rejects transforms that
    /// yield any zero-normal plane (e.g. a singular matrix).
    pub fn try_from_view_projection(view_projection: &Mat4) -> Result<Self> {
        let frustum = Self::from_view_projection(view_projection);
        if frustum.degenerate {
            return Err(Error::DegenerateTransform);
        }
        Ok(frustum)
    }

    /// Recompute all six planes from a view-projection matrix.
    ///
    /// Uses the Gribb/Hartmann row combinations; with the zero-to-one depth
    /// range the near plane is row 2 alone rather than row3 + row2.
    pub fn set_view_projection(&mut self, view_projection: &Mat4) {
        let r0 = view_projection.row(0);
        let r1 = view_projection.row(1);
        let r2 = view_projection.row(2);
        let r3 = view_projection.row(3);

        // Indexed by FrustumPlane discriminant
        let raw = [
            r2,      // near
            r3 - r2, // far
            r3 + r0, // left
            r3 - r0, // right
            r3 - r1, // top
            r3 + r1, // bottom
        ];

        self.degenerate = false;
        for (plane, coefficients) in self.planes.iter_mut().zip(raw) {
            *plane = Plane::from_coefficients(coefficients).normalized();
            self.degenerate |= plane.is_degenerate();
        }
        self.view_projection = *view_projection;
    }

    /// Check if point is inside the frustum (points on a plane count as inside)
    pub fn contains_point(&self, point: Vec3) -> bool {
        if self.degenerate {
            return false;
        }
        for plane in &self.planes {
            if plane.distance_to_point(point) < 0.0 {
                return false;
            }
        }
        true
    }

    /// Check if a sphere touches the frustum volume.
    ///
    /// Conservative near the frustum edges (may report true for a sphere
    /// that only reaches past the corner where two planes meet), which is
    /// fine for culling. A tangent sphere counts as intersecting. A negative
    /// radius is clamped to zero.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        if self.degenerate {
            return false;
        }
        let radius = radius.max(0.0);
        for plane in &self.planes {
            if plane.distance_to_point(center) < -radius {
                return false;
            }
        }
        true
    }

    /// Check if an AABB intersects the frustum (conservative p-vertex test)
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        if self.degenerate {
            return false;
        }
        for plane in &self.planes {
            // Corner most aligned with the plane normal
            let p = Vec3::new(
                if plane.normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
                if plane.normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
                if plane.normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
            );

            // If the p-vertex is outside, the whole box is outside
            if plane.distance_to_point(p) < 0.0 {
                return false;
            }
        }
        true
    }

    /// Compute the eight frustum vertices.
    ///
    /// Order: near-plane top-left, top-right, bottom-right, bottom-left,
    /// then the far-plane corners in the same order. Each corner is the
    /// intersection of three planes; on a degenerate frustum corners are
    /// left at `Vec3::ZERO`.
    pub fn corner_points(&self, points: &mut [Vec3; 8]) {
        use FrustumPlane::{Bottom, Far, Left, Near, Right, Top};

        if self.degenerate {
            log::warn!("corner_points on a degenerate frustum");
            *points = [Vec3::ZERO; 8];
            return;
        }

        let triples = [
            (Near, Top, Left),
            (Near, Top, Right),
            (Near, Bottom, Right),
            (Near, Bottom, Left),
            (Far, Top, Left),
            (Far, Top, Right),
            (Far, Bottom, Right),
            (Far, Bottom, Left),
        ];

        for (point, (depth, vertical, horizontal)) in points.iter_mut().zip(triples) {
            *point = match intersect_planes(
                self.plane(depth),
                self.plane(vertical),
                self.plane(horizontal),
            ) {
                Some(p) => p,
                None => {
                    log::warn!(
                        "near-parallel plane triple {:?}/{:?}/{:?}",
                        depth, vertical, horizontal
                    );
                    Vec3::ZERO
                }
            };
        }
    }

    /// Get a stored plane
    pub fn plane(&self, side: FrustumPlane) -> &Plane {
        &self.planes[side as usize]
    }

    /// All six planes in [`FrustumPlane`] order
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// The view-projection matrix the planes were extracted from
    pub fn view_projection(&self) -> &Mat4 {
        &self.view_projection
    }

    /// True if any plane failed normalization (no valid interior)
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}

/// Solve for the point on all three planes via Cramer's rule.
/// Returns `None` when the planes are parallel or near-parallel.
fn intersect_planes(a: &Plane, b: &Plane, c: &Plane) -> Option<Vec3> {
    let x = Vec3::new(a.normal.x, b.normal.x, c.normal.x);
    let y = Vec3::new(a.normal.y, b.normal.y, c.normal.y);
    let z = Vec3::new(a.normal.z, b.normal.z, c.normal.z);
    let d = -Vec3::new(a.d, b.d, c.d);

    let u = y.cross(z);
    let v = x.cross(d);

    let denom = x.dot(u);
    if denom.abs() < f32::EPSILON {
        return None;
    }

    Some(Vec3::new(d.dot(u), z.dot(v), -y.dot(v)) / denom)
}
