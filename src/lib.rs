//! Viewcull - view-frustum extraction and visibility culling primitives
//!
//! Build a [`Frustum`] from a camera's view-projection matrix, then test
//! points, spheres, and AABBs against it to skip rendering work for objects
//! outside the visible volume:
//!
//! ```
//! use glam::{Mat4, Vec3};
//! use viewcull::Frustum;
//!
//! let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_3, 16.0 / 9.0, 0.1, 500.0);
//! let view = Mat4::look_at_rh(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::Y);
//! let frustum = Frustum::from_view_projection(&(proj * view));
//!
//! assert!(frustum.contains_point(Vec3::ZERO));
//! assert!(!frustum.intersects_sphere(Vec3::new(0.0, 0.0, 1000.0), 1.0));
//! ```

pub mod aabb;
pub mod error;
pub mod frustum;
pub mod plane;

pub use aabb::Aabb;
pub use error::{Error, Result};
pub use frustum::{Frustum, FrustumPlane};
pub use plane::Plane;
