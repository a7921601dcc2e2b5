//! Bounding volumes and the frustum visibility test
//!
//! A closed tagged set of volume kinds tested by a single function that
//! switches on the variant. Volumes are authored in local (model) space and
//! transformed to world space at test time using the owning entity's world
//! matrix, so geometry is never re-derived per frame.

use super::{Frustum, Plane};
use crate::foundation::math::{Mat4, Vec3};

/// Bounding volume in local (model) space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingVolume {
    /// Sphere around a local-space center
    Sphere {
        /// Local-space center
        center: Vec3,
        /// Local-space radius
        radius: f32,
    },
    /// Axis-aligned box with per-axis half-extents
    Aabb {
        /// Local-space center
        center: Vec3,
        /// Half-extents along each local axis
        half_extents: Vec3,
    },
    /// Axis-aligned cube with a single half-extent
    SquareAabb {
        /// Local-space center
        center: Vec3,
        /// Half-extent shared by all three axes
        half_extent: f32,
    },
}

impl BoundingVolume {
    /// Create an AABB from minimum and maximum corners
    pub fn aabb_from_min_max(min: Vec3, max: Vec3) -> Self {
        let center = (min + max) * 0.5;
        Self::Aabb {
            center,
            half_extents: max - center,
        }
    }

    /// Tight AABB around a vertex cloud
    ///
    /// # Panics
    ///
    /// Panics if `points` is empty; an empty mesh has no bounds.
    pub fn aabb_from_points(points: &[Vec3]) -> Self {
        let (min, max) = min_max_corners(points);
        Self::aabb_from_min_max(min, max)
    }

    /// Bounding sphere around a vertex cloud, centered on the AABB center
    ///
    /// # Panics
    ///
    /// Panics if `points` is empty; an empty mesh has no bounds.
    pub fn sphere_from_points(points: &[Vec3]) -> Self {
        let (min, max) = min_max_corners(points);
        let center = (min + max) * 0.5;
        Self::Sphere {
            center,
            radius: (max - center).magnitude(),
        }
    }

    /// Test a world-space volume against a single plane
    ///
    /// Boundary-inclusive: a volume exactly tangent to the plane counts as on
    /// the forward side.
    pub fn is_on_or_forward_plane(&self, plane: &Plane) -> bool {
        match *self {
            Self::Sphere { center, radius } => -radius <= plane.signed_distance(center),
            Self::Aabb {
                center,
                half_extents,
            } => {
                let r = half_extents.x * plane.normal.x.abs()
                    + half_extents.y * plane.normal.y.abs()
                    + half_extents.z * plane.normal.z.abs();
                -r <= plane.signed_distance(center)
            }
            Self::SquareAabb {
                center,
                half_extent,
            } => {
                let r = half_extent
                    * (plane.normal.x.abs() + plane.normal.y.abs() + plane.normal.z.abs());
                -r <= plane.signed_distance(center)
            }
        }
    }

    /// Transform this local-space volume into world space
    ///
    /// Boxes use the standard transformed-AABB technique: the scaled local
    /// axes are projected onto each world axis for conservative world-space
    /// half-extents. Spheres scale their radius by the maximum per-axis scale
    /// factor, which is exact only for uniform scale.
    pub fn to_world(&self, world_matrix: &Mat4) -> Self {
        let basis_x: Vec3 = world_matrix.fixed_view::<3, 1>(0, 0).into_owned();
        let basis_y: Vec3 = world_matrix.fixed_view::<3, 1>(0, 1).into_owned();
        let basis_z: Vec3 = world_matrix.fixed_view::<3, 1>(0, 2).into_owned();

        let world_center = |center: Vec3| -> Vec3 {
            world_matrix.transform_point(&center.into()).coords
        };

        match *self {
            Self::Sphere { center, radius } => {
                let max_scale = basis_x
                    .magnitude()
                    .max(basis_y.magnitude())
                    .max(basis_z.magnitude());
                Self::Sphere {
                    center: world_center(center),
                    radius: radius * max_scale,
                }
            }
            Self::Aabb {
                center,
                half_extents,
            } => {
                let r = basis_x * half_extents.x;
                let u = basis_y * half_extents.y;
                let f = basis_z * half_extents.z;
                Self::Aabb {
                    center: world_center(center),
                    half_extents: Vec3::new(
                        r.x.abs() + u.x.abs() + f.x.abs(),
                        r.y.abs() + u.y.abs() + f.y.abs(),
                        r.z.abs() + u.z.abs() + f.z.abs(),
                    ),
                }
            }
            Self::SquareAabb {
                center,
                half_extent,
            } => {
                let r = basis_x * half_extent;
                let u = basis_y * half_extent;
                let f = basis_z * half_extent;
                let extent_x = r.x.abs() + u.x.abs() + f.x.abs();
                let extent_y = r.y.abs() + u.y.abs() + f.y.abs();
                let extent_z = r.z.abs() + u.z.abs() + f.z.abs();
                Self::SquareAabb {
                    center: world_center(center),
                    half_extent: extent_x.max(extent_y).max(extent_z),
                }
            }
        }
    }

    /// Full visibility test: transform to world space, then require the
    /// volume to be on-or-in-front-of all six frustum planes
    pub fn is_on_frustum(&self, frustum: &Frustum, world_matrix: &Mat4) -> bool {
        let world_volume = self.to_world(world_matrix);
        frustum
            .planes()
            .iter()
            .all(|plane| world_volume.is_on_or_forward_plane(plane))
    }
}

fn min_max_corners(points: &[Vec3]) -> (Vec3, Vec3) {
    assert!(!points.is_empty(), "cannot bound an empty point cloud");
    let mut min = points[0];
    let mut max = points[0];
    for p in &points[1..] {
        min = min.inf(p);
        max = max.sup(p);
    }
    (min, max)
}
