//! Frustum and plane primitives

use crate::foundation::math::Vec3;

/// Plane defined by a unit normal and its signed distance from the origin
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Normal vector (normalized at construction)
    pub normal: Vec3,
    /// Distance from origin along the normal
    pub distance: f32,
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            normal: Vec3::new(0.0, 1.0, 0.0),
            distance: 0.0,
        }
    }
}

impl Plane {
    /// Create a plane through `point` with the given (not necessarily unit) normal
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize();
        Self {
            normal,
            distance: normal.dot(&point),
        }
    }

    /// Signed distance from the plane to a point; positive on the normal's side
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(&point) - self.distance
    }
}

/// View frustum: six inward-facing planes
#[derive(Debug, Clone, Default)]
pub struct Frustum {
    /// Top clipping plane
    pub top: Plane,
    /// Bottom clipping plane
    pub bottom: Plane,
    /// Right clipping plane
    pub right: Plane,
    /// Left clipping plane
    pub left: Plane,
    /// Far clipping plane
    pub far: Plane,
    /// Near clipping plane
    pub near: Plane,
}

impl Frustum {
    /// Build a frustum from a camera's position and orthonormal basis
    ///
    /// Near and far planes are axis-aligned to `front` at their respective
    /// distances; the four side planes are built from cross products of the
    /// far-scaled forward vector with the camera's right/up vectors, yielding
    /// inward-facing normals. `fov_y` is the vertical field of view in radians.
    pub fn from_camera(
        position: Vec3,
        front: Vec3,
        right: Vec3,
        up: Vec3,
        aspect: f32,
        fov_y: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let half_v = z_far * (fov_y * 0.5).tan();
        let half_h = half_v * aspect;
        let front_far = front * z_far;

        Self {
            near: Plane::new(position + front * z_near, front),
            far: Plane::new(position + front_far, -front),
            right: Plane::new(position, (front_far - right * half_h).cross(&up)),
            left: Plane::new(position, up.cross(&(front_far + right * half_h))),
            top: Plane::new(position, right.cross(&(front_far - up * half_v))),
            bottom: Plane::new(position, (front_far + up * half_v).cross(&right)),
        }
    }

    /// The six planes in test order
    pub fn planes(&self) -> [&Plane; 6] {
        [
            &self.left,
            &self.right,
            &self.top,
            &self.bottom,
            &self.near,
            &self.far,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::utils::deg_to_rad;
    use approx::assert_relative_eq;

    fn looking_down_neg_z() -> Frustum {
        Frustum::from_camera(
            Vec3::zeros(),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            4.0 / 3.0,
            deg_to_rad(45.0),
            0.1,
            100.0,
        )
    }

    #[test]
    fn test_plane_signed_distance() {
        let plane = Plane::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 3.0, 0.0));
        assert_relative_eq!(plane.normal.magnitude(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(plane.signed_distance(Vec3::new(0.0, 5.0, 0.0)), 3.0, epsilon = 1e-5);
        assert_relative_eq!(plane.signed_distance(Vec3::new(0.0, -1.0, 0.0)), -3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_frustum_normals_face_inward() {
        let frustum = looking_down_neg_z();
        let inside = Vec3::new(0.0, 0.0, -10.0);

        for plane in frustum.planes() {
            assert!(
                plane.signed_distance(inside) > 0.0,
                "point inside the frustum must be in front of every plane"
            );
        }
    }

    #[test]
    fn test_point_behind_camera_outside_near_plane() {
        let frustum = looking_down_neg_z();
        assert!(frustum.near.signed_distance(Vec3::new(0.0, 0.0, 10.0)) < 0.0);
    }
}
