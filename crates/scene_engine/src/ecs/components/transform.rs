//! Transform component with hierarchy edges and a cached world matrix

use crate::ecs::{Component, Entity};
use crate::foundation::math::{Mat4, Quat, Vec3};

/// Spatial transform with parent/child links
///
/// Local position/rotation/scale compose as `translate * rotate * scale`.
/// The cached world matrix is recomputed top-down once per frame by
/// [`propagate_transforms`](crate::ecs::systems::hierarchy::propagate_transforms),
/// parent before child, so consumers (render, culling) always read a matrix
/// consistent with a possibly-moved parent. The dirty flag is informative for
/// callers that want to skip redundant downstream work; the matrix itself is
/// recomputed unconditionally.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformComponent {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,

    world_matrix: Mat4,
    dirty: bool,

    /// Parent entity, if any; plain id, not an ownership pointer
    pub(crate) parent: Option<Entity>,
    /// Ordered children; plain ids, not ownership pointers
    pub(crate) children: Vec<Entity>,
}

impl Component for TransformComponent {}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            world_matrix: Mat4::identity(),
            dirty: true,
            parent: None,
            children: Vec::new(),
        }
    }
}

impl TransformComponent {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create from position only
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder pattern: set position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: set rotation
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: set rotation from Euler angles (radians, roll/pitch/yaw)
    pub fn with_rotation_euler(mut self, roll: f32, pitch: f32, yaw: f32) -> Self {
        self.rotation = Quat::from_euler_angles(roll, pitch, yaw);
        self
    }

    /// Builder pattern: set uniform scale
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }

    /// Builder pattern: set non-uniform scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Set local position and mark the transform dirty
    pub fn set_local_position(&mut self, position: Vec3) {
        self.position = position;
        self.dirty = true;
    }

    /// Set local rotation and mark the transform dirty
    pub fn set_local_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
        self.dirty = true;
    }

    /// Set local scale and mark the transform dirty
    pub fn set_local_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.dirty = true;
    }

    /// Local position
    pub fn local_position(&self) -> Vec3 {
        self.position
    }

    /// Local rotation
    pub fn local_rotation(&self) -> Quat {
        self.rotation
    }

    /// Local scale
    pub fn local_scale(&self) -> Vec3 {
        self.scale
    }

    /// Parent entity, if any
    pub fn parent(&self) -> Option<Entity> {
        self.parent
    }

    /// Ordered children
    pub fn children(&self) -> &[Entity] {
        &self.children
    }

    /// Whether a setter ran since the last world-matrix recomputation
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Compose the local matrix as `translate * rotate * scale`
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Recompute the cached world matrix from an optional parent world matrix
    pub fn compute_world_matrix(&mut self, parent_world: Option<&Mat4>) {
        self.world_matrix = match parent_world {
            Some(parent) => parent * self.local_matrix(),
            None => self.local_matrix(),
        };
        self.dirty = false;
    }

    /// The cached world matrix (valid after the frame's hierarchy pass)
    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    /// World-space position from the cached matrix
    pub fn global_position(&self) -> Vec3 {
        self.world_matrix.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// World-space right axis (first basis column, scale included)
    pub fn right(&self) -> Vec3 {
        self.world_matrix.fixed_view::<3, 1>(0, 0).into_owned()
    }

    /// World-space up axis (second basis column, scale included)
    pub fn up(&self) -> Vec3 {
        self.world_matrix.fixed_view::<3, 1>(0, 1).into_owned()
    }

    /// World-space backward axis (third basis column, scale included)
    pub fn backward(&self) -> Vec3 {
        self.world_matrix.fixed_view::<3, 1>(0, 2).into_owned()
    }

    /// World-space forward axis (negated third basis column)
    pub fn forward(&self) -> Vec3 {
        -self.backward()
    }

    /// Per-axis world scale, derived as the length of each basis column
    ///
    /// Exact for uniform scale; an approximation under shear or non-uniform
    /// parent scale.
    pub fn global_scale(&self) -> Vec3 {
        Vec3::new(
            self.right().magnitude(),
            self.up().magnitude(),
            self.backward().magnitude(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::utils::deg_to_rad;
    use approx::assert_relative_eq;

    #[test]
    fn test_setters_mark_dirty() {
        let mut transform = TransformComponent::identity();
        transform.compute_world_matrix(None);
        assert!(!transform.is_dirty());

        transform.set_local_position(Vec3::new(1.0, 0.0, 0.0));
        assert!(transform.is_dirty());
    }

    #[test]
    fn test_local_matrix_composition_order() {
        // Scale must apply before rotation, rotation before translation
        let transform = TransformComponent::identity()
            .with_position(Vec3::new(10.0, 0.0, 0.0))
            .with_rotation(Quat::from_axis_angle(&Vec3::y_axis(), deg_to_rad(90.0)))
            .with_uniform_scale(2.0);

        let local = transform.local_matrix();
        let p = local.transform_point(&Vec3::new(1.0, 0.0, 0.0).into());
        // (1,0,0) scaled to (2,0,0), rotated 90 degrees about Y to (0,0,-2),
        // then translated to (10,0,-2)
        assert_relative_eq!(p.coords, Vec3::new(10.0, 0.0, -2.0), epsilon = 1e-5);
    }

    #[test]
    fn test_world_matrix_chains_parent() {
        let mut parent = TransformComponent::from_position(Vec3::new(1.0, 0.0, 0.0));
        parent.compute_world_matrix(None);

        let mut child = TransformComponent::from_position(Vec3::new(0.0, 2.0, 0.0));
        child.compute_world_matrix(Some(parent.world_matrix()));

        assert_relative_eq!(child.global_position(), Vec3::new(1.0, 2.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_global_scale_from_basis_columns() {
        let mut transform = TransformComponent::identity().with_scale(Vec3::new(2.0, 3.0, 4.0));
        transform.compute_world_matrix(None);
        assert_relative_eq!(transform.global_scale(), Vec3::new(2.0, 3.0, 4.0), epsilon = 1e-5);
    }

    #[test]
    fn test_forward_is_negative_z_for_identity() {
        let mut transform = TransformComponent::identity();
        transform.compute_world_matrix(None);
        assert_relative_eq!(transform.forward(), Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
    }
}
