//! Animation collaborator boundary
//!
//! Skeletal poses are owned by the animation/asset collaborator. The core
//! advances each bound pose by dt and uploads the resulting skinning matrices
//! verbatim; it never interprets them.

use crate::foundation::math::Mat4;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Handle to an animation pose owned by the animation collaborator
    pub struct PoseHandle;
}

/// Per-frame animation contract
pub trait AnimationSource {
    /// Advance a pose's elapsed time by `dt` seconds
    fn advance(&mut self, pose: PoseHandle, dt: f32);

    /// Ordered skinning matrices for the pose, recomputed on demand
    fn skinning_matrices(&self, pose: PoseHandle) -> Option<&[Mat4]>;
}

struct Pose {
    elapsed: f32,
    matrices: Vec<Mat4>,
}

/// In-memory pose store used by the sandbox bootstrap and tests
///
/// Tracks elapsed time per pose and returns whatever matrices were registered;
/// a real animator recomputes the matrices from clip data on `advance`.
#[derive(Default)]
pub struct PoseLibrary {
    poses: SlotMap<PoseHandle, Pose>,
}

impl PoseLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pose with its initial skinning matrices
    pub fn register_pose(&mut self, matrices: Vec<Mat4>) -> PoseHandle {
        self.poses.insert(Pose {
            elapsed: 0.0,
            matrices,
        })
    }

    /// Total time a pose has been advanced
    pub fn elapsed(&self, pose: PoseHandle) -> Option<f32> {
        self.poses.get(pose).map(|p| p.elapsed)
    }
}

impl AnimationSource for PoseLibrary {
    fn advance(&mut self, pose: PoseHandle, dt: f32) {
        if let Some(pose) = self.poses.get_mut(pose) {
            pose.elapsed += dt;
        }
    }

    fn skinning_matrices(&self, pose: PoseHandle) -> Option<&[Mat4]> {
        self.poses.get(pose).map(|p| p.matrices.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_library_advances_elapsed_time() {
        let mut library = PoseLibrary::new();
        let pose = library.register_pose(vec![Mat4::identity(); 4]);

        library.advance(pose, 0.016);
        library.advance(pose, 0.016);

        let elapsed = library.elapsed(pose).unwrap();
        assert!((elapsed - 0.032).abs() < 1e-6);
        assert_eq!(library.skinning_matrices(pose).unwrap().len(), 4);
    }
}
