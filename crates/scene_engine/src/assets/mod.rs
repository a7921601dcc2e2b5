//! Asset registry and opaque resource handles
//!
//! The registry is owned by the application shell; the core only stores and
//! forwards handles. Actual mesh/texture/shader data lives in the rendering
//! and asset-loading collaborators, whose lifetime exceeds the scene's.

use crate::spatial::BoundingVolume;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Handle to a mesh owned by the asset collaborator
    pub struct MeshHandle;

    /// Handle to a compiled shader program owned by the rendering backend
    pub struct ShaderHandle;

    /// Handle to a texture owned by the asset collaborator
    pub struct TextureHandle;
}

/// Registry entry for a mesh
#[derive(Debug, Clone)]
pub struct MeshAsset {
    /// Debug name for logging
    pub name: String,
    /// Local-space bounds precomputed by the loader, if any
    pub bounds: Option<BoundingVolume>,
}

/// Registry entry for a shader program
#[derive(Debug, Clone)]
pub struct ShaderAsset {
    /// Debug name for logging
    pub name: String,
}

/// Registry entry for a texture
#[derive(Debug, Clone)]
pub struct TextureAsset {
    /// Debug name for logging
    pub name: String,
}

/// Shell-owned registry handing out opaque, non-owning handles
#[derive(Default)]
pub struct AssetRegistry {
    meshes: SlotMap<MeshHandle, MeshAsset>,
    shaders: SlotMap<ShaderHandle, ShaderAsset>,
    textures: SlotMap<TextureHandle, TextureAsset>,
}

impl AssetRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mesh and return its handle
    pub fn register_mesh(&mut self, name: impl Into<String>, bounds: Option<BoundingVolume>) -> MeshHandle {
        let name = name.into();
        log::debug!("registering mesh asset '{name}'");
        self.meshes.insert(MeshAsset { name, bounds })
    }

    /// Register a shader program and return its handle
    pub fn register_shader(&mut self, name: impl Into<String>) -> ShaderHandle {
        let name = name.into();
        log::debug!("registering shader asset '{name}'");
        self.shaders.insert(ShaderAsset { name })
    }

    /// Register a texture and return its handle
    pub fn register_texture(&mut self, name: impl Into<String>) -> TextureHandle {
        let name = name.into();
        log::debug!("registering texture asset '{name}'");
        self.textures.insert(TextureAsset { name })
    }

    /// Look up a mesh by handle
    pub fn mesh(&self, handle: MeshHandle) -> Option<&MeshAsset> {
        self.meshes.get(handle)
    }

    /// Look up a shader by handle
    pub fn shader(&self, handle: ShaderHandle) -> Option<&ShaderAsset> {
        self.shaders.get(handle)
    }

    /// Look up a texture by handle
    pub fn texture(&self, handle: TextureHandle) -> Option<&TextureAsset> {
        self.textures.get(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    #[test]
    fn test_registry_roundtrip() {
        let mut registry = AssetRegistry::new();
        let bounds = BoundingVolume::Sphere {
            center: Vec3::zeros(),
            radius: 1.0,
        };
        let mesh = registry.register_mesh("player", Some(bounds));
        let shader = registry.register_shader("anim_model");

        assert_eq!(registry.mesh(mesh).map(|m| m.name.as_str()), Some("player"));
        assert!(registry.mesh(mesh).and_then(|m| m.bounds).is_some());
        assert_eq!(registry.shader(shader).map(|s| s.name.as_str()), Some("anim_model"));
    }
}
