//! Backend abstraction for draw submission
//!
//! The core never talks to a GPU API directly: it issues bind/uniform/draw
//! calls through this trait. Uniform names are a contract with the shader
//! assets (`"projection"`, `"view"`, `"model"`, `"dirLight.direction"`,
//! `"pointLights[i].position"`, `"finalBonesMatrices[j]"`, ...).

use crate::assets::{MeshHandle, ShaderHandle, TextureHandle};
use crate::foundation::math::{Mat4, Vec3, Vec4};

/// Main rendering backend trait
pub trait RenderBackend {
    /// Make a shader program current; subsequent uniforms target it
    fn bind_shader(&mut self, shader: ShaderHandle);

    /// Set a scalar float uniform on the bound shader
    fn set_uniform_f32(&mut self, name: &str, value: f32);

    /// Set a scalar integer uniform on the bound shader
    fn set_uniform_i32(&mut self, name: &str, value: i32);

    /// Set a 3-component vector uniform on the bound shader
    fn set_uniform_vec3(&mut self, name: &str, value: Vec3);

    /// Set a 4-component vector uniform on the bound shader
    fn set_uniform_vec4(&mut self, name: &str, value: Vec4);

    /// Set a 4x4 matrix uniform on the bound shader
    fn set_uniform_mat4(&mut self, name: &str, value: &Mat4);

    /// Bind a texture for the next draw
    fn bind_texture(&mut self, texture: TextureHandle);

    /// Issue a draw call for a mesh's vertex/index buffers
    fn draw_mesh(&mut self, mesh: MeshHandle);

    /// Issue a draw call for the shared unit quad (UI rectangles)
    fn draw_quad(&mut self);

    /// Enable or disable depth testing
    fn set_depth_test(&mut self, enabled: bool);

    /// Enable or disable alpha blending
    fn set_alpha_blend(&mut self, enabled: bool);
}

/// A single recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Shader bind
    BindShader(ShaderHandle),
    /// Uniform upload (name plus a debug rendering of the value)
    SetUniform(String),
    /// Texture bind
    BindTexture(TextureHandle),
    /// Mesh draw call
    DrawMesh(MeshHandle),
    /// UI quad draw call
    DrawQuad,
    /// Depth-test toggle
    DepthTest(bool),
    /// Alpha-blend toggle
    AlphaBlend(bool),
}

/// Backend that records the command stream instead of drawing
///
/// Used by tests and headless runs to assert on exactly what the render
/// systems submitted (shader grouping, uniform caps, draw order).
#[derive(Default)]
pub struct RecordingBackend {
    /// Commands in submission order
    pub commands: Vec<RenderCommand>,
}

impl RecordingBackend {
    /// Create an empty recording backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Count uniform uploads whose name starts with the given prefix
    pub fn uniform_count(&self, prefix: &str) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::SetUniform(name) if name.starts_with(prefix)))
            .count()
    }

    /// Count draw calls (meshes and quads)
    pub fn draw_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawMesh(_) | RenderCommand::DrawQuad))
            .count()
    }

    /// Count shader binds
    pub fn bind_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::BindShader(_)))
            .count()
    }

    /// Find the last scalar integer uniform with the given name
    pub fn last_i32_uniform(&self, name: &str) -> Option<i32> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::SetUniform(entry) => {
                let (uniform, value) = entry.split_once(" = ")?;
                if uniform == name {
                    value.parse().ok()
                } else {
                    None
                }
            }
            _ => None,
        })
    }
}

impl RenderBackend for RecordingBackend {
    fn bind_shader(&mut self, shader: ShaderHandle) {
        self.commands.push(RenderCommand::BindShader(shader));
    }

    fn set_uniform_f32(&mut self, name: &str, value: f32) {
        self.commands.push(RenderCommand::SetUniform(format!("{name} = {value}")));
    }

    fn set_uniform_i32(&mut self, name: &str, value: i32) {
        self.commands.push(RenderCommand::SetUniform(format!("{name} = {value}")));
    }

    fn set_uniform_vec3(&mut self, name: &str, value: Vec3) {
        self.commands.push(RenderCommand::SetUniform(format!("{name} = {value:?}")));
    }

    fn set_uniform_vec4(&mut self, name: &str, value: Vec4) {
        self.commands.push(RenderCommand::SetUniform(format!("{name} = {value:?}")));
    }

    fn set_uniform_mat4(&mut self, name: &str, _value: &Mat4) {
        self.commands.push(RenderCommand::SetUniform(format!("{name} = <mat4>")));
    }

    fn bind_texture(&mut self, texture: TextureHandle) {
        self.commands.push(RenderCommand::BindTexture(texture));
    }

    fn draw_mesh(&mut self, mesh: MeshHandle) {
        self.commands.push(RenderCommand::DrawMesh(mesh));
    }

    fn draw_quad(&mut self) {
        self.commands.push(RenderCommand::DrawQuad);
    }

    fn set_depth_test(&mut self, enabled: bool) {
        self.commands.push(RenderCommand::DepthTest(enabled));
    }

    fn set_alpha_blend(&mut self, enabled: bool) {
        self.commands.push(RenderCommand::AlphaBlend(enabled));
    }
}
