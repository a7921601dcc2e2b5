//! Frame driver
//!
//! [`Engine`] owns the scene state the systems operate on (world, input,
//! timer, config) and runs the fixed pipeline once per [`Engine::frame`]
//! call. Everything with its own lifecycle — physics solver, animator,
//! rendering backend, asset registry — is borrowed per frame through
//! [`FrameContext`], so the shell decides how those live.

use crate::animation::AnimationSource;
use crate::assets::AssetRegistry;
use crate::core::EngineConfig;
use crate::ecs::systems::render::{CullStats, RenderWarnings};
use crate::ecs::systems::{
    animation, camera_control, camera_update, physics_sync, render, ui_interact, ui_render,
};
use crate::ecs::World;
use crate::foundation::time::Timer;
use crate::input::{InputManager, KeyCode, MouseButton};
use crate::physics::PhysicsSource;
use crate::render::RenderBackend;

/// Output surface dimensions for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Viewport {
    /// Create a viewport
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height; 1.0 for a degenerate surface
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Per-frame borrows of the shell-owned collaborators
pub struct FrameContext<'a> {
    /// Rigid-body solver output
    pub physics: &'a dyn PhysicsSource,
    /// Skeletal pose source, advanced by the animation pass
    pub animation: &'a mut dyn AnimationSource,
    /// Draw-submission backend
    pub backend: &'a mut dyn RenderBackend,
    /// Mesh/shader/texture registry
    pub assets: &'a AssetRegistry,
    /// Current output surface
    pub viewport: Viewport,
}

/// The engine: scene state plus the fixed per-frame pipeline
pub struct Engine {
    /// Entities and components; mutate freely between frames
    pub world: World,
    input: InputManager,
    timer: Timer,
    config: EngineConfig,
    warnings: RenderWarnings,
    running: bool,
}

impl Engine {
    /// Create an engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        log::info!("engine starting");
        Self {
            world: World::new(),
            input: InputManager::new(),
            timer: Timer::new(),
            config,
            warnings: RenderWarnings::default(),
            running: true,
        }
    }

    /// Whether the engine has been asked to shut down
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Request shutdown; the shell polls [`Engine::is_running`]
    pub fn request_shutdown(&mut self) {
        log::info!("shutdown requested");
        self.running = false;
    }

    /// The frame timer
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only view of input state, for host systems
    pub fn input(&self) -> &InputManager {
        &self.input
    }

    /// Forward a key event from the shell; Escape requests shutdown
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if key == KeyCode::Escape && pressed {
            self.request_shutdown();
        }
        self.input.handle_key_input(key, pressed);
    }

    /// Forward a cursor movement event from the shell
    pub fn handle_cursor_move(&mut self, x: f32, y: f32) {
        self.input.handle_cursor_move(x, y);
    }

    /// Forward a scroll event from the shell
    pub fn handle_scroll(&mut self, x_offset: f32, y_offset: f32) {
        self.input.handle_scroll(x_offset, y_offset);
    }

    /// Forward a mouse button event from the shell
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        self.input.handle_mouse_button(button, pressed);
    }

    /// Run one frame of the pipeline in its fixed order
    ///
    /// Input-consuming systems run first, then the frame-scoped input deltas
    /// are reset, then simulation sync, then the render passes. Returns the
    /// frame's culling statistics.
    pub fn frame(&mut self, ctx: &mut FrameContext<'_>) -> CullStats {
        self.timer.update();
        let dt = self.timer.delta_time();

        camera_control::update(&mut self.world, &self.input, &self.config.camera, dt);
        ui_interact::update(&mut self.world, &self.input, &self.config.ui, dt);
        self.input.end_frame();

        physics_sync::update(&mut self.world, ctx.physics);
        animation::update(&self.world, ctx.animation, dt);
        camera_update::update(&mut self.world, ctx.viewport.aspect());

        let stats = render::render(
            &mut self.world,
            ctx.backend,
            ctx.assets,
            ctx.animation,
            &mut self.warnings,
        );
        ui_render::render(
            &mut self.world,
            ctx.backend,
            ctx.viewport.width,
            ctx.viewport.height,
        );
        stats
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
