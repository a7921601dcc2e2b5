//! # Scene Engine
//!
//! An interactive real-time scene engine: a typed entity-component store,
//! a fixed-order system pipeline, a transform hierarchy, and frustum culling.
//!
//! ## Features
//!
//! - **ECS Scene Store**: insertion-ordered component storages with typed
//!   conjunction queries and explicit re-sorting for render batching
//! - **Fixed Pipeline**: camera control, UI interaction, physics sync,
//!   animation, camera update, scene render, UI render — every frame, in order
//! - **Transform Hierarchy**: parent/child transforms with cycle rejection
//!   and a parent-before-child world-matrix pass
//! - **Frustum Culling**: sphere and AABB volumes tested against the active
//!   camera's frustum, boundary-inclusive
//! - **Collaborator Boundaries**: physics, animation, and GPU submission stay
//!   behind traits so the engine runs headless in tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! let mut engine = Engine::new(EngineConfig::default());
//!
//! let camera = engine.world.create_entity();
//! engine.world.add_component(camera, CameraComponent::primary());
//! engine.world.add_component(camera, TransformComponent::identity());
//!
//! let assets = AssetRegistry::new();
//! let physics = KinematicWorld::new();
//! let mut animation = PoseLibrary::new();
//! let mut backend = RecordingBackend::new();
//!
//! while engine.is_running() {
//!     // ... feed input events from the window shell ...
//!     engine.frame(&mut FrameContext {
//!         physics: &physics,
//!         animation: &mut animation,
//!         backend: &mut backend,
//!         assets: &assets,
//!         viewport: Viewport::new(800.0, 600.0),
//!     });
//! #   break;
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;

pub mod animation;
pub mod assets;
pub mod ecs;
pub mod foundation;
pub mod input;
pub mod physics;
pub mod render;
pub mod spatial;

mod engine;
mod error;

pub use engine::{Engine, FrameContext, Viewport};
pub use error::SceneError;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        animation::{AnimationSource, PoseLibrary},
        assets::AssetRegistry,
        core::config::EngineConfig,
        ecs::{
            components::{
                AnimationComponent, BoundingVolumeComponent, CameraComponent,
                DirectionalLightComponent, MeshRendererComponent, PointLightComponent,
                RigidBodyComponent, SpotLightComponent, TransformComponent,
                UiAnimationComponent, UiEventHandler, UiInteractiveComponent,
                UiRendererComponent, UiTransformComponent,
            },
            systems::hierarchy,
            Component, Entity, World,
        },
        foundation::{
            math::{Mat4, Quat, Vec2, Vec3, Vec4},
            time::Timer,
        },
        input::{InputManager, KeyCode, MouseButton},
        physics::{BodySpec, KinematicWorld, PhysicsSource},
        render::{RecordingBackend, RenderBackend},
        spatial::{BoundingVolume, Frustum},
        Engine, FrameContext, SceneError, Viewport,
    };
}
