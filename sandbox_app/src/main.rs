//! Sandbox demo application
//!
//! Builds a small scene programmatically (camera, lit cubes, an animated
//! player driven by a kinematic physics body, a clickable UI button) and runs
//! the engine headless for a few hundred frames with scripted input. Serves
//! as the reference wiring between the engine and a window shell.

use scene_engine::prelude::*;
use scene_engine::assets::{MeshHandle, ShaderHandle, TextureHandle};
use scene_engine::physics::BodyHandle;
use std::cell::Cell;
use std::rc::Rc;

/// Backend that logs the command stream instead of talking to a GPU
#[derive(Default)]
struct TraceBackend {
    draws: usize,
}

impl RenderBackend for TraceBackend {
    fn bind_shader(&mut self, shader: ShaderHandle) {
        log::trace!("bind shader {shader:?}");
    }

    fn set_uniform_f32(&mut self, name: &str, value: f32) {
        log::trace!("uniform {name} = {value}");
    }

    fn set_uniform_i32(&mut self, name: &str, value: i32) {
        log::trace!("uniform {name} = {value}");
    }

    fn set_uniform_vec3(&mut self, name: &str, value: Vec3) {
        log::trace!("uniform {name} = {value:?}");
    }

    fn set_uniform_vec4(&mut self, name: &str, value: Vec4) {
        log::trace!("uniform {name} = {value:?}");
    }

    fn set_uniform_mat4(&mut self, name: &str, _value: &Mat4) {
        log::trace!("uniform {name} = <mat4>");
    }

    fn bind_texture(&mut self, texture: TextureHandle) {
        log::trace!("bind texture {texture:?}");
    }

    fn draw_mesh(&mut self, mesh: MeshHandle) {
        log::trace!("draw mesh {mesh:?}");
        self.draws += 1;
    }

    fn draw_quad(&mut self) {
        log::trace!("draw quad");
        self.draws += 1;
    }

    fn set_depth_test(&mut self, enabled: bool) {
        log::trace!("depth test {enabled}");
    }

    fn set_alpha_blend(&mut self, enabled: bool) {
        log::trace!("alpha blend {enabled}");
    }
}

struct StartButton {
    clicked: Rc<Cell<bool>>,
}

impl UiEventHandler for StartButton {
    fn on_click(&mut self, entity: Entity) {
        log::info!("start button {entity:?} clicked");
        self.clicked.set(true);
    }

    fn on_hover_enter(&mut self, entity: Entity) {
        log::debug!("hovering start button {entity:?}");
    }
}

struct Scene {
    player: Entity,
    player_body: BodyHandle,
    button_clicked: Rc<Cell<bool>>,
}

fn build_scene(
    engine: &mut Engine,
    assets: &mut AssetRegistry,
    physics: &mut KinematicWorld,
    animation: &mut PoseLibrary,
) -> Scene {
    let cube_bounds = BoundingVolume::Sphere {
        center: Vec3::zeros(),
        radius: 0.9,
    };
    let cube_mesh = assets.register_mesh("cube", Some(cube_bounds));
    let player_mesh = assets.register_mesh("player", Some(cube_bounds));
    let model_shader = assets.register_shader("model");
    let anim_shader = assets.register_shader("anim_model");
    let ui_shader = assets.register_shader("ui");

    let camera = engine.world.create_entity();
    engine.world.add_component(camera, CameraComponent::primary());
    engine.world.add_component(
        camera,
        TransformComponent::from_position(Vec3::new(0.0, 2.0, 10.0)),
    );

    let sun = engine.world.create_entity();
    engine.world.add_component(sun, DirectionalLightComponent::default());

    // A grid of cubes; most fall outside the frustum and get culled
    for x in -5..=5 {
        for z in -5..=5 {
            let cube = engine.world.create_entity();
            engine.world.add_component(
                cube,
                TransformComponent::from_position(Vec3::new(x as f32 * 4.0, 0.0, z as f32 * 4.0)),
            );
            engine
                .world
                .add_component(cube, MeshRendererComponent::new(cube_mesh, model_shader));
        }
    }

    // Animated player whose transform is owned by the physics solver
    let player_body = physics.create_body(BodySpec {
        mass: 70.0,
        half_extents: Vec3::new(0.4, 0.9, 0.4),
        position: Vec3::new(0.0, 0.0, 0.0),
        rotation: Quat::identity(),
    });
    let pose = animation.register_pose(vec![Mat4::identity(); 24]);

    let player = engine.world.create_entity();
    engine.world.add_component(player, TransformComponent::identity());
    engine
        .world
        .add_component(player, MeshRendererComponent::new(player_mesh, anim_shader));
    engine
        .world
        .add_component(player, RigidBodyComponent { body: player_body });
    engine.world.add_component(player, AnimationComponent { pose });

    // A lantern parented to the player so it follows the body
    let lantern = engine.world.create_entity();
    engine.world.add_component(
        lantern,
        TransformComponent::from_position(Vec3::new(0.0, 1.5, 0.0)),
    );
    engine
        .world
        .add_component(lantern, PointLightComponent::default());
    hierarchy::set_parent(&mut engine.world, lantern, Some(player))
        .unwrap_or_else(|e| log::error!("failed to parent lantern: {e}"));

    // Six spot lights; the render pass truncates to its per-frame cap
    for i in 0..6 {
        let spot = engine.world.create_entity();
        engine.world.add_component(
            spot,
            TransformComponent::from_position(Vec3::new(i as f32 * 2.0 - 5.0, 4.0, 0.0))
                .with_rotation_euler(-1.2, 0.0, 0.0),
        );
        engine.world.add_component(spot, SpotLightComponent::default());
    }

    let button_clicked = Rc::new(Cell::new(false));
    let button = engine.world.create_entity();
    engine.world.add_component(
        button,
        UiTransformComponent::new(Vec2::new(300.0, 250.0), Vec2::new(200.0, 60.0)),
    );
    engine.world.add_component(
        button,
        UiRendererComponent::colored(ui_shader, Vec4::new(0.2, 0.6, 0.3, 1.0)),
    );
    engine.world.add_component(
        button,
        UiInteractiveComponent::with_handler(Box::new(StartButton {
            clicked: Rc::clone(&button_clicked),
        })),
    );
    engine.world.add_component(button, UiAnimationComponent::default());

    Scene {
        player,
        player_body,
        button_clicked,
    }
}

fn main() {
    scene_engine::foundation::logging::init();
    log::info!("sandbox starting");

    let mut assets = AssetRegistry::new();
    let mut physics = KinematicWorld::new();
    let mut animation = PoseLibrary::new();
    let mut backend = TraceBackend::default();

    let mut engine = Engine::new(EngineConfig::default());
    let scene = build_scene(&mut engine, &mut assets, &mut physics, &mut animation);

    let viewport = Viewport::new(800.0, 600.0);
    let mut frame = 0u32;

    while engine.is_running() {
        frame += 1;

        // Scripted input standing in for a window shell
        match frame {
            10 => engine.handle_key_input(KeyCode::W, true),
            60 => engine.handle_key_input(KeyCode::W, false),
            90 => engine.handle_cursor_move(400.0, 280.0),
            100 => engine.handle_mouse_button(MouseButton::Left, true),
            105 => engine.handle_mouse_button(MouseButton::Left, false),
            300 => engine.handle_key_input(KeyCode::Escape, true),
            _ => {}
        }

        // Drive the kinematic body along a slow circle
        let t = frame as f32 * 0.01;
        physics.set_body_transform(
            scene.player_body,
            Vec3::new(t.cos() * 3.0, 0.0, t.sin() * 3.0),
            Quat::identity(),
        );

        let stats = engine.frame(&mut FrameContext {
            physics: &physics,
            animation: &mut animation,
            backend: &mut backend,
            assets: &assets,
            viewport,
        });

        if frame % 60 == 0 {
            let player_position = engine
                .world
                .get_component::<TransformComponent>(scene.player)
                .map(TransformComponent::global_position);
            log::info!(
                "frame {frame}: drew {}/{} drawables, avg {:.0} fps, player at {player_position:?}",
                stats.drawn,
                stats.total,
                engine.timer().average_fps(),
            );
        }
    }

    log::info!(
        "sandbox finished after {frame} frames; button clicked: {}, {} draw calls",
        scene.button_clicked.get(),
        backend.draws
    );
}
