//! Scene rendering: light uploads, frustum culling, and draw submission
//!
//! The pass is camera-relative: without an active camera nothing is drawn and
//! a warning is logged once. Lights beyond the per-frame caps are truncated,
//! also with a one-time warning. Drawables are sorted by shader so per-group
//! state (projection, view, lights) is uploaded once per program.

use super::{active_camera, hierarchy};
use crate::animation::AnimationSource;
use crate::assets::AssetRegistry;
use crate::ecs::components::{
    AnimationComponent, BoundingVolumeComponent, CameraComponent, DirectionalLightComponent,
    MeshRendererComponent, PointLightComponent, SpotLightComponent, TransformComponent,
};
use crate::ecs::{Entity, World};
use crate::foundation::math::utils::deg_to_rad;
use crate::foundation::math::{Mat4, Vec3};
use crate::render::{RenderBackend, MAX_POINT_LIGHTS, MAX_SPOT_LIGHTS};
use crate::spatial::Frustum;

/// Culling outcome for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CullStats {
    /// Drawables considered
    pub total: usize,
    /// Drawables that survived culling and were submitted
    pub drawn: usize,
}

/// One-time warning latches, owned by the frame driver
///
/// Degraded-but-valid situations (no camera, too many lights) repeat every
/// frame; the latches keep the log readable.
#[derive(Debug, Default)]
pub struct RenderWarnings {
    missing_camera: bool,
    point_cap: bool,
    spot_cap: bool,
}

/// Render the scene through the backend, returning culling statistics
pub fn render(
    world: &mut World,
    backend: &mut dyn RenderBackend,
    assets: &AssetRegistry,
    animation: &dyn AnimationSource,
    warnings: &mut RenderWarnings,
) -> CullStats {
    hierarchy::propagate_transforms(world);

    let Some(camera_entity) = active_camera(world) else {
        if !warnings.missing_camera {
            log::warn!("no active camera in scene; nothing will be drawn");
            warnings.missing_camera = true;
        }
        return CullStats::default();
    };
    warnings.missing_camera = false;

    let Some(camera) = world.get_component::<CameraComponent>(camera_entity).cloned() else {
        return CullStats::default();
    };
    let eye = world
        .get_component::<TransformComponent>(camera_entity)
        .map(TransformComponent::global_position)
        .unwrap_or_else(Vec3::zeros);

    let frustum = Frustum::from_camera(
        eye,
        camera.front,
        camera.right,
        camera.up,
        camera.aspect_ratio,
        deg_to_rad(camera.fov),
        camera.near_plane,
        camera.far_plane,
    );

    // Drawables in shader order; the sort is stable so insertion order holds
    // within a group
    let mut drawables: Vec<(Entity, MeshRendererComponent, Mat4)> = world
        .query2::<MeshRendererComponent, TransformComponent>()
        .filter_map(|e| {
            let renderer = *world.get_component::<MeshRendererComponent>(e)?;
            let matrix = *world.get_component::<TransformComponent>(e)?.world_matrix();
            Some((e, renderer, matrix))
        })
        .collect();
    drawables.sort_by_key(|(_, renderer, _)| renderer.shader);

    let mut stats = CullStats {
        total: drawables.len(),
        drawn: 0,
    };

    let mut bound_shader = None;
    for (entity, renderer, world_matrix) in drawables {
        let volume = world
            .get_component::<BoundingVolumeComponent>(entity)
            .map(|v| v.volume)
            .or_else(|| assets.mesh(renderer.mesh).and_then(|m| m.bounds));

        if let Some(volume) = volume {
            if !volume.is_on_frustum(&frustum, &world_matrix) {
                continue;
            }
        }

        if bound_shader != Some(renderer.shader) {
            backend.bind_shader(renderer.shader);
            backend.set_uniform_mat4("projection", &camera.projection_matrix);
            backend.set_uniform_mat4("view", &camera.view_matrix);
            backend.set_uniform_vec3("viewPos", eye);
            upload_lights(world, backend, warnings);
            bound_shader = Some(renderer.shader);
        }

        backend.set_uniform_mat4("model", &world_matrix);

        if let Some(binding) = world.get_component::<AnimationComponent>(entity) {
            if let Some(matrices) = animation.skinning_matrices(binding.pose) {
                for (j, bone) in matrices.iter().enumerate() {
                    backend.set_uniform_mat4(&format!("finalBonesMatrices[{j}]"), bone);
                }
            }
        }

        backend.draw_mesh(renderer.mesh);
        stats.drawn += 1;
    }

    log::trace!("rendered {}/{} drawables", stats.drawn, stats.total);
    stats
}

fn upload_lights(world: &World, backend: &mut dyn RenderBackend, warnings: &mut RenderWarnings) {
    if let Some(light) = world
        .query::<DirectionalLightComponent>()
        .next()
        .and_then(|e| world.get_component::<DirectionalLightComponent>(e))
    {
        backend.set_uniform_vec3("dirLight.direction", light.direction);
        backend.set_uniform_vec3(
            "dirLight.ambient",
            light.ambient.component_mul(&light.color) * light.intensity,
        );
        backend.set_uniform_vec3(
            "dirLight.diffuse",
            light.diffuse.component_mul(&light.color) * light.intensity,
        );
        backend.set_uniform_vec3(
            "dirLight.specular",
            light.specular.component_mul(&light.color) * light.intensity,
        );
    }

    let point_entities: Vec<Entity> = world
        .query2::<PointLightComponent, TransformComponent>()
        .collect();
    if point_entities.len() > MAX_POINT_LIGHTS && !warnings.point_cap {
        log::warn!(
            "{} point lights in scene; truncating to {MAX_POINT_LIGHTS}",
            point_entities.len()
        );
        warnings.point_cap = true;
    }
    for (i, entity) in point_entities.iter().take(MAX_POINT_LIGHTS).enumerate() {
        let (Some(light), Some(transform)) = (
            world.get_component::<PointLightComponent>(*entity),
            world.get_component::<TransformComponent>(*entity),
        ) else {
            continue;
        };
        backend.set_uniform_vec3(&format!("pointLights[{i}].position"), transform.global_position());
        backend.set_uniform_vec3(
            &format!("pointLights[{i}].color"),
            light.color * light.intensity,
        );
        backend.set_uniform_f32(&format!("pointLights[{i}].constant"), light.constant);
        backend.set_uniform_f32(&format!("pointLights[{i}].linear"), light.linear);
        backend.set_uniform_f32(&format!("pointLights[{i}].quadratic"), light.quadratic);
    }
    backend.set_uniform_i32(
        "nrPointLights",
        point_entities.len().min(MAX_POINT_LIGHTS) as i32,
    );

    let spot_entities: Vec<Entity> = world
        .query2::<SpotLightComponent, TransformComponent>()
        .collect();
    if spot_entities.len() > MAX_SPOT_LIGHTS && !warnings.spot_cap {
        log::warn!(
            "{} spot lights in scene; truncating to {MAX_SPOT_LIGHTS}",
            spot_entities.len()
        );
        warnings.spot_cap = true;
    }
    for (i, entity) in spot_entities.iter().take(MAX_SPOT_LIGHTS).enumerate() {
        let (Some(light), Some(transform)) = (
            world.get_component::<SpotLightComponent>(*entity),
            world.get_component::<TransformComponent>(*entity),
        ) else {
            continue;
        };
        backend.set_uniform_vec3(&format!("spotLights[{i}].position"), transform.global_position());
        backend.set_uniform_vec3(&format!("spotLights[{i}].direction"), transform.forward());
        backend.set_uniform_vec3(
            &format!("spotLights[{i}].color"),
            light.color * light.intensity,
        );
        backend.set_uniform_f32(&format!("spotLights[{i}].cutOff"), light.cut_off);
        backend.set_uniform_f32(&format!("spotLights[{i}].outerCutOff"), light.outer_cut_off);
        backend.set_uniform_f32(&format!("spotLights[{i}].constant"), light.constant);
        backend.set_uniform_f32(&format!("spotLights[{i}].linear"), light.linear);
        backend.set_uniform_f32(&format!("spotLights[{i}].quadratic"), light.quadratic);
    }
    backend.set_uniform_i32(
        "nrSpotLights",
        spot_entities.len().min(MAX_SPOT_LIGHTS) as i32,
    );
}
