//! Screen-space UI pass
//!
//! Draws after the scene with depth testing off and alpha blending on, in
//! ascending z-index order so higher elements overdraw lower ones. Elements
//! are unit quads placed by a model matrix built from the rectangle and the
//! hover animation's current scale.

use crate::ecs::components::{UiAnimationComponent, UiRendererComponent, UiTransformComponent};
use crate::ecs::{Entity, World};
use crate::foundation::math::{Mat4, Mat4Ext, Vec3};
use crate::render::RenderBackend;

/// Draw all UI elements
pub fn render(world: &mut World, backend: &mut dyn RenderBackend, width: f32, height: f32) {
    // Reorder the storage itself so the draw order is the query order
    world.sort_components_by::<UiTransformComponent, _>(|a, b| a.z_index.cmp(&b.z_index));

    let elements: Vec<Entity> = world
        .query2::<UiTransformComponent, UiRendererComponent>()
        .collect();
    if elements.is_empty() {
        return;
    }

    let projection = Mat4::orthographic_screen(width, height);

    backend.set_depth_test(false);
    backend.set_alpha_blend(true);

    let mut bound_shader = None;
    for entity in elements {
        let (Some(rect), Some(renderer)) = (
            world.get_component::<UiTransformComponent>(entity).copied(),
            world.get_component::<UiRendererComponent>(entity).copied(),
        ) else {
            continue;
        };
        let scale = world
            .get_component::<UiAnimationComponent>(entity)
            .map_or(1.0, |anim| anim.current_scale);

        if bound_shader != Some(renderer.shader) {
            backend.bind_shader(renderer.shader);
            backend.set_uniform_mat4("projection", &projection);
            bound_shader = Some(renderer.shader);
        }

        // Scale about the rectangle's center so hover growth is symmetric
        let center = rect.position + rect.size * 0.5;
        let model = Mat4::new_translation(&Vec3::new(center.x, center.y, 0.0))
            * Mat4::new_nonuniform_scaling(&Vec3::new(
                rect.size.x * scale,
                rect.size.y * scale,
                1.0,
            ));
        backend.set_uniform_mat4("model", &model);
        backend.set_uniform_vec4("uiColor", renderer.color);

        match renderer.texture {
            Some(texture) => {
                backend.bind_texture(texture);
                backend.set_uniform_i32("useTexture", 1);
            }
            None => backend.set_uniform_i32("useTexture", 0),
        }

        backend.draw_quad();
    }

    backend.set_alpha_blend(false);
    backend.set_depth_test(true);
}
