//! Light components
//!
//! Pure data; the render system reads these and uploads the corresponding
//! shader uniforms, truncating to the per-frame light caps.

use crate::ecs::Component;
use crate::foundation::math::Vec3;

/// Directional light (sun); only the first one found is uploaded
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLightComponent {
    /// World-space light direction
    pub direction: Vec3,
    /// Light color
    pub color: Vec3,
    /// Intensity multiplier applied to the ambient/diffuse/specular terms
    pub intensity: f32,

    /// Ambient contribution
    pub ambient: Vec3,
    /// Diffuse contribution
    pub diffuse: Vec3,
    /// Specular contribution
    pub specular: Vec3,
}

impl Component for DirectionalLightComponent {}

impl Default for DirectionalLightComponent {
    fn default() -> Self {
        Self {
            direction: Vec3::new(-0.2, -1.0, -0.3),
            color: Vec3::new(1.0, 1.0, 1.0),
            intensity: 1.0,
            ambient: Vec3::new(0.05, 0.05, 0.05),
            diffuse: Vec3::new(0.4, 0.4, 0.4),
            specular: Vec3::new(0.5, 0.5, 0.5),
        }
    }
}

/// Point light with distance attenuation
#[derive(Debug, Clone, PartialEq)]
pub struct PointLightComponent {
    /// Light color
    pub color: Vec3,
    /// Intensity multiplier
    pub intensity: f32,

    /// Constant attenuation term
    pub constant: f32,
    /// Linear attenuation term
    pub linear: f32,
    /// Quadratic attenuation term
    pub quadratic: f32,

    /// Effective radius hint for the host
    pub radius: f32,
}

impl Component for PointLightComponent {}

impl Default for PointLightComponent {
    fn default() -> Self {
        Self {
            color: Vec3::new(1.0, 1.0, 1.0),
            intensity: 1.0,
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
            radius: 10.0,
        }
    }
}

/// Spot light with cone cutoffs and distance attenuation
#[derive(Debug, Clone, PartialEq)]
pub struct SpotLightComponent {
    /// Light color
    pub color: Vec3,
    /// Intensity multiplier
    pub intensity: f32,

    /// Cosine of the inner cone angle
    pub cut_off: f32,
    /// Cosine of the outer cone angle
    pub outer_cut_off: f32,

    /// Constant attenuation term
    pub constant: f32,
    /// Linear attenuation term
    pub linear: f32,
    /// Quadratic attenuation term
    pub quadratic: f32,
}

impl Component for SpotLightComponent {}

impl Default for SpotLightComponent {
    fn default() -> Self {
        Self {
            color: Vec3::new(1.0, 1.0, 1.0),
            intensity: 1.0,
            cut_off: 12.5_f32.to_radians().cos(),
            outer_cut_off: 15.0_f32.to_radians().cos(),
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}
