//! Entity-Component-System core
//!
//! A single-threaded typed-query store plus the fixed-order system pipeline
//! that advances the scene once per displayed frame.

pub mod components;
pub mod systems;

mod component;
mod entity;
mod world;

pub use component::Component;
pub use entity::Entity;
pub use world::World;
