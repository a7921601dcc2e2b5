//! Component trait definition

/// Marker trait for component types
///
/// Components are pure data attached to entities; all logic resides in
/// systems. Any `'static` type can serve as a component.
pub trait Component: 'static {}
