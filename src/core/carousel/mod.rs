//! 3D card carousel: ring geometry, rotation state and the controller that drives them

mod controller;
mod geometry;
mod state;
mod surface;

pub use controller::{CarouselController, CarouselInput};
pub use geometry::{base_angle, card_transform, compute_radius, container_transform};
pub use state::{CarouselState, RenderMode};
pub use surface::CarouselSurface;

#[cfg(test)]
pub use surface::RecordingSurface;
