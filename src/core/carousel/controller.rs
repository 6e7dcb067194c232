//! Carousel controller: input handling, inertia and per-frame rendering

use crate::core::carousel::geometry::{
    base_angle, card_transform, compute_radius, container_transform,
};
use crate::core::carousel::state::{CarouselState, RenderMode};
use crate::core::carousel::surface::CarouselSurface;
use crate::core::config::CarouselConfig;
use crate::core::error::CarouselError;

/// Input delivered to the controller by the event source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselInput {
    /// Mouse button or first touch went down at this X
    PointerDown(f64),
    /// Pointer or touch moved to this X
    PointerMove(f64),
    PointerUp,
    HoverEnter,
    HoverLeave,
}

/// Owns the carousel state and the surface it renders to
pub struct CarouselController<S> {
    config: CarouselConfig,
    state: CarouselState,
    surface: S,
}

impl<S: CarouselSurface> CarouselController<S> {
    /// Create a controller; call `layout` before the first frame
    pub fn new(config: CarouselConfig, surface: S) -> Self {
        Self {
            state: CarouselState::new(config.min_radius),
            config,
            surface,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Measure the cards, compute the ring radius and write each card's static transform.
    ///
    /// Also used to relayout after a resize. On error the previous radius is kept
    /// and no card is touched.
    pub fn layout(&mut self) -> Result<f64, CarouselError> {
        self.surface.refresh_cards();
        let count = self.surface.card_count();
        let width = self.surface.card_width();
        let radius = compute_radius(count, width, self.config.gap, self.config.min_radius)?;

        self.state.radius = radius;
        for index in 0..count {
            let transform = card_transform(base_angle(index, count), radius);
            self.surface.set_card_transform(index, &transform);
        }

        tracing::debug!(cards = count, card_width = width, radius, "carousel laid out");
        Ok(radius)
    }

    /// Advance one display frame and write the container transform.
    ///
    /// A missing container skips the write for this frame only.
    pub fn frame(&mut self) -> RenderMode {
        let mode = self.state.mode(self.config.velocity_epsilon);
        match mode {
            RenderMode::AutoRotate => {
                self.state.angle += self.config.auto_rotate_speed;
            }
            RenderMode::Coasting => {
                self.state.angle += self.state.velocity;
                self.state.velocity *= self.config.decay;
            }
            RenderMode::Dragging | RenderMode::Held => {}
        }

        let transform = container_transform(self.state.radius, self.state.angle);
        if let Err(err) = self.surface.set_container_transform(&transform) {
            tracing::trace!(%err, "skipping carousel frame");
        }
        mode
    }

    /// Dispatch a single input event
    pub fn handle(&mut self, input: CarouselInput) {
        match input {
            CarouselInput::PointerDown(x) => self.pointer_down(x),
            CarouselInput::PointerMove(x) => self.pointer_move(x),
            CarouselInput::PointerUp => self.pointer_up(),
            CarouselInput::HoverEnter => self.hover_enter(),
            CarouselInput::HoverLeave => self.hover_leave(),
        }
    }

    pub fn pointer_down(&mut self, x: f64) {
        self.state.is_dragging = true;
        self.state.is_paused = true;
        self.state.start_x = x;
        self.state.last_x = x;
        self.state.velocity = 0.0;
    }

    /// Rotate by the horizontal delta since the last event. Ignored unless dragging.
    pub fn pointer_move(&mut self, x: f64) {
        if !self.state.is_dragging {
            return;
        }
        let delta = (x - self.state.last_x) * self.config.sensitivity;
        self.state.velocity = delta;
        self.state.angle += delta;
        self.state.last_x = x;
    }

    /// End a drag. Stays paused while the pointer still hovers the container.
    pub fn pointer_up(&mut self) {
        self.state.is_dragging = false;
        self.state.is_paused = self.state.is_hovering;
    }

    pub fn hover_enter(&mut self) {
        self.state.is_hovering = true;
        self.state.is_paused = true;
    }

    /// Resume auto-rotation and force-end any drag in progress
    pub fn hover_leave(&mut self) {
        self.state.is_hovering = false;
        self.state.is_paused = false;
        if self.state.is_dragging {
            self.pointer_up();
        }
    }
}
