//! Rotation state and per-frame rendering modes

/// How a frame advances the carousel angle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Pointer input drives the angle; the frame step leaves it alone
    Dragging,
    /// Paused with residual velocity; the angle coasts and velocity decays
    Coasting,
    /// Paused with no usable velocity; the angle is held
    Held,
    /// Nothing holds the carousel; constant auto-rotation
    AutoRotate,
}

impl RenderMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            RenderMode::Dragging => "Dragging",
            RenderMode::Coasting => "Coasting",
            RenderMode::Held => "Held",
            RenderMode::AutoRotate => "Auto-rotate",
        }
    }
}

/// Mutable carousel state owned by the controller
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    /// Rotation in degrees; unbounded, wraps visually every 360
    pub angle: f64,
    pub is_dragging: bool,
    /// Set by hover or drag; suspends auto-rotation
    pub is_paused: bool,
    /// Pointer is over the container
    pub is_hovering: bool,
    /// X where the current drag began
    pub start_x: f64,
    pub last_x: f64,
    /// Last angular delta, in degrees per event or frame
    pub velocity: f64,
    pub radius: f64,
}

impl CarouselState {
    pub fn new(radius: f64) -> Self {
        Self {
            angle: 0.0,
            is_dragging: false,
            is_paused: false,
            is_hovering: false,
            start_x: 0.0,
            last_x: 0.0,
            velocity: 0.0,
            radius,
        }
    }

    /// Mode the next frame step will run in
    pub fn mode(&self, velocity_epsilon: f64) -> RenderMode {
        if self.is_dragging {
            RenderMode::Dragging
        } else if !self.is_paused {
            RenderMode::AutoRotate
        } else if self.velocity.abs() > velocity_epsilon {
            RenderMode::Coasting
        } else {
            RenderMode::Held
        }
    }

    /// Angle folded into `[0, 360)` for display
    pub fn display_angle(&self) -> f64 {
        self.angle.rem_euclid(360.0)
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(0.0)
    }
}
