//! Pointer-driven tilt for the hero banner

/// Tilt strength and perspective for the hero section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    /// Maximum rotation in degrees at the section edge
    pub factor: f64,
    pub perspective_px: f64,
    /// Maximum title offset in pixels at the section edge
    pub title_shift_px: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            factor: 4.0,
            perspective_px: 1500.0,
            title_shift_px: 8.0,
        }
    }
}

/// Client-space rectangle of the hovered section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer offset from the section centre, each axis in `[-1, 1]` inside the rect
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub move_x: f64,
    pub move_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        move_x: 0.0,
        move_y: 0.0,
    };

    /// Normalised pointer offset, or `None` for a collapsed rectangle
    pub fn from_pointer(rect: &Rect, x: f64, y: f64) -> Option<Self> {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return None;
        }
        let center_x = rect.left + rect.width / 2.0;
        let center_y = rect.top + rect.height / 2.0;
        Some(Self {
            move_x: (x - center_x) / (rect.width / 2.0),
            move_y: (y - center_y) / (rect.height / 2.0),
        })
    }

    pub fn banner_transform(&self, config: &TiltConfig) -> String {
        let rotate_x = -self.move_y * config.factor;
        let rotate_y = self.move_x * config.factor;
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            config.perspective_px,
            rotate_x + 0.0,
            rotate_y + 0.0
        )
    }

    pub fn title_transform(&self, config: &TiltConfig) -> String {
        format!(
            "translate({}px, {}px)",
            self.move_x * config.title_shift_px,
            self.move_y * config.title_shift_px
        )
    }
}
