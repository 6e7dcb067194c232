//! Ring geometry and CSS transform strings for the carousel

use std::f64::consts::PI;

use crate::core::error::CarouselError;

/// Radius that fits `card_count` cards of `card_width` (plus `gap`) around a circle,
/// never smaller than `min_radius`.
pub fn compute_radius(
    card_count: usize,
    card_width: f64,
    gap: f64,
    min_radius: f64,
) -> Result<f64, CarouselError> {
    if card_count == 0 {
        return Err(CarouselError::NoCards);
    }
    if !card_width.is_finite() || card_width < 0.0 {
        return Err(CarouselError::InvalidCardWidth(card_width));
    }

    let circumference = card_count as f64 * (card_width + gap);
    Ok(min_radius.max(circumference / (2.0 * PI)))
}

/// Base angle in degrees of the card at `index` out of `count`
pub fn base_angle(index: usize, count: usize) -> f64 {
    index as f64 / count as f64 * 360.0
}

/// Static transform placing a card on the ring, facing outward
pub fn card_transform(base_angle: f64, radius: f64) -> String {
    format!("translate(-50%, -50%) rotateY({base_angle}deg) translateZ({radius}px)")
}

/// Per-frame transform for the rotating container
pub fn container_transform(radius: f64, angle: f64) -> String {
    format!("translateZ(-{radius}px) rotateY({angle}deg)")
}
