//! Render target abstraction for the carousel
//!
//! The controller never touches the DOM directly. In the browser the surface
//! is backed by the card and container elements; tests use `RecordingSurface`.

use crate::core::error::CarouselError;

/// Where the controller reads card geometry from and writes transforms to
pub trait CarouselSurface {
    /// Re-read the card list; called once at the start of every layout
    fn refresh_cards(&mut self) {}

    /// Number of cards currently on the ring
    fn card_count(&self) -> usize;

    /// Measured width of a single card in pixels
    fn card_width(&self) -> f64;

    /// Write the static transform of one card
    fn set_card_transform(&mut self, index: usize, transform: &str);

    /// Write the rotating container's transform
    ///
    /// Returns `CarouselError::ContainerMissing` when there is nothing to write to.
    fn set_container_transform(&mut self, transform: &str) -> Result<(), CarouselError>;
}

/// In-memory surface that records every write
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub card_width: f64,
    pub card_transforms: Vec<Option<String>>,
    pub container_transform: Option<String>,
    pub container_present: bool,
    pub container_writes: usize,
    pub card_refreshes: usize,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new(card_count: usize, card_width: f64) -> Self {
        Self {
            card_width,
            card_transforms: vec![None; card_count],
            container_transform: None,
            container_present: true,
            container_writes: 0,
            card_refreshes: 0,
        }
    }

    /// Surface whose container element has been removed
    pub fn without_container(mut self) -> Self {
        self.container_present = false;
        self
    }
}

#[cfg(test)]
impl CarouselSurface for RecordingSurface {
    fn refresh_cards(&mut self) {
        self.card_refreshes += 1;
    }

    fn card_count(&self) -> usize {
        self.card_transforms.len()
    }

    fn card_width(&self) -> f64 {
        self.card_width
    }

    fn set_card_transform(&mut self, index: usize, transform: &str) {
        if let Some(slot) = self.card_transforms.get_mut(index) {
            *slot = Some(transform.to_string());
        }
    }

    fn set_container_transform(&mut self, transform: &str) -> Result<(), CarouselError> {
        if !self.container_present {
            return Err(CarouselError::ContainerMissing);
        }
        self.container_transform = Some(transform.to_string());
        self.container_writes += 1;
        Ok(())
    }
}
