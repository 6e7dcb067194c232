//! Framework-independent carousel logic, configuration and scheduling seams

pub mod carousel;
pub mod config;
pub mod device;
pub mod error;
pub mod scheduler;
pub mod tilt;
#[cfg(test)]
mod tests;

pub use carousel::*;
pub use config::{CarouselConfig, Config};
pub use error::{CarouselError, ConfigError};
