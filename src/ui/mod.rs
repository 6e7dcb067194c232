pub mod carousel;
pub mod hero;
pub mod pages;

pub use carousel::{CardContent, Carousel};
pub use hero::HeroBanner;
pub use pages::{LandingPage, NotFoundPage};
