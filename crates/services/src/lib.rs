#![forbid(unsafe_code)]

pub mod catalog_loader;
pub mod error;
pub mod feedback;

pub use catalog_loader::{load_catalog, parse_catalog};
pub use error::CatalogLoadError;
pub use feedback::{FeedbackSounds, NullFeedback, SoundCue};
