#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod exercise;
pub mod gate;
pub mod model;
pub mod session;

pub use catalog::{Catalog, CatalogError, LevelValidationError};
pub use error::Error;
pub use session::Session;
