//! Data models for the application
//!
//! This module contains the request and response shapes exchanged with the
//! backend, organized by resource. Each sub-module represents one REST area.

mod auth;
mod classification;
mod memo;
mod ocr;
mod schedule;
mod upload;

// Re-export all models for convenient imports
pub use auth::*;
pub use classification::*;
pub use memo::*;
pub use ocr::*;
pub use schedule::*;
pub use upload::*;
