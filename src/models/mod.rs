//! Data models for Voyagera

pub mod tourist;
pub mod upload;

// Re-export commonly used types
pub use tourist::{Tourist, TouristShort};
pub use upload::UploadedFile;
