//! Text Archive Core Library
//!
//! This crate provides the wire models exchanged with the Text Archive backend,
//! the pure display helpers built on them, client configuration, and the
//! key-value persistence used to keep a session across restarts.

pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod timestamp;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{ConfigError, StorageError};
pub use models::{format_date_time, format_tags, parse_tags};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
