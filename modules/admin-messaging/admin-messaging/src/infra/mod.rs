//! Messaging backends and user directories.

pub mod appwrite;
pub mod log_backend;
pub mod static_directory;

pub use appwrite::AppwriteServerApi;
pub use log_backend::LogBackend;
pub use static_directory::StaticDirectory;
