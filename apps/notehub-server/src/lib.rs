//! NoteHub admin server: configuration, logging and module wiring.

pub mod app;
pub mod config;
pub mod logging;

pub use app::App;
pub use config::AppConfig;
