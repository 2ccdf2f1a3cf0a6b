pub mod app;
pub mod config;
pub mod connector;
pub mod dir;
pub mod gui;
pub mod logger;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
