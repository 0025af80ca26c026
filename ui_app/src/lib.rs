pub mod cli;
pub mod config_loader;
pub mod timeline;
pub mod tracing_setup;
