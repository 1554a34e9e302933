// Export our modules for use in binaries and tests
pub mod cli;
pub mod config;
pub mod loader;
pub mod logging;

pub use cli::CliArgs;
pub use config::Settings;
