mod loader;
mod merge;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader};
pub use merge::build_config;
pub use model::{Config, FileConfig, parse_ignore_path_errors};
