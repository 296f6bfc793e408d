pub mod config_load;
pub mod config_types;
pub mod error;
pub mod settings;

pub use config_load::Config;
pub use config_types::{AnimationConfig, OscConfig, StyleConfig, WindowConfig};
pub use error::ConfigError;
pub use settings::{parse_hex_color, Settings};
