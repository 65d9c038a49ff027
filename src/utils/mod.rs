mod config;
mod fps_limit;

pub use config::{Config, ConfigError};
pub use fps_limit::FpsLimiter;
