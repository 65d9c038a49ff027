#![warn(clippy::all)]

mod field;
mod gui;
mod simulation;
mod terminal;
mod utils;

pub use field::Field;
pub use gui::{run_gui, App};
pub use simulation::Simulation;
pub use terminal::run_terminal;
pub use utils::{Config, ConfigError, FpsLimiter};
