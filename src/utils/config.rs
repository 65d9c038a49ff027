use thiserror::Error;

/// Settings of the frame loop that drives a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Number of generations to show before exiting.
    pub generations: u64,
    pub max_fps: f64,
    /// Random seed (if `None`, then random seed is generated)
    pub seed: Option<u64>,
    /// Written before every frame to clear the screen.
    pub clear_sequence: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Self::WIDTH,
            height: Self::HEIGHT,
            generations: Self::GENERATIONS,
            max_fps: Self::MAX_FPS,
            seed: None,
            clear_sequence: Self::CLEAR_SEQUENCE.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("grid of {width}x{height} cells is too large")]
    GridTooLarge { width: usize, height: usize },
    #[error("max fps must be a positive finite number, got {0}")]
    InvalidFps(f64),
}

impl Config {
    pub const WIDTH: usize = 40;
    pub const HEIGHT: usize = 15;
    pub const GENERATIONS: u64 = 300;
    pub const MAX_FPS: f64 = 30.;
    /// Form feed
    pub const CLEAR_SEQUENCE: &'static str = "\x0c";

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        // coordinates are normalised as i64
        let cells = width.checked_mul(height);
        if cells.is_none() || width > i64::MAX as usize || height > i64::MAX as usize {
            return Err(ConfigError::GridTooLarge { width, height });
        }
        if !(self.max_fps.is_finite() && self.max_fps > 0.) {
            return Err(ConfigError::InvalidFps(self.max_fps));
        }
        Ok(())
    }
}
