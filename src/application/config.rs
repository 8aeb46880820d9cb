use std::path::PathBuf;

use clap::Parser;

use crate::domain::GridEngine;
use crate::error::{Error, Result};

/// Construction-time settings, read once from the command line
#[derive(Parser, Clone, Debug, PartialEq)]
#[command(name = "cellular_automata", about = "Interactive cellular automaton")]
pub struct Config {
    /// Number of columns
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Number of rows
    #[arg(long, default_value_t = 100)]
    pub height: usize,

    /// Probability that a cell starts alive
    #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
    pub alive_fraction: f64,

    /// Simulation frames per second
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    pub fps: f32,

    /// Seed for the initial grid and resets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Image drawn over the cursor cell
    #[arg(long)]
    pub cursor_icon: Option<PathBuf>,

    /// Case-insensitive substring identifying the game controller
    #[arg(long, default_value = "controller")]
    pub controller_filter: String,

    /// Skip game controller discovery
    #[arg(long)]
    pub keyboard_only: bool,

    /// Show generation, population and mode in the corner
    #[arg(long)]
    pub hud: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            alive_fraction: 0.05,
            fps: 5.0,
            seed: None,
            cursor_icon: None,
            controller_filter: "controller".to_owned(),
            keyboard_only: false,
            hud: false,
        }
    }
}

impl Config {
    /// Reject settings the simulation cannot run with
    pub fn validate(self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(0.0..=1.0).contains(&self.alive_fraction) {
            return Err(Error::InvalidConfig(format!(
                "alive fraction must be within [0, 1], got {}",
                self.alive_fraction
            )));
        }
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "fps must be positive, got {}",
                self.fps
            )));
        }
        Ok(self)
    }

    /// Build the grid engine these settings describe
    pub fn engine(&self) -> Result<GridEngine> {
        match self.seed {
            Some(seed) => GridEngine::with_seed(self.width, self.height, self.alive_fraction, seed),
            None => GridEngine::new(self.width, self.height, self.alive_fraction),
        }
    }
}
