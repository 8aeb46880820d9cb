use thiserror::Error;

use crate::domain::Coord;

/// Errors surfaced by the simulation core and its collaborators.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Construction-time configuration was rejected. Fatal before the loop starts.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A coordinate outside the grid reached the core.
    #[error("cell {coord} is outside the {width}x{height} grid")]
    OutOfBounds {
        coord: Coord,
        width: usize,
        height: usize,
    },

    /// The input device failed while being read.
    #[error("input device error: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, Error>;
