// Domain layer - grid, step rule, engine
pub mod domain;

// Application layer - cursor, configuration, frame coordination
pub mod application;

// Infrastructure layer - rendering, input devices
pub mod rendering;
pub mod input;

pub mod error;

// Re-exports for convenience
pub use domain::{Cell, Coord, EditKind, Grid, GridEngine};
pub use application::{Config, CursorController, EditMode, InputEvent, Simulation};
pub use error::{Error, Result};
