mod cell;
mod engine;
mod grid;
mod rules;

pub use cell::{Cell, Coord, EditKind};
pub use engine::GridEngine;
pub use grid::Grid;
pub use rules::{Neighborhood, Spread};
