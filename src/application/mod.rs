mod config;
mod cursor;
mod pacer;
mod simulation;

pub use config::Config;
pub use cursor::{Control, CursorController, EditMode, InputEvent};
pub use pacer::FramePacer;
pub use simulation::Simulation;
