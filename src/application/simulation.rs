use super::{Control, CursorController, InputEvent};
use crate::domain::{Grid, GridEngine};
use crate::error::Result;

/// Simulation composes the grid engine and the cursor controller and runs
/// one frame at a time: input, then step (unless paused), then the cursor edit.
pub struct Simulation {
    engine: GridEngine,
    cursor: CursorController,
    population: usize,
}

impl Simulation {
    pub fn new(engine: GridEngine) -> Self {
        let (width, height) = engine.grid().dimensions();
        let population = engine.grid().population();
        Self {
            engine,
            cursor: CursorController::new(width, height),
            population,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    pub fn cursor(&self) -> &CursorController {
        &self.cursor
    }

    /// Live cells as of the end of the last frame
    pub const fn population(&self) -> usize {
        self.population
    }

    /// Run one frame with the events gathered since the last one, in order.
    /// A `Quit` stops processing immediately.
    pub fn frame(&mut self, events: impl IntoIterator<Item = InputEvent>) -> Result<Control> {
        for event in events {
            match event {
                InputEvent::Reset => self.engine.reset(),
                InputEvent::Clear => self.engine.clear(),
                _ => {}
            }
            if self.cursor.handle(event) == Control::Quit {
                return Ok(Control::Quit);
            }
        }

        if !self.cursor.is_paused() {
            self.engine.step();
        }
        self.cursor.tick(&mut self.engine)?;
        self.population = self.engine.grid().population();

        Ok(Control::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::EditMode;
    use crate::domain::{Cell, Coord};

    const NO_INPUT: [InputEvent; 0] = [];

    fn blank(width: usize, height: usize) -> Simulation {
        Simulation::new(GridEngine::from_grid(Grid::new(width, height), 1.0, 0).unwrap())
    }

    #[test]
    fn test_frame_steps_when_running() {
        let mut sim = blank(4, 4);
        sim.frame(NO_INPUT).unwrap();
        sim.frame(NO_INPUT).unwrap();
        assert_eq!(sim.engine().generation(), 2);
    }

    #[test]
    fn test_paused_frame_skips_step_but_edits() {
        let mut sim = blank(4, 4);
        sim.frame([InputEvent::TogglePause, InputEvent::ToggleCreate]).unwrap();
        assert_eq!(sim.engine().generation(), 0);
        assert_eq!(sim.grid().get(Coord::new(0, 0)), Some(Cell::Alive));
    }

    #[test]
    fn test_edit_lands_after_step() {
        // A lone created cell would die in the step; editing afterwards keeps it visible
        let mut sim = blank(4, 4);
        sim.frame([InputEvent::MoveDown, InputEvent::MoveRight, InputEvent::ToggleCreate])
            .unwrap();
        assert_eq!(sim.grid(), &Grid::with_alive(4, 4, [Coord::new(1, 1)]));
    }

    #[test]
    fn test_drawing_a_trail() {
        let mut sim = blank(5, 5);
        sim.frame([InputEvent::TogglePause, InputEvent::ToggleCreate]).unwrap();
        sim.frame([InputEvent::MoveRight]).unwrap();
        sim.frame([InputEvent::MoveRight, InputEvent::ToggleCreate]).unwrap();
        assert_eq!(sim.cursor().mode(), EditMode::None);
        assert_eq!(
            sim.grid(),
            &Grid::with_alive(5, 5, [Coord::new(0, 0), Coord::new(0, 1)])
        );
    }

    #[test]
    fn test_quit_stops_the_frame() {
        let mut sim = blank(4, 4);
        let control = sim
            .frame([InputEvent::Quit, InputEvent::ToggleCreate])
            .unwrap();
        assert_eq!(control, Control::Quit);
        assert_eq!(sim.engine().generation(), 0);
        assert_eq!(sim.cursor().mode(), EditMode::None);
    }

    #[test]
    fn test_reset_and_clear() {
        let mut sim = blank(3, 3);
        sim.frame([InputEvent::TogglePause, InputEvent::Reset]).unwrap();
        assert_eq!(sim.grid().population(), 9);
        sim.frame([InputEvent::Clear]).unwrap();
        assert_eq!(sim.grid().population(), 0);
    }

    #[test]
    fn test_population_tracks_frames() {
        let grid = Grid::with_alive(4, 4, [Coord::new(0, 0), Coord::new(3, 3)]);
        let mut sim = Simulation::new(GridEngine::from_grid(grid, 0.0, 0).unwrap());
        assert_eq!(sim.population(), 2);

        // Both cells are isolated and die; the created cell lands after the step
        sim.frame([InputEvent::ToggleCreate]).unwrap();
        assert_eq!(sim.population(), 1);
        assert_eq!(sim.population(), sim.grid().population());
    }
}
