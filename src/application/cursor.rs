use crate::domain::{Coord, EditKind, GridEngine};
use crate::error::Result;
use log::{debug, info};

/// Discrete input vocabulary shared by keyboard and game controller
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ToggleCreate,
    ToggleRemove,
    TogglePause,
    Reset,
    Clear,
    Quit,
}

/// Effect applied at the cursor once per frame
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum EditMode {
    #[default]
    None,
    Create,
    Remove,
}

impl EditMode {
    pub const fn edit_kind(self) -> Option<EditKind> {
        match self {
            EditMode::None => None,
            EditMode::Create => Some(EditKind::Create),
            EditMode::Remove => Some(EditKind::Remove),
        }
    }

    /// Selecting the active mode again turns editing off; any other mode switches over
    const fn toggled(self, target: EditMode) -> Self {
        match (self, target) {
            (EditMode::Create, EditMode::Create) | (EditMode::Remove, EditMode::Remove) => {
                EditMode::None
            }
            _ => target,
        }
    }
}

/// Whether the driving loop should keep going after an event
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Control {
    Continue,
    Quit,
}

/// CursorController owns the cursor position, edit mode and pause flag.
/// The position always stays inside the grid it was built for.
#[derive(Clone, Debug)]
pub struct CursorController {
    position: Coord,
    mode: EditMode,
    paused: bool,
    rows: usize,
    cols: usize,
}

impl CursorController {
    /// Cursor at the top-left corner of a `width`x`height` grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            position: Coord::default(),
            mode: EditMode::None,
            paused: false,
            rows: height.max(1),
            cols: width.max(1),
        }
    }

    pub const fn position(&self) -> Coord {
        self.position
    }

    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Move by a signed offset, clamping at the grid edges
    fn nudge(&mut self, d_row: isize, d_col: isize) {
        let clamp = |value: usize, delta: isize, len: usize| {
            value.saturating_add_signed(delta).min(len - 1)
        };
        self.position = Coord::new(
            clamp(self.position.row, d_row, self.rows),
            clamp(self.position.col, d_col, self.cols),
        );
    }

    fn set_mode(&mut self, target: EditMode) {
        self.mode = self.mode.toggled(target);
        debug!("edit mode is now {:?}", self.mode);
    }

    /// Apply one discrete event. Everything except `Quit` continues the loop;
    /// `Reset` and `Clear` are grid-level and left to the caller.
    pub fn handle(&mut self, event: InputEvent) -> Control {
        match event {
            InputEvent::MoveUp => self.nudge(-1, 0),
            InputEvent::MoveDown => self.nudge(1, 0),
            InputEvent::MoveLeft => self.nudge(0, -1),
            InputEvent::MoveRight => self.nudge(0, 1),
            InputEvent::ToggleCreate => self.set_mode(EditMode::Create),
            InputEvent::ToggleRemove => self.set_mode(EditMode::Remove),
            InputEvent::TogglePause => {
                self.paused = !self.paused;
                info!("{}", if self.paused { "paused" } else { "resumed" });
            }
            InputEvent::Reset | InputEvent::Clear => {}
            InputEvent::Quit => return Control::Quit,
        }
        Control::Continue
    }

    /// Apply the current edit mode at the cursor
    pub fn tick(&self, engine: &mut GridEngine) -> Result<()> {
        match self.mode.edit_kind() {
            Some(kind) => engine.apply_edit(self.position, kind),
            None => Ok(()),
        }
    }
}
