use std::fmt;

/// Cell represents the fundamental unit of the automaton.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Grid address, `row` counted from the top and `col` from the left.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Single-cell edit applied at the cursor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EditKind {
    Create,
    Remove,
}

impl EditKind {
    /// The state a cell holds after this edit
    pub const fn result(self) -> Cell {
        match self {
            EditKind::Create => Cell::Alive,
            EditKind::Remove => Cell::Dead,
        }
    }
}
