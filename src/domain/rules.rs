use super::Cell;

/// A write produced by the rule: `(row offset, col offset, new state)`
/// relative to the live cell being examined.
pub type Spread = (isize, isize, Cell);

const CROWDED: &[Spread] = &[
    (1, 0, Cell::Alive),
    (-1, 0, Cell::Dead),
    (0, 1, Cell::Dead),
    (0, -1, Cell::Alive),
];

const HORIZONTAL: &[Spread] = &[
    (1, 1, Cell::Alive),
    (1, -1, Cell::Dead),
    (-1, 1, Cell::Dead),
    (-1, -1, Cell::Dead),
];

const VERTICAL: &[Spread] = &[(1, 1, Cell::Alive), (-1, -1, Cell::Alive)];

const HALF_VERTICAL: &[Spread] = &[(0, 1, Cell::Alive), (-1, 0, Cell::Alive)];

const LONELY: &[Spread] = &[(0, 0, Cell::Dead)];

/// Liveness of the four orthogonal neighbors of a live cell.
/// Neighbors outside the grid count as dead.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Neighborhood {
    pub left: bool,
    pub above: bool,
    pub right: bool,
    pub below: bool,
}

impl Neighborhood {
    /// Pure function choosing the writes for a live cell. Branches are
    /// tried in order and the first match wins:
    /// 1. All four neighbors alive: push down and left, clear up and right
    /// 2. Left and right alive: grow lower-right, clear the other diagonals
    /// 3. Above and below alive: grow both lower-right and upper-left
    /// 4. Above or below alive: grow right and up
    /// 5. Anything else: the cell dies
    pub const fn spread(self) -> &'static [Spread] {
        match (self.left, self.above, self.right, self.below) {
            (true, true, true, true) => CROWDED,
            (true, _, true, _) => HORIZONTAL,
            (_, true, _, true) => VERTICAL,
            (_, true, _, _) | (_, _, _, true) => HALF_VERTICAL,
            _ => LONELY,
        }
    }
}
