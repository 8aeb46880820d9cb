use super::{Cell, Coord, rules::Neighborhood};
use crate::error::{Error, Result};
use rand::Rng;
use rayon::prelude::*;

/// Grid manages the 2D cell matrix, stored row-major.
/// Dimensions are fixed for the lifetime of the value.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Each cell is independently alive with probability `alive_fraction`.
    /// The fraction must already be validated to lie in `[0, 1]`.
    pub(crate) fn random<R: Rng>(
        width: usize,
        height: usize,
        alive_fraction: f64,
        rng: &mut R,
    ) -> Self {
        let cells = (0..width * height)
            .map(|_| Cell::from(rng.random_bool(alive_fraction)))
            .collect();

        Self { width, height, cells }
    }

    /// Dead grid with the given cells alive. Coordinates off the grid are ignored.
    pub fn with_alive(width: usize, height: usize, alive: impl IntoIterator<Item = Coord>) -> Self {
        let mut grid = Self::new(width, height);
        for coord in alive {
            if grid.contains(coord) {
                let idx = grid.index(coord);
                grid.cells[idx] = Cell::Alive;
            }
        }
        grid
    }

    /// Get grid dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    const fn index(&self, coord: Coord) -> usize {
        coord.row * self.width + coord.col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.contains(coord).then(|| self.cells[self.index(coord)])
    }

    /// Set a single cell. Fails without touching the grid when `coord` is off the grid.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<()> {
        if !self.contains(coord) {
            return Err(Error::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(coord);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.par_iter().filter(|cell| cell.is_alive()).count()
    }

    /// Cells of one row, left to right. `row` must be on the grid.
    pub(crate) fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |col| Coord::new(row, col)))
            .map(|coord| (coord, self.cells[self.index(coord)]))
    }

    /// Liveness at a signed position; anything off the grid is dead
    fn alive_at(&self, row: isize, col: isize) -> bool {
        self.offset(row, col)
            .is_some_and(|coord| self.cells[self.index(coord)].is_alive())
    }

    fn offset(&self, row: isize, col: isize) -> Option<Coord> {
        let coord = Coord::new(usize::try_from(row).ok()?, usize::try_from(col).ok()?);
        self.contains(coord).then_some(coord)
    }

    /// Advance one generation and return it as a new grid; `self` is untouched.
    pub fn step(&self) -> Self {
        let mut next = self.clone();
        next.step_in_place();
        next
    }

    /// Row-major sweep that mutates as it goes: cells later in the scan
    /// see the writes made for earlier cells. Writes landing off the grid
    /// are dropped one by one.
    pub fn step_in_place(&mut self) {
        for row in 0..self.height {
            if !self.row(row).iter().any(|cell| cell.is_alive()) {
                continue;
            }

            for col in 0..self.width {
                if !self.cells[self.index(Coord::new(row, col))].is_alive() {
                    continue;
                }

                let (r, c) = (row as isize, col as isize);
                let hood = Neighborhood {
                    left: self.alive_at(r, c - 1),
                    above: self.alive_at(r - 1, c),
                    right: self.alive_at(r, c + 1),
                    below: self.alive_at(r + 1, c),
                };

                for &(dr, dc, cell) in hood.spread() {
                    if let Some(target) = self.offset(r + dr, c + dc) {
                        let idx = self.index(target);
                        self.cells[idx] = cell;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    /// Parse rows of `#` (alive) and `.` (dead)
    fn grid(rows: &[&str]) -> Grid {
        let height = rows.len();
        let width = rows[0].len();
        let alive = rows.iter().enumerate().flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, ch)| ch == '#')
                .map(move |(col, _)| Coord::new(row, col))
        });
        Grid::with_alive(width, height, alive)
    }

    #[test]
    fn test_new_grid_is_dead() {
        let g = Grid::new(5, 3);
        assert_eq!(g.dimensions(), (5, 3));
        assert_eq!(g.iter_cells().count(), 15);
        assert_eq!(g.population(), 0);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let g = Grid::new(4, 4);
        assert_eq!(g.get(Coord::new(3, 3)), Some(Cell::Dead));
        assert_eq!(g.get(Coord::new(4, 0)), None);
        assert_eq!(g.get(Coord::new(0, 4)), None);
    }

    #[test]
    fn test_set_out_of_bounds_leaves_grid_alone() {
        let mut g = grid(&["#..", "...", "..#"]);
        let before = g.clone();
        let err = g.set(Coord::new(3, 1), Cell::Alive).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfBounds { coord: Coord::new(3, 1), width: 3, height: 3 }
        );
        assert_eq!(g, before);
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = Grid::random(30, 30, 0.4, &mut StdRng::seed_from_u64(7));
        let b = Grid::random(30, 30, 0.4, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_fraction_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Grid::random(10, 10, 0.0, &mut rng).population(), 0);
        assert_eq!(Grid::random(10, 10, 1.0, &mut rng).population(), 100);
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let g = Grid::new(8, 8);
        assert_eq!(g.step(), g);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let g = grid(&["....", ".#..", "....", "...."]);
        assert_eq!(g.step(), Grid::new(4, 4));
    }

    #[test]
    fn test_step_leaves_source_untouched() {
        let g = grid(&["....", ".#..", "....", "...."]);
        let snapshot = g.clone();
        let _ = g.step();
        assert_eq!(g, snapshot);
    }

    #[test]
    fn test_horizontal_pair_dies_in_scan_order() {
        // The left cell dies first, so its partner then sees no neighbor at all
        let g = grid(&["....", ".##.", "....", "...."]);
        assert_eq!(g.step(), Grid::new(4, 4));
    }

    #[test]
    fn test_vertical_pair_grows_upward() {
        let g = grid(&["....", ".#..", ".#..", "...."]);
        let expected = grid(&[".#..", ".#..", ".#..", "...."]);
        assert_eq!(g.step(), expected);
    }

    #[test]
    fn test_horizontal_branch_and_edge_writes() {
        let g = grid(&["#...", "###.", "....", "...."]);
        let expected = grid(&[".##.", "###.", "..#.", "...."]);
        assert_eq!(g.step(), expected);
    }

    #[test]
    fn test_crowded_cell_pushes_down_and_left() {
        let g = grid(&[".#.", "###", "##."]);
        let expected = grid(&["#.#", "##.", "##."]);
        assert_eq!(g.step(), expected);
    }

    #[test]
    fn test_full_grid() {
        let g = grid(&["###", "###", "###"]);
        let expected = grid(&["###", ".##", ".##"]);
        assert_eq!(g.step(), expected);
    }

    #[test]
    fn test_step_is_deterministic() {
        let g = Grid::random(40, 40, 0.3, &mut StdRng::seed_from_u64(99));
        assert_eq!(g.step(), g.step());
        assert_eq!(g.step().step(), g.step().step());
    }

    #[test]
    fn test_rectangular_grid_steps() {
        let g = grid(&["......", ".#....", ".#...."]);
        let expected = grid(&[".#....", ".#....", ".#...."]);
        assert_eq!(g.step(), expected);
    }
}
