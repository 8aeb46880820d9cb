use super::{Cell, Coord, EditKind, Grid};
use crate::error::{Error, Result};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

/// GridEngine owns the grid and is the only way to mutate it:
/// stepping, single-cell edits, and wholesale reset.
pub struct GridEngine {
    grid: Grid,
    alive_fraction: f64,
    rng: StdRng,
    generation: u64,
}

impl GridEngine {
    /// Random `width`x`height` grid seeded from the operating system
    pub fn new(width: usize, height: usize, alive_fraction: f64) -> Result<Self> {
        Self::build(width, height, alive_fraction, StdRng::from_os_rng())
    }

    /// Same as [`GridEngine::new`] but reproducible for a given seed
    pub fn with_seed(width: usize, height: usize, alive_fraction: f64, seed: u64) -> Result<Self> {
        Self::build(width, height, alive_fraction, StdRng::seed_from_u64(seed))
    }

    /// Wrap an existing grid. Resets keep its dimensions and reseed it with
    /// `alive_fraction`.
    pub fn from_grid(grid: Grid, alive_fraction: f64, seed: u64) -> Result<Self> {
        let (width, height) = grid.dimensions();
        validate(width, height, alive_fraction)?;
        Ok(Self {
            grid,
            alive_fraction,
            rng: StdRng::seed_from_u64(seed),
            generation: 0,
        })
    }

    fn build(width: usize, height: usize, alive_fraction: f64, mut rng: StdRng) -> Result<Self> {
        validate(width, height, alive_fraction)?;
        let grid = Grid::random(width, height, alive_fraction, &mut rng);
        info!(
            "created {}x{} grid with {} live cells",
            width,
            height,
            grid.population()
        );
        Ok(Self {
            grid,
            alive_fraction,
            rng,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation in place and return the new state
    pub fn step(&mut self) -> &Grid {
        self.grid.step_in_place();
        self.generation += 1;
        if self.generation % 100 == 0 {
            debug!(
                "generation {}: {} live cells",
                self.generation,
                self.grid.population()
            );
        }
        &self.grid
    }

    /// Create or remove the cell at `coord`. Out-of-bounds coordinates are
    /// rejected and leave the grid unchanged.
    pub fn apply_edit(&mut self, coord: Coord, kind: EditKind) -> Result<()> {
        self.grid.set(coord, kind.result())
    }

    /// Read-only lookup with the same bounds contract as [`GridEngine::apply_edit`]
    pub fn query(&self, coord: Coord) -> Result<Cell> {
        let (width, height) = self.grid.dimensions();
        self.grid
            .get(coord)
            .ok_or(Error::OutOfBounds { coord, width, height })
    }

    /// Regenerate the whole grid from the engine's random source
    pub fn reset(&mut self) {
        let (width, height) = self.grid.dimensions();
        self.grid = Grid::random(width, height, self.alive_fraction, &mut self.rng);
        self.generation = 0;
        info!("grid reset with {} live cells", self.grid.population());
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        info!("grid cleared");
    }
}

fn validate(width: usize, height: usize, alive_fraction: f64) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidConfig(format!(
            "grid dimensions must be positive, got {width}x{height}"
        )));
    }
    if !(0.0..=1.0).contains(&alive_fraction) {
        return Err(Error::InvalidConfig(format!(
            "alive fraction must be within [0, 1], got {alive_fraction}"
        )));
    }
    Ok(())
}
