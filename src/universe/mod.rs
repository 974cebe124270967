mod changes;

use crate::utils::{parse_plaintext, UniverseError};
use changes::ChangeLog;

/// A fixed-size toroidal Game of Life field that remembers which cells
/// flipped during the most recent mutation.
///
/// The grid is stored row-major with `index(row, col) = row * width + col`.
/// Every mutating operation (`tick`, `toggle_cell`, `set_cells`,
/// `randomize`, `clear`) replaces the change record, a pair of newly-alive /
/// newly-dead position buffers readable through [`Universe::newly_alive`]
/// and [`Universe::newly_dead`]. The buffers are refilled in place, so their
/// backing storage keeps its address between one mutation and the next.
pub struct Universe {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    width: usize,
    height: usize,
    changes: ChangeLog,
}

impl Universe {
    /// Creates a field of the given dimensions with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self, UniverseError> {
        if width == 0 || height == 0 {
            return Err(UniverseError::InvalidDimensions { width, height });
        }
        let size = width * height;
        Ok(Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            width,
            height,
            changes: ChangeLog::new(),
        })
    }

    /// Creates a field with random cells at the default fill rate.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(
        width: usize,
        height: usize,
        seed: Option<u64>,
    ) -> Result<Self, UniverseError> {
        let mut universe = Self::new(width, height)?;
        universe.randomize(seed, crate::DEFAULT_FILL_RATE);
        Ok(universe)
    }

    /// Parses a `.#` plaintext pattern into a field of matching dimensions.
    ///
    /// The initially-alive cells land in the newly-alive record so a
    /// change-driven caller can paint the starting state.
    pub fn from_plaintext(data: &str) -> Result<Self, UniverseError> {
        let (width, height, cells) = parse_plaintext(data)?;
        let mut universe = Self::new(width, height)?;
        for (idx, &state) in cells.iter().enumerate() {
            if state {
                universe.cells_curr[idx] = true;
                universe.changes.record(idx / width, idx % width, true);
            }
        }
        Ok(universe)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get_cell(&self, row: usize, col: usize) -> bool {
        self.cells_curr[row * self.width + col]
    }

    /// Row-major snapshot of the whole field.
    pub fn get_cells(&self) -> Vec<bool> {
        self.cells_curr.clone()
    }

    /// Total number of alive cells in the field.
    pub fn population(&self) -> usize {
        self.cells_curr.iter().filter(|&&cell| cell).count()
    }

    /// Positions that flipped dead→alive during the last mutation, as
    /// interleaved `[row0, col0, row1, col1, ...]` pairs.
    pub fn newly_alive(&self) -> &[u32] {
        self.changes.alive()
    }

    /// Positions that flipped alive→dead during the last mutation, in the
    /// same interleaved layout as [`Universe::newly_alive`].
    pub fn newly_dead(&self) -> &[u32] {
        self.changes.dead()
    }

    fn count_neibs(&self, row: usize, col: usize) -> usize {
        let r1 = if row == 0 { self.height - 1 } else { row - 1 };
        let r2 = if row == self.height - 1 { 0 } else { row + 1 };
        let c1 = if col == 0 { self.width - 1 } else { col - 1 };
        let c2 = if col == self.width - 1 { 0 } else { col + 1 };
        self.get_cell(r1, c1) as usize
            + self.get_cell(r1, col) as usize
            + self.get_cell(r1, c2) as usize
            + self.get_cell(row, c1) as usize
            + self.get_cell(row, c2) as usize
            + self.get_cell(r2, c1) as usize
            + self.get_cell(r2, col) as usize
            + self.get_cell(r2, c2) as usize
    }

    /// Advances the field by one generation.
    ///
    /// The next generation is computed against a snapshot of the current
    /// one, then swapped in; no cell observes another cell's updated state
    /// within the same tick. On fields with a side below 3 the wraparound
    /// lookups collapse onto fewer distinct cells, so a cell counts itself
    /// or a neighbor more than once (a lone cell on a 1x1 field sees 8 live
    /// neighbors and dies).
    pub fn tick(&mut self) {
        self.changes.reset();
        for row in 0..self.height {
            for col in 0..self.width {
                let neibs = self.count_neibs(row, col);
                let idx = row * self.width + col;
                let curr = self.cells_curr[idx];
                let next = if curr {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                self.cells_next[idx] = next;
                if next != curr {
                    self.changes.record(row, col, next);
                }
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        log::trace!(
            "tick: {} born, {} died",
            self.changes.alive_count(),
            self.changes.dead_count()
        );
    }

    /// Flips the state of a single cell.
    ///
    /// The change record is reduced to the toggled position, in the buffer
    /// matching its new state. Out-of-range positions leave both the field
    /// and the record untouched.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), UniverseError> {
        if row >= self.height || col >= self.width {
            return Err(UniverseError::OutOfBounds { row, col });
        }
        self.changes.reset();
        let idx = row * self.width + col;
        let state = !self.cells_curr[idx];
        self.cells_curr[idx] = state;
        self.changes.record(row, col, state);
        Ok(())
    }

    /// Sets every listed position alive.
    ///
    /// All positions are validated up front; an out-of-range entry rejects
    /// the whole call with the field unchanged. The change record holds the
    /// positions that actually flipped, in argument order.
    pub fn set_cells(&mut self, cells: &[(usize, usize)]) -> Result<(), UniverseError> {
        for &(row, col) in cells {
            if row >= self.height || col >= self.width {
                return Err(UniverseError::OutOfBounds { row, col });
            }
        }
        self.changes.reset();
        for &(row, col) in cells {
            let idx = row * self.width + col;
            if !self.cells_curr[idx] {
                self.cells_curr[idx] = true;
                self.changes.record(row, col, true);
            }
        }
        Ok(())
    }

    /// Refills the field with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        self.changes.reset();
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = row * self.width + col;
                let state = rng.gen_bool(fill_rate);
                if state != self.cells_curr[idx] {
                    self.cells_curr[idx] = state;
                    self.changes.record(row, col, state);
                }
            }
        }
        log::debug!("randomize: population {}", self.population());
    }

    /// Kills every cell.
    ///
    /// The newly-dead record lists every previously alive position in
    /// row-major order, letting a caller that only redraws changed cells
    /// erase the board without a full repaint.
    pub fn clear(&mut self) {
        self.changes.reset();
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = row * self.width + col;
                if self.cells_curr[idx] {
                    self.cells_curr[idx] = false;
                    self.changes.record(row, col, false);
                }
            }
        }
        log::debug!("clear: {} cells died", self.changes.dead_count());
    }
}
