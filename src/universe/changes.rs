/// Change record of the most recent mutation: one buffer of positions that
/// flipped dead→alive and one of positions that flipped alive→dead.
///
/// Positions are stored as interleaved `[row0, col0, row1, col1, ...]`
/// pairs of 32-bit integers, the layout an external caller reads straight
/// out of the backing storage. `reset` keeps both allocations, so refilling
/// never moves the buffers while their capacity suffices.
pub struct ChangeLog {
    alive: Vec<u32>,
    dead: Vec<u32>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self {
            alive: Vec::new(),
            dead: Vec::new(),
        }
    }

    /// Drops the previous record, keeping the allocations for reuse.
    pub fn reset(&mut self) {
        self.alive.clear();
        self.dead.clear();
    }

    /// Appends a flipped position to the buffer matching its new state.
    pub fn record(&mut self, row: usize, col: usize, alive: bool) {
        let buf = if alive { &mut self.alive } else { &mut self.dead };
        buf.push(row as u32);
        buf.push(col as u32);
    }

    pub fn alive(&self) -> &[u32] {
        &self.alive
    }

    pub fn dead(&self) -> &[u32] {
        &self.dead
    }

    pub fn alive_count(&self) -> usize {
        self.alive.len() / 2
    }

    pub fn dead_count(&self) -> usize {
        self.dead.len() / 2
    }
}

impl Default for ChangeLog {
    fn default() -> Self {
        Self::new()
    }
}
