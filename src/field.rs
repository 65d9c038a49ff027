/// Two-dimensional field of cells whose edges are stitched together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Field {
    /// Creates a field filled with dead cells.
    ///
    /// Panics if `width` or `height` is zero or the cell count overflows.
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1);
        let size = width
            .checked_mul(height)
            .expect("field dimensions overflow usize");
        Self {
            cells: vec![false; size],
            width,
            height,
        }
    }

    /// [`(width, height)`] of the field
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Writes the state of the cell at `(x, y)`.
    ///
    /// Coordinates are not wrapped: `x < width` and `y < height` must hold.
    pub fn set(&mut self, x: usize, y: usize, state: bool) {
        debug_assert!(x < self.width && y < self.height);
        self.cells[x + y * self.width] = state;
    }

    /// Reports whether the cell at `(x, y)` is alive.
    ///
    /// Any integer coordinates are accepted; they are wrapped toroidally,
    /// so `x == -1` refers to the last column.
    pub fn alive(&self, x: i64, y: i64) -> bool {
        let x = x.rem_euclid(self.width as i64) as usize;
        let y = y.rem_euclid(self.height as i64) as usize;
        self.cells[x + y * self.width]
    }

    /// Number of alive cells among the 8 toroidal neighbours of `(x, y)`.
    pub fn count_neighbours(&self, x: i64, y: i64) -> usize {
        // reduce first so that the offsets below cannot overflow
        let x = x.rem_euclid(self.width as i64);
        let y = y.rem_euclid(self.height as i64);
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if (dx != 0 || dy != 0) && self.alive(x + dx, y + dy) {
                    count += 1;
                }
            }
        }
        count
    }

    /// State of the cell at `(x, y)` in the following generation.
    ///
    /// Exactly 3 neighbours: alive; exactly 2: keeps its state; otherwise dead.
    pub fn next(&self, x: i64, y: i64) -> bool {
        let neibs = self.count_neighbours(x, y);
        neibs == 3 || (neibs == 2 && self.alive(x, y))
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
