//! Triangular pairwise flag storage.

/// Symmetric boolean relation over `n` objects, storing only pairs with
/// `i > j` (the diagonal is never stored).
///
/// Slot for `(i, j)` with `i > j` is `i * (i - 1) / 2 + j`.
#[derive(Debug, Clone, Default)]
pub struct OverlapMatrix {
    n: usize,
    cells: Vec<bool>,
}

#[inline]
fn slot(i: usize, j: usize) -> usize {
    let (hi, lo) = if i > j { (i, j) } else { (j, i) };
    hi * (hi - 1) / 2 + lo
}

impl OverlapMatrix {
    /// Creates an all-false matrix for `n` objects.
    pub fn new(n: usize) -> Self {
        let mut m = Self::default();
        m.resize(n);
        m
    }

    /// Resizes to `n` objects and clears every flag.
    pub fn resize(&mut self, n: usize) {
        self.n = n;
        self.cells.clear();
        self.cells.resize(n * n.saturating_sub(1) / 2, false);
    }

    /// Number of objects covered.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Resets every flag to false.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Marks `(i, j)` as overlapping. Ignores `i == j`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn set(&mut self, i: usize, j: usize) {
        if i != j {
            self.cells[slot(i, j)] = true;
        }
    }

    /// Order-independent lookup. Always false on the diagonal.
    pub fn get(&self, i: usize, j: usize) -> bool {
        i != j && self.cells[slot(i, j)]
    }

    /// Number of set pairs.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
