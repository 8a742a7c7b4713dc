use std::collections::BinaryHeap;

use wayfind_grid::Cell;

// ---------------------------------------------------------------------------
// Internal per-run node state
// ---------------------------------------------------------------------------

/// Dense per-cell search state, indexed by `row * rows + col`.
///
/// A node belongs to the current run only when its `generation` matches the
/// searcher's; anything else reads as "g-score infinity". This makes
/// invalidating all state between runs a single counter bump.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// Whether the cell currently has a live frontier entry.
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry ordered by `(f, seq)`.
///
/// The ordering is reversed so the max-heap pops the smallest f-score first,
/// and ties break FIFO by insertion sequence. Cells themselves never need an
/// ordering to live on the frontier.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct FrontierEntry {
    pub(crate) f: i32,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// CameFrom
// ---------------------------------------------------------------------------

/// Predecessor map produced by a successful search run.
///
/// For every cell reached by an improving relaxation it records the cell it
/// was reached from; the start cell has no predecessor. Only
/// [`reconstruct`](crate::reconstruct) and display layers consume it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameFrom {
    rows: usize,
    /// Parent index per cell, `usize::MAX` when absent.
    parent: Vec<usize>,
}

impl CameFrom {
    pub(crate) fn new(rows: usize, parent: Vec<usize>) -> Self {
        Self { rows, parent }
    }

    /// The cell `cell` was reached from, or `None` if `cell` was never
    /// relaxed (or is the start cell, or lies outside the searched grid).
    pub fn get(&self, cell: Cell) -> Option<Cell> {
        let rows = self.rows as i32;
        if cell.row < 0 || cell.row >= rows || cell.col < 0 || cell.col >= rows {
            return None;
        }
        let i = cell.row as usize * self.rows + cell.col as usize;
        let p = self.parent[i];
        if p == usize::MAX {
            return None;
        }
        Some(Cell::new((p / self.rows) as i32, (p % self.rows) as i32))
    }

    /// Whether `cell` has a recorded predecessor.
    pub fn contains(&self, cell: Cell) -> bool {
        self.get(cell).is_some()
    }
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Reusable A* search engine.
///
/// Owns the node array, the frontier heap, and the neighbor scratch buffer
/// so repeated runs over same-sized grids allocate nothing after the first
/// use. One run at a time: all per-run state lives here, never shared.
pub struct Searcher {
    pub(crate) rows: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) frontier: BinaryHeap<FrontierEntry>,
    pub(crate) seq: u64,
    pub(crate) nbuf: Vec<Cell>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    /// Create a new searcher. Buffers are sized lazily on the first run.
    pub fn new() -> Self {
        Self {
            rows: 0,
            nodes: Vec::new(),
            generation: 0,
            frontier: BinaryHeap::new(),
            seq: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Size the node array for a `rows × rows` grid.
    ///
    /// If the grid fits within existing capacity the array is kept as-is;
    /// stale entries are ignored via the generation counter. Otherwise it
    /// is reallocated.
    pub(crate) fn fit(&mut self, rows: usize) {
        self.rows = rows;
        let len = rows * rows;
        if len <= self.nodes.len() {
            return;
        }
        self.nodes.clear();
        self.nodes.resize(len, Node::default());
        self.generation = 0;
    }

    /// Convert a cell to a flat index. Callers bounds-check first.
    #[inline]
    pub(crate) fn idx(&self, cell: Cell) -> usize {
        cell.row as usize * self.rows + cell.col as usize
    }

    /// Convert a flat index back to a cell.
    #[inline]
    pub(crate) fn cell(&self, idx: usize) -> Cell {
        Cell::new((idx / self.rows) as i32, (idx % self.rows) as i32)
    }

    /// Push a frontier entry, assigning the next insertion sequence number.
    #[inline]
    pub(crate) fn push(&mut self, f: i32, idx: usize) {
        self.frontier.push(FrontierEntry {
            f,
            seq: self.seq,
            idx,
        });
        self.seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_orders_by_f_then_fifo() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { f: 5, seq: 0, idx: 0 });
        heap.push(FrontierEntry { f: 3, seq: 1, idx: 1 });
        heap.push(FrontierEntry { f: 3, seq: 2, idx: 2 });
        heap.push(FrontierEntry { f: 4, seq: 3, idx: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.idx)).collect();
        // Smallest f first; equal f pops in insertion order.
        assert_eq!(order, vec![1, 2, 3, 0]);
    }

    #[test]
    fn fit_smaller_preserves_capacity() {
        let mut s = Searcher::new();
        s.fit(20);
        s.generation = 7;
        let cap = s.nodes.len(); // 400

        s.fit(5);
        assert_eq!(s.rows, 5);
        assert_eq!(s.nodes.len(), cap);
        // Generation survives; stale nodes are ignored lazily.
        assert_eq!(s.generation, 7);
    }

    #[test]
    fn fit_larger_reallocates() {
        let mut s = Searcher::new();
        s.fit(5);
        let old = s.nodes.len(); // 25
        s.fit(20);
        assert!(s.nodes.len() > old);
        assert_eq!(s.nodes.len(), 400);
    }

    #[test]
    fn came_from_walks_parents() {
        // 2×2 map: (0,1) <- (0,0), (1,1) <- (0,1); start (0,0) has none.
        let m = CameFrom::new(2, vec![usize::MAX, 0, usize::MAX, 1]);
        assert_eq!(m.get(Cell::new(0, 0)), None);
        assert_eq!(m.get(Cell::new(0, 1)), Some(Cell::new(0, 0)));
        assert_eq!(m.get(Cell::new(1, 1)), Some(Cell::new(0, 1)));
        assert!(!m.contains(Cell::new(1, 0)));
        // Out-of-range queries report absence rather than panic.
        assert_eq!(m.get(Cell::new(2, 0)), None);
        assert_eq!(m.get(Cell::new(-1, 1)), None);
    }
}
