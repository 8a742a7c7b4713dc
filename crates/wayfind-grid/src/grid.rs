//! The [`Grid`] type — a square grid of cell kinds with derived adjacency.

use std::fmt;

use crate::cell::{Cell, CellKind};

/// Errors from grid construction and cell addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Grid construction with a non-positive row count.
    InvalidDimension(i32),
    /// A coordinate outside the grid bounds.
    OutOfRange(Cell),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension(rows) => {
                write!(f, "grid dimension must be positive, got {rows}")
            }
            Self::OutOfRange(cell) => write!(f, "cell {cell} is outside the grid"),
        }
    }
}

impl std::error::Error for GridError {}

/// A `rows × rows` grid of [`CellKind`]s.
///
/// The grid owns the search-relevant state only: which role each cell plays.
/// Adjacency is derived from the current barrier layout on every query, so
/// there is no cached neighbor state that could go stale between barrier
/// edits and a search run.
///
/// `width` is the pixel width the presentation layer created the grid with;
/// it is stored for that layer's convenience and never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: i32,
    width: i32,
    kinds: Vec<CellKind>,
}

impl Grid {
    /// Create a new grid of `rows × rows` empty cells.
    ///
    /// Fails with [`GridError::InvalidDimension`] if `rows` is not positive.
    pub fn new(rows: i32, width: i32) -> Result<Self, GridError> {
        if rows <= 0 {
            return Err(GridError::InvalidDimension(rows));
        }
        Ok(Self {
            rows,
            width,
            kinds: vec![CellKind::Empty; (rows as usize) * (rows as usize)],
        })
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// The pixel width supplied at construction.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Whether `cell` is inside the grid bounds.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.rows
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        (cell.row as usize) * (self.rows as usize) + cell.col as usize
    }

    /// The kind of the cell at `cell`, or `None` if out of bounds.
    pub fn kind(&self, cell: Cell) -> Option<CellKind> {
        if !self.contains(cell) {
            return None;
        }
        Some(self.kinds[self.index(cell)])
    }

    /// The cell currently tagged `kind`, if any.
    ///
    /// Meaningful for [`CellKind::Start`] and [`CellKind::End`], which the
    /// grid keeps unique; for other kinds it returns the first match in
    /// row-major order.
    pub fn find(&self, kind: CellKind) -> Option<Cell> {
        let rows = self.rows as usize;
        self.kinds.iter().position(|&k| k == kind).map(|i| Cell {
            row: (i / rows) as i32,
            col: (i % rows) as i32,
        })
    }

    /// Set the kind of the cell at `cell`.
    ///
    /// Assigning [`CellKind::Start`] or [`CellKind::End`] first clears any
    /// prior holder of that kind, so at most one of each ever exists
    /// (selecting a new cell moves the marker). Fails with
    /// [`GridError::OutOfRange`] on bad coordinates.
    pub fn set_kind(&mut self, cell: Cell, kind: CellKind) -> Result<(), GridError> {
        if !self.contains(cell) {
            return Err(GridError::OutOfRange(cell));
        }
        if matches!(kind, CellKind::Start | CellKind::End) {
            if let Some(prev) = self.find(kind) {
                let i = self.index(prev);
                self.kinds[i] = CellKind::Empty;
            }
        }
        let i = self.index(cell);
        self.kinds[i] = kind;
        Ok(())
    }

    /// Reset the cell at `cell` to [`CellKind::Empty`].
    ///
    /// The grid does not track which cell is the "current" start or end;
    /// callers that do must drop their reference when clearing it.
    pub fn clear(&mut self, cell: Cell) -> Result<(), GridError> {
        self.set_kind(cell, CellKind::Empty)
    }

    /// Reset every cell to [`CellKind::Empty`].
    pub fn clear_all(&mut self) {
        self.kinds.fill(CellKind::Empty);
    }

    /// Append the up-to-4 in-bounds non-barrier neighbors of `cell` to
    /// `buf`, in down/up/left/right order. The caller clears `buf`.
    ///
    /// This is the allocation-free form used by the search engine's inner
    /// loop.
    pub fn neighbors_into(&self, cell: Cell, buf: &mut Vec<Cell>) {
        for n in cell.neighbors_4() {
            if self.contains(n) && !self.kinds[self.index(n)].is_barrier() {
                buf.push(n);
            }
        }
    }

    /// The up-to-4 in-bounds non-barrier neighbors of `cell`, in
    /// down/up/left/right order.
    ///
    /// Recomputed from the current barrier layout on every call, so two
    /// calls without an intervening barrier edit always agree. Fails with
    /// [`GridError::OutOfRange`] if `cell` itself is out of bounds.
    pub fn neighbors_of(&self, cell: Cell) -> Result<Vec<Cell>, GridError> {
        if !self.contains(cell) {
            return Err(GridError::OutOfRange(cell));
        }
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(cell, &mut buf);
        Ok(buf)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(3, 300).unwrap();
        g.set_kind(Cell::new(0, 0), CellKind::Start).unwrap();
        g.set_kind(Cell::new(2, 2), CellKind::End).unwrap();
        g.set_kind(Cell::new(1, 1), CellKind::Barrier).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
