use crate::cell::Cell;

/// Manhattan (L1) distance between two cells.
///
/// This is the heuristic used by the search engine; on a 4-connected grid
/// with unit edge costs it never overestimates the true distance.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_basics() {
        assert_eq!(manhattan(Cell::new(0, 0), Cell::new(0, 0)), 0);
        assert_eq!(manhattan(Cell::new(0, 0), Cell::new(4, 4)), 8);
        assert_eq!(manhattan(Cell::new(2, 5), Cell::new(5, 1)), 7);
        // Symmetric.
        assert_eq!(
            manhattan(Cell::new(1, 7), Cell::new(3, 2)),
            manhattan(Cell::new(3, 2), Cell::new(1, 7)),
        );
    }
}
