//! Walking a predecessor map back into an ordered path.

use wayfind_grid::Cell;

use crate::astar::SearchError;
use crate::searcher::CameFrom;

/// Reconstruct the ordered path ending at `end` from a predecessor map.
///
/// Walks `end → came_from[end] → …` until the cell with no predecessor (the
/// start) and returns the full path from start to end, both inclusive.
///
/// Fails with [`SearchError::NoPath`] if `end` has no entry in the map,
/// which is the case after an exhausted run or for any cell the search
/// never reached; reconstruction is only meaningful after a
/// [`Found`](crate::SearchOutcome::Found) result.
pub fn reconstruct(came_from: &CameFrom, end: Cell) -> Result<Vec<Cell>, SearchError> {
    if !came_from.contains(end) {
        return Err(SearchError::NoPath);
    }
    let mut path = vec![end];
    let mut current = end;
    while let Some(prev) = came_from.get(current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SearchOutcome, Searcher};
    use wayfind_grid::{CellKind, Grid};

    fn found_map(grid: &Grid, start: Cell, end: Cell) -> CameFrom {
        match Searcher::new().search(grid, start, end, || {}).unwrap() {
            SearchOutcome::Found(map) => map,
            SearchOutcome::Exhausted => panic!("expected a path"),
        }
    }

    #[test]
    fn path_includes_both_endpoints() {
        let g = Grid::new(2, 200).unwrap();
        let map = found_map(&g, Cell::new(0, 0), Cell::new(1, 1));
        let path = reconstruct(&map, Cell::new(1, 1)).unwrap();
        assert_eq!(path, vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn unreached_cell_has_no_path() {
        // Row 1 walls off row 2; the search toward (0,2) succeeds but the
        // far component never enters the predecessor map.
        let mut g = Grid::new(3, 300).unwrap();
        for col in 0..3 {
            g.set_kind(Cell::new(1, col), CellKind::Barrier).unwrap();
        }
        let map = found_map(&g, Cell::new(0, 0), Cell::new(0, 2));
        assert_eq!(reconstruct(&map, Cell::new(2, 0)), Err(SearchError::NoPath));
        // Barrier cells and out-of-range cells are equally absent.
        assert_eq!(reconstruct(&map, Cell::new(1, 1)), Err(SearchError::NoPath));
        assert_eq!(reconstruct(&map, Cell::new(9, 9)), Err(SearchError::NoPath));
    }

    #[test]
    fn start_cell_itself_has_no_entry() {
        let g = Grid::new(3, 300).unwrap();
        let start = Cell::new(0, 0);
        let map = found_map(&g, start, Cell::new(2, 2));
        // The start is the walk's terminal, not a key of the map.
        assert_eq!(reconstruct(&map, start), Err(SearchError::NoPath));
    }
}
