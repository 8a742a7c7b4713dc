use std::fmt;

use log::debug;

use wayfind_grid::{Cell, CellKind, Grid, manhattan};

use crate::searcher::{CameFrom, Searcher};

/// Errors from search invocation and path reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The query is degenerate: start or end missing from the grid, equal
    /// to each other, or placed on a barrier.
    InvalidQuery(String),
    /// Reconstruction was attempted for a cell the search never reached.
    NoPath,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQuery(reason) => write!(f, "invalid search query: {reason}"),
            Self::NoPath => write!(f, "no path: the end cell was never reached"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Terminal state of a search run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// The end cell was popped from the frontier; the predecessor map
    /// describes an optimal path.
    Found(CameFrom),
    /// The frontier emptied without reaching the end cell.
    Exhausted,
}

impl SearchOutcome {
    /// Whether the run reached the end cell.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl Searcher {
    /// Compute the shortest path from `start` to `end` over `grid` using A*
    /// with the Manhattan heuristic and unit edge costs.
    ///
    /// `on_step` fires once per expansion, after the expanded cell's
    /// neighbors have been relaxed; a visualization layer hooks its redraw
    /// here. The pop that terminates the run with [`SearchOutcome::Found`]
    /// does not count as an expansion.
    ///
    /// The engine re-validates the query even when the caller already has:
    /// out-of-bounds endpoints, `start == end`, or an endpoint on a barrier
    /// fail with [`SearchError::InvalidQuery`].
    pub fn search<F: FnMut()>(
        &mut self,
        grid: &Grid,
        start: Cell,
        end: Cell,
        mut on_step: F,
    ) -> Result<SearchOutcome, SearchError> {
        validate(grid, start, end)?;

        let rows = grid.rows() as usize;
        self.fit(rows);

        // Bump generation to lazily invalidate all nodes from prior runs.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;
        self.frontier.clear();
        self.seq = 0;

        let start_idx = self.idx(start);
        let goal_idx = self.idx(end);

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = manhattan(start, end);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }
        self.push(self.nodes[start_idx].f, start_idx);

        debug!("search {start} -> {end} over {rows} rows");

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expansions = 0u64;

        let found = 'search: loop {
            let Some(entry) = self.frontier.pop() else {
                break 'search false;
            };
            let ci = entry.idx;
            // The popped cell leaves the frontier set exactly once; each
            // membership cycle has exactly one live heap entry.
            self.nodes[ci].open = false;

            if ci == goal_idx {
                break 'search true;
            }

            let current = self.cell(ci);
            let current_g = self.nodes[ci].g;

            nbuf.clear();
            grid.neighbors_into(current, &mut nbuf);

            for &nc in nbuf.iter() {
                let ni = self.idx(nc);
                let tentative_g = current_g + 1;

                let node = &mut self.nodes[ni];
                if node.generation == cur_gen {
                    // Relaxation gate: only a strict improvement updates
                    // scores. This alone prevents re-expansion; there is no
                    // closed-set check.
                    if tentative_g >= node.g {
                        continue;
                    }
                } else {
                    node.generation = cur_gen;
                    node.open = false;
                }

                node.g = tentative_g;
                node.f = tentative_g + manhattan(nc, end);
                node.parent = ci;

                // A cell improved while already on the frontier keeps its
                // existing entry; it re-enters the heap only after a pop.
                if !node.open {
                    node.open = true;
                    let f = node.f;
                    self.push(f, ni);
                }
            }

            expansions += 1;
            on_step();
        };

        self.nbuf = nbuf;

        if !found {
            debug!("search exhausted after {expansions} expansions");
            return Ok(SearchOutcome::Exhausted);
        }
        debug!("search found {end} after {expansions} expansions");

        // Snapshot the predecessors of the current generation into a map
        // that outlives this searcher's buffers.
        let len = rows * rows;
        let mut parent = vec![usize::MAX; len];
        for (i, node) in self.nodes.iter().take(len).enumerate() {
            if node.generation == cur_gen {
                parent[i] = node.parent;
            }
        }
        Ok(SearchOutcome::Found(CameFrom::new(rows, parent)))
    }
}

fn validate(grid: &Grid, start: Cell, end: Cell) -> Result<(), SearchError> {
    if !grid.contains(start) {
        return Err(SearchError::InvalidQuery(format!(
            "start {start} is outside the grid"
        )));
    }
    if !grid.contains(end) {
        return Err(SearchError::InvalidQuery(format!(
            "end {end} is outside the grid"
        )));
    }
    if start == end {
        return Err(SearchError::InvalidQuery(format!(
            "start and end are the same cell {start}"
        )));
    }
    if grid.kind(start) == Some(CellKind::Barrier) {
        return Err(SearchError::InvalidQuery(format!(
            "start {start} is a barrier"
        )));
    }
    if grid.kind(end) == Some(CellKind::Barrier) {
        return Err(SearchError::InvalidQuery(format!("end {end} is a barrier")));
    }
    Ok(())
}
