//! **wayfind-search** — A* shortest-path search over a wayfind grid.
//!
//! The engine computes a minimum-length 4-directionally-connected path
//! between a start and an end cell, treating barrier cells as impassable:
//!
//! - [`Searcher::search`] runs A* with the Manhattan heuristic and reports
//!   [`SearchOutcome::Found`] with a predecessor map, or
//!   [`SearchOutcome::Exhausted`] when the frontier empties first.
//! - [`reconstruct`] walks a [`CameFrom`] map back from the end cell into
//!   the ordered path.
//!
//! [`Searcher`] owns and reuses its internal buffers, so repeated runs incur
//! no allocations after warm-up. A caller-supplied `on_step` hook fires once
//! per expansion so a visualization layer can observe progress; the engine
//! is equally correct with a no-op hook.

mod astar;
mod path;
mod searcher;

pub use astar::{SearchError, SearchOutcome};
pub use path::reconstruct;
pub use searcher::{CameFrom, Searcher};
