//! **wayfind-grid** — the cell grid underlying grid-based shortest-path search.
//!
//! This crate provides the graph side of the wayfind workspace: integer cell
//! coordinates ([`Cell`]), per-cell role tags ([`CellKind`]), and the square
//! [`Grid`] that derives 4-directional adjacency from barrier placement.
//!
//! Display concerns (colors, pixel mapping, input handling) live entirely in
//! the caller; the grid only stores the pixel width it was created with and
//! never interprets it.

pub mod cell;
pub mod distance;
pub mod grid;

pub use cell::{Cell, CellKind};
pub use distance::manhattan;
pub use grid::{Grid, GridError};
