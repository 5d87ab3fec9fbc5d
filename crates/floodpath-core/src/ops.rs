//! State-mutation operations exposed to the input-handling layer.
//!
//! Every operation takes the field and position set explicitly — there is no
//! hidden session-wide state. The boolean returns report whether anything
//! changed: a `true` from [`toggle_wall`], [`move_start`] or [`move_target`]
//! means the caller must run a fresh flood-fill + reconstruction cycle
//! before the next render. [`move_selected`] never requires recomputation.

use crate::field::{Cell, Field};
use crate::geom::{Direction, Point};
use crate::positions::Positions;

/// Flip the cell at `p` between `Wall` and a cleared (`Unvisited`) state.
///
/// Rejected (no-op, returns `false`) when `p` is the start or target cell
/// or lies outside the field.
pub fn toggle_wall(field: &mut Field, positions: &Positions, p: Point) -> bool {
    if p == positions.start || p == positions.target {
        return false;
    }
    match field.at(p) {
        Some(Cell::Wall) => {
            field.set(p, Cell::Unvisited);
            true
        }
        // A stale distance label is overwritten; the next flood fill
        // rebuilds the rest of the field.
        Some(_) => {
            field.set(p, Cell::Wall);
            true
        }
        None => false,
    }
}

/// Reassign the start cell to `p`.
///
/// Rejected when `p` is a wall, equals the target, or is out of bounds.
pub fn move_start(field: &Field, positions: &mut Positions, p: Point) -> bool {
    if !field.contains(p) || field.is_wall(p) || p == positions.target {
        return false;
    }
    positions.start = p;
    true
}

/// Reassign the target cell to `p`.
///
/// Rejected when `p` is a wall, equals the start, or is out of bounds.
pub fn move_target(field: &Field, positions: &mut Positions, p: Point) -> bool {
    if !field.contains(p) || field.is_wall(p) || p == positions.start {
        return false;
    }
    positions.target = p;
    true
}

/// Shift the selection one cell in `dir`, clamped to the field boundary.
///
/// Never rejected and never requires recomputation: at the boundary the
/// selection simply stays put (no wraparound).
pub fn move_selected(field: &Field, positions: &mut Positions, dir: Direction) {
    let moved = positions.selected + dir.delta();
    positions.selected = field.bounds().clamp(moved);
}
