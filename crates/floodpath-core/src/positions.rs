//! The [`Positions`] set: start, target and selection coordinates plus the
//! reconstructed path.

use crate::geom::Point;

/// The named coordinates of a session and the current path.
///
/// All three coordinates always lie within the field boundary. `path` holds
/// the reconstructed walk from a target-adjacent cell down to a
/// start-adjacent cell — exclusive of target and start themselves — and is
/// rebuilt from empty on every recomputation, never partially updated.
///
/// `start != target` is a precondition maintained by the input-handling
/// layer (it refuses moves that would violate it), not enforced here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Positions {
    pub start: Point,
    pub target: Point,
    pub selected: Point,
    pub path: Vec<Point>,
}

impl Positions {
    /// Create a position set with an empty path.
    pub fn new(start: Point, target: Point, selected: Point) -> Self {
        Self {
            start,
            target,
            selected,
            path: Vec::new(),
        }
    }
}
