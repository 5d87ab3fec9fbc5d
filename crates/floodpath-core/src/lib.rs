//! **floodpath-core** — data model for the grid pathfinding visualizer.
//!
//! This crate holds the plain state the rest of the workspace operates on:
//! geometry primitives, the pathfinding [`Field`] with its three-state
//! [`Cell`]s, the named [`Positions`] (start / target / selection + path),
//! the state-mutation operations the input layer dispatches to, and the
//! small styling types the renderer consumes.
//!
//! The algorithms that fill the field live in `floodpath-paths`; terminal
//! I/O lives in `floodpath-crossterm`.

pub mod field;
pub mod geom;
pub mod messages;
pub mod ops;
pub mod positions;
pub mod style;

pub use field::{Cell, Field};
pub use geom::{Direction, Point, Range};
pub use messages::{Command, Key};
pub use positions::Positions;
pub use style::{Color, Style};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn cell_round_trip() {
        for cell in [Cell::Unvisited, Cell::Wall, Cell::Distance(12)] {
            let json = serde_json::to_string(&cell).unwrap();
            let back: Cell = serde_json::from_str(&json).unwrap();
            assert_eq!(cell, back);
        }
    }

    #[test]
    fn positions_round_trip() {
        let mut pos = Positions::new(Point::ZERO, Point::new(4, 4), Point::new(2, 2));
        pos.path = vec![Point::new(3, 4), Point::new(2, 4)];
        let json = serde_json::to_string(&pos).unwrap();
        let back: Positions = serde_json::from_str(&json).unwrap();
        assert_eq!(pos, back);
    }
}
