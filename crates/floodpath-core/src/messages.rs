//! Input events and the command vocabulary of the visualizer.

use crate::geom::Direction;

/// A keyboard key, reduced to the subset the visualizer consumes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    /// A printable character.
    Char(char),
}

/// A discrete command event, carrying no payload beyond its identity
/// (the affected coordinate is always the current selection).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Move the selection cursor one cell.
    Move(Direction),
    /// Make the selected cell the new start.
    PlaceStart,
    /// Make the selected cell the new target.
    PlaceTarget,
    /// Toggle a wall on the selected cell.
    ToggleWall,
    /// Leave the session.
    Quit,
}
