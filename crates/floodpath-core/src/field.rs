//! The pathfinding field: [`Cell`] values and the [`Field`] grid.

use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// The state of a single field cell.
///
/// A cell is either a wall, not yet reached by the flood fill, or labelled
/// with its 1-based hop distance from the start cell (the start cell itself
/// holds `Distance(1)`). Walls never carry a distance; downstream logic
/// treats `Unvisited` as an infinite distance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Unvisited,
    Wall,
    Distance(i32),
}

impl Cell {
    /// Whether this cell is a wall.
    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, Cell::Wall)
    }

    /// The hop distance, if the flood fill reached this cell.
    #[inline]
    pub const fn distance(self) -> Option<i32> {
        match self {
            Cell::Distance(d) => Some(d),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// A fixed-size rectangular grid of [`Cell`]s.
///
/// Created once per session with every cell `Unvisited`; wall cells are
/// toggled by user action and distance cells are fully rewritten on every
/// flood-fill run. The field is plain owned storage passed by reference —
/// dimensions never change after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Field {
    /// Create a new field of the given dimensions (both must be > 0),
    /// filled with `Cell::Unvisited`.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "field dimensions must be positive");
        Self {
            cells: vec![Cell::default(); (width * height) as usize],
            bounds: Range::new(0, 0, width, height),
        }
    }

    /// The bounding range of the field.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width of the field.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the field.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the field boundary.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.bounds.width() + p.x) as usize
    }

    /// The cell at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Set the cell at `p`. No-op if `p` is out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, cell: Cell) {
        if !self.bounds.contains(p) {
            return;
        }
        let i = self.index(p);
        self.cells[i] = cell;
    }

    /// Whether the cell at `p` is a wall. Out-of-bounds points are not walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        matches!(self.at(p), Some(Cell::Wall))
    }

    /// Rewrite every non-wall cell to `Unvisited`, leaving walls untouched.
    ///
    /// Run before each flood fill so stale distances never survive a wall or
    /// start-point change.
    pub fn reset_distances(&mut self) {
        for cell in &mut self.cells {
            if !cell.is_wall() {
                *cell = Cell::Unvisited;
            }
        }
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().map(|p| (p, self.cells[self.index(p)]))
    }
}
