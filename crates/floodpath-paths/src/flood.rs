//! Breadth-first flood fill: labels every reachable cell with its hop
//! distance from the start cell.

use std::collections::{TryReserveError, VecDeque};

use floodpath_core::{Cell, Field, Point};

/// The flood-fill engine.
///
/// Owns a reusable worklist so repeated recomputations allocate at most
/// once; the worklist is bounded by the cell count of the field (every cell
/// is enqueued at most once).
#[derive(Debug, Default)]
pub struct FloodFill {
    queue: VecDeque<Point>,
}

impl FloodFill {
    /// Create a new engine with an empty worklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite `field` in place so that every cell reachable from `start`
    /// holds its 1-based hop distance (`start` itself holds `Distance(1)`).
    ///
    /// Walls are left untouched and act as blockers; cells isolated from
    /// `start` retain `Unvisited`, which downstream logic reads as an
    /// infinite distance. Diagonal neighbours are never considered.
    ///
    /// On worklist allocation failure the field is not touched at all: the
    /// caller keeps the previous (possibly stale) distance labels and may
    /// retry on the next cycle.
    ///
    /// Precondition, enforced by the input layer: `start` is inside the
    /// field and is not a wall.
    pub fn compute(&mut self, field: &mut Field, start: Point) -> Result<(), TryReserveError> {
        debug_assert!(field.contains(start), "start out of bounds: {start}");
        debug_assert!(!field.is_wall(start), "start on a wall: {start}");

        // Secure worklist capacity before resetting anything, so a failed
        // allocation cannot leave the field half-cleared.
        self.queue.clear();
        self.queue.try_reserve(field.bounds().len())?;

        field.reset_distances();
        field.set(start, Cell::Distance(1));
        self.queue.push_back(start);

        while let Some(curr) = self.queue.pop_front() {
            let Some(Cell::Distance(d)) = field.at(curr) else {
                continue;
            };
            for n in curr.neighbors_4() {
                // Out-of-bounds reads `None`; walls and already-labelled
                // cells fail the match. The unvisited check is what
                // guarantees each cell enters the queue at most once.
                if field.at(n) == Some(Cell::Unvisited) {
                    field.set(n, Cell::Distance(d + 1));
                    self.queue.push_back(n);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;

    fn filled(width: i32, height: i32, walls: &[Point], start: Point) -> Field {
        let mut field = Field::new(width, height);
        for &w in walls {
            field.set(w, Cell::Wall);
        }
        FloodFill::new()
            .compute(&mut field, start)
            .expect("flood fill");
        field
    }

    #[test]
    fn open_grid_distances_are_manhattan_plus_one() {
        let start = Point::new(0, 0);
        let field = filled(5, 5, &[], start);
        for (p, cell) in field.iter() {
            assert_eq!(cell, Cell::Distance(manhattan(start, p) + 1), "at {p}");
        }
        // The §8 scenario: target (4,4) holds 9.
        assert_eq!(field.at(Point::new(4, 4)), Some(Cell::Distance(9)));
    }

    #[test]
    fn start_cell_holds_one() {
        let field = filled(3, 3, &[], Point::new(1, 1));
        assert_eq!(field.at(Point::new(1, 1)), Some(Cell::Distance(1)));
    }

    #[test]
    fn walls_never_receive_a_distance() {
        let walls = [Point::new(1, 0), Point::new(1, 1), Point::new(2, 2)];
        let field = filled(4, 4, &walls, Point::new(0, 0));
        for w in walls {
            assert_eq!(field.at(w), Some(Cell::Wall));
        }
    }

    #[test]
    fn distances_route_around_walls() {
        // Wall column at x=2 with a single gap at y=3: every route to the
        // right half funnels through (2, 3).
        let walls: Vec<Point> = (0..5)
            .filter(|&y| y != 3)
            .map(|y| Point::new(2, y))
            .collect();
        let field = filled(5, 5, &walls, Point::new(0, 0));

        // Straight-line distance to (4,0) would be 5; through the gap it is
        // start(1) + 4 hops down/over to the gap + hops back up.
        assert_eq!(field.at(Point::new(2, 3)), Some(Cell::Distance(6)));
        assert_eq!(field.at(Point::new(4, 0)), Some(Cell::Distance(11)));
        assert_eq!(field.at(Point::new(4, 4)), Some(Cell::Distance(9)));
    }

    #[test]
    fn enclosed_region_stays_unvisited() {
        // Box in the corner cell (4,4) with walls at (3,4) and (4,3).
        let walls = [Point::new(3, 4), Point::new(4, 3)];
        let field = filled(5, 5, &walls, Point::new(0, 0));
        assert_eq!(field.at(Point::new(4, 4)), Some(Cell::Unvisited));
        // Everything outside the box is still labelled.
        assert_eq!(field.at(Point::new(4, 2)), Some(Cell::Distance(7)));
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut field = Field::new(6, 4);
        field.set(Point::new(3, 1), Cell::Wall);
        field.set(Point::new(3, 2), Cell::Wall);
        let mut flood = FloodFill::new();
        let start = Point::new(1, 1);

        flood.compute(&mut field, start).unwrap();
        let first = field.clone();
        flood.compute(&mut field, start).unwrap();
        assert_eq!(field, first);
    }

    #[test]
    fn engine_is_reusable_across_fields() {
        let mut flood = FloodFill::new();
        let mut small = Field::new(2, 2);
        let mut large = Field::new(10, 10);
        flood.compute(&mut small, Point::ZERO).unwrap();
        flood.compute(&mut large, Point::ZERO).unwrap();
        assert_eq!(large.at(Point::new(9, 9)), Some(Cell::Distance(19)));
        assert_eq!(small.at(Point::new(1, 1)), Some(Cell::Distance(3)));
    }

    #[test]
    fn stale_labels_from_removed_walls_are_cleared() {
        let mut field = Field::new(3, 1);
        let mut flood = FloodFill::new();
        field.set(Point::new(1, 0), Cell::Wall);
        flood.compute(&mut field, Point::ZERO).unwrap();
        assert_eq!(field.at(Point::new(2, 0)), Some(Cell::Unvisited));

        field.set(Point::new(1, 0), Cell::Unvisited);
        flood.compute(&mut field, Point::ZERO).unwrap();
        assert_eq!(field.at(Point::new(2, 0)), Some(Cell::Distance(3)));
    }
}
