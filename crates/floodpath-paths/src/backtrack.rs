//! Path reconstruction: a greedy strictly-decreasing walk over the distance
//! field, from the target back toward the start.

use floodpath_core::{Cell, Field, Point};

use crate::distance::sqr_euclidean;

/// Rebuild `path` as the walk from a target-adjacent cell down to a
/// start-adjacent cell, exclusive of `target` and `start` themselves.
///
/// From each cell the walk moves to an orthogonal neighbour holding a
/// strictly smaller distance, choosing the candidate closest to `start` by
/// squared Euclidean distance; ties keep the first candidate in scan order
/// (up, left, down, right). When the scan meets `start` itself it stops
/// immediately without recording it, so the path ends one cell short of the
/// start. Any strictly-decreasing neighbour lies on some shortest route, so
/// the tie-break only selects among equal-length alternatives.
///
/// If `target` is unreachable (still `Unvisited` after the flood fill) no
/// neighbour holds a smaller distance and `path` comes out empty — the
/// "no path" signal, not an error.
pub fn reconstruct(field: &Field, start: Point, target: Point, path: &mut Vec<Point>) {
    path.clear();
    let mut curr = target;

    loop {
        // Walls and unvisited cells read as infinite distance: nothing is
        // strictly smaller, so the walk ends here.
        let Some(Cell::Distance(curr_value)) = field.at(curr) else {
            return;
        };

        let mut chosen: Option<(Point, i32)> = None;
        let mut adjacent_to_start = false;

        for n in curr.neighbors_4() {
            let Some(Cell::Distance(d)) = field.at(n) else {
                continue;
            };
            if d >= curr_value {
                continue;
            }
            if n == start {
                adjacent_to_start = true;
                break;
            }
            let dist = sqr_euclidean(n, start);
            match chosen {
                Some((_, best)) if best <= dist => {}
                _ => chosen = Some((n, dist)),
            }
        }

        if adjacent_to_start {
            return;
        }
        match chosen {
            Some((next, _)) => {
                path.push(next);
                curr = next;
            }
            None => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flood::FloodFill;
    use floodpath_core::Cell;

    fn compute(width: i32, height: i32, walls: &[Point], start: Point) -> Field {
        let mut field = Field::new(width, height);
        for &w in walls {
            field.set(w, Cell::Wall);
        }
        FloodFill::new()
            .compute(&mut field, start)
            .expect("flood fill");
        field
    }

    /// Assert the §8 path properties: strictly decreasing distances over
    /// orthogonal steps, first element adjacent to target, last element
    /// adjacent to start, and no walls anywhere in the walk.
    fn assert_well_formed(field: &Field, start: Point, target: Point, path: &[Point]) {
        let mut prev = target;
        let mut prev_d = field.at(target).unwrap().distance().unwrap();
        for &p in path {
            assert!(prev.neighbors_4().contains(&p), "{p} not adjacent to {prev}");
            let d = field.at(p).unwrap().distance().expect("wall in path");
            assert!(d < prev_d, "distance not decreasing at {p}");
            prev = p;
            prev_d = d;
        }
        let last = *path.last().unwrap();
        assert!(last.neighbors_4().contains(&start), "path does not reach start");
        assert!(!path.contains(&start));
        assert!(!path.contains(&target));
    }

    #[test]
    fn open_grid_path_has_expected_length() {
        let start = Point::new(0, 0);
        let target = Point::new(4, 4);
        let field = compute(5, 5, &[], start);
        let mut path = Vec::new();
        reconstruct(&field, start, target, &mut path);

        // 8 hops between the endpoints; the path excludes both, so 7 cells.
        assert_eq!(path.len(), 7);
        assert_well_formed(&field, start, target, &path);
    }

    #[test]
    fn path_routes_through_wall_gap() {
        let start = Point::new(0, 0);
        let target = Point::new(4, 4);
        let walls: Vec<Point> = (0..5)
            .filter(|&y| y != 3)
            .map(|y| Point::new(2, y))
            .collect();
        let field = compute(5, 5, &walls, start);
        let mut path = Vec::new();
        reconstruct(&field, start, target, &mut path);

        assert!(path.contains(&Point::new(2, 3)), "path must pass the gap");
        assert_well_formed(&field, start, target, &path);
    }

    #[test]
    fn enclosed_target_yields_empty_path() {
        let start = Point::new(0, 0);
        let target = Point::new(4, 4);
        let walls = [Point::new(3, 4), Point::new(4, 3)];
        let field = compute(5, 5, &walls, start);
        assert_eq!(field.at(target), Some(Cell::Unvisited));

        let mut path = vec![Point::ZERO]; // stale content must be cleared
        reconstruct(&field, start, target, &mut path);
        assert!(path.is_empty());
    }

    #[test]
    fn adjacent_target_yields_empty_path() {
        // Target right next to start: the very first scan aborts on start.
        let start = Point::new(0, 0);
        let target = Point::new(1, 0);
        let field = compute(3, 3, &[], start);
        let mut path = Vec::new();
        reconstruct(&field, start, target, &mut path);
        assert!(path.is_empty());
    }

    #[test]
    fn tie_break_prefers_first_minimal_in_scan_order() {
        // Open 3x3, start (0,0), target (2,2). The first step ties between
        // up (2,1) and left (1,2) at squared distance 5; scan order keeps
        // up. The second step prefers the diagonal-hugging (1,1) (2 < 4).
        let start = Point::new(0, 0);
        let target = Point::new(2, 2);
        let field = compute(3, 3, &[], start);
        let mut path = Vec::new();
        reconstruct(&field, start, target, &mut path);
        assert_eq!(
            path,
            vec![Point::new(2, 1), Point::new(1, 1), Point::new(1, 0)]
        );
    }

    #[test]
    fn path_is_rebuilt_from_scratch_each_run() {
        let start = Point::new(0, 0);
        let target = Point::new(4, 0);
        let field = compute(5, 1, &[], start);
        let mut path = Vec::new();
        reconstruct(&field, start, target, &mut path);
        let first = path.clone();
        reconstruct(&field, start, target, &mut path);
        assert_eq!(path, first);
        assert_eq!(
            path,
            vec![Point::new(3, 0), Point::new(2, 0), Point::new(1, 0)]
        );
    }
}
