//! Session state and the key → command dispatch.

use floodpath_core::{Command, Direction, Field, Key, Point, Positions, ops};
use floodpath_paths::{FloodFill, reconstruct};

/// Map a key to its command, or `None` for unbound keys.
///
/// Arrows / `hjkl` move the selection; `a` places the start, `s` the
/// target, `d` toggles a wall; `q` or Escape quits.
pub fn map_key(key: &Key) -> Option<Command> {
    match key {
        Key::ArrowUp | Key::Char('k') => Some(Command::Move(Direction::Up)),
        Key::ArrowLeft | Key::Char('h') => Some(Command::Move(Direction::Left)),
        Key::ArrowDown | Key::Char('j') => Some(Command::Move(Direction::Down)),
        Key::ArrowRight | Key::Char('l') => Some(Command::Move(Direction::Right)),
        Key::Char('a') => Some(Command::PlaceStart),
        Key::Char('s') => Some(Command::PlaceTarget),
        Key::Char('d') => Some(Command::ToggleWall),
        Key::Char('q') | Key::Escape => Some(Command::Quit),
        _ => None,
    }
}

/// One visualizer session: the field, the named positions, the flood-fill
/// engine and a dirty flag driving the recompute cycle.
///
/// Mutations and recomputation are strictly sequential: [`Session::apply`]
/// runs between renders, and [`Session::refresh`] runs the flood-fill +
/// reconstruction cycle at most once before the next draw.
pub struct Session {
    field: Field,
    positions: Positions,
    flood: FloodFill,
    dirty: bool,
}

impl Session {
    /// Create a session over a fresh `width` × `height` field, with the
    /// start in the top-left corner, the target in the bottom-right and the
    /// selection in the middle.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            field: Field::new(width, height),
            positions: Positions::new(
                Point::ZERO,
                Point::new(width - 1, height - 1),
                Point::new(width / 2, height / 2),
            ),
            flood: FloodFill::new(),
            dirty: true,
        }
    }

    /// Read-only view of the field for rendering.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Read-only view of the positions and path for rendering.
    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    /// Dispatch one command. Sets the dirty flag only when a mutation
    /// actually changed the distance-relevant state; selection moves and
    /// rejected mutations never trigger recomputation.
    pub fn apply(&mut self, cmd: Command) {
        let sel = self.positions.selected;
        let modified = match cmd {
            Command::Move(dir) => {
                ops::move_selected(&self.field, &mut self.positions, dir);
                false
            }
            Command::PlaceStart => ops::move_start(&self.field, &mut self.positions, sel),
            Command::PlaceTarget => ops::move_target(&self.field, &mut self.positions, sel),
            Command::ToggleWall => ops::toggle_wall(&mut self.field, &self.positions, sel),
            // Quit is handled by the event loop before dispatch.
            Command::Quit => false,
        };
        self.dirty = self.dirty || modified;
    }

    /// Run the flood-fill + reconstruction cycle if anything changed since
    /// the last call.
    ///
    /// A failed worklist allocation skips the cycle: the stale field and
    /// path stay on screen and the dirty flag stays set, so the next input
    /// event retries.
    pub fn refresh(&mut self) {
        if !self.dirty {
            return;
        }
        match self.flood.compute(&mut self.field, self.positions.start) {
            Ok(()) => {
                reconstruct(
                    &self.field,
                    self.positions.start,
                    self.positions.target,
                    &mut self.positions.path,
                );
                self.dirty = false;
                log::debug!(
                    "recomputed: start={} target={} path_len={}",
                    self.positions.start,
                    self.positions.target,
                    self.positions.path.len()
                );
            }
            Err(err) => {
                log::warn!("recomputation skipped, worklist allocation failed: {err}");
            }
        }
    }
}
