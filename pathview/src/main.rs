//! pathview — interactive grid-pathfinding visualizer.
//!
//! Move the selection over a 40×20 field, toggle walls and relocate the
//! start and target; the flood-fill distance field and the reconstructed
//! path are recomputed and redrawn after every change.

mod colors;
mod draw;
mod session;

use std::error::Error;

use floodpath_core::Command;
use floodpath_crossterm::Terminal;

use session::{Session, map_key};

const FIELD_WIDTH: i32 = 40;
const FIELD_HEIGHT: i32 = 20;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut term = Terminal::new();
    term.init()?;
    let result = run(&mut term);
    // Restore the terminal on the error path too.
    term.close();
    result
}

fn run(term: &mut Terminal) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new(FIELD_WIDTH, FIELD_HEIGHT);

    loop {
        session.refresh();
        draw::draw(term, &session)?;

        // One blocking read per iteration; unmapped events redraw and wait.
        let Some(key) = term.read_key()? else {
            continue;
        };
        match map_key(&key) {
            Some(Command::Quit) => return Ok(()),
            Some(cmd) => session.apply(cmd),
            None => {}
        }
    }
}
