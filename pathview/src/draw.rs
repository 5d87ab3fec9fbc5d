//! Rendering: field cells, selection highlight and the status sidebar.

use std::io;

use floodpath_core::{Cell, Point, Style};
use floodpath_crossterm::Terminal;

use crate::colors;
use crate::session::Session;

/// Character and foreground for one cell, before the selection highlight.
fn cell_appearance(session: &Session, p: Point, cell: Cell, max_dist: i32) -> (char, Style) {
    let pos = session.positions();
    if p == pos.start {
        return ('S', Style::new(colors::START_FG, colors::BG));
    }
    if p == pos.target {
        return ('T', Style::new(colors::TARGET_FG, colors::BG));
    }
    if pos.path.contains(&p) {
        return ('*', Style::new(colors::PATH_FG, colors::BG));
    }
    match cell {
        Cell::Wall => ('#', Style::new(colors::WALL_FG, colors::BG)),
        Cell::Distance(d) => ('·', Style::new(colors::distance_shade(d, max_dist), colors::BG)),
        Cell::Unvisited => (' ', Style::new(colors::TEXT_DIM, colors::BG)),
    }
}

/// Redraw the whole frame: every field cell plus the sidebar.
pub fn draw(term: &mut Terminal, session: &Session) -> io::Result<()> {
    term.clear()?;

    let field = session.field();
    let pos = session.positions();
    let max_dist = field
        .iter()
        .filter_map(|(_, c)| c.distance())
        .max()
        .unwrap_or(1);

    for (p, cell) in field.iter() {
        let (ch, mut style) = cell_appearance(session, p, cell, max_dist);
        if p == pos.selected {
            style = style.with_bg(colors::SELECTED_BG);
        }
        term.put(p, ch, style)?;
    }

    draw_sidebar(term, session)?;
    term.flush()
}

fn draw_sidebar(term: &mut Terminal, session: &Session) -> io::Result<()> {
    let x = session.field().width() + 4;
    let pos = session.positions();
    let text = Style::new(colors::TEXT_FG, colors::BG);
    let dim = Style::new(colors::TEXT_DIM, colors::BG);

    term.print(Point::new(x, 2), "Positions:", text)?;
    term.print(
        Point::new(x, 3),
        &format!("  start    = ({:2}; {:2})", pos.start.x, pos.start.y),
        text,
    )?;
    term.print(
        Point::new(x, 4),
        &format!("  target   = ({:2}; {:2})", pos.target.x, pos.target.y),
        text,
    )?;
    term.print(
        Point::new(x, 5),
        &format!("  selected = ({:2}; {:2})", pos.selected.x, pos.selected.y),
        text,
    )?;

    // Unreachable target: the documented no-path state, worth a notice.
    if session.field().at(pos.target) == Some(Cell::Unvisited) {
        term.print(
            Point::new(x, 7),
            "no path to target",
            Style::new(colors::WARN_FG, colors::BG),
        )?;
    }

    term.print(Point::new(x, 9), "arrows/hjkl  move selection", dim)?;
    term.print(Point::new(x, 10), "a            place start", dim)?;
    term.print(Point::new(x, 11), "s            place target", dim)?;
    term.print(Point::new(x, 12), "d            toggle wall", dim)?;
    term.print(Point::new(x, 13), "q / esc      quit", dim)?;
    Ok(())
}
