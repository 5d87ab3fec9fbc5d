//! Crossterm terminal back end for the floodpath visualizer.
//!
//! [`Terminal`] owns the raw-mode / alternate-screen lifecycle, performs one
//! blocking input read per call to [`Terminal::read_key`], and writes styled
//! cells and text. The interaction model is strictly synchronous: no
//! polling threads, no channels — the caller drives a read → update → draw
//! loop.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color as CtColor, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use floodpath_core::{Color, Key, Point, Style};

/// Maps a [`floodpath_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        let (r, g, b) = (c.r(), c.g(), c.b());
        CtColor::Rgb { r, g, b }
    }
}

/// Maps a crossterm key event to a [`floodpath_core::Key`].
///
/// Release and repeat events (delivered on Windows and by terminals
/// speaking the kitty keyboard protocol) are dropped, so one keystroke
/// yields exactly one command.
fn to_key_event(ev: &KeyEvent) -> Option<Key> {
    if ev.kind != KeyEventKind::Press {
        return None;
    }
    to_key(ev.code)
}

/// Maps a crossterm [`KeyCode`] to a [`floodpath_core::Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

/// A synchronous crossterm-backed terminal.
#[derive(Debug, Default)]
pub struct Terminal {
    raw: bool,
}

impl Terminal {
    /// Create a new, uninitialised terminal handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter raw mode and the alternate screen, hide the cursor and clear.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )
    }

    /// Block until the next input event; map key presses to [`Key`].
    ///
    /// Non-key events (mouse, resize, focus), key releases/repeats and
    /// unmapped keys yield `Ok(None)` — the caller simply reads again.
    pub fn read_key(&mut self) -> io::Result<Option<Key>> {
        match event::read()? {
            Event::Key(ev) => Ok(to_key_event(&ev)),
            _ => Ok(None),
        }
    }

    /// Erase the whole screen (queued; takes effect on [`flush`](Self::flush)).
    pub fn clear(&mut self) -> io::Result<()> {
        queue!(io::stdout(), terminal::Clear(ClearType::All))
    }

    /// Queue a single styled character at `p`.
    pub fn put(&mut self, p: Point, ch: char, style: Style) -> io::Result<()> {
        queue!(
            io::stdout(),
            cursor::MoveTo(p.x as u16, p.y as u16),
            SetForegroundColor(to_ct_color(style.fg)),
            SetBackgroundColor(to_ct_color(style.bg)),
            Print(ch)
        )
    }

    /// Queue a styled string starting at `p`.
    pub fn print(&mut self, p: Point, text: &str, style: Style) -> io::Result<()> {
        queue!(
            io::stdout(),
            cursor::MoveTo(p.x as u16, p.y as u16),
            SetForegroundColor(to_ct_color(style.fg)),
            SetBackgroundColor(to_ct_color(style.bg)),
            Print(text)
        )
    }

    /// Commit everything queued since the last flush.
    pub fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }

    /// Restore the terminal. Best-effort: also safe to call after errors.
    pub fn close(&mut self) {
        if !self.raw {
            return;
        }
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        self.raw = false;
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.close();
    }
}
