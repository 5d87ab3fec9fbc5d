//! Color palette for the visualizer.
//!
//! Hues follow the original ncurses pairs: green start, red target, blue
//! walls, yellow path, white-backed selection. Distance cells get a shading
//! ramp so the flood-fill field itself is visible.

use floodpath_core::Color;

/// Default terminal background (reset).
pub const BG: Color = Color::DEFAULT;

/// Start cell.
pub const START_FG: Color = Color::from_rgb(80, 200, 80);
/// Target cell.
pub const TARGET_FG: Color = Color::from_rgb(255, 85, 85);
/// Wall cells.
pub const WALL_FG: Color = Color::from_rgb(100, 130, 255);
/// Path cells.
pub const PATH_FG: Color = Color::from_rgb(220, 200, 60);
/// Background of the selected cell.
pub const SELECTED_BG: Color = Color::from_rgb(248, 248, 242);

/// Sidebar text.
pub const TEXT_FG: Color = Color::DEFAULT;
/// Dimmed sidebar text (key help).
pub const TEXT_DIM: Color = Color::from_rgb(98, 100, 106);
/// "No path" notice.
pub const WARN_FG: Color = Color::from_rgb(220, 140, 50);

/// Shade for a distance-labelled cell: near cells bright, far cells fading
/// toward the background. `max` is the largest distance on the field.
pub fn distance_shade(d: i32, max: i32) -> Color {
    let max = max.max(1);
    let t = (d.clamp(0, max) * 100) / max; // 0..=100
    let level = 150 - t as u32;
    Color::from_rgb(level as u8 / 3, level as u8 / 3, level as u8)
}
