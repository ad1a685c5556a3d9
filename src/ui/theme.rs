//! Theme constants for the Reversi GUI

use egui::Color32;

// Board colors - classic felt green
pub const BOARD_BG: Color32 = Color32::from_rgb(34, 120, 60);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(20, 70, 36);
pub const GRID_LINE: Color32 = Color32::from_rgb(15, 55, 28);
pub const LABEL: Color32 = Color32::from_rgb(200, 230, 205);

// Disk colors
pub const DARK_DISK: Color32 = Color32::from_rgb(25, 25, 30);
pub const DARK_DISK_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const LIGHT_DISK: Color32 = Color32::from_rgb(245, 245, 240);
pub const LIGHT_DISK_SHADOW: Color32 = Color32::from_rgb(190, 190, 185);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);

pub fn legal_marker() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 70)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 90)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 30.0;
pub const DISK_RADIUS_RATIO: f32 = 0.42;
pub const LEGAL_MARKER_RADIUS_RATIO: f32 = 0.12;
pub const GRID_LINE_WIDTH: f32 = 1.5;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Intersections marked with a dot, as on a tournament board
pub const GUIDE_POINTS: [(usize, usize); 4] = [(2, 2), (2, 6), (6, 2), (6, 6)];
