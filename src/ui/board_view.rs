//! Board rendering for the Reversi GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Disk, Move, Player, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

/// What the board should show besides the disks
pub struct BoardOverlay<'a> {
    pub current_turn: Player,
    pub legal_moves: &'a [Move],
    pub last_move: Option<Move>,
    pub suggested_move: Option<Move>,
    /// Accept clicks
    pub interactive: bool,
}

impl BoardView {
    /// Render the board and return the clicked legal move, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &BoardOverlay<'_>) -> Option<Move> {
        let available_size = ui.available_size();

        // Square board filling the available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);
        painter.rect_filled(self.playing_area(), CornerRadius::ZERO, BOARD_BG);

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_disks(&painter, board);

        if overlay.interactive {
            for &mv in overlay.legal_moves {
                self.draw_legal_marker(&painter, mv);
            }
        }

        if let Some(mv) = overlay.last_move {
            self.draw_last_move_marker(&painter, mv);
        }

        if let Some(mv) = overlay.suggested_move {
            self.draw_suggestion(&painter, mv, overlay.current_turn);
        }

        let mut clicked = None;

        if overlay.interactive {
            if let Some(mv) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                let is_legal = overlay.legal_moves.contains(&mv);

                if is_legal {
                    self.draw_preview(&painter, mv, overlay.current_turn);
                } else if board.is_empty(mv) {
                    painter.circle_filled(self.cell_center(mv), self.disk_radius(), hover_invalid());
                }

                if response.clicked() && is_legal {
                    clicked = Some(mv);
                }
            }
        }

        clicked
    }

    fn playing_area(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        )
    }

    #[inline]
    fn disk_radius(&self) -> f32 {
        self.cell_size * DISK_RADIUS_RATIO
    }

    /// Cell borders and the four guide dots
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let area = self.playing_area();

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            painter.line_segment(
                [
                    Pos2::new(area.min.x + offset, area.min.y),
                    Pos2::new(area.min.x + offset, area.max.y),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    Pos2::new(area.min.x, area.min.y + offset),
                    Pos2::new(area.max.x, area.min.y + offset),
                ],
                stroke,
            );
        }

        for (col, row) in GUIDE_POINTS {
            let center = area.min + Vec2::new(col as f32, row as f32) * self.cell_size;
            painter.circle_filled(center, 3.0, GRID_LINE);
        }
    }

    /// Column letters on top, row numbers on the left, as in `e5` notation
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(14.0);
        let area = self.playing_area();

        for i in 0..BOARD_SIZE {
            let middle = (i as f32 + 0.5) * self.cell_size;
            let letter = (b'a' + i as u8) as char;

            painter.text(
                Pos2::new(area.min.x + middle, self.board_rect.min.y + BOARD_MARGIN * 0.5),
                egui::Align2::CENTER_CENTER,
                letter,
                font.clone(),
                LABEL,
            );
            painter.text(
                Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, area.min.y + middle),
                egui::Align2::CENTER_CENTER,
                format!("{}", i + 1),
                font.clone(),
                LABEL,
            );
        }
    }

    fn draw_disks(&self, painter: &Painter, board: &Board) {
        for (mv, disk) in board.squares() {
            if let Some(player) = disk.player() {
                self.draw_disk(painter, mv, player);
            }
        }
    }

    /// Draw a single disk with a drop shadow
    fn draw_disk(&self, painter: &Painter, mv: Move, player: Player) {
        let center = self.cell_center(mv);
        let radius = self.disk_radius();

        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );

        match player {
            Player::Dark => {
                painter.circle_filled(center, radius, DARK_DISK);
                painter.circle_filled(
                    center + Vec2::splat(-radius * 0.3),
                    radius * 0.2,
                    DARK_DISK_HIGHLIGHT,
                );
            }
            Player::Light => {
                painter.circle_filled(center, radius, LIGHT_DISK);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, LIGHT_DISK_SHADOW),
                );
            }
        }
    }

    fn draw_legal_marker(&self, painter: &Painter, mv: Move) {
        painter.circle_filled(
            self.cell_center(mv),
            self.cell_size * LEGAL_MARKER_RADIUS_RATIO,
            legal_marker(),
        );
    }

    fn draw_last_move_marker(&self, painter: &Painter, mv: Move) {
        painter.circle_filled(self.cell_center(mv), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Translucent disk with a "?" on the hinted square
    fn draw_suggestion(&self, painter: &Painter, mv: Move, turn: Player) {
        let center = self.cell_center(mv);
        let (fill, text) = match turn {
            Player::Dark => (Color32::from_rgba_unmultiplied(20, 20, 20, 110), LIGHT_DISK),
            Player::Light => (Color32::from_rgba_unmultiplied(240, 240, 240, 110), DARK_DISK),
        };

        painter.circle_filled(center, self.disk_radius(), fill);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(self.cell_size * 0.35),
            text,
        );
    }

    fn draw_preview(&self, painter: &Painter, mv: Move, turn: Player) {
        let color = match turn.disk() {
            Disk::Dark => Color32::from_rgba_unmultiplied(20, 20, 20, 90),
            _ => Color32::from_rgba_unmultiplied(240, 240, 240, 90),
        };
        painter.circle_filled(self.cell_center(mv), self.disk_radius(), color);
    }

    /// Convert screen coordinates to a board square
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Move> {
        let relative = screen_pos - self.playing_area().min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        Move::is_valid(col, row).then(|| Move::new(col as u8, row as u8))
    }

    /// Center of a square in screen coordinates
    pub fn cell_center(&self, mv: Move) -> Pos2 {
        self.playing_area().min
            + Vec2::new(mv.col as f32 + 0.5, mv.row as f32 + 0.5) * self.cell_size
    }
}
