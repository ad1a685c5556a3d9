//! Main application for the Reversi GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{AiTask, GameMode, GameResult, GameState};
use super::theme::*;
use crate::{Disk, Player};

/// Main Reversi application
pub struct ReversiApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for ReversiApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

fn player_name(player: Player) -> &'static str {
    match player {
        Player::Dark => "DARK",
        Player::Light => "LIGHT",
    }
}

fn disk_accent(player: Player) -> egui::Color32 {
    match player {
        Player::Dark => DARK_DISK,
        Player::Light => LIGHT_DISK,
    }
}

impl ReversiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs AI, play Dark)").clicked() {
                        self.state = GameState::new(GameMode::PvE {
                            human: Player::Dark,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs AI, play Light)").clicked() {
                        self.state = GameState::new(GameMode::PvE {
                            human: Player::Light,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (Hotseat)").clicked() {
                        self.state = GameState::new(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("vs AI - You: {}", human),
                        GameMode::PvP => "Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("REVERSI").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Side to move and what it is doing
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, disk_accent(turn));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(player_name(turn)).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.ai_task() == Some(AiTask::Hint) {
                        ("Finding hint...", TIMER_WARNING)
                    } else if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over", TIMER_NORMAL)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    TIMER_NORMAL
                } else if secs < 2.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(last) = self.state.move_timer.last_move_duration {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Last move: {:.1}s", last.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Disk counts for both sides
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("DISKS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for player in Player::ALL {
                let count = self.state.board.count(player.disk());
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(Vec2::new(18.0, 18.0), egui::Sense::hover());
                    ui.painter().circle_filled(rect.center(), 8.0, disk_accent(player));
                    ui.label(RichText::new(player_name(player)).size(12.0).color(TEXT_SECONDARY));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(count.to_string()).size(16.0).strong().color(TEXT_PRIMARY));
                    });
                });
                ui.add_space(4.0);
            }

            ui.label(
                RichText::new(format!("Empty: {}", self.state.board.count(Disk::Empty)))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo (U)").clicked() {
                    self.state.undo();
                }

                if self.state.mode == GameMode::PvP && ui.button("Hint (H)").clicked() {
                    self.state.request_suggestion();
                }

                if ui.button("New (N)").clicked() {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(RichText::new(format!("Move #{}", self.state.move_count())).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Statistics of the last AI search
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(RichText::new(format!("{:?}", result.search_type)).size(11.0).strong().color(TIMER_NORMAL));
            ui.label(RichText::new(format!("Depth: {}", result.depth)).size(10.0).color(TEXT_SECONDARY));
            ui.label(RichText::new(format!("Score: {:+.3}", result.score)).size(10.0).color(TEXT_SECONDARY));
            ui.label(RichText::new(format!("{} nodes in {}ms", result.nodes, result.time_ms)).size(10.0).color(TEXT_MUTED));

            if let Some(mv) = result.best_move {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("-> {}", mv)).size(12.0).strong().color(TEXT_PRIMARY));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        let headline = match result.winner {
            Some(player) => format!("{} WINS", player_name(player)),
            None => "DRAW".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new(format!("{} - {}", result.dark, result.light))
                            .size(14.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(12.0);

                    if ui.button("New Game").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let legal_moves = self.state.legal_moves();
            let overlay = BoardOverlay {
                current_turn: self.state.current_turn,
                legal_moves: &legal_moves,
                last_move: self.state.last_move,
                suggested_move: self.state.suggested_move,
                interactive: self.state.is_human_turn()
                    && !self.state.is_ai_thinking()
                    && self.state.game_over.is_none(),
            };

            if let Some(mv) = self.board_view.show(ui, &self.state.board, &overlay) {
                if let Err(msg) = self.state.try_place_disk(mv) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            if i.key_pressed(egui::Key::H) && self.state.mode == GameMode::PvP {
                self.state.request_suggestion();
            }

            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for ReversiApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
