//! Main application for the Gomoku GUI

use std::path::PathBuf;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::warn;

use crate::board::{notation, BoardSize, Stone};
use crate::game::{Match, MatchStatus};
use crate::rules::Ruleset;

use super::board_view::{BoardFrame, BoardView};
use super::game_state::GameState;
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    /// Write the match to the save path when the window closes
    save_on_exit: bool,
}

impl GomokuApp {
    /// Create the app around an existing match
    pub fn new(_cc: &eframe::CreationContext<'_>, game: Match, save_path: PathBuf, save_on_exit: bool) -> Self {
        Self {
            state: GameState::new(game, save_path),
            board_view: BoardView::default(),
            save_on_exit,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for ruleset in [Ruleset::Freestyle, Ruleset::Renju] {
                        for size in BoardSize::ALL {
                            if ui.button(format!("New {ruleset} {size}")).clicked() {
                                self.state.new_game(size, ruleset);
                                ui.close_menu();
                            }
                        }
                        ui.separator();
                    }
                    if ui.button("Save").clicked() {
                        let _ = self.state.save();
                        ui.close_menu();
                    }
                    if ui.button("Load").clicked() {
                        let _ = self.state.load();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Replay", |ui| {
                    if ui.button("Start replay").clicked() {
                        self.state.start_replay();
                        ui.close_menu();
                    }
                    if ui.button("Exit replay").clicked() {
                        self.state.exit_replay();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let game = self.state.displayed();
                    ui.label(format!("{} - {}", game.ruleset(), game.size()));
                });
            });
        });
    }

    /// Render the side panel with match info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                if self.state.is_replaying() {
                    self.render_replay_card(ui);
                } else {
                    self.render_actions_card(ui);
                }
                ui.add_space(10.0);

                self.render_moves_card(ui);

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Side to move, or the result once the match is decided
    fn render_status_card(&self, ui: &mut egui::Ui) {
        let game = self.state.displayed();
        Self::card_frame().show(ui, |ui| {
            let is_black = match game.status() {
                MatchStatus::Playing | MatchStatus::Stopped => game.current_turn() == Stone::Black,
                _ => game.winner() != Stone::White,
            };
            let (stone_char, accent) = if is_black {
                ("●", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", egui::Color32::from_rgb(220, 220, 225))
            };
            let status_color = match game.status() {
                MatchStatus::Playing => STATUS_PLAYING,
                MatchStatus::Stopped => STATUS_STOPPED,
                MatchStatus::Forbidden => STATUS_FORBIDDEN,
                MatchStatus::Finished => WIN_HIGHLIGHT,
            };

            ui.horizontal(|ui| {
                let stone_color = if is_black { TEXT_PRIMARY } else { egui::Color32::from_rgb(30, 30, 35) };
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(game.status().to_string().to_uppercase())
                            .size(12.0)
                            .strong()
                            .color(status_color),
                    );
                    ui.label(RichText::new(self.state.status_text()).size(14.0).color(TEXT_PRIMARY));
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| match self.state.game.status() {
                MatchStatus::Playing => {
                    if ui.button("Stop (S)").clicked() {
                        self.state.stop();
                    }
                }
                MatchStatus::Stopped => {
                    if ui.button("Resume (R)").clicked() {
                        self.state.resume();
                    }
                }
                MatchStatus::Finished | MatchStatus::Forbidden => {
                    if ui.button("New Game (N)").clicked() {
                        self.state.new_game(self.state.game.size(), self.state.game.ruleset());
                    }
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Save file: {}", self.state.save_path.display()))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_replay_card(&mut self, ui: &mut egui::Ui) {
        let (position, total) = self
            .state
            .replay()
            .map_or((0, 0), |cursor| (cursor.position(), cursor.total()));

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("REPLAY").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("⏮").clicked() {
                    self.state.step_replay(-(position as isize));
                }
                if ui.button("◀").clicked() {
                    self.state.step_replay(-1);
                }
                if ui.button("▶").clicked() {
                    self.state.step_replay(1);
                }
                if ui.button("⏭").clicked() {
                    self.state.step_replay(total as isize);
                }
            });
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move {position} / {total}"))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Move list in coordinate notation, two moves per row
    fn render_moves_card(&self, ui: &mut egui::Ui) {
        let game = self.state.displayed();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new(format!("MOVES ({})", game.moves().len())).size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            egui::ScrollArea::vertical()
                .max_height(240.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for (turn, pair) in game.moves().chunks(2).enumerate() {
                        let text = pair
                            .iter()
                            .map(|mv| format!("{:>3}", notation::format(mv.pos(), game.size())))
                            .collect::<Vec<_>>()
                            .join("  ");
                        ui.label(
                            RichText::new(format!("{:>3}. {text}", turn + 1))
                                .monospace()
                                .size(11.0)
                                .color(TEXT_SECONDARY),
                        );
                    }
                });
        });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let game = self.state.displayed();
            let forbidden_at = game
                .forbidden()
                .and_then(|_| game.last_move())
                .map(|mv| mv.pos());
            let frame = BoardFrame {
                board: game.board(),
                current_turn: game.current_turn(),
                last_move: game.last_move().map(|mv| mv.pos()),
                winning_line: game.winning_line(),
                forbidden_at,
                accepts_input: !self.state.is_replaying() && game.status() == MatchStatus::Playing,
            };

            if let Some(pos) = self.board_view.show(ui, &frame) {
                let _ = self.state.try_place_stone(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if self.state.is_replaying() {
                if i.key_pressed(egui::Key::ArrowLeft) {
                    self.state.step_replay(-1);
                }
                if i.key_pressed(egui::Key::ArrowRight) {
                    self.state.step_replay(1);
                }
                if i.key_pressed(egui::Key::Escape) {
                    self.state.exit_replay();
                }
                return;
            }

            if i.key_pressed(egui::Key::S) {
                self.state.stop();
            }
            if i.key_pressed(egui::Key::R) {
                self.state.resume();
            }
            if i.key_pressed(egui::Key::N) && self.state.game.status().is_terminal() {
                self.state.new_game(self.state.game.size(), self.state.game.ruleset());
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.save_on_exit && ctx.input(|i| i.viewport().close_requested()) {
            if let Err(err) = self.state.save() {
                warn!(%err, "failed to save match on exit");
            }
            self.save_on_exit = false;
        }
    }
}
