use crate::board_view::BoardView;
use crate::colors;
use crate::config::Config;
use common::games::tictactoe::TicTacToeGameState;
use common::log;
use eframe::egui;

pub const WINDOW_TITLE: &str = "Tic Tac Toe - Minimax AI";

pub struct TicTacToeApp {
    state: TicTacToeGameState,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(config: &Config) -> Self {
        Self {
            state: TicTacToeGameState::new(),
            board_view: BoardView::new(config.cell_size as f32, config.highlight_hover),
        }
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let (board_rect, response) =
            ui.allocate_exact_size(self.board_view.board_size(), egui::Sense::click());

        let hovered = self.board_view.paint(
            ui.painter(),
            board_rect,
            &self.state,
            response.hover_pos(),
        );

        if response.clicked()
            && let Some(position) = hovered
            && let Err(e) = self.state.play_human_move(position)
        {
            log!("Rejected move at {}: {}", position, e);
        }

        if self.state.is_over() {
            self.render_game_over(ui, board_rect);
        }
    }

    fn render_game_over(&mut self, ui: &mut egui::Ui, board_rect: egui::Rect) {
        let Some(message) = self.state.outcome().message() else {
            return;
        };

        let painter = ui.painter();
        painter.rect_filled(board_rect, 0.0, colors::FADE);

        let center = board_rect.center();
        let line_height = board_rect.height() / 9.0;
        painter.text(
            center - egui::vec2(0.0, line_height / 2.0),
            egui::Align2::CENTER_CENTER,
            message,
            egui::FontId::proportional(line_height * 0.6),
            colors::WINNER_TEXT,
        );
        painter.text(
            center + egui::vec2(0.0, line_height),
            egui::Align2::CENTER_CENTER,
            "Press R to Restart",
            egui::FontId::proportional(line_height * 0.4),
            colors::HINT_TEXT,
        );

        if ui.input(|i| i.key_pressed(egui::Key::R)) {
            self.state.reset();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(colors::BACKGROUND))
            .show(ctx, |ui| {
                self.render_board(ui);
            });
    }
}
