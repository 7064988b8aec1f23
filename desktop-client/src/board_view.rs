use crate::colors;
use common::games::tictactoe::{BOARD_SIZE, Mark, Position, TicTacToeGameState, WinningLine};
use eframe::egui;

pub struct BoardView {
    cell_size: f32,
    highlight_hover: bool,
}

impl BoardView {
    const LINE_WIDTH: f32 = 2.0;
    const WIN_LINE_WIDTH: f32 = 6.0;
    const MARK_FONT_SCALE: f32 = 80.0 / 150.0;

    pub fn new(cell_size: f32, highlight_hover: bool) -> Self {
        Self {
            cell_size,
            highlight_hover,
        }
    }

    pub fn board_size(&self) -> egui::Vec2 {
        egui::Vec2::splat(self.cell_size * BOARD_SIZE as f32)
    }

    /// The cell under `pointer`, or `None` if it is off the board.
    pub fn cell_at(&self, board_rect: egui::Rect, pointer: egui::Pos2) -> Option<Position> {
        let offset = pointer - board_rect.min;
        if offset.x < 0.0 || offset.y < 0.0 {
            return None;
        }

        let col = (offset.x / self.cell_size) as usize;
        let row = (offset.y / self.cell_size) as usize;
        let position = Position::new(row, col);
        position.is_in_bounds().then_some(position)
    }

    pub fn cell_rect(&self, board_rect: egui::Rect, position: Position) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + position.col as f32 * self.cell_size,
                board_rect.top() + position.row as f32 * self.cell_size,
            ),
            egui::Vec2::splat(self.cell_size),
        )
    }

    /// Draw the board and return the empty cell under the pointer, if any.
    ///
    /// Hover is ignored once the round is over.
    pub fn paint(
        &self,
        painter: &egui::Painter,
        board_rect: egui::Rect,
        state: &TicTacToeGameState,
        pointer: Option<egui::Pos2>,
    ) -> Option<Position> {
        painter.rect_filled(board_rect, 0.0, colors::BACKGROUND);

        let hovered = pointer
            .and_then(|pointer| self.cell_at(board_rect, pointer))
            .filter(|&position| {
                !state.is_over() && state.board().get(position) == Some(Mark::Empty)
            });

        if self.highlight_hover
            && let Some(position) = hovered
        {
            painter.rect_filled(self.cell_rect(board_rect, position), 0.0, colors::HOVER);
        }

        self.paint_grid(painter, board_rect);

        for index in 0..BOARD_SIZE * BOARD_SIZE {
            let position = Position::from_index(index);
            if let Some(mark) = state.board().get(position) {
                self.paint_mark(painter, self.cell_rect(board_rect, position), mark);
            }
        }

        if let Some(line) = state.winning_line() {
            self.paint_winning_line(painter, board_rect, line);
        }

        hovered
    }

    fn paint_grid(&self, painter: &egui::Painter, board_rect: egui::Rect) {
        let stroke = egui::Stroke::new(Self::LINE_WIDTH, colors::GRID_LINE);

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            let x = board_rect.left() + offset;
            let y = board_rect.top() + offset;
            painter.line_segment(
                [egui::pos2(x, board_rect.top()), egui::pos2(x, board_rect.bottom())],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(board_rect.left(), y), egui::pos2(board_rect.right(), y)],
                stroke,
            );
        }
    }

    fn paint_mark(&self, painter: &egui::Painter, cell_rect: egui::Rect, mark: Mark) {
        let color = match mark {
            Mark::X => colors::PLAYER_MARK,
            Mark::O => colors::OPPONENT_MARK,
            Mark::Empty => return,
        };

        painter.text(
            cell_rect.center(),
            egui::Align2::CENTER_CENTER,
            mark.to_char(),
            egui::FontId::proportional(self.cell_size * Self::MARK_FONT_SCALE),
            color,
        );
    }

    fn paint_winning_line(&self, painter: &egui::Painter, board_rect: egui::Rect, line: WinningLine) {
        let color = match line.mark {
            Mark::X => colors::PLAYER_MARK,
            _ => colors::OPPONENT_MARK,
        };

        painter.line_segment(
            [
                self.cell_rect(board_rect, line.start).center(),
                self.cell_rect(board_rect, line.end).center(),
            ],
            egui::Stroke::new(Self::WIN_LINE_WIDTH, color),
        );
    }
}
