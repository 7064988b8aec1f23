use thiserror::Error;

use super::board::{Board, PlaceError};
use super::bot_controller::{BOT_MARK, SearchResult, search};
use super::types::{GameOutcome, Mark, Position, WinningLine};
use crate::{log, log_debug};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,
    #[error(transparent)]
    InvalidPlacement(#[from] PlaceError),
}

/// What happened during one call to [`TicTacToeGameState::play_human_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub human_move: Position,
    /// `None` if the game ended on the human's move.
    pub bot_move: Option<SearchResult>,
    pub outcome: GameOutcome,
}

/// One round of human (`X`) against the minimax bot (`O`).
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    outcome: GameOutcome,
    last_move: Option<Position>,
    winning_line: Option<WinningLine>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            outcome: GameOutcome::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    /// Resume a round from an existing board.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            outcome: board.outcome(),
            last_move: None,
            winning_line: board.winning_line(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Place the human's mark, then let the bot reply unless the game ended.
    ///
    /// Nothing changes if this returns an error.
    pub fn play_human_move(&mut self, position: Position) -> Result<TurnReport, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let before = (self.board, self.last_move);

        self.board.place(position, Mark::X)?;
        self.last_move = Some(position);
        log!("Player placed X at {}", position);

        if self.check_game_over() {
            return Ok(self.report(position, None));
        }

        let Some(bot_move) = search(&self.board) else {
            return Ok(self.report(position, None));
        };

        self.apply_bot_move(bot_move, before)?;
        Ok(self.report(position, Some(bot_move)))
    }

    /// Place the bot's reply. On failure the whole turn is rolled back to `before`.
    fn apply_bot_move(
        &mut self,
        bot_move: SearchResult,
        before: (Board, Option<Position>),
    ) -> Result<(), MoveError> {
        if let Err(e) = self.board.place(bot_move.position, BOT_MARK) {
            (self.board, self.last_move) = before;
            self.check_game_over();
            log!("AI move at {} rejected: {}", bot_move.position, e);
            return Err(e.into());
        }
        self.last_move = Some(bot_move.position);
        log!(
            "AI placed O at {} (score {})",
            bot_move.position,
            bot_move.score
        );
        log_debug!("Board after AI move:\n{}", self.board);

        self.check_game_over();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.outcome = GameOutcome::InProgress;
        self.last_move = None;
        self.winning_line = None;
        log!("Game reset");
    }

    fn check_game_over(&mut self) -> bool {
        self.outcome = self.board.outcome();
        self.winning_line = self.board.winning_line();

        if let Some(message) = self.outcome.message() {
            log!("Game over: {}", message);
        }

        self.is_over()
    }

    fn report(&self, human_move: Position, bot_move: Option<SearchResult>) -> TurnReport {
        TurnReport {
            human_move,
            bot_move,
            outcome: self.outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(s: &str) -> TicTacToeGameState {
        TicTacToeGameState::from_board(s.parse().expect("valid board"))
    }

    #[test]
    fn human_move_gets_a_bot_reply() {
        let mut state = TicTacToeGameState::new();
        let report = state.play_human_move(Position::new(0, 0)).unwrap();

        let bot_move = report.bot_move.unwrap();
        assert_eq!(bot_move.position, Position::new(1, 1));
        assert_eq!(report.outcome, GameOutcome::InProgress);
        assert_eq!(state.board().get(Position::new(1, 1)), Some(Mark::O));
        assert_eq!(state.last_move(), Some(Position::new(1, 1)));
        assert_eq!(state.board().next_mark(), Mark::X);
    }

    #[test]
    fn human_win_ends_game_without_bot_reply() {
        let mut state = state("XX. / OO. / ...");
        let report = state.play_human_move(Position::new(0, 2)).unwrap();

        assert_eq!(report.bot_move, None);
        assert_eq!(report.outcome, GameOutcome::PlayerWin);
        assert!(state.is_over());
        assert_eq!(state.last_move(), Some(Position::new(0, 2)));

        let line = state.winning_line().unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn filling_the_board_is_a_draw() {
        let mut state = state("XOX / XOO / OX.");
        let report = state.play_human_move(Position::new(2, 2)).unwrap();

        assert_eq!(report.bot_move, None);
        assert_eq!(report.outcome, GameOutcome::Draw);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn bot_wins_when_human_misses_a_block() {
        let mut state = state("OO. / X.. / ..X");
        let report = state.play_human_move(Position::new(2, 0)).unwrap();

        assert_eq!(
            report.bot_move.map(|bot_move| bot_move.position),
            Some(Position::new(0, 2))
        );
        assert_eq!(report.outcome, GameOutcome::OpponentWin);
        assert_eq!(state.outcome().message(), Some("AI wins!"));
        assert_eq!(state.winning_line().map(|line| line.mark), Some(Mark::O));
    }

    #[test]
    fn invalid_moves_leave_state_untouched() {
        let mut state = state("X.. / .O. / ...");
        let before = *state.board();

        assert_eq!(
            state.play_human_move(Position::new(1, 1)),
            Err(MoveError::InvalidPlacement(PlaceError::CellOccupied(
                Position::new(1, 1)
            )))
        );
        assert_eq!(
            state.play_human_move(Position::new(0, 5)),
            Err(MoveError::InvalidPlacement(PlaceError::OutOfBounds(
                Position::new(0, 5)
            )))
        );
        assert_eq!(*state.board(), before);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn rejected_bot_move_rolls_back_the_whole_turn() {
        let mut state = state("X.. / .O. / ...");
        let before = (*state.board(), state.last_move());

        state.board.place(Position::new(0, 1), Mark::X).unwrap();
        state.last_move = Some(Position::new(0, 1));

        let occupied = SearchResult {
            position: Position::new(0, 0),
            score: 0,
        };
        assert_eq!(
            state.apply_bot_move(occupied, before),
            Err(MoveError::InvalidPlacement(PlaceError::CellOccupied(
                Position::new(0, 0)
            )))
        );
        assert_eq!(*state.board(), before.0);
        assert_eq!(state.last_move(), None);
        assert_eq!(state.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn no_moves_after_game_over() {
        let mut state = state("XXX / OO. / ...");
        assert!(state.is_over());
        assert_eq!(
            state.play_human_move(Position::new(2, 2)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn reset_starts_a_new_round() {
        let mut state = state("XXX / OO. / ...");
        state.reset();

        assert_eq!(*state.board(), Board::new());
        assert_eq!(state.outcome(), GameOutcome::InProgress);
        assert_eq!(state.winning_line(), None);
        assert!(state.play_human_move(Position::new(2, 2)).is_ok());
    }
}
