mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, LegalMoves, ParseBoardError, PlaceError, PlacementGuard};
pub use bot_controller::{BOT_MARK, SearchResult, choose_opponent_move, rank_moves, search};
pub use game_state::{MoveError, TicTacToeGameState, TurnReport};
pub use types::{BOARD_SIZE, GameOutcome, Mark, NUM_CELLS, Position, WinningLine};
pub use win_detector::{Cells, check_win, check_win_with_line};
