use super::board::Board;
use super::types::{Mark, Position};

/// The AI always plays `O`.
pub const BOT_MARK: Mark = Mark::O;

const WIN_SCORE: i8 = 1;
const DRAW_SCORE: i8 = 0;
const LOSS_SCORE: i8 = -1;

/// A candidate move for the bot and its minimax score.
///
/// `1` is a forced win for the bot, `0` a draw with best play and `-1` a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub position: Position,
    pub score: i8,
}

/// Pick the bot's move.
///
/// Returns `None` if the board already has a winner, is full, or it is not
/// the bot's turn. The board passed in is never modified.
pub fn choose_opponent_move(board: &Board) -> Option<Position> {
    search(board).map(|result| result.position)
}

/// Pick the bot's move along with its score.
///
/// Ties go to the first move in row-major order.
pub fn search(board: &Board) -> Option<SearchResult> {
    let mut best: Option<SearchResult> = None;

    for candidate in rank_moves(board) {
        if best.is_none_or(|best| candidate.score > best.score) {
            best = Some(candidate);
        }
    }

    best
}

/// Score every legal bot move, in row-major order.
pub fn rank_moves(board: &Board) -> Vec<SearchResult> {
    if board.has_winner() || board.next_mark() != BOT_MARK {
        return Vec::new();
    }

    let mut board = *board;
    let mut results = Vec::new();

    for position in board.legal_moves() {
        let placed = board.place_scoped(position, BOT_MARK);
        debug_assert!(placed.is_ok(), "legal move {position} was rejected");
        let Ok(mut placed) = placed else {
            continue;
        };

        let score = minimax(&mut placed, false);
        results.push(SearchResult { position, score });
    }

    results
}

/// Full-depth minimax. The bot is the maximizing side.
fn minimax(board: &mut Board, is_maximizing: bool) -> i8 {
    match board.winner() {
        Some(BOT_MARK) => return WIN_SCORE,
        Some(_) => return LOSS_SCORE,
        None => {}
    }

    if board.is_full() {
        return DRAW_SCORE;
    }

    let mark = if is_maximizing { BOT_MARK } else { Mark::X };

    let mut best_score = if is_maximizing { i8::MIN } else { i8::MAX };

    for position in board.legal_moves() {
        let placed = board.place_scoped(position, mark);
        debug_assert!(placed.is_ok(), "legal move {position} was rejected");
        let Ok(mut placed) = placed else {
            continue;
        };

        let score = minimax(&mut placed, !is_maximizing);

        best_score = if is_maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}
