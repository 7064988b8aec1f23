use common::games::tictactoe::{
    Board, GameOutcome, Mark, MoveError, Position, TicTacToeGameState, choose_opponent_move,
    search,
};

/// Human strategy that takes the center, then any winning cell, then any
/// cell that leaves the bot no immediate win.
fn careful_human_move(board: &Board) -> Position {
    let center = Position::new(1, 1);
    if board.get(center) == Some(Mark::Empty) {
        return center;
    }

    for position in board.legal_moves() {
        let mut after = *board;
        if after.place(position, Mark::X).is_ok() && after.winner() == Some(Mark::X) {
            return position;
        }
    }

    board
        .legal_moves()
        .find(|&position| {
            let mut hypothetical = *board;
            hypothetical.place(position, Mark::X).is_ok()
                && hypothetical
                    .legal_moves()
                    .all(|reply| {
                        let mut after = hypothetical;
                        after.place(reply, Mark::O).is_ok() && after.winner() != Some(Mark::O)
                    })
        })
        .or_else(|| board.legal_moves().next())
        .expect("board has a free cell")
}

#[test]
fn careful_human_cannot_beat_the_bot() {
    let mut state = TicTacToeGameState::new();

    while !state.is_over() {
        let position = careful_human_move(state.board());
        state.play_human_move(position).unwrap();
    }

    assert_ne!(state.outcome(), GameOutcome::PlayerWin);
}

#[test]
fn optimal_play_from_both_sides_is_a_draw() {
    let mut state = TicTacToeGameState::new();

    while !state.is_over() {
        let position = best_human_move(state.board());
        state.play_human_move(position).unwrap();
    }

    assert_eq!(state.outcome(), GameOutcome::Draw);
}

/// Pick the X move that leaves the bot with the lowest score.
fn best_human_move(board: &Board) -> Position {
    let mut best: Option<(Position, i8)> = None;

    for position in board.legal_moves() {
        let mut after = *board;
        after.place(position, Mark::X).unwrap();

        let score = match after.winner() {
            Some(Mark::X) => -2,
            _ => search(&after).map_or(0, |result| result.score),
        };

        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((position, score));
        }
    }

    best.expect("board has a free cell").0
}

#[test]
fn scenario_corner_opening_gets_center_reply() {
    let mut board = Board::new();
    board.place(Position::new(0, 0), Mark::X).unwrap();
    assert_eq!(choose_opponent_move(&board), Some(Position::new(1, 1)));
}

#[test]
fn restart_after_a_finished_round() {
    let mut state = TicTacToeGameState::new();
    while !state.is_over() {
        let position = state.board().legal_moves().next().unwrap();
        state.play_human_move(position).unwrap();
    }
    assert_eq!(
        state.play_human_move(Position::new(0, 0)),
        Err(MoveError::GameOver)
    );

    state.reset();
    assert!(!state.is_over());
    assert!(state.play_human_move(Position::new(0, 0)).is_ok());
}
