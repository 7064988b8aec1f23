use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use thiserror::Error;

use super::types::{BOARD_SIZE, GameOutcome, Mark, NUM_CELLS, Position, WinningLine};
use super::win_detector::{Cells, check_win, check_win_with_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("position {0} is out of bounds")]
    OutOfBounds(Position),
    #[error("cell {0} is already marked")]
    CellOccupied(Position),
    #[error("cannot place an empty mark")]
    EmptyMark,
    #[error("it is {expected}'s turn")]
    OutOfTurn { expected: Mark },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    /// The input did not contain exactly nine cells.
    #[error("a board needs 9 cells, got {0}")]
    InvalidLength(usize),
    #[error("{0:?} is not a valid cell")]
    InvalidChar(char),
    #[error("{x} X marks and {o} O marks cannot come from alternating turns")]
    InvalidMarkCounts { x: usize, o: usize },
}

/// A 3x3 tic-tac-toe board.
///
/// `X` always moves first, so the number of `X` marks is either equal to the
/// number of `O` marks or one more. [`Board::place`] refuses any move that
/// would break this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Cells,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Get the mark at a position, or `None` if the position is off the board.
    pub fn get(&self, position: Position) -> Option<Mark> {
        if !position.is_in_bounds() {
            return None;
        }
        Some(self.cells[position.row][position.col])
    }

    /// Place `mark` on an empty cell.
    ///
    /// The board is left untouched if this returns an error.
    pub fn place(&mut self, position: Position, mark: Mark) -> Result<(), PlaceError> {
        self.validate_placement(position, mark)?;
        self.cells[position.row][position.col] = mark;
        Ok(())
    }

    /// Place `mark` and get a guard that clears the cell again when dropped.
    ///
    /// The guard derefs to the board, so it can be searched and mutated
    /// further while the mark is in place.
    pub fn place_scoped(
        &mut self,
        position: Position,
        mark: Mark,
    ) -> Result<PlacementGuard<'_>, PlaceError> {
        self.place(position, mark)?;
        Ok(PlacementGuard {
            board: self,
            position,
        })
    }

    fn validate_placement(&self, position: Position, mark: Mark) -> Result<(), PlaceError> {
        if !position.is_in_bounds() {
            return Err(PlaceError::OutOfBounds(position));
        }
        if mark == Mark::Empty {
            return Err(PlaceError::EmptyMark);
        }
        if self.cells[position.row][position.col] != Mark::Empty {
            return Err(PlaceError::CellOccupied(position));
        }

        let expected = self.next_mark();
        if mark != expected {
            return Err(PlaceError::OutOfTurn { expected });
        }

        Ok(())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    /// Get the mark whose turn it is.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.winner() {
            Some(Mark::X) => GameOutcome::PlayerWin,
            Some(Mark::O) => GameOutcome::OpponentWin,
            _ if self.is_full() => GameOutcome::Draw,
            _ => GameOutcome::InProgress,
        }
    }

    /// Iterate the empty cells in row-major order.
    ///
    /// The iterator reads from a copy of the board taken now, so the board can
    /// be mutated while iterating.
    pub fn legal_moves(&self) -> LegalMoves {
        LegalMoves {
            cells: self.cells,
            index: 0,
        }
    }

    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse nine cells, ignoring whitespace and `/` row separators.
    ///
    /// `X` and `O` (either case) are marks, `.`, `_` and `-` are empty cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(|c| Mark::from_char(c).ok_or(ParseBoardError::InvalidChar(c)))
            .collect::<Result<Vec<_>, _>>()?;

        if marks.len() != NUM_CELLS {
            return Err(ParseBoardError::InvalidLength(marks.len()));
        }

        let mut board = Board::new();
        for (index, mark) in marks.into_iter().enumerate() {
            let position = Position::from_index(index);
            board.cells[position.row][position.col] = mark;
        }

        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        if x != o && x != o + 1 {
            return Err(ParseBoardError::InvalidMarkCounts { x, o });
        }

        Ok(board)
    }
}

/// Iterator over the empty cells of a [`Board`], see [`Board::legal_moves`].
#[derive(Debug, Clone)]
pub struct LegalMoves {
    cells: Cells,
    index: usize,
}

impl Iterator for LegalMoves {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < NUM_CELLS {
            let position = Position::from_index(self.index);
            self.index += 1;

            if self.cells[position.row][position.col] == Mark::Empty {
                return Some(position);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(NUM_CELLS - self.index))
    }
}

impl std::iter::FusedIterator for LegalMoves {}

/// A mark placed by [`Board::place_scoped`].
///
/// The cell is cleared on drop.
#[derive(Debug)]
pub struct PlacementGuard<'a> {
    board: &'a mut Board,
    position: Position,
}

impl PlacementGuard<'_> {
    pub fn position(&self) -> Position {
        self.position
    }
}

impl Deref for PlacementGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for PlacementGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PlacementGuard<'_> {
    fn drop(&mut self) {
        self.board.cells[self.position.row][self.position.col] = Mark::Empty;
    }
}
