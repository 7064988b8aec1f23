use std::fmt;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    /// The human player. Always moves first.
    X,
    /// The AI opponent.
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '_' | '-' => Some(Mark::Empty),
            'x' | 'X' => Some(Mark::X),
            'o' | 'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    PlayerWin,
    OpponentWin,
    Draw,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        *self != GameOutcome::InProgress
    }

    /// Text shown to the player once the round has ended.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::PlayerWin => Some("Player wins!"),
            GameOutcome::OpponentWin => Some("AI wins!"),
            GameOutcome::Draw => Some("It's a draw!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    /// Row-major index, `0` at the top left.
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn is_in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}
