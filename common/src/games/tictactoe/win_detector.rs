use super::types::{BOARD_SIZE, Mark, Position, WinningLine};

pub type Cells = [[Mark; BOARD_SIZE]; BOARD_SIZE];

// Every line is listed in row-major order so that the first and last cells
// are the ends of the strike-through.
const LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonal
    [(0, 0), (1, 1), (2, 2)],
    // Anti-diagonal
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(cells: &Cells) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

pub fn check_win_with_line(cells: &Cells) -> Option<WinningLine> {
    for line in &LINES {
        let [(r0, c0), (r1, c1), (r2, c2)] = *line;
        let mark = cells[r0][c0];
        if mark == Mark::Empty {
            continue;
        }

        if cells[r1][c1] == mark && cells[r2][c2] == mark {
            return Some(WinningLine::new(
                mark,
                Position::new(r0, c0),
                Position::new(r2, c2),
            ));
        }
    }

    None
}
