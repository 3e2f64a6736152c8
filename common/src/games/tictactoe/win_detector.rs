use super::board::BOARD_SIZE;
use super::types::{Mark, Position, WinningLine};

type Line = [(usize, usize); BOARD_SIZE];

/// Rows, then columns, then the two diagonals, as `(row, col)` pairs.
pub const WINNING_LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(cells: &[[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

pub fn check_win_with_line(cells: &[[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|line| {
        let [(r0, c0), (r1, c1), (r2, c2)] = *line;
        let mark = cells[r0][c0];
        if mark != Mark::Empty && cells[r1][c1] == mark && cells[r2][c2] == mark {
            Some(WinningLine::new(mark, Position::new(r0, c0), Position::new(r2, c2)))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let mut cells = [[E; 3]; 3];
            for (row, col) in line {
                cells[row][col] = O;
            }
            assert_eq!(check_win(&cells), Some(O), "line {:?}", line);
        }
    }

    #[test]
    fn test_empty_line_is_not_a_win() {
        assert_eq!(check_win(&[[E; 3]; 3]), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let cells = [[X, X, O], [O, O, X], [X, O, X]];
        assert_eq!(check_win(&cells), None);
    }

    #[test]
    fn test_anti_diagonal_line_endpoints() {
        let cells = [[E, O, X], [O, X, E], [X, E, E]];
        let line = check_win_with_line(&cells).unwrap();

        assert_eq!(line.mark, X);
        assert_eq!(line.start, Position::new(0, 2));
        assert_eq!(line.end, Position::new(2, 0));
    }
}
