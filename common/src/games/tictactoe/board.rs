use std::fmt;

use thiserror::Error;

use super::types::{Mark, Position, WinningLine};
use super::win_detector::check_win_with_line;

pub const BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("Position ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },
    #[error("Cell ({row}, {col}) is already marked")]
    Occupied { row: usize, col: usize },
    #[error("Cannot place an empty mark")]
    EmptyMark,
}

/// 3x3 grid of marks, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> [[Mark; BOARD_SIZE]; BOARD_SIZE] {
        self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), InvalidMove> {
        if mark == Mark::Empty {
            return Err(InvalidMove::EmptyMark);
        }
        match self.get(row, col) {
            None => Err(InvalidMove::OutOfBounds { row, col }),
            Some(Mark::Empty) => {
                self.cells[row][col] = mark;
                Ok(())
            }
            Some(_) => Err(InvalidMove::Occupied { row, col }),
        }
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            self.cells[row][col] = Mark::Empty;
        }
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().map(|line| line.mark)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// Number of X and O marks on the board.
    pub fn mark_counts(&self) -> (usize, usize) {
        self.cells
            .iter()
            .flatten()
            .fold((0, 0), |(x, o), cell| match cell {
                Mark::X => (x + 1, o),
                Mark::O => (x, o + 1),
                Mark::Empty => (x, o),
            })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    0   1   2")?;
        for (row, cells) in self.cells.iter().enumerate() {
            writeln!(f, "{}   {} | {} | {}", row, cells[0], cells[1], cells[2])?;
            if row + 1 < BOARD_SIZE {
                writeln!(f, "   ---+---+---")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();

        assert_eq!(board.empty_cells().len(), 9);
        assert!(!board.has_winner());
        assert!(!board.is_full());
        assert_eq!(board.mark_counts(), (0, 0));
    }

    #[test]
    fn test_place_on_empty_cell_updates_empty_cells() {
        let mut board = Board::new();

        board.place(1, 2, X).unwrap();

        assert_eq!(board.get(1, 2), Some(X));
        let empty = board.empty_cells();
        assert_eq!(empty.len(), 8);
        assert!(!empty.contains(&Position::new(1, 2)));
        assert_eq!(board.empty_cells(), empty);
    }

    #[test]
    fn test_place_on_occupied_cell_leaves_board_unchanged() {
        let mut board = Board::new();
        board.place(0, 0, X).unwrap();
        let before = board;

        assert_eq!(board.place(0, 0, O), Err(InvalidMove::Occupied { row: 0, col: 0 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_out_of_bounds_is_rejected() {
        let mut board = Board::new();
        let before = board;

        assert_eq!(board.place(3, 0, X), Err(InvalidMove::OutOfBounds { row: 3, col: 0 }));
        assert_eq!(board.place(0, 7, X), Err(InvalidMove::OutOfBounds { row: 0, col: 7 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_empty_mark_is_rejected() {
        let mut board = Board::new();

        assert_eq!(board.place(0, 0, E), Err(InvalidMove::EmptyMark));
    }

    #[test]
    fn test_clear_restores_empty_cell() {
        let mut board = Board::new();
        board.place(2, 2, O).unwrap();

        board.clear(2, 2);
        board.clear(5, 5);

        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_cells_are_row_major() {
        let board = Board::from_cells([[X, E, O], [E, X, E], [O, E, E]]);

        assert_eq!(
            board.empty_cells(),
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([[X, O, X], [O, X, O], [O, X, O]]);

        assert!(board.is_full());
        assert!(!board.has_winner());
    }

    #[test]
    fn test_full_board_with_line_is_still_a_win() {
        let board = Board::from_cells([[X, X, X], [O, O, X], [X, O, O]]);

        assert!(board.is_full());
        assert_eq!(board.winner(), Some(X));
    }

    #[test]
    fn test_column_win_reports_mark() {
        let board = Board::from_cells([[X, O, E], [X, O, E], [E, O, X]]);

        assert!(board.has_winner());
        assert_eq!(board.winner(), Some(O));
    }

    #[test]
    fn test_display_shows_marks_and_labels() {
        let board = Board::from_cells([[X, E, E], [E, O, E], [E, E, E]]);
        let text = board.to_string();

        assert!(text.starts_with("    0   1   2"));
        assert!(text.contains("0   X |   |  "));
        assert!(text.contains("1     | O |  "));
    }
}
