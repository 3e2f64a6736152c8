use crate::games::MoveRng;
use super::board::Board;
use super::types::{Difficulty, Mark, Position};

/// The computer always plays O; scores are from O's point of view.
pub const BOT_MARK: Mark = Mark::O;

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

/// Picks the computer's next cell. `None` only when the board has no empty cell.
pub fn calculate_move<R: MoveRng + ?Sized>(
    difficulty: Difficulty,
    board: &Board,
    rng: &mut R,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Hard => calculate_minimax_move(board),
    }
}

pub fn calculate_random_move<R: MoveRng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.pick_index(available_moves.len());
    available_moves.get(idx).copied()
}

pub fn calculate_minimax_move(board: &Board) -> Option<Position> {
    calculate_minimax_move_for(board, BOT_MARK)
}

/// Optimal move for `mark`: O maximizes the score, X minimizes it. Ties go to
/// the first cell in row-major order.
pub fn calculate_minimax_move_for(board: &Board, mark: Mark) -> Option<Position> {
    let maximizing = match mark {
        Mark::O => true,
        Mark::X => false,
        Mark::Empty => return None,
    };

    let mut board = *board;
    let mut best_move = None;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for pos in board.empty_cells() {
        let Some(score) = score_with_mark(&mut board, pos, mark, |b| minimax(b, !maximizing)) else {
            continue;
        };

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

/// Exact game value of `board` with O to move when `maximizing`, X otherwise:
/// +1 O wins, -1 X wins, 0 draw under perfect play. The board is restored
/// before returning.
pub fn minimax(board: &mut Board, maximizing: bool) -> i32 {
    search(board, maximizing, i32::MIN, i32::MAX)
}

fn search(board: &mut Board, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
    if let Some(winner) = board.winner() {
        return terminal_score(winner);
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    if maximizing {
        let mut max_eval = i32::MIN;
        for pos in board.empty_cells() {
            let Some(eval) =
                score_with_mark(board, pos, Mark::O, |b| search(b, false, alpha, beta))
            else {
                continue;
            };

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for pos in board.empty_cells() {
            let Some(eval) =
                score_with_mark(board, pos, Mark::X, |b| search(b, true, alpha, beta))
            else {
                continue;
            };

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

fn terminal_score(winner: Mark) -> i32 {
    match winner {
        Mark::O => WIN_SCORE,
        Mark::X => LOSS_SCORE,
        Mark::Empty => DRAW_SCORE,
    }
}

/// Places `mark` at `pos`, scores the position, then clears the cell again.
fn score_with_mark(
    board: &mut Board,
    pos: Position,
    mark: Mark,
    score: impl FnOnce(&mut Board) -> i32,
) -> Option<i32> {
    board.place(pos.row, pos.col, mark).ok()?;
    let value = score(board);
    board.clear(pos.row, pos.col);
    Some(value)
}
