mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, InvalidMove};
pub use bot_controller::{
    BOT_MARK, calculate_minimax_move, calculate_minimax_move_for, calculate_move,
    calculate_random_move, minimax,
};
pub use game_state::{FinishedGame, HUMAN_MARK, ScoreBoard, TicTacToeGameState};
pub use settings::TicTacToeSettings;
pub use types::{Difficulty, GameStatus, Mark, MoveOutcome, Position, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
