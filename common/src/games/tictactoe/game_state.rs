use crate::games::MoveRng;
use crate::log;
use super::board::{BOARD_SIZE, Board};
use super::bot_controller::{BOT_MARK, calculate_move};
use super::types::{Difficulty, GameStatus, Mark, MoveOutcome, Position, WinningLine};

pub const HUMAN_MARK: Mark = Mark::X;

/// Final position of a game that ended in a win or a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishedGame {
    pub cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    pub status: GameStatus,
    pub outcome: MoveOutcome,
    pub winning_line: Option<WinningLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ScoreBoard {
    fn record(&mut self, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Win(Mark::X) => self.x_wins += 1,
            MoveOutcome::Win(Mark::O) => self.o_wins += 1,
            MoveOutcome::Draw => self.draws += 1,
            _ => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Human (X) against computer (O). X always opens and turns alternate; a
/// finished game is archived in `last_result` and the board starts over.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    difficulty: Difficulty,
    status: GameStatus,
    last_move: Option<Position>,
    last_result: Option<FinishedGame>,
    score: ScoreBoard,
}

impl TicTacToeGameState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            current_mark: HUMAN_MARK,
            difficulty,
            status: GameStatus::InProgress,
            last_move: None,
            last_result: None,
            score: ScoreBoard::default(),
        }
    }

    pub fn new_game(&mut self, difficulty: Difficulty) {
        self.board = Board::new();
        self.current_mark = HUMAN_MARK;
        self.difficulty = difficulty;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        log!("New game started, difficulty: {}", difficulty);
    }

    /// Changing difficulty always starts a new game, even for the same level.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        log!("Difficulty changed from {} to {}", self.difficulty, difficulty);
        self.new_game(difficulty);
    }

    pub fn apply_human_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        if self.current_mark != HUMAN_MARK {
            log!("Rejected human move at ({}, {}): not X's turn", row, col);
            return MoveOutcome::Rejected;
        }
        self.place_mark(Position::new(row, col))
    }

    pub fn request_computer_move<R: MoveRng + ?Sized>(&mut self, rng: &mut R) -> MoveOutcome {
        if self.current_mark != BOT_MARK || self.status != GameStatus::InProgress {
            log!("Computer move requested out of turn");
            return MoveOutcome::Rejected;
        }

        let Some(pos) = calculate_move(self.difficulty, &self.board, rng) else {
            log!("Computer has no move on a full board");
            return MoveOutcome::Rejected;
        };
        self.place_mark(pos)
    }

    pub fn current_board(&self) -> [[Mark; BOARD_SIZE]; BOARD_SIZE] {
        self.board.cells()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn last_result(&self) -> Option<&FinishedGame> {
        self.last_result.as_ref()
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    fn place_mark(&mut self, pos: Position) -> MoveOutcome {
        let mark = self.current_mark;
        if let Err(e) = self.board.place(pos.row, pos.col, mark) {
            log!("Rejected move for {}: {}", mark, e);
            return MoveOutcome::Rejected;
        }
        self.last_move = Some(pos);
        log!("{} placed at {}", mark, pos);

        let outcome = self.check_game_over();
        if outcome.is_terminal() {
            self.finish_game(outcome);
        } else {
            self.switch_turn();
        }
        outcome
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }

    fn check_game_over(&mut self) -> MoveOutcome {
        if let Some(winner) = self.board.winner() {
            self.status = match winner {
                Mark::O => GameStatus::OWon,
                _ => GameStatus::XWon,
            };
            return MoveOutcome::Win(winner);
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            return MoveOutcome::Draw;
        }

        MoveOutcome::Continue
    }

    fn finish_game(&mut self, outcome: MoveOutcome) {
        log!("{}", outcome);
        self.score.record(outcome);
        self.last_result = Some(FinishedGame {
            cells: self.board.cells(),
            status: self.status,
            outcome,
            winning_line: self.board.winning_line(),
        });
        self.new_game(self.difficulty);
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
