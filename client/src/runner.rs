use std::io::{self, BufRead, Write};

use common::games::MoveRng;
use common::games::tictactoe::{Board, MoveOutcome, TicTacToeGameState};
use common::log;

use crate::command::{Command, HELP_TEXT, parse_command};

/// Drives one terminal session: reads commands, applies them to the game and
/// prints the board after every change.
pub struct GameRunner<R: MoveRng> {
    state: TicTacToeGameState,
    rng: R,
}

impl<R: MoveRng> GameRunner<R> {
    pub fn new(state: TicTacToeGameState, rng: R) -> Self {
        Self { state, rng }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn run<I: BufRead, O: Write>(&mut self, input: I, output: &mut O) -> io::Result<()> {
        writeln!(output, "{}", HELP_TEXT)?;
        self.render(output)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(command) => {
                    if !self.handle(command, output)? {
                        break;
                    }
                }
                Err(e) => writeln!(output, "{}", e)?,
            }
        }

        let score = self.state.score();
        writeln!(
            output,
            "Final score: X {} / O {} / draws {}",
            score.x_wins, score.o_wins, score.draws
        )?;
        Ok(())
    }

    /// Returns `false` when the session should end.
    pub fn handle<O: Write>(&mut self, command: Command, output: &mut O) -> io::Result<bool> {
        match command {
            Command::Quit => return Ok(false),
            Command::Help => {
                writeln!(output, "{}", HELP_TEXT)?;
                return Ok(true);
            }
            Command::NewGame => {
                let difficulty = self.state.difficulty();
                self.state.new_game(difficulty);
            }
            Command::SetDifficulty(difficulty) => {
                self.state.set_difficulty(difficulty);
                writeln!(output, "Difficulty: {}", difficulty)?;
            }
            Command::Place { row, col } => self.play_round(row, col, output)?,
        }

        self.render(output)?;
        Ok(true)
    }

    fn play_round<O: Write>(&mut self, row: usize, col: usize, output: &mut O) -> io::Result<()> {
        let outcome = self.state.apply_human_move(row, col);
        match outcome {
            MoveOutcome::Rejected => writeln!(output, "Cell ({}, {}) is not available", row, col),
            MoveOutcome::Continue => {
                match self.state.request_computer_move(&mut self.rng) {
                    MoveOutcome::Continue => {
                        if let Some(pos) = self.state.last_move() {
                            writeln!(output, "Computer plays {}", pos)?;
                        }
                    }
                    MoveOutcome::Rejected => {
                        log!("Computer move was rejected after human move at ({}, {})", row, col);
                    }
                    MoveOutcome::Win(_) | MoveOutcome::Draw => self.report_finished(output)?,
                }
                Ok(())
            }
            MoveOutcome::Win(_) | MoveOutcome::Draw => self.report_finished(output),
        }
    }

    fn report_finished<O: Write>(&self, output: &mut O) -> io::Result<()> {
        let Some(result) = self.state.last_result() else {
            return Ok(());
        };
        write!(output, "{}", Board::from_cells(result.cells))?;
        writeln!(output, "{}", result.outcome)?;
        let score = self.state.score();
        writeln!(
            output,
            "Score: X {} / O {} / draws {}",
            score.x_wins, score.o_wins, score.draws
        )?;
        writeln!(output, "New game")
    }

    fn render<O: Write>(&self, output: &mut O) -> io::Result<()> {
        writeln!(output)?;
        write!(output, "{}", self.state.board())?;
        writeln!(
            output,
            "[{}] {} to move",
            self.state.difficulty(),
            self.state.current_mark()
        )
    }
}
