use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
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
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Mark::Empty => " ",
            Mark::X => "X",
            Mark::O => "O",
        };
        f.write_str(symbol)
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

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("Easy"),
            Difficulty::Hard => f.write_str("Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "fácil" | "facil" => Ok(Difficulty::Easy),
            "hard" | "difícil" | "dificil" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty '{}', expected easy or hard", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

/// Result of asking the game to apply a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Rejected,
    Continue,
    Win(Mark),
    Draw,
}

impl MoveOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Win(_) | MoveOutcome::Draw)
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Rejected => f.write_str("Cell is not available"),
            MoveOutcome::Continue => f.write_str("Game continues"),
            MoveOutcome::Win(mark) => write!(f, "{} Wins!", mark),
            MoveOutcome::Draw => f.write_str("It's a Draw!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps_player_marks() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(MoveOutcome::Win(Mark::X).to_string(), "X Wins!");
        assert_eq!(MoveOutcome::Win(Mark::O).to_string(), "O Wins!");
        assert_eq!(MoveOutcome::Draw.to_string(), "It's a Draw!");
        assert!(MoveOutcome::Draw.is_terminal());
        assert!(!MoveOutcome::Rejected.is_terminal());
    }

    #[test]
    fn test_difficulty_parses_labels() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("Fácil".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Difícil".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("medium".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_yaml_names() {
        let yaml = serde_yaml_ng::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(yaml.trim(), "Hard");
        let parsed: Difficulty = serde_yaml_ng::from_str("Easy").unwrap();
        assert_eq!(parsed, Difficulty::Easy);
    }
}
