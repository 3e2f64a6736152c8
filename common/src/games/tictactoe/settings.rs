use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::games::SessionRng;
use super::game_state::TicTacToeGameState;
use super::types::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TicTacToeSettings {
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Fixed seed for easy-mode moves; a fresh one is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TicTacToeSettings {
    pub fn create_rng(&self) -> SessionRng {
        match self.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        }
    }

    pub fn create_game(&self) -> TicTacToeGameState {
        TicTacToeGameState::new(self.difficulty)
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
