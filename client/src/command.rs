use common::games::tictactoe::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place { row: usize, col: usize },
    SetDifficulty(Difficulty),
    NewGame,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => Err("Empty command".to_string()),
        ["quit" | "exit" | "q"] => Ok(Command::Quit),
        ["new"] => Ok(Command::NewGame),
        ["help" | "?"] => Ok(Command::Help),
        [row, col] => {
            let row = parse_coordinate(row)?;
            let col = parse_coordinate(col)?;
            Ok(Command::Place { row, col })
        }
        [word] => word
            .parse::<Difficulty>()
            .map(Command::SetDifficulty)
            .map_err(|_| format!("Unknown command '{}'", word)),
        _ => Err(format!("Unknown command '{}'", line.trim())),
    }
}

fn parse_coordinate(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a row or column number", value))
}

pub const HELP_TEXT: &str = "\
Commands:
  <row> <col>   place X (rows and columns are 0-2)
  easy | hard   switch difficulty and start a new game
  new           start a new game
  quit          leave";
