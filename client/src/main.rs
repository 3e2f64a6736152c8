mod command;
mod config;
mod runner;

use clap::Parser;
use common::games::tictactoe::Difficulty;
use common::{log, logger};

use config::get_config_manager;
use runner::GameRunner;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// easy (random moves) or hard (perfect play)
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// Seed for the easy-mode random moves
    #[arg(long)]
    seed: Option<u64>,
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    use_log_prefix: bool,
    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let loaded = config_manager.get_config();

    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    if let Some(difficulty) = args.difficulty {
        config.game.difficulty = difficulty;
    }
    if args.seed.is_some() {
        config.game.seed = args.seed;
    }
    config.use_log_prefix |= args.use_log_prefix;

    let prefix = if config.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if let Err(e) = &loaded {
        log!("Failed to load config, using defaults: {}", e);
    }
    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let rng = config.game.create_rng();
    log!("Starting {} game, seed {}", config.game.difficulty, rng.seed());

    let mut runner = GameRunner::new(config.game.create_game(), rng);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    runner.run(stdin.lock(), &mut stdout)?;

    log!("Session finished");
    Ok(())
}
