//! reversi-arena: play Reversi matches and tournaments from the command line.
//!
//! Settings come from an optional TOML file (`--config`); command-line
//! flags override file values.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use reversi_arena::{ArenaConfig, GameResult, GameRng, Player, PlayerId, PlayerKind, Reversi, Tournament};

#[derive(Parser, Debug)]
#[command(name = "reversi-arena")]
#[command(about = "Play Reversi between search agents, random players and humans")]
struct Cli {
    /// TOML file with arena settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// First player (random, human, minimax, alphabeta, heuristic)
    #[arg(long)]
    player_a: Option<PlayerKind>,

    /// Second player
    #[arg(long)]
    player_b: Option<PlayerKind>,

    /// Number of games; seats alternate between games
    #[arg(long)]
    games: Option<u32>,

    /// Board side length (even, 4 to 16)
    #[arg(long)]
    board_size: Option<usize>,

    /// Per-move time limit in seconds
    #[arg(long)]
    time_limit: Option<f64>,

    /// Search depth of the heuristic player
    #[arg(long)]
    depth: Option<u32>,

    /// Exempt the first player from the time limit
    #[arg(long)]
    waive_a: bool,

    /// Exempt the second player from the time limit
    #[arg(long)]
    waive_b: bool,

    /// Seed for random players
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board after every move
    #[arg(long)]
    show_moves: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Load the file config, if any, and apply flag overrides.
    fn arena_config(&self) -> Result<ArenaConfig> {
        let mut config = match &self.config {
            Some(path) => ArenaConfig::load(path)?,
            None => ArenaConfig::default(),
        };

        if let Some(kind) = self.player_a {
            config.players[0] = kind;
        }
        if let Some(kind) = self.player_b {
            config.players[1] = kind;
        }
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(size) = self.board_size {
            config.board_size = size;
        }
        if let Some(secs) = self.time_limit {
            config.time_limit_secs = secs;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config.waivers[0] |= self.waive_a;
        config.waivers[1] |= self.waive_b;
        config.show_moves |= self.show_moves;

        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = cli.arena_config()?;
    info!(?config, "arena configured");

    let engine = Reversi::from_config(config.game_config())?;
    let search = config.search_config();
    let heuristic = config.heuristic();
    let mut rng = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let [kind_a, kind_b] = config.players;
    let mut player_a = kind_a.build(&search, heuristic, rng.fork());
    let mut player_b = kind_b.build(&search, heuristic, rng.fork());

    let tournament = Tournament::new(engine, config.tournament_config()?);
    let players: [&mut dyn Player; 2] = [player_a.as_mut(), player_b.as_mut()];
    let stats = tournament.play_n_games(players, config.games, config.waivers)?;

    if config.games == 1 {
        if let Some(game) = stats.games.first() {
            match game.outcome.result {
                GameResult::Winner(side) => {
                    let name = if side == PlayerId::FIRST {
                        player_a.name()
                    } else {
                        player_b.name()
                    };
                    println!("Player \"{side}\" ({name}) won");
                }
                GameResult::Draw => println!("Draw"),
            }
        }
    } else {
        println!("Results:");
        print!("{stats}");
    }

    Ok(())
}
