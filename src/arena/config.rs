//! Match, tournament and file-level configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{ArenaError, GameConfig, DEFAULT_BOARD_SIZE};
use crate::games::reversi::DiscWeightHeuristic;
use crate::players::PlayerKind;
use crate::search::SearchConfig;

/// Per-match settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Wall-clock budget for a single `choose_move` call.
    pub time_limit: Duration,

    /// Print the board after every ply.
    pub show_moves: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(5),
            show_moves: false,
        }
    }
}

impl MatchConfig {
    /// Create a match config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-move time limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Print the board after every ply.
    pub fn with_show_moves(mut self, show: bool) -> Self {
        self.show_moves = show;
        self
    }
}

/// Settings shared by every match of a tournament.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub match_config: MatchConfig,
}

impl TournamentConfig {
    /// Create a tournament config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the settings used for each match.
    pub fn with_match_config(mut self, config: MatchConfig) -> Self {
        self.match_config = config;
        self
    }
}

/// Everything the command-line runner needs, as read from a TOML file.
///
/// ```toml
/// board_size = 6
/// games = 10
/// time_limit_secs = 1.5
/// waivers = [false, true]
/// players = ["heuristic", "random"]
/// depth = 4
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArenaConfig {
    pub board_size: usize,
    pub games: u32,
    pub time_limit_secs: f64,
    pub waivers: [bool; 2],
    pub show_moves: bool,
    /// Seed for random players; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub depth: u32,
    pub edge_weight: i32,
    pub players: [PlayerKind; 2],
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            games: 1,
            time_limit_secs: 5.0,
            waivers: [false, false],
            show_moves: false,
            seed: None,
            depth: SearchConfig::default().depth,
            edge_weight: DiscWeightHeuristic::default().edge_weight,
            players: [PlayerKind::Heuristic, PlayerKind::Random],
        }
    }
}

impl ArenaConfig {
    /// Parse a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ArenaError> {
        toml::from_str(content).map_err(|e| ArenaError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArenaError> {
        let path = path.as_ref();
        info!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| ArenaError::Config(format!("{}: {e}", path.display())))
    }

    /// Check the values that cannot be expressed in the types.
    pub fn validate(&self) -> Result<(), ArenaError> {
        self.game_config().validate()?;
        if self.games == 0 {
            return Err(ArenaError::Config("games must be at least 1".to_string()));
        }
        self.time_limit()?;
        Ok(())
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.board_size)
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::default().with_depth(self.depth)
    }

    pub fn heuristic(&self) -> DiscWeightHeuristic {
        DiscWeightHeuristic::new(self.edge_weight)
    }

    /// The per-move time limit as a `Duration`.
    pub fn time_limit(&self) -> Result<Duration, ArenaError> {
        let invalid = || {
            ArenaError::Config(format!(
                "time_limit_secs must be a positive number of seconds, got {}",
                self.time_limit_secs
            ))
        };
        if self.time_limit_secs <= 0.0 {
            return Err(invalid());
        }
        Duration::try_from_secs_f64(self.time_limit_secs).map_err(|_| invalid())
    }

    pub fn tournament_config(&self) -> Result<TournamentConfig, ArenaError> {
        Ok(TournamentConfig::new().with_match_config(
            MatchConfig::new()
                .with_time_limit(self.time_limit()?)
                .with_show_moves(self.show_moves),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_config_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.time_limit, Duration::from_secs(5));
        assert!(!config.show_moves);
    }

    #[test]
    fn test_match_config_builder() {
        let config = MatchConfig::new()
            .with_time_limit(Duration::from_millis(250))
            .with_show_moves(true);

        assert_eq!(config.time_limit, Duration::from_millis(250));
        assert!(config.show_moves);
    }

    #[test]
    fn test_tournament_config_serialization() {
        let config = TournamentConfig::new()
            .with_match_config(MatchConfig::new().with_time_limit(Duration::from_millis(10)));

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TournamentConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_arena_config_empty_is_default() {
        let config = ArenaConfig::from_toml_str("").unwrap();
        assert_eq!(config, ArenaConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_arena_config_parse() {
        let config = ArenaConfig::from_toml_str(
            r#"
            board_size = 6
            games = 10
            time_limit_secs = 1.5
            waivers = [false, true]
            seed = 42
            edge_weight = 3
            players = ["alphabeta", "minimax"]
            "#,
        )
        .unwrap();

        assert_eq!(config.board_size, 6);
        assert_eq!(config.games, 10);
        assert_eq!(config.waivers, [false, true]);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.heuristic().edge_weight, 3);
        assert_eq!(config.players, [PlayerKind::AlphaBeta, PlayerKind::Minimax]);
        assert_eq!(
            config.tournament_config().unwrap().match_config.time_limit,
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn test_arena_config_rejects_unknown_fields() {
        let err = ArenaConfig::from_toml_str("board = 8").unwrap_err();
        assert!(matches!(err, ArenaError::Config(_)));
    }

    #[test]
    fn test_arena_config_validate() {
        let odd = ArenaConfig {
            board_size: 7,
            ..ArenaConfig::default()
        };
        assert!(odd.validate().is_err());

        let no_games = ArenaConfig {
            games: 0,
            ..ArenaConfig::default()
        };
        assert!(no_games.validate().is_err());

        let no_time = ArenaConfig {
            time_limit_secs: 0.0,
            ..ArenaConfig::default()
        };
        assert!(no_time.validate().is_err());

        let nan = ArenaConfig {
            time_limit_secs: f64::NAN,
            ..ArenaConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_arena_config_rejects_overflowing_time_limit() {
        let huge = ArenaConfig::from_toml_str("time_limit_secs = 1e30").unwrap();

        assert!(matches!(huge.validate(), Err(ArenaError::Config(_))));
        assert!(huge.tournament_config().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = ArenaConfig::load("/nonexistent/arena.toml").unwrap_err();
        assert!(matches!(err, ArenaError::Io(_)));
    }
}
