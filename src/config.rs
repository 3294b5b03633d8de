//! Runtime configuration.
//!
//! Environment variables give the defaults; command-line flags override them.
//!
//! | Variable | Flag | Meaning |
//! |----------|------|---------|
//! | `SNAKE_ARENA_MODE` | `--mode` | `walls` or `pass-through` |
//! | `SNAKE_ARENA_PLAYER` | `--player` | username; scores and live status are only sent with one |
//! | `SNAKE_ARENA_SEED` | `--seed` | food RNG seed |
//! | `SNAKE_ARENA_LOG_PATH` | `--log-path` | log file; logging is off without it |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::types::{GameMode, PlayerIdentity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaConfig {
    pub mode: GameMode,
    pub player: Option<PlayerIdentity>,
    pub seed: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            player: None,
            seed: time_seed(),
            log_path: None,
        }
    }
}

impl ArenaConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to
    /// the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            mode: get("SNAKE_ARENA_MODE")
                .and_then(|s| GameMode::from_str(&s))
                .unwrap_or(defaults.mode),
            player: get("SNAKE_ARENA_PLAYER").map(player_identity),
            seed: get("SNAKE_ARENA_SEED")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.seed),
            log_path: get("SNAKE_ARENA_LOG_PATH").map(PathBuf::from),
        }
    }
}

/// Local players are identified by their username.
fn player_identity(username: String) -> PlayerIdentity {
    PlayerIdentity::new(username.clone(), username)
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(name = "snake-arena", version, about)]
pub struct Cli {
    /// Game mode: walls or pass-through
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<GameMode>,

    /// Username to play as
    #[arg(long)]
    pub player: Option<String>,

    /// Food RNG seed
    #[arg(long)]
    pub seed: Option<u32>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,
}

impl Cli {
    /// Overlay the flags that were given on top of `base`.
    pub fn merge(self, base: ArenaConfig) -> ArenaConfig {
        ArenaConfig {
            mode: self.mode.unwrap_or(base.mode),
            player: self
                .player
                .filter(|p| !p.trim().is_empty())
                .map(|p| player_identity(p.trim().to_string()))
                .or(base.player),
            seed: self.seed.unwrap_or(base.seed),
            log_path: self.log_path.or(base.log_path),
        }
    }
}

fn parse_mode(s: &str) -> Result<GameMode, String> {
    GameMode::from_str(s).ok_or_else(|| format!("unknown mode '{s}' (walls | pass-through)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_variables() {
        let cfg = ArenaConfig::from_lookup(lookup(&[
            ("SNAKE_ARENA_MODE", "walls"),
            ("SNAKE_ARENA_PLAYER", " viper "),
            ("SNAKE_ARENA_SEED", "42"),
            ("SNAKE_ARENA_LOG_PATH", "/tmp/snake.log"),
        ]));
        assert_eq!(cfg.mode, GameMode::Walls);
        assert_eq!(cfg.player, Some(PlayerIdentity::new("viper", "viper")));
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/snake.log")));
    }

    #[test]
    fn bad_or_empty_values_fall_back() {
        let cfg = ArenaConfig::from_lookup(lookup(&[
            ("SNAKE_ARENA_MODE", "diagonal"),
            ("SNAKE_ARENA_PLAYER", "   "),
            ("SNAKE_ARENA_LOG_PATH", ""),
        ]));
        assert_eq!(cfg.mode, GameMode::PassThrough);
        assert_eq!(cfg.player, None);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn flags_override_environment() {
        let base = ArenaConfig::from_lookup(lookup(&[
            ("SNAKE_ARENA_MODE", "walls"),
            ("SNAKE_ARENA_PLAYER", "viper"),
            ("SNAKE_ARENA_SEED", "1"),
        ]));
        let cli = Cli::parse_from(["snake-arena", "--mode", "pass-through", "--seed", "9"]);
        let cfg = cli.merge(base);

        assert_eq!(cfg.mode, GameMode::PassThrough);
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.player.map(|p| p.username), Some("viper".to_string()));
    }

    #[test]
    fn unknown_mode_flag_is_rejected() {
        assert!(Cli::try_parse_from(["snake-arena", "--mode", "diagonal"]).is_err());
    }
}
