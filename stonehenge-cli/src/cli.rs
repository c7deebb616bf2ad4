//! 命令行参数

use std::path::PathBuf;

use clap::Parser;
use stonehenge_core::Player;

use crate::settings::{parse_player, Controller, PlaySettings};

/// Stonehenge 命令行
#[derive(Parser, Debug)]
#[command(name = "stonehenge")]
#[command(about = "Play Stonehenge in the terminal against minimax engines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size (1-5)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Player who moves first (p1 or p2)
    #[arg(long, value_parser = parse_player)]
    pub first: Option<Player>,

    /// Controller for p1: human, recursive, iterative or random
    #[arg(long)]
    pub p1: Option<Controller>,

    /// Controller for p2: human, recursive, iterative or random
    #[arg(long)]
    pub p2: Option<Controller>,

    /// Seed for the random strategy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Settings file (defaults to the user config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    pub save: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 设置文件路径：命令行优先
    pub fn settings_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(PlaySettings::settings_path)
    }

    /// 用命令行参数覆盖文件中的设置
    pub fn apply(&self, settings: &mut PlaySettings) {
        if let Some(size) = self.size {
            settings.size = size;
        }
        if let Some(first) = self.first {
            settings.first_player = first;
        }
        if let Some(p1) = self.p1 {
            settings.p1 = p1;
        }
        if let Some(p2) = self.p2 {
            settings.p2 = p2;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stonehenge_ai::Strategy;

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "stonehenge",
            "--size",
            "3",
            "--first",
            "p2",
            "--p1",
            "random",
            "--seed",
            "11",
        ]);
        let mut settings = PlaySettings::default();
        cli.apply(&mut settings);

        assert_eq!(settings.size, 3);
        assert_eq!(settings.first_player, Player::Two);
        assert_eq!(settings.p1, Controller::Engine(Strategy::Random));
        assert_eq!(settings.p2, Controller::Engine(Strategy::Iterative));
        assert_eq!(settings.seed, Some(11));
    }

    #[test]
    fn test_no_flags_keeps_settings() {
        let cli = Cli::parse_from(["stonehenge"]);
        let mut settings = PlaySettings {
            size: 5,
            ..PlaySettings::default()
        };
        cli.apply(&mut settings);
        assert_eq!(settings.size, 5);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_rejects_unknown_controller() {
        assert!(Cli::try_parse_from(["stonehenge", "--p2", "oracle"]).is_err());
    }
}
