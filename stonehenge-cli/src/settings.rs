//! 对局设置
//!
//! 设置文件为 JSON，默认位于 `<config_dir>/stonehenge/settings.json`。
//! 文件缺失或格式无效时回退到默认设置。

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stonehenge_ai::{AiConfig, Strategy};
use stonehenge_core::{Alphabet, Player};
use thiserror::Error;
use tracing::{info, warn};

/// 无法识别的控制方
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown controller: {0:?} (expected human, recursive, iterative or random)")]
pub struct UnknownController(pub String);

/// 无法识别的玩家
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown player: {0:?} (expected p1 or p2)")]
pub struct UnknownPlayer(pub String);

/// 某一方由谁操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    /// 从输入读取走法
    #[default]
    Human,
    /// 由引擎选步
    Engine(Strategy),
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Controller::Human => f.write_str("human"),
            Controller::Engine(strategy) => write!(f, "{} engine", strategy),
        }
    }
}

impl FromStr for Controller {
    type Err = UnknownController;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("human") {
            return Ok(Controller::Human);
        }
        s.parse::<Strategy>()
            .map(Controller::Engine)
            .map_err(|_| UnknownController(s.to_string()))
    }
}

/// 解析命令行中的玩家名（p1 / p2 / 1 / 2）
pub fn parse_player(s: &str) -> std::result::Result<Player, UnknownPlayer> {
    match s.trim().to_ascii_lowercase().as_str() {
        "p1" | "1" => Ok(Player::One),
        "p2" | "2" => Ok(Player::Two),
        _ => Err(UnknownPlayer(s.to_string())),
    }
}

/// 对局设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaySettings {
    /// 棋盘尺寸
    pub size: usize,
    /// 先手玩家
    pub first_player: Player,
    /// 玩家一的控制方
    pub p1: Controller,
    /// 玩家二的控制方
    pub p2: Controller,
    /// 格子标签
    pub alphabet: Alphabet,
    /// 随机策略的种子
    pub seed: Option<u64>,
}

impl Default for PlaySettings {
    fn default() -> Self {
        Self {
            size: 2,
            first_player: Player::One,
            p1: Controller::Human,
            p2: Controller::Engine(Strategy::default()),
            alphabet: Alphabet::default(),
            seed: None,
        }
    }
}

impl PlaySettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("stonehenge");
            path.push("settings.json");
            path
        })
    }

    /// 从默认位置加载设置
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("No config directory available, using default settings");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// 从指定文件加载设置
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("Settings file {:?} not found, using default settings", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Invalid settings file: {}, using default settings", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Cannot read settings file: {}, using default settings", e);
                Self::default()
            }
        }
    }

    /// 保存设置到文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create config directory {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("Cannot serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Cannot write settings file {:?}", path))?;

        info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// 指定玩家的控制方
    pub fn controller(&self, player: Player) -> Controller {
        match player {
            Player::One => self.p1,
            Player::Two => self.p2,
        }
    }

    /// 指定玩家的引擎配置，人类玩家返回 None
    pub fn ai_config(&self, player: Player) -> Option<AiConfig> {
        match self.controller(player) {
            Controller::Human => None,
            Controller::Engine(strategy) => Some(AiConfig {
                strategy,
                seed: self.seed,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_from_str() {
        assert_eq!("human".parse::<Controller>(), Ok(Controller::Human));
        assert_eq!(
            "Recursive".parse::<Controller>(),
            Ok(Controller::Engine(Strategy::Recursive))
        );
        assert!("robot".parse::<Controller>().is_err());
    }

    #[test]
    fn test_parse_player() {
        assert_eq!(parse_player("p1"), Ok(Player::One));
        assert_eq!(parse_player("2"), Ok(Player::Two));
        assert!(parse_player("p3").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = PlaySettings::load_from(&dir.path().join("settings.json"));
        assert_eq!(settings, PlaySettings::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(PlaySettings::load_from(&path), PlaySettings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"size": 3, "p2": {"engine": "random"}}"#).unwrap();

        let settings = PlaySettings::load_from(&path);
        assert_eq!(settings.size, 3);
        assert_eq!(settings.p1, Controller::Human);
        assert_eq!(settings.p2, Controller::Engine(Strategy::Random));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = PlaySettings {
            size: 4,
            first_player: Player::Two,
            p1: Controller::Engine(Strategy::Recursive),
            seed: Some(9),
            ..PlaySettings::default()
        };

        settings.save_to(&path).unwrap();
        assert_eq!(PlaySettings::load_from(&path), settings);
    }

    #[test]
    fn test_ai_config() {
        let settings = PlaySettings {
            seed: Some(3),
            ..PlaySettings::default()
        };
        assert_eq!(settings.ai_config(Player::One), None);
        assert_eq!(
            settings.ai_config(Player::Two),
            Some(AiConfig {
                strategy: Strategy::Iterative,
                seed: Some(3),
            })
        );
    }
}
