//! 引擎配置与统一入口

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stonehenge_core::{Game, MoveOf};
use tracing::info;

use crate::error::{Result, UnknownStrategy};
use crate::iterative::IterativeSearch;
use crate::random::random_move;
use crate::recursive::RecursiveSearch;

/// 选步策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// 递归穷举
    Recursive,
    /// 显式栈穷举
    #[default]
    Iterative,
    /// 随机合法走法
    Random,
}

impl Strategy {
    /// 所有策略
    pub const ALL: [Strategy; 3] = [Strategy::Recursive, Strategy::Iterative, Strategy::Random];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::Iterative => "iterative",
            Strategy::Random => "random",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == name)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// AI 配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub strategy: Strategy,
    /// 随机策略的种子，None 表示每次不同
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AiConfig {
    pub fn from_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            seed: None,
        }
    }
}

/// AI 引擎
#[derive(Debug, Default)]
pub struct AiEngine {
    config: AiConfig,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            nodes_searched: 0,
        }
    }

    /// 从策略创建
    pub fn from_strategy(strategy: Strategy) -> Self {
        Self::new(AiConfig::from_strategy(strategy))
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 为当前局面选一步
    pub fn choose_move<G: Game>(&mut self, game: &G) -> Result<MoveOf<G>> {
        self.nodes_searched = 0;

        let mv = match self.config.strategy {
            Strategy::Recursive => {
                let mut search = RecursiveSearch::new();
                let mv = search.search(game)?;
                self.nodes_searched = search.nodes_searched();
                mv
            }
            Strategy::Iterative => {
                let mut search = IterativeSearch::new();
                let mv = search.search(game)?;
                self.nodes_searched = search.nodes_searched();
                mv
            }
            Strategy::Random => random_move(game, self.config.seed)?,
        };

        info!(
            "{} engine chose {} after {} nodes",
            self.config.strategy, mv, self.nodes_searched
        );
        Ok(mv)
    }

    /// 上一次选步搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}
