//! 错误类型定义

use stonehenge_core::GameError;
use thiserror::Error;

/// 容器错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// 从空容器中取元素
    #[error("Cannot remove from an empty {kind}")]
    Empty { kind: &'static str },
}

/// 搜索错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// 规则错误
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    /// 对已终局的局面搜索
    #[error("Game is already over")]
    GameOver,

    /// 每步汇总值的数量与合法走法数量不符
    #[error("Aggregated {values} values for {moves} moves")]
    MoveCountMismatch { values: usize, moves: usize },

    /// 非终局局面没有任何合法走法
    #[error("Non-terminal state has no legal moves")]
    NoLegalMoves,

    /// 找不到产生目标局面的走法
    #[error("No legal move leads to the selected successor state")]
    NoMatchingSuccessor,

    /// 搜索结束时仍有节点未评分
    #[error("Search node {0} was left without a score")]
    Unresolved(usize),

    /// 容器错误
    #[error("Container error: {0}")]
    Container(#[from] ContainerError),
}

/// 未知的策略名称
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown strategy: {0:?} (expected recursive, iterative or random)")]
pub struct UnknownStrategy(pub String);

/// 搜索结果类型
pub type Result<T> = std::result::Result<T, SearchError>;
