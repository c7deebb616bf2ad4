//! 错误类型定义

use thiserror::Error;

/// 规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 走法不对应任何未占领的格子
    #[error("Invalid move: {label:?} is not an unclaimed cell")]
    InvalidMove { label: char },

    /// 输入无法解析为走法
    #[error("Malformed move input: {input:?}")]
    MalformedMove { input: String },

    /// 不支持的棋盘尺寸
    #[error("Unsupported board size {size} (supported: {min}-{max})")]
    UnsupportedSize { size: usize, min: usize, max: usize },

    /// 字母表中存在重复标签
    #[error("Duplicate label {label:?} in alphabet")]
    DuplicateLabel { label: char },

    /// 标签与玩家标记或未占领标记冲突
    #[error("Label {label:?} is reserved for ownership markers")]
    ReservedLabel { label: char },

    /// 字母表不足以标记所有格子
    #[error("Alphabet too short: {needed} labels needed, {available} available")]
    AlphabetTooShort { needed: usize, available: usize },

    /// 地脉线数量与尺寸不符
    #[error("Ley line count mismatch: expected {expected}, got {actual}")]
    LeyLineCount { expected: usize, actual: usize },

    /// 棋盘或地脉线的形状与尺寸不符
    #[error("Invalid layout: {reason}")]
    InvalidLayout { reason: String },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
