//! 巨石阵 AI 引擎
//!
//! 包含:
//! - 递归 Minimax 穷举
//! - 显式栈 + 显式搜索树的迭代 Minimax
//! - 随机走子
//! - 栈与随机袋两种容器

mod container;
mod engine;
mod error;
mod iterative;
mod random;
mod recursive;
mod tree;

pub use container::{Container, Sack, Stack};
pub use engine::{AiConfig, AiEngine, Strategy};
pub use error::{ContainerError, Result, SearchError, UnknownStrategy};
pub use iterative::{
    iterative_minimax, IterativeReport, IterativeSearch, LogEntry, LOSS_SCORE, TIE_SCORE,
    WIN_SCORE,
};
pub use random::random_move;
pub use recursive::{recursive_minimax, RecursiveSearch, TERMINAL_VALUE};
pub use tree::{NodeId, NodeStatus, SearchTree, TreeNode};
