//! 巨石阵（Stonehenge）规则库
//!
//! 包含:
//! - 三角形棋盘与格子标签生成
//! - 地脉线生成与归属判定
//! - 不可变的游戏状态与走子
//! - 供搜索引擎使用的 `Game` / `GameState` 抽象
//! - 各尺寸棋盘的文本渲染

mod board;
mod constants;
mod error;
mod game;
mod ley_line;
mod player;
mod render;
mod state;

pub use board::{check_size, generate_cells, Alphabet, Board, Cell};
pub use constants::*;
pub use error::{GameError, Result};
pub use game::{Game, GameState, MoveOf, Outcome, StonehengeGame};
pub use ley_line::{generate_ley_lines, LeyLine};
pub use player::Player;
pub use state::{StonehengeState, ROUGH_LOSE, ROUGH_UNDETERMINED, ROUGH_WIN};
