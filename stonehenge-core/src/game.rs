//! 游戏规则抽象
//!
//! 搜索引擎只依赖 [`Game`] 与 [`GameState`] 两个 trait，
//! 不关心具体是哪一种游戏。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::player::Player;
use crate::state::StonehengeState;

/// 游戏状态
pub trait GameState: Clone + PartialEq {
    /// 走法类型
    type Move: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// 当前走子方
    fn current_player(&self) -> Player;

    /// 所有合法走法，终局时为空
    fn possible_moves(&self) -> Vec<Self::Move>;

    /// 走子，返回新状态
    fn apply_move(&self, mv: &Self::Move) -> Result<Self>;

    /// 一步之内的粗略评估（-1、0、1）
    fn rough_outcome(&self) -> i32;
}

/// 走法类型简写
pub type MoveOf<G> = <<G as Game>::State as GameState>::Move;

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// 某方获胜
    Winner(Player),
    /// 平局
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Tie => f.write_str("tie"),
        }
    }
}

/// 游戏规则
pub trait Game {
    /// 状态类型
    type State: GameState;

    /// 当前局面
    fn current_state(&self) -> &Self::State;

    /// 是否终局
    fn is_over(&self, state: &Self::State) -> bool;

    /// 比较双方成绩得出的结果
    fn winner(&self, state: &Self::State) -> Outcome;

    /// 指定玩家是否为胜者
    fn is_winner(&self, player: Player, state: &Self::State) -> bool {
        self.winner(state) == Outcome::Winner(player)
    }

    /// 终局时返回结果，否则返回 None
    fn outcome(&self, state: &Self::State) -> Option<Outcome> {
        self.is_over(state).then(|| self.winner(state))
    }

    /// 把输入文本解析为走法
    fn parse_move(&self, text: &str) -> Result<<Self::State as GameState>::Move>;

    /// 规则说明
    fn instructions(&self) -> &'static str;
}

impl GameState for StonehengeState {
    type Move = char;

    fn current_player(&self) -> Player {
        StonehengeState::current_player(self)
    }

    fn possible_moves(&self) -> Vec<char> {
        StonehengeState::possible_moves(self)
    }

    fn apply_move(&self, mv: &char) -> Result<Self> {
        StonehengeState::apply_move(self, *mv)
    }

    fn rough_outcome(&self) -> i32 {
        StonehengeState::rough_outcome(self)
    }
}

const INSTRUCTIONS: &str = "Stonehenge is played on a triangular board of lettered cells. \
The cells are grouped into ley-lines (marked @): every row, the two borders and the diagonals. \
Players take turns claiming a cell by entering its letter. \
The first player to claim at least half of the cells in a ley-line captures that ley-line permanently. \
The first player to capture at least half of all ley-lines wins the game.";

/// 巨石阵游戏
#[derive(Debug, Clone)]
pub struct StonehengeGame {
    /// 先手玩家
    first_player: Player,
    /// 当前局面
    current_state: StonehengeState,
}

impl StonehengeGame {
    /// 从已有局面创建
    pub fn new(first_player: Player, current_state: StonehengeState) -> Self {
        Self {
            first_player,
            current_state,
        }
    }

    /// 按尺寸开新局
    pub fn with_size(first_player: Player, size: usize) -> Result<Self> {
        Ok(Self::new(first_player, StonehengeState::new(first_player, size)?))
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// 在当前局面上走子
    pub fn play(&mut self, label: char) -> Result<()> {
        self.current_state = self.current_state.apply_move(label)?;
        Ok(())
    }
}

impl Game for StonehengeGame {
    type State = StonehengeState;

    fn current_state(&self) -> &StonehengeState {
        &self.current_state
    }

    fn is_over(&self, state: &StonehengeState) -> bool {
        state.is_terminal()
    }

    fn winner(&self, state: &StonehengeState) -> Outcome {
        let one = state.captured_count(Player::One);
        let two = state.captured_count(Player::Two);
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::One),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Two),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// 走法即格子标签本身
    fn parse_move(&self, text: &str) -> Result<char> {
        let mut chars = text.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(label), None) => Ok(label),
            _ => Err(GameError::MalformedMove {
                input: text.to_string(),
            }),
        }
    }

    fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }
}

/// 两局相等当且仅当当前局面相等
impl PartialEq for StonehengeGame {
    fn eq(&self, other: &Self) -> bool {
        self.current_state == other.current_state
    }
}
