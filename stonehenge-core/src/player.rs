//! 玩家定义

use std::fmt;

use serde::{Deserialize, Serialize};

/// 玩家
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// 一号玩家
    One,
    /// 二号玩家
    Two,
}

impl Player {
    /// 获取对手
    pub fn opponent(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 占领格子和地脉线时使用的标记
    pub fn marker(&self) -> char {
        match self {
            Player::One => '1',
            Player::Two => '2',
        }
    }

    /// 从标记解析
    pub fn from_marker(c: char) -> Option<Player> {
        match c {
            '1' => Some(Player::One),
            '2' => Some(Player::Two),
            _ => None,
        }
    }

    /// 简称
    pub fn name(&self) -> &'static str {
        match self {
            Player::One => "p1",
            Player::Two => "p2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
