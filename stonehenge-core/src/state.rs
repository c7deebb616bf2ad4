//! 游戏状态
//!
//! 状态发布后不再修改：每次走子都基于当前状态复制出一个新状态，
//! 新旧状态各自独占自己的棋盘和地脉线。

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::{check_size, Alphabet, Board};
use crate::constants::ley_line_count;
use crate::error::{GameError, Result};
use crate::ley_line::{generate_ley_lines, LeyLine};
use crate::player::Player;

/// 粗略评估：当前玩家已无棋可走
pub const ROUGH_LOSE: i32 = -1;
/// 粗略评估：一步之内无法判定
pub const ROUGH_UNDETERMINED: i32 = 0;
/// 粗略评估：存在一步取胜的走法
pub const ROUGH_WIN: i32 = 1;

/// 巨石阵游戏状态
///
/// 反序列化经过 [`StonehengeState::from_parts`] 校验。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawState")]
pub struct StonehengeState {
    /// 当前走子方
    current_player: Player,
    /// 棋盘尺寸
    size: usize,
    /// 格子归属
    board: Board,
    /// 地脉线
    ley_lines: Vec<LeyLine>,
}

/// 未经校验的状态字段
#[derive(Deserialize)]
struct RawState {
    current_player: Player,
    size: usize,
    board: Board,
    ley_lines: Vec<LeyLine>,
}

impl TryFrom<RawState> for StonehengeState {
    type Error = GameError;

    fn try_from(raw: RawState) -> Result<Self> {
        Self::from_parts(raw.current_player, raw.size, raw.board, raw.ley_lines)
    }
}

impl StonehengeState {
    /// 使用默认字母表创建新局面
    pub fn new(first_player: Player, size: usize) -> Result<Self> {
        Self::with_alphabet(first_player, size, &Alphabet::default())
    }

    /// 使用指定字母表创建新局面
    pub fn with_alphabet(first_player: Player, size: usize, alphabet: &Alphabet) -> Result<Self> {
        let board = Board::generate(size, alphabet)?;
        let ley_lines = generate_ley_lines(&board);
        Self::from_parts(first_player, size, board, ley_lines)
    }

    /// 从各部分构造，校验尺寸、棋盘形状、地脉线数量和每条线的长度
    pub fn from_parts(
        current_player: Player,
        size: usize,
        board: Board,
        ley_lines: Vec<LeyLine>,
    ) -> Result<Self> {
        check_size(size)?;
        let expected = ley_line_count(size);
        if ley_lines.len() != expected {
            return Err(GameError::LeyLineCount {
                expected,
                actual: ley_lines.len(),
            });
        }

        let template = Board::generate(size, &Alphabet::default())?;
        let row_lengths = |board: &Board| board.rows().iter().map(Vec::len).collect::<Vec<_>>();
        if row_lengths(&board) != row_lengths(&template) {
            return Err(GameError::InvalidLayout {
                reason: format!("board rows do not fit size {}", size),
            });
        }
        for (index, (line, expected)) in ley_lines
            .iter()
            .zip(generate_ley_lines(&template))
            .enumerate()
        {
            if line.cells.len() != expected.cells.len() {
                return Err(GameError::InvalidLayout {
                    reason: format!(
                        "ley line {} has {} cells, expected {}",
                        index,
                        line.cells.len(),
                        expected.cells.len()
                    ),
                });
            }
        }

        Ok(Self {
            current_player,
            size,
            board,
            ley_lines,
        })
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ley_lines(&self) -> &[LeyLine] {
        &self.ley_lines
    }

    /// 玩家已获得的地脉线数
    pub fn captured_count(&self, player: Player) -> usize {
        self.ley_lines
            .iter()
            .filter(|line| line.owner == Some(player))
            .count()
    }

    /// 已被占领的格子数
    pub fn claimed_cell_count(&self) -> usize {
        self.board.claimed_count()
    }

    /// 玩家是否已获得至少一半的地脉线
    pub fn has_majority(&self, player: Player) -> bool {
        2 * self.captured_count(player) >= self.ley_lines.len()
    }

    /// 终局：任一玩家获得至少一半的地脉线
    pub fn is_terminal(&self) -> bool {
        self.has_majority(Player::One) || self.has_majority(Player::Two)
    }

    /// 所有合法走法：按地脉线顺序首次出现的未占领标签，无重复
    pub fn possible_moves(&self) -> Vec<char> {
        if self.is_terminal() {
            return Vec::new();
        }

        let mut moves = Vec::new();
        for label in self.ley_lines.iter().flat_map(|line| line.open_labels()) {
            if !moves.contains(&label) {
                moves.push(label);
            }
        }
        moves
    }

    /// 走子，返回新状态；当前状态不变
    pub fn apply_move(&self, label: char) -> Result<Self> {
        // 终局时没有未占领的合法走法
        if self.is_terminal() {
            warn!("Rejected move {:?}: game is over", label);
            return Err(GameError::InvalidMove { label });
        }
        if !self.ley_lines.iter().any(|line| line.open_labels().any(|l| l == label)) {
            warn!("Rejected move {:?} for {}", label, self.current_player);
            return Err(GameError::InvalidMove { label });
        }

        let mover = self.current_player;
        let mut next = self.clone();

        for line in &mut next.ley_lines {
            line.mark(label, mover);
        }
        next.board.claim(label, mover);
        for line in &mut next.ley_lines {
            line.attribute(mover);
        }
        next.current_player = mover.opponent();

        Ok(next)
    }

    /// 一步之内的粗略评估
    ///
    /// 已终局返回 -1；存在使对手无棋可走的走法返回 1；否则返回 0。
    pub fn rough_outcome(&self) -> i32 {
        let moves = self.possible_moves();
        if moves.is_empty() {
            return ROUGH_LOSE;
        }

        let wins_now = moves.iter().any(|&label| {
            self.apply_move(label)
                .map(|next| next.is_terminal())
                .unwrap_or(false)
        });
        if wins_now {
            ROUGH_WIN
        } else {
            ROUGH_UNDETERMINED
        }
    }
}

/// 相等性只比较尺寸和地脉线，不考虑走子方
impl PartialEq for StonehengeState {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.ley_lines == other.ley_lines
    }
}

impl Eq for StonehengeState {}
