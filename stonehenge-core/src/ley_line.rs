//! 地脉线（计分线）
//!
//! 地脉线按固定顺序生成：
//! 1. 每行一条水平线
//! 2. 两条边界线：除最后一行外每行的第一个格子 / 最后一个格子
//! 3. 从第一行到倒数第二行，每行起头的两条斜线（左下、右下）
//!
//! 渲染和状态比较都按位置访问地脉线，生成顺序不能改变。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell};
use crate::constants::UNCLAIMED_MARKER;
use crate::player::Player;

/// 地脉线
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeyLine {
    /// 归属（未占领为 None），一旦确定不再改变
    pub owner: Option<Player>,
    /// 成员格子
    pub cells: Vec<Cell>,
}

impl LeyLine {
    /// 创建未占领的地脉线
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { owner: None, cells }
    }

    pub fn is_claimed(&self) -> bool {
        self.owner.is_some()
    }

    /// 归属标记
    pub fn owner_marker(&self) -> char {
        self.owner.map_or(UNCLAIMED_MARKER, |player| player.marker())
    }

    /// 玩家在这条线上占领的格子数
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }

    /// 玩家是否已占领至少一半的格子
    pub fn reaches_half(&self, player: Player) -> bool {
        2 * self.count(player) >= self.cells.len()
    }

    /// 线上仍未占领的标签
    pub fn open_labels(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().filter_map(Cell::label)
    }

    /// 将标签对应的成员标记为玩家占领
    pub(crate) fn mark(&mut self, label: char, player: Player) {
        for cell in &mut self.cells {
            cell.claim(label, player);
        }
    }

    /// 尚未归属时，把线判给达到半数的玩家（走子方优先）
    pub(crate) fn attribute(&mut self, mover: Player) {
        if self.is_claimed() {
            return;
        }
        if self.reaches_half(mover) {
            self.owner = Some(mover);
        } else if self.reaches_half(mover.opponent()) {
            self.owner = Some(mover.opponent());
        }
    }
}

impl fmt::Display for LeyLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.owner_marker())?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", cell)?;
        }
        f.write_str("]")
    }
}

/// 生成全部地脉线
pub fn generate_ley_lines(board: &Board) -> Vec<LeyLine> {
    let mut lines = horizontal_lines(board);
    lines.extend(border_lines(board));
    lines.extend(diagonal_lines(board));
    lines
}

/// 水平线：每行一条
fn horizontal_lines(board: &Board) -> Vec<LeyLine> {
    board.rows().iter().map(|row| LeyLine::new(row.clone())).collect()
}

/// 边界线：左边界与右边界，不含最后一行
fn border_lines(board: &Board) -> [LeyLine; 2] {
    let upper = &board.rows()[..board.rows().len() - 1];
    let left = upper.iter().filter_map(|row| row.first().copied()).collect();
    let right = upper.iter().filter_map(|row| row.last().copied()).collect();
    [LeyLine::new(left), LeyLine::new(right)]
}

/// 标准斜线：每个非末行起头一条左下斜线和一条右下斜线
///
/// 左下斜线在每行取倒数第 `len` 个格子，右下斜线取第 `len - 1` 个格子（`len` 为起始行长度）。
/// 最后一行比上一行短，两个下标各向内收一格。
fn diagonal_lines(board: &Board) -> Vec<LeyLine> {
    let rows = board.rows();
    let last = rows.len() - 1;
    let mut lines = Vec::with_capacity(2 * last);

    for start in 0..last {
        let len = rows[start].len();
        let mut left = Vec::with_capacity(rows.len() - start);
        let mut right = Vec::with_capacity(rows.len() - start);

        for (offset, row) in rows[start..].iter().enumerate() {
            if start + offset == last {
                left.push(row[row.len() + 1 - len]);
                right.push(row[len - 2]);
            } else {
                left.push(row[row.len() - len]);
                right.push(row[len - 1]);
            }
        }

        lines.push(LeyLine::new(left));
        lines.push(LeyLine::new(right));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{generate_cells, Alphabet};
    use crate::constants::ley_line_count;

    fn lines_for(size: usize) -> Vec<String> {
        let board = generate_cells(size, &Alphabet::default()).unwrap();
        generate_ley_lines(&board)
            .iter()
            .map(|line| line.cells.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_size_one_lines() {
        assert_eq!(lines_for(1), vec!["AB", "C", "A", "B", "AC", "BC"]);
    }

    #[test]
    fn test_size_two_lines() {
        assert_eq!(
            lines_for(2),
            vec!["AB", "CDE", "FG", "AC", "BE", "ADG", "BDF", "CF", "EG"]
        );
    }

    #[test]
    fn test_size_three_lines() {
        assert_eq!(
            lines_for(3),
            vec![
                "AB", "CDE", "FGHI", "JKL", "ACF", "BEI", "ADHL", "BDGJ", "CGK", "EHK", "FJ",
                "IL"
            ]
        );
    }

    #[test]
    fn test_size_five_diagonals() {
        let lines = lines_for(5);
        assert_eq!(lines[8], "ADHMSY");
        assert_eq!(lines[9], "BDGKPU");
        assert_eq!(lines[16], "OU");
        assert_eq!(lines[17], "TY");
    }

    #[test]
    fn test_line_count_per_size() {
        for size in 1..=5 {
            assert_eq!(lines_for(size).len(), ley_line_count(size));
        }
    }

    #[test]
    fn test_generation_is_pure() {
        for size in 1..=5 {
            assert_eq!(lines_for(size), lines_for(size));
        }
    }

    #[test]
    fn test_attribute_to_mover() {
        let mut line = LeyLine::new(vec![Cell::Open('A'), Cell::Open('B')]);
        line.mark('A', Player::One);
        line.attribute(Player::One);
        assert_eq!(line.owner, Some(Player::One));
        assert_eq!(line.to_string(), "1 [1, B]");

        // 已归属的线不再改变
        line.mark('B', Player::Two);
        line.attribute(Player::Two);
        assert_eq!(line.owner, Some(Player::One));
    }

    #[test]
    fn test_attribute_needs_half() {
        let mut line = LeyLine::new(vec![Cell::Open('A'), Cell::Open('D'), Cell::Open('G')]);
        line.mark('A', Player::One);
        line.attribute(Player::One);
        assert_eq!(line.owner, None);
        assert_eq!(line.open_labels().collect::<Vec<_>>(), vec!['D', 'G']);

        line.mark('G', Player::One);
        line.attribute(Player::One);
        assert_eq!(line.owner, Some(Player::One));
    }
}
