//! 棋盘与格子
//!
//! 棋盘是一个三角形点阵：共 `size + 1` 行，前 `size` 行长度依次为 `2..=size+1`，
//! 最后一行长度为 `size`。格子按行优先顺序从字母表中取标签。

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    cell_count, DEFAULT_ALPHABET, MAX_BOARD_SIZE, MIN_BOARD_SIZE, UNCLAIMED_MARKER,
};
use crate::error::{GameError, Result};
use crate::player::Player;

/// 格子标签字母表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<char>", into = "Vec<char>")]
pub struct Alphabet {
    labels: Vec<char>,
}

impl Alphabet {
    /// 创建字母表，标签不能重复，也不能与归属标记相同
    pub fn new(labels: Vec<char>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(labels.len());
        for &label in &labels {
            if label == UNCLAIMED_MARKER || Player::from_marker(label).is_some() {
                return Err(GameError::ReservedLabel { label });
            }
            if !seen.insert(label) {
                return Err(GameError::DuplicateLabel { label });
            }
        }
        Ok(Self { labels })
    }

    /// 全部标签
    pub fn labels(&self) -> &[char] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            labels: DEFAULT_ALPHABET.to_vec(),
        }
    }
}

impl TryFrom<Vec<char>> for Alphabet {
    type Error = GameError;

    fn try_from(labels: Vec<char>) -> Result<Self> {
        Self::new(labels)
    }
}

impl From<Alphabet> for Vec<char> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.labels
    }
}

/// 格子：未占领时保留标签，占领后记录归属
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// 未占领
    Open(char),
    /// 已被玩家占领
    Claimed(Player),
}

impl Cell {
    /// 未占领格子的标签
    pub fn label(&self) -> Option<char> {
        match self {
            Cell::Open(label) => Some(*label),
            Cell::Claimed(_) => None,
        }
    }

    /// 占领者
    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Open(_) => None,
            Cell::Claimed(player) => Some(*player),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Cell::Open(_))
    }

    /// 显示用字符：标签或玩家标记
    pub fn symbol(&self) -> char {
        match self {
            Cell::Open(label) => *label,
            Cell::Claimed(player) => player.marker(),
        }
    }

    /// 如果是指定标签则改为玩家占领，返回是否发生替换
    pub(crate) fn claim(&mut self, label: char, player: Player) -> bool {
        if *self == Cell::Open(label) {
            *self = Cell::Claimed(player);
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 检查尺寸是否受支持
pub fn check_size(size: usize) -> Result<()> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GameError::UnsupportedSize {
            size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        })
    }
}

/// 棋盘（按行存放格子）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// 按尺寸生成棋盘
    pub fn generate(size: usize, alphabet: &Alphabet) -> Result<Self> {
        check_size(size)?;

        let needed = cell_count(size);
        if alphabet.len() < needed {
            return Err(GameError::AlphabetTooShort {
                needed,
                available: alphabet.len(),
            });
        }

        let mut labels = alphabet.labels().iter().copied();
        let mut rows = Vec::with_capacity(size + 1);
        let row_lengths = (2..=size + 1).chain(std::iter::once(size));
        for len in row_lengths {
            let row: Vec<Cell> = labels.by_ref().take(len).map(Cell::Open).collect();
            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// 从已有的行构造
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// 所有格子（行优先）
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// 已被占领的格子数
    pub fn claimed_count(&self) -> usize {
        self.cells().filter(|cell| !cell.is_open()).count()
    }

    /// 是否存在指定标签的未占领格子
    pub fn has_open(&self, label: char) -> bool {
        self.cells().any(|cell| *cell == Cell::Open(label))
    }

    /// 将指定标签的格子标记为玩家占领
    pub(crate) fn claim(&mut self, label: char, player: Player) {
        for cell in self.rows.iter_mut().flatten() {
            cell.claim(label, player);
        }
    }
}

/// 生成指定尺寸的格子布局
pub fn generate_cells(size: usize, alphabet: &Alphabet) -> Result<Board> {
    Board::generate(size, alphabet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(board: &Board) -> Vec<String> {
        board
            .rows()
            .iter()
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_generate_size_two() {
        let board = generate_cells(2, &Alphabet::default()).unwrap();
        assert_eq!(labels(&board), vec!["AB", "CDE", "FG"]);
    }

    #[test]
    fn test_generate_size_three() {
        let board = generate_cells(3, &Alphabet::default()).unwrap();
        assert_eq!(labels(&board), vec!["AB", "CDE", "FGHI", "JKL"]);
    }

    #[test]
    fn test_cell_counts() {
        for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
            let board = generate_cells(size, &Alphabet::default()).unwrap();
            assert_eq!(board.cells().count(), cell_count(size));
            assert_eq!(board.rows().len(), size + 1);
            assert_eq!(board.claimed_count(), 0);
        }
    }

    #[test]
    fn test_unsupported_size() {
        assert!(matches!(
            generate_cells(0, &Alphabet::default()),
            Err(GameError::UnsupportedSize { size: 0, .. })
        ));
        assert!(matches!(
            generate_cells(6, &Alphabet::default()),
            Err(GameError::UnsupportedSize { size: 6, .. })
        ));
    }

    #[test]
    fn test_custom_alphabet() {
        let alphabet = Alphabet::new("abcdefg".chars().collect()).unwrap();
        let board = generate_cells(2, &alphabet).unwrap();
        assert_eq!(labels(&board), vec!["ab", "cde", "fg"]);

        let err = generate_cells(3, &alphabet).unwrap_err();
        assert_eq!(err, GameError::AlphabetTooShort { needed: 12, available: 7 });
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let err = Alphabet::new(vec!['A', 'B', 'A']).unwrap_err();
        assert_eq!(err, GameError::DuplicateLabel { label: 'A' });
    }

    #[test]
    fn test_marker_labels_rejected() {
        for label in ['1', '2', '@'] {
            let err = Alphabet::new(vec!['A', label]).unwrap_err();
            assert_eq!(err, GameError::ReservedLabel { label });
        }

        let json = serde_json::to_string(&vec!['A', '@']).unwrap();
        assert!(serde_json::from_str::<Alphabet>(&json).is_err());
    }

    #[test]
    fn test_claim() {
        let mut board = generate_cells(1, &Alphabet::default()).unwrap();
        assert!(board.has_open('B'));
        board.claim('B', Player::Two);
        assert!(!board.has_open('B'));
        assert_eq!(board.rows()[0][1], Cell::Claimed(Player::Two));
        assert_eq!(board.claimed_count(), 1);
    }
}
