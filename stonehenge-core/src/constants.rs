//! 规则常量定义

/// 支持的最小棋盘尺寸
pub const MIN_BOARD_SIZE: usize = 1;

/// 支持的最大棋盘尺寸
pub const MAX_BOARD_SIZE: usize = 5;

/// 默认标签字母表（按行优先顺序分配给格子）
pub const DEFAULT_ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// 未被占领的地脉线标记
pub const UNCLAIMED_MARKER: char = '@';

/// 指定尺寸下的格子数量
///
/// 行长依次为 `2..=size+1`，最后一行长度为 `size`。
pub const fn cell_count(size: usize) -> usize {
    (size + 1) * (size + 2) / 2 - 1 + size
}

/// 指定尺寸下的地脉线数量
pub const fn ley_line_count(size: usize) -> usize {
    3 * size + 3
}
