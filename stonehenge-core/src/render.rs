//! 棋盘文本渲染
//!
//! 每种尺寸对应一张固定的 ASCII 图，图中的每个占位符按位置引用地脉线列表：
//! 地脉线的归属标记画在线的起点，格子取自水平线的成员。
//! 因此渲染结果依赖地脉线的生成顺序。

use std::fmt;

use crate::state::StonehengeState;

/// 模板占位符的取值来源
#[derive(Debug, Clone, Copy)]
enum Slot {
    /// 第 n 条地脉线的归属标记
    Owner(usize),
    /// 第 n 条地脉线的第 i 个成员
    Member(usize, usize),
}

use Slot::{Member as M, Owner as O};

/// 尺寸 1 的棋盘模板
const TEMPLATE_1: &str = r#"\\
                   {}   {}
                  /   /
             {} - {} - {}
                  \ / \
               {} - {}   {}
                    \
                     {}"#;

/// 尺寸 2 的棋盘模板
const TEMPLATE_2: &str = r#"\\
                        {}   {}
                       /   /
                  {} - {} - {}   {}
                     / \ / \ /
                {} - {} - {} - {}
                     \ / \ / \
                  {} - {} - {}   {}
                       \   \
                        {}   {}"#;

/// 尺寸 3 的棋盘模板
const TEMPLATE_3: &str = r#"\\
                           {}  {}
                          /  /
                     {} - {} - {}   {}
                        / \ / \ /
                   {} - {} - {} - {}   {}
                      / \ / \ / \ /
                 {} - {} - {} - {} - {}
                      \ / \ / \ / \
                   {} - {} - {} - {}   {}
                        \   \   \
                         {}   {}   {}
                "#;

/// 尺寸 4 的棋盘模板
const TEMPLATE_4: &str = r#"\\
                       {}  {}
                      /  /
                 {} - {} - {}   {}
                    / \ / \ /
               {} - {} - {} - {}   {}
                  / \ / \ / \ /
             {} - {} - {} - {} - {}   {}
                / \ / \ / \ / \ /
           {} - {} - {} - {} - {} - {}
                \ / \ / \ / \ / \
             {} - {} - {} - {} - {}   {}
                  \   \   \   \
                   {}   {}   {}   {}
        "#;

/// 尺寸 5 的棋盘模板
const TEMPLATE_5: &str = r#"\\
                       {}  {}
                      /  /
                 {} - {} - {}   {}
                    / \ / \ /
               {} - {} - {} - {}   {}
                  / \ / \ / \ /
             {} - {} - {} - {} - {}   {}
                / \ / \ / \ / \ /
           {} - {} - {} - {} - {} - {}   {}
              / \ / \ / \ / \ / \ /
         {} - {} - {} - {} - {} - {} - {}
              \ / \ / \ / \ / \ / \
           {} - {} - {} - {} - {} - {}   {}
                \   \   \   \   \
                 {}   {}   {}   {}   {}
         "#;

const SLOTS_1: &[Slot] = &[
    O(2), O(5),
    O(0), M(0, 0), M(0, 1),
    O(1), M(1, 0), O(3),
    O(4),
];

const SLOTS_2: &[Slot] = &[
    O(3), O(6),
    O(0), M(0, 0), M(0, 1), O(8),
    O(1), M(1, 0), M(1, 1), M(1, 2),
    O(2), M(2, 0), M(2, 1), O(4),
    O(7), O(5),
];

const SLOTS_3: &[Slot] = &[
    O(4), O(7),
    O(0), M(0, 0), M(0, 1), O(9),
    O(1), M(1, 0), M(1, 1), M(1, 2), O(11),
    O(2), M(2, 0), M(2, 1), M(2, 2), M(2, 3),
    O(3), M(3, 0), M(3, 1), M(3, 2), O(5),
    O(10), O(8), O(6),
];

const SLOTS_4: &[Slot] = &[
    O(5), O(8),
    O(0), M(0, 0), M(0, 1), O(10),
    O(1), M(1, 0), M(1, 1), M(1, 2), O(12),
    O(2), M(2, 0), M(2, 1), M(2, 2), M(2, 3), O(14),
    O(3), M(3, 0), M(3, 1), M(3, 2), M(3, 3), M(3, 4),
    O(4), M(4, 0), M(4, 1), M(4, 2), M(4, 3), O(6),
    O(13), O(11), O(9), O(7),
];

const SLOTS_5: &[Slot] = &[
    O(6), O(9),
    O(0), M(0, 0), M(0, 1), O(11),
    O(1), M(1, 0), M(1, 1), M(1, 2), O(13),
    O(2), M(2, 0), M(2, 1), M(2, 2), M(2, 3), O(15),
    O(3), M(3, 0), M(3, 1), M(3, 2), M(3, 3), M(3, 4), O(17),
    O(4), M(4, 0), M(4, 1), M(4, 2), M(4, 3), M(4, 4), M(4, 5),
    O(5), M(5, 0), M(5, 1), M(5, 2), M(5, 3), M(5, 4), O(7),
    O(16), O(14), O(12), O(10), O(8),
];

/// 获取尺寸对应的模板和占位符
fn layout(size: usize) -> Option<(&'static str, &'static [Slot])> {
    match size {
        1 => Some((TEMPLATE_1, SLOTS_1)),
        2 => Some((TEMPLATE_2, SLOTS_2)),
        3 => Some((TEMPLATE_3, SLOTS_3)),
        4 => Some((TEMPLATE_4, SLOTS_4)),
        5 => Some((TEMPLATE_5, SLOTS_5)),
        _ => None,
    }
}

/// 依次用取值替换模板中的 `{}`
fn fill(template: &str, values: impl IntoIterator<Item = char>) -> String {
    let mut values = values.into_iter();
    let mut out = String::with_capacity(template.len());
    let mut pieces = template.split("{}").peekable();
    while let Some(piece) = pieces.next() {
        out.push_str(piece);
        if pieces.peek().is_some() {
            if let Some(value) = values.next() {
                out.push(value);
            }
        }
    }
    out
}

impl StonehengeState {
    /// 渲染为 ASCII 棋盘
    pub fn render(&self) -> String {
        let Some((template, slots)) = layout(self.size()) else {
            return format!("Board size {} has no diagram", self.size());
        };

        let lines = self.ley_lines();
        let values = slots.iter().map(|slot| match *slot {
            Slot::Owner(line) => lines[line].owner_marker(),
            Slot::Member(line, i) => lines[line].cells[i].symbol(),
        });
        fill(template, values)
    }

    /// 逐条列出地脉线，附带尺寸和走子方
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Size: {}. {}'s turn. {} ley lines:\n",
            self.size(),
            self.current_player(),
            self.ley_lines().len()
        );
        for line in self.ley_lines() {
            out.push_str(&line.to_string());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for StonehengeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
