//! 递归搜索
//!
//! 使用调用栈对整棵博弈树做深度优先的穷举搜索。
//! 终局统一取固定值 [`TERMINAL_VALUE`]，每个顶层走法的汇总值是其下方所有终局值的最大值；
//! 层与层之间不取反。

use stonehenge_core::{Game, GameState, MoveOf};
use tracing::{debug, info};

use crate::error::{Result, SearchError};

/// 终局节点的固定取值
pub const TERMINAL_VALUE: i32 = -1;

/// 递归搜索引擎
#[derive(Debug, Default)]
pub struct RecursiveSearch {
    nodes_searched: u64,
}

impl RecursiveSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// 计算每个顶层走法的汇总值，顺序与走法枚举顺序一致
    pub fn move_values<G: Game>(&mut self, game: &G) -> Result<Vec<(MoveOf<G>, i32)>> {
        self.nodes_searched = 0;

        let root = game.current_state();
        if game.is_over(root) {
            return Err(SearchError::GameOver);
        }
        let moves = root.possible_moves();
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }
        debug!("Recursive search over {} candidate moves", moves.len());

        let mut values = Vec::with_capacity(moves.len());
        for mv in &moves {
            let next = root.apply_move(mv)?;
            values.push(self.best_terminal_value(game, &next)?);
        }

        if values.len() != moves.len() {
            return Err(SearchError::MoveCountMismatch {
                values: values.len(),
                moves: moves.len(),
            });
        }

        Ok(moves.into_iter().zip(values).collect())
    }

    /// 选出汇总值最大的走法，并列时取枚举顺序靠前者
    pub fn search<G: Game>(&mut self, game: &G) -> Result<MoveOf<G>> {
        let values = self.move_values(game)?;
        debug!(
            "Recursive move values: {:?}",
            values.iter().map(|(_, value)| *value).collect::<Vec<_>>()
        );

        let mut best: Option<(MoveOf<G>, i32)> = None;
        for (mv, value) in values {
            if best.as_ref().map_or(true, |(_, best_value)| value > *best_value) {
                best = Some((mv, value));
            }
        }
        let (mv, value) = best.ok_or(SearchError::NoLegalMoves)?;

        info!(
            "Recursive search chose {} (value {}, {} nodes)",
            mv, value, self.nodes_searched
        );
        Ok(mv)
    }

    /// 上一次搜索访问的节点数（不含根节点）
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 局面下方所有终局值的最大值
    fn best_terminal_value<G: Game>(&mut self, game: &G, state: &G::State) -> Result<i32> {
        self.nodes_searched += 1;

        let moves = state.possible_moves();
        if moves.is_empty() {
            if !game.is_over(state) {
                return Err(SearchError::NoLegalMoves);
            }
            return Ok(TERMINAL_VALUE);
        }

        let mut best = i32::MIN;
        for mv in &moves {
            let next = state.apply_move(mv)?;
            best = best.max(self.best_terminal_value(game, &next)?);
        }
        Ok(best)
    }
}

/// 用递归搜索为当前局面选一步
pub fn recursive_minimax<G: Game>(game: &G) -> Result<MoveOf<G>> {
    RecursiveSearch::new().search(game)
}
