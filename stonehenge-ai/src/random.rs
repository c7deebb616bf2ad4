//! 随机走子
//!
//! 把合法走法倒进随机袋里取一个。给定种子时结果可复现。

use stonehenge_core::{Game, GameState, MoveOf};
use tracing::debug;

use crate::container::{Container, Sack};
use crate::error::{Result, SearchError};

/// 随机选择一个合法走法
pub fn random_move<G: Game>(game: &G, seed: Option<u64>) -> Result<MoveOf<G>> {
    let state = game.current_state();
    if game.is_over(state) {
        return Err(SearchError::GameOver);
    }

    let mut sack = match seed {
        Some(seed) => Sack::with_seed(seed),
        None => Sack::new(),
    };
    sack.extend(state.possible_moves());
    if sack.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }

    let mv = sack.remove()?;
    debug!("Random move {} out of {} candidates", mv, sack.len() + 1);
    Ok(mv)
}
