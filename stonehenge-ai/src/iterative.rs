//! 迭代搜索
//!
//! 不使用递归：用显式的栈和显式的搜索树完成与递归等价的穷举搜索，
//! 自底向上传递分数。
//!
//! 每次出栈一个节点：
//! - 未展开且非终局：为每个合法走法追加子节点，把自己和全部子节点依次压栈，
//!   待子节点评分后再次出栈；
//! - 未展开且终局：从走子方视角评分（胜 1、负 -1、平 0）；
//! - 已展开：分数取所有子节点分数取反后的最大值。
//!
//! 每次评分都写入输出日志。第一次出栈（根节点）时压入的子节点被标记为
//! “属于正在求解的路径”。

use stonehenge_core::{Game, GameState, MoveOf, Outcome};
use tracing::{debug, info};

use crate::container::{Container, Stack};
use crate::error::{Result, SearchError};
use crate::tree::{NodeId, NodeStatus, SearchTree};

/// 走子方已获胜
pub const WIN_SCORE: i32 = 1;
/// 平局
pub const TIE_SCORE: i32 = 0;
/// 走子方已落败
pub const LOSS_SCORE: i32 = -1;

/// 输出日志条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    /// 被评分的节点
    pub node: NodeId,
    /// 分数
    pub score: i32,
    /// 是否属于正在求解的路径
    pub on_resolved_path: bool,
}

/// 一次迭代搜索的完整结果
#[derive(Debug, Clone)]
pub struct IterativeReport<S: GameState> {
    /// 搜索树
    pub tree: SearchTree<S>,
    /// 按评分顺序记录的日志（根节点在最后）
    pub log: Vec<LogEntry>,
    /// 根节点分数
    pub root_score: i32,
    /// 选中的后继节点
    pub successor: NodeId,
    /// 后继节点分数
    pub successor_score: i32,
    /// 选中的走法
    pub best_move: S::Move,
}

impl<S: GameState> IterativeReport<S> {
    /// 选中的后继局面
    pub fn successor_state(&self) -> &S {
        self.tree.node(self.successor).state()
    }
}

/// 迭代搜索引擎
#[derive(Debug, Default)]
pub struct IterativeSearch {
    nodes_searched: u64,
}

impl IterativeSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// 搜索并返回走法
    pub fn search<G: Game>(&mut self, game: &G) -> Result<MoveOf<G>> {
        Ok(self.run(game)?.best_move)
    }

    /// 上一次搜索建立的节点数（含根节点）
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 搜索并返回完整结果
    pub fn run<G: Game>(&mut self, game: &G) -> Result<IterativeReport<G::State>> {
        self.nodes_searched = 0;

        let root_state = game.current_state();
        if game.is_over(root_state) {
            return Err(SearchError::GameOver);
        }
        let root_moves = root_state.possible_moves();
        if root_moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        let mut tree = SearchTree::new(root_state.clone());
        let mut stack = Stack::new();
        let mut log = Vec::new();
        let mut first_pop = true;
        stack.add(tree.root());

        while !stack.is_empty() {
            let id = stack.remove()?;

            match tree.node(id).status() {
                NodeStatus::Unexpanded => {
                    let state = tree.node(id).state();
                    let moves = state.possible_moves();

                    if moves.is_empty() {
                        let score = terminal_score(game, state)?;
                        tree.set_score(id, score);
                        log.push(LogEntry {
                            node: id,
                            score,
                            on_resolved_path: tree.node(id).on_resolved_path(),
                        });
                    } else {
                        let successors = moves
                            .iter()
                            .map(|mv| state.apply_move(mv))
                            .collect::<std::result::Result<Vec<_>, _>>()?;
                        for successor in successors {
                            tree.add_child(id, successor);
                        }
                        tree.mark_expanded(id);

                        stack.add(id);
                        let children = tree.node(id).children().to_vec();
                        for child in children {
                            tree.set_on_resolved_path(child, first_pop);
                            stack.add(child);
                        }
                    }
                }
                NodeStatus::Expanded => {
                    let mut best = i32::MIN;
                    for &child in tree.node(id).children() {
                        let child_score = tree
                            .score(child)
                            .ok_or(SearchError::Unresolved(child.index()))?;
                        best = best.max(-child_score);
                    }
                    tree.set_score(id, best);
                    log.push(LogEntry {
                        node: id,
                        score: best,
                        on_resolved_path: tree.node(id).on_resolved_path(),
                    });
                }
                // 节点评分后不会再入栈
                NodeStatus::Scored(_) => {}
            }

            first_pop = false;
        }

        self.nodes_searched = tree.len() as u64;

        let root_score = tree
            .score(tree.root())
            .ok_or(SearchError::Unresolved(tree.root().index()))?;
        let entry = log
            .iter()
            .find(|entry| entry.on_resolved_path && entry.score == -root_score)
            .copied()
            .ok_or(SearchError::NoMatchingSuccessor)?;
        debug!(
            "Iterative search: {} nodes, {} log entries, root score {}, successor {}",
            tree.len(),
            log.len(),
            root_score,
            entry.node
        );

        let desired = tree.node(entry.node).state();
        let mut best_move = None;
        for mv in &root_moves {
            if root_state.apply_move(mv)? == *desired {
                best_move = Some(mv.clone());
                break;
            }
        }
        let best_move = best_move.ok_or(SearchError::NoMatchingSuccessor)?;

        info!(
            "Iterative search chose {} (score {}, {} nodes)",
            best_move, root_score, self.nodes_searched
        );

        Ok(IterativeReport {
            tree,
            log,
            root_score,
            successor: entry.node,
            successor_score: entry.score,
            best_move,
        })
    }
}

/// 终局评分：从终局时的走子方视角
fn terminal_score<G: Game>(game: &G, state: &G::State) -> Result<i32> {
    if !game.is_over(state) {
        return Err(SearchError::NoLegalMoves);
    }

    let to_move = state.current_player();
    Ok(match game.winner(state) {
        Outcome::Winner(player) if player == to_move => WIN_SCORE,
        Outcome::Winner(_) => LOSS_SCORE,
        Outcome::Tie => TIE_SCORE,
    })
}

/// 用迭代搜索为当前局面选一步
pub fn iterative_minimax<G: Game>(game: &G) -> Result<MoveOf<G>> {
    IterativeSearch::new().search(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stonehenge_core::{Player, StonehengeGame};

    fn game_after(size: usize, moves: &[char]) -> StonehengeGame {
        let mut game = StonehengeGame::with_size(Player::One, size).unwrap();
        for &label in moves {
            game.play(label).unwrap();
        }
        game
    }

    #[test]
    fn test_size_one() {
        let game = game_after(1, &[]);
        let report = IterativeSearch::new().run(&game).unwrap();

        assert_eq!(report.tree.len(), 4);
        assert_eq!(report.root_score, WIN_SCORE);
        // 出栈顺序为 C、B、A、根
        let scores: Vec<i32> = report.log.iter().map(|entry| entry.score).collect();
        assert_eq!(scores, vec![-1, -1, -1, 1]);
        assert!(report.log[..3].iter().all(|entry| entry.on_resolved_path));
        assert!(!report.log[3].on_resolved_path);
        assert_eq!(report.log[3].node, report.tree.root());
        assert_eq!(report.best_move, 'C');
    }

    #[test]
    fn test_terminal_scored_for_player_to_move() {
        let game = game_after(1, &[]);
        let report = IterativeSearch::new().run(&game).unwrap();

        let root = report.tree.root();
        for &child in report.tree.node(root).children() {
            let node = report.tree.node(child);
            assert_eq!(node.state().current_player(), Player::Two);
            assert_eq!(node.score(), Some(LOSS_SCORE));
        }
    }

    #[test]
    fn test_finds_winning_reply() {
        let game = game_after(2, &['A', 'F', 'D']);
        let mut search = IterativeSearch::new();
        let report = search.run(&game).unwrap();

        assert_eq!(report.best_move, 'E');
        assert_eq!(report.root_score, WIN_SCORE);
        assert_eq!(search.nodes_searched(), 38);
    }

    #[test]
    fn test_only_root_children_flagged() {
        let game = game_after(2, &['C', 'F', 'D', 'B']);
        let report = IterativeSearch::new().run(&game).unwrap();

        let root = report.tree.root();
        let root_children = report.tree.node(root).children();
        for entry in &report.log {
            assert_eq!(entry.on_resolved_path, root_children.contains(&entry.node));
        }
        assert_eq!(report.log.len(), report.tree.len());
    }

    #[test]
    fn test_terminal_root() {
        let game = game_after(1, &['A']);
        assert!(matches!(
            IterativeSearch::new().run(&game),
            Err(SearchError::GameOver)
        ));
    }
}
