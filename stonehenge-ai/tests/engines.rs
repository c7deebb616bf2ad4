//! 搜索引擎集成测试

use stonehenge_ai::{
    iterative_minimax, recursive_minimax, AiEngine, IterativeSearch, RecursiveSearch,
    SearchError, Strategy, LOSS_SCORE, WIN_SCORE,
};
use stonehenge_core::{Game, GameState, Player, StonehengeGame};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn game_after(size: usize, moves: &[char]) -> StonehengeGame {
    let mut game = StonehengeGame::with_size(Player::One, size).unwrap();
    for &label in moves {
        game.play(label).unwrap();
    }
    game
}

#[test]
fn test_fresh_size_two() {
    init_tracing();
    let game = game_after(2, &[]);

    let mut recursive = RecursiveSearch::new();
    assert_eq!(recursive.search(&game).unwrap(), 'A');
    assert_eq!(recursive.nodes_searched(), 6991);

    let mut iterative = IterativeSearch::new();
    let report = iterative.run(&game).unwrap();
    assert_eq!(report.best_move, 'G');
    assert_eq!(report.root_score, WIN_SCORE);
    // 两种搜索访问同一棵博弈树
    assert_eq!(report.tree.len() as u64, recursive.nodes_searched() + 1);
}

#[test]
fn test_known_positions() {
    let cases: &[(usize, &[char], char, i32, usize)] = &[
        (2, &['A'], 'G', LOSS_SCORE, 983),
        (2, &['A', 'F'], 'G', WIN_SCORE, 202),
        (2, &['B', 'C'], 'G', WIN_SCORE, 202),
        (2, &['C', 'F', 'D', 'B'], 'G', WIN_SCORE, 10),
        (3, &['A', 'B', 'C', 'D', 'E', 'F'], 'L', WIN_SCORE, 479),
    ];

    for &(size, moves, expected, root_score, tree_len) in cases {
        let game = game_after(size, moves);
        let report = IterativeSearch::new().run(&game).unwrap();
        assert_eq!(report.best_move, expected, "after {:?}", moves);
        assert_eq!(report.root_score, root_score, "after {:?}", moves);
        assert_eq!(report.tree.len(), tree_len, "after {:?}", moves);
    }
}

#[test]
fn test_successor_consistent_with_root_score() {
    let positions: [&[char]; 4] = [&['A'], &['A', 'F'], &['A', 'F', 'D'], &['C', 'F', 'D', 'B']];
    for moves in positions {
        let game = game_after(2, moves);
        let report = IterativeSearch::new().run(&game).unwrap();

        assert_eq!(report.successor_score, -report.root_score);
        let root = report.tree.root();
        assert!(report.tree.node(root).children().contains(&report.successor));
        assert!(report.tree.node(report.successor).on_resolved_path());

        // 选中的走法确实产生选中的后继局面
        let applied = GameState::apply_move(game.current_state(), &report.best_move).unwrap();
        assert_eq!(&applied, report.successor_state());
    }
}

#[test]
fn test_every_node_scored_once() {
    let game = game_after(2, &['A', 'F']);
    let report = IterativeSearch::new().run(&game).unwrap();

    assert_eq!(report.log.len(), report.tree.len());
    assert_eq!(report.log.last().map(|entry| entry.node), Some(report.tree.root()));
    for entry in &report.log {
        assert_eq!(report.tree.score(entry.node), Some(entry.score));
    }
}

#[test]
fn test_recursive_on_larger_board() {
    let game = game_after(3, &['A', 'B', 'C', 'D', 'E', 'F']);
    assert_eq!(recursive_minimax(&game).unwrap(), 'G');
    assert_eq!(iterative_minimax(&game).unwrap(), 'L');
}

#[test]
fn test_searches_reject_finished_game() {
    let game = game_after(1, &['C']);
    assert!(game.is_over(game.current_state()));
    assert_eq!(recursive_minimax(&game), Err(SearchError::GameOver));
    assert_eq!(iterative_minimax(&game), Err(SearchError::GameOver));
}

#[test]
fn test_engines_play_to_completion() {
    init_tracing();
    let mut game = StonehengeGame::with_size(Player::Two, 2).unwrap();
    let mut engines = [
        AiEngine::from_strategy(Strategy::Iterative),
        AiEngine::from_strategy(Strategy::Recursive),
    ];

    let mut turn = 0;
    while !game.is_over(game.current_state()) {
        let engine = &mut engines[turn % 2];
        let mv = engine.choose_move(&game).unwrap();
        assert!(game.current_state().possible_moves().contains(&mv));
        game.play(mv).unwrap();
        turn += 1;
    }

    assert!(game.outcome(game.current_state()).is_some());
    assert!(turn <= 7);
}
