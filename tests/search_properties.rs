//! Exhaustive checks over every reachable 3x3 position.
//!
//! Alpha-beta must agree with plain minimax everywhere; pruning may only
//! reduce the number of visited nodes.

use std::collections::HashSet;

use tictactoe_ab::board::{Board, Player};
use tictactoe_ab::constants::DEFAULT_SIZE;
use tictactoe_ab::game::{apply_move, game_outcome, game_start};
use tictactoe_ab::rules::{is_game_over, legal_moves, undo_move};
use tictactoe_ab::search::{SearchStats, minimax, minimax_alpha_beta, search};

// =============================================================================
// Helper functions
// =============================================================================

type Key = (Vec<Option<Player>>, Player);

fn key(board: &Board) -> Key {
    (board.cells().map(|(_, c)| c).collect(), board.turn())
}

/// Collect every distinct position reachable from `board`, terminal ones included.
fn reachable_positions(board: &mut Board, seen: &mut HashSet<Key>, out: &mut Vec<Board>) {
    if !seen.insert(key(board)) {
        return;
    }
    out.push(board.clone());
    if is_game_over(board) {
        return;
    }
    for mv in legal_moves(board) {
        apply_move(board, mv).expect("generated move is legal");
        reachable_positions(board, seen, out);
        undo_move(board, mv);
    }
}

fn all_positions(first: Player) -> Vec<Board> {
    let mut board = game_start(first, DEFAULT_SIZE).expect("3x3 board");
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    reachable_positions(&mut board, &mut seen, &mut out);
    out
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_reachable_position_count() {
    // Every legal position of classic Tic-Tac-Toe, terminal ones included.
    // An early line-based draw never hides a position that no other move
    // order reaches.
    for first in [Player::Cross, Player::Nought] {
        assert_eq!(all_positions(first).len(), 5478, "{first} moving first");
    }
}

#[test]
fn test_game_over_matches_outcome() {
    for board in all_positions(Player::Cross) {
        assert_eq!(
            is_game_over(&board),
            game_outcome(&board).is_decided(),
            "Mismatch on\n{board}"
        );
    }
}

#[test]
fn test_alpha_beta_matches_minimax() {
    for first in [Player::Cross, Player::Nought] {
        for mut board in all_positions(first) {
            let maximizing = board.turn() == Player::Cross;

            let mut plain_stats = SearchStats::new();
            let plain = minimax(&mut board, maximizing, &mut plain_stats);

            let mut pruned_stats = SearchStats::new();
            let pruned = minimax_alpha_beta(-1, 1, &mut board, maximizing, &mut pruned_stats);

            assert_eq!(pruned, plain, "Alpha-beta disagrees on\n{board}");
            assert!(pruned_stats.nodes() <= plain_stats.nodes());
        }
    }
}

#[test]
fn test_search_leaves_board_untouched() {
    for mut board in all_positions(Player::Nought).into_iter().step_by(37) {
        let before = board.clone();
        search(&mut board);
        assert_eq!(board, before);
    }
}

#[test]
fn test_node_count_shrinks_one_ply_deeper() {
    let mut empty = game_start(Player::Cross, DEFAULT_SIZE).expect("3x3 board");
    let root_nodes = search(&mut empty).nodes;

    for mv in legal_moves(&empty) {
        let mut child = empty.clone();
        apply_move(&mut child, mv).expect("empty cell");
        let child_nodes = search(&mut child).nodes;
        assert!(
            root_nodes > child_nodes,
            "Root searched {root_nodes} nodes, after {mv} searched {child_nodes}"
        );
    }
}

#[test]
fn test_node_count_is_per_search() {
    let mut board = game_start(Player::Cross, DEFAULT_SIZE).expect("3x3 board");
    let first = search(&mut board).nodes;
    let second = search(&mut board).nodes;
    assert_eq!(first, second);
}
