//! Exhaustive game-tree search with alpha-beta pruning.
//!
//! The search walks the full game tree depth first. Scores are always from
//! Cross's point of view: Cross maximizes and Nought minimizes. Only terminal
//! positions are scored, so the engine plays perfectly but does not prefer a
//! quick win over a slow one.
//!
//! ## Board mutation
//!
//! Each candidate move is applied to the caller's board, searched, and undone
//! before the next sibling is tried. Only the current path of the tree exists
//! in memory at any time. The board is borrowed mutably for the whole search,
//! so it cannot be shared with another search while one is running; exploring
//! siblings in parallel would need a cloned board per branch.

use tracing::{debug, instrument};

use crate::board::{Board, Move, Player};
use crate::constants::{LOSS_SCORE, MAX_SENTINEL, MIN_SENTINEL, WIN_SCORE};
use crate::error::{GameError, Result};
use crate::rules::{heuristic, is_game_over, legal_moves, place, undo_move};

/// Node counter for a single search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    nodes: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.nodes = 0;
    }

    #[inline]
    pub fn increment(&mut self) {
        self.nodes += 1;
    }

    /// Number of positions visited since the last reset.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Result of a top-level search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the root position is already terminal
    pub best_move: Option<Move>,
    /// Value of the position for Cross: 1 win, 0 draw, -1 loss
    pub score: i32,
    pub nodes: u64,
}

/// Search the position with the full `[-1, 1]` window.
///
/// The board is returned to its original state when the search completes.
#[instrument(skip_all, fields(size = board.size(), turn = %board.turn()))]
pub fn search(board: &mut Board) -> SearchResult {
    let mut stats = SearchStats::new();
    let maximizing = board.turn() == Player::Cross;
    let (best_move, score) =
        minimax_alpha_beta(LOSS_SCORE, WIN_SCORE, board, maximizing, &mut stats);
    debug!(
        best_move = ?best_move,
        score,
        nodes = stats.nodes(),
        "search finished"
    );
    SearchResult {
        best_move,
        score,
        nodes: stats.nodes(),
    }
}

/// Find the optimal move for the player to move.
///
/// # Errors
/// - [`GameError::GameOver`] if the game is already decided
pub fn find_best_move(board: &mut Board) -> Result<Move> {
    search(board).best_move.ok_or(GameError::GameOver)
}

/// Alpha-beta minimax over the subtree rooted at `board`.
///
/// Returns the best move (`None` at a terminal position) and its score.
/// `alpha` and `beta` are the scores the maximizing and minimizing sides can
/// already guarantee; once `alpha >= beta` the remaining siblings are skipped.
pub fn minimax_alpha_beta(
    mut alpha: i32,
    mut beta: i32,
    board: &mut Board,
    maximizing: bool,
    stats: &mut SearchStats,
) -> (Option<Move>, i32) {
    stats.increment();

    let terminal_score = heuristic(board, Player::Cross);
    if is_game_over(board) {
        return (None, terminal_score);
    }

    let mut best: (Option<Move>, i32) = (
        None,
        if maximizing { MAX_SENTINEL } else { MIN_SENTINEL },
    );

    for mv in legal_moves(board) {
        let player = board.turn();
        place(board, mv, player);
        let (_, score) = minimax_alpha_beta(alpha, beta, board, !maximizing, stats);
        undo_move(board, mv);

        if maximizing {
            if score > best.1 {
                best = (Some(mv), score);
                alpha = alpha.max(score);
            }
        } else if score < best.1 {
            best = (Some(mv), score);
            beta = beta.min(score);
        }
        if alpha >= beta {
            break;
        }
    }

    if best.0.is_none() {
        return (None, terminal_score);
    }
    best
}

/// Plain minimax without pruning.
///
/// Visits every node of the subtree. Chooses the same move and score as
/// [`minimax_alpha_beta`] called with the full window.
pub fn minimax(
    board: &mut Board,
    maximizing: bool,
    stats: &mut SearchStats,
) -> (Option<Move>, i32) {
    stats.increment();

    let terminal_score = heuristic(board, Player::Cross);
    if is_game_over(board) {
        return (None, terminal_score);
    }

    let mut best: (Option<Move>, i32) = (
        None,
        if maximizing { MAX_SENTINEL } else { MIN_SENTINEL },
    );

    for mv in legal_moves(board) {
        let player = board.turn();
        place(board, mv, player);
        let (_, score) = minimax(board, !maximizing, stats);
        undo_move(board, mv);

        let improves = if maximizing {
            score > best.1
        } else {
            score < best.1
        };
        if improves {
            best = (Some(mv), score);
        }
    }

    if best.0.is_none() {
        return (None, terminal_score);
    }
    best
}
