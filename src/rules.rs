//! Game rules: move generation, move execution, and terminal detection.
//!
//! Rules operate directly on a [`Board`] in place. [`apply_move`] and
//! [`undo_move`] are exact inverses as long as `undo_move` is given the move
//! most recently applied; no move history is kept.
//!
//! A game is drawn as soon as every winning line holds at least one mark of
//! each player, which can happen before the board is full.

use tracing::trace;

use crate::board::{Board, Move, Player, Point};
use crate::constants::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use crate::error::{GameError, Result};

/// Result of evaluating a position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `player` owns every cell of `line`
    Win { player: Player, line: Vec<Point> },
    Draw,
    Undecided,
}

impl Outcome {
    /// Whether the game has ended.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

/// All empty cells as moves, in row-major order.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    board
        .cells()
        .filter(|(_, c)| c.is_none())
        .map(|(pt, _)| Move::from(pt))
        .collect()
}

/// Place `player`'s mark at `mv` and pass the turn to the other player.
///
/// # Errors
/// - [`GameError::OutOfBounds`] if the move is off the board
/// - [`GameError::InvalidMove`] if the cell is already occupied
pub fn apply_move(board: &mut Board, mv: Move, player: Player) -> Result<()> {
    let Move { row, col } = mv;
    if !board.contains(row, col) {
        trace!(%mv, size = board.size(), "rejected move off the board");
        return Err(GameError::OutOfBounds {
            row,
            col,
            size: board.size(),
        });
    }
    if board.get(row, col).is_some() {
        trace!(%mv, "rejected move on occupied cell");
        return Err(GameError::InvalidMove { row, col });
    }
    place(board, mv, player);
    Ok(())
}

/// Unchecked [`apply_move`] for moves taken from [`legal_moves`].
pub(crate) fn place(board: &mut Board, mv: Move, player: Player) {
    debug_assert!(board.get(mv.row, mv.col).is_none(), "{mv} is occupied");
    board.set(mv.row, mv.col, Some(player));
    board.set_turn(board.turn().opponent());
}

/// Clear the cell at `mv` and give the turn back.
///
/// `mv` must be the last move applied to `board`.
///
/// # Panics
/// If `mv` is off the board.
pub fn undo_move(board: &mut Board, mv: Move) {
    debug_assert!(
        !board.contains(mv.row, mv.col) || board.get(mv.row, mv.col).is_some(),
        "{mv} is empty"
    );
    board.set(mv.row, mv.col, None);
    board.set_turn(board.turn().opponent());
}

/// The first winning line entirely owned by `player`, if any.
pub fn winning_line_for(board: &Board, player: Player) -> Option<&[Point]> {
    board
        .winning_lines()
        .iter()
        .find(|line| line.iter().all(|&(r, c)| board.get(r, c) == Some(player)))
        .map(Vec::as_slice)
}

/// Whether no line can be completed by either player any more.
pub fn is_draw(board: &Board) -> bool {
    board.winning_lines().iter().all(|line| {
        let holds = |p: Player| line.iter().any(|&(r, c)| board.get(r, c) == Some(p));
        holds(Player::Cross) && holds(Player::Nought)
    })
}

pub fn is_game_over(board: &Board) -> bool {
    is_draw(board)
        || winning_line_for(board, Player::Cross).is_some()
        || winning_line_for(board, Player::Nought).is_some()
}

/// Score a position for `player`.
///
/// Returns [`WIN_SCORE`] if `player` has a winning line, [`DRAW_SCORE`] if the
/// game is drawn, and [`LOSS_SCORE`] otherwise. An undecided position scores
/// as a loss; the search only reads this value at terminal positions.
pub fn heuristic(board: &Board, player: Player) -> i32 {
    if winning_line_for(board, player).is_some() {
        WIN_SCORE
    } else if is_draw(board) {
        DRAW_SCORE
    } else {
        LOSS_SCORE
    }
}

/// Classify the position. Cross's win is checked before Nought's.
pub fn game_outcome(board: &Board) -> Outcome {
    for player in [Player::Cross, Player::Nought] {
        if let Some(line) = winning_line_for(board, player) {
            return Outcome::Win {
                player,
                line: line.to_vec(),
            };
        }
    }
    if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}
