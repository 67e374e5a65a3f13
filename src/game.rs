//! Entry points for a host that drives a game turn by turn.
//!
//! A host creates a board with [`game_start`], feeds human moves through
//! [`apply_move`], asks the engine for replies with [`find_best_move`], and
//! checks [`game_outcome`] after every move.
//!
//! ## Example
//!
//! ```
//! use tictactoe_ab::board::Player;
//! use tictactoe_ab::constants::DEFAULT_SIZE;
//! use tictactoe_ab::game::{apply_move, create_move, find_best_move, game_outcome, game_start};
//! use tictactoe_ab::rules::Outcome;
//!
//! let mut board = game_start(Player::Cross, DEFAULT_SIZE).unwrap();
//! apply_move(&mut board, create_move(1, 1)).unwrap();
//!
//! let reply = find_best_move(&mut board).unwrap();
//! apply_move(&mut board, reply).unwrap();
//! assert_eq!(game_outcome(&board), Outcome::Undecided);
//! ```

use tracing::{debug, instrument};

use crate::board::{Board, Move, Player};
use crate::error::Result;
use crate::rules;

pub use crate::rules::game_outcome;
pub use crate::search::find_best_move;

/// Create an empty `size`x`size` board with `first` to move.
///
/// # Errors
/// - [`GameError::InvalidSize`](crate::error::GameError::InvalidSize) if `size` is zero
#[instrument]
pub fn game_start(first: Player, size: usize) -> Result<Board> {
    let board = Board::new(first, size)?;
    debug!("game started");
    Ok(board)
}

pub fn create_move(row: usize, col: usize) -> Move {
    Move::new(row, col)
}

/// Play `mv` for the player whose turn it is.
///
/// # Errors
/// - [`GameError::OutOfBounds`](crate::error::GameError::OutOfBounds) if the move is off the board
/// - [`GameError::InvalidMove`](crate::error::GameError::InvalidMove) if the cell is occupied
pub fn apply_move(board: &mut Board, mv: Move) -> Result<()> {
    let player = board.turn();
    rules::apply_move(board, mv, player)?;
    debug!(%player, %mv, "move applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::rules::Outcome;

    #[test]
    fn test_apply_move_uses_turn() {
        let mut board = game_start(Player::Nought, 3).unwrap();
        apply_move(&mut board, create_move(0, 0)).unwrap();
        apply_move(&mut board, create_move(0, 1)).unwrap();
        assert_eq!(board.get(0, 0), Some(Player::Nought));
        assert_eq!(board.get(0, 1), Some(Player::Cross));
        assert_eq!(board.turn(), Player::Nought);
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let mut board = game_start(Player::Cross, 3).unwrap();
        apply_move(&mut board, create_move(2, 2)).unwrap();
        assert_eq!(
            apply_move(&mut board, create_move(2, 2)),
            Err(GameError::InvalidMove { row: 2, col: 2 })
        );
        assert_eq!(board.turn(), Player::Nought);
    }

    #[test]
    fn test_game_start_rejects_empty_board() {
        assert!(matches!(
            game_start(Player::Cross, 0),
            Err(GameError::InvalidSize { size: 0 })
        ));
    }

    #[test]
    fn test_cross_wins_top_row() {
        let mut board = game_start(Player::Cross, 3).unwrap();
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            apply_move(&mut board, create_move(r, c)).unwrap();
        }
        assert_eq!(
            game_outcome(&board),
            Outcome::Win {
                player: Player::Cross,
                line: vec![(0, 0), (0, 1), (0, 2)],
            }
        );
    }
}
