//! Tictactoe-AB: a perfect-play Tic-Tac-Toe engine for NxN boards.
//!
//! The engine searches the complete game tree with minimax and alpha-beta
//! pruning. It mutates a single board in place, applying and undoing moves as
//! it walks the tree.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size and score range
//! - [`error`] - Error type for illegal moves and board sizes
//! - [`board`] - Board state, players, and moves
//! - [`rules`] - Move generation, win/draw detection, move execution
//! - [`search`] - Alpha-beta minimax and node statistics
//! - [`game`] - Turn-by-turn entry points for a host application
//!
//! ## Example
//!
//! ```
//! use tictactoe_ab::board::Player;
//! use tictactoe_ab::constants::DEFAULT_SIZE;
//! use tictactoe_ab::game::{find_best_move, game_start};
//! use tictactoe_ab::search::search;
//!
//! let mut board = game_start(Player::Cross, DEFAULT_SIZE).unwrap();
//!
//! // Perfect play from the empty board is a draw
//! let result = search(&mut board);
//! assert_eq!(result.score, 0);
//!
//! let best = find_best_move(&mut board).unwrap();
//! println!("Best move: {best}");
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;

pub use error::{GameError, Result};
