//! Constants for board dimensions and search scores.
//!
//! Scores are always expressed from Cross's point of view and live in the
//! closed range `[LOSS_SCORE, WIN_SCORE]`. The sentinels sit strictly outside
//! that range so that the first searched move always replaces them.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN) for a classic game.
pub const DEFAULT_SIZE: usize = 3;

// =============================================================================
// Scores
// =============================================================================

/// Score of a position Cross has won.
pub const WIN_SCORE: i32 = 1;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Score of a position Cross has lost (or that is not yet decided).
pub const LOSS_SCORE: i32 = -1;

/// Initial best score for the maximizing side, worse than any real score.
pub const MAX_SENTINEL: i32 = LOSS_SCORE - 1;

/// Initial best score for the minimizing side, worse than any real score.
pub const MIN_SENTINEL: i32 = WIN_SCORE + 1;
