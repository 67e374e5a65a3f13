//! Board state for an NxN game.
//!
//! The board stores cell occupancy in a flat row-major `Vec`, the player to
//! move, and the list of winning lines. Winning lines are generated once when
//! the board is created and never change afterwards: all rows, then all
//! columns, then the main diagonal and the anti-diagonal.

use std::fmt;

use crate::error::{GameError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Cross,
    Nought,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    /// Character used to draw this player's mark.
    pub fn mark(self) -> char {
        match self {
            Player::Cross => 'X',
            Player::Nought => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// A `(row, col)` coordinate on the board.
pub type Point = (usize, usize);

/// A move to a `(row, col)` coordinate.
///
/// Construction does not validate the coordinate; legality is checked when
/// the move is applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn point(self) -> Point {
        (self.row, self.col)
    }
}

impl From<Point> for Move {
    fn from((row, col): Point) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An NxN board together with the player whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    turn: Player,
    cells: Vec<Option<Player>>,
    winning_lines: Vec<Vec<Point>>,
}

impl Board {
    /// Create an empty `size`x`size` board with `first` to move.
    ///
    /// # Errors
    /// - [`GameError::InvalidSize`] if `size` is zero
    pub fn new(first: Player, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize { size });
        }
        Ok(Self {
            size,
            turn: first,
            cells: vec![None; size * size],
            winning_lines: winning_lines(size),
        })
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub(crate) fn set_turn(&mut self, player: Player) {
        self.turn = player;
    }

    /// Whether `(row, col)` lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Occupant of a cell. Coordinates off the board read as empty.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        if !self.contains(row, col) {
            return None;
        }
        self.cells[self.idx(row, col)]
    }

    /// Overwrite a cell.
    ///
    /// # Panics
    /// If `(row, col)` is off the board. A row-major index would otherwise
    /// alias another cell.
    pub(crate) fn set(&mut self, row: usize, col: usize, occupant: Option<Player>) {
        assert!(
            self.contains(row, col),
            "({row}, {col}) is outside a {0}x{0} board",
            self.size
        );
        let i = self.idx(row, col);
        self.cells[i] = occupant;
    }

    /// All cells with their coordinates, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Point, Option<Player>)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| ((i / size, i % size), c))
    }

    /// The 2N+2 lines that win the game when fully owned by one player.
    pub fn winning_lines(&self) -> &[Vec<Point>] {
        &self.winning_lines
    }
}

/// Build the winning lines for an NxN board: rows, columns, then diagonals.
fn winning_lines(size: usize) -> Vec<Vec<Point>> {
    let mut lines = Vec::with_capacity(2 * size + 2);
    for row in 0..size {
        lines.push((0..size).map(|col| (row, col)).collect());
    }
    for col in 0..size {
        lines.push((0..size).map(|row| (row, col)).collect());
    }
    lines.push((0..size).map(|i| (i, i)).collect());
    lines.push((0..size).map(|i| (i, size - i - 1)).collect());
    lines
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = match self.get(row, col) {
                    Some(player) => player.mark(),
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
