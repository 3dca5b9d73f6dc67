//! Tagged move value.
//!
//! A move is either a sentinel marking the start or the end of a game, a
//! single diagonal step, or a capture chain listing every cell the piece
//! visits. Moves are immutable once built; consumers match exhaustively on
//! [`Move`].

use std::fmt;

use crate::game_state::checkers_rules::CELL_COUNT;
use crate::game_state::checkers_types::Cell;
use crate::utils::move_notation::move_to_notation;

/// Moves that carry no cells and do not change the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    BeginOfGame,
    Draw,
    RedWins,
    WhiteWins,
}

impl Sentinel {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Sentinel::BeginOfGame)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    Sentinel(Sentinel),
    /// One diagonal step onto an empty cell.
    Simple { from: Cell, to: Cell },
    /// Start cell followed by every landing cell, at least two entries.
    Jump(Vec<Cell>),
}

impl Move {
    pub const BEGIN_OF_GAME: Move = Move::Sentinel(Sentinel::BeginOfGame);
    pub const DRAW: Move = Move::Sentinel(Sentinel::Draw);
    pub const RED_WINS: Move = Move::Sentinel(Sentinel::RedWins);
    pub const WHITE_WINS: Move = Move::Sentinel(Sentinel::WhiteWins);

    /// Builds a capture chain. Panics with fewer than two cells.
    pub fn jump(cells: Vec<Cell>) -> Move {
        assert!(cells.len() >= 2, "a jump needs a start and at least one landing");
        Move::Jump(cells)
    }

    #[inline]
    pub fn is_jump(&self) -> bool {
        matches!(self, Move::Jump(_))
    }

    #[inline]
    pub fn is_simple(&self) -> bool {
        matches!(self, Move::Simple { .. })
    }

    #[inline]
    pub fn is_bog(&self) -> bool {
        matches!(self, Move::Sentinel(Sentinel::BeginOfGame))
    }

    /// True for draw and win sentinels.
    #[inline]
    pub fn is_eog(&self) -> bool {
        matches!(self, Move::Sentinel(s) if s.is_terminal())
    }

    #[inline]
    pub fn is_draw(&self) -> bool {
        matches!(self, Move::Sentinel(Sentinel::Draw))
    }

    #[inline]
    pub fn is_red_win(&self) -> bool {
        matches!(self, Move::Sentinel(Sentinel::RedWins))
    }

    #[inline]
    pub fn is_white_win(&self) -> bool {
        matches!(self, Move::Sentinel(Sentinel::WhiteWins))
    }

    /// Number of pieces captured by the move.
    pub fn captures(&self) -> usize {
        match self {
            Move::Jump(cells) => cells.len().saturating_sub(1),
            Move::Sentinel(_) | Move::Simple { .. } => 0,
        }
    }

    /// The same move seen from the other side of the board.
    pub fn reversed(&self) -> Move {
        let flip = |cell: Cell| (CELL_COUNT as Cell + 1) - cell;
        match self {
            Move::Sentinel(s) => Move::Sentinel(*s),
            Move::Simple { from, to } => Move::Simple {
                from: flip(*from),
                to: flip(*to),
            },
            Move::Jump(cells) => Move::Jump(cells.iter().copied().map(flip).collect()),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_notation(self))
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, Sentinel};

    #[test]
    fn reversed_maps_cells_onto_the_mirrored_board() {
        assert_eq!(
            Move::Simple { from: 9, to: 14 }.reversed(),
            Move::Simple { from: 24, to: 19 }
        );
        assert_eq!(Move::jump(vec![1, 10, 17]).reversed(), Move::Jump(vec![32, 23, 16]));
        assert_eq!(Move::RED_WINS.reversed(), Move::RED_WINS);
    }

    #[test]
    fn only_draw_and_wins_end_the_game() {
        assert!(!Move::BEGIN_OF_GAME.is_eog());
        assert!(Move::BEGIN_OF_GAME.is_bog());
        assert!(Move::DRAW.is_eog());
        assert!(Move::Sentinel(Sentinel::RedWins).is_eog());
        assert!(Move::WHITE_WINS.is_white_win());
        assert!(!Move::Simple { from: 9, to: 13 }.is_eog());
        assert!(!Move::jump(vec![9, 18]).is_eog());
    }

    #[test]
    fn capture_count_follows_chain_length() {
        assert_eq!(Move::jump(vec![1, 10, 19, 26]).captures(), 3);
        assert_eq!(Move::Simple { from: 1, to: 6 }.captures(), 0);
        assert_eq!(Move::DRAW.captures(), 0);
        assert_eq!(Move::Jump(Vec::new()).captures(), 0);
    }

    #[test]
    #[should_panic]
    fn single_cell_jump_is_rejected() {
        let _ = Move::jump(vec![9]);
    }
}
