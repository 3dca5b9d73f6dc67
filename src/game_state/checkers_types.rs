//! Small value types shared by the board, the move generator and the codec.

use std::fmt;
use std::ops::BitOr;

/// Playable cell index (`1..=32`).
pub type Cell = u8;

/// Content of a board cell as combinable bit flags.
///
/// `RED` and `WHITE` may each be combined with `KING`. `INVALID` is only ever
/// returned by coordinate queries that fall off the board or on a light
/// square; it is never stored in a [`Board`](crate::game_state::board::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Occupant(u8);

impl Occupant {
    pub const EMPTY: Occupant = Occupant(0);
    pub const RED: Occupant = Occupant(1 << 0);
    pub const WHITE: Occupant = Occupant(1 << 1);
    pub const KING: Occupant = Occupant(1 << 2);
    pub const INVALID: Occupant = Occupant(1 << 3);

    pub const RED_KING: Occupant = Occupant(Self::RED.0 | Self::KING.0);
    pub const WHITE_KING: Occupant = Occupant(Self::WHITE.0 | Self::KING.0);

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        self.0 & Self::KING.0 != 0
    }

    /// True if this cell holds a piece of `player` (man or king).
    #[inline]
    pub const fn belongs_to(self, player: Player) -> bool {
        self.0 & player.occupant().0 != 0
    }

    /// The owner of the piece, if any.
    pub const fn owner(self) -> Option<Player> {
        if self.0 & Self::INVALID.0 != 0 {
            None
        } else if self.0 & Self::RED.0 != 0 {
            Some(Player::Red)
        } else if self.0 & Self::WHITE.0 != 0 {
            Some(Player::White)
        } else {
            None
        }
    }

    #[inline]
    pub const fn crowned(self) -> Occupant {
        Occupant(self.0 | Self::KING.0)
    }

    /// Same piece owned by the other side. Empty stays empty.
    #[inline]
    pub const fn color_swapped(self) -> Occupant {
        if self.0 == 0 {
            self
        } else {
            Occupant(self.0 ^ (Self::RED.0 | Self::WHITE.0))
        }
    }
}

impl BitOr for Occupant {
    type Output = Occupant;

    fn bitor(self, rhs: Occupant) -> Occupant {
        Occupant(self.0 | rhs.0)
    }
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    White,
}

impl Player {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::Red => Player::White,
            Player::White => Player::Red,
        }
    }

    /// The occupant flag used for this side's men.
    #[inline]
    pub const fn occupant(self) -> Occupant {
        match self {
            Player::Red => Occupant::RED,
            Player::White => Occupant::WHITE,
        }
    }

    /// Row delta of a man's forward step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::Red => 1,
            Player::White => -1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "red"),
            Player::White => write!(f, "white"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Occupant, Player};

    #[test]
    fn king_flag_combines_with_colour() {
        let red_king = Occupant::RED | Occupant::KING;
        assert_eq!(red_king, Occupant::RED_KING);
        assert!(red_king.is_king());
        assert!(red_king.belongs_to(Player::Red));
        assert!(!red_king.belongs_to(Player::White));
        assert_eq!(Occupant::WHITE.crowned(), Occupant::WHITE_KING);
    }

    #[test]
    fn invalid_has_no_owner() {
        assert_eq!(Occupant::INVALID.owner(), None);
        assert_eq!(Occupant::EMPTY.owner(), None);
        assert_eq!(Occupant::WHITE_KING.owner(), Some(Player::White));
        assert!(!Occupant::INVALID.belongs_to(Player::Red));
        assert!(!Occupant::INVALID.is_empty());
    }

    #[test]
    fn colour_swap_keeps_kings_and_empties() {
        assert_eq!(Occupant::RED_KING.color_swapped(), Occupant::WHITE_KING);
        assert_eq!(Occupant::WHITE.color_swapped(), Occupant::RED);
        assert_eq!(Occupant::EMPTY.color_swapped(), Occupant::EMPTY);
    }
}
