use crate::game_state::board::{cell_to_col, cell_to_row};
use crate::game_state::checkers_rules::{RED_PROMOTION_ROW, WHITE_PROMOTION_ROW};
use crate::game_state::checkers_types::{Cell, Occupant, Player};

/// Down-left, down-right (rows increasing, toward white's side).
const DOWNWARD: [(i8, i8); 2] = [(1, -1), (1, 1)];
/// Up-left, up-right (rows decreasing, toward red's side).
const UPWARD: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

/// Diagonal directions a piece may use, in search order: down-left,
/// down-right, up-left, up-right. Men only move forward.
#[inline]
pub fn piece_directions(player: Player, is_king: bool) -> impl Iterator<Item = (i8, i8)> {
    let down = is_king || player.forward() > 0;
    let up = is_king || player.forward() < 0;
    DOWNWARD
        .into_iter()
        .filter(move |_| down)
        .chain(UPWARD.into_iter().filter(move |_| up))
}

#[inline]
pub const fn promotion_row(player: Player) -> i8 {
    match player {
        Player::Red => RED_PROMOTION_ROW,
        Player::White => WHITE_PROMOTION_ROW,
    }
}

/// The piece as it stands after arriving on `to`, crowned on its far row.
#[inline]
pub fn promote_on_arrival(piece: Occupant, to: Cell) -> Occupant {
    match piece.owner() {
        Some(player) if cell_to_row(to) == promotion_row(player) => piece.crowned(),
        _ => piece,
    }
}

#[inline]
pub fn cell_coordinates(cell: Cell) -> (i8, i8) {
    (cell_to_row(cell), cell_to_col(cell))
}

#[cfg(test)]
mod tests {
    use super::{piece_directions, promote_on_arrival};
    use crate::game_state::checkers_types::{Occupant, Player};

    #[test]
    fn men_move_forward_and_kings_both_ways() {
        let red: Vec<_> = piece_directions(Player::Red, false).collect();
        let white: Vec<_> = piece_directions(Player::White, false).collect();
        let king: Vec<_> = piece_directions(Player::White, true).collect();

        assert_eq!(red, vec![(1, -1), (1, 1)]);
        assert_eq!(white, vec![(-1, -1), (-1, 1)]);
        assert_eq!(king, vec![(1, -1), (1, 1), (-1, -1), (-1, 1)]);
    }

    #[test]
    fn crowning_happens_only_on_the_far_row() {
        assert_eq!(promote_on_arrival(Occupant::RED, 30), Occupant::RED_KING);
        assert_eq!(promote_on_arrival(Occupant::RED, 3), Occupant::RED);
        assert_eq!(promote_on_arrival(Occupant::WHITE, 3), Occupant::WHITE_KING);
        assert_eq!(promote_on_arrival(Occupant::WHITE, 30), Occupant::WHITE);
        assert_eq!(promote_on_arrival(Occupant::RED_KING, 32), Occupant::RED_KING);
    }
}
