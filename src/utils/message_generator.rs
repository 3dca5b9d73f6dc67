//! GameState-to-message encoder.
//!
//! One line: 32 board symbols, the move notation, the next-player symbol and
//! the draw counter, separated by single spaces.

use crate::game_state::checkers_types::{Occupant, Player};
use crate::game_state::game_state::GameState;
use crate::utils::move_notation::move_to_notation;

pub fn generate_message(game_state: &GameState) -> String {
    let board: String = game_state
        .board()
        .occupants()
        .map(|(_, occupant)| occupant_to_symbol(occupant))
        .collect();

    format!(
        "{} {} {} {}",
        board,
        move_to_notation(game_state.last_move()),
        player_to_symbol(game_state.next_player()),
        game_state.moves_until_draw()
    )
}

pub(crate) fn occupant_to_symbol(occupant: Occupant) -> char {
    match occupant {
        Occupant::EMPTY => '.',
        Occupant::RED => 'r',
        Occupant::WHITE => 'w',
        Occupant::RED_KING => 'R',
        Occupant::WHITE_KING => 'W',
        _ => unreachable!("occupant {occupant:?} is never stored on a board"),
    }
}

pub(crate) fn player_to_symbol(player: Player) -> char {
    occupant_to_symbol(player.occupant())
}

#[cfg(test)]
mod tests {
    use super::generate_message;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_rules::STARTING_POSITION_MESSAGE;
    use crate::game_state::checkers_types::{Occupant, Player};
    use crate::game_state::game_state::GameState;
    use crate::moves::checkers_move::Move;

    #[test]
    fn starting_position_message() {
        assert_eq!(generate_message(&GameState::new_game()), STARTING_POSITION_MESSAGE);
    }

    #[test]
    fn kings_and_jumps_are_encoded() {
        let mut cells = [Occupant::EMPTY; 32];
        cells[0] = Occupant::WHITE_KING;
        cells[31] = Occupant::RED_KING;
        cells[17] = Occupant::RED;
        let state = GameState::from_parts(
            Board::from_occupants(cells),
            Player::White,
            50,
            Move::jump(vec![9, 18]),
        );

        assert_eq!(
            generate_message(&state),
            "W................r.............R 9x18 w 50"
        );
    }
}
