//! Message-to-GameState parser.
//!
//! Every field is validated; nothing is defaulted. Errors name the field that
//! was rejected.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{CELL_COUNT, MOVES_UNTIL_DRAW};
use crate::game_state::checkers_types::{Occupant, Player};
use crate::game_state::game_state::GameState;
use crate::utils::move_notation::parse_move_notation;

pub fn parse_message(message: &str) -> CheckersResult<GameState> {
    let parts: Vec<&str> = message.split_whitespace().collect();
    let &[board_part, move_part, player_part, counter_part] = parts.as_slice() else {
        return Err(CheckersError::WrongFieldCount { found: parts.len() });
    };

    let board = parse_board(board_part)?;
    let last_move = parse_move_notation(move_part)?;
    let next_player = parse_next_player(player_part)?;
    let moves_until_draw = parse_moves_until_draw(counter_part)?;

    Ok(GameState::from_parts(board, next_player, moves_until_draw, last_move))
}

fn parse_board(board_part: &str) -> CheckersResult<Board> {
    let symbols: Vec<char> = board_part.chars().collect();
    if symbols.len() != CELL_COUNT {
        return Err(CheckersError::WrongBoardLength { found: symbols.len() });
    }

    let mut cells = [Occupant::EMPTY; CELL_COUNT];
    for (i, symbol) in symbols.into_iter().enumerate() {
        cells[i] = occupant_from_symbol(symbol)
            .ok_or(CheckersError::InvalidBoardSymbol { cell: i + 1, symbol })?;
    }

    Ok(Board::from_occupants(cells))
}

fn parse_next_player(player_part: &str) -> CheckersResult<Player> {
    match player_part {
        "r" => Ok(Player::Red),
        "w" => Ok(Player::White),
        _ => Err(CheckersError::InvalidNextPlayer {
            token: player_part.to_owned(),
        }),
    }
}

fn parse_moves_until_draw(counter_part: &str) -> CheckersResult<u8> {
    counter_part
        .parse::<u8>()
        .ok()
        .filter(|counter| *counter <= MOVES_UNTIL_DRAW)
        .ok_or_else(|| CheckersError::InvalidMovesUntilDraw {
            token: counter_part.to_owned(),
        })
}

fn occupant_from_symbol(symbol: char) -> Option<Occupant> {
    match symbol {
        '.' => Some(Occupant::EMPTY),
        'r' => Some(Occupant::RED),
        'w' => Some(Occupant::WHITE),
        'R' => Some(Occupant::RED_KING),
        'W' => Some(Occupant::WHITE_KING),
        _ => None,
    }
}
