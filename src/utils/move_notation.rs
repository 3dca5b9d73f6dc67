//! Compact move notation used in state messages.
//!
//! Sentinels are the words `BOG`, `DRAW`, `RW` and `WW`. A simple move is
//! written `from-to` (`9-14`) and a capture chain lists every visited cell
//! joined with `x` (`9x18x27`). The token never contains whitespace.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::board::{cell_to_col, cell_to_row, is_valid_cell};
use crate::game_state::checkers_types::Cell;
use crate::moves::checkers_move::{Move, Sentinel};

pub const BEGIN_OF_GAME_TOKEN: &str = "BOG";
pub const DRAW_TOKEN: &str = "DRAW";
pub const RED_WINS_TOKEN: &str = "RW";
pub const WHITE_WINS_TOKEN: &str = "WW";

const SIMPLE_SEPARATOR: char = '-';
const JUMP_SEPARATOR: char = 'x';

pub fn move_to_notation(mv: &Move) -> String {
    match mv {
        Move::Sentinel(Sentinel::BeginOfGame) => BEGIN_OF_GAME_TOKEN.to_owned(),
        Move::Sentinel(Sentinel::Draw) => DRAW_TOKEN.to_owned(),
        Move::Sentinel(Sentinel::RedWins) => RED_WINS_TOKEN.to_owned(),
        Move::Sentinel(Sentinel::WhiteWins) => WHITE_WINS_TOKEN.to_owned(),
        Move::Simple { from, to } => format!("{from}{SIMPLE_SEPARATOR}{to}"),
        Move::Jump(cells) => cells
            .iter()
            .map(|cell| cell.to_string())
            .collect::<Vec<_>>()
            .join(&JUMP_SEPARATOR.to_string()),
    }
}

pub fn parse_move_notation(token: &str) -> CheckersResult<Move> {
    match token {
        BEGIN_OF_GAME_TOKEN => return Ok(Move::BEGIN_OF_GAME),
        DRAW_TOKEN => return Ok(Move::DRAW),
        RED_WINS_TOKEN => return Ok(Move::RED_WINS),
        WHITE_WINS_TOKEN => return Ok(Move::WHITE_WINS),
        _ => {}
    }

    let has_simple = token.contains(SIMPLE_SEPARATOR);
    let has_jump = token.contains(JUMP_SEPARATOR);

    match (has_simple, has_jump) {
        (true, true) => Err(CheckersError::invalid_move(token, "mixed separators")),
        (true, false) => {
            let cells = parse_cells(token, SIMPLE_SEPARATOR)?;
            let &[from, to] = cells.as_slice() else {
                return Err(CheckersError::invalid_move(
                    token,
                    "a simple move has exactly two cells",
                ));
            };
            if !is_diagonal_hop(from, to, 1) {
                return Err(CheckersError::invalid_move(
                    token,
                    format!("{from} to {to} is not one diagonal step"),
                ));
            }
            Ok(Move::Simple { from, to })
        }
        (false, true) => {
            let cells = parse_cells(token, JUMP_SEPARATOR)?;
            if cells.len() < 2 {
                return Err(CheckersError::invalid_move(
                    token,
                    "a jump needs a start and at least one landing",
                ));
            }
            if let Some(pair) = cells.windows(2).find(|pair| !is_diagonal_hop(pair[0], pair[1], 2)) {
                return Err(CheckersError::invalid_move(
                    token,
                    format!("{} to {} is not a capturing hop", pair[0], pair[1]),
                ));
            }
            Ok(Move::Jump(cells))
        }
        (false, false) => Err(CheckersError::invalid_move(token, "unknown move")),
    }
}

fn parse_cells(token: &str, separator: char) -> CheckersResult<Vec<Cell>> {
    token
        .split(separator)
        .map(|part| {
            part.parse::<Cell>()
                .ok()
                .filter(|cell| is_valid_cell(*cell))
                .ok_or_else(|| {
                    CheckersError::invalid_move(token, format!("'{part}' is not a cell in 1..=32"))
                })
        })
        .collect()
}

fn is_diagonal_hop(from: Cell, to: Cell, distance: i8) -> bool {
    let dr = (cell_to_row(to) - cell_to_row(from)).abs();
    let dc = (cell_to_col(to) - cell_to_col(from)).abs();
    dr == distance && dc == distance
}
