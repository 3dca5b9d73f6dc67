use crate::game_state::board::row_col_to_cell;
use crate::game_state::checkers_rules::MOVES_UNTIL_DRAW;
use crate::game_state::checkers_types::{Cell, Occupant};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{cell_coordinates, promote_on_arrival};
use crate::moves::checkers_move::Move;

/// Returns a deep copy of `game_state` with `mv` played.
///
/// `mv` must have been generated for `game_state`; a move whose pieces do
/// not belong to the side to move panics.
pub fn apply_move(game_state: &GameState, mv: &Move) -> GameState {
    let mut next = game_state.clone();
    let mover = game_state.next_player;

    match mv {
        Move::Jump(cells) => {
            for hop in cells.windows(2) {
                let (from, to) = (hop[0], hop[1]);
                let piece = next.board.get(from);
                assert!(
                    piece.belongs_to(mover),
                    "jump {mv} starts from cell {from} which holds no {mover} piece"
                );

                next.board.set(from, Occupant::EMPTY);
                next.board.set(to, promote_on_arrival(piece, to));
                next.board.set(jumped_cell(from, to), Occupant::EMPTY);
            }
            next.moves_until_draw = MOVES_UNTIL_DRAW;
        }
        Move::Simple { from, to } => {
            let piece = next.board.get(*from);
            assert!(
                piece.belongs_to(mover),
                "move {mv} starts from cell {from} which holds no {mover} piece"
            );

            next.board.set(*from, Occupant::EMPTY);
            next.board.set(*to, promote_on_arrival(piece, *to));
            next.moves_until_draw = next.moves_until_draw.saturating_sub(1);
        }
        Move::Sentinel(_) => {}
    }

    next.last_move = mv.clone();
    next.next_player = mover.opposite();
    next
}

/// Cell between the two ends of a capturing hop.
fn jumped_cell(from: Cell, to: Cell) -> Cell {
    let (from_row, from_col) = cell_coordinates(from);
    let (to_row, to_col) = cell_coordinates(to);
    match row_col_to_cell((from_row + to_row) / 2, (from_col + to_col) / 2) {
        Some(cell) if (to_row - from_row).abs() == 2 => cell,
        _ => panic!("{from}x{to} is not a capturing hop"),
    }
}
