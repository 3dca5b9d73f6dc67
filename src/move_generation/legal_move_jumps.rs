//! Recursive capture-chain search.
//!
//! The search walks the capture tree depth first over a scratch board. The
//! moving piece is lifted off its start cell for the whole search and every
//! jumped piece is lifted for the duration of its branch, so a chain can
//! neither jump the same piece twice nor be blocked by its own start cell.
//! Each lift is a [`LiftedCell`] guard that puts the occupant back when the
//! branch returns, so the scratch board is unchanged once the search ends.
//!
//! Only maximal chains are emitted: a branch becomes a move when no further
//! capture is possible from its last landing cell.

use std::ops::{Deref, DerefMut};

use crate::game_state::board::{row_col_to_cell, Board};
use crate::game_state::checkers_types::{Cell, Occupant, Player};
use crate::move_generation::legal_move_shared::{cell_coordinates, piece_directions, promotion_row};
use crate::moves::checkers_move::Move;

/// A cell emptied for as long as the guard lives.
struct LiftedCell<'a> {
    board: &'a mut Board,
    cell: Cell,
    occupant: Occupant,
}

impl<'a> LiftedCell<'a> {
    fn lift(board: &'a mut Board, cell: Cell) -> Self {
        let occupant = board.get(cell);
        board.set(cell, Occupant::EMPTY);
        Self {
            board,
            cell,
            occupant,
        }
    }
}

impl Deref for LiftedCell<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for LiftedCell<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for LiftedCell<'_> {
    fn drop(&mut self) {
        self.board.set(self.cell, self.occupant);
    }
}

/// Appends every maximal capture chain of the piece on `from` to `moves`.
///
/// Returns true if the piece has at least one capture. `scratch` is restored
/// to its original content before returning.
pub fn generate_jumps(scratch: &mut Board, player: Player, from: Cell, moves: &mut Vec<Move>) -> bool {
    let is_king = scratch.get(from).is_king();
    let mut lifted = LiftedCell::lift(scratch, from);
    let mut chain = vec![from];
    extend_chain(&mut lifted, player, is_king, &mut chain, moves)
}

fn extend_chain(
    board: &mut Board,
    player: Player,
    is_king: bool,
    chain: &mut Vec<Cell>,
    moves: &mut Vec<Move>,
) -> bool {
    let Some(&from) = chain.last() else {
        return false;
    };
    let (row, col) = cell_coordinates(from);
    let opponent = player.opposite();
    let mut found = false;

    for (dr, dc) in piece_directions(player, is_king) {
        if !board.get_row_col(row + dr, col + dc).belongs_to(opponent) {
            continue;
        }
        if board.get_row_col(row + 2 * dr, col + 2 * dc) != Occupant::EMPTY {
            continue;
        }
        let (Some(captured), Some(landing)) = (
            row_col_to_cell(row + dr, col + dc),
            row_col_to_cell(row + 2 * dr, col + 2 * dc),
        ) else {
            continue;
        };

        found = true;
        let crowned = is_king || row + 2 * dr == promotion_row(player);
        let mut without_captured = LiftedCell::lift(board, captured);
        chain.push(landing);
        extend_chain(&mut without_captured, player, crowned, chain, moves);
        chain.pop();
    }

    if !found && chain.len() > 1 {
        moves.push(Move::Jump(chain.clone()));
    }
    found
}
