//! Fixed 32-cell board storage and coordinate helpers.
//!
//! The board is a plain owned array, so cloning a `Board` is a full deep copy
//! and no successor state can observe a mutation made on another.

use crate::game_state::checkers_rules::{CELL_COUNT, PLAYER_PIECES};
use crate::game_state::checkers_types::{Cell, Occupant, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Occupant; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [Occupant::EMPTY; CELL_COUNT],
        }
    }

    /// Twelve red men on cells 1..=12, twelve white men on cells 21..=32.
    pub fn starting() -> Self {
        let mut cells = [Occupant::EMPTY; CELL_COUNT];
        for i in 0..PLAYER_PIECES {
            cells[i] = Occupant::RED;
            cells[CELL_COUNT - 1 - i] = Occupant::WHITE;
        }
        Self { cells }
    }

    /// Builds a board from occupants in cell order (index 0 is cell 1).
    ///
    /// Panics if an occupant is `INVALID` or claims both colours.
    pub fn from_occupants(cells: [Occupant; CELL_COUNT]) -> Self {
        for occupant in cells {
            assert!(
                occupant != Occupant::INVALID
                    && !(occupant.belongs_to(Player::Red) && occupant.belongs_to(Player::White)),
                "occupant {occupant:?} cannot be stored on a board"
            );
        }
        Self { cells }
    }

    /// Content of a cell by index. Panics outside `1..=32`.
    #[inline]
    pub fn get(&self, cell: Cell) -> Occupant {
        assert!(is_valid_cell(cell), "cell {cell} is outside 1..={CELL_COUNT}");
        self.cells[usize::from(cell) - 1]
    }

    /// Content of a square by row and column, both counted from 0 at the top
    /// left. Off-board coordinates and light squares return `INVALID`.
    #[inline]
    pub fn get_row_col(&self, row: i8, col: i8) -> Occupant {
        match row_col_to_cell(row, col) {
            Some(cell) => self.cells[usize::from(cell) - 1],
            None => Occupant::INVALID,
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, cell: Cell, occupant: Occupant) {
        debug_assert!(occupant != Occupant::INVALID);
        self.cells[usize::from(cell) - 1] = occupant;
    }

    /// Cells paired with their occupants in ascending index order.
    pub fn occupants(&self) -> impl Iterator<Item = (Cell, Occupant)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, occupant)| ((i + 1) as Cell, *occupant))
    }

    pub fn piece_count(&self, player: Player) -> usize {
        self.cells.iter().filter(|o| o.belongs_to(player)).count()
    }

    /// Board rotated half a turn with the colours swapped.
    pub fn reversed(&self) -> Board {
        let mut cells = [Occupant::EMPTY; CELL_COUNT];
        for (i, slot) in cells.iter_mut().enumerate() {
            *slot = self.cells[CELL_COUNT - 1 - i].color_swapped();
        }
        Board { cells }
    }
}

#[inline]
pub const fn is_valid_cell(cell: Cell) -> bool {
    cell >= 1 && cell as usize <= CELL_COUNT
}

/// Row (0 at the top) of a cell index.
#[inline]
pub const fn cell_to_row(cell: Cell) -> i8 {
    ((cell - 1) >> 2) as i8
}

/// Column (0 at the left) of a cell index.
#[inline]
pub const fn cell_to_col(cell: Cell) -> i8 {
    let col = ((cell - 1) & 3) << 1;
    // Even rows start on column 1.
    if (cell - 1) & 4 == 0 {
        (col + 1) as i8
    } else {
        col as i8
    }
}

/// Cell index of a dark square, or `None` for light or off-board squares.
#[inline]
pub const fn row_col_to_cell(row: i8, col: i8) -> Option<Cell> {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return None;
    }
    if (row & 1) == (col & 1) {
        return None;
    }
    Some((row * 4 + (col >> 1) + 1) as Cell)
}

#[cfg(test)]
mod tests {
    use super::{cell_to_col, cell_to_row, row_col_to_cell, Board};
    use crate::game_state::checkers_types::{Occupant, Player};

    #[test]
    fn cell_coordinates_follow_the_numbering_diagram() {
        assert_eq!((cell_to_row(1), cell_to_col(1)), (0, 1));
        assert_eq!((cell_to_row(4), cell_to_col(4)), (0, 7));
        assert_eq!((cell_to_row(5), cell_to_col(5)), (1, 0));
        assert_eq!((cell_to_row(18), cell_to_col(18)), (4, 3));
        assert_eq!((cell_to_row(32), cell_to_col(32)), (7, 6));

        for cell in 1..=32u8 {
            assert_eq!(
                row_col_to_cell(cell_to_row(cell), cell_to_col(cell)),
                Some(cell)
            );
        }
    }

    #[test]
    fn row_col_query_is_invalid_off_board_and_on_light_squares() {
        let board = Board::starting();
        assert_eq!(board.get_row_col(-1, 0), Occupant::INVALID);
        assert_eq!(board.get_row_col(8, 1), Occupant::INVALID);
        assert_eq!(board.get_row_col(3, 9), Occupant::INVALID);
        assert_eq!(board.get_row_col(0, 0), Occupant::INVALID);
        assert_eq!(board.get_row_col(0, 1), Occupant::RED);
        assert_eq!(board.get_row_col(7, 0), Occupant::WHITE);
        assert_eq!(board.get_row_col(4, 1), Occupant::EMPTY);
    }

    #[test]
    fn starting_board_has_twelve_pieces_per_side() {
        let board = Board::starting();
        assert_eq!(board.piece_count(Player::Red), 12);
        assert_eq!(board.piece_count(Player::White), 12);
        assert_eq!(board.get(12), Occupant::RED);
        assert_eq!(board.get(13), Occupant::EMPTY);
        assert_eq!(board.get(21), Occupant::WHITE);
    }

    #[test]
    fn reversed_starting_board_is_the_starting_board() {
        assert_eq!(Board::starting().reversed(), Board::starting());
    }

    #[test]
    #[should_panic]
    fn get_rejects_cell_zero() {
        let _ = Board::empty().get(0);
    }
}
