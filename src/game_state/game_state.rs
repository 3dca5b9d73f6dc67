//! Immutable game state.
//!
//! `GameState` bundles the board with the side to move, the draw counter and
//! the move that produced it. States are never changed once built: every
//! successor is a fresh deep copy with one move applied.

use std::fmt;

use crate::checkers_errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::MOVES_UNTIL_DRAW;
use crate::game_state::checkers_types::{Cell, Occupant, Player};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::checkers_move::Move;
use crate::utils::message_generator::generate_message;
use crate::utils::message_parser::parse_message;
use crate::utils::render_game_state::render_diagram;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) next_player: Player,
    pub(crate) moves_until_draw: u8,
    pub(crate) last_move: Move,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard opening position, red to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting(),
            next_player: Player::Red,
            moves_until_draw: MOVES_UNTIL_DRAW,
            last_move: Move::BEGIN_OF_GAME,
        }
    }

    /// Assembles a state from its parts. Panics if the counter exceeds 50.
    pub fn from_parts(board: Board, next_player: Player, moves_until_draw: u8, last_move: Move) -> Self {
        assert!(
            moves_until_draw <= MOVES_UNTIL_DRAW,
            "moves until draw {moves_until_draw} exceeds {MOVES_UNTIL_DRAW}"
        );
        Self {
            board,
            next_player,
            moves_until_draw,
            last_move,
        }
    }

    #[inline]
    pub fn from_message(message: &str) -> CheckersResult<Self> {
        parse_message(message)
    }

    #[inline]
    pub fn to_message(&self) -> String {
        generate_message(self)
    }

    /// Diagram view with remarks relative to `perspective`.
    #[inline]
    pub fn to_diagram(&self, perspective: Player) -> String {
        render_diagram(self, perspective)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> Occupant {
        self.board.get(cell)
    }

    #[inline]
    pub fn get_row_col(&self, row: i8, col: i8) -> Occupant {
        self.board.get_row_col(row, col)
    }

    #[inline]
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    #[inline]
    pub fn moves_until_draw(&self) -> u8 {
        self.moves_until_draw
    }

    /// The move that led to this state.
    #[inline]
    pub fn last_move(&self) -> &Move {
        &self.last_move
    }

    /// The state reached by playing `mv` from this one.
    ///
    /// Only moves produced by [`GameState::find_possible_moves`] for this
    /// state are valid input.
    #[inline]
    pub fn after_move(&self, mv: &Move) -> GameState {
        apply_move(self, mv)
    }

    /// Every legal successor for the side to move, in generation order.
    pub fn find_possible_moves(&self) -> Vec<GameState> {
        LegalMoveGenerator.find_possible_moves(self)
    }

    /// Same position with the board turned around and the colours swapped.
    pub fn reversed(&self) -> GameState {
        GameState {
            board: self.board.reversed(),
            next_player: self.next_player.opposite(),
            moves_until_draw: self.moves_until_draw,
            last_move: self.last_move.reversed(),
        }
    }

    #[inline]
    pub fn is_bog(&self) -> bool {
        self.last_move.is_bog()
    }

    #[inline]
    pub fn is_eog(&self) -> bool {
        self.last_move.is_eog()
    }

    #[inline]
    pub fn is_red_win(&self) -> bool {
        self.last_move.is_red_win()
    }

    #[inline]
    pub fn is_white_win(&self) -> bool {
        self.last_move.is_white_win()
    }

    #[inline]
    pub fn is_draw(&self) -> bool {
        self.last_move.is_draw()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_diagram(self.next_player))
    }
}
