//! Move-path enumeration for validating the generator.
//!
//! Walks the successor tree to a fixed depth and counts the leaves, broken
//! down by the kind of move that reached them.

use crate::game_state::checkers_types::Player;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    /// Pieces captured by the leaf moves.
    pub captures: usize,
    pub promotions: usize,
    pub draws: usize,
    pub wins: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.draws += rhs.draws;
        self.wins += rhs.wins;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for next in generator.find_possible_moves(game_state) {
        total.merge(perft_recurse(generator, game_state, &next, depth, 1));
    }
    total
}

pub fn perft_legal(game_state: &GameState, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, game_state, depth)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    parent: &GameState,
    state: &GameState,
    search_depth: u8,
    current_depth: u8,
) -> PerftCounts {
    if current_depth == search_depth {
        let mv = state.last_move();
        let mover = parent.next_player();

        return PerftCounts {
            nodes: 1,
            captures: mv.captures(),
            promotions: usize::from(king_count(state, mover) > king_count(parent, mover)),
            draws: usize::from(mv.is_draw()),
            wins: usize::from(mv.is_red_win() || mv.is_white_win()),
        };
    }

    let mut total = PerftCounts::default();
    for next in generator.find_possible_moves(state) {
        total.merge(perft_recurse(generator, state, &next, search_depth, current_depth + 1));
    }
    total
}

fn king_count(game_state: &GameState, player: Player) -> usize {
    game_state
        .board()
        .occupants()
        .filter(|(_, occupant)| occupant.belongs_to(player) && occupant.is_king())
        .count()
}
