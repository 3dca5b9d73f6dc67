//! Terminal-oriented board diagram.
//!
//! Presentational only: the output is meant for stderr diagnostics and has
//! no parser.

use crate::game_state::board::row_col_to_cell;
use crate::game_state::checkers_types::{Occupant, Player};
use crate::game_state::game_state::GameState;

const BOARD_EDGE: &str = "     -------------------\n";

/// Renders the board with cell numbers in the margins and a side panel.
///
/// Remarks such as "my turn" or "I won" are relative to `perspective`.
pub fn render_diagram(game_state: &GameState, perspective: Player) -> String {
    let red_pieces = game_state.board().piece_count(Player::Red);
    let white_pieces = game_state.board().piece_count(Player::White);

    let mut out = String::new();
    out.push_str(BOARD_EDGE);

    for row in 0..8i8 {
        let first = row_col_to_cell(row, if row % 2 == 0 { 1 } else { 0 }).unwrap_or(0);
        out.push_str(&format!(" {first:>3} | "));

        for col in 0..8i8 {
            out.push_str(cell_text(game_state.get_row_col(row, col)));
        }

        out.push_str(&format!("| {:<3}", first + 3));
        out.push_str(&side_panel_line(
            game_state,
            perspective,
            row,
            red_pieces,
            white_pieces,
        ));
        out.push('\n');
    }

    out.push_str(BOARD_EDGE);
    out
}

fn side_panel_line(
    game_state: &GameState,
    perspective: Player,
    row: i8,
    red_pieces: usize,
    white_pieces: usize,
) -> String {
    match row {
        2 => format!("    Last move: {}{}", game_state.last_move(), outcome_remark(game_state, perspective)),
        3 => {
            let turn = if game_state.next_player() == perspective {
                "my turn"
            } else {
                "opponent's turn"
            };
            format!(
                "    Next player: {} ({turn})",
                cell_text(game_state.next_player().occupant()).trim_end()
            )
        }
        4 => format!("    Moves until draw: {}", game_state.moves_until_draw()),
        5 => format!("    Red pieces:   {red_pieces}"),
        6 => format!("    White pieces: {white_pieces}"),
        _ => String::new(),
    }
}

fn outcome_remark(game_state: &GameState, perspective: Player) -> &'static str {
    let won = match perspective {
        Player::Red => game_state.is_red_win(),
        Player::White => game_state.is_white_win(),
    };
    let lost = match perspective {
        Player::Red => game_state.is_white_win(),
        Player::White => game_state.is_red_win(),
    };

    if won {
        " (I won)"
    } else if lost {
        " (I lost)"
    } else {
        ""
    }
}

fn cell_text(occupant: Occupant) -> &'static str {
    match occupant {
        Occupant::EMPTY => ". ",
        Occupant::RED => "r ",
        Occupant::WHITE => "w ",
        Occupant::RED_KING => "R ",
        Occupant::WHITE_KING => "W ",
        _ => "  ",
    }
}

#[cfg(test)]
mod tests {
    use super::render_diagram;
    use crate::game_state::checkers_types::Player;
    use crate::game_state::game_state::GameState;

    #[test]
    fn opening_diagram_has_margins_and_panel() {
        let diagram = render_diagram(&GameState::new_game(), Player::Red);
        println!("\n{diagram}");

        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[1].starts_with("   1 |   r   r   r   r | 4"));
        assert!(lines[8].starts_with("  29 | w   w   w   w   | 32"));
        assert!(lines[3].contains("Last move: BOG"));
        assert!(lines[4].contains("Next player: r (my turn)"));
        assert!(lines[5].contains("Moves until draw: 50"));
        assert!(lines[6].contains("Red pieces:   12"));
        assert!(lines[7].contains("White pieces: 12"));
    }

    #[test]
    fn terminal_states_carry_a_remark_for_the_viewer() {
        let game = GameState::from_message("........................w....... RW w 32")
            .expect("message should parse");

        assert!(render_diagram(&game, Player::Red).contains("Last move: RW (I won)"));
        assert!(render_diagram(&game, Player::White).contains("Last move: RW (I lost)"));
        assert!(render_diagram(&game, Player::White).contains("(my turn)"));
    }
}
