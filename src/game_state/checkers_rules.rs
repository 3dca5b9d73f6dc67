//! Canonical checkers-rule constants.
//!
//! Cells are numbered 1..=32 over the dark squares, row-major from the top:
//!
//! ```text
//!    col 0  1  2  3  4  5  6  7
//! row  -------------------------
//!  0  |     1     2     3     4 |
//!  1  |  5     6     7     8    |
//!  2  |     9    10    11    12 |
//!  3  | 13    14    15    16    |
//!  4  |    17    18    19    20 |
//!  5  | 21    22    23    24    |
//!  6  |    25    26    27    28 |
//!  7  | 29    30    31    32    |
//!      -------------------------
//! ```
//!
//! Red starts on rows 0..=2 and moves down, white starts on rows 5..=7 and
//! moves up. Red moves first.

/// Number of playable (dark) cells.
pub const CELL_COUNT: usize = 32;

/// Pieces per side in the opening position.
pub const PLAYER_PIECES: usize = 12;

/// Plies without a capture before the game is drawn (25 moves per side).
pub const MOVES_UNTIL_DRAW: u8 = 50;

/// Row on which a red man is crowned.
pub const RED_PROMOTION_ROW: i8 = 7;

/// Row on which a white man is crowned.
pub const WHITE_PROMOTION_ROW: i8 = 0;

/// Opening position in message form, red to move.
pub const STARTING_POSITION_MESSAGE: &str = "rrrrrrrrrrrr........wwwwwwwwwwww BOG r 50";
