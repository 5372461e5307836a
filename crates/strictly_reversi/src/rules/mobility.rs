//! Legal move discovery.

use super::super::{Board, Color, Phase, Position};
use super::capture::has_capture;
use super::opening::is_center;
use tracing::instrument;

/// Checks if `color` could legally place at `pos` in the given phase.
///
/// Turn ownership is not considered.
pub fn is_legal_placement(board: &Board, pos: Position, color: Color, phase: Phase) -> bool {
    if !board.is_empty(pos) {
        return false;
    }
    match phase {
        Phase::Opening => is_center(pos),
        Phase::Main => has_capture(board, pos, color),
    }
}

/// Every position where `color` could legally place, in row-major order.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board, color: Color, phase: Phase) -> Vec<Position> {
    Position::all()
        .filter(|pos| is_legal_placement(board, *pos, color, phase))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn test_opening_offers_empty_center_cells() {
        let mut board = Board::new();
        assert_eq!(legal_moves(&board, Color::Black, Phase::Opening).len(), 4);

        board.place(pos(3, 3), Color::Black);
        let moves = legal_moves(&board, Color::White, Phase::Opening);
        assert_eq!(moves, vec![pos(4, 3), pos(3, 4), pos(4, 4)]);
    }

    #[test]
    fn test_standard_start_has_four_moves_each() {
        let mut board = Board::new();
        board.place(pos(3, 3), Color::White);
        board.place(pos(4, 4), Color::White);
        board.place(pos(3, 4), Color::Black);
        board.place(pos(4, 3), Color::Black);

        let black = legal_moves(&board, Color::Black, Phase::Main);
        assert_eq!(black, vec![pos(3, 2), pos(2, 3), pos(5, 4), pos(4, 5)]);

        let white = legal_moves(&board, Color::White, Phase::Main);
        assert_eq!(white, vec![pos(4, 2), pos(5, 3), pos(2, 4), pos(3, 5)]);
    }

    #[test]
    fn test_single_color_board_has_no_moves() {
        let mut board = Board::new();
        board.place(pos(3, 3), Color::Black);
        board.place(pos(4, 4), Color::Black);

        assert!(legal_moves(&board, Color::Black, Phase::Main).is_empty());
        assert!(legal_moves(&board, Color::White, Phase::Main).is_empty());
    }
}
