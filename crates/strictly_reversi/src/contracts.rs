//! Contract-based validation for reversi.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, ReversiInvariants};
use super::rules::{captured_positions, is_center};
use super::{Board, Color, Game, Phase, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
///
/// A passing precondition yields a `Plan`: whatever the precondition had
/// to work out anyway and the transition needs in order to apply the action.
pub trait Contract<S, A> {
    /// Data produced by a successful precondition check.
    type Plan;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Plan, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::OutOfTurn`] unless `player` is next to move.
    #[instrument(skip(game))]
    pub fn check(player: Color, game: &Game) -> Result<(), MoveError> {
        if player != game.next_to_move() {
            Err(MoveError::OutOfTurn(player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: Coordinates must lie on the board.
pub struct WithinBounds;

impl WithinBounds {
    /// Turns raw coordinates into a [`Move`], or fails with [`MoveError::OutOfBounds`].
    #[instrument]
    pub fn check(player: Color, x: i32, y: i32) -> Result<Move, MoveError> {
        Move::at(player, x, y)
    }
}

/// Precondition: Opening moves fill an empty centre cell.
pub struct OpeningPlacement;

impl OpeningPlacement {
    /// Checks the centre constraint first, then occupancy.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if !is_center(mov.position) {
            Err(MoveError::IllegalOpeningMove(mov.position))
        } else if !board.is_empty(mov.position) {
            Err(MoveError::CellOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: Main-phase moves land on an empty cell and capture.
pub struct CapturesPieces;

impl CapturesPieces {
    /// Returns the positions the move would flip.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<Vec<Position>, MoveError> {
        if !board.is_empty(mov.position) {
            return Err(MoveError::CellOccupied(mov.position));
        }

        let captured = captured_positions(board, mov.position, mov.player);
        if captured.is_empty() {
            Err(MoveError::NoCapture(mov.position))
        } else {
            Ok(captured)
        }
    }
}

/// Composite precondition: the placement rules for the game's current phase.
///
/// Ignores turn ownership, so it can answer "what if" questions for either color.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Returns the positions the move would flip (none during the opening).
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<Vec<Position>, MoveError> {
        let board = game.board();
        match game.phase() {
            Phase::Opening => OpeningPlacement::check(mov, &board).map(|()| Vec::new()),
            Phase::Main => CapturesPieces::check(mov, &board),
        }
    }
}

/// Composite precondition: A move is legal if it's the player's turn and the
/// placement is legal for the current phase.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<Vec<Position>, MoveError> {
        PlayersTurn::check(mov.player, game)?;
        LegalPlacement::check(mov, game)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Must be player's turn
/// - Opening: empty centre cell
/// - Main: empty cell that captures
///
/// Postconditions:
/// - Turn counter advanced by exactly one
/// - Stone tallies match the board
/// - Players still alternate
/// - History remains consistent with board
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    type Plan = Vec<Position>;

    fn pre(game: &Game, action: &Move) -> Result<Vec<Position>, MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        if after.turn() != before.turn() + 1 {
            warn!(
                before = before.turn(),
                after = after.turn(),
                "Turn counter did not advance by one"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: turn counter did not advance by one".to_string(),
            ));
        }

        ReversiInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
