//! The reversi game engine.
//!
//! [`Game`] owns the board, the turn counter, the mover and the stone
//! tallies. All mutation goes through [`Game::make_move`] (or
//! [`Game::play`]), which validates the whole move before touching any
//! state, so a rejected move leaves the game exactly as it was.

use super::action::{Move, MoveError, MoveOutcome};
use super::config::{OpeningRule, RulesConfig};
use super::contracts::{Contract, LegalPlacement, MoveContract, PlayersTurn, WithinBounds};
use super::rules::{center_cells, execute_captures, legal_moves};
use super::{Board, Cell, Color, Phase, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Reversi game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Color,
    pub(crate) turn: u32,
    pub(crate) black_stones: u32,
    pub(crate) white_stones: u32,
    pub(crate) history: Vec<Move>,
    pub(crate) config: RulesConfig,
}

impl Game {
    /// Creates a new game: empty board, Black to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Creates a new game under the given rules.
    #[instrument]
    pub fn with_config(config: RulesConfig) -> Self {
        let mut game = Self {
            board: Board::new(),
            to_move: Color::Black,
            turn: 0,
            black_stones: 0,
            white_stones: 0,
            history: Vec::new(),
            config,
        };

        if *config.opening() == OpeningRule::Preset {
            for pos in center_cells() {
                let color = if pos.x() == pos.y() {
                    Color::White
                } else {
                    Color::Black
                };
                game.board.place(pos, color);
                game.credit(color, 0);
            }
            game.turn = config.opening().initial_turn();
            info!(turn = game.turn, "Started from preset centre");
        }

        game
    }

    /// Rebuilds a game by playing `moves` in order under the default rules.
    ///
    /// # Errors
    ///
    /// Returns the error of the first move that is not legal at its point in the sequence.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        Self::replay_with(RulesConfig::default(), moves)
    }

    /// Rebuilds a game by playing `moves` in order under `config`.
    ///
    /// Use this for histories recorded under a non-default opening, since
    /// [`Game::history`] holds only the moves and not the preset pieces.
    ///
    /// # Errors
    ///
    /// Returns the error of the first move that is not legal at its point in the sequence.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay_with(config: RulesConfig, moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::with_config(config);
        for action in moves {
            game.play(*action)?;
        }
        Ok(game)
    }

    /// Places a piece of `player` at `(x, y)`.
    ///
    /// Checks run in order: turn ownership, bounds, then the placement
    /// rules of the current phase. On success the placement and any
    /// captures are committed, the turn counter advances and the mover
    /// switches. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfTurn`] if `player` is not next to move.
    /// - [`MoveError::OutOfBounds`] if `x` or `y` is outside `0..8`.
    /// - [`MoveError::IllegalOpeningMove`] if an opening move is off-centre.
    /// - [`MoveError::CellOccupied`] if the cell already holds a piece.
    /// - [`MoveError::NoCapture`] if a main-phase move captures nothing.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn make_move(&mut self, player: Color, x: i32, y: i32) -> Result<MoveOutcome, MoveError> {
        let action = PlayersTurn::check(player, self)
            .and_then(|()| WithinBounds::check(player, x, y))
            .inspect_err(|e| debug!(error = %e, "Move rejected"))?;
        self.play(action)
    }

    /// Applies an already bounds-checked move.
    ///
    /// # Errors
    ///
    /// Same as [`Game::make_move`], minus [`MoveError::OutOfBounds`]. May also
    /// return [`MoveError::InvariantViolation`] when invariant checking is on
    /// and the resulting state is inconsistent; the move is then not committed.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn play(&mut self, action: Move) -> Result<MoveOutcome, MoveError> {
        let flipped = MoveContract::pre(self, &action)
            .inspect_err(|e| debug!(error = %e, "Move rejected"))?;
        let phase = self.phase();

        let mut next = self.clone();
        next.commit(action, &flipped);

        if *self.config.verify_invariants() {
            MoveContract::post(self, &next)?;
        }

        *self = next;
        debug!(
            captured = flipped.len(),
            black = self.black_stones,
            white = self.white_stones,
            "Move committed"
        );
        Ok(MoveOutcome { phase, flipped })
    }

    /// Positions that would flip if `player` placed at `(x, y)` now.
    ///
    /// Runs the bounds and placement checks of [`Game::make_move`] but not
    /// turn ownership, and never mutates.
    ///
    /// # Errors
    ///
    /// Any error [`Game::make_move`] reports other than [`MoveError::OutOfTurn`].
    #[instrument(skip(self))]
    pub fn preview(&self, player: Color, x: i32, y: i32) -> Result<Vec<Position>, MoveError> {
        let action = WithinBounds::check(player, x, y)?;
        LegalPlacement::check(&action, self)
    }

    /// Every position where `player` could legally place in the current phase.
    #[instrument(skip(self))]
    pub fn legal_moves(&self, player: Color) -> Vec<Position> {
        legal_moves(&self.board, player, self.phase())
    }

    /// Checks if `player` has any legal placement in the current phase.
    ///
    /// The engine never passes a turn on its own; hosts decide what a
    /// blocked player means.
    #[instrument(skip(self))]
    pub fn has_legal_move(&self, player: Color) -> bool {
        !self.legal_moves(player).is_empty()
    }

    /// Returns the cell at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is 8 or more; validate coordinates first.
    pub fn cell_at(&self, x: usize, y: usize) -> Cell {
        self.board.at(x, y)
    }

    /// Returns the color that moves next.
    pub fn next_to_move(&self) -> Color {
        self.to_move
    }

    /// Number of black pieces on the board.
    pub fn black_stone_count(&self) -> u32 {
        self.black_stones
    }

    /// Number of white pieces on the board.
    pub fn white_stone_count(&self) -> u32 {
        self.white_stones
    }

    /// Number of pieces of `color` on the board.
    pub fn stone_count(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black_stones,
            Color::White => self.white_stones,
        }
    }

    /// Returns a copy of the board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Number of moves completed, counting preset opening placements.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Phase that governs the next move.
    pub fn phase(&self) -> Phase {
        Phase::for_turn(self.turn)
    }

    /// Moves committed so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Rules this game was created with.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Writes a validated move and its captures into this state.
    fn commit(&mut self, action: Move, flipped: &[Position]) {
        execute_captures(&mut self.board, action.position, action.player, flipped);
        self.credit(action.player, flipped.len() as u32);
        self.turn += 1;
        self.history.push(action);
        self.to_move = action.player.opponent();
    }

    /// Tallies one placed piece plus `captured` flips for `color`.
    fn credit(&mut self, color: Color, captured: u32) {
        let (gainer, loser) = match color {
            Color::Black => (&mut self.black_stones, &mut self.white_stones),
            Color::White => (&mut self.white_stones, &mut self.black_stones),
        };
        *gainer += captured + 1;
        *loser = loser.saturating_sub(captured);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_empty() {
        let game = Game::new();
        assert_eq!(game.next_to_move(), Color::Black);
        assert_eq!(game.turn(), 0);
        assert_eq!(game.phase(), Phase::Opening);
        assert_eq!(game.black_stone_count(), 0);
        assert_eq!(game.white_stone_count(), 0);
        assert_eq!(game.board(), Board::new());
    }

    #[test]
    fn test_opening_move_places_without_capture() {
        let mut game = Game::new();
        let outcome = game.make_move(Color::Black, 4, 3).unwrap();

        assert_eq!(outcome.phase, Phase::Opening);
        assert_eq!(outcome.captured(), 0);
        assert_eq!(game.cell_at(4, 3), Cell::Occupied(Color::Black));
        assert_eq!(game.stone_count(Color::Black), 1);
        assert_eq!(game.history(), &[Move::at(Color::Black, 4, 3).unwrap()]);
    }

    #[test]
    fn test_rejected_move_keeps_state() {
        let mut game = Game::new();
        game.make_move(Color::Black, 3, 3).unwrap();
        let snapshot = game.clone();

        assert!(game.make_move(Color::White, 3, 3).is_err());
        assert!(game.make_move(Color::White, 0, 0).is_err());
        assert!(game.make_move(Color::Black, 4, 4).is_err());
        assert!(game.make_move(Color::White, 9, 4).is_err());

        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_preset_opening() {
        let config = RulesConfig::default().with_opening(OpeningRule::Preset);
        let game = Game::with_config(config);

        assert_eq!(game.turn(), 4);
        assert_eq!(game.phase(), Phase::Main);
        assert_eq!(game.next_to_move(), Color::Black);
        assert_eq!(game.black_stone_count(), 2);
        assert_eq!(game.white_stone_count(), 2);
        assert_eq!(game.cell_at(3, 3), Cell::Occupied(Color::White));
        assert_eq!(game.cell_at(4, 4), Cell::Occupied(Color::White));
        assert_eq!(game.cell_at(3, 4), Cell::Occupied(Color::Black));
        assert_eq!(game.cell_at(4, 3), Cell::Occupied(Color::Black));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_preset_opening_first_move_must_capture() {
        let config = RulesConfig::default().with_opening(OpeningRule::Preset);
        let mut game = Game::with_config(config);

        assert!(matches!(
            game.make_move(Color::Black, 2, 2),
            Err(MoveError::NoCapture(_))
        ));

        let outcome = game.make_move(Color::Black, 3, 2).unwrap();
        assert_eq!(outcome.flipped, vec![Position::new(3, 3).unwrap()]);
        assert_eq!(game.black_stone_count(), 4);
        assert_eq!(game.white_stone_count(), 1);
    }

    #[test]
    fn test_unchecked_config_still_plays() {
        let config = RulesConfig::default().with_verify_invariants(false);
        let mut game = Game::with_config(config);
        game.make_move(Color::Black, 3, 3).unwrap();

        assert_eq!(game.turn(), 1);
        assert!(!*game.config().verify_invariants());
    }
}
