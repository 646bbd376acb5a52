//! Move history: recording, single-step undo, and the reversed-inverse
//! fallback sequence.
//!
//! History is the caller's record of how a state was reached. Undo applies
//! the inverse of the most recent move; [`MoveHistory::unwind`] produces the
//! whole reversed-inverse sequence, which doubles as a degraded "solution"
//! when the external solver is unavailable. That fallback only works when
//! the state was actually reached by the recorded history rather than by
//! arbitrary sticker input.

use serde::{Deserialize, Serialize};

use crate::core::{inverse_sequence, CubeState, Move};

/// Ordered record of applied moves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move.
    pub fn record(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Undo the most recent move against the given cube.
    ///
    /// Applies the inverse of the last recorded move, pops it, and returns
    /// the move that was undone. On an empty history this is a no-op
    /// returning `None`, not an error; callers that need to distinguish
    /// "nothing to undo" check [`MoveHistory::is_empty`] first.
    pub fn undo(&mut self, cube: &mut CubeState) -> Option<Move> {
        let last = self.moves.pop()?;
        cube.apply(last.inverse());
        Some(last)
    }

    /// The reversed, move-by-move-inverted sequence.
    ///
    /// Replaying this against the cube returns it to the state it had before
    /// the first recorded move.
    #[must_use]
    pub fn unwind(&self) -> Vec<Move> {
        inverse_sequence(&self.moves)
    }

    /// Recorded moves, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Forget all recorded moves.
    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
