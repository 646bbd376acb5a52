//! Caller-owned application state.
//!
//! Cube, history, and scramble RNG live in an explicit [`Session`] struct
//! the caller owns and passes around; the engine itself holds no global or
//! static state. A
//! session is single-threaded by construction: it is exclusively owned, and
//! sharing one across threads requires external synchronization.

use serde::{Deserialize, Serialize};

use crate::core::{CubeState, Move, RngState, ScrambleRng};
use crate::history::MoveHistory;
use crate::solver::{Oracle, Solution, SolveAdapter, SolveError};

/// A cube, its move history, and the scramble RNG, owned together.
///
/// All mutation a UI layer may perform goes through this type: apply,
/// scramble, undo, solve. Reads go through [`Session::cube`].
#[derive(Clone, Debug)]
pub struct Session {
    cube: CubeState,
    history: MoveHistory,
    rng: ScrambleRng,
}

impl Session {
    /// A fresh session holding a solved cube.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cube: CubeState::solved(),
            history: MoveHistory::new(),
            rng: ScrambleRng::new(seed),
        }
    }

    /// The current cube state, for rendering and encoding.
    #[must_use]
    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    /// The recorded history, oldest move first.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Whether the cube is in the canonical solved configuration.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    /// Apply one move and record it.
    pub fn apply(&mut self, m: Move) {
        self.cube.apply(m);
        self.history.record(m);
    }

    /// Scramble with `n` random moves, recording each.
    ///
    /// Returns the scramble sequence. Because the moves are recorded,
    /// [`Session::undo_last`] and [`Session::history_fallback`] both cover
    /// the scramble.
    pub fn scramble(&mut self, n: usize) -> Vec<Move> {
        let seq = self.cube.scramble(&mut self.rng, n);
        for &m in &seq {
            self.history.record(m);
        }
        seq
    }

    /// Undo the most recent move, if any.
    pub fn undo_last(&mut self) -> Option<Move> {
        self.history.undo(&mut self.cube)
    }

    /// Ask the external solver for a solution to the current state.
    ///
    /// The solution is returned, not applied; the caller replays it move by
    /// move (and may verify [`Session::is_solved`] afterwards).
    pub fn solve_with<O: Oracle>(
        &self,
        adapter: &SolveAdapter<O>,
    ) -> Result<Solution, SolveError> {
        adapter.request_solution(&self.cube)
    }

    /// The degraded fallback when the solver is unavailable: replay the
    /// recorded history backwards, each move inverted.
    ///
    /// Only returns to the pre-history state if the cube was reached through
    /// this session's moves rather than arbitrary sticker edits.
    #[must_use]
    pub fn history_fallback(&self) -> Vec<Move> {
        self.history.unwind()
    }

    /// Reset to a solved cube and empty history; the RNG keeps its stream.
    pub fn reset(&mut self) {
        self.cube = CubeState::solved();
        self.history.clear();
    }

    /// Snapshot for persistence.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            cube: self.cube.clone(),
            history: self.history.clone(),
            rng: self.rng.state(),
        }
    }

    /// Restore a session from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        Self {
            cube: snapshot.cube,
            history: snapshot.history,
            rng: ScrambleRng::from_state(&snapshot.rng),
        }
    }
}

/// Serializable session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub cube: CubeState,
    pub history: MoveHistory,
    pub rng: RngState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_records_history() {
        let mut session = Session::new(1);
        session.apply(Move::R);
        session.apply(Move::UPrime);

        assert_eq!(session.history().as_slice(), &[Move::R, Move::UPrime]);
        assert!(!session.is_solved());
    }

    #[test]
    fn test_undo_covers_scramble() {
        let mut session = Session::new(5);
        let seq = session.scramble(10);
        assert_eq!(seq.len(), 10);
        assert_eq!(session.history().len(), 10);

        for _ in 0..10 {
            assert!(session.undo_last().is_some());
        }
        assert!(session.is_solved());
        assert_eq!(session.undo_last(), None);
    }

    #[test]
    fn test_history_fallback_solves() {
        let mut session = Session::new(11);
        session.scramble(30);
        session.apply(Move::F);

        let fallback = session.history_fallback();
        let mut cube = session.cube().clone();
        cube.apply_all(&fallback);
        assert!(cube.is_solved());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut session = Session::new(3);
        session.scramble(8);

        let json = serde_json::to_string(&session.snapshot()).unwrap();
        let snapshot: SessionSnapshot = serde_json::from_str(&json).unwrap();
        let mut restored = Session::from_snapshot(snapshot);

        // Same cube, and the RNG stream continues identically.
        assert_eq!(restored.cube(), session.cube());
        assert_eq!(restored.scramble(5), session.scramble(5));
    }

    #[test]
    fn test_reset() {
        let mut session = Session::new(9);
        session.scramble(12);
        session.reset();

        assert!(session.is_solved());
        assert!(session.history().is_empty());
    }
}
