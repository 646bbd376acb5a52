//! Session-level behavior: history, undo, scramble determinism, and the
//! degraded fallback path when the solver is unavailable.

use rust_cube::core::Move;
use rust_cube::solver::{Oracle, OracleError, SolveAdapter, SolveError};
use rust_cube::Session;

#[test]
fn same_seed_same_scramble() {
    let mut a = Session::new(42);
    let mut b = Session::new(42);

    assert_eq!(a.scramble(20), b.scramble(20));
    assert_eq!(a.cube(), b.cube());
}

#[test]
fn undo_interleaved_with_apply() {
    let mut session = Session::new(0);
    session.apply(Move::R);
    session.apply(Move::U);

    assert_eq!(session.undo_last(), Some(Move::U));
    session.apply(Move::F);
    assert_eq!(session.history().as_slice(), &[Move::R, Move::F]);

    assert_eq!(session.undo_last(), Some(Move::F));
    assert_eq!(session.undo_last(), Some(Move::R));
    assert!(session.is_solved());
    assert_eq!(session.undo_last(), None);
}

/// Oracle that is never reachable, forcing the fallback path.
struct DownOracle;

impl Oracle for DownOracle {
    fn solve(&self, _facelets: &str) -> Result<String, OracleError> {
        Err(OracleError::Spawn {
            program: "/nonexistent".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }
}

#[test]
fn history_fallback_after_solver_failure() {
    let mut session = Session::new(77);
    session.scramble(40);

    let adapter = SolveAdapter::new(DownOracle);
    let err = session.solve_with(&adapter).unwrap_err();
    assert!(matches!(err, SolveError::Invocation(_)));

    // Degraded mode: unwind the recorded history instead.
    let fallback = session.history_fallback();
    for m in fallback {
        session.apply(m);
    }
    assert!(session.is_solved());
}
