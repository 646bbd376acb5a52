//! Property tests for the move engine.
//!
//! The six adjacency cycles are hand-specified tables; an indexing mistake
//! produces a plausible-looking but wrong cube. These properties pin the
//! group structure down for every move and for arbitrary sequences.

use proptest::prelude::*;

use rust_cube::core::{inverse_sequence, CubeState, Move};
use rust_cube::solver::{decode, encode};

fn any_move() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::ALL.to_vec())
}

fn any_sequence(max_len: usize) -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(any_move(), 0..=max_len)
}

/// An arbitrary reachable state, as the cube after an arbitrary sequence.
fn any_state() -> impl Strategy<Value = CubeState> {
    any_sequence(40).prop_map(|seq| {
        let mut cube = CubeState::solved();
        cube.apply_all(&seq);
        cube
    })
}

proptest! {
    /// Every move has order 4 on every reachable state.
    #[test]
    fn every_move_has_order_four(state in any_state(), m in any_move()) {
        let mut cube = state.clone();
        for _ in 0..4 {
            cube.apply(m);
        }
        prop_assert_eq!(cube, state);
    }

    /// A move followed by its inverse is the identity.
    #[test]
    fn move_then_inverse_is_identity(state in any_state(), m in any_move()) {
        let mut cube = state.clone();
        cube.apply(m);
        cube.apply(m.inverse());
        prop_assert_eq!(cube, state);
    }

    /// Moves permute stickers; the per-color multiset never changes.
    #[test]
    fn color_multiset_is_invariant(seq in any_sequence(100)) {
        let mut cube = CubeState::solved();
        cube.apply_all(&seq);
        prop_assert_eq!(cube.color_counts(), [9usize; 6]);
    }

    /// A sequence followed by its reversed-inverted form restores the exact
    /// starting state, for lengths 0 through 100.
    #[test]
    fn sequence_then_inverse_restores_state(state in any_state(), seq in any_sequence(100)) {
        let mut cube = state.clone();
        cube.apply_all(&seq);
        cube.apply_all(&inverse_sequence(&seq));
        prop_assert_eq!(cube, state);
    }

    /// Decoding an encoded state gives the state back.
    #[test]
    fn encode_decode_round_trip(state in any_state()) {
        let facelets = encode(&state);
        prop_assert_eq!(facelets.len(), 54);
        prop_assert_eq!(decode(&facelets).unwrap(), state);
    }

    /// Any single move leaves a solved cube unsolved.
    #[test]
    fn single_move_perturbs_solved(m in any_move()) {
        let mut cube = CubeState::solved();
        cube.apply(m);
        prop_assert!(!cube.is_solved());
    }
}

/// Regression fixture: the commutator-style sequence R U R' U R U U R' U
/// has cycle order 4 on cube states — four repetitions return to solved,
/// fewer do not.
#[test]
fn commutator_sequence_has_order_four() {
    let seq = [
        Move::R,
        Move::U,
        Move::RPrime,
        Move::U,
        Move::R,
        Move::U,
        Move::U,
        Move::RPrime,
        Move::U,
    ];

    let mut cube = CubeState::solved();
    for repetition in 1..=4 {
        cube.apply_all(&seq);
        if repetition < 4 {
            assert!(!cube.is_solved(), "solved early after {repetition} reps");
        }
    }
    assert!(cube.is_solved());
}
