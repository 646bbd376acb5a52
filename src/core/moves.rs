//! The quarter-turn move vocabulary.
//!
//! Twelve moves: each of the six faces turned clockwise or counter-clockwise
//! (prime). A 180° turn is not a distinct move; it is two consecutive
//! clockwise turns, and the solver token parser expands it that way.
//!
//! Moves form a closed enum rather than strings, so an invalid move is
//! unrepresentable and every `match` over moves is exhaustiveness-checked.

use serde::{Deserialize, Serialize};

use super::face::Face;

/// One quarter-turn move.
///
/// Naming follows standard cube notation: `R` turns the Right face
/// clockwise (viewed from outside that face), `RPrime` is its inverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    R,
    RPrime,
    L,
    LPrime,
    U,
    UPrime,
    D,
    DPrime,
    F,
    FPrime,
    B,
    BPrime,
}

impl Move {
    /// All twelve moves.
    pub const ALL: [Move; 12] = [
        Move::R,
        Move::RPrime,
        Move::L,
        Move::LPrime,
        Move::U,
        Move::UPrime,
        Move::D,
        Move::DPrime,
        Move::F,
        Move::FPrime,
        Move::B,
        Move::BPrime,
    ];

    /// The face this move turns.
    #[must_use]
    pub const fn face(self) -> Face {
        match self {
            Move::R | Move::RPrime => Face::Right,
            Move::L | Move::LPrime => Face::Left,
            Move::U | Move::UPrime => Face::Up,
            Move::D | Move::DPrime => Face::Down,
            Move::F | Move::FPrime => Face::Front,
            Move::B | Move::BPrime => Face::Back,
        }
    }

    /// Whether this is a counter-clockwise (prime) move.
    #[must_use]
    pub const fn is_prime(self) -> bool {
        matches!(
            self,
            Move::RPrime
                | Move::LPrime
                | Move::UPrime
                | Move::DPrime
                | Move::FPrime
                | Move::BPrime
        )
    }

    /// The group inverse of this move.
    ///
    /// Quarter turns have order 4, so the inverse of a clockwise turn is its
    /// prime and vice versa.
    ///
    /// ```
    /// use rust_cube::core::Move;
    ///
    /// assert_eq!(Move::R.inverse(), Move::RPrime);
    /// assert_eq!(Move::RPrime.inverse(), Move::R);
    /// ```
    #[must_use]
    pub const fn inverse(self) -> Move {
        match self {
            Move::R => Move::RPrime,
            Move::RPrime => Move::R,
            Move::L => Move::LPrime,
            Move::LPrime => Move::L,
            Move::U => Move::UPrime,
            Move::UPrime => Move::U,
            Move::D => Move::DPrime,
            Move::DPrime => Move::D,
            Move::F => Move::FPrime,
            Move::FPrime => Move::F,
            Move::B => Move::BPrime,
            Move::BPrime => Move::B,
        }
    }

    /// Standard notation for this move ("R", "R'", ...).
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            Move::R => "R",
            Move::RPrime => "R'",
            Move::L => "L",
            Move::LPrime => "L'",
            Move::U => "U",
            Move::UPrime => "U'",
            Move::D => "D",
            Move::DPrime => "D'",
            Move::F => "F",
            Move::FPrime => "F'",
            Move::B => "B",
            Move::BPrime => "B'",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation())
    }
}

/// Invert a sequence: reverse the order and invert each move.
///
/// Applying `seq` then `inverse_sequence(&seq)` is the identity on any state.
#[must_use]
pub fn inverse_sequence(seq: &[Move]) -> Vec<Move> {
    seq.iter().rev().map(|m| m.inverse()).collect()
}
