//! # rust-cube
//!
//! A 3×3×3 cube state engine with external two-phase solver integration.
//!
//! ## Design Principles
//!
//! 1. **Permutations, not search**: the engine maintains the 54-sticker grid
//!    and applies the 12-move quarter-turn group exactly. Solving is
//!    delegated to an external oracle; this crate never searches.
//!
//! 2. **Strict layering**: `core` knows nothing about wire formats; `solver`
//!    depends on `core` and owns everything oracle-facing.
//!
//! 3. **No global state**: cube, history, and RNG live in a caller-owned
//!    [`Session`]; nothing is static.
//!
//! 4. **Deterministic where it matters**: scrambles come from a seeded,
//!    state-serializable RNG so any state is reproducible.
//!
//! ## Modules
//!
//! - `core`: colors, faces, moves, cube state, scramble RNG
//! - `history`: move recording, undo, reversed-inverse fallback
//! - `solver`: facelet encoding, oracle trait + subprocess oracle, token
//!   parsing, solve adapter
//! - `session`: the caller-owned application-state struct

pub mod core;
pub mod history;
pub mod session;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{inverse_sequence, Color, CubeState, Face, Move, RngState, ScrambleRng};

pub use crate::history::MoveHistory;

pub use crate::session::{Session, SessionSnapshot};

pub use crate::solver::{
    decode, encode, parse_solution, CommandOracle, DecodeError, Oracle, OracleConfig,
    OracleError, ParsedSolution, Solution, SolveAdapter, SolveError, ERROR_MARKER,
    SOLVED_FACELETS,
};
