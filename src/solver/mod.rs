//! Canonical encoding and the external-solver bridge.
//!
//! Strictly layered above `core`: the move engine knows nothing about wire
//! formats; everything oracle-facing lives here.

pub mod adapter;
pub mod encoding;
pub mod oracle;
pub mod tokens;

pub use adapter::{Solution, SolveAdapter, SolveError, ERROR_MARKER};
pub use encoding::{decode, encode, facelet_letter, DecodeError, SOLVED_FACELETS};
pub use oracle::{CommandOracle, Oracle, OracleConfig, OracleError};
pub use tokens::{parse_solution, ParsedSolution};
