//! The solve adapter: encode → invoke → parse.
//!
//! Bridges the internal move vocabulary and the oracle's textual protocol.
//! The adapter never decides fallback policy; every failure is surfaced to
//! the caller, who may fall back to
//! [`MoveHistory::unwind`](crate::history::MoveHistory::unwind) or give up.

use thiserror::Error;
use tracing::warn;

use crate::core::{CubeState, Move};

use super::encoding::encode;
use super::oracle::{Oracle, OracleError};
use super::tokens::parse_solution;

/// Prefix the oracle uses to report an error in-band on its output channel.
pub const ERROR_MARKER: &str = "ERROR:";

/// Requesting a solution failed.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The oracle could not be invoked (unreachable, non-zero exit, timeout).
    #[error("solver invocation failed: {0}")]
    Invocation(#[from] OracleError),
    /// The oracle answered with its in-band error marker; payload verbatim.
    #[error("solver reported an error: {0}")]
    Reported(String),
}

/// A parsed solution ready for replay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Flat move sequence, 180° turns already expanded.
    pub moves: Vec<Move>,
    /// Tokens the parser could not understand. Non-empty means the move
    /// sequence may be incomplete; callers should treat it as suspect.
    pub skipped_tokens: Vec<String>,
}

impl Solution {
    /// Whether every token of the oracle's answer parsed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped_tokens.is_empty()
    }
}

/// Converts cube states to the oracle's wire format and solutions back.
#[derive(Clone, Debug)]
pub struct SolveAdapter<O: Oracle> {
    oracle: O,
}

impl<O: Oracle> SolveAdapter<O> {
    #[must_use]
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Ask the oracle for a solution to the given state.
    ///
    /// Encodes the state, invokes the oracle, and parses the answer into a
    /// flat move sequence replayable via
    /// [`CubeState::apply_all`](crate::core::CubeState::apply_all).
    ///
    /// An answer prefixed with [`ERROR_MARKER`] becomes
    /// [`SolveError::Reported`] carrying the marker's payload. Tokens that
    /// fail the move grammar are logged and carried on the returned
    /// [`Solution`] rather than silently dropped.
    pub fn request_solution(&self, cube: &CubeState) -> Result<Solution, SolveError> {
        let facelets = encode(cube);
        let answer = self.oracle.solve(&facelets)?;

        if let Some(detail) = answer.strip_prefix(ERROR_MARKER) {
            return Err(SolveError::Reported(detail.trim().to_string()));
        }

        let parsed = parse_solution(&answer);
        if !parsed.skipped.is_empty() {
            warn!(
                skipped = ?parsed.skipped,
                "solver answer contained unparseable tokens; solution may be incomplete"
            );
        }

        Ok(Solution {
            moves: parsed.moves,
            skipped_tokens: parsed.skipped,
        })
    }
}
