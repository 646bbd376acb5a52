//! Solution token parsing.
//!
//! The solver speaks whitespace-separated tokens over the grammar
//! `FaceLetter ['2' | '\'']?`: a bare letter is one clockwise quarter turn, a
//! trailing apostrophe one counter-clockwise turn, a trailing `2` a 180°
//! turn. 180° turns expand into two clockwise moves so the output replays
//! directly through [`CubeState::apply_all`](crate::core::CubeState::apply_all).
//!
//! Unrecognized tokens are collected rather than silently dropped; silently
//! skipping them can truncate a solution into one that looks plausible and
//! leaves the cube unsolved.

use crate::core::Move;

/// Result of parsing a solution string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedSolution {
    /// Flat move sequence, 180° turns already expanded.
    pub moves: Vec<Move>,
    /// Tokens that did not match the move grammar, in input order.
    pub skipped: Vec<String>,
}

impl ParsedSolution {
    /// Whether every token parsed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

fn clockwise(letter: &str) -> Option<Move> {
    match letter {
        "R" => Some(Move::R),
        "L" => Some(Move::L),
        "U" => Some(Move::U),
        "D" => Some(Move::D),
        "F" => Some(Move::F),
        "B" => Some(Move::B),
        _ => None,
    }
}

/// Parse a whitespace-separated solution string.
///
/// ```
/// use rust_cube::core::Move;
/// use rust_cube::solver::parse_solution;
///
/// let parsed = parse_solution("R U2 F'");
/// assert_eq!(parsed.moves, vec![Move::R, Move::U, Move::U, Move::FPrime]);
/// assert!(parsed.is_clean());
/// ```
#[must_use]
pub fn parse_solution(text: &str) -> ParsedSolution {
    let mut parsed = ParsedSolution::default();

    for token in text.split_whitespace() {
        if let Some(base) = token.strip_suffix('2') {
            if let Some(m) = clockwise(base) {
                parsed.moves.push(m);
                parsed.moves.push(m);
                continue;
            }
        } else if let Some(base) = token.strip_suffix('\'') {
            if let Some(m) = clockwise(base) {
                parsed.moves.push(m.inverse());
                continue;
            }
        } else if let Some(m) = clockwise(token) {
            parsed.moves.push(m);
            continue;
        }
        parsed.skipped.push(token.to_string());
    }

    parsed
}
