//! Core cube model: colors, faces, moves, state, RNG.

pub mod color;
pub mod face;
pub mod moves;
pub mod rng;
pub mod state;

pub use color::Color;
pub use face::Face;
pub use moves::{inverse_sequence, Move};
pub use rng::{RngState, ScrambleRng};
pub use state::CubeState;
