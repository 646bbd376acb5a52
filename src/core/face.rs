//! Cube faces.
//!
//! Six fixed positions. Each face is a row-major 3×3 grid of stickers,
//! indexed 0..9 as seen when facing that face with the Up face oriented up:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```

use serde::{Deserialize, Serialize};

use super::color::Color;

/// One of the six cube faces.
///
/// The discriminants double as indices into the sticker grid, so `Face` can
/// be used directly to address `CubeState` storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Front,
    Right,
    Back,
    Left,
    Up,
    Down,
}

impl Face {
    /// All six faces, in storage order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Left,
        Face::Up,
        Face::Down,
    ];

    /// Number of faces.
    pub const COUNT: usize = 6;

    /// Stickers per face.
    pub const STICKERS: usize = 9;

    /// Index of this face in the sticker grid.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The color this face holds in the canonical solved configuration.
    ///
    /// Front=Green, Right=Red, Back=Blue, Left=Orange, Up=White, Down=Yellow.
    #[must_use]
    pub const fn solved_color(self) -> Color {
        match self {
            Face::Front => Color::Green,
            Face::Right => Color::Red,
            Face::Back => Color::Blue,
            Face::Left => Color::Orange,
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Face::Front => "Front",
            Face::Right => "Right",
            Face::Back => "Back",
            Face::Left => "Left",
            Face::Up => "Up",
            Face::Down => "Down",
        };
        write!(f, "{name}")
    }
}
