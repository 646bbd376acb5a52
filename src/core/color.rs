//! Sticker colors.
//!
//! Six fixed colors, one per face of the solved cube. Colors carry no
//! ordering semantics beyond identity; the mapping to faces lives in
//! [`Face::solved_color`](super::face::Face::solved_color) and the mapping
//! to facelet letters lives in the solver encoding.

use serde::{Deserialize, Serialize};

/// One of the six sticker colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
    Blue,
    Orange,
    Green,
    Yellow,
}

impl Color {
    /// All six colors, in a fixed order.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Red,
        Color::Blue,
        Color::Orange,
        Color::Green,
        Color::Yellow,
    ];

    /// Single-letter abbreviation used by renderers ("W", "R", "B", "O", "G", "Y").
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Yellow => 'Y',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
