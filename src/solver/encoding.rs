//! Canonical 54-character facelet encoding.
//!
//! The external solver consumes cube states as a 54-character string: faces
//! in the fixed order Up, Right, Front, Down, Left, Back, each face's nine
//! stickers row-major, one letter per sticker. Letters name the face a color
//! occupies when solved (White→U, Red→R, Green→F, Yellow→D, Orange→L,
//! Blue→B), not the color itself; this is the standard facelet convention
//! and must match the solver exactly.
//!
//! Encoding is pure and total; decoding rejects malformed input with typed
//! errors.

use thiserror::Error;

use crate::core::{Color, CubeState, Face};

/// Face order of the facelet string.
pub const FACELET_FACE_ORDER: [Face; 6] = [
    Face::Up,
    Face::Right,
    Face::Front,
    Face::Down,
    Face::Left,
    Face::Back,
];

/// The facelet string of the canonical solved cube.
pub const SOLVED_FACELETS: &str =
    "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// A facelet string failed to decode.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("facelet string must be exactly 54 characters, got {0}")]
    BadLength(usize),
    #[error("unknown facelet letter {letter:?} at position {position}")]
    BadLetter { position: usize, letter: char },
}

/// The facelet letter for a color: the face this color occupies when solved.
#[must_use]
pub const fn facelet_letter(color: Color) -> char {
    match color {
        Color::White => 'U',
        Color::Red => 'R',
        Color::Green => 'F',
        Color::Yellow => 'D',
        Color::Orange => 'L',
        Color::Blue => 'B',
    }
}

const fn letter_color(letter: char) -> Option<Color> {
    match letter {
        'U' => Some(Color::White),
        'R' => Some(Color::Red),
        'F' => Some(Color::Green),
        'D' => Some(Color::Yellow),
        'L' => Some(Color::Orange),
        'B' => Some(Color::Blue),
        _ => None,
    }
}

/// Encode a cube state as its 54-character facelet string.
///
/// Pure and total: every representable state encodes, including physically
/// unrealizable ones.
///
/// ```
/// use rust_cube::core::CubeState;
/// use rust_cube::solver::{encode, SOLVED_FACELETS};
///
/// assert_eq!(encode(&CubeState::solved()), SOLVED_FACELETS);
/// ```
#[must_use]
pub fn encode(cube: &CubeState) -> String {
    let mut out = String::with_capacity(Face::COUNT * Face::STICKERS);
    for face in FACELET_FACE_ORDER {
        for &sticker in cube.face(face) {
            out.push(facelet_letter(sticker));
        }
    }
    out
}

/// Decode a facelet string back into a cube state.
///
/// Exact inverse of [`encode`] on its image. The input must be exactly 54
/// characters over the alphabet {U, R, F, D, L, B}; no realizability check
/// beyond that.
pub fn decode(facelets: &str) -> Result<CubeState, DecodeError> {
    let chars: Vec<char> = facelets.chars().collect();
    if chars.len() != Face::COUNT * Face::STICKERS {
        return Err(DecodeError::BadLength(chars.len()));
    }

    let mut cube = CubeState::solved();
    for (face_slot, face) in FACELET_FACE_ORDER.iter().enumerate() {
        for pos in 0..Face::STICKERS {
            let position = face_slot * Face::STICKERS + pos;
            let letter = chars[position];
            let color =
                letter_color(letter).ok_or(DecodeError::BadLetter { position, letter })?;
            cube.set_sticker(*face, pos, color);
        }
    }
    Ok(cube)
}
