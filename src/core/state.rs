//! Cube state and the move engine.
//!
//! ## Representation
//!
//! 54 stickers as a fixed `[[Color; 9]; 6]` grid, indexed by [`Face`] and a
//! row-major sticker position 0..9. The grid is the whole state: no heap
//! allocation, O(1) clone, cheap equality.
//!
//! ## Move semantics
//!
//! A clockwise turn of face X does two things atomically:
//!
//! 1. rotates X's own 9 stickers 90° (corners in one 4-cycle, edges in a
//!    second, center fixed);
//! 2. cycles the three-sticker strips of the four faces bordering X, in the
//!    direction of a physical clockwise turn viewed from outside X.
//!
//! Each face has its own hand-specified adjacency cycle. The six cycles are
//! genuinely distinct geometric permutations, not incidental duplication;
//! collapsing them into one parameterized routine invites indexing mistakes
//! that produce a plausible-looking but wrong cube. They stay explicit and
//! are covered individually by the property tests.
//!
//! Counter-clockwise turns are three clockwise turns. That is 3× the work of
//! a dedicated inverse table but is correct by construction, and moves are
//! O(1) and rare next to rendering and I/O.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::face::Face;
use super::moves::Move;
use super::rng::ScrambleRng;

/// The full 54-sticker cube state.
///
/// Created solved via [`CubeState::solved`] or scrambled via
/// [`CubeState::scramble`]; mutated in place by [`CubeState::apply`]. A state
/// with mismatched color counts is representable but not physically
/// realizable; the engine permutes stickers and never validates
/// realizability.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeState {
    faces: [[Color; 9]; 6],
}

impl CubeState {
    /// The canonical solved configuration.
    ///
    /// Each face is monochrome in its [`Face::solved_color`].
    #[must_use]
    pub fn solved() -> Self {
        let mut faces = [[Color::White; 9]; 6];
        for face in Face::ALL {
            faces[face.index()] = [face.solved_color(); 9];
        }
        Self { faces }
    }

    /// Read-only view of one face's 9 stickers, row-major.
    ///
    /// This is the inspection surface for renderers; they get no mutators.
    #[must_use]
    pub fn face(&self, face: Face) -> &[Color; 9] {
        &self.faces[face.index()]
    }

    /// One sticker.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= 9`.
    #[must_use]
    pub fn sticker(&self, face: Face, pos: usize) -> Color {
        assert!(pos < Face::STICKERS, "sticker position out of range: {pos}");
        self.faces[face.index()][pos]
    }

    /// Overwrite one sticker.
    ///
    /// Supports the custom-cube-input boundary, where a caller enters an
    /// arbitrary physical cube sticker by sticker. No realizability check.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= 9`.
    pub fn set_sticker(&mut self, face: Face, pos: usize, color: Color) {
        assert!(pos < Face::STICKERS, "sticker position out of range: {pos}");
        self.faces[face.index()][pos] = color;
    }

    /// Whether this state is exactly the canonical solved configuration.
    ///
    /// This is canonical-match, not per-face monochromaticity: a state that
    /// is monochrome per face but globally inconsistent is not solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }

    /// Count stickers per color, in [`Color::ALL`] order.
    ///
    /// Every move permutes stickers, so the counts are invariant under any
    /// move sequence; a physical state always counts 9 of each.
    #[must_use]
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0usize; 6];
        for face in &self.faces {
            for sticker in face {
                let slot = Color::ALL
                    .iter()
                    .position(|c| c == sticker)
                    .expect("color is one of Color::ALL");
                counts[slot] += 1;
            }
        }
        counts
    }

    /// Apply one quarter-turn move.
    pub fn apply(&mut self, m: Move) {
        if m.is_prime() {
            // Three clockwise turns; quarter turns have order 4.
            self.turn_clockwise(m.face());
            self.turn_clockwise(m.face());
            self.turn_clockwise(m.face());
        } else {
            self.turn_clockwise(m.face());
        }
    }

    /// Apply a sequence of moves in order.
    ///
    /// Not atomic: a caller wanting all-or-nothing semantics should apply to
    /// a clone and swap on success.
    pub fn apply_all(&mut self, seq: &[Move]) {
        for &m in seq {
            self.apply(m);
        }
    }

    /// Scramble with `n` moves drawn from the given deterministic RNG.
    ///
    /// Returns the applied sequence so callers can replay or invert it.
    /// Same RNG state ⇒ same scramble.
    pub fn scramble(&mut self, rng: &mut ScrambleRng, n: usize) -> Vec<Move> {
        let mut seq = Vec::with_capacity(n);
        for _ in 0..n {
            let m = *rng.choose(&Move::ALL).expect("Move::ALL is non-empty");
            self.apply(m);
            seq.push(m);
        }
        seq
    }

    fn turn_clockwise(&mut self, face: Face) {
        self.rotate_face(face);
        match face {
            Face::Right => self.cycle_right(),
            Face::Left => self.cycle_left(),
            Face::Up => self.cycle_up(),
            Face::Down => self.cycle_down(),
            Face::Front => self.cycle_front(),
            Face::Back => self.cycle_back(),
        }
    }

    /// Rotate a face's own stickers 90° clockwise.
    ///
    /// Corners 0→2→8→6→0 and edges 1→5→7→3→1; center 4 is fixed.
    fn rotate_face(&mut self, face: Face) {
        let f = &mut self.faces[face.index()];

        let temp = f[0];
        f[0] = f[6];
        f[6] = f[8];
        f[8] = f[2];
        f[2] = temp;

        let temp = f[1];
        f[1] = f[3];
        f[3] = f[7];
        f[7] = f[5];
        f[5] = temp;
    }

    /// R: Front right column → Up right column → Back left column (reversed)
    /// → Down right column → Front.
    fn cycle_right(&mut self) {
        const FRONT: usize = Face::Front as usize;
        const BACK: usize = Face::Back as usize;
        const UP: usize = Face::Up as usize;
        const DOWN: usize = Face::Down as usize;

        let temp = [
            self.faces[FRONT][2],
            self.faces[FRONT][5],
            self.faces[FRONT][8],
        ];
        self.faces[FRONT][2] = self.faces[DOWN][2];
        self.faces[FRONT][5] = self.faces[DOWN][5];
        self.faces[FRONT][8] = self.faces[DOWN][8];

        self.faces[DOWN][2] = self.faces[BACK][6];
        self.faces[DOWN][5] = self.faces[BACK][3];
        self.faces[DOWN][8] = self.faces[BACK][0];

        self.faces[BACK][0] = self.faces[UP][8];
        self.faces[BACK][3] = self.faces[UP][5];
        self.faces[BACK][6] = self.faces[UP][2];

        self.faces[UP][2] = temp[0];
        self.faces[UP][5] = temp[1];
        self.faces[UP][8] = temp[2];
    }

    /// L: Front left column → Down left column → Back right column (reversed)
    /// → Up left column → Front.
    fn cycle_left(&mut self) {
        const FRONT: usize = Face::Front as usize;
        const BACK: usize = Face::Back as usize;
        const UP: usize = Face::Up as usize;
        const DOWN: usize = Face::Down as usize;

        let temp = [
            self.faces[FRONT][0],
            self.faces[FRONT][3],
            self.faces[FRONT][6],
        ];
        self.faces[FRONT][0] = self.faces[UP][0];
        self.faces[FRONT][3] = self.faces[UP][3];
        self.faces[FRONT][6] = self.faces[UP][6];

        self.faces[UP][0] = self.faces[BACK][8];
        self.faces[UP][3] = self.faces[BACK][5];
        self.faces[UP][6] = self.faces[BACK][2];

        self.faces[BACK][2] = self.faces[DOWN][6];
        self.faces[BACK][5] = self.faces[DOWN][3];
        self.faces[BACK][8] = self.faces[DOWN][0];

        self.faces[DOWN][0] = temp[0];
        self.faces[DOWN][3] = temp[1];
        self.faces[DOWN][6] = temp[2];
    }

    /// U: top rows cycle Front → Left → Back → Right → Front with no
    /// reversal; all four bordering faces share the Up edge orientation.
    fn cycle_up(&mut self) {
        const FRONT: usize = Face::Front as usize;
        const RIGHT: usize = Face::Right as usize;
        const BACK: usize = Face::Back as usize;
        const LEFT: usize = Face::Left as usize;

        let temp = [
            self.faces[FRONT][0],
            self.faces[FRONT][1],
            self.faces[FRONT][2],
        ];
        for i in 0..3 {
            self.faces[FRONT][i] = self.faces[RIGHT][i];
            self.faces[RIGHT][i] = self.faces[BACK][i];
            self.faces[BACK][i] = self.faces[LEFT][i];
            self.faces[LEFT][i] = temp[i];
        }
    }

    /// D: bottom rows cycle Front → Right → Back → Left → Front.
    fn cycle_down(&mut self) {
        const FRONT: usize = Face::Front as usize;
        const RIGHT: usize = Face::Right as usize;
        const BACK: usize = Face::Back as usize;
        const LEFT: usize = Face::Left as usize;

        let temp = [
            self.faces[FRONT][6],
            self.faces[FRONT][7],
            self.faces[FRONT][8],
        ];
        for i in 6..9 {
            self.faces[FRONT][i] = self.faces[LEFT][i];
            self.faces[LEFT][i] = self.faces[BACK][i];
            self.faces[BACK][i] = self.faces[RIGHT][i];
            self.faces[RIGHT][i] = temp[i - 6];
        }
    }

    /// F: Up bottom row → Right left column → Down top row → Left right
    /// column → Up, with the reversals a physical quarter turn demands.
    fn cycle_front(&mut self) {
        const RIGHT: usize = Face::Right as usize;
        const LEFT: usize = Face::Left as usize;
        const UP: usize = Face::Up as usize;
        const DOWN: usize = Face::Down as usize;

        let temp = [self.faces[UP][6], self.faces[UP][7], self.faces[UP][8]];
        self.faces[UP][6] = self.faces[LEFT][8];
        self.faces[UP][7] = self.faces[LEFT][5];
        self.faces[UP][8] = self.faces[LEFT][2];

        self.faces[LEFT][2] = self.faces[DOWN][0];
        self.faces[LEFT][5] = self.faces[DOWN][1];
        self.faces[LEFT][8] = self.faces[DOWN][2];

        self.faces[DOWN][0] = self.faces[RIGHT][6];
        self.faces[DOWN][1] = self.faces[RIGHT][3];
        self.faces[DOWN][2] = self.faces[RIGHT][0];

        self.faces[RIGHT][0] = temp[0];
        self.faces[RIGHT][3] = temp[1];
        self.faces[RIGHT][6] = temp[2];
    }

    /// B: Up top row → Left left column → Down bottom row → Right right
    /// column → Up, mirrored relative to F.
    fn cycle_back(&mut self) {
        const RIGHT: usize = Face::Right as usize;
        const LEFT: usize = Face::Left as usize;
        const UP: usize = Face::Up as usize;
        const DOWN: usize = Face::Down as usize;

        let temp = [self.faces[UP][0], self.faces[UP][1], self.faces[UP][2]];
        self.faces[UP][0] = self.faces[RIGHT][2];
        self.faces[UP][1] = self.faces[RIGHT][5];
        self.faces[UP][2] = self.faces[RIGHT][8];

        self.faces[RIGHT][2] = self.faces[DOWN][8];
        self.faces[RIGHT][5] = self.faces[DOWN][7];
        self.faces[RIGHT][8] = self.faces[DOWN][6];

        self.faces[DOWN][6] = self.faces[LEFT][0];
        self.faces[DOWN][7] = self.faces[LEFT][3];
        self.faces[DOWN][8] = self.faces[LEFT][6];

        self.faces[LEFT][0] = temp[2];
        self.faces[LEFT][3] = temp[1];
        self.faces[LEFT][6] = temp[0];
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_is_monochrome() {
        let cube = CubeState::solved();
        for face in Face::ALL {
            assert!(cube.face(face).iter().all(|&c| c == face.solved_color()));
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn test_r_cycles_columns() {
        let mut cube = CubeState::solved();
        cube.apply(Move::R);

        // Front's right column went to Up, Up's to Back (reversed), Back's
        // to Down, Down's to Front.
        for pos in [2, 5, 8] {
            assert_eq!(cube.sticker(Face::Up, pos), Color::Green);
            assert_eq!(cube.sticker(Face::Front, pos), Color::Yellow);
            assert_eq!(cube.sticker(Face::Down, pos), Color::Blue);
        }
        for pos in [0, 3, 6] {
            assert_eq!(cube.sticker(Face::Back, pos), Color::White);
        }
        // The turned face itself stays monochrome.
        assert!(cube.face(Face::Right).iter().all(|&c| c == Color::Red));
        assert!(!cube.is_solved());
    }

    #[test]
    fn test_u_cycles_top_rows() {
        let mut cube = CubeState::solved();
        cube.apply(Move::U);

        for pos in 0..3 {
            assert_eq!(cube.sticker(Face::Front, pos), Color::Red);
            assert_eq!(cube.sticker(Face::Right, pos), Color::Blue);
            assert_eq!(cube.sticker(Face::Back, pos), Color::Orange);
            assert_eq!(cube.sticker(Face::Left, pos), Color::Green);
        }
        // Rows below the turned layer are untouched.
        for pos in 3..9 {
            assert_eq!(cube.sticker(Face::Front, pos), Color::Green);
        }
    }

    #[test]
    fn test_f_cycles_strips_with_reversal() {
        let mut cube = CubeState::solved();
        cube.apply(Move::F);

        for pos in [6, 7, 8] {
            assert_eq!(cube.sticker(Face::Up, pos), Color::Orange);
        }
        for pos in [0, 3, 6] {
            assert_eq!(cube.sticker(Face::Right, pos), Color::White);
        }
        for pos in [0, 1, 2] {
            assert_eq!(cube.sticker(Face::Down, pos), Color::Red);
        }
        for pos in [2, 5, 8] {
            assert_eq!(cube.sticker(Face::Left, pos), Color::Yellow);
        }
    }

    #[test]
    fn test_every_move_has_order_four() {
        for m in Move::ALL {
            let mut cube = CubeState::solved();
            for _ in 0..4 {
                cube.apply(m);
            }
            assert!(cube.is_solved(), "{m} applied four times is not identity");
        }
    }

    #[test]
    fn test_move_then_inverse_is_identity() {
        for m in Move::ALL {
            let mut cube = CubeState::solved();
            cube.apply(Move::F);
            cube.apply(Move::L);
            let before = cube.clone();

            cube.apply(m);
            cube.apply(m.inverse());
            assert_eq!(cube, before, "{m} then {} is not identity", m.inverse());
        }
    }

    #[test]
    fn test_color_counts_invariant() {
        let mut cube = CubeState::solved();
        assert_eq!(cube.color_counts(), [9; 6]);

        let mut rng = ScrambleRng::new(99);
        cube.scramble(&mut rng, 50);
        assert_eq!(cube.color_counts(), [9; 6]);
    }

    #[test]
    fn test_scramble_is_deterministic() {
        let mut a = CubeState::solved();
        let mut b = CubeState::solved();
        let seq_a = a.scramble(&mut ScrambleRng::new(7), 25);
        let seq_b = b.scramble(&mut ScrambleRng::new(7), 25);

        assert_eq!(seq_a, seq_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_monochrome_but_inconsistent_is_not_solved() {
        let mut cube = CubeState::solved();
        // Swap two whole faces: still monochrome per face, not canonical.
        for pos in 0..9 {
            cube.set_sticker(Face::Front, pos, Color::Red);
            cube.set_sticker(Face::Right, pos, Color::Green);
        }
        assert!(!cube.is_solved());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut cube = CubeState::solved();
        cube.apply(Move::R);
        cube.apply(Move::UPrime);

        let json = serde_json::to_string(&cube).unwrap();
        let back: CubeState = serde_json::from_str(&json).unwrap();
        assert_eq!(cube, back);
    }
}
