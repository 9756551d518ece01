//! Squares are one of the two data types we use in Nimloth to denote board
//! positions, the other being Bitboards.
//!
//! As one might expect, a Square always denotes a single square, where a
//! Bitboard is used to represent an _unordered set_ of positions all at once.

use anyhow::anyhow;
use std::fmt::Display;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use Square::*;

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// A board square
///
/// Often used to cast to a usize and index into arrays of different sorts
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    pub const COUNT: usize = 64;

    #[rustfmt::skip]
    /// A set of all the squares, handy for converting a usize into a square.
    pub const ALL: [Self; Self::COUNT] = [
        A1, B1, C1, D1, E1, F1, G1, H1,
        A2, B2, C2, D2, E2, F2, G2, H2,
        A3, B3, C3, D3, E3, F3, G3, H3,
        A4, B4, C4, D4, E4, F4, G4, H4,
        A5, B5, C5, D5, E5, F5, G5, H5,
        A6, B6, C6, D6, E6, F6, G6, H6,
        A7, B7, C7, D7, E7, F7, G7, H7,
        A8, B8, C8, D8, E8, F8, G8, H8,
    ];

    #[rustfmt::skip]
    /// Collection of ranks (in reversed order), handy for iterating over a
    /// board in a double loop (ranks and files).
    pub const RANKS: [[Self; 8]; 8] = [
        [A8, B8, C8, D8, E8, F8, G8, H8],
        [A7, B7, C7, D7, E7, F7, G7, H7],
        [A6, B6, C6, D6, E6, F6, G6, H6],
        [A5, B5, C5, D5, E5, F5, G5, H5],
        [A4, B4, C4, D4, E4, F4, G4, H4],
        [A3, B3, C3, D3, E3, F3, G3, H3],
        [A2, B2, C2, D2, E2, F2, G2, H2],
        [A1, B1, C1, D1, E1, F1, G1, H1],
    ];

    #[rustfmt::skip]
    /// String labels for all the squares, for printing and parsing purposes
    pub const NAMES: [&'static str; Self::COUNT] = [
        "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
        "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
        "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
        "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
        "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
        "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
        "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
        "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    ];

    // Get an (optional) square from the square's index
    pub fn new(idx: u8) -> Option<Self> {
        if idx < 64 {
            Some(unsafe { std::mem::transmute::<u8, Self>(idx) })
        } else {
            None
        }
    }

    // Get a square from an index.
    //
    // SAFETY: This does not do any checks, so be absolutely sure that the
    // index that is passed in is < 64!
    pub const unsafe fn new_unchecked(idx: u8) -> Self {
        unsafe { std::mem::transmute::<u8, Self>(idx) }
    }

    /// Get the rank for the square as an index between 0 and 7.
    pub const fn rank(&self) -> usize {
        (*self as usize) / 8
    }

    /// Get the file for the square as an index between 0 and 7.
    pub const fn file(&self) -> usize {
        (*self as usize) % 8
    }

    /// Get the rank of the square, from the point of view of the given side.
    /// Rank 0 is the back rank, rank 6 is the seventh rank.
    pub const fn relative_rank<const WHITE: bool>(&self) -> usize {
        let rank = *self as usize / 8;
        if WHITE { rank } else { 7 - rank }
    }

    /// Get the square itself for White, or its vertical mirror image for
    /// Black. Used to index into tables stored from White's point of view.
    pub const fn relative<const WHITE: bool>(&self) -> Self {
        if WHITE { *self } else { self.flip() }
    }

    /// Map the square onto a half-board of 32 entries: four files (edge to
    /// center, files e-h folded onto d-a) by eight relative ranks.
    pub const fn relative_sq32<const WHITE: bool>(&self) -> usize {
        let file = self.file();
        let folded = if file < 4 { file } else { 7 - file };
        4 * self.relative_rank::<WHITE>() + folded
    }

    /// Get the square "in front of" the current square, as determined by the
    /// given side. `None` when stepping off the board.
    pub fn forward<const WHITE: bool>(self) -> Option<Self> {
        if WHITE {
            Self::ALL.get(self as usize + 8).copied()
        } else {
            (self as usize).checked_sub(8).map(Self::from)
        }
    }

    /// Get the Chebyshev distance between two squares: the number of king
    /// steps needed to walk from one to the other.
    pub fn distance(&self, other: Self) -> usize {
        usize::max(
            self.rank().abs_diff(other.rank()),
            self.file().abs_diff(other.file()),
        )
    }

    /// Mirror a square across the board vertically
    pub const fn flip(&self) -> Self {
        // SAFETY: Guaranteed to be within bounds because `self` is a Square
        unsafe { Self::new_unchecked((*self as u8) ^ 56) }
    }

    /// Mirror a square across the board horizontally
    pub const fn mirror(&self) -> Self {
        // SAFETY: Guaranteed to be within bounds because `self` is a Square
        unsafe { Self::new_unchecked((*self as u8) ^ 7) }
    }
}

///////////////////////////////////////////////////////////////////////////////
//
// Utility traits
//
///////////////////////////////////////////////////////////////////////////////

/// Convert usize into Square.
/// Panics if the usize is out of bounds!
impl From<usize> for Square {
    fn from(idx: usize) -> Self {
        Self::ALL[idx]
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Self::NAMES[*self as usize])
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Self::NAMES
            .iter()
            .position(|&name| name == s)
            .map(Self::from)
            .ok_or(anyhow!("Not a valid square string"))
    }
}

impl<T> Index<Square> for [T; 64] {
    type Output = T;

    fn index(&self, index: Square) -> &Self::Output {
        // SAFETY: the legal values for this type are all in bounds.
        unsafe { self.get_unchecked(index as usize) }
    }
}

impl<T> IndexMut<Square> for [T; 64] {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        // SAFETY: the legal values for this type are all in bounds.
        unsafe { self.get_unchecked_mut(index as usize) }
    }
}

///////////////////////////////////////////////////////////////////////////////
//
// Tests
//
///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_and_file() {
        assert_eq!(E4.rank(), 3);
        assert_eq!(E4.file(), 4);
        assert_eq!(A8.rank(), 7);
        assert_eq!(H1.file(), 7);
    }

    #[test]
    fn relative_squares() {
        assert_eq!(E2.relative::<true>(), E2);
        assert_eq!(E2.relative::<false>(), E7);
        assert_eq!(C7.relative_rank::<true>(), 6);
        assert_eq!(C7.relative_rank::<false>(), 1);
    }

    #[test]
    fn mirrors() {
        assert_eq!(A1.flip(), A8);
        assert_eq!(A1.mirror(), H1);
        assert_eq!(D4.mirror(), E4);
    }

    #[test]
    fn relative_sq32_folds_files() {
        // a1 and h1 map to the same half-board entry
        assert_eq!(A1.relative_sq32::<true>(), H1.relative_sq32::<true>());

        // d3 sits on relative rank 2, file index 3
        assert_eq!(D3.relative_sq32::<true>(), 4 * 2 + 3);

        // For Black, d6 is the mirror image of d3
        assert_eq!(D6.relative_sq32::<false>(), D3.relative_sq32::<true>());
    }

    #[test]
    fn chebyshev_distance() {
        assert_eq!(A1.distance(H8), 7);
        assert_eq!(E4.distance(E4), 0);
        assert_eq!(E4.distance(F6), 2);
    }
}
