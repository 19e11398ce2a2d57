//! # Board
//!
//! Herein is the model of the Letter Boxed board: twelve letters arranged
//! around the four sides of a square, three letters per side. Positions are
//! numbered clockwise from the top-left corner, so the side of a position is
//! simply `position / 3`.

use std::{
	error::Error,
	fmt::{self, Display, Formatter}
};

////////////////////////////////////////////////////////////////////////////////
//                                 Constants.                                 //
////////////////////////////////////////////////////////////////////////////////

/// The number of letters on a side of the board.
pub const SIDE_LENGTH: usize = 3;

/// The number of sides of the board.
pub const SIDES: usize = 4;

/// The number of letters on the board.
pub const BOARD_SIZE: usize = SIDE_LENGTH * SIDES;

////////////////////////////////////////////////////////////////////////////////
//                                   Board.                                   //
////////////////////////////////////////////////////////////////////////////////

/// A Letter Boxed board. Immutable once constructed.
///
/// Letters may repeat across positions. Every position is distinct, so a
/// repeated letter may be reached from either of its sides, but it only
/// contributes a single letter to [coverage](LetterSet).
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Board
{
	/// The letters of the board, in position order.
	letters: [char; BOARD_SIZE],

	/// The distinct letters of the board, in order of first appearance. The
	/// index of a letter in this list is its bit in a [`LetterSet`].
	distinct: Vec<char>
}

impl Board
{
	/// Construct a board from a string of exactly [`BOARD_SIZE`] characters.
	/// The letters are upper-cased, matching the normalization applied to
	/// [dictionary](crate::dictionary::Dictionary) words.
	///
	/// # Arguments
	///
	/// * `letters` - The letters of the board, in position order.
	///
	/// # Returns
	///
	/// The requested board.
	///
	/// # Errors
	///
	/// [`BoardError::InvalidLength`] if `letters` does not comprise exactly
	/// [`BOARD_SIZE`] characters.
	pub fn new(letters: &str) -> Result<Self, BoardError>
	{
		let length = letters.chars().count();
		if length != BOARD_SIZE
		{
			return Err(BoardError::InvalidLength { length })
		}
		let mut normalized = [' '; BOARD_SIZE];
		for (slot, letter) in normalized.iter_mut().zip(letters.chars())
		{
			*slot = to_single_uppercase(letter);
		}
		let letters = normalized;
		let mut distinct = Vec::with_capacity(BOARD_SIZE);
		for &letter in letters.iter()
		{
			if !distinct.contains(&letter)
			{
				distinct.push(letter);
			}
		}
		Ok(Self { letters, distinct })
	}

	/// Get the letter at the specified position.
	///
	/// # Panics
	///
	/// If `position` is not less than [`BOARD_SIZE`].
	#[inline]
	#[must_use]
	pub fn letter_at(&self, position: usize) -> char
	{
		self.letters[position]
	}

	/// Get the side of the specified position.
	#[inline]
	#[must_use]
	pub const fn side_of(position: usize) -> usize
	{
		position / SIDE_LENGTH
	}

	/// Check whether a move between two positions obeys the rules of the
	/// puzzle: consecutive letters of a word must lie on different sides. The
	/// first letter of a word has no predecessor, so any position is a legal
	/// start.
	///
	/// # Arguments
	///
	/// * `from` - The position of the previous letter, or `None` at the start
	///   of a word.
	/// * `to` - The position of the next letter.
	///
	/// # Returns
	///
	/// `true` if the move is legal, `false` otherwise.
	#[inline]
	#[must_use]
	pub const fn is_valid_move(from: Option<usize>, to: usize) -> bool
	{
		match from
		{
			None => true,
			Some(from) => Self::side_of(from) != Self::side_of(to)
		}
	}

	/// Get all of the letters of the board, in position order.
	#[inline]
	#[must_use]
	pub fn letters(&self) -> &[char; BOARD_SIZE]
	{
		&self.letters
	}

	/// Get the distinct letters of the board, in order of first appearance.
	#[inline]
	#[must_use]
	pub fn distinct_letters(&self) -> &[char]
	{
		&self.distinct
	}

	/// Get an iterator over every position that holds the specified letter.
	#[inline]
	pub fn positions_of(&self, letter: char) -> impl Iterator<Item = usize> + '_
	{
		self.letters.iter()
			.enumerate()
			.filter(move |(_, &l)| l == letter)
			.map(|(position, _)| position)
	}

	/// Get the set of every distinct letter on the board. A chain of words is
	/// a solution once it has removed every member of this set.
	#[must_use]
	pub fn full_set(&self) -> LetterSet
	{
		LetterSet((1u16 << self.distinct.len()) - 1)
	}

	/// Get the set of board letters that occur in the specified word. Letters
	/// of the word that are not on the board are ignored.
	///
	/// # Arguments
	///
	/// * `word` - The word to examine.
	///
	/// # Returns
	///
	/// The board letters used by `word`.
	#[must_use]
	pub fn letter_set(&self, word: &str) -> LetterSet
	{
		let mut bits = 0u16;
		for letter in word.chars()
		{
			if let Some(index) = self.distinct.iter().position(|&l| l == letter)
			{
				bits |= 1 << index;
			}
		}
		LetterSet(bits)
	}
}

/// Upper-case a letter, keeping it as is if its upper case is not a single
/// character (e.g., `ß`).
fn to_single_uppercase(letter: char) -> char
{
	let mut upper = letter.to_uppercase();
	match (upper.next(), upper.next())
	{
		(Some(single), None) => single,
		_ => letter
	}
}

impl Display for Board
{
	/// Render the board side by side, e.g., `TKL-UAI-NYE-BZH`.
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		for (side, letters) in self.letters.chunks(SIDE_LENGTH).enumerate()
		{
			if side > 0
			{
				write!(f, "-")?;
			}
			for letter in letters
			{
				write!(f, "{}", letter)?;
			}
		}
		Ok(())
	}
}

/// The complete enumeration of [`Board`] errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError
{
	/// The board string did not comprise exactly [`BOARD_SIZE`] characters.
	InvalidLength
	{
		/// The number of characters actually supplied.
		length: usize
	}
}

impl Display for BoardError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::InvalidLength { length } => write!(
				f,
				"board must have exactly {} letters, but has {}",
				BOARD_SIZE,
				length
			)
		}
	}
}

impl Error for BoardError {}

////////////////////////////////////////////////////////////////////////////////
//                                Letter sets.                                //
////////////////////////////////////////////////////////////////////////////////

/// A set of distinct board letters, as a bitset relative to a particular
/// [`Board`]. Sets from different boards must not be mixed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct LetterSet(u16);

impl LetterSet
{
	/// Check if the set is empty.
	#[inline]
	#[must_use]
	pub const fn is_empty(&self) -> bool
	{
		self.0 == 0
	}

	/// Get the number of letters in the set.
	#[inline]
	#[must_use]
	pub const fn len(&self) -> usize
	{
		self.0.count_ones() as usize
	}

	/// Check if the two sets share at least one letter.
	#[inline]
	#[must_use]
	pub const fn intersects(&self, other: LetterSet) -> bool
	{
		self.0 & other.0 != 0
	}

	/// Remove every letter of `other` from this set.
	#[inline]
	pub const fn difference(&self, other: LetterSet) -> LetterSet
	{
		LetterSet(self.0 & !other.0)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::board::{Board, BoardError, BOARD_SIZE};

	/// Ensure that only 12-letter strings produce boards, and that letters are
	/// normalized to upper case.
	#[test]
	fn test_new()
	{
		let board = Board::new("abcdefghijkl").unwrap();
		assert_eq!(board.letter_at(0), 'A');
		assert_eq!(board.letter_at(11), 'L');
		assert_eq!(board.to_string(), "ABC-DEF-GHI-JKL");
		assert_eq!(
			Board::new("ABCDEFGHIJK"),
			Err(BoardError::InvalidLength { length: 11 })
		);
		assert_eq!(
			Board::new("ABCDEFGHIJKLM"),
			Err(BoardError::InvalidLength { length: 13 })
		);
		assert_eq!(Board::new(""), Err(BoardError::InvalidLength { length: 0 }));
	}

	/// Ensure that the length is counted before normalization, so a letter
	/// whose upper case spans several characters neither pads nor overflows
	/// the board.
	#[test]
	fn test_new_multi_character_uppercase()
	{
		let board = Board::new("ßbcdefghijkl").unwrap();
		assert_eq!(board.letter_at(0), 'ß');
		assert_eq!(board.letter_at(1), 'B');
		assert_eq!(board.to_string(), "ßBC-DEF-GHI-JKL");
		assert_eq!(
			Board::new("ßBCDEFGHIJK"),
			Err(BoardError::InvalidLength { length: 11 })
		);
	}

	/// Ensure that a move is legal exactly when it crosses sides, and that
	/// every first move is legal. Be exhaustive, since the space is tiny.
	#[test]
	fn test_is_valid_move()
	{
		for to in 0..BOARD_SIZE
		{
			assert!(Board::is_valid_move(None, to));
			for from in 0..BOARD_SIZE
			{
				assert_eq!(
					Board::is_valid_move(Some(from), to),
					from / 3 != to / 3,
					"{} -> {}",
					from,
					to
				);
			}
		}
	}

	/// Ensure that repeated letters are positional but share one bit of
	/// coverage.
	#[test]
	fn test_duplicate_letters()
	{
		let board = Board::new("ABCDEFGHIJKE").unwrap();
		assert_eq!(board.positions_of('E').collect::<Vec<_>>(), vec![4, 11]);
		assert_eq!(board.distinct_letters().len(), 11);
		assert_eq!(board.full_set().len(), 11);
		assert_eq!(board.letter_set("EEE").len(), 1);
	}

	/// Ensure that letter sets track coverage correctly.
	#[test]
	fn test_letter_set()
	{
		let board = Board::new("ABCDEFGHIJKL").unwrap();
		let full = board.full_set();
		assert_eq!(full.len(), 12);
		let adgj = board.letter_set("ADGJ");
		assert_eq!(adgj.len(), 4);
		assert!(full.intersects(adgj));
		let rest = full.difference(adgj);
		assert_eq!(rest.len(), 8);
		assert!(!rest.intersects(adgj));
		assert!(board.letter_set("XYZ").is_empty());
		let rest = rest
			.difference(board.letter_set("JBEHK"))
			.difference(board.letter_set("KCFIL"));
		assert!(rest.is_empty());
	}
}
