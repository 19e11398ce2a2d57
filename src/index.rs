//! # Word index
//!
//! Herein is the index of playable words. Building the index runs every
//! candidate word through the [validator](crate::validator) and files the
//! survivors by first letter, last letter, and rating, where the rating of a
//! word is the number of distinct letters that it contains. Every bucket
//! preserves the order in which the words were supplied, which in turn governs
//! the order in which the [solver](crate::solver) discovers solutions.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::{debug, trace};

use crate::{board::{Board, LetterSet}, validator::is_playable};

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// A playable word, together with everything the solver needs to know about
/// it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedWord
{
	/// The word.
	text: String,

	/// The number of distinct letters in the word.
	rating: usize,

	/// The board letters covered by the word.
	letters: LetterSet,

	/// The last letter of the word.
	last: char
}

impl IndexedWord
{
	/// The word itself.
	#[inline]
	#[must_use]
	pub fn text(&self) -> &str { &self.text }

	/// The board letters covered by the word.
	#[inline]
	pub fn letters(&self) -> LetterSet { self.letters }

	/// The last letter of the word.
	#[inline]
	#[must_use]
	pub fn last(&self) -> char { self.last }
}

/// The index of the words that are playable on a particular board. Words are
/// identified internally by their insertion order. Read-only once built.
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct WordIndex
{
	/// Every playable word, in insertion order.
	words: Vec<IndexedWord>,

	/// The identifiers of the words, keyed by text.
	ids: HashMap<String, usize>,

	/// The identifiers of the words beginning with each letter.
	starts_with: HashMap<char, Vec<usize>>,

	/// The identifiers of the words ending with each letter.
	ends_with: HashMap<char, Vec<usize>>,

	/// The identifiers of the words with each rating.
	rating: BTreeMap<usize, Vec<usize>>
}

impl WordIndex
{
	/// Build the index of the candidate words that are playable on the
	/// specified board. Unplayable candidates are silently excluded, as are
	/// repeated occurrences of a word.
	///
	/// # Arguments
	///
	/// * `board` - The board.
	/// * `candidates` - The candidate words, typically drawn from a
	///   [`Dictionary`](crate::dictionary::Dictionary).
	///
	/// # Returns
	///
	/// The index of playable words.
	pub fn build<I, T>(board: &Board, candidates: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: AsRef<str>
	{
		let mut index = Self::default();
		let mut rejected = 0usize;
		for candidate in candidates
		{
			let candidate = candidate.as_ref();
			if index.contains(candidate)
			{
				continue
			}
			if is_playable(board, candidate)
			{
				index.insert(board, candidate);
			}
			else
			{
				trace!("unplayable: {}", candidate);
				rejected += 1;
			}
		}
		debug!(
			"indexed {} playable words for {} ({} rejected)",
			index.len(),
			board,
			rejected
		);
		index
	}

	/// File a playable word under each of its keys.
	///
	/// # Arguments
	///
	/// * `board` - The board, used to compute the word's coverage.
	/// * `word` - The word, which must be non-empty and not yet indexed.
	fn insert(&mut self, board: &Board, word: &str)
	{
		let (Some(first), Some(last)) = (word.chars().next(), word.chars().last())
		else
		{
			return
		};
		let rating = word.chars().collect::<HashSet<_>>().len();
		let id = self.words.len();
		self.words.push(IndexedWord {
			text: word.to_string(),
			rating,
			letters: board.letter_set(word),
			last
		});
		self.ids.insert(word.to_string(), id);
		self.starts_with.entry(first).or_default().push(id);
		self.ends_with.entry(last).or_default().push(id);
		self.rating.entry(rating).or_default().push(id);
	}

	/// Check if the index is empty.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.words.is_empty() }

	/// Get the number of indexed words.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.words.len() }

	/// Check if the index contains the specified word.
	#[inline]
	#[must_use]
	pub fn contains(&self, word: &str) -> bool { self.ids.contains_key(word) }

	/// Get the rating of the specified word, if it is indexed.
	#[inline]
	#[must_use]
	pub fn rating_of(&self, word: &str) -> Option<usize>
	{
		self.ids.get(word).map(|&id| self.words[id].rating)
	}

	/// Get an iterator over every indexed word, in insertion order.
	#[inline]
	pub fn words(&self) -> impl Iterator<Item = &str> + '_
	{
		self.words.iter().map(IndexedWord::text)
	}

	/// Get an iterator over the words that begin with the specified letter,
	/// in insertion order. Empty if there are none.
	#[inline]
	pub fn starting_with(&self, letter: char) -> impl Iterator<Item = &str> + '_
	{
		self.texts(self.starts_with.get(&letter))
	}

	/// Get an iterator over the words that end with the specified letter, in
	/// insertion order. Empty if there are none.
	#[inline]
	pub fn ending_with(&self, letter: char) -> impl Iterator<Item = &str> + '_
	{
		self.texts(self.ends_with.get(&letter))
	}

	/// Get an iterator over the words with the specified rating, in insertion
	/// order. Empty if there are none.
	#[inline]
	pub fn rated(&self, rating: usize) -> impl Iterator<Item = &str> + '_
	{
		self.texts(self.rating.get(&rating))
	}

	/// Get the indexed word with the specified identifier.
	///
	/// # Panics
	///
	/// If `id` is not less than [`len`](Self::len).
	#[inline]
	pub(crate) fn word(&self, id: usize) -> &IndexedWord
	{
		&self.words[id]
	}

	/// Get the identifiers of the words that begin with the specified letter,
	/// in insertion order.
	#[inline]
	pub(crate) fn ids_starting_with(&self, letter: char) -> &[usize]
	{
		self.starts_with.get(&letter).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Map a bucket of identifiers onto the texts of the words.
	fn texts<'a>(
		&'a self,
		ids: Option<&'a Vec<usize>>
	) -> impl Iterator<Item = &'a str> + 'a
	{
		ids.into_iter()
			.flatten()
			.map(move |&id| self.words[id].text())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
