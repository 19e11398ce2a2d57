//! # Validator
//!
//! Herein is the word validator. A word is playable on a [`Board`] if some
//! walk over the board's positions spells the word letter by letter without
//! ever taking two consecutive letters from the same side. The walk itself is
//! never needed, only whether one exists, so the search tracks the deepest
//! reachable prefix rather than building the tree of walks.

use log::trace;

use crate::board::Board;

/// Check whether the specified word can be spelled on the board. The empty
/// word is never playable.
///
/// # Arguments
///
/// * `board` - The board.
/// * `word` - The candidate word.
///
/// # Returns
///
/// `true` if the word can be spelled on the board, `false` otherwise.
#[must_use]
pub fn is_playable(board: &Board, word: &str) -> bool
{
	let letters = word.chars().collect::<Vec<_>>();
	if letters.is_empty()
	{
		return false
	}
	let depth = spelled_depth(board, &letters, None, 0);
	trace!("{}: spelled {} of {} letters", word, depth, letters.len());
	depth == letters.len()
}

/// Compute the length of the longest prefix of `letters` that can be spelled
/// on the board, starting from a walk that has already spelled `depth`
/// letters and currently rests at `from`.
///
/// # Arguments
///
/// * `board` - The board.
/// * `letters` - The letters of the candidate word.
/// * `from` - The position of the last letter spelled, or `None` if the walk
///   has not started.
/// * `depth` - The number of letters spelled so far.
///
/// # Returns
///
/// The length of the longest spellable prefix reachable from here. Equal to
/// `letters.len()` iff the rest of the word can be spelled.
fn spelled_depth(
	board: &Board,
	letters: &[char],
	from: Option<usize>,
	depth: usize
) -> usize
{
	if depth >= letters.len()
	{
		return depth
	}
	let mut deepest = depth;
	for position in board.positions_of(letters[depth])
	{
		if Board::is_valid_move(from, position)
		{
			deepest = deepest.max(
				spelled_depth(board, letters, Some(position), depth + 1)
			);
			if deepest == letters.len()
			{
				// One complete walk is enough.
				break
			}
		}
	}
	deepest
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
