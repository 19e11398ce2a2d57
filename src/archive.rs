//! # Puzzle archive
//!
//! Herein is the archive of puzzles available for solving. The archive ships
//! with a handful of published puzzles, and can also be read from a text file
//! with one 12-letter board per line.

use std::{
	fs::File,
	io::{self, BufRead, BufReader, ErrorKind},
	path::Path,
	slice
};

use log::trace;

use crate::board::Board;

/// The built-in puzzles, as board strings.
const BUILTIN: [&str; 7] = [
	"TKLUAINYEBZH",
	"NEUICKWRPTAL",
	"AUEVCNRIOGLF",
	"QKIHMUAOSFRE",
	"OEPBHYKSRUCA",
	"OIVBGRPMDEAY",
	"YHOLFVRTNIWG"
];

/// An ordered collection of boards, addressed by index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct PuzzleArchive(Vec<Board>);

impl PuzzleArchive
{
	/// Construct the archive of built-in puzzles.
	pub fn builtin() -> Self
	{
		Self(
			BUILTIN.iter()
				.filter_map(|letters| Board::new(letters).ok())
				.collect()
		)
	}

	/// Read an archive from the given file. Each non-blank line holds the 12
	/// letters of one board.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// The archive of boards from the file, in order.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If any line is not a valid board, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn read_from_file<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let path = path.as_ref();
		let reader = BufReader::new(File::open(path)?);
		let mut boards = Vec::new();
		for (number, line) in reader.lines().enumerate()
		{
			let line = line?;
			let line = line.trim();
			if line.is_empty()
			{
				continue
			}
			let board = Board::new(line).map_err(|e| {
				io::Error::new(
					ErrorKind::InvalidData,
					format!("{}:{}: {}", path.display(), number + 1, e)
				)
			})?;
			boards.push(board);
		}
		trace!("Read {} puzzles: {}", boards.len(), path.display());
		Ok(Self(boards))
	}

	/// Check if the archive is empty.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Get the number of puzzles in the archive.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.0.len() }

	/// Get the puzzle at the specified index, if any.
	#[inline]
	#[must_use]
	pub fn get(&self, index: usize) -> Option<&Board> { self.0.get(index) }

	/// Get an iterator over every puzzle, in order.
	#[inline]
	pub fn iter(&self) -> slice::Iter<'_, Board> { self.0.iter() }
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
