//! # Solutions
//!
//! Herein are the solutions produced by the [solver](crate::solver). A
//! [`Solution`] is a finished chain of words that covers every letter of the
//! board; a [`SolutionSet`] accumulates them in order of discovery.

use std::{
	fmt::{self, Display, Formatter},
	fs::{self, File},
	io::{self, BufWriter, Write},
	path::Path,
	slice
};

use log::trace;

////////////////////////////////////////////////////////////////////////////////
//                                 Solution.                                  //
////////////////////////////////////////////////////////////////////////////////

/// A chain of words that covers every letter of the board. Immutable once
/// created.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Solution
{
	/// The words of the chain, in order.
	words: Vec<String>,

	/// The total number of characters across every word.
	character_count: usize
}

impl Solution
{
	/// Construct a solution from the words of a chain.
	///
	/// # Arguments
	///
	/// * `words` - The words of the chain, in order.
	///
	/// # Returns
	///
	/// The requested solution.
	pub fn new<T: AsRef<str>>(words: &[T]) -> Self
	{
		let words = words.iter()
			.map(|w| w.as_ref().to_string())
			.collect::<Vec<_>>();
		let character_count = words.iter().map(|w| w.chars().count()).sum();
		Self { words, character_count }
	}

	/// The words of the chain, in order.
	#[inline]
	#[must_use]
	pub fn words(&self) -> &[String] { &self.words }

	/// The number of words in the chain.
	#[inline]
	#[must_use]
	pub fn word_count(&self) -> usize { self.words.len() }

	/// The total number of characters across every word.
	#[inline]
	#[must_use]
	pub fn character_count(&self) -> usize { self.character_count }

	/// The rating of the solution, which is the product of the word count and
	/// the character count. Lower is better.
	#[inline]
	#[must_use]
	pub fn rating(&self) -> usize
	{
		self.word_count() * self.character_count
	}
}

impl Display for Solution
{
	/// Render the solution as `rating, word count, character count, words`,
	/// where the words are comma-separated.
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(
			f,
			"{}, {}, {}, {}",
			self.rating(),
			self.word_count(),
			self.character_count,
			self.words.join(",")
		)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Solution sets.                               //
////////////////////////////////////////////////////////////////////////////////

/// The solutions found by a single search, in order of discovery unless
/// [sorted](Self::sort).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct SolutionSet(Vec<Solution>);

impl SolutionSet
{
	/// Construct an empty solution set. Same as [`Default::default`].
	#[inline]
	pub fn new() -> Self { Self::default() }

	/// Append a solution.
	#[inline]
	pub fn add(&mut self, solution: Solution)
	{
		self.0.push(solution);
	}

	/// Check if the solution set is empty.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Get the number of solutions.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.0.len() }

	/// Get every solution, in order.
	#[inline]
	#[must_use]
	pub fn as_slice(&self) -> &[Solution] { &self.0 }

	/// Get an iterator over every solution, in order.
	#[inline]
	pub fn iter(&self) -> slice::Iter<'_, Solution> { self.0.iter() }

	/// Sort the solutions by ascending [rating](Solution::rating). The sort is
	/// stable, so solutions of equal rating keep their order of discovery.
	pub fn sort(&mut self)
	{
		self.0.sort_by_key(Solution::rating);
	}

	/// Write the solutions to the specified file, one per line, in the textual
	/// form given by [`Display`]. Any missing parent directories are created.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Errors
	///
	/// If the file cannot be created or written, an error is returned.
	pub fn write_to_file<T: AsRef<Path>>(&self, path: T) -> Result<(), io::Error>
	{
		let path = path.as_ref();
		if let Some(parent) = path.parent()
		{
			if !parent.as_os_str().is_empty()
			{
				fs::create_dir_all(parent)?;
			}
		}
		let mut writer = BufWriter::new(File::create(path)?);
		for (i, solution) in self.0.iter().enumerate()
		{
			if i > 0
			{
				writeln!(writer)?;
			}
			write!(writer, "{}", solution)?;
		}
		writer.flush()?;
		trace!("Wrote {} solutions: {}", self.0.len(), path.display());
		Ok(())
	}
}

impl<'a> IntoIterator for &'a SolutionSet
{
	type Item = &'a Solution;
	type IntoIter = slice::Iter<'a, Solution>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::fs;

	use tempfile::tempdir;

	use crate::solution::{Solution, SolutionSet};

	/// Ensure that the metadata and the textual rendering of a solution are
	/// correct.
	#[test]
	fn test_solution()
	{
		let solution = Solution::new(&["ADGJ", "JBEHK", "KCFIL"]);
		assert_eq!(solution.word_count(), 3);
		assert_eq!(solution.character_count(), 14);
		assert_eq!(solution.rating(), 42);
		assert_eq!(solution.to_string(), "42, 3, 14, ADGJ,JBEHK,KCFIL");
		let single = Solution::new(&["ADGJBEHKCFIL"]);
		assert_eq!(single.to_string(), "12, 1, 12, ADGJBEHKCFIL");
	}

	/// Ensure that sorting orders by ascending rating and is stable.
	#[test]
	fn test_sort()
	{
		let mut solutions = SolutionSet::new();
		solutions.add(Solution::new(&["ADGJ", "JBEHK", "KCFIL"]));
		solutions.add(Solution::new(&["ADGJBEHKCFIL"]));
		solutions.add(Solution::new(&["ABCD", "DEFGHIJKL"]));
		solutions.add(Solution::new(&["LKJIHGFE", "EDCBA"]));
		solutions.sort();
		let ratings = solutions.iter().map(Solution::rating).collect::<Vec<_>>();
		assert_eq!(ratings, vec![12, 26, 26, 42]);
		assert_eq!(solutions.as_slice()[1].words()[0], "ABCD");
		assert_eq!(solutions.as_slice()[2].words()[0], "LKJIHGFE");
	}

	/// Ensure that solutions are written one per line, creating the directory
	/// as necessary.
	#[test]
	fn test_write_to_file()
	{
		let dir = tempdir().unwrap();
		let path = dir.path().join("output").join("solutions.txt");
		let mut solutions = SolutionSet::new();
		solutions.add(Solution::new(&["ADGJ", "JBEHK", "KCFIL"]));
		solutions.add(Solution::new(&["ADGJBEHKCFIL"]));
		solutions.write_to_file(&path).unwrap();
		let content = fs::read_to_string(&path).unwrap();
		assert_eq!(
			content,
			"42, 3, 14, ADGJ,JBEHK,KCFIL\n12, 1, 12, ADGJBEHKCFIL"
		);
	}
}
