//! # Breadth limiting
//!
//! The search space of a Letter Boxed puzzle explodes quickly, and most of it
//! consists of near-duplicates: once a prefix of words has produced a solution,
//! it tends to produce many more that differ only in their last word. A
//! [`Limiter`] watches the solutions as they are found and tells the
//! [solver](crate::solver) when to stop exploring the siblings of the current
//! branch.
//!
//! Breadth limiting is a heuristic. It never admits an invalid solution; it
//! only discards some valid ones. [`Unlimited`] disables it entirely, which
//! makes the search exhaustive.

use log::trace;

use crate::solution::Solution;

////////////////////////////////////////////////////////////////////////////////
//                                  Limiter.                                  //
////////////////////////////////////////////////////////////////////////////////

/// The capability to truncate the search.
pub trait Limiter
{
	/// Note that a new solution has just been recorded.
	///
	/// # Arguments
	///
	/// * `solutions` - Every solution found so far, in order of discovery. The
	///   newest solution is last.
	/// * `depth` - The number of words in the solver's current chain.
	fn update(&mut self, solutions: &[Solution], depth: usize);

	/// Check whether the solver should abandon the remaining candidates at the
	/// current level. Consulted once after each candidate is tried.
	///
	/// # Returns
	///
	/// `true` if the remaining candidates should be skipped, `false`
	/// otherwise.
	fn has_reached_limit(&mut self) -> bool;
}

/// A limiter that never limits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unlimited;

impl Limiter for Unlimited
{
	#[inline]
	fn update(&mut self, _solutions: &[Solution], _depth: usize) {}

	#[inline]
	fn has_reached_limit(&mut self) -> bool { false }
}

////////////////////////////////////////////////////////////////////////////////
//                              Breadth limiter.                              //
////////////////////////////////////////////////////////////////////////////////

/// A limiter that detects runs of solutions sharing the same words at the
/// same positions.
///
/// For each position `b` of a chain, the limiter counts how many consecutive
/// solutions have agreed on the word at `b`. When the count reaches
/// `2^(max_chain_length - b - breadth)`, the limiter arms a brake that skips
/// the next few candidates, enough to unwind the search back to position `b`.
/// The tolerance halves with every position, so repetition near the start of
/// a chain is tolerated far longer than repetition near the end.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct BreadthLimiter
{
	/// The repeat counts, one per chain position. Every count starts at 1.
	counts: Vec<u64>,

	/// The number of upcoming candidate loops to cut short.
	limit_level: usize,

	/// The adjustment to the exponent of the threshold. Positive values
	/// tighten the limiter, negative values loosen it.
	breadth: i32
}

impl BreadthLimiter
{
	/// Construct a breadth limiter.
	///
	/// # Arguments
	///
	/// * `max_chain_length` - The maximum number of words in a solution.
	/// * `breadth` - The adjustment to the exponent of the threshold.
	///
	/// # Returns
	///
	/// The requested limiter, with every count at 1 and the brake released.
	pub fn new(max_chain_length: usize, breadth: i32) -> Self
	{
		Self
		{
			counts: vec![1; max_chain_length],
			limit_level: 0,
			breadth
		}
	}

	/// The current repeat counts, one per chain position.
	#[inline]
	#[must_use]
	pub fn counts(&self) -> &[u64] { &self.counts }

	/// The number of upcoming candidate loops that will be cut short.
	#[inline]
	#[must_use]
	pub fn limit_level(&self) -> usize { self.limit_level }

	/// Compare the two newest solutions position by position, bumping the
	/// count of every leading position at which they agree and resetting the
	/// counts from the first disagreement onward.
	fn update_counts(&mut self, previous: &Solution, current: &Solution)
	{
		for b in 0..self.counts.len()
		{
			// Positions past the end of both chains agree.
			if previous.words().get(b) == current.words().get(b)
			{
				self.counts[b] += 1;
			}
			else
			{
				self.counts[b..].fill(1);
				break
			}
		}
	}

	/// Check whether the count at the specified position has reached its
	/// threshold.
	fn is_exceeded(&self, b: usize) -> bool
	{
		let exponent = self.counts.len() as i64 - b as i64 - self.breadth as i64;
		// A threshold of at most 1 is reached by every count.
		exponent <= 0
			|| (exponent < u64::BITS as i64 && self.counts[b] >= 1 << exponent)
	}
}

impl Limiter for BreadthLimiter
{
	fn update(&mut self, solutions: &[Solution], depth: usize)
	{
		let [.., previous, current] = solutions
		else
		{
			return
		};
		self.update_counts(previous, current);
		if let Some(b) = (0..self.counts.len()).find(|&b| self.is_exceeded(b))
		{
			self.limit_level = depth.saturating_sub(1).saturating_sub(b);
			trace!(
				"limit at position {}: counts={:?}, level={}",
				b,
				self.counts,
				self.limit_level
			);
		}
	}

	fn has_reached_limit(&mut self) -> bool
	{
		if self.limit_level > 0
		{
			self.limit_level -= 1;
			true
		}
		else
		{
			false
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::{
		limiter::{BreadthLimiter, Limiter, Unlimited},
		solution::Solution
	};

	/// Record a solution and notify the limiter, as the solver does.
	fn record(
		limiter: &mut BreadthLimiter,
		solutions: &mut Vec<Solution>,
		words: &[&str]
	)
	{
		solutions.push(Solution::new(words));
		limiter.update(&solutions[..], words.len());
	}

	/// Ensure that a lone solution changes nothing.
	#[test]
	fn test_single_solution()
	{
		let mut limiter = BreadthLimiter::new(3, 0);
		let mut solutions = Vec::new();
		record(&mut limiter, &mut solutions, &["A", "B"]);
		assert_eq!(limiter.counts(), &[1, 1, 1]);
		assert_eq!(limiter.limit_level(), 0);
		assert!(!limiter.has_reached_limit());
	}

	/// Ensure that counts grow while solutions agree and reset from the first
	/// disagreement, and that the brake arms once a threshold is met.
	#[test]
	fn test_counts_and_limit()
	{
		// Thresholds are 8, 4, and 2 for positions 0, 1, and 2.
		let mut limiter = BreadthLimiter::new(3, 0);
		let mut solutions = Vec::new();
		record(&mut limiter, &mut solutions, &["A", "B"]);
		record(&mut limiter, &mut solutions, &["A", "C"]);
		assert_eq!(limiter.counts(), &[2, 1, 1]);
		record(&mut limiter, &mut solutions, &["A", "C", "D"]);
		assert_eq!(limiter.counts(), &[3, 2, 1]);
		record(&mut limiter, &mut solutions, &["A", "C", "E"]);
		assert_eq!(limiter.counts(), &[4, 3, 1]);
		assert_eq!(limiter.limit_level(), 0);
		record(&mut limiter, &mut solutions, &["A", "C", "F"]);
		assert_eq!(limiter.counts(), &[5, 4, 1]);
		// Position 1 reached its threshold in a chain of 3 words.
		assert_eq!(limiter.limit_level(), 1);
		assert!(limiter.has_reached_limit());
		assert!(!limiter.has_reached_limit());
		record(&mut limiter, &mut solutions, &["B", "C", "F"]);
		assert_eq!(limiter.counts(), &[1, 1, 1]);
	}

	/// Ensure that the first qualifying position wins, and that a large enough
	/// breadth makes every position qualify.
	#[test]
	fn test_breadth()
	{
		let mut limiter = BreadthLimiter::new(3, 3);
		let mut solutions = Vec::new();
		record(&mut limiter, &mut solutions, &["A", "B", "C"]);
		record(&mut limiter, &mut solutions, &["D", "E", "F"]);
		assert_eq!(limiter.counts(), &[1, 1, 1]);
		assert_eq!(limiter.limit_level(), 2);
		assert!(limiter.has_reached_limit());
		assert!(limiter.has_reached_limit());
		assert!(!limiter.has_reached_limit());

		// A negative breadth loosens every threshold.
		let mut limiter = BreadthLimiter::new(2, -1);
		let mut solutions = Vec::new();
		for last in ["B", "C", "D", "E", "F", "G", "H"]
		{
			record(&mut limiter, &mut solutions, &["A", last]);
		}
		// Position 0 needs 8 repeats, position 1 needs 4.
		assert_eq!(limiter.counts(), &[7, 1]);
		assert_eq!(limiter.limit_level(), 0);
		record(&mut limiter, &mut solutions, &["A", "I"]);
		assert_eq!(limiter.counts(), &[8, 1]);
		assert_eq!(limiter.limit_level(), 1);
	}

	/// Ensure that the unlimited limiter never limits.
	#[test]
	fn test_unlimited()
	{
		let mut limiter = Unlimited;
		let solutions = vec![Solution::new(&["A"]), Solution::new(&["A"])];
		for _ in 0..10
		{
			limiter.update(&solutions, 1);
			assert!(!limiter.has_reached_limit());
		}
	}
}
