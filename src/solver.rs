//! # Solver
//!
//! Herein is the solver for the Letter Boxed game. The solver chains playable
//! words end to end, each word beginning with the last letter of its
//! predecessor, until the chain covers every letter of the board or grows too
//! long. Every word of the [index](crate::index) is tried as the start of a
//! chain, so the solver finds many solutions rather than just the first.

use std::{
	rc::Rc,
	time::{Duration, Instant}
};

use log::{debug, trace};

use crate::{
	board::{Board, LetterSet},
	index::WordIndex,
	limiter::Limiter,
	solution::{Solution, SolutionSet}
};

////////////////////////////////////////////////////////////////////////////////
//                                  Solver.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The complete context of the Letter Boxed solver. The chain under
/// construction is kept as an explicit stack of frames, rather than on the
/// call stack, so the search can be time-sliced and resumed.
#[derive(Clone, Debug)]
#[must_use]
pub struct Solver<L: Limiter>
{
	/// The playable words.
	index: Rc<WordIndex>,

	/// Every distinct letter of the board.
	full: LetterSet,

	/// The maximum number of words in a solution.
	max_chain_length: usize,

	/// The breadth limiter, consulted as the search proceeds.
	limiter: L,

	/// The chain under construction, one frame per word.
	chain: Vec<Frame>,

	/// The identifier of the next word to try as the start of a chain.
	next_start: usize,

	/// The solutions found so far, in order of discovery.
	solutions: SolutionSet,

	/// Whether the solver is finished.
	is_finished: bool
}

/// One word of the chain under construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Frame
{
	/// The identifier of the word.
	word: usize,

	/// The board letters not yet covered by the chain, up to and including
	/// this word.
	required: LetterSet,

	/// The offset of the next candidate successor to try, among the words
	/// that begin with the last letter of this word.
	next: usize
}

impl<L: Limiter> Solver<L>
{
	/// Construct a new solver.
	///
	/// # Arguments
	///
	/// * `index` - The words that are playable on `board`.
	/// * `board` - The board.
	/// * `max_chain_length` - The maximum number of words in a solution.
	/// * `limiter` - The breadth limiter. A fresh limiter is required for every
	///   solver.
	///
	/// # Returns
	///
	/// A new solver, ready to run.
	pub fn new(
		index: Rc<WordIndex>,
		board: &Board,
		max_chain_length: usize,
		limiter: L
	) -> Self
	{
		Self
		{
			index,
			full: board.full_set(),
			max_chain_length,
			limiter,
			chain: Vec::with_capacity(max_chain_length + 1),
			next_start: 0,
			solutions: SolutionSet::new(),
			is_finished: false
		}
	}

	/// Check if the solver is finished. The solver is finished if the search
	/// algorithm has terminated due to exhaustion of the search space.
	#[inline]
	#[must_use]
	pub fn is_finished(&self) -> bool
	{
		self.is_finished
	}

	/// Report how far the search has progressed.
	///
	/// # Returns
	///
	/// A 2-tuple comprising the number of words that have been tried as the
	/// start of a chain and the total number of playable words, respectively.
	#[inline]
	#[must_use]
	pub fn progress(&self) -> (usize, usize)
	{
		(self.next_start, self.index.len())
	}

	/// Get the solutions found so far, in order of discovery.
	#[inline]
	pub fn solutions(&self) -> &SolutionSet
	{
		&self.solutions
	}

	/// Relinquish the solutions found so far.
	///
	/// # Arguments
	///
	/// * `will_sort` - Whether to [sort](SolutionSet::sort) the solutions.
	///
	/// # Returns
	///
	/// The solutions.
	pub fn into_solutions(self, will_sort: bool) -> SolutionSet
	{
		let mut solutions = self.solutions;
		if will_sort
		{
			solutions.sort();
		}
		solutions
	}

	/// Run the solver until a single solution is found or the specified
	/// quantum elapses. Always perform at least one step, even if the quantum
	/// is zero, to ensure that the solver always makes progress.
	///
	/// # Arguments
	///
	/// * `duration` - The maximum amount of time to run the solver before
	///   answering a continuation context.
	///
	/// # Returns
	///
	/// A 2-tuple comprising the continuation context and any solution found,
	/// respectively. The caller should call [`is_finished`](Self::is_finished)
	/// to determine if there is any additional work to perform.
	pub fn solve(mut self, duration: Duration) -> (Self, Option<Solution>)
	{
		// If the solver is already finished, just return it.
		if self.is_finished
		{
			trace!("solver is already finished");
			return (self, None)
		}

		let start_time = Instant::now();
		loop
		{
			if let Some(solution) = self.step()
			{
				return (self, Some(solution))
			}
			if self.is_finished
			{
				debug!(
					"exhausted search space: {} solutions",
					self.solutions.len()
				);
				return (self, None)
			}
			let elapsed = Instant::now().duration_since(start_time);
			if elapsed >= duration
			{
				trace!("quantum elapsed: {:?}", elapsed);
				return (self, None)
			}
		}
	}

	/// Run the solver until the search space is exhausted.
	///
	/// # Returns
	///
	/// The final context.
	pub fn solve_fully(mut self) -> Self
	{
		while !self.is_finished
		{
			let next = self.solve(Duration::MAX);
			self = next.0;
		}
		self
	}

	/// Perform one step of the search: push the next word onto the chain, or
	/// pop the top word if its successors are exhausted.
	///
	/// # Returns
	///
	/// The solution completed by this step, if any.
	fn step(&mut self) -> Option<Solution>
	{
		let Some(frame) = self.chain.last_mut()
		else
		{
			// The chain is empty, so begin the next start word.
			if self.next_start >= self.index.len()
			{
				self.is_finished = true;
				return None
			}
			let word = self.next_start;
			self.next_start += 1;
			let required = self.full.difference(self.index.word(word).letters());
			return self.enter(word, required)
		};
		let index = &self.index;
		let candidates = index.ids_starting_with(index.word(frame.word).last());
		while let Some(&candidate) = candidates.get(frame.next)
		{
			frame.next += 1;
			let letters = index.word(candidate).letters();
			// A successor that covers nothing new can never help, and only
			// wastes chain length.
			if letters.intersects(frame.required)
			{
				let required = frame.required.difference(letters);
				return self.enter(candidate, required)
			}
		}
		self.leave(false)
	}

	/// Push a word onto the chain and settle it at once if the chain is too
	/// long or already complete.
	///
	/// # Arguments
	///
	/// * `word` - The identifier of the word.
	/// * `required` - The board letters still uncovered once `word` is added.
	///
	/// # Returns
	///
	/// The solution completed by the word, if any.
	fn enter(&mut self, word: usize, required: LetterSet) -> Option<Solution>
	{
		self.chain.push(Frame { word, required, next: 0 });
		trace!("considering: {:?}", self.chain_words());
		if self.chain.len() > self.max_chain_length
		{
			self.leave(false)
		}
		else if required.is_empty()
		{
			self.leave(true)
		}
		else
		{
			None
		}
	}

	/// Pop the top word from the chain, recording the chain as a solution
	/// first if it covers the board. Afterward, consult the limiter about the
	/// remaining siblings of the popped word.
	///
	/// # Arguments
	///
	/// * `covered` - Whether the chain covers every letter of the board.
	///
	/// # Returns
	///
	/// The recorded solution, if any.
	fn leave(&mut self, covered: bool) -> Option<Solution>
	{
		let solution = if covered
		{
			let solution = Solution::new(&self.chain_words());
			debug!("found solution: {}", solution);
			self.solutions.add(solution.clone());
			self.limiter.update(self.solutions.as_slice(), self.chain.len());
			Some(solution)
		}
		else
		{
			None
		};
		self.chain.pop();
		let depth = self.chain.len();
		// Start words have no siblings to skip.
		if let Some(parent) = self.chain.last_mut()
		{
			if self.limiter.has_reached_limit()
			{
				trace!("breadth limit reached at depth {}", depth);
				parent.next = usize::MAX;
			}
		}
		solution
	}

	/// Get the words of the chain under construction.
	fn chain_words(&self) -> Vec<&str>
	{
		self.chain.iter()
			.map(|frame| self.index.word(frame.word).text())
			.collect()
	}
}

/// Search for every solution reachable under the specified limiter.
///
/// # Arguments
///
/// * `index` - The words that are playable on `board`.
/// * `board` - The board.
/// * `max_chain_length` - The maximum number of words in a solution.
/// * `limiter` - The breadth limiter.
/// * `will_sort` - Whether to [sort](SolutionSet::sort) the solutions.
///
/// # Returns
///
/// The solutions.
pub fn search<L: Limiter>(
	index: Rc<WordIndex>,
	board: &Board,
	max_chain_length: usize,
	limiter: L,
	will_sort: bool
) -> SolutionSet
{
	Solver::new(index, board, max_chain_length, limiter)
		.solve_fully()
		.into_solutions(will_sort)
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
