use std::{rc::Rc, time::Duration};

use const_format::concatcp;
use criterion::{measurement::Measurement, BenchmarkGroup, Criterion};
use letter_boxed_solver::{
	archive::PuzzleArchive,
	board::Board,
	dictionary::Dictionary,
	index::WordIndex,
	limiter::{BreadthLimiter, Unlimited},
	solver::Solver
};

/// The path of the directory containing the dictionaries.
#[inline]
#[must_use]
const fn dir() -> &'static str
{
	"dict"
}

/// The name of the dictionary file.
#[inline]
#[must_use]
const fn name() -> &'static str
{
	"english"
}

/// The path to the text file.
#[inline]
#[must_use]
const fn path_txt() -> &'static str
{
	concatcp!(dir(), "/", name(), ".txt")
}

/// The path to the binary file.
#[inline]
#[must_use]
const fn path_dict() -> &'static str
{
	concatcp!(dir(), "/", name(), ".dict")
}

/// The longest solution to search for.
const MAX_CHAIN_LENGTH: usize = 3;

/// Benchmark reading a dictionary from a file.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_read_from_file<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	g.bench_function("read_from_file", |b| {
		b.iter(|| Dictionary::read_from_file(path_txt()).unwrap());
	});
}

/// Benchmark deserializing a dictionary from a file.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_deserialize_from_file<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	g.bench_function("deserialize_from_file", |b| {
		b.iter(|| Dictionary::deserialize_from_file(path_dict()).unwrap());
	});
}

/// Benchmark indexing the playable words of a board.
///
/// # Arguments
///
/// * `g` - The benchmark group.
/// * `dictionary` - The dictionary.
/// * `board` - The board.
fn bench_index<M: Measurement>(
	g: &mut BenchmarkGroup<M>,
	dictionary: &Dictionary,
	board: &Board
)
{
	g.bench_function("index", |b| {
		b.iter(|| WordIndex::build(board, dictionary.candidates(3, 20)));
	});
}

/// Benchmark solving a puzzle, both exhaustively and with breadth limiting.
///
/// # Arguments
///
/// * `g` - The benchmark group.
/// * `index` - The playable words.
/// * `board` - The board.
fn bench_solver<M: Measurement>(
	g: &mut BenchmarkGroup<M>,
	index: &Rc<WordIndex>,
	board: &Board
)
{
	g.bench_function("solve_unlimited", |b| {
		b.iter(|| {
			let solver =
				Solver::new(Rc::clone(index), board, MAX_CHAIN_LENGTH, Unlimited);
			assert!(solver.solve_fully().is_finished());
		});
	});
	g.bench_function("solve_limited", |b| {
		b.iter(|| {
			let limiter = BreadthLimiter::new(MAX_CHAIN_LENGTH, 0);
			let solver =
				Solver::new(Rc::clone(index), board, MAX_CHAIN_LENGTH, limiter);
			assert!(solver.solve_fully().is_finished());
		});
	});
}

/// Run all benchmarks.
///
/// The main purpose of the benchmarking is to ensure that
/// [`deserialize_from_file`](Dictionary::deserialize_from_file) is faster than
/// [`read_from_file`](Dictionary::read_from_file), and to track the cost of
/// the search with and without breadth limiting.
fn main()
{
	// Ensure that both the text and binary files exist.
	let dictionary = Dictionary::open(dir(), name()).unwrap();
	let board = PuzzleArchive::builtin().get(0).cloned().unwrap();
	let index = Rc::new(WordIndex::build(&board, dictionary.candidates(3, 20)));

	// Run the benchmarks.
	let mut criterion = Criterion::default().configure_from_args();
	let mut group = criterion.benchmark_group("benchmarks");
	group.measurement_time(Duration::from_secs(10));
	bench_read_from_file(&mut group);
	bench_deserialize_from_file(&mut group);
	bench_index(&mut group, &dictionary, &board);
	bench_solver(&mut group, &index, &board);
	group.finish();

	// Generate the final summary.
	criterion.final_summary();
}
