//! # Letter Boxed Solver
//!
//! Letter Boxed is a word puzzle game played on a square with three letters on
//! each of its four sides. The player must link words together, end to end,
//! until every letter of the square has been used, and consecutive letters of
//! a word may never come from the same side.
//!
//! This program is a solver for the Letter Boxed game. Via command line
//! options, the user can specify the dictionary to use, the puzzle to solve
//! (either from the archive or as 12 letters), and the parameters of the
//! search. The solutions are written to a file and to standard output.

use std::{
	error::Error,
	io,
	path::{Path, PathBuf},
	process,
	rc::Rc,
	time::{Duration, Instant}
};

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{debug, error, info, trace, warn, LevelFilter};

use letter_boxed_solver::{
	archive::PuzzleArchive,
	board::Board,
	config::Config,
	dictionary::Dictionary,
	index::WordIndex,
	limiter::{BreadthLimiter, Limiter, Unlimited},
	solution::SolutionSet,
	solver::Solver
};

/// How long to run the solver between progress checks.
const QUANTUM: Duration = Duration::from_millis(100);

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// CLI for solving Letter Boxed puzzles.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Opts
{
	/// The path to the directory containing the dictionary files.
	#[arg(short = 'd', long, default_value = "dict")]
	directory: String,

	/// The name of the dictionary. This is the name shared by the text and
	/// binary files, sans the extension.
	#[arg(short = 'n', long, default_value = "english")]
	dictionary: String,

	#[command(subcommand)]
	command: Command
}

/// The subcommands of the CLI.
#[derive(Clone, Debug, Subcommand)]
enum Command
{
	/// Just generate the binary dictionary and exit.
	Generate,

	/// List the puzzles of the archive, with their indices.
	List
	{
		/// A file of puzzles, one 12-letter board per line, to use instead of
		/// the built-in archive.
		#[arg(long)]
		puzzles: Option<PathBuf>
	},

	/// Solve a puzzle. The solutions will be written to the solution file and
	/// to standard output.
	Solve(SolveOpts)
}

/// The options of the `solve` subcommand. Each option overrides the
/// corresponding setting of the configuration file.
#[derive(Clone, Debug, Args)]
struct SolveOpts
{
	/// The 12 letters of the board, clockwise from the top-left corner.
	/// Overrides `--puzzle`.
	#[arg(short = 'b', long)]
	board: Option<String>,

	/// The index of the puzzle to solve within the archive.
	#[arg(short = 'p', long)]
	puzzle: Option<i64>,

	/// A file of puzzles, one 12-letter board per line, to use instead of the
	/// built-in archive.
	#[arg(long)]
	puzzles: Option<PathBuf>,

	/// A JSON configuration file.
	#[arg(short = 'c', long)]
	config: Option<PathBuf>,

	/// The maximum number of words in a solution.
	#[arg(short = 'l', long)]
	max_solution_length: Option<i64>,

	/// The adjustment to the breadth limiter's threshold. Positive values
	/// prune harder, negative values prune less.
	#[arg(long, allow_hyphen_values = true)]
	solution_breadth: Option<i64>,

	/// The shortest dictionary word to consider.
	#[arg(long)]
	min_word_length: Option<i64>,

	/// The longest dictionary word to consider.
	#[arg(long)]
	max_word_length: Option<i64>,

	/// Search exhaustively, without breadth limiting.
	#[arg(long)]
	no_limit: bool,

	/// Emit the solutions in order of discovery, rather than by rating.
	#[arg(long)]
	no_sort: bool,

	/// The file to which the solutions are written.
	#[arg(short = 'o', long)]
	output: Option<PathBuf>,

	/// Stop searching after this many milliseconds, keeping the solutions
	/// found so far.
	#[arg(long)]
	time_limit: Option<u64>,

	/// Suppress emission of the solutions to standard output.
	#[arg(short = 'q', long)]
	quiet: bool
}

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options and execute the appropriate subcommand.
fn main()
{
	env_logger::Builder::from_env(Env::default().default_filter_or("info"))
		.init();

	// Parse the command line options.
	let opts = Opts::parse();
	debug!("Command line options: {:?}", opts);

	if let Err(e) = run(opts)
	{
		error!("{}", e);
		process::exit(1);
	}
}

/// Execute the subcommand.
///
/// # Errors
///
/// Any error that prevents the subcommand from completing.
fn run(opts: Opts) -> Result<(), Box<dyn Error>>
{
	match opts.command
	{
		Command::Generate =>
		{
			let dictionary = Dictionary::open(&opts.directory, &opts.dictionary)?;
			info!("Generated binary dictionary: {} words", dictionary.len());
			trace!("Exiting after generating binary dictionary");
		},
		Command::List { puzzles } =>
		{
			let archive = load_archive(puzzles.as_deref())?;
			for (index, board) in archive.iter().enumerate()
			{
				println!("{}: {}", index, board);
			}
		},
		Command::Solve(solve) =>
		{
			solve_puzzle(&opts.directory, &opts.dictionary, solve)?;
		}
	}
	Ok(())
}

/// Solve a puzzle and emit its solutions.
///
/// # Arguments
///
/// * `directory` - The directory containing the dictionary files.
/// * `name` - The name of the dictionary.
/// * `opts` - The options of the `solve` subcommand.
///
/// # Errors
///
/// Any error that occurs while configuring the solver, reading the
/// dictionary, or writing the solutions.
fn solve_puzzle(
	directory: &str,
	name: &str,
	opts: SolveOpts
) -> Result<(), Box<dyn Error>>
{
	let phase = Phase::start("configuration");
	let archive = load_archive(opts.puzzles.as_deref())?;
	let mut config = match &opts.config
	{
		Some(path) => Config::read_from_file(path, archive.len())?,
		None => Config::default()
	};
	apply_overrides(&mut config, &opts, archive.len())?;
	if config.silence_all_output()
	{
		log::set_max_level(LevelFilter::Off);
	}
	let board = match &opts.board
	{
		Some(letters) => Board::new(letters)?,
		None => archive
			.get(config.puzzle_select())
			.cloned()
			.ok_or("the puzzle archive is empty")?
	};
	debug!("Configuration: {:?}", config);
	info!("Board: {}", board);
	phase.end();

	let phase = Phase::start("input");
	let dictionary = Dictionary::open(directory, name)?;
	let candidates =
		dictionary.candidates(config.min_word_length(), config.max_word_length());
	let index = Rc::new(WordIndex::build(&board, candidates));
	info!(
		"{} of {} dictionary words are playable",
		index.len(),
		dictionary.len()
	);
	phase.end();

	let phase = Phase::start("solutions");
	let time_limit = opts.time_limit.map(Duration::from_millis);
	let length = config.max_solution_length();
	let solutions = if config.will_limit()
	{
		let limiter = BreadthLimiter::new(length, config.solution_breadth());
		let solver = Solver::new(index, &board, length, limiter);
		drive(solver, &config, time_limit)
	}
	else
	{
		let solver = Solver::new(index, &board, length, Unlimited);
		drive(solver, &config, time_limit)
	};
	phase.end();

	let phase = Phase::start("output");
	solutions.write_to_file(config.solution_path())?;
	info!("Wrote solutions: {}", config.solution_path().display());
	if !opts.quiet
	{
		print_solutions(&solutions);
	}
	phase.end();

	info!("Solutions count: {}", solutions.len());
	Ok(())
}

/// Overlay the command line options onto the configuration.
///
/// # Errors
///
/// If the selected puzzle is not in the archive.
fn apply_overrides(
	config: &mut Config,
	opts: &SolveOpts,
	puzzles: usize
) -> Result<(), Box<dyn Error>>
{
	if let Some(index) = opts.puzzle
	{
		if !config.set_puzzle_select(index, puzzles)
		{
			return Err(
				format!("no puzzle at index {} (of {})", index, puzzles).into()
			)
		}
	}
	if let Some(length) = opts.min_word_length
	{
		config.set_min_word_length(length);
	}
	if let Some(length) = opts.max_word_length
	{
		config.set_max_word_length(length);
	}
	if let Some(length) = opts.max_solution_length
	{
		config.set_max_solution_length(length);
	}
	if let Some(breadth) = opts.solution_breadth
	{
		config.set_solution_breadth(breadth);
	}
	if opts.no_limit
	{
		config.set_will_limit(false);
	}
	if opts.no_sort
	{
		config.set_will_sort(false);
	}
	if let Some(path) = &opts.output
	{
		config.set_solution_path(path);
	}
	Ok(())
}

/// Load the puzzle archive from the given file, or use the built-in archive if
/// there is no file.
///
/// # Errors
///
/// If the file cannot be read or contains a malformed board.
fn load_archive(path: Option<&Path>) -> Result<PuzzleArchive, io::Error>
{
	match path
	{
		Some(path) => PuzzleArchive::read_from_file(path),
		None => Ok(PuzzleArchive::builtin())
	}
}

/// Run the solver to completion, or until the time limit expires, reporting
/// progress after every tenth of the start words.
///
/// # Arguments
///
/// * `solver` - The solver, ready to run.
/// * `config` - The configuration.
/// * `time_limit` - How long to search, if bounded.
///
/// # Returns
///
/// The solutions found.
fn drive<L: Limiter>(
	mut solver: Solver<L>,
	config: &Config,
	time_limit: Option<Duration>
) -> SolutionSet
{
	let start_time = Instant::now();
	let mut reported = 0;
	while !solver.is_finished()
	{
		solver = solver.solve(QUANTUM).0;
		let (done, total) = solver.progress();
		let tenths = done * 10 / total.max(1);
		if tenths > reported
		{
			reported = tenths;
			if !config.silence_progress_output()
			{
				info!(
					"Progress: {}/{} start words, {} solutions",
					done,
					total,
					solver.solutions().len()
				);
			}
		}
		if let Some(limit) = time_limit
		{
			if start_time.elapsed() >= limit
			{
				warn!("Time limit reached after {}/{} start words", done, total);
				break
			}
		}
	}
	solver.into_solutions(config.will_sort())
}

/// Print the solutions to standard output.
///
/// # Arguments
///
/// * `solutions` - The solutions to print.
fn print_solutions(solutions: &SolutionSet)
{
	for solution in solutions
	{
		println!("{}", solution);
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                  Phases.                                   //
////////////////////////////////////////////////////////////////////////////////

/// A timed phase of the program, logged at its start and end.
#[must_use]
struct Phase
{
	/// The name of the phase.
	name: &'static str,

	/// When the phase started.
	start_time: Instant
}

impl Phase
{
	/// Begin a phase.
	fn start(name: &'static str) -> Self
	{
		info!("Phase started: {}", name);
		Self { name, start_time: Instant::now() }
	}

	/// End the phase successfully.
	fn end(self)
	{
		info!("Phase finished: {} ({:?})", self.name, self.start_time.elapsed());
	}
}
