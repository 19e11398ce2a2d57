//! # Configuration
//!
//! Herein are the tunable parameters of the solver. A [`Config`] starts from
//! sensible defaults, may be overlaid by a JSON configuration file, and may be
//! overlaid again from the command line. Every setter validates its input. An
//! invalid value is ignored with a warning, and the previous setting stands.

use std::{
	error::Error,
	fmt::{self, Display, Formatter},
	fs,
	io,
	path::{Path, PathBuf}
};

use log::{trace, warn};
use serde_json::{Map, Value};

/// The shortest word length that may be configured.
pub const MIN_WORD_LENGTH: usize = 3;

////////////////////////////////////////////////////////////////////////////////
//                               Configuration.                               //
////////////////////////////////////////////////////////////////////////////////

/// The configuration of a solver run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Config
{
	/// Whether to sort the solutions by ascending rating before output.
	will_sort: bool,

	/// Whether to apply breadth limiting during the search.
	will_limit: bool,

	/// Whether to suppress all log output.
	silence_all_output: bool,

	/// Whether to suppress progress reports.
	silence_progress_output: bool,

	/// The shortest dictionary word to consider.
	min_word_length: usize,

	/// The longest dictionary word to consider.
	max_word_length: usize,

	/// The maximum number of words in a solution.
	max_solution_length: usize,

	/// The adjustment to the breadth limiter's threshold exponent.
	solution_breadth: i32,

	/// The index of the puzzle to solve within the archive.
	puzzle_select: usize,

	/// Where to write the solutions.
	solution_path: PathBuf
}

impl Default for Config
{
	fn default() -> Self
	{
		Self
		{
			will_sort: true,
			will_limit: true,
			silence_all_output: false,
			silence_progress_output: false,
			min_word_length: MIN_WORD_LENGTH,
			max_word_length: 20,
			max_solution_length: 5,
			solution_breadth: 0,
			puzzle_select: 0,
			solution_path: PathBuf::from("output/solutions.txt")
		}
	}
}

// Loading.
impl Config
{
	/// Read a configuration file, overlaying its settings onto the defaults.
	///
	/// # Arguments
	///
	/// * `path` - The configuration file.
	/// * `puzzles` - The number of puzzles in the archive, which bounds the
	///   puzzle selector.
	///
	/// # Returns
	///
	/// The resulting configuration.
	///
	/// # Errors
	///
	/// * [`ConfigError::Io`] if the file cannot be read.
	/// * [`ConfigError::Parse`] if the file is not a JSON object.
	pub fn read_from_file<T: AsRef<Path>>(
		path: T,
		puzzles: usize
	) -> Result<Self, ConfigError>
	{
		let path = path.as_ref();
		let json = fs::read_to_string(path).map_err(ConfigError::Io)?;
		let mut config = Self::default();
		config.apply_json(&json, puzzles)?;
		trace!("Read configuration: {}: {:?}", path.display(), config);
		Ok(config)
	}

	/// Overlay the settings of a JSON object onto this configuration. Keys are
	/// camel-cased, e.g., `maxSolutionLength`. Unknown keys are ignored.
	///
	/// # Arguments
	///
	/// * `json` - The JSON text.
	/// * `puzzles` - The number of puzzles in the archive, which bounds the
	///   puzzle selector.
	///
	/// # Errors
	///
	/// [`ConfigError::Parse`] if `json` is not a JSON object.
	pub fn apply_json(
		&mut self,
		json: &str,
		puzzles: usize
	) -> Result<(), ConfigError>
	{
		let entries: Map<String, Value> =
			serde_json::from_str(json).map_err(ConfigError::Parse)?;
		for (key, value) in entries.iter()
		{
			let accepted = match key.as_str()
			{
				"willSort" => self.apply_bool(value, Self::set_will_sort),
				"willLimit" => self.apply_bool(value, Self::set_will_limit),
				"silenceAllOutput" =>
					self.apply_bool(value, Self::set_silence_all_output),
				"silenceProgressOutput" =>
					self.apply_bool(value, Self::set_silence_progress_output),
				"minWordLength" => value.as_i64()
					.map(|v| self.set_min_word_length(v))
					.is_some(),
				"maxWordLength" => value.as_i64()
					.map(|v| self.set_max_word_length(v))
					.is_some(),
				"maxSolutionLength" => value.as_i64()
					.map(|v| self.set_max_solution_length(v))
					.is_some(),
				"solutionBreadth" => value.as_i64()
					.map(|v| self.set_solution_breadth(v))
					.is_some(),
				"puzzleSelect" => value.as_i64()
					.map(|v| self.set_puzzle_select(v, puzzles))
					.is_some(),
				"solutionPath" => value.as_str()
					.map(|v| self.set_solution_path(v))
					.is_some(),
				_ =>
				{
					trace!("Ignoring unknown configuration key: {}", key);
					true
				}
			};
			if !accepted
			{
				warn!("Ignoring mistyped configuration value: {}: {}", key, value);
			}
		}
		Ok(())
	}

	/// Apply a boolean setting, if `value` is a boolean.
	fn apply_bool(&mut self, value: &Value, set: fn(&mut Self, bool)) -> bool
	{
		value.as_bool().map(|v| set(self, v)).is_some()
	}
}

// Validating setters. Each answers whether the value was accepted.
impl Config
{
	/// Set whether to sort the solutions by ascending rating.
	#[inline]
	pub fn set_will_sort(&mut self, will_sort: bool)
	{
		self.will_sort = will_sort;
	}

	/// Set whether to apply breadth limiting during the search.
	#[inline]
	pub fn set_will_limit(&mut self, will_limit: bool)
	{
		self.will_limit = will_limit;
	}

	/// Set the shortest dictionary word to consider. Must be at least
	/// [`MIN_WORD_LENGTH`]. If the new minimum exceeds the maximum, the maximum
	/// is raised to match.
	pub fn set_min_word_length(&mut self, value: i64) -> bool
	{
		match usize::try_from(value)
		{
			Ok(length) if length >= MIN_WORD_LENGTH =>
			{
				self.min_word_length = length;
				self.max_word_length = self.max_word_length.max(length);
				true
			},
			_ => reject("minimum word length", value)
		}
	}

	/// Set the longest dictionary word to consider. Must be at least
	/// [`MIN_WORD_LENGTH`]. If the new maximum is less than the minimum, the
	/// minimum is lowered to match.
	pub fn set_max_word_length(&mut self, value: i64) -> bool
	{
		match usize::try_from(value)
		{
			Ok(length) if length >= MIN_WORD_LENGTH =>
			{
				self.max_word_length = length;
				self.min_word_length = self.min_word_length.min(length);
				true
			},
			_ => reject("maximum word length", value)
		}
	}

	/// Set the maximum number of words in a solution. Must be at least 1.
	pub fn set_max_solution_length(&mut self, value: i64) -> bool
	{
		match usize::try_from(value)
		{
			Ok(length) if length >= 1 =>
			{
				self.max_solution_length = length;
				true
			},
			_ => reject("maximum solution length", value)
		}
	}

	/// Set the adjustment to the breadth limiter's threshold exponent. Any
	/// value that fits an `i32` is accepted.
	pub fn set_solution_breadth(&mut self, value: i64) -> bool
	{
		match i32::try_from(value)
		{
			Ok(breadth) =>
			{
				self.solution_breadth = breadth;
				true
			},
			Err(_) => reject("solution breadth", value)
		}
	}

	/// Set the index of the puzzle to solve. Must address one of the `puzzles`
	/// puzzles of the archive.
	pub fn set_puzzle_select(&mut self, value: i64, puzzles: usize) -> bool
	{
		match usize::try_from(value)
		{
			Ok(index) if index < puzzles =>
			{
				self.puzzle_select = index;
				true
			},
			_ => reject("puzzle selector", value)
		}
	}

	/// Set where to write the solutions.
	#[inline]
	pub fn set_solution_path<T: AsRef<Path>>(&mut self, path: T)
	{
		self.solution_path = path.as_ref().to_path_buf();
	}

	/// Set whether to suppress all log output.
	#[inline]
	pub fn set_silence_all_output(&mut self, silence: bool)
	{
		self.silence_all_output = silence;
	}

	/// Set whether to suppress progress reports.
	#[inline]
	pub fn set_silence_progress_output(&mut self, silence: bool)
	{
		self.silence_progress_output = silence;
	}
}

// Accessors.
impl Config
{
	#[inline]
	#[must_use]
	pub fn will_sort(&self) -> bool { self.will_sort }

	#[inline]
	#[must_use]
	pub fn will_limit(&self) -> bool { self.will_limit }

	#[inline]
	#[must_use]
	pub fn silence_all_output(&self) -> bool { self.silence_all_output }

	#[inline]
	#[must_use]
	pub fn silence_progress_output(&self) -> bool
	{
		self.silence_progress_output
	}

	#[inline]
	#[must_use]
	pub fn min_word_length(&self) -> usize { self.min_word_length }

	#[inline]
	#[must_use]
	pub fn max_word_length(&self) -> usize { self.max_word_length }

	#[inline]
	#[must_use]
	pub fn max_solution_length(&self) -> usize { self.max_solution_length }

	#[inline]
	#[must_use]
	pub fn solution_breadth(&self) -> i32 { self.solution_breadth }

	#[inline]
	#[must_use]
	pub fn puzzle_select(&self) -> usize { self.puzzle_select }

	#[inline]
	#[must_use]
	pub fn solution_path(&self) -> &Path { &self.solution_path }
}

/// Log the rejection of a configuration value.
///
/// # Returns
///
/// `false`, for the convenience of the setters.
fn reject(what: &str, value: i64) -> bool
{
	warn!("Ignoring invalid {}: {}", what, value);
	false
}

////////////////////////////////////////////////////////////////////////////////
//                                  Errors.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The complete enumeration of [`Config`] loading errors.
#[derive(Debug)]
pub enum ConfigError
{
	/// The configuration file could not be read.
	Io(io::Error),

	/// The configuration file is not a JSON object.
	Parse(serde_json::Error)
}

impl Display for ConfigError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::Io(e) => write!(f, "failed to read configuration: {}", e),
			Self::Parse(e) => write!(f, "failed to parse configuration: {}", e)
		}
	}
}

impl Error for ConfigError
{
	fn source(&self) -> Option<&(dyn Error + 'static)>
	{
		match self
		{
			Self::Io(e) => Some(e),
			Self::Parse(e) => Some(e)
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::{fs, path::Path};

	use tempfile::NamedTempFile;

	use crate::config::{Config, ConfigError};

	/// Ensure that the defaults are those of the classic solver.
	#[test]
	fn test_default()
	{
		let config = Config::default();
		assert!(config.will_sort());
		assert!(config.will_limit());
		assert!(!config.silence_all_output());
		assert!(!config.silence_progress_output());
		assert_eq!(config.min_word_length(), 3);
		assert_eq!(config.max_word_length(), 20);
		assert_eq!(config.max_solution_length(), 5);
		assert_eq!(config.solution_breadth(), 0);
		assert_eq!(config.puzzle_select(), 0);
		assert_eq!(config.solution_path(), Path::new("output/solutions.txt"));
	}

	/// Ensure that valid settings are applied, and that invalid or mistyped
	/// settings are ignored.
	#[test]
	fn test_apply_json()
	{
		let mut config = Config::default();
		config.apply_json(
			r#"{
				"willSort": false,
				"willLimit": "no",
				"silenceAllOutput": true,
				"silenceProgressOutput": true,
				"minWordLength": 2,
				"maxWordLength": 12,
				"maxSolutionLength": 4,
				"solutionBreadth": -1,
				"puzzleSelect": 9,
				"solutionPath": "out/solved.txt",
				"dictionarySelect": 3
			}"#,
			7
		).unwrap();
		assert!(!config.will_sort());
		assert!(config.will_limit());
		assert!(config.silence_all_output());
		assert!(config.silence_progress_output());
		assert_eq!(config.min_word_length(), 3);
		assert_eq!(config.max_word_length(), 12);
		assert_eq!(config.max_solution_length(), 4);
		assert_eq!(config.solution_breadth(), -1);
		assert_eq!(config.puzzle_select(), 0);
		assert_eq!(config.solution_path(), Path::new("out/solved.txt"));

		assert!(matches!(
			config.apply_json("[1, 2, 3]", 7),
			Err(ConfigError::Parse(_))
		));
	}

	/// Ensure that the word length bounds drag each other along.
	#[test]
	fn test_word_lengths()
	{
		let mut config = Config::default();
		assert!(config.set_min_word_length(25));
		assert_eq!(config.min_word_length(), 25);
		assert_eq!(config.max_word_length(), 25);
		assert!(config.set_max_word_length(4));
		assert_eq!(config.min_word_length(), 4);
		assert_eq!(config.max_word_length(), 4);
		assert!(!config.set_max_word_length(-4));
		assert!(!config.set_max_solution_length(0));
		assert_eq!(config.max_solution_length(), 5);
		assert!(config.set_puzzle_select(6, 7));
		assert!(!config.set_puzzle_select(7, 7));
		assert_eq!(config.puzzle_select(), 6);
		assert!(!config.set_solution_breadth(i64::MAX));
	}

	/// Ensure that configuration files are read, and that unreadable files are
	/// reported.
	#[test]
	fn test_read_from_file()
	{
		let file = NamedTempFile::new().unwrap();
		fs::write(file.path(), r#"{ "maxSolutionLength": 3 }"#).unwrap();
		let config = Config::read_from_file(file.path(), 7).unwrap();
		assert_eq!(config.max_solution_length(), 3);
		assert!(config.will_sort());
		assert!(matches!(
			Config::read_from_file("no/such/config.json", 7),
			Err(ConfigError::Io(_))
		));
	}
}
