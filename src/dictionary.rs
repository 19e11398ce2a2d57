//! # Dictionary
//!
//! Herein is support for dictionary construction and manipulation. A
//! [`Dictionary`] remembers the order in which its words were read, because
//! that order decides which solutions the solver reaches first.

use std::{
	fs::File,
	io::{self, BufRead, BufReader, ErrorKind, Read, Write},
	path::Path
};

use log::{trace, warn};
use pfx::PrefixTreeSet;
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// A dictionary is an ordered list of distinct, upper-case words, backed by a
/// [`PrefixTreeSet`] for membership tests. Only the list is serialized; the
/// tree is rebuilt from it on deserialization.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Dictionary
{
	/// The words, in order of first appearance.
	words: Vec<String>,

	/// The words, for membership tests.
	#[serde(skip)]
	tree: PrefixTreeSet<String>
}

impl Dictionary
{
	/// Construct an empty dictionary. Same as [`Default::default`].
	///
	/// # Returns
	///
	/// An empty dictionary.
	#[inline]
	pub fn new() -> Self { Self::default() }

	/// Check if the dictionary is empty.
	///
	/// # Returns
	///
	/// `true` if the dictionary is empty, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.words.is_empty() }

	/// Get the number of words in the dictionary.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.words.len() }

	/// Check if the dictionary contains the given word. Words are stored in
	/// upper case, so the query must be too.
	///
	/// # Arguments
	///
	/// * `word` - The word to check.
	///
	/// # Returns
	///
	/// `true` if the dictionary contains the word, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn contains(&self, word: &str) -> bool { self.tree.contains(word) }

	/// Populate the dictionary with the given words. Each word is trimmed and
	/// upper-cased; blank words and words already present are skipped.
	///
	/// # Arguments
	///
	/// * `words` - The intended content of the dictionary.
	pub fn populate<T: AsRef<str>>(&mut self, words: &[T])
	{
		for word in words
		{
			let word = word.as_ref().trim().to_uppercase();
			if word.is_empty() || self.tree.contains(word.as_str())
			{
				continue
			}
			self.tree.insert(word.clone());
			self.words.push(word);
		}
	}

	/// Get an iterator over every word, in order of first appearance.
	#[inline]
	pub fn words(&self) -> impl Iterator<Item = &str> + '_
	{
		self.words.iter().map(String::as_str)
	}

	/// Get an iterator over the words whose length, in characters, lies within
	/// the specified bounds, in order of first appearance.
	///
	/// # Arguments
	///
	/// * `min` - The minimum word length, inclusive.
	/// * `max` - The maximum word length, inclusive.
	///
	/// # Returns
	///
	/// The candidate words.
	pub fn candidates(
		&self,
		min: usize,
		max: usize
	) -> impl Iterator<Item = &str> + '_
	{
		self.words()
			.filter(move |w| (min..=max).contains(&w.chars().count()))
	}

	/// Open a dictionary with the given name. Only the specified directory will
	/// be searched. `name` denotes the dictionary file, sans the extension. If
	/// a binary dictionary (`<name>.dict`) exists _and_ is newer than the text
	/// file (`<name>.txt`), it will be read; otherwise, a text file will be
	/// read and a binary dictionary will be created (to optimize future reads).
	///
	/// # Arguments
	///
	/// * `dir` - The directory to search.
	/// * `name` - The name of the dictionary file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn open<T: AsRef<Path>>(dir: T, name: &str) -> Result<Self, io::Error>
	{
		let dict_path = dir.as_ref().join(format!("{}.dict", name));
		let txt_path = dir.as_ref().join(format!("{}.txt", name));
		// Use the binary dictionary only if it's newer than the text
		// dictionary. If any of the metadata is unavailable, including because
		// the binary dictionary doesn't exist, fall back to the text file.
		if dict_path
			.metadata()
			.and_then(|m| m.modified())
			.and_then(|dict_time| {
				txt_path
					.metadata()
					.and_then(|n| n.modified())
					.map(|txt_time| dict_time > txt_time)
			})
			.unwrap_or(false)
		{
			let dictionary = Self::deserialize_from_file(&dict_path);
			trace!("Read binary dictionary: {}", dict_path.display());
			dictionary
		}
		else
		{
			let dictionary = Self::read_from_file(&txt_path)?;
			trace!("Read text dictionary: {}", txt_path.display());
			match dictionary.serialize_to_file(&dict_path)
			{
				Ok(_) =>
				{
					trace!("Wrote binary dictionary: {}", dict_path.display())
				},
				Err(e) => warn!(
					"Failed to write binary dictionary: {}: {}",
					dict_path.display(),
					e
				)
			}
			Ok(dictionary)
		}
	}

	/// Construct a dictionary from the contents of the given file. Each line
	/// in the file is considered a single word.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// If the file cannot be opened or read, an error is returned.
	pub fn read_from_file<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let reader = BufReader::new(file);
		let words = reader.lines().collect::<Result<Vec<_>, _>>()?;
		let mut dictionary = Self::new();
		dictionary.populate(&words);
		Ok(dictionary)
	}

	/// Deserialize a dictionary from the given file. The file must contain a
	/// serialized dictionary in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary deserialized from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn deserialize_from_file<T: AsRef<Path>>(
		path: T
	) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let mut reader = BufReader::new(file);
		let mut content = Vec::new();
		reader.read_to_end(&mut content)?;
		let mut dictionary: Self = bincode::deserialize(&content)
			.map_err(|_e| ErrorKind::InvalidData)?;
		for word in &dictionary.words
		{
			dictionary.tree.insert(word.clone());
		}
		Ok(dictionary)
	}

	/// Serialize the dictionary to the given file. The dictionary is serialized
	/// in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or written, an error is returned.
	/// * If the dictionary cannot be encoded, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn serialize_to_file<T: AsRef<Path>>(
		&self,
		path: T
	) -> Result<(), io::Error>
	{
		let mut file = File::create(path)?;
		let content =
			bincode::serialize(self).map_err(|_e| ErrorKind::InvalidData)?;
		file.write_all(&content)?;
		Ok(())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::{fs, io::ErrorKind};

	use tempfile::{tempdir, NamedTempFile};

	use crate::dictionary::Dictionary;

	/// Test basic functionality of [`Dictionary`]:
	///
	/// * [`Dictionary::new`]
	/// * [`Dictionary::is_empty`]
	/// * [`Dictionary::populate`]
	/// * [`Dictionary::contains`]
	#[test]
	fn test_populate()
	{
		let mut dictionary = Dictionary::new();
		assert!(dictionary.is_empty());
		assert!(!dictionary.contains("HELLO"));
		dictionary.populate(&["hello", " World\r", "", "   ", "HELLO", "it"]);
		assert_eq!(dictionary.len(), 3);
		assert!(dictionary.contains("HELLO"));
		assert!(dictionary.contains("WORLD"));
		assert!(!dictionary.contains("hello"));
		assert_eq!(
			dictionary.words().collect::<Vec<_>>(),
			vec!["HELLO", "WORLD", "IT"]
		);
	}

	/// Ensure that the length policy is inclusive at both ends and preserves
	/// order.
	#[test]
	fn test_candidates()
	{
		let mut dictionary = Dictionary::new();
		dictionary.populate(&["zebra", "at", "cat", "lion", "elephant"]);
		assert_eq!(
			dictionary.candidates(3, 5).collect::<Vec<_>>(),
			vec!["ZEBRA", "CAT", "LION"]
		);
		assert_eq!(dictionary.candidates(9, 20).count(), 0);
	}

	/// Test reading a dictionary from a file:
	///
	/// * [`Dictionary::read_from_file`]
	#[test]
	fn test_read_from_file()
	{
		let file = NamedTempFile::new().unwrap();
		fs::write(file.path(), "hello\nworld\n\nhello\r\n").unwrap();
		let dictionary = Dictionary::read_from_file(file.path()).unwrap();
		assert_eq!(dictionary.words().collect::<Vec<_>>(), vec!["HELLO", "WORLD"]);
		let missing = Dictionary::read_from_file("no/such/dictionary.txt");
		assert_eq!(missing.unwrap_err().kind(), ErrorKind::NotFound);
	}

	/// Test serializing and deserializing a dictionary:
	///
	/// * [`Dictionary::serialize_to_file`]
	/// * [`Dictionary::deserialize_from_file`]
	#[test]
	fn test_serialize_to_file()
	{
		let mut dictionary = Dictionary::new();
		dictionary.populate(&["zebra", "apple", "mango"]);
		let file = NamedTempFile::new().unwrap();
		dictionary.serialize_to_file(file.path()).unwrap();
		let deserialized =
			Dictionary::deserialize_from_file(file.path()).unwrap();
		assert_eq!(dictionary, deserialized);
		assert_eq!(
			deserialized.words().collect::<Vec<_>>(),
			vec!["ZEBRA", "APPLE", "MANGO"]
		);
		assert!(deserialized.contains("APPLE"));
		assert!(!deserialized.contains("APP"));
		// The cache holds each word once.
		let cached = fs::read(file.path()).unwrap();
		let occurrences = cached
			.windows("ZEBRA".len())
			.filter(|window| *window == b"ZEBRA")
			.count();
		assert_eq!(occurrences, 1);
		fs::write(file.path(), [0xff; 3]).unwrap();
		let corrupt = Dictionary::deserialize_from_file(file.path());
		assert_eq!(corrupt.unwrap_err().kind(), ErrorKind::InvalidData);
	}

	/// Test opening a dictionary by name, which writes the binary dictionary
	/// alongside the text dictionary:
	///
	/// * [`Dictionary::open`]
	#[test]
	fn test_open()
	{
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("words.txt"), "abe\nefg\n").unwrap();
		let dictionary = Dictionary::open(dir.path(), "words").unwrap();
		assert_eq!(dictionary.words().collect::<Vec<_>>(), vec!["ABE", "EFG"]);
		assert!(dir.path().join("words.dict").exists());
		let reopened = Dictionary::open(dir.path(), "words").unwrap();
		assert_eq!(dictionary, reopened);
		assert!(Dictionary::open(dir.path(), "missing").is_err());
	}
}
