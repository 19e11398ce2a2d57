//! # Letter Boxed Solver
//!
//! Letter Boxed is a word puzzle game played on a square with three letters on
//! each of its four sides. The player must spell a chain of words, each word
//! beginning with the last letter of the previous one, until every letter of
//! the square has been used. Consecutive letters of a word must come from
//! different sides of the square.
//!
//! The solver runs in three stages:
//!
//! * [`index`] keeps only the dictionary words that are playable on the
//!   [`board`], as decided by the [`validator`].
//! * [`solver`] chains the playable words together, searching for every chain
//!   that covers the board within a bounded number of words.
//! * [`limiter`] prunes runs of near-identical solutions, which otherwise
//!   dominate the search.

pub mod archive;
pub mod board;
pub mod config;
pub mod dictionary;
pub mod index;
pub mod limiter;
pub mod solution;
pub mod solver;
pub mod validator;
