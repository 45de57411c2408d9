//! Diceware-style passphrase generation library.
//!
//! This crate provides the two operations that matter for correctness
//! and security:
//! - Parsing a wordlist file into a validated sequence of candidate words
//! - Sampling words uniformly at random to assemble a passphrase
//!
//! File selection, argument parsing and output formatting are left to
//! the consumer crates. The core never opens a resource on its own and
//! never prints anything.

/// Wordlist formats, parsing and passphrase generation.
///
/// This module exposes the high-level generation interface while keeping
/// the line grammars internal.
pub mod passphrase;

/// Error kinds shared across the crate.
///
/// All errors are fatal to the current run; malformed input does not
/// become valid by retrying.
pub mod error;

/// I/O utilities (line reading, directory listing).
pub mod io;
