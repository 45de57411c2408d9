use thiserror::Error;

/// Errors produced by wordlist parsing and passphrase generation.
///
/// The enumeration is closed: every failure mode of the core maps to
/// exactly one variant, and none of them is retryable.
///
/// # Invariants
/// - `UnsupportedFormat` carries the offending format string verbatim
/// - `InvalidWordCount` carries the requested count verbatim
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum DicepassError {
	/// The requested wordlist format is not one of the known grammars.
	///
	/// Reported at the string boundary, before any line is processed.
	#[error("\"{0}\" is not a supported word list format")]
	UnsupportedFormat(String),

	/// Parsing succeeded but yielded zero words.
	///
	/// Usually a malformed file or the wrong format selected. An empty
	/// wordlist must never be treated as "pick nothing and return an
	/// empty passphrase".
	#[error("the word list does not contain any valid words")]
	EmptyWordlist,

	/// A negative number of words was requested for a passphrase.
	#[error("word count must be zero or greater, got {0}")]
	InvalidWordCount(i64),
}
