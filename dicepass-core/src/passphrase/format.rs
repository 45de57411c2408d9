use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DicepassError;

// Grammars are compiled once on first use. The patterns are literals,
// so compilation cannot fail.
static DICEWARE_LINE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\d{5}\t(\S+)$").unwrap());
static SIMPLE_LINE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(\S+)$").unwrap());

/// The line grammar used to extract a word token from each wordlist line.
///
/// # Variants
/// - `Diceware`: five ASCII digits, one tab, then the word
///   (e.g. `11111\tapple`). This is the shape of the canonical Diceware
///   lists; header and signature lines simply fail the grammar.
/// - `Simple`: the entire line is a single non-whitespace token.
///
/// # Invariants
/// - The enumeration is closed; dispatch over it is exhaustive
/// - An unrecognized format name fails `from_str` with
///   [`DicepassError::UnsupportedFormat`], it never falls through to a
///   default grammar
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WordlistFormat {
	Diceware,
	Simple,
}

impl WordlistFormat {
	/// Extracts the candidate word from a single line, if the line
	/// matches this format's grammar.
	///
	/// Returns `None` for non-matching lines (blank lines, comments,
	/// embedded whitespace, wrong digit count). Skipping them is the
	/// caller's tolerance for real-world wordlist files, not an error.
	pub(crate) fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
		let expression = match self {
			Self::Diceware => &DICEWARE_LINE,
			Self::Simple => &SIMPLE_LINE,
		};
		expression
			.captures(line)
			.and_then(|captures| captures.get(1))
			.map(|word| word.as_str())
	}
}

impl FromStr for WordlistFormat {
	type Err = DicepassError;

	/// Parses a format name as given on a command line.
	///
	/// # Errors
	/// Returns [`DicepassError::UnsupportedFormat`] carrying the
	/// offending value for anything other than `diceware` or `simple`.
	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"diceware" => Ok(Self::Diceware),
			"simple" => Ok(Self::Simple),
			other => Err(DicepassError::UnsupportedFormat(other.to_owned())),
		}
	}
}

impl fmt::Display for WordlistFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Diceware => write!(f, "diceware"),
			Self::Simple => write!(f, "simple"),
		}
	}
}
