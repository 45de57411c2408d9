use super::format::WordlistFormat;

/// An ordered sequence of candidate words.
///
/// # Responsibilities
/// - Extract one word per matching line according to a [`WordlistFormat`]
/// - Preserve file order (sampling does not care, tests and humans do)
/// - Preserve duplicates: a word listed twice legitimately weighs twice,
///   and the parser does not second-guess the source list's distribution
///
/// # Invariants
/// - Every stored word is non-empty and free of whitespace (guaranteed by
///   the line grammars)
/// - May be empty only transiently; generation rejects an empty wordlist
///   before any sampling
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wordlist {
	words: Vec<String>,
}

impl Wordlist {
	/// Parses raw text lines under the given format grammar.
	///
	/// Lines that do not match the grammar are silently skipped. Real
	/// Diceware files carry headers, comments and PGP signature blocks;
	/// tolerating them is part of the contract, so a non-matching line
	/// is not an error.
	///
	/// The parser consumes its input and nothing else: it never opens a
	/// file or touches any other resource.
	pub fn parse<I, S>(lines: I, format: WordlistFormat) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let words = lines
			.into_iter()
			.filter_map(|line| format.extract(line.as_ref()).map(str::to_owned))
			.collect();
		Self { words }
	}

	/// Returns the number of candidate words.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Returns `true` if parsing yielded zero words.
	///
	/// Callers must check this before generating; see
	/// [`DicepassError::EmptyWordlist`](crate::error::DicepassError::EmptyWordlist).
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Returns the words in file order.
	pub fn words(&self) -> &[String] {
		&self.words
	}
}

impl IntoIterator for Wordlist {
	type Item = String;
	type IntoIter = std::vec::IntoIter<String>;

	/// Consumes the wordlist, yielding words in file order.
	fn into_iter(self) -> Self::IntoIter {
		self.words.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn diceware_lines_yield_captured_words_in_order() {
		let lines = ["11111\tapple", "11112\tbanana", "11113\tcherry"];
		let wordlist = Wordlist::parse(lines, WordlistFormat::Diceware);
		assert_eq!(wordlist.words(), ["apple", "banana", "cherry"]);
	}

	#[test]
	fn diceware_skips_non_matching_lines() {
		let lines = [
			"A Diceware wordlist",     // header
			"",                        // blank
			"11111\tapple",
			"1112\tshort",             // four digits
			"111123\tlong",            // six digits
			"11113 cherry",            // space instead of tab
			"11114\ttwo words",        // whitespace in token
			"11115\tdate",
		];
		let wordlist = Wordlist::parse(lines, WordlistFormat::Diceware);
		assert_eq!(wordlist.words(), ["apple", "date"]);
	}

	#[test]
	fn simple_lines_yield_whole_tokens() {
		let lines = ["apple", "banana  ", "", "two words", "cherry"];
		let wordlist = Wordlist::parse(lines, WordlistFormat::Simple);
		// Trailing spaces fail the single-token grammar
		assert_eq!(wordlist.words(), ["apple", "cherry"]);
	}

	#[test]
	fn duplicates_are_preserved() {
		let lines = ["apple", "apple", "banana"];
		let wordlist = Wordlist::parse(lines, WordlistFormat::Simple);
		assert_eq!(wordlist.words(), ["apple", "apple", "banana"]);
		assert_eq!(wordlist.len(), 3);
	}

	#[test]
	fn into_iterator_walks_words_in_file_order() {
		let lines = ["11111\tapple", "11112\tbanana", "11113\tcherry"];
		let wordlist = Wordlist::parse(lines, WordlistFormat::Diceware);
		let words: Vec<String> = wordlist.into_iter().collect();
		assert_eq!(words, ["apple", "banana", "cherry"]);
	}

	#[test]
	fn empty_input_is_empty_wordlist() {
		let wordlist = Wordlist::parse(Vec::<String>::new(), WordlistFormat::Diceware);
		assert!(wordlist.is_empty());
		assert_eq!(wordlist.len(), 0);
	}

	#[test]
	fn wrong_format_selection_yields_nothing() {
		// A simple list read as diceware matches no line
		let lines = ["apple", "banana", "cherry"];
		let wordlist = Wordlist::parse(lines, WordlistFormat::Diceware);
		assert!(wordlist.is_empty());
	}
}
