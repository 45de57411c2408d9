use rand::prelude::IndexedRandom;

use super::wordlist::Wordlist;
use crate::error::DicepassError;

/// Assembles passphrases by uniform random sampling over a wordlist.
///
/// # Responsibilities
/// - Hold a validated, non-empty wordlist for the lifetime of a run
/// - Draw words independently and uniformly, **with replacement**
/// - Join draws into a single passphrase string
///
/// Sampling with replacement is intentional: Diceware's security model
/// assumes independent draws per word position, not a permutation. The
/// same word may appear several times in one passphrase.
///
/// # Invariants
/// - The wordlist is non-empty (checked at construction)
/// - Every draw is uniform over the full index range of the wordlist
/// - No state is carried between passphrases beyond the wordlist and
///   the RNG stream; repeated calls draw independently
#[derive(Clone, Debug)]
pub struct PassphraseGenerator {
	words: Wordlist,
}

impl PassphraseGenerator {
	/// Creates a generator over a parsed wordlist.
	///
	/// # Errors
	/// Returns [`DicepassError::EmptyWordlist`] if the wordlist holds no
	/// words. Emptiness is rejected up front; it must never degrade into
	/// generating empty or placeholder words.
	pub fn new(words: Wordlist) -> Result<Self, DicepassError> {
		if words.is_empty() {
			return Err(DicepassError::EmptyWordlist);
		}
		Ok(Self { words })
	}

	/// Generates one passphrase of `count` words joined by `separator`.
	///
	/// Each word is drawn through [`IndexedRandom::choose`] on
	/// `rand::rng()`, a securely seeded ChaCha12 generator. `choose`
	/// reduces the RNG output to the index range without modulo bias, so
	/// every word has exactly probability `1/len` per draw regardless of
	/// the wordlist size.
	///
	/// A `count` of zero yields the empty string.
	///
	/// # Errors
	/// - [`DicepassError::InvalidWordCount`] if `count` is negative,
	///   before any randomness is consumed
	/// - [`DicepassError::EmptyWordlist`] if the wordlist is somehow
	///   empty (cannot happen through [`PassphraseGenerator::new`], kept
	///   as a hard stop rather than an empty result)
	pub fn generate(&self, count: i64, separator: &str) -> Result<String, DicepassError> {
		if count < 0 {
			return Err(DicepassError::InvalidWordCount(count));
		}

		let mut rng = rand::rng();
		let mut drawn: Vec<&str> = Vec::with_capacity(count as usize);
		for _ in 0..count {
			match self.words.words().choose(&mut rng) {
				Some(word) => drawn.push(word.as_str()),
				None => return Err(DicepassError::EmptyWordlist),
			}
		}

		Ok(drawn.join(separator))
	}

	/// Returns the wordlist backing this generator.
	pub fn words(&self) -> &Wordlist {
		&self.words
	}
}
