//! Top-level module for passphrase generation.
//!
//! Diceware is a non-electronic system for generating strong passphrases
//! by rolling dice against a numbered wordlist. This module keeps the
//! wordlist and drops the dice, drawing words from a cryptographically
//! secure random source instead:
//! - Line grammars for recognized wordlist formats (`WordlistFormat`)
//! - Wordlist parsing (`Wordlist`)
//! - Uniform word sampling and joining (`PassphraseGenerator`)

/// Closed enumeration of the recognized wordlist line grammars.
///
/// Strict matching: an unrecognized format name is an error, never a
/// silent fallback to some default grammar.
pub mod format;

/// An ordered sequence of candidate words extracted from raw lines.
pub mod wordlist;

/// High-level interface for assembling passphrases from a wordlist.
///
/// Draws words independently and uniformly at random, with replacement.
pub mod generator;
