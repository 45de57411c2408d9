use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::{fs, io};

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
///
/// Wordlists are small (the canonical Diceware list is 7776 lines), so
/// buffered streaming would buy nothing here.
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths).
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_file() {
			if path.extension() == Some(std::ffi::OsStr::new(extension)) {
				if let Some(name) = path.file_name() {
					files.push(name.to_string_lossy().to_string());
				}
			}
		}
	}

	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn read_file_splits_lines() {
		let path = std::env::temp_dir().join("dicepass_read_file_test.txt");
		let mut file = File::create(&path).unwrap();
		write!(file, "11111\tapple\n11112\tbanana\r\n11113\tcherry").unwrap();

		let lines = read_file(&path).unwrap();
		assert_eq!(lines, vec!["11111\tapple", "11112\tbanana", "11113\tcherry"]);

		fs::remove_file(&path).unwrap();
	}

	#[test]
	fn read_file_missing_is_an_error() {
		assert!(read_file("/nonexistent/wordlist.txt").is_err());
	}
}
