use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;

use dicepass_core::io::read_file;
use dicepass_core::passphrase::format::WordlistFormat;
use dicepass_core::passphrase::generator::PassphraseGenerator;
use dicepass_core::passphrase::wordlist::Wordlist;

/// Generate a Diceware-style passphrase.
#[derive(Parser)]
#[command(name = "dicepass", version, about = "Generate a Diceware-style passphrase.")]
struct Cli {
    /// Number of passphrases to generate
    #[arg(short = 'n', long = "number", value_name = "NUM", default_value_t = 1)]
    number: u32,

    /// Number of words to use in each passphrase
    #[arg(
        short = 'w',
        long = "words",
        value_name = "NUM",
        default_value_t = 5,
        allow_negative_numbers = true
    )]
    words: i64,

    /// Location of a wordlist
    #[arg(long = "word-list", value_name = "FILE", default_value = "diceware.wordlist.asc")]
    word_list: PathBuf,

    /// Format of wordlist [possible values: diceware, simple]
    #[arg(long = "word-list-format", value_name = "FORMAT", default_value = "diceware")]
    word_list_format: String,

    /// String placed between words (may be empty)
    #[arg(long = "separator", value_name = "SEP", default_value = " ")]
    separator: String,
}

/// Either every requested passphrase is printed, or none are: all
/// validation happens before the first line of output.
fn run(cli: &Cli) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let format = WordlistFormat::from_str(&cli.word_list_format)?;
    let lines = read_file(&cli.word_list)?;
    let wordlist = Wordlist::parse(&lines, format);
    log::debug!(
        "parsed {} words from {} ({} format)",
        wordlist.len(),
        cli.word_list.display(),
        format
    );

    if wordlist.is_empty() {
        return Err("The word list does not contain any valid words. Please ensure that the \
             word list is properly formatted and that the correct word list format \
             is specified with the \"--word-list-format\" option."
            .into());
    }

    let generator = PassphraseGenerator::new(wordlist)?;
    let mut passphrases = Vec::with_capacity(cli.number as usize);
    for _ in 0..cli.number {
        passphrases.push(generator.generate(cli.words, &cli.separator)?);
    }
    Ok(passphrases)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(passphrases) => {
            for passphrase in passphrases {
                println!("{passphrase}");
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
