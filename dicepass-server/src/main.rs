use std::sync::Mutex;

use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};
use serde::Deserialize;

use dicepass_core::io::{list_files, read_file};
use dicepass_core::passphrase::format::WordlistFormat;
use dicepass_core::passphrase::generator::PassphraseGenerator;
use dicepass_core::passphrase::wordlist::Wordlist;

/// Struct representing query parameters for the `/v1/passphrase` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	words: Option<i64>,
	count: Option<u32>,
	separator: Option<String>,
}

/// Struct representing query parameters for the `/v1/load_wordlist` endpoint
#[derive(Deserialize)]
struct LoadQuery {
	name: String,
	format: Option<WordlistFormat>,
}

struct SharedData {
	generator: Option<PassphraseGenerator>,
}

/// HTTP GET endpoint `/v1/passphrase`
///
/// Generates passphrases from the currently loaded wordlist, one per
/// line, in generation order. Defaults mirror the CLI: 5 words, 1
/// passphrase, single-space separator.
#[get("/v1/passphrase")]
async fn get_passphrase(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let words = query.words.unwrap_or(5);
	let count = query.count.unwrap_or(1);
	let separator = query.separator.as_deref().unwrap_or(" ");

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Wordlist lock failed"),
	};

	let generator = match &shared_data.generator {
		Some(g) => g,
		None => return HttpResponse::BadRequest().body("No wordlist loaded, PUT /v1/load_wordlist first"),
	};

	log::debug!("generating {count} passphrase(s) of {words} word(s)");

	// All-or-nothing: any failed draw aborts the whole response
	let mut passphrases = Vec::with_capacity(count as usize);
	for _ in 0..count {
		match generator.generate(words, separator) {
			Ok(passphrase) => passphrases.push(passphrase),
			Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
		}
	}

	HttpResponse::Ok().body(passphrases.join("\n"))
}

/// Strips the wordlist file extension from the end of a file name.
///
/// Only a trailing extension is removed; a dot-separated name like
/// `my.txtlist.txt` keeps its interior part.
fn strip_extension<'a>(name: &'a str, extension: &str) -> &'a str {
	name.strip_suffix(extension).unwrap_or(name)
}

/// HTTP GET endpoint `/v1/wordlists`
///
/// Lists the wordlist files available under `./data`.
#[get("/v1/wordlists")]
async fn get_wordlists() -> impl Responder {
	match list_files("./data", "txt") {
		Ok(files) => {
			let names: Vec<&str> = files.iter().map(|name| strip_extension(name, ".txt")).collect();
			HttpResponse::Ok().body(names.join("\n"))
		}
		Err(_) => HttpResponse::InternalServerError().body("Failed to list wordlists"),
	}
}

/// HTTP PUT endpoint `/v1/load_wordlist`
///
/// Parses `./data/<name>.txt` under the requested format (default
/// `diceware`) and installs it as the shared wordlist. A file that
/// yields zero valid words is rejected and the previous wordlist, if
/// any, stays loaded.
#[put("/v1/load_wordlist")]
async fn put_wordlist(data: web::Data<Mutex<SharedData>>, query: web::Query<LoadQuery>) -> impl Responder {
	let name = query.name.trim();
	if name.is_empty() || name.contains(['/', '\\']) {
		return HttpResponse::BadRequest().body("Missing or invalid wordlist name");
	}
	let format = query.format.unwrap_or(WordlistFormat::Diceware);

	let wordlist_path = format!("./data/{}.txt", name);
	let lines = match read_file(&wordlist_path) {
		Ok(lines) => lines,
		Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to read wordlist: {e}")),
	};

	let wordlist = Wordlist::parse(&lines, format);
	log::debug!("parsed {} words from {wordlist_path} ({format} format)", wordlist.len());

	let generator = match PassphraseGenerator::new(wordlist) {
		Ok(g) => g,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Wordlist lock failed"),
	};
	shared_data.generator = Some(generator);

	HttpResponse::Ok().body("Wordlist loaded successfully")
}

/// Main entry point for the server.
///
/// Starts with no wordlist loaded; clients install one through
/// `/v1/load_wordlist` before requesting passphrases.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - The wordlist directory is hardcoded to `./data` and should be made
///   configurable.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = SharedData { generator: None };
	let shared_wordlist = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.app_data(shared_wordlist.clone())
			.service(get_passphrase)
			.service(get_wordlists)
			.service(put_wordlist)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
