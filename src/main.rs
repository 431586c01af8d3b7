use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use lexical_analyzer::{
    analyze_file, display_error,
    source::{save_errors, save_tokens, ERRORS_FILE, TOKENS_FILE},
};

#[derive(Parser)]
#[command(name = "lexical_analyzer")]
#[command(version, about = "Lexical analyzer for a small C-like language", long_about = None)]
struct Cli {
    /// The source file to analyze; asked for interactively when omitted
    file: Option<PathBuf>,

    /// Print every token, every error diagnostic and the scan timing
    #[arg(short, long)]
    verbose: bool,
}

fn prompt_for_file() -> io::Result<PathBuf> {
    print!("Enter the name of the file containing the source code: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(PathBuf::from(answer.trim()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let file = match cli.file {
        Some(file) => file,
        None => match prompt_for_file() {
            Ok(file) => file,
            Err(error) => {
                eprintln!("Error: failed to read the file name: {}", error);
                return ExitCode::FAILURE;
            }
        },
    };
    let file_name = file.to_string_lossy().into_owned();

    let start = Instant::now();

    let (lines, result) = analyze_file(&file);

    if cli.verbose {
        println!("Tokenized in {:?}", start.elapsed());

        for token in &result.tokens {
            token.debug();
        }
        for error in &result.errors {
            display_error(error, &file_name, &lines);
        }
    }

    if let Err(error) = save_tokens(TOKENS_FILE, &result.tokens) {
        eprintln!("Error: failed to write {}: {}", TOKENS_FILE, error);
        return ExitCode::FAILURE;
    }
    if let Err(error) = save_errors(ERRORS_FILE, &result.errors) {
        eprintln!("Error: failed to write {}: {}", ERRORS_FILE, error);
        return ExitCode::FAILURE;
    }

    println!(
        "Lexical analysis finished. Tokens and errors were saved to '{}' and '{}', respectively.",
        TOKENS_FILE, ERRORS_FILE
    );

    ExitCode::SUCCESS
}
