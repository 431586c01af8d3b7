//! Reading source lines from disk and writing the token and error reports.

use std::{
    fs::{read_to_string, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{errors::errors::Error, lexer::tokens::Token};

pub const TOKENS_FILE: &str = "tokens.txt";
pub const ERRORS_FILE: &str = "errors.txt";

pub fn read_source(path: impl AsRef<Path>) -> Result<Vec<String>, Error> {
    let path = path.as_ref();

    read_to_string(path)
        .map(|contents| contents.lines().map(String::from).collect())
        .map_err(|error| Error::source_unavailable(path.to_string_lossy(), error))
}

fn save_records<T: std::fmt::Display>(path: &Path, records: &[T]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    for record in records {
        writeln!(writer, "{}", record)?;
    }

    writer.flush()
}

pub fn save_tokens(path: impl AsRef<Path>, tokens: &[Token]) -> io::Result<()> {
    save_records(path.as_ref(), tokens)
}

pub fn save_errors(path: impl AsRef<Path>, errors: &[Error]) -> io::Result<()> {
    save_records(path.as_ref(), errors)
}
