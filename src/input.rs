// ABOUTME: Reads numeric sample lists from files or stdin for command-line use
// ABOUTME: Accepts whitespace-, newline- or comma-separated decimal values

use omphalos_core::errors::{AppError, AppResult};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Parse every whitespace- or comma-separated token as an `f64`
///
/// # Errors
///
/// Returns an `InvalidInput` error naming the first token that is not a number.
pub fn parse_samples(text: &str) -> AppResult<Vec<f64>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token.parse::<f64>().map_err(|e| {
                AppError::invalid_input(format!("sample {index} ('{token}') is not a number: {e}"))
            })
        })
        .collect()
}

/// Read all of `path`, or stdin when `path` is `None` or `-`
///
/// # Errors
///
/// Returns an `InvalidInput` error if the file or stdin cannot be read.
pub fn read_input(path: Option<&Path>) -> AppResult<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => fs::read_to_string(p).map_err(|e| {
            AppError::invalid_input(format!("cannot read {}: {e}", p.display()))
        }),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| AppError::invalid_input(format!("cannot read stdin: {e}")))?;
            Ok(text)
        }
    }
}

/// Read and parse samples from `path` or stdin
///
/// # Errors
///
/// Returns an error if the input cannot be read or contains a non-numeric token.
pub fn read_samples(path: Option<&Path>) -> AppResult<Vec<f64>> {
    parse_samples(&read_input(path)?)
}
