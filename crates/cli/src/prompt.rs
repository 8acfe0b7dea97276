//! Minimal interactive single-select prompt.
//!
//! Prompts go to stderr so stdout stays clean for `--json` consumers.

use std::io::{self, BufRead, Write};

/// Present a numbered list and read the operator's choice from stdin.
/// Returns the index of the selected entry.
pub fn select(message: &str, choices: &[String]) -> io::Result<usize> {
    let stdin = io::stdin();
    let mut err = io::stderr();
    loop {
        writeln!(err, "{message}")?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(err, "  {}) {}", i + 1, choice)?;
        }
        write!(err, "> ")?;
        err.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=choices.len()).contains(&n) => return Ok(n - 1),
            _ => writeln!(err, "Enter a number between 1 and {}.", choices.len())?,
        }
    }
}
