//! Line-oriented query loop over a trained network.
//!
//! The session only reads and writes through the supplied handles, so the
//! binary runs it on stdin/stdout and tests run it on byte buffers.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::debug;

use crate::error::InputError;
use crate::network::network::UnaryNetwork;

pub const MINUEND_PROMPT: &str = "Enter minuend (q to quit): ";
pub const SUBTRAHEND_PROMPT: &str = "Enter subtrahend: ";
pub const INVALID_INPUT: &str = "Please enter valid non-negative integers.";

/// What a minuend line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Query(u64),
    Quit,
}

/// Parses a minuend line. `q`, `quit`, `exit` and any negative number end
/// the session.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    if matches!(trimmed.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
        return Ok(Command::Quit);
    }
    match parse_integer(trimmed)? {
        n if n < 0 => Ok(Command::Quit),
        n => to_count(n, trimmed).map(Command::Query),
    }
}

/// Parses a subtrahend line, which must be a non-negative integer.
pub fn parse_count(line: &str) -> Result<u64, InputError> {
    let trimmed = line.trim();
    match parse_integer(trimmed)? {
        n if n < 0 => Err(InputError::Negative(n)),
        n => to_count(n, trimmed),
    }
}

fn parse_integer(trimmed: &str) -> Result<i128, InputError> {
    trimmed
        .parse::<i128>()
        .map_err(|_| InputError::NotAnInteger(trimmed.to_string()))
}

fn to_count(n: i128, trimmed: &str) -> Result<u64, InputError> {
    u64::try_from(n).map_err(|_| InputError::NotAnInteger(trimmed.to_string()))
}

/// Reads one line; `None` at end of input.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    match reader.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line)),
    }
}

/// Runs queries until the user quits or input ends.
///
/// Malformed input is reported on `writer` and the loop carries on. Returns
/// the number of queries answered.
pub fn run_session<R, W>(network: &UnaryNetwork, mut reader: R, mut writer: W) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut answered = 0;
    loop {
        write!(writer, "\n{MINUEND_PROMPT}")?;
        writer.flush()?;
        let Some(line) = read_line(&mut reader)? else { break };
        let minuend = match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Query(n)) => n,
            Err(e) => {
                debug!("rejected minuend: {e}");
                writeln!(writer, "{INVALID_INPUT}")?;
                continue;
            }
        };

        write!(writer, "{SUBTRAHEND_PROMPT}")?;
        writer.flush()?;
        let Some(line) = read_line(&mut reader)? else { break };
        let subtrahend = match parse_count(&line) {
            Ok(n) => n,
            Err(e) => {
                debug!("rejected subtrahend: {e}");
                writeln!(writer, "{INVALID_INPUT}")?;
                continue;
            }
        };

        let t_start = Instant::now();
        let output = network.forward(minuend, subtrahend);
        let elapsed = t_start.elapsed();

        writeln!(writer, "Neural network output: {output}")?;
        writeln!(writer, "Actual result: {}", minuend.saturating_sub(subtrahend))?;
        writeln!(writer, "Computation time: {:.9} seconds", elapsed.as_secs_f64())?;
        answered += 1;
    }
    Ok(answered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_command_handles_quit_words_and_sentinel() {
        assert_eq!(parse_command("q\n"), Ok(Command::Quit));
        assert_eq!(parse_command(" EXIT "), Ok(Command::Quit));
        assert_eq!(parse_command("-1"), Ok(Command::Quit));
        assert_eq!(parse_command("42"), Ok(Command::Query(42)));
        assert_eq!(
            parse_command("4x"),
            Err(InputError::NotAnInteger("4x".to_string()))
        );
    }

    #[test]
    fn parse_count_rejects_negatives() {
        assert_eq!(parse_count("7"), Ok(7));
        assert_eq!(parse_count("-3"), Err(InputError::Negative(-3)));
        assert!(parse_count("").is_err());
        assert_eq!(parse_count("18446744073709551615"), Ok(u64::MAX));
        // below i64::MIN, still reported with its value
        assert_eq!(
            parse_count("-99999999999999999999"),
            Err(InputError::Negative(-99_999_999_999_999_999_999))
        );
    }
}
