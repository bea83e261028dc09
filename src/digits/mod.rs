//! Battery banks: pick digits in order to form the largest joltage per bank.

pub mod bank;
#[cfg(test)]
mod tests;

use tracing::{debug, instrument};

pub use bank::{Bank, MAX_PICK};

use crate::answer::Answer;
use crate::error::ParseError;

/// Batteries turned on per bank in the first part.
pub const PAIR: usize = 2;
/// Default number of batteries turned on per bank in the second part.
pub const DEFAULT_PICK: usize = 12;

/// Parses one bank per non-blank line.
#[instrument(skip_all, level = "debug")]
pub fn parse_banks(input: &str) -> Result<Vec<Bank>, ParseError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(idx, text)| Bank::parse(idx + 1, text))
        .collect()
}

pub fn solve(input: &str, pick: usize) -> Result<Answer, ParseError> {
    let banks = parse_banks(input)?;
    debug!("Parsed {} banks", banks.len());
    solve_banks(&banks, pick)
}

pub fn solve_banks(banks: &[Bank], pick: usize) -> Result<Answer, ParseError> {
    let mut answer = Answer::default();
    for bank in banks {
        let overflow = || ParseError::AnswerOverflow { line: bank.line() };
        answer.part1 = answer
            .part1
            .checked_add(bank.max_joltage(PAIR)?)
            .ok_or_else(overflow)?;
        answer.part2 = answer
            .part2
            .checked_add(bank.max_joltage(pick)?)
            .ok_or_else(overflow)?;
    }
    Ok(answer)
}
