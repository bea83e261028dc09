use anyhow::Result;
use tracing::info;

use crate::answer::Answer;
use crate::error::ParseError;
use crate::util::tests::{list_fixtures, setup_tracing};

use super::{parse_banks, solve, DEFAULT_PICK, MAX_PICK};

#[test]
fn test_fixtures() -> Result<()> {
    setup_tracing()?;
    let fixtures = list_fixtures("joltage");
    assert!(!fixtures.is_empty());
    for (name, (input, expected)) in fixtures {
        info!("Solving {name}");
        assert_eq!(solve(&input, DEFAULT_PICK)?, expected, "{name}");
    }
    Ok(())
}

#[test]
fn test_blank_lines_are_skipped() {
    let banks = parse_banks("\n12\n\n  \n34\n").unwrap();
    assert_eq!(banks.len(), 2);
    assert_eq!(banks[0].line(), 2);
    assert_eq!(banks[1].line(), 5);
    assert_eq!(solve("\n12\n\n34\n", 2).unwrap(), Answer::new(46, 46));
}

#[test]
fn test_empty_input() {
    assert_eq!(solve("", DEFAULT_PICK).unwrap(), Answer::default());
}

#[test]
fn test_custom_pick() {
    assert_eq!(solve("12345\n54321\n", 3).unwrap(), Answer::new(45 + 54, 345 + 543));
}

#[test]
fn test_short_bank_fails() {
    assert_eq!(
        solve("987654321111111\n12345\n", DEFAULT_PICK).unwrap_err(),
        ParseError::TooFewDigits {
            line: 2,
            needed: 12,
            found: 5
        }
    );
}

#[test]
fn test_invalid_digit_fails() {
    assert_eq!(
        solve("123\n1x3\n", 2).unwrap_err(),
        ParseError::InvalidDigit {
            line: 2,
            column: 2,
            found: 'x'
        }
    );
}

#[test]
fn test_largest_pick_overflows_total() {
    let nines = "9".repeat(MAX_PICK);
    assert_eq!(
        solve(&format!("{nines}\n"), MAX_PICK).unwrap(),
        Answer::new(99, 9_999_999_999_999_999_999)
    );
    assert_eq!(
        solve(&format!("{nines}\n\n{nines}\n"), MAX_PICK).unwrap_err(),
        ParseError::AnswerOverflow { line: 3 }
    );
}

#[test]
fn test_out_of_range_pick_fails() {
    assert_eq!(
        solve("12\n", 0).unwrap_err(),
        ParseError::InvalidPick {
            pick: 0,
            max: MAX_PICK
        }
    );
}
