use crate::error::ParseError;

/// Largest pick whose result still fits into `u64`.
pub const MAX_PICK: usize = 19;

/// One line of battery joltage ratings, a digit each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    line: usize,
    digits: Vec<u8>,
}

impl Bank {
    /// Parses a line of decimal digits. Surrounding whitespace is ignored.
    pub fn parse(line: usize, text: &str) -> Result<Self, ParseError> {
        let leading = text.len() - text.trim_start().len();
        let indent = text[..leading].chars().count();
        let digits = text
            .trim()
            .chars()
            .enumerate()
            .map(|(idx, c)| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(ParseError::InvalidDigit {
                        line,
                        column: indent + idx + 1,
                        found: c,
                    })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { line, digits })
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Largest number formed by turning on exactly `pick` batteries, keeping their order.
    ///
    /// Keeps a stack of chosen digits and drops smaller ones whenever a larger digit
    /// arrives and enough digits remain after it to still fill `pick` slots.
    pub fn max_joltage(&self, pick: usize) -> Result<u64, ParseError> {
        if !(1..=MAX_PICK).contains(&pick) {
            return Err(ParseError::InvalidPick {
                pick,
                max: MAX_PICK,
            });
        }
        let n = self.digits.len();
        if n < pick {
            return Err(ParseError::TooFewDigits {
                line: self.line,
                needed: pick,
                found: n,
            });
        }

        let mut stack: Vec<u8> = Vec::with_capacity(pick);
        for (i, &d) in self.digits.iter().enumerate() {
            let remaining = n - i - 1;
            while let Some(&top) = stack.last() {
                if d <= top || remaining < pick - stack.len() {
                    break;
                }
                stack.pop();
            }
            if stack.len() < pick {
                stack.push(d);
            }
        }
        Ok(stack.iter().fold(0, |acc, &d| acc * 10 + d as u64))
    }
}
