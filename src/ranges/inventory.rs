use tracing::instrument;

use super::range::Range;
use crate::error::ParseError;

/// Raw puzzle input: fresh ranges in input order, then the available ids.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub ranges: Vec<Range>,
    pub ids: Vec<i64>,
}

impl Inventory {
    /// Parses the range section up to the first blank line, then one id per
    /// remaining non-blank line.
    #[instrument(skip_all, level = "debug")]
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut lines = input.lines().enumerate().map(|(idx, text)| (idx + 1, text));

        let mut ranges = Vec::new();
        for (line, text) in lines.by_ref() {
            if text.trim().is_empty() {
                break;
            }
            ranges.push(Range::parse(line, text)?);
        }

        let ids = lines
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(line, text)| parse_id(line, text))
            .collect::<Result<_, _>>()?;

        Ok(Self { ranges, ids })
    }
}

fn parse_id(line: usize, text: &str) -> Result<i64, ParseError> {
    text.trim().parse().map_err(|_| ParseError::MalformedId {
        line,
        text: text.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use crate::error::ParseError;
    use crate::ranges::range::Range;

    use super::Inventory;

    #[test]
    fn test_parse() {
        let inventory = Inventory::parse("3-5\n10-14\n12-18\n16-20\n\n4\n9\n15\n25\n").unwrap();
        assert_eq!(
            inventory.ranges,
            vec![
                Range::new(3, 5),
                Range::new(10, 14),
                Range::new(12, 18),
                Range::new(16, 20)
            ]
        );
        assert_eq!(inventory.ids, vec![4, 9, 15, 25]);
    }

    #[test]
    fn test_sections() {
        assert_eq!(Inventory::parse("").unwrap(), Inventory::default());

        let no_ranges = Inventory::parse("\n42\n").unwrap();
        assert!(no_ranges.ranges.is_empty());
        assert_eq!(no_ranges.ids, vec![42]);

        let no_ids = Inventory::parse("1-2\n3-4").unwrap();
        assert_eq!(no_ids.ranges.len(), 2);
        assert!(no_ids.ids.is_empty());

        let crlf = Inventory::parse("1-2\r\n\r\n7\r\n").unwrap();
        assert_eq!(crlf.ranges, vec![Range::new(1, 2)]);
        assert_eq!(crlf.ids, vec![7]);
    }

    #[test]
    fn test_signs_match_between_sections() {
        let inventory = Inventory::parse("+3-5\n-2--1\n\n+4\n-1\n").unwrap();
        assert_eq!(inventory.ranges, vec![Range::new(3, 5), Range::new(-2, -1)]);
        assert_eq!(inventory.ids, vec![4, -1]);
    }

    #[test]
    fn test_blank_lines_between_ids() {
        let inventory = Inventory::parse("1-2\n\n\n5\n\n6\n\n").unwrap();
        assert_eq!(inventory.ids, vec![5, 6]);
    }

    #[test]
    fn test_errors_name_the_line() {
        assert_eq!(
            Inventory::parse("1-2\n3 5\n\n4").unwrap_err(),
            ParseError::MalformedRange {
                line: 2,
                text: "3 5".to_owned()
            }
        );
        assert_eq!(
            Inventory::parse("1-2\n\n4\nfour\n").unwrap_err(),
            ParseError::MalformedId {
                line: 4,
                text: "four".to_owned()
            }
        );
        // A range after the blank line is not an id
        assert_eq!(
            Inventory::parse("\n1-2\n").unwrap_err(),
            ParseError::MalformedId {
                line: 2,
                text: "1-2".to_owned()
            }
        );
        let err = Inventory::parse("5-1\n").unwrap_err();
        assert_eq!(err.to_string(), "Line 1: range 5-1 ends before it starts");
    }
}
