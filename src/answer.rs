use serde::{Deserialize, Serialize};

/// Result of solving a puzzle: one number per part.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub part1: u64,
    pub part2: u64,
}

impl Answer {
    pub fn new(part1: u64, part2: u64) -> Self {
        Self { part1, part2 }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Part 1: {}", self.part1)?;
        write!(f, "Part 2: {}", self.part2)
    }
}
