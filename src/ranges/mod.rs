//! Fresh ingredient ids: inclusive id ranges merged into a [`RangeSet`], then
//! queried for membership (part 1) and total coverage (part 2).

pub mod inventory;
pub mod range;
pub mod set;

use tracing::{debug, info, instrument};

pub use inventory::Inventory;
pub use range::Range;
pub use set::RangeSet;

use crate::answer::Answer;
use crate::error::ParseError;

#[instrument(skip_all, level = "debug")]
pub fn solve(input: &str) -> Result<Answer, ParseError> {
    let inventory = Inventory::parse(input)?;
    debug!(
        "Parsed {} ranges and {} ids",
        inventory.ranges.len(),
        inventory.ids.len()
    );
    Ok(solve_inventory(inventory))
}

pub fn solve_inventory(inventory: Inventory) -> Answer {
    let raw = inventory.ranges.len();
    let fresh = RangeSet::from_ranges(inventory.ranges);
    info!("Merged {raw} ranges into {}", fresh.len());

    let fresh_ids = inventory.ids.iter().filter(|&&id| fresh.is_fresh(id)).count();
    Answer::new(fresh_ids as u64, fresh.total_covered())
}
