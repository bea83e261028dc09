// Puzzle solvers for the cafeteria inventory and battery bank puzzles.
// Copyright (C) 2024 Subsquid Labs GmbH

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use anyhow::Result;
use clap::Parser;

use puzzle_solvers::cli::FreshIdsArgs;
use puzzle_solvers::input::read_input;
use puzzle_solvers::ranges;
use puzzle_solvers::util::setup_tracing;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = FreshIdsArgs::parse();
    setup_tracing(args.common.log_span_durations)?;

    let input = read_input(args.common.input_path().map(|p| p.as_path()))?;
    let answer = ranges::solve(&input)?;
    println!("{answer}");
    Ok(())
}
