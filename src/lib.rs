pub mod answer;
pub mod cli;
pub mod digits;
pub mod error;
pub mod input;
pub mod ranges;
pub mod util;

pub use answer::Answer;
pub use error::ParseError;
