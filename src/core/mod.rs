pub mod anagram;
pub mod dates;
pub mod matrix;
pub mod sequences;
pub mod strip;
pub mod words;

pub use crate::domain::model::{Circle, DateParts, WordCounts};
pub use crate::domain::ports::{ByPredicate, Equals, Matcher};
pub use crate::utils::error::Result;
