#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::KitConfig;
pub use crate::core::{
    anagram::is_anagram,
    dates::get_earliest,
    matrix::negate,
    sequences::{compact, group_by, group_by_value, tail, tail_iter, try_group_by, uniques_only},
    strip::{lstrip, lstrip_by, LeadingStrip},
    words::{count_words, most_common},
};
pub use domain::model::{Circle, DateParts, WordCounts};
pub use utils::error::{KitError, Result};
