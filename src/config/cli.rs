use crate::config::toml_config::{KitConfig, OutputFormat};
use crate::utils::error::{KitError, Result};
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-kit")]
#[command(about = "Small data-transformation utilities: dates, words, sequences, matrices")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, global = true, value_enum, help = "Output format (overrides the config file)")]
    pub format: Option<OutputFormat>,

    #[arg(long, global = true, help = "Log process CPU and memory during bench")]
    pub monitor: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Reads the config file when one is given, then applies flag overrides.
    pub fn load_config(&self) -> Result<KitConfig> {
        let mut config = match &self.config {
            Some(path) => {
                validate_path("--config", path)?;
                KitConfig::from_file(path)?
            }
            None => KitConfig::default(),
        };

        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.monitor {
            config.monitoring.enabled = true;
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupKey {
    /// Each item is its own key
    Value,
    /// "even" / "odd"; items must be integers
    Parity,
    /// Number of characters
    Length,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the earlier of two MM/DD/YYYY dates
    Earliest { first: String, second: String },

    /// Count case-folded words in a text
    CountWords {
        text: String,
        /// Only show the N most frequent words
        #[arg(long)]
        top: Option<usize>,
    },

    /// Collapse adjacent duplicates in a comma-separated list
    Compact { items: String },

    /// Negate a matrix given as ';'-separated rows of comma-separated numbers
    Negate {
        #[arg(allow_hyphen_values = true)]
        matrix: String,
    },

    /// Last N items of a comma-separated list
    Tail {
        items: String,
        #[arg(short, long, allow_hyphen_values = true)]
        n: Option<isize>,
    },

    /// Check whether two strings are anagrams
    Anagram { first: String, second: String },

    /// Show radius, diameter and area of a circle
    Circle {
        #[arg(long, conflicts_with = "diameter", allow_hyphen_values = true)]
        radius: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        diameter: Option<f64>,
    },

    /// Distinct items of a comma-separated list, first occurrence first
    Uniques { items: String },

    /// Group a comma-separated list
    GroupBy {
        items: String,
        #[arg(long, value_enum, default_value = "value")]
        key: GroupKey,
    },

    /// Drop the leading items equal to VALUE
    Lstrip { items: String, value: String },

    /// Time repeated negation of a 3x3 matrix
    Bench {
        #[arg(long)]
        iterations: Option<usize>,
    },
}

/// Splits one comma-separated line into trimmed items. Quoted items may
/// contain commas.
pub fn parse_items(raw: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());

    match reader.records().next() {
        Some(record) => Ok(record?.iter().map(str::to_string).collect()),
        None => Ok(Vec::new()),
    }
}

/// Parses `1,2;3,4,5` into rows of numbers. Rows may differ in length and
/// a blank row stays as an empty row, so `""` is `[[]]` and `1;;2` keeps
/// its middle row.
pub fn parse_matrix(raw: &str) -> Result<Vec<Vec<f64>>> {
    raw.split(';')
        .enumerate()
        .map(|(row_index, segment)| -> Result<Vec<f64>> {
            if segment.trim().is_empty() {
                return Ok(Vec::new());
            }
            parse_items(segment)?
                .iter()
                .map(|cell| {
                    cell.parse::<f64>().map_err(|_| {
                        KitError::input(format!("row {}: '{}' is not a number", row_index + 1, cell))
                    })
                })
                .collect()
        })
        .collect()
}
