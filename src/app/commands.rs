use crate::config::cli::{parse_items, parse_matrix, Command, GroupKey};
use crate::config::toml_config::{KitConfig, OutputFormat};
use crate::core::{anagram, dates, matrix, sequences, strip, words};
use crate::domain::model::Circle;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::{validate_positive_number, validate_required_field};
use chrono::Local;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::time::Instant;

/// Result of one command: a JSON payload and a human-readable rendering.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub payload: Value,
    pub text: String,
}

impl CommandOutput {
    pub fn render(&self, format: OutputFormat, pretty: bool) -> Result<String> {
        match format {
            OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(&self.payload)?),
            OutputFormat::Json => Ok(serde_json::to_string(&self.payload)?),
            OutputFormat::Text => Ok(self.text.clone()),
        }
    }
}

fn join(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

pub fn execute(command: &Command, config: &KitConfig) -> Result<CommandOutput> {
    tracing::debug!("Executing {:?}", command);

    match command {
        Command::Earliest { first, second } => {
            let earliest = dates::get_earliest(first.as_str(), second.as_str())?;
            Ok(CommandOutput {
                payload: json!({ "earliest": earliest }),
                text: earliest.unwrap_or_default().to_string(),
            })
        }

        Command::CountWords { text, top } => {
            let counts = words::count_words(text);
            let ranked = words::most_common(&counts, top.unwrap_or(counts.len()));
            let lines: Vec<String> = ranked
                .iter()
                .map(|(token, count)| format!("{}: {}", token, count))
                .collect();
            let payload: BTreeMap<&str, usize> = ranked.into_iter().collect();
            Ok(CommandOutput {
                payload: serde_json::to_value(payload)?,
                text: lines.join("\n"),
            })
        }

        Command::Compact { items } => {
            let compacted = sequences::compact(&parse_items(items)?);
            Ok(CommandOutput {
                text: join(&compacted),
                payload: json!(compacted),
            })
        }

        Command::Negate { matrix: raw } => {
            let negated = matrix::negate(&parse_matrix(raw)?);
            let text = negated
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|n| n.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                })
                .collect::<Vec<_>>()
                .join(";");
            Ok(CommandOutput {
                payload: json!(negated),
                text,
            })
        }

        Command::Tail { items, n } => {
            let n = match n {
                Some(n) => *n,
                None => *validate_required_field("defaults.tail_count", &config.defaults.tail_count)?,
            };
            let last = sequences::tail(&parse_items(items)?, n);
            Ok(CommandOutput {
                text: join(&last),
                payload: json!(last),
            })
        }

        Command::Anagram { first, second } => {
            let result = anagram::is_anagram(first.as_str(), second.as_str());
            Ok(CommandOutput {
                payload: json!({ "anagram": result }),
                text: result.to_string(),
            })
        }

        Command::Circle { radius, diameter } => {
            let mut circle = radius.map(Circle::new).unwrap_or_default();
            if let Some(diameter) = diameter {
                circle.set_diameter(*diameter);
            }
            Ok(CommandOutput {
                payload: json!({
                    "circle": circle.to_string(),
                    "radius": circle.radius(),
                    "diameter": circle.diameter(),
                    "area": circle.area(),
                }),
                text: format!(
                    "{} diameter={} area={:.6}",
                    circle,
                    circle.diameter(),
                    circle.area()
                ),
            })
        }

        Command::Uniques { items } => {
            let uniques = sequences::uniques_only(parse_items(items)?);
            Ok(CommandOutput {
                text: join(&uniques),
                payload: json!(uniques),
            })
        }

        Command::GroupBy { items, key } => {
            let items = parse_items(items)?;
            let groups = match key {
                GroupKey::Value => sequences::group_by_value(items),
                GroupKey::Length => {
                    sequences::group_by(items, |item| item.chars().count().to_string())
                }
                GroupKey::Parity => sequences::try_group_by(items, |item| {
                    item.parse::<i64>()
                        .map(|n| if n % 2 == 0 { "even" } else { "odd" }.to_string())
                })?,
            };
            let ordered: BTreeMap<String, Vec<String>> = groups.into_iter().collect();
            let text = ordered
                .iter()
                .map(|(k, members)| format!("{}: {}", k, join(members)))
                .collect::<Vec<_>>()
                .join("\n");
            Ok(CommandOutput {
                payload: serde_json::to_value(&ordered)?,
                text,
            })
        }

        Command::Lstrip { items, value } => {
            let rest: Vec<String> = strip::lstrip(parse_items(items)?, value.clone()).collect();
            Ok(CommandOutput {
                text: join(&rest),
                payload: json!(rest),
            })
        }

        Command::Bench { iterations } => {
            let iterations = iterations.unwrap_or(config.bench.iterations);
            validate_positive_number("--iterations", iterations, 1)?;
            run_bench(iterations, config.monitoring.enabled)
        }
    }
}

fn run_bench(iterations: usize, monitoring: bool) -> Result<CommandOutput> {
    let sample = vec![vec![1, 2, 3], vec![-1, 2, -3], vec![1000, 200, -2]];
    let mut monitor = SystemMonitor::new(monitoring);
    monitor.log_stats("Before negation");

    let started_at = Local::now();
    let timer = Instant::now();
    let mut last = Vec::new();
    for _ in 0..iterations {
        last = std::hint::black_box(matrix::negate(std::hint::black_box(&sample)));
    }
    let elapsed = timer.elapsed();
    let finished_at = Local::now();

    monitor.log_stats("After negation");

    let per_iteration_ns = elapsed.as_nanos() / iterations as u128;
    tracing::info!(
        "Negated a 3x3 matrix {} times in {:?} ({} ns each)",
        iterations,
        elapsed,
        per_iteration_ns
    );

    let started = started_at.format("%H:%M:%S%.6f").to_string();
    let finished = finished_at.format("%H:%M:%S%.6f").to_string();
    Ok(CommandOutput {
        text: format!("{}\n{}\n{:?}", started, finished, elapsed),
        payload: json!({
            "iterations": iterations,
            "started_at": started,
            "finished_at": finished,
            "elapsed_micros": elapsed.as_micros() as u64,
            "per_iteration_ns": per_iteration_ns as u64,
            "result": last,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::KitError;

    fn run(command: Command) -> Result<CommandOutput> {
        execute(&command, &KitConfig::default())
    }

    #[test]
    fn test_earliest_command() {
        let output = run(Command::Earliest {
            first: "02/29/1972".to_string(),
            second: "12/21/1946".to_string(),
        })
        .unwrap();
        assert_eq!(output.payload, json!({ "earliest": "12/21/1946" }));
        assert_eq!(output.text, "12/21/1946");
    }

    #[test]
    fn test_tail_without_count_needs_default() {
        let command = Command::Tail {
            items: "1,2,3".to_string(),
            n: None,
        };
        let err = execute(&command, &KitConfig::default()).unwrap_err();
        assert!(matches!(err, KitError::MissingConfigError { .. }));

        let mut config = KitConfig::default();
        config.defaults.tail_count = Some(2);
        let output = execute(&command, &config).unwrap();
        assert_eq!(output.payload, json!(["2", "3"]));
    }

    #[test]
    fn test_render_formats() {
        let output = run(Command::Compact {
            items: "a,a,b".to_string(),
        })
        .unwrap();
        assert_eq!(output.render(OutputFormat::Json, false).unwrap(), r#"["a","b"]"#);
        assert_eq!(output.render(OutputFormat::Text, false).unwrap(), "[a, b]");
    }

    #[test]
    fn test_bench_rejects_zero_iterations() {
        let err = run(Command::Bench {
            iterations: Some(0),
        })
        .unwrap_err();
        assert!(matches!(err, KitError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_bench_runs() {
        let output = run(Command::Bench {
            iterations: Some(10),
        })
        .unwrap();
        assert_eq!(output.payload["iterations"], 10);
        assert_eq!(output.payload["result"], json!([[-1, -2, -3], [1, -2, 3], [-1000, -200, 2]]));
    }
}
