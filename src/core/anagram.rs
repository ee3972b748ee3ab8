use std::collections::HashMap;

fn char_counts(s: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in s.chars().flat_map(char::to_lowercase) {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// True when both strings hold the same characters the same number of
/// times, ignoring case. Spaces and punctuation count like any other
/// character. A missing string is never an anagram.
pub fn is_anagram<'a, 'b>(
    first: impl Into<Option<&'a str>>,
    second: impl Into<Option<&'b str>>,
) -> bool {
    match (first.into(), second.into()) {
        (Some(first), Some(second)) => char_counts(first) == char_counts(second),
        _ => false,
    }
}
