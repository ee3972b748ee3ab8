use std::ops::Neg;

/// Returns a new matrix with every element negated. Rows may differ in
/// length; the input is left untouched.
///
/// Negation follows `N`'s own `Neg`, so `i32::MIN` overflows exactly as
/// `-i32::MIN` would.
pub fn negate<N, R>(matrix: &[R]) -> Vec<Vec<N>>
where
    N: Neg<Output = N> + Copy,
    R: AsRef<[N]>,
{
    matrix
        .iter()
        .map(|row| row.as_ref().iter().map(|&n| -n).collect())
        .collect()
}
