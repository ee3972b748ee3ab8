/// Decides whether an element belongs to the leading run being stripped.
pub trait Matcher<T> {
    fn matches(&mut self, item: &T) -> bool;
}

/// Matches elements equal to a fixed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Equals<T>(pub T);

impl<T: PartialEq> Matcher<T> for Equals<T> {
    fn matches(&mut self, item: &T) -> bool {
        *item == self.0
    }
}

/// Matches elements for which a caller-supplied predicate holds.
#[derive(Debug, Clone)]
pub struct ByPredicate<F>(pub F);

impl<T, F> Matcher<T> for ByPredicate<F>
where
    F: FnMut(&T) -> bool,
{
    fn matches(&mut self, item: &T) -> bool {
        (self.0)(item)
    }
}
