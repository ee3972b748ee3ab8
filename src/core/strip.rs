use crate::domain::ports::{ByPredicate, Equals, Matcher};
use std::iter::FusedIterator;

/// Iterator over what remains of a sequence after its leading run of
/// matching elements. The run is skipped on the first pull; after that
/// elements are handed out one at a time.
#[derive(Debug)]
pub struct LeadingStrip<T, M> {
    items: std::vec::IntoIter<T>,
    matcher: M,
    stripped: bool,
}

impl<T, M: Matcher<T>> LeadingStrip<T, M> {
    fn new<I: IntoIterator<Item = T>>(items: I, matcher: M) -> Self {
        Self {
            items: items.into_iter().collect::<Vec<T>>().into_iter(),
            matcher,
            stripped: false,
        }
    }
}

impl<T, M: Matcher<T>> Iterator for LeadingStrip<T, M> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if !self.stripped {
            self.stripped = true;
            for item in self.items.by_ref() {
                if !self.matcher.matches(&item) {
                    return Some(item);
                }
            }
            return None;
        }
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len();
        if self.stripped {
            (remaining, Some(remaining))
        } else {
            (0, Some(remaining))
        }
    }
}

impl<T, M: Matcher<T>> FusedIterator for LeadingStrip<T, M> {}

/// Skips the leading elements equal to `value`.
pub fn lstrip<I>(items: I, value: I::Item) -> LeadingStrip<I::Item, Equals<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    LeadingStrip::new(items, Equals(value))
}

/// Skips the leading elements for which `predicate` holds.
pub fn lstrip_by<I, F>(items: I, predicate: F) -> LeadingStrip<I::Item, ByPredicate<F>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    LeadingStrip::new(items, ByPredicate(predicate))
}
