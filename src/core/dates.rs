use crate::domain::model::DateParts;
use crate::utils::error::Result;

/// Returns whichever of two `MM/DD/YYYY` dates comes first.
///
/// A missing date yields `Ok(None)`. Equal dates return `second`. Malformed
/// dates fail with `FormatError`.
pub fn get_earliest<'a>(
    first: impl Into<Option<&'a str>>,
    second: impl Into<Option<&'a str>>,
) -> Result<Option<&'a str>> {
    let (first, second) = match (first.into(), second.into()) {
        (Some(first), Some(second)) => (first, second),
        _ => {
            tracing::debug!("get_earliest called with a missing date");
            return Ok(None);
        }
    };

    let first_parts: DateParts = first.parse()?;
    let second_parts: DateParts = second.parse()?;

    if first_parts < second_parts {
        Ok(Some(first))
    } else {
        Ok(Some(second))
    }
}
