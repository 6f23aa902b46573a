//! Committee search: case-insensitive substring filter, no ranking.

use crate::directory::model::Committee;

/// Filter committees where `query` is a case-insensitive substring of either
/// the committee name or the chairperson. Source order is preserved; the
/// empty query matches everything.
#[must_use]
pub fn filter_committees<'a>(committees: &'a [Committee], query: &str) -> Vec<&'a Committee> {
    let needle = query.to_lowercase();
    committees
        .iter()
        .filter(|c| {
            c.committee.to_lowercase().contains(&needle)
                || c.chairperson.to_lowercase().contains(&needle)
        })
        .collect()
}
