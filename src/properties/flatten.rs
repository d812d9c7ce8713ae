use super::{filter_by_prefix, Extraction, Prefix, PropertySet};

/// Extracts the entries under `prefix`, re-keyed by their last `.` segment.
///
/// `email.template.subject` becomes `subject`. A key with no `.` is kept as
/// is. Entries whose last segment is empty or whitespace (`email.`) are
/// discarded: they are taken out of the source like every other match but do
/// not appear in the result.
///
/// Two keys with the same last segment collide; keys are visited in
/// lexicographic order, so the one sorting last wins.
pub fn flatten(prefix: &Prefix, source: PropertySet) -> Extraction {
    let Extraction { matched: scoped, remaining } = filter_by_prefix(prefix, source);
    let mut matched = PropertySet::new();

    for (key, value) in scoped {
        let segment = last_segment(&key);
        if segment.trim().is_empty() {
            continue;
        }
        matched.insert(segment, value);
    }

    Extraction { matched, remaining }
}

fn last_segment(key: &str) -> &str {
    match key.rfind('.') {
        Some(pos) => &key[pos + 1..],
        None => key,
    }
}
