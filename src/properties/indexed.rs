use super::{Extraction, Prefix, PropertySet};

/// Extracts the numbered entries `prefix.1`, `prefix.2`, … from `source`.
///
/// Collection stops at the first missing index. With `smtp.1` and `smtp.3`
/// but no `smtp.2`, only `smtp.1` is extracted and `smtp.3` stays in
/// [`Extraction::remaining`]. Numbering must therefore be contiguous from 1.
///
/// Extracted keys keep their full `prefix.index` form.
pub fn extract_indexed(prefix: &Prefix, mut source: PropertySet) -> Extraction {
    let mut matched = PropertySet::new();

    for index in 1.. {
        let key = prefix.indexed_key(index);
        match source.remove(&key) {
            Some(value) => {
                matched.insert(key, value);
            }
            None => break,
        }
    }

    Extraction {
        matched,
        remaining: source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> PropertySet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_contiguous_run() {
        let source = props(&[("to.1", "a"), ("to.2", "b"), ("to.3", "c"), ("from", "me")]);

        let extraction = extract_indexed(&Prefix::new("to").unwrap(), source);

        assert_eq!(extraction.matched, props(&[("to.1", "a"), ("to.2", "b"), ("to.3", "c")]));
        assert_eq!(extraction.remaining, props(&[("from", "me")]));
    }

    #[test]
    fn test_stops_at_gap() {
        let source = props(&[("smtp.1", "a"), ("smtp.3", "c")]);

        let extraction = extract_indexed(&Prefix::new("smtp").unwrap(), source);

        assert_eq!(extraction.matched, props(&[("smtp.1", "a")]));
        assert_eq!(extraction.remaining, props(&[("smtp.3", "c")]));
    }

    #[test]
    fn test_gap_after_longer_run() {
        let n = 5;
        let mut source = PropertySet::new();
        for i in 1..=n {
            source.insert(format!("p.{i}"), i.to_string());
        }
        source.insert(format!("p.{}", n + 2), "late");

        let extraction = extract_indexed(&Prefix::new("p").unwrap(), source);

        assert_eq!(extraction.matched.len(), n);
        for i in 1..=n {
            assert!(extraction.matched.contains_key(&format!("p.{i}")));
        }
        assert_eq!(extraction.remaining, props(&[("p.7", "late")]));
    }

    #[test]
    fn test_missing_first_index() {
        let source = props(&[("smtp.2", "b"), ("smtp.0", "z")]);

        let extraction = extract_indexed(&Prefix::new("smtp").unwrap(), source.clone());

        assert!(extraction.matched.is_empty());
        assert_eq!(extraction.remaining, source);
    }

    #[test]
    fn test_ignores_non_numeric_children() {
        let source = props(&[("smtp.1", "a"), ("smtp.host", "h")]);

        let extraction = extract_indexed(&Prefix::new("smtp").unwrap(), source);

        assert_eq!(extraction.matched, props(&[("smtp.1", "a")]));
        assert_eq!(extraction.remaining, props(&[("smtp.host", "h")]));
    }
}
