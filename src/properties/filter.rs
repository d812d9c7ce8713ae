use super::{Extraction, Prefix, PropertySet};

/// Splits `source` into the entries whose key starts with `prefix` and the rest.
///
/// Matching is a plain, case-sensitive leading-substring test. Note that
/// `"mail"` also matches `"mailbox.size"`; include the separator in the
/// prefix (`"mail."`) when only a section is wanted.
pub fn filter_by_prefix(prefix: &Prefix, source: PropertySet) -> Extraction {
    let mut extraction = Extraction::default();

    for (key, value) in source {
        if key.starts_with(prefix.as_str()) {
            extraction.matched.insert(key, value);
        } else {
            extraction.remaining.insert(key, value);
        }
    }

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> PropertySet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_moves_matching_entries() {
        let source = props(&[
            ("email.host", "localhost"),
            ("email.port", "25"),
            ("sms.gateway", "http://sms"),
        ]);

        let Extraction { matched, remaining } = filter_by_prefix(&Prefix::new("email").unwrap(), source);

        assert_eq!(matched, props(&[("email.host", "localhost"), ("email.port", "25")]));
        assert_eq!(remaining, props(&[("sms.gateway", "http://sms")]));
    }

    #[test]
    fn test_matched_and_remaining_are_disjoint() {
        let source = props(&[
            ("a.1", "x"),
            ("ab", "y"),
            ("b.a", "z"),
            ("A.1", "w"),
            ("", "empty key"),
        ]);
        let prefix = Prefix::new("a").unwrap();

        let Extraction { matched, remaining } = filter_by_prefix(&prefix, source);

        for key in matched.keys() {
            assert!(key.starts_with("a"));
            assert!(!remaining.contains_key(key));
        }
        for key in remaining.keys() {
            assert!(!key.starts_with("a"));
        }
        assert_eq!(matched.len() + remaining.len(), 5);
    }

    #[test]
    fn test_case_sensitive() {
        let source = props(&[("Email.host", "x")]);
        let extraction = filter_by_prefix(&Prefix::new("email").unwrap(), source);

        assert!(extraction.matched.is_empty());
        assert_eq!(extraction.remaining.len(), 1);
    }

    #[test]
    fn test_empty_source() {
        let extraction = filter_by_prefix(&Prefix::new("x").unwrap(), PropertySet::new());
        assert_eq!(extraction, Extraction::default());
    }
}
