use std::collections::HashMap;
use std::sync::RwLock;

use regex::Regex;

use protovalid_types::field_constraints::{StringConstraints, string_constraints};

use crate::path::FieldPath;

/// Compiled patterns keyed by their source text. Patterns that fail to
/// compile are cached as `None`.
#[derive(Debug, Default)]
pub(crate) struct PatternCache {
    patterns: RwLock<HashMap<String, Option<Regex>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compiled pattern, or `None` if it is not a valid regex.
    pub fn get(&self, pattern: &str) -> Option<Regex> {
        {
            let patterns = self
                .patterns
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(compiled) = patterns.get(pattern) {
                return compiled.clone();
            }
        }

        let compiled = match Regex::new(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                tracing::debug!(pattern, error = %err, "invalid constraint pattern");
                None
            }
        };
        let mut patterns = self
            .patterns
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        patterns
            .entry(pattern.to_string())
            .or_insert(compiled)
            .clone()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.patterns
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}

/// Checks a string for emptiness, byte length, and either equality or a
/// pattern match. A declared `eq` disables the pattern check.
pub(crate) fn evaluate_string(
    path: &mut FieldPath,
    v: &str,
    c: &StringConstraints,
    patterns: &PatternCache,
) {
    let level = c.level();
    let length = u64::try_from(v.len()).unwrap_or(u64::MAX);

    match c.empty_type {
        Some(string_constraints::EmptyType::Empty(true)) if length > 0 => {
            path.add_finding(format!("value {v} is not empty"), level, c.msg.as_str());
        }
        Some(string_constraints::EmptyType::NotEmpty(true)) if length == 0 => {
            path.add_finding(format!("value {v} is empty"), level, c.msg.as_str());
        }
        _ => {}
    }

    if c.len_eq > 0 {
        if length != u64::from(c.len_eq) {
            path.add_finding(
                format!("length of value {v} is not {}", c.len_eq),
                level,
                c.msg.as_str(),
            );
        }
    } else {
        if c.len_gte > 0 && length < u64::from(c.len_gte) {
            path.add_finding(
                format!("length of value {v} is less than {}", c.len_gte),
                level,
                c.msg.as_str(),
            );
        }
        if c.len_lte > 0 && length > u64::from(c.len_lte) {
            path.add_finding(
                format!("length of value {v} is greater than {}", c.len_lte),
                level,
                c.msg.as_str(),
            );
        }
    }

    if !c.eq.is_empty() {
        if c.eq != v {
            path.add_finding(format!("value {v} is not {}", c.eq), level, c.msg.as_str());
        }
    } else if !c.pattern.is_empty() {
        match patterns.get(&c.pattern) {
            None => {
                path.add_finding(format!("invalid regex {}", c.pattern), level, c.msg.as_str());
            }
            Some(regex) if !regex.is_match(v) => {
                path.add_finding(
                    format!("value {v} doesn't match regex {}", c.pattern),
                    level,
                    c.msg.as_str(),
                );
            }
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PatternCache, evaluate_string};
    use crate::path::FieldPath;
    use pretty_assertions::assert_eq;
    use protovalid_types::field_constraints::{StringConstraints, string_constraints::EmptyType};

    fn check(v: &str, c: &StringConstraints) -> Vec<String> {
        let mut path = FieldPath::root();
        evaluate_string(&mut path, v, c, &PatternCache::new());
        path.findings()
            .iter()
            .map(|f| f.details().to_string())
            .collect()
    }

    #[test]
    fn not_empty_flags_empty_values() {
        let c = StringConstraints {
            empty_type: Some(EmptyType::NotEmpty(true)),
            ..Default::default()
        };
        assert_eq!(check("", &c), vec!["value  is empty"]);
        assert!(check("Hanover", &c).is_empty());
    }

    #[test]
    fn empty_flags_non_empty_values() {
        let c = StringConstraints {
            empty_type: Some(EmptyType::Empty(true)),
            ..Default::default()
        };
        assert_eq!(check("x", &c), vec!["value x is not empty"]);
        assert!(check("", &c).is_empty());

        let disabled = StringConstraints {
            empty_type: Some(EmptyType::Empty(false)),
            ..Default::default()
        };
        assert!(check("x", &disabled).is_empty());
    }

    #[test]
    fn exact_length_disables_range() {
        let c = StringConstraints {
            len_eq: 3,
            len_gte: 10,
            len_lte: 1,
            ..Default::default()
        };
        assert!(check("abc", &c).is_empty());
        assert_eq!(check("ab", &c), vec!["length of value ab is not 3"]);
    }

    #[test]
    fn length_range_reports_min_and_max() {
        let c = StringConstraints {
            len_gte: 2,
            len_lte: 4,
            ..Default::default()
        };
        assert_eq!(check("a", &c), vec!["length of value a is less than 2"]);
        assert_eq!(
            check("abcde", &c),
            vec!["length of value abcde is greater than 4"]
        );
        assert!(check("abc", &c).is_empty());

        let inverted = StringConstraints {
            len_gte: 5,
            len_lte: 1,
            ..Default::default()
        };
        assert_eq!(check("abc", &inverted).len(), 2);
    }

    #[test]
    fn length_counts_bytes() {
        let c = StringConstraints {
            len_lte: 2,
            ..Default::default()
        };
        // Two characters, four bytes.
        assert_eq!(check("ää", &c), vec!["length of value ää is greater than 2"]);
    }

    #[test]
    fn equal_takes_precedence_over_pattern() {
        let c = StringConstraints {
            eq: "abc".to_string(),
            pattern: "^a".to_string(),
            ..Default::default()
        };
        assert_eq!(check("xyz", &c), vec!["value xyz is not abc"]);
        assert!(check("abc", &c).is_empty());

        let invalid_pattern = StringConstraints {
            eq: "abc".to_string(),
            pattern: "(".to_string(),
            ..Default::default()
        };
        assert!(check("abc", &invalid_pattern).is_empty());
    }

    #[test]
    fn pattern_searches_unanchored() {
        let c = StringConstraints {
            pattern: "[0-9]+".to_string(),
            ..Default::default()
        };
        assert!(check("track 42", &c).is_empty());
        assert_eq!(
            check("track", &c),
            vec!["value track doesn't match regex [0-9]+"]
        );
    }

    #[test]
    fn invalid_pattern_is_reported_once_for_any_value() {
        let c = StringConstraints {
            pattern: "(".to_string(),
            ..Default::default()
        };
        for value in ["", "(", "anything"] {
            let found = check(value, &c);
            assert_eq!(found.len(), 1);
            assert!(found[0].contains("invalid regex"));
        }
    }

    #[test]
    fn cache_compiles_each_pattern_once() {
        let cache = PatternCache::new();
        assert!(cache.get("^a").is_some());
        assert!(cache.get("^a").is_some());
        assert!(cache.get("(").is_none());
        assert!(cache.get("(").is_none());
        assert_eq!(cache.len(), 2);
    }
}
