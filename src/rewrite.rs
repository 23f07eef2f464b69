//! Ordered regex find/replace rules.
//!
//! Rules run as a left fold: rule `i + 1` sees the output of rule `i`, never
//! the original text. Replacements are templates, so `$1` and `${name}`
//! expand to capture groups.

use log::debug;
use regex::Regex;

use crate::error::{LexiconError, Result};

/// A compiled, ordered rule list
#[derive(Debug, Clone, Default)]
pub struct RewriteRules {
    rules: Vec<(Regex, String)>,
}

impl RewriteRules {
    /// Compile every pattern up front; the first invalid one aborts
    pub fn compile<P, R>(rules: &[(P, R)]) -> Result<Self>
    where
        P: AsRef<str>,
        R: AsRef<str>,
    {
        let rules = rules
            .iter()
            .map(|(pattern, replacement)| {
                let pattern = pattern.as_ref();
                let regex = Regex::new(pattern).map_err(|source| LexiconError::Pattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
                Ok((regex, replacement.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        debug!("Compiled {} rewrite rules", rules.len());
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Append `other`'s rules after ours
    pub fn concat(mut self, other: RewriteRules) -> Self {
        self.rules.extend(other.rules);
        self
    }

    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |current, (pattern, replacement)| {
                pattern
                    .replace_all(&current, replacement.as_str())
                    .into_owned()
            })
    }

    /// Like [`apply`](Self::apply), also returning the number of matches replaced
    pub fn apply_counted(&self, text: &str) -> (String, u64) {
        let mut result = text.to_string();
        let mut total_subs: u64 = 0;

        for (pattern, replacement) in &self.rules {
            let before_count = pattern.find_iter(&result).count();
            if before_count > 0 {
                result = pattern
                    .replace_all(&result, replacement.as_str())
                    .into_owned();
                total_subs += before_count as u64;
            }
        }

        (result, total_subs)
    }
}

/// Compile `rules` and apply them to `text` in order.
///
/// Nothing is applied if any pattern is invalid.
pub fn regex_replace<P, R>(rules: &[(P, R)], text: &str) -> Result<String>
where
    P: AsRef<str>,
    R: AsRef<str>,
{
    Ok(RewriteRules::compile(rules)?.apply(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_replace() {
        let out = regex_replace(&[("[0-9]+", "#")], "abc123def456").unwrap();
        assert_eq!(out, "abc#def#");
    }

    #[test]
    fn test_rules_chain_in_order() {
        // Second rule only matches what the first produced
        let rules = [("a", "b"), ("b", "c")];
        assert_eq!(regex_replace(&rules, "aab").unwrap(), "ccc");

        let reversed = [("b", "c"), ("a", "b")];
        assert_eq!(regex_replace(&reversed, "aab").unwrap(), "bbc");
    }

    #[test]
    fn test_capture_group_template() {
        let rules = [(r"(\w+)@(\w+)", "${2}_$1")];
        assert_eq!(regex_replace(&rules, "user@host").unwrap(), "host_user");

        // Zero-width joiner insertion between a verb prefix and its stem
        let rules = [(r"(^| )(ن?می) ", "$1$2\u{200c}")];
        assert_eq!(regex_replace(&rules, "می روم").unwrap(), "می\u{200c}روم");
    }

    #[test]
    fn test_concat_matches_single_list() {
        let text = "۱۲ apples and 3 pears";
        let first = RewriteRules::compile(&[("apples", "APPLES"), (r"\d", "N")]).unwrap();
        let second = RewriteRules::compile(&[("N+", "<num>")]).unwrap();
        let combined =
            RewriteRules::compile(&[("apples", "APPLES"), (r"\d", "N"), ("N+", "<num>")]).unwrap();

        let staged = second.apply(&first.apply(text));
        assert_eq!(staged, combined.apply(text));
        assert_eq!(first.concat(second).apply(text), combined.apply(text));
    }

    #[test]
    fn test_invalid_pattern_aborts() {
        let rules = [("a", "b"), ("(unclosed", "x")];
        match regex_replace(&rules, "aaa") {
            Err(LexiconError::Pattern { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
            other => panic!("expected pattern error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_rules_is_identity() {
        let rules: [(&str, &str); 0] = [];
        let compiled = RewriteRules::compile(&rules).unwrap();
        assert!(compiled.is_empty());
        assert_eq!(compiled.apply("متن"), "متن");
    }

    #[test]
    fn test_apply_counted() {
        let rules = RewriteRules::compile(&[("[0-9]+", "#"), ("x", "y")]).unwrap();
        assert_eq!(rules.len(), 2);
        let (out, subs) = rules.apply_counted("1 x 22 x 333");
        assert_eq!(out, "# y # y #");
        assert_eq!(subs, 5);
    }
}
