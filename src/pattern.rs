//! Command pattern matching.
//!
//! Free-form comment text is matched against a named-capture grok pattern
//! (e.g. `/deploy env=%{WORD:env}`); a successful match yields the captured
//! fields in declaration order. The grammar itself comes from the grok
//! engine's default pattern library; this module only consumes match results.
//!
//! Compiled patterns are cached in a registry keyed by the pattern string.
//! The cache is a performance detail and invisible to callers: matching is
//! stateless and repeatable.

use std::collections::HashMap;

use grok::{Grok, Pattern};
use thiserror::Error;

/// A malformed command pattern.
///
/// This is a configuration error: nothing can be matched against a pattern
/// that does not compile, so the run aborts.
#[derive(Debug, Error)]
#[error("malformed command pattern `{pattern}`: {source}")]
pub struct PatternError {
    /// The offending pattern string.
    pub pattern: String,
    /// The underlying engine error.
    #[source]
    pub source: grok::Error,
}

/// The result of matching a body against a command pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// The body did not satisfy the pattern (or there was no body).
    NoMatch,
    /// The body matched; the captured fields are carried in declaration order.
    Matched(CommandFields),
}

/// The named fields captured by a successful match, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandFields(Vec<(String, String)>);

impl CommandFields {
    /// Iterates over `(name, value)` pairs in capture declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Looks up a captured field by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes the fields as a JSON object, preserving field order.
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .0
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();
        serde_json::Value::Object(map)
    }
}

/// A registry of compiled patterns backed by the grok engine.
///
/// Compilation is the expensive step, so compiled patterns are cached by
/// their source string. Patterns are compiled in named-captures-only mode:
/// only explicit aliases like `%{WORD:action}` become fields.
pub struct PatternRegistry {
    grok: Grok,
    compiled: HashMap<String, Pattern>,
}

impl PatternRegistry {
    /// Creates a registry with the engine's default pattern library loaded.
    pub fn new() -> Self {
        PatternRegistry {
            grok: Grok::with_default_patterns(),
            compiled: HashMap::new(),
        }
    }

    /// Matches `body` against `pattern`.
    ///
    /// Returns [`MatchResult::NoMatch`] for an empty body or a body the
    /// pattern does not satisfy; never fails on input text. A pattern that
    /// does not compile is a [`PatternError`].
    pub fn extract(&mut self, body: &str, pattern: &str) -> Result<MatchResult, PatternError> {
        if body.is_empty() {
            return Ok(MatchResult::NoMatch);
        }

        let compiled = match self.compiled.entry(pattern.to_string()) {
            std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            std::collections::hash_map::Entry::Vacant(entry) => {
                let compiled =
                    self.grok
                        .compile(pattern, true)
                        .map_err(|source| PatternError {
                            pattern: pattern.to_string(),
                            source,
                        })?;
                entry.insert(compiled)
            }
        };

        match compiled.match_against(body) {
            Some(matches) => {
                let fields = CommandFields(
                    matches
                        .iter()
                        .map(|(name, value)| (name.to_string(), value.to_string()))
                        .collect(),
                );
                Ok(MatchResult::Matched(fields))
            }
            None => Ok(MatchResult::NoMatch),
        }
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn matching_body_yields_named_fields() {
        let mut registry = PatternRegistry::new();
        let result = registry
            .extract("/deploy env=staging", "/deploy env=%{WORD:env}")
            .unwrap();

        let MatchResult::Matched(fields) = result else {
            panic!("expected a match");
        };
        assert_eq!(fields.get("env"), Some("staging"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn fields_keep_declaration_order() {
        let mut registry = PatternRegistry::new();
        let result = registry
            .extract(
                "/run build target=release",
                "/run %{WORD:action} target=%{WORD:target}",
            )
            .unwrap();

        let MatchResult::Matched(fields) = result else {
            panic!("expected a match");
        };
        let names: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["action", "target"]);
        assert_eq!(
            fields.to_json().to_string(),
            r#"{"action":"build","target":"release"}"#
        );
    }

    #[test]
    fn non_matching_body_is_no_match() {
        let mut registry = PatternRegistry::new();
        let result = registry
            .extract("hello", "/deploy env=%{WORD:env}")
            .unwrap();
        assert_eq!(result, MatchResult::NoMatch);
    }

    #[test]
    fn empty_body_is_no_match() {
        let mut registry = PatternRegistry::new();
        let result = registry.extract("", "/deploy env=%{WORD:env}").unwrap();
        assert_eq!(result, MatchResult::NoMatch);
    }

    #[test]
    fn unknown_pattern_name_is_a_configuration_error() {
        let mut registry = PatternRegistry::new();
        let err = registry
            .extract("anything", "%{NO_SUCH_PATTERN:x}")
            .unwrap_err();
        assert!(err.to_string().contains("NO_SUCH_PATTERN"));
    }

    #[test]
    fn cached_pattern_behaves_like_a_fresh_one() {
        let mut cached = PatternRegistry::new();
        // Prime the cache, then extract again with the same pattern.
        cached.extract("warm up", "/deploy env=%{WORD:env}").unwrap();
        let second = cached
            .extract("/deploy env=prod", "/deploy env=%{WORD:env}")
            .unwrap();

        let mut fresh = PatternRegistry::new();
        let first = fresh
            .extract("/deploy env=prod", "/deploy env=%{WORD:env}")
            .unwrap();

        assert_eq!(second, first);
    }

    proptest! {
        /// Matching the same (body, pattern) twice yields equivalent results.
        #[test]
        fn extraction_is_idempotent(body in "[ -~]{0,40}") {
            let mut registry = PatternRegistry::new();
            let pattern = "/deploy env=%{WORD:env}";
            let first = registry.extract(&body, pattern).unwrap();
            let second = registry.extract(&body, pattern).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
