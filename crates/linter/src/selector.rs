//! Selector evaluation for rule options that address part of a document.
//!
//! Supports the small selector algebra rule options use: an optional `$`
//! root, dot and bracket property access, numeric array indices, and the
//! `@key` pseudo-segment that matches the key a value sits under rather
//! than the value itself. Deliberately implemented as an explicit
//! tokenizer/evaluator so the behavior stays auditable.

use crate::diagnostics::PathSegment;
use serde_json::Value;

/// A `(path, value)` pair produced by evaluating a selector.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetMatch {
    /// Path of the matched location relative to the evaluated value.
    pub path: Vec<PathSegment>,
    /// The matched value; `Null` when the selector walked off the tree.
    /// For `@key` segments this is the key name itself.
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Name(String),
    Index(usize),
    /// The `@key` pseudo-segment.
    Key,
}

fn flush(buf: &mut String, tokens: &mut Vec<Token>) {
    if buf.is_empty() {
        return;
    }
    if buf == "@key" {
        tokens.push(Token::Key);
    } else {
        tokens.push(Token::Name(std::mem::take(buf)));
    }
    buf.clear();
}

fn tokenize(selector: &str) -> Vec<Token> {
    let trimmed = selector.trim();
    let rest = trimmed.strip_prefix('$').unwrap_or(trimmed);

    let mut tokens = Vec::new();
    let mut buf = String::new();
    let mut chars = rest.chars();
    while let Some(c) = chars.next() {
        match c {
            '.' => flush(&mut buf, &mut tokens),
            '[' => {
                flush(&mut buf, &mut tokens);
                let mut inner = String::new();
                for c in chars.by_ref() {
                    if c == ']' {
                        break;
                    }
                    inner.push(c);
                }
                let inner = inner.trim();
                let unquoted = inner
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .or_else(|| inner.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')));
                if let Some(name) = unquoted {
                    tokens.push(Token::Name(name.to_string()));
                } else if let Ok(index) = inner.parse::<usize>() {
                    tokens.push(Token::Index(index));
                } else if !inner.is_empty() {
                    tokens.push(Token::Name(inner.to_string()));
                }
            }
            _ => buf.push(c),
        }
    }
    flush(&mut buf, &mut tokens);
    tokens
}

/// Evaluate `selector` against `value`, returning every matched location.
///
/// An empty selector or a bare `$` matches the whole value at the empty
/// path. A property walk that leaves the tree still yields one match with
/// the full tokenized path and a `Null` value; `@key` over a non-object
/// yields no matches.
#[must_use]
pub fn lint_targets(value: &Value, selector: &str) -> Vec<TargetMatch> {
    let tokens = tokenize(selector);

    let mut matches: Vec<(Vec<PathSegment>, Option<Value>)> =
        vec![(Vec::new(), Some(value.clone()))];
    for token in &tokens {
        let mut next = Vec::new();
        for (path, current) in matches {
            match token {
                Token::Name(name) => {
                    let child = current.as_ref().and_then(|v| v.get(name.as_str())).cloned();
                    let mut path = path;
                    path.push(PathSegment::Key(name.clone()));
                    next.push((path, child));
                }
                Token::Index(index) => {
                    let child = current.as_ref().and_then(|v| v.get(*index)).cloned();
                    let mut path = path;
                    path.push(PathSegment::Index(*index));
                    next.push((path, child));
                }
                Token::Key => {
                    if let Some(Value::Object(map)) = current {
                        for key in map.keys() {
                            let mut key_path = path.clone();
                            key_path.push(PathSegment::Key(key.clone()));
                            next.push((key_path, Some(Value::String(key.clone()))));
                        }
                    }
                }
            }
        }
        matches = next;
    }

    matches
        .into_iter()
        .map(|(path, value)| TargetMatch {
            path,
            value: value.unwrap_or(Value::Null),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::dotted;
    use serde_json::json;

    #[test]
    fn empty_and_root_selectors_match_whole_value() {
        let value = json!({"info": {"title": "Pets"}});
        for selector in ["", "$", "  $  "] {
            let targets = lint_targets(&value, selector);
            assert_eq!(targets.len(), 1);
            assert!(targets[0].path.is_empty());
            assert_eq!(targets[0].value, value);
        }
    }

    #[test]
    fn dotted_selector_walks_properties() {
        let value = json!({"info": {"x-api-type": "pygeoapi"}});
        let targets = lint_targets(&value, "info.x-api-type");
        assert_eq!(targets.len(), 1);
        assert_eq!(dotted(&targets[0].path), "info.x-api-type");
        assert_eq!(targets[0].value, json!("pygeoapi"));
    }

    #[test]
    fn jsonpath_style_bracket_selector() {
        let value = json!({"metadata": {"x-api-type": "pygeoapi"}});
        let targets = lint_targets(&value, "$.metadata[\"x-api-type\"]");
        assert_eq!(targets.len(), 1);
        assert_eq!(dotted(&targets[0].path), "metadata.x-api-type");
        assert_eq!(targets[0].value, json!("pygeoapi"));
    }

    #[test]
    fn single_quoted_bracket_and_index() {
        let value = json!({"servers": [{"url": "https://example.test"}]});
        let targets = lint_targets(&value, "$['servers'][0].url");
        assert_eq!(targets.len(), 1);
        assert_eq!(dotted(&targets[0].path), "servers.0.url");
        assert_eq!(targets[0].value, json!("https://example.test"));
    }

    #[test]
    fn at_key_matches_every_object_key() {
        let value = json!({"pygeoapi": true, "standard": true});
        let targets = lint_targets(&value, "@key");
        assert_eq!(targets.len(), 2);
        let values: Vec<_> = targets.iter().map(|t| t.value.clone()).collect();
        assert!(values.contains(&json!("pygeoapi")));
        assert!(values.contains(&json!("standard")));
        let hit = targets
            .iter()
            .find(|t| t.value == json!("pygeoapi"))
            .unwrap();
        assert_eq!(dotted(&hit.path), "pygeoapi");
    }

    #[test]
    fn at_key_after_property_walk() {
        let value = json!({"paths": {"/": {}, "/pets": {}}});
        let targets = lint_targets(&value, "paths.@key");
        assert_eq!(targets.len(), 2);
        assert!(targets.iter().any(|t| t.value == json!("/pets")));
    }

    #[test]
    fn at_key_over_non_object_matches_nothing() {
        let value = json!("pygeoapi");
        assert!(lint_targets(&value, "@key").is_empty());
    }

    #[test]
    fn missing_property_yields_null_at_full_path() {
        let value = json!({"metadata": {}});
        let targets = lint_targets(&value, "$.metadata[\"x-api-type\"]");
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].value, Value::Null);
        assert_eq!(dotted(&targets[0].path), "metadata.x-api-type");
    }
}
