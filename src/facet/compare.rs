// Copyright (c) 2025 - Cowboy AI, Inc.
//! Comparator
//!
//! Plain structural equality between two remote-shape values, apart from an
//! exclusion list of keys filled in by the platform's reference resolution.
//! Excluded keys are skipped at every depth, whatever their value.
//!
//! Values are compared through their serialized form:
//!
//! - Objects compare key by key (union of both key sets, minus exclusions)
//! - Arrays compare element by element, in order; a length mismatch is a
//!   difference without looking at any element
//! - `null`, absent keys and empty arrays are all distinct; the projector is
//!   responsible for rendering a canonical shape

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

/// Structural comparator with excluded keys
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparator {
    ignored: &'static [&'static str],
}

impl Comparator {
    /// Comparator skipping the given keys
    pub const fn ignoring(ignored: &'static [&'static str]) -> Self {
        Self { ignored }
    }

    /// Whether `desired` and `observed` are structurally equal
    pub fn equal<T: Serialize + ?Sized>(&self, desired: &T, observed: &T) -> bool {
        self.first_difference(desired, observed).is_none()
    }

    /// Path of the first difference, or `None` when equal
    ///
    /// Paths look like `$.TargetGrants[1].Permission`; a length mismatch is
    /// reported as `$.TargetGrants.length`.
    pub fn first_difference<T: Serialize + ?Sized>(
        &self,
        desired: &T,
        observed: &T,
    ) -> Option<String> {
        match (serde_json::to_value(desired), serde_json::to_value(observed)) {
            (Ok(desired), Ok(observed)) => self.diff(&desired, &observed, "$"),
            // Unserializable values never count as equal
            _ => Some("$".to_string()),
        }
    }

    fn diff(&self, desired: &Value, observed: &Value, path: &str) -> Option<String> {
        match (desired, observed) {
            (Value::Object(left), Value::Object(right)) => {
                let keys: BTreeSet<&String> = left
                    .keys()
                    .chain(right.keys())
                    .filter(|key| !self.ignored.contains(&key.as_str()))
                    .collect();
                keys.into_iter().find_map(|key| {
                    let child = format!("{path}.{key}");
                    match (left.get(key), right.get(key)) {
                        (Some(l), Some(r)) => self.diff(l, r, &child),
                        _ => Some(child),
                    }
                })
            }
            (Value::Array(left), Value::Array(right)) => {
                if left.len() != right.len() {
                    return Some(format!("{path}.length"));
                }
                left.iter()
                    .zip(right)
                    .enumerate()
                    .find_map(|(index, (l, r))| self.diff(l, r, &format!("{path}[{index}]")))
            }
            (left, right) if left == right => None,
            _ => Some(path.to_string()),
        }
    }
}
