// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cross-object references
//!
//! A desired-state field may be filled indirectly by naming another object
//! ([`Reference`]) or by selecting one by labels ([`Selector`]). The platform
//! resolves these into the concrete field value; facets never send them to
//! the remote API and the comparator always ignores them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reference to another object by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Name of the referenced object
    pub name: String,
}

/// Label selector for another object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    /// Labels the referenced object must carry
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub match_labels: BTreeMap<String, String>,

    /// Only select objects sharing this object's controller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_controller: Option<bool>,
}
