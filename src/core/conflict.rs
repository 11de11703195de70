//! Canonical-name collision detection
//!
//! The runtime table resolves collisions silently (last registration
//! wins), which is exactly what makes them easy to ship by accident: two
//! different spellings like `"Shift-Ctrl-a"` and `"Ctrl-Shift-a"`, or
//! `"Cmd-s"` and `"Meta-s"`, collapse to one canonical name and the
//! earlier binding vanishes. This module indexes bindings by canonical
//! name so the CLI can surface those overwrites before they happen.
//!
//! # Performance
//! - Add binding: O(1) average case after normalization
//! - List all conflicts: O(n log n) where n = number of canonical names

use std::collections::HashMap;

use crate::core::normalize::{normalize_key_name, NormalizeError};
use crate::core::types::Platform;

/// Where a binding came from, for reporting.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BindingSite {
    /// The spec exactly as the user wrote it
    pub spec: String,
    /// The action name the spec was bound to
    pub action: String,
    /// 1-based source line of the declaration
    pub line: usize,
}

/// A canonical name claimed by two or more bindings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Conflict {
    /// The canonical shortcut name the spellings collapse to
    pub canonical: String,
    /// All declarations of that name, in registration order (2 or more)
    pub sites: Vec<BindingSite>,
}

/// Detects canonical-name collisions across a set of binding declarations.
pub struct ConflictDetector {
    platform: Platform,
    bindings: HashMap<String, Vec<BindingSite>>,
}

impl ConflictDetector {
    /// Create an empty detector resolving `Mod-` for the given platform.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            bindings: HashMap::new(),
        }
    }

    /// Normalize a spec and index its declaration site.
    ///
    /// Fails on a malformed spec; the offending token is reported, not
    /// swallowed, since a spec that cannot normalize can never dispatch.
    pub fn add(&mut self, spec: &str, action: &str, line: usize) -> Result<(), NormalizeError> {
        let canonical = normalize_key_name(spec, self.platform)?;
        self.bindings.entry(canonical).or_default().push(BindingSite {
            spec: spec.to_string(),
            action: action.to_string(),
            line,
        });
        Ok(())
    }

    /// All canonical names with 2 or more declarations, sorted by name.
    pub fn find_conflicts(&self) -> Vec<Conflict> {
        let mut conflicts: Vec<Conflict> = self
            .bindings
            .iter()
            .filter(|(_, sites)| sites.len() > 1)
            .map(|(canonical, sites)| Conflict {
                canonical: canonical.clone(),
                sites: sites.clone(),
            })
            .collect();
        conflicts.sort_by(|a, b| a.canonical.cmp(&b.canonical));
        conflicts
    }

    /// True when this canonical name has 2 or more declarations.
    pub fn has_conflict(&self, canonical: &str) -> bool {
        self.bindings
            .get(canonical)
            .map(|sites| sites.len() > 1)
            .unwrap_or(false)
    }

    /// Total number of declarations indexed.
    pub fn total_bindings(&self) -> usize {
        self.bindings.values().map(|v| v.len()).sum()
    }
}
