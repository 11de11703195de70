// Copyright 2025 keymap-dispatch contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/normalize.rs
//!
//! Shortcut name normalization
//!
//! Human-written shortcut specs like `"Shift-Ctrl-a"`, `"cmd-Space"` or
//! `"Mod--"` are rewritten into the canonical `Alt-Ctrl-Meta-Shift-<key>`
//! form used as the lookup key for dispatch. Recognized modifier spellings
//! (case-insensitive):
//!
//! - Meta: `cmd`, `meta`, `m`
//! - Alt: `a`, `alt`
//! - Ctrl: `c`, `ctrl`, `control`
//! - Shift: `s`, `shift`
//! - `mod`: `Meta` on Mac-class platforms, `Ctrl` elsewhere
//!
//! `"Space"` is accepted as an alias for the literal `" "` key identifier,
//! and a trailing `-` names the minus key itself (`"Mod--"`).

use std::collections::HashMap;
use thiserror::Error;

use crate::core::types::{Modifiers, Platform};

/// Normalization errors
///
/// Raised synchronously while a keymap is being built; there are no
/// dispatch-time errors.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum NormalizeError {
    /// A non-final hyphen-delimited segment is not a recognized modifier
    #[error("Unrecognized modifier name '{0}'")]
    UnrecognizedModifier(String),
}

/// Split a spec on `-`, except a `-` immediately before end-of-string.
///
/// The exception lets a literal `-` act as the key identifier, so
/// `"Mod--"` splits into `["Mod", "-"]` rather than mis-splitting.
fn split_spec(spec: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, b) in spec.bytes().enumerate() {
        if b == b'-' && i + 1 < spec.len() {
            parts.push(&spec[start..i]);
            start = i + 1;
        }
    }
    parts.push(&spec[start..]);
    parts
}

/// Normalize one shortcut spec into its canonical name.
///
/// All segments except the last are modifier tokens; the last segment is
/// the key identifier. Naming the same modifier twice is idempotent, not
/// an error. Fails with [`NormalizeError::UnrecognizedModifier`] on any
/// token that matches none of the recognized spellings.
///
/// # Example
/// ```
/// use keymap_dispatch::core::{normalize_key_name, Platform};
///
/// let name = normalize_key_name("Shift-Ctrl-a", Platform::Other)?;
/// assert_eq!(name, "Ctrl-Shift-a");
/// # Ok::<(), keymap_dispatch::core::NormalizeError>(())
/// ```
pub fn normalize_key_name(spec: &str, platform: Platform) -> Result<String, NormalizeError> {
    let parts = split_spec(spec);
    let (key, tokens) = match parts.split_last() {
        Some((key, tokens)) => (*key, tokens),
        None => (spec, &[] as &[&str]),
    };
    let key = if key == "Space" { " " } else { key };

    let mut mods = Modifiers::default();
    for token in tokens {
        match token.to_ascii_lowercase().as_str() {
            "cmd" | "meta" | "m" => mods.meta = true,
            "a" | "alt" => mods.alt = true,
            "c" | "ctrl" | "control" => mods.ctrl = true,
            "s" | "shift" => mods.shift = true,
            "mod" => match platform {
                Platform::Mac => mods.meta = true,
                Platform::Other => mods.ctrl = true,
            },
            _ => return Err(NormalizeError::UnrecognizedModifier(token.to_string())),
        }
    }

    Ok(mods.canonical_name(key))
}

/// Normalize every key of a binding map.
///
/// Later entries overwrite earlier ones when two spellings collapse to the
/// same canonical name (last-registration-wins). The first malformed spec
/// fails the whole construction; no partial table is produced.
pub fn normalize_bindings<S, H>(
    bindings: impl IntoIterator<Item = (S, H)>,
    platform: Platform,
) -> Result<HashMap<String, H>, NormalizeError>
where
    S: AsRef<str>,
{
    let mut map = HashMap::new();
    for (spec, handler) in bindings {
        map.insert(normalize_key_name(spec.as_ref(), platform)?, handler);
    }
    Ok(map)
}
