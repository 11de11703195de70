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

//! src/config/mod.rs
//!
//! Keymap declaration files
//!
//! A keymap file declares bindings as `bind = <shortcut-spec>, <action>`
//! lines, with `#` comments and `$name = value` alias definitions. The
//! file layer only reads and structures data; normalization and conflict
//! checking happen in the core after parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub mod parser;

pub use parser::{parse_keymap, ParseError};

/// One binding declaration from a keymap file.
///
/// The spec is kept exactly as written (after alias expansion); callers
/// normalize it through the core when they need the canonical name.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Binding {
    /// Shortcut spec as written, e.g. `"Mod-Shift-s"`
    pub spec: String,

    /// Action name the shortcut is bound to, e.g. `"save_as"`
    pub action: String,

    /// 1-based line number of the declaration (for error reporting)
    pub line: usize,
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bind = {}, {}", self.spec, self.action)
    }
}

/// Read and parse a keymap file from disk.
pub fn load_keymap_file(path: &Path) -> Result<Vec<Binding>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parser::parse_keymap(&content)
}

#[cfg(test)]
mod tests;
