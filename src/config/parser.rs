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

//! src/config/parser.rs
//!
//! Keymap file parser
//!
//! Parses keymap declaration files into [`Binding`] records. Handles:
//! - `bind = <spec>, <action>` lines
//! - Alias substitution (`$leader = Ctrl-x`, then `bind = $leader-s, ...`)
//! - Comments and whitespace
//! - Line numbers for error reporting
//!
//! # Architecture
//! Bind lines are parsed with nom combinators. Parsing is two-pass:
//! 1. First pass: collect alias definitions
//! 2. Second pass: parse bind lines with aliases expanded
//!
//! The parser only reads and structures data; whether a spec actually
//! normalizes is the core's concern and is checked after parsing.

use nom::{
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, space0},
    IResult, Parser,
};
use std::collections::HashMap;
use thiserror::Error;

use crate::config::Binding;

/// Parse errors with line number context
#[derive(Debug, Error)]
pub enum ParseError {
    /// A non-blank, non-comment line is not a valid bind declaration
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    /// The keymap file could not be read
    #[error("IO error reading keymap: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a complete keymap file.
///
/// Returns the bind declarations in file order, or the first syntax
/// error with its 1-based line number.
///
/// # Example
/// ```
/// use keymap_dispatch::config::parse_keymap;
///
/// let bindings = parse_keymap("$mod = Ctrl-Shift\nbind = $mod-p, command_palette\n")?;
/// assert_eq!(bindings[0].spec, "Ctrl-Shift-p");
/// # Ok::<(), keymap_dispatch::config::ParseError>(())
/// ```
pub fn parse_keymap(content: &str) -> Result<Vec<Binding>, ParseError> {
    let aliases = collect_aliases(content);

    let mut bindings = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('$') {
            continue;
        }

        let expanded = expand_aliases(trimmed, &aliases);
        match parse_bind_line(&expanded) {
            Ok((_, (spec, action))) => bindings.push(Binding {
                spec,
                action,
                line: line_num,
            }),
            Err(e) => {
                return Err(ParseError::InvalidSyntax {
                    line: line_num,
                    message: format!("{:?}", e),
                });
            }
        }
    }

    Ok(bindings)
}

/// Collect alias definitions of the form `$name = value`.
fn collect_aliases(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('$'))
        .filter_map(|line| {
            let (name, value) = line[1..].split_once('=')?;
            Some((name.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Replace each `$name` occurrence with its alias value.
fn expand_aliases(line: &str, aliases: &HashMap<String, String>) -> String {
    aliases.iter().fold(line.to_string(), |acc, (name, value)| {
        acc.replace(&format!("${name}"), value)
    })
}

/// Parse a single bind line.
///
/// Format: `bind = SPEC, ACTION`
/// Example: `bind = Mod-Shift-s, save_as`
pub fn parse_bind_line(input: &str) -> IResult<&str, (String, String)> {
    let (input, _) = (tag("bind"), space0, char('='), space0).parse(input)?;
    let (input, spec) = take_until(",")(input)?;
    let (input, _) = (char(','), space0).parse(input)?;
    let (input, action) = take_while1(|c: char| c != '\n')(input)?;

    Ok((input, (spec.trim().to_string(), action.trim().to_string())))
}
