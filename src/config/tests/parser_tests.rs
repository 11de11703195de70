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

//! Parser module tests
//!
//! Tests for parsing keymap declaration files:
//! - Bind line parsing
//! - Comment and blank line handling
//! - Alias substitution
//! - Error line numbers
//! - Loading from disk

use crate::config::{load_keymap_file, parse_keymap, parser::parse_bind_line, ParseError};
use std::io::Write;

#[test]
fn test_parse_bind_line() {
    let (_, (spec, action)) = parse_bind_line("bind = Mod-s, save").unwrap();
    assert_eq!(spec, "Mod-s");
    assert_eq!(action, "save");

    let (_, (spec, action)) = parse_bind_line("bind=Ctrl-Shift-p,command_palette").unwrap();
    assert_eq!(spec, "Ctrl-Shift-p");
    assert_eq!(action, "command_palette");
}

#[test]
fn test_parse_bind_line_minus_key() {
    let (_, (spec, _)) = parse_bind_line("bind = Mod--, zoom_out").unwrap();
    assert_eq!(spec, "Mod--");
}

#[test]
fn test_parse_keymap_skips_comments_and_blanks() {
    let content = "\
# editor shortcuts

bind = Mod-s, save
   # indented comment
bind = Mod-Shift-s, save_as
";
    let bindings = parse_keymap(content).unwrap();
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0].spec, "Mod-s");
    assert_eq!(bindings[0].line, 3);
    assert_eq!(bindings[1].action, "save_as");
    assert_eq!(bindings[1].line, 5);
}

#[test]
fn test_alias_substitution() {
    let content = "\
$mod = Ctrl-Shift
bind = $mod-p, command_palette
bind = $mod-f, find_in_files
";
    let bindings = parse_keymap(content).unwrap();
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0].spec, "Ctrl-Shift-p");
    assert_eq!(bindings[1].spec, "Ctrl-Shift-f");
}

#[test]
fn test_alias_defined_after_use_still_applies() {
    // Aliases are collected in a first pass over the whole file.
    let content = "bind = $mod-s, save\n$mod = Meta\n";
    let bindings = parse_keymap(content).unwrap();
    assert_eq!(bindings[0].spec, "Meta-s");
}

#[test]
fn test_invalid_line_reports_line_number() {
    let content = "bind = Mod-s, save\nnot a binding\n";
    let err = parse_keymap(content).unwrap_err();
    match err {
        ParseError::InvalidSyntax { line, .. } => assert_eq!(line, 2),
        other => panic!("expected InvalidSyntax, got {other:?}"),
    }
}

#[test]
fn test_bind_line_without_action_is_invalid() {
    let err = parse_keymap("bind = Mod-s\n").unwrap_err();
    assert!(matches!(err, ParseError::InvalidSyntax { line: 1, .. }));
}

#[test]
fn test_load_keymap_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# test keymap").unwrap();
    writeln!(file, "bind = Ctrl-Space, autocomplete").unwrap();
    file.flush().unwrap();

    let bindings = load_keymap_file(file.path()).unwrap();
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].spec, "Ctrl-Space");
    assert_eq!(bindings[0].action, "autocomplete");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_keymap_file(&dir.path().join("missing.keymap")).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}

#[test]
fn test_binding_display_round_trips_the_source_form() {
    let bindings = parse_keymap("bind = Mod-s, save\n").unwrap();
    assert_eq!(format!("{}", bindings[0]), "bind = Mod-s, save");
}
