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

//! Normalization tests
//!
//! Tests for rewriting shortcut specs into canonical names:
//! - Fixed modifier prefix order and order independence
//! - Modifier alias spellings (cmd/meta/m, a/alt, c/ctrl/control, s/shift)
//! - The platform-resolved `Mod-` alias
//! - The `Space` alias and the trailing-hyphen minus key
//! - Error reporting for unrecognized modifiers
//! - Whole-map normalization with last-registration-wins

use crate::core::normalize::{normalize_bindings, normalize_key_name, NormalizeError};
use crate::core::types::Platform;

fn norm(spec: &str) -> String {
    normalize_key_name(spec, Platform::Other).unwrap()
}

#[test]
fn test_plain_key_passes_through() {
    assert_eq!(norm("a"), "a");
    assert_eq!(norm("A"), "A");
    assert_eq!(norm("Enter"), "Enter");
}

#[test]
fn test_fixed_prefix_order() {
    assert_eq!(norm("shift-alt-m-c-x"), "Alt-Ctrl-Meta-Shift-x");
    assert_eq!(norm("Ctrl-Alt-Enter"), "Alt-Ctrl-Enter");
}

#[test]
fn test_modifier_order_is_commutative() {
    assert_eq!(norm("Shift-Ctrl-a"), norm("Ctrl-Shift-a"));
    assert_eq!(norm("Shift-Ctrl-a"), "Ctrl-Shift-a");
}

#[test]
fn test_normalization_is_idempotent() {
    for spec in ["Shift-Ctrl-a", "Ctrl-Space", "Mod--", "m-a", "Enter"] {
        let once = norm(spec);
        assert_eq!(norm(&once), once, "not idempotent for {spec:?}");
    }
}

#[test]
fn test_meta_alias_spellings() {
    assert_eq!(norm("Cmd-a"), "Meta-a");
    assert_eq!(norm("Meta-a"), "Meta-a");
    assert_eq!(norm("m-a"), "Meta-a");
}

#[test]
fn test_aliases_are_case_insensitive() {
    assert_eq!(norm("CTRL-a"), "Ctrl-a");
    assert_eq!(norm("cOnTrOl-a"), "Ctrl-a");
    assert_eq!(norm("SHIFT-ALT-q"), "Alt-Shift-q");
}

#[test]
fn test_single_letter_aliases() {
    assert_eq!(norm("a-c-s-x"), "Alt-Ctrl-Shift-x");
}

#[test]
fn test_mod_alias_resolves_per_platform() {
    assert_eq!(
        normalize_key_name("Mod-a", Platform::Mac).unwrap(),
        "Meta-a"
    );
    assert_eq!(
        normalize_key_name("Mod-a", Platform::Other).unwrap(),
        "Ctrl-a"
    );
}

#[test]
fn test_space_alias() {
    assert_eq!(norm("Ctrl-Space"), "Ctrl- ");
    assert_eq!(norm("Ctrl-Space"), norm("Ctrl- "));
    assert_eq!(norm("Space"), " ");
}

#[test]
fn test_trailing_hyphen_names_the_minus_key() {
    assert_eq!(norm("Mod--"), "Ctrl--");
    assert_eq!(norm("Shift--"), "Shift--");
    assert_eq!(norm("-"), "-");
}

#[test]
fn test_duplicate_modifier_is_idempotent() {
    assert_eq!(norm("Ctrl-Ctrl-a"), "Ctrl-a");
    assert_eq!(norm("c-Control-CTRL-a"), "Ctrl-a");
}

#[test]
fn test_unrecognized_modifier_is_an_error() {
    let err = normalize_key_name("Xyz-a", Platform::Other).unwrap_err();
    assert_eq!(err, NormalizeError::UnrecognizedModifier("Xyz".to_string()));

    // An empty segment between hyphens is not a modifier either
    assert!(normalize_key_name("Ctrl--a", Platform::Other).is_err());
}

#[test]
fn test_normalize_bindings_last_registration_wins() {
    let map = normalize_bindings(
        [("Ctrl-a", "first"), ("c-a", "second")],
        Platform::Other,
    )
    .unwrap();

    assert_eq!(map.len(), 1);
    assert_eq!(map.get("Ctrl-a"), Some(&"second"));
}

#[test]
fn test_normalize_bindings_fails_fast_on_bad_spec() {
    let result = normalize_bindings(
        [("Ctrl-a", "ok"), ("Bogus-x", "bad"), ("Ctrl-b", "ok")],
        Platform::Other,
    );

    assert_eq!(
        result.unwrap_err(),
        NormalizeError::UnrecognizedModifier("Bogus".to_string())
    );
}
