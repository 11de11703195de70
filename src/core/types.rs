//! src/core/types.rs
//!
//! Core type definitions for shortcut dispatch
//!
//! This module defines the fundamental types used throughout the crate:
//! - `Modifiers`: The four independent modifier flags (Alt, Ctrl, Meta, Shift)
//! - `Platform`: Modifier convention used to resolve the `Mod-` alias
//! - `KeyEvent`: A host-agnostic view of one physical key press
//!
//! All plain data types implement serialization for config persistence.
//! Canonical shortcut names are produced exclusively by
//! `Modifiers::canonical_name`, which is what makes lookups by exact string
//! equality sound: every path that builds a name goes through the same
//! fixed prefix order.

use serde::{Deserialize, Serialize};

/// The four independent modifier flags of a shortcut or key event.
///
/// No ordering exists in this representation; ordering is imposed only
/// when a canonical name is rendered. Setting a flag twice is a no-op,
/// which is why duplicate modifier tokens in a spec are not an error.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Modifiers {
    /// Alt/Option key
    pub alt: bool,
    /// Control key
    pub ctrl: bool,
    /// Meta/Command/Super key
    pub meta: bool,
    /// Shift key
    pub shift: bool,
}

impl Modifiers {
    /// Render the canonical shortcut name for this modifier set and key.
    ///
    /// Prefixes are emitted in the fixed order `Alt-`, `Ctrl-`, `Meta-`,
    /// `Shift-`, each present only when its flag is set, followed by the
    /// key identifier. Two spellings that denote the same modifier set and
    /// key therefore produce byte-identical strings.
    pub fn canonical_name(&self, key: &str) -> String {
        let mut name = String::with_capacity(key.len() + 20);
        if self.alt {
            name.push_str("Alt-");
        }
        if self.ctrl {
            name.push_str("Ctrl-");
        }
        if self.meta {
            name.push_str("Meta-");
        }
        if self.shift {
            name.push_str("Shift-");
        }
        name.push_str(key);
        name
    }
}

/// Modifier convention of the host platform.
///
/// Used for exactly one thing: resolving the `Mod-` alias to `Meta-`
/// (Mac-class conventions) or `Ctrl-` (everything else). The value is
/// passed in at keymap-construction time; the core never reads ambient
/// environment state, so both conventions are testable on any machine.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Platform {
    /// Mac-class modifier conventions: `Mod-` means `Meta-`
    Mac,
    /// Everything else: `Mod-` means `Ctrl-`
    Other,
}

impl Platform {
    /// Convention of the compile target.
    ///
    /// A convenience for callers that want native behaviour; the result is
    /// still passed explicitly wherever a `Platform` is required.
    pub fn native() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Mac
        } else {
            Platform::Other
        }
    }
}

/// A host-agnostic view of one key press.
///
/// `key` is the identifier produced by the host's key-naming layer
/// (single character for printable keys, a name like `"Enter"` otherwise);
/// `code` is the raw physical key code, consulted only on the shift
/// fallback path; the modifier flags are read from the live event.
#[derive(Clone, Copy, Debug)]
pub struct KeyEvent<'a> {
    /// Base key identifier, e.g. `"a"`, `"A"`, `"!"`, `" "`, `"Enter"`
    pub key: &'a str,
    /// Raw physical key code of the event
    pub code: u32,
    /// Live modifier state of the event
    pub modifiers: Modifiers,
}

impl<'a> KeyEvent<'a> {
    /// Create a key event descriptor.
    pub fn new(key: &'a str, code: u32, modifiers: Modifiers) -> Self {
        Self {
            key,
            code,
            modifiers,
        }
    }

    /// True when the event produced a printable character.
    ///
    /// Exactly one character, and not the space character. For such keys
    /// the shift state is already baked into which character was produced
    /// (`"A"` vs `"a"`), so the dispatcher never adds an explicit `Shift-`
    /// prefix to their direct lookup name.
    pub fn is_char(&self) -> bool {
        self.key.chars().count() == 1 && self.key != " "
    }
}
