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

//! src/core/dispatch.rs
//!
//! Binding table construction and key-event dispatch
//!
//! A [`Keymap`] maps canonical shortcut names to borrowed handler
//! functions. Per event, dispatch performs at most two table lookups:
//! the direct name built from the produced key identifier, then, for
//! shifted printable characters on layouts where the unshifted key
//! differs, a fallback name built from the physical key's base identifier
//! with `Shift-` forced on. The direct attempt always runs first; the
//! first handler that returns `true` ends dispatch.
//!
//! The table is immutable after construction and dispatch mutates no
//! shared state, so a `Keymap` may be shared across threads as long as
//! the individual handlers are themselves reentrant. That property is the
//! caller's responsibility; this module does not enforce it.

use std::collections::HashMap;

use crate::core::normalize::{normalize_bindings, NormalizeError};
use crate::core::types::{KeyEvent, Modifiers, Platform};

/// Host view handle passed through to handlers.
///
/// The opaque escape hatch of the handler contract: handlers receive the
/// host's state snapshot, its dispatch capability, and the view itself.
/// All three are owned and interpreted by the host.
pub trait HostView {
    /// Immutable state snapshot handlers inspect
    type State;
    /// Callable (or other capability) handlers use to request a state
    /// transition; its effects are entirely the host's responsibility
    type Dispatch: ?Sized;

    /// Current state snapshot
    fn state(&self) -> &Self::State;

    /// Dispatch capability for this view
    fn dispatch(&self) -> &Self::Dispatch;
}

/// Handler callback type.
///
/// Returns `true` to mean "fully handled, stop propagation", `false` to
/// mean "not handled, continue". Handlers are trusted not to panic;
/// nothing is caught around their invocation.
pub type Handler<V> =
    dyn Fn(&<V as HostView>::State, &<V as HostView>::Dispatch, &V) -> bool;

/// Injected key-naming capability: unshifted identifier per physical key.
///
/// Given a raw physical key code, returns the identifier that key would
/// produce without Shift held, or `None` when unknown. Consulted only on
/// the fallback path; hosts without layout information can pass `()`.
pub trait BaseKeys {
    /// Identifier the key would produce without Shift
    fn base_key(&self, code: u32) -> Option<&str>;
}

impl BaseKeys for HashMap<u32, String> {
    fn base_key(&self, code: u32) -> Option<&str> {
        self.get(&code).map(String::as_str)
    }
}

/// No layout information; the fallback path never fires.
impl BaseKeys for () {
    fn base_key(&self, _code: u32) -> Option<&str> {
        None
    }
}

/// The installable surface of a keymap.
///
/// Hosts that stack several keymaps call them in their own order; this
/// crate supplies one dispatch function per keymap and takes no position
/// on relative precedence between keymaps.
pub trait KeyHandler<V: HostView> {
    /// Resolve and run the handler bound to this event, if any.
    fn handle_key(&self, view: &V, event: &KeyEvent<'_>) -> bool;
}

/// An immutable binding table from canonical shortcut name to handler.
///
/// Built once from user-written specs via the normalizer; holds
/// non-owning references to handlers owned by the caller. Construction is
/// fail-fast: the first malformed spec aborts the whole keymap.
pub struct Keymap<'a, V: HostView> {
    bindings: HashMap<String, &'a Handler<V>>,
    base_keys: &'a dyn BaseKeys,
}

impl<'a, V: HostView> Keymap<'a, V> {
    /// Build a keymap from `(spec, handler)` pairs.
    ///
    /// Specs are normalized eagerly; two spellings of the same shortcut
    /// overwrite each other, last one wins. `base_keys` is the injected
    /// unshifted-identifier lookup used by the fallback path.
    pub fn new<I, S>(
        bindings: I,
        platform: Platform,
        base_keys: &'a dyn BaseKeys,
    ) -> Result<Self, NormalizeError>
    where
        I: IntoIterator<Item = (S, &'a Handler<V>)>,
        S: AsRef<str>,
    {
        Ok(Self {
            bindings: normalize_bindings(bindings, platform)?,
            base_keys,
        })
    }

    /// Number of distinct canonical bindings in the table.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Resolve a key event and run the first matching handler.
    ///
    /// Returns `true` if some handler both matched and reported the event
    /// handled. Missing bindings and events this keymap does not care
    /// about are ordinary `false` outcomes, never errors.
    pub fn dispatch(&self, view: &V, event: &KeyEvent<'_>) -> bool {
        let is_char = event.is_char();

        // For printable characters the produced identifier already encodes
        // the shift state, so the direct name omits the Shift- prefix.
        let direct = event_name(event.key, event, !is_char && event.modifiers.shift);
        if let Some(handler) = self.bindings.get(&direct) {
            if handler(view.state(), view.dispatch(), view) {
                return true;
            }
        }

        // Layout fallback: Shift plus a physical key produced a character
        // whose unshifted identity carries the binding (e.g. Shift-1 on
        // layouts where that types a symbol).
        if event.modifiers.shift && is_char {
            if let Some(base) = self.base_keys.base_key(event.code) {
                if base != event.key {
                    let fallback = event_name(base, event, true);
                    if let Some(handler) = self.bindings.get(&fallback) {
                        if handler(view.state(), view.dispatch(), view) {
                            return true;
                        }
                    }
                }
            }
        }

        false
    }
}

impl<V: HostView> KeyHandler<V> for Keymap<'_, V> {
    fn handle_key(&self, view: &V, event: &KeyEvent<'_>) -> bool {
        self.dispatch(view, event)
    }
}

/// Lookup name for `key` under the event's Alt/Ctrl/Meta flags, with the
/// Shift prefix decided by the caller.
fn event_name(key: &str, event: &KeyEvent<'_>, shift: bool) -> String {
    Modifiers {
        shift,
        ..event.modifiers
    }
    .canonical_name(key)
}
