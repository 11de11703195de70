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

//! Keymap Dispatch
//!
//! Host-agnostic keyboard shortcut keymaps: bind human-written shortcut
//! names to handler functions and resolve, per physical key press, which
//! bound handler (if any) consumes the event.
//!
//! # Features
//!
//! - **Canonical names:** Specs like `"Shift-Ctrl-a"` and `"c-s-a"`
//!   collapse to one fixed-order canonical name; lookup is exact string
//!   equality
//! - **Layout fallback:** Characters produced by holding Shift on non-US
//!   layouts fall back to their unshifted key with an explicit `Shift-`
//!   token
//! - **Injected platform:** The `Mod-` alias resolves to `Meta-` or
//!   `Ctrl-` from a value passed at construction, never from ambient
//!   environment state
//! - **Conflict Detection:** Spellings that silently overwrite each other
//!   are reported before they ship
//! - **Keymap files:** A small declaration format with aliases and
//!   comments, plus a CLI to check and list it
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, normalization, dispatch, conflict
//!   detection)
//! - **`config`:** Keymap declaration files (parsing, loading)
//!
//! Handlers receive `(state, dispatch, view)` from the host and return
//! `true` to consume the event. The binding table borrows its handlers
//! and is immutable after construction; sharing it across threads is
//! safe exactly when the handlers themselves are.
//!
//! # Examples
//!
//! ## Normalizing a shortcut name
//!
//! ```
//! use keymap_dispatch::core::{normalize_key_name, Platform};
//!
//! let name = normalize_key_name("Shift-Ctrl-Space", Platform::Other)?;
//! assert_eq!(name, "Ctrl-Shift- ");
//! # Ok::<(), keymap_dispatch::core::NormalizeError>(())
//! ```
//!
//! ## Building a keymap and dispatching an event
//!
//! ```
//! use keymap_dispatch::core::{Handler, HostView, KeyEvent, Keymap, Modifiers, Platform};
//!
//! struct View {
//!     state: (),
//! }
//!
//! impl HostView for View {
//!     type State = ();
//!     type Dispatch = ();
//!
//!     fn state(&self) -> &() {
//!         &self.state
//!     }
//!
//!     fn dispatch(&self) -> &() {
//!         &()
//!     }
//! }
//!
//! let save = |_: &(), _: &(), _: &View| true;
//! let keymap = Keymap::new(
//!     [("Mod-s", &save as &Handler<View>)],
//!     Platform::Other,
//!     &(), // no layout table; the shift fallback never fires
//! )?;
//!
//! let event = KeyEvent::new(
//!     "s",
//!     83,
//!     Modifiers {
//!         ctrl: true,
//!         ..Default::default()
//!     },
//! );
//! assert!(keymap.dispatch(&View { state: () }, &event));
//! # Ok::<(), keymap_dispatch::core::NormalizeError>(())
//! ```

pub mod config;
pub mod core;

// Re-export commonly used types for convenience
pub use core::{KeyEvent, Keymap, Modifiers, NormalizeError, Platform};
