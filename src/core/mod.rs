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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and algorithms
//! for shortcut dispatch, including:
//! - Type definitions for modifier sets, platforms, and key events
//! - Shortcut-spec normalization into canonical names
//! - Binding table construction and per-event dispatch
//! - Canonical-name collision detection
//!
//! All business logic is isolated from I/O and host concerns to enable
//! comprehensive unit testing without any host editor or UI framework.

pub mod conflict;
pub mod dispatch;
pub mod normalize;
pub mod types;

pub use conflict::{BindingSite, Conflict, ConflictDetector};
pub use dispatch::{BaseKeys, Handler, HostView, KeyHandler, Keymap};
pub use normalize::{normalize_bindings, normalize_key_name, NormalizeError};
pub use types::{KeyEvent, Modifiers, Platform};

#[cfg(test)]
mod tests;
