//! Undo/redo keyboard shortcuts
//!
//! Bindings: `Ctrl/Cmd+Z` undo, `Ctrl/Cmd+Y` or `Ctrl/Cmd+Shift+Z` redo.
//!
//! A session registers its listener with a [`ShortcutRegistry`] for as long
//! as it holds the returned [`ShortcutGuard`]. Dropping the guard releases the
//! registration, however many history changes happened in between.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutAction {
    Undo,
    Redo,
}

/// One key press with its modifiers. `key` is stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyChord {
    pub key: char,
    #[serde(default)]
    pub ctrl: bool,
    /// Cmd on macOS
    #[serde(default)]
    pub meta: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub alt: bool,
}

impl KeyChord {
    pub fn new(key: char) -> Self {
        Self { key: key.to_ascii_lowercase(), ctrl: false, meta: false, shift: false, alt: false }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Undo/redo binding for this chord, if any
    pub fn action(&self) -> Option<ShortcutAction> {
        if !(self.ctrl || self.meta) {
            return None;
        }
        match (self.key, self.shift) {
            ('z', false) => Some(ShortcutAction::Undo),
            ('z', true) | ('y', _) => Some(ShortcutAction::Redo),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseChordError {
    #[error("empty key chord")]
    Empty,
    #[error("unknown modifier: {0}")]
    UnknownModifier(String),
    #[error("key must be a single character, got {0:?}")]
    InvalidKey(String),
}

impl FromStr for KeyChord {
    type Err = ParseChordError;

    /// Parses `"Ctrl+Shift+Z"`, `"Cmd+Y"`, `"meta+z"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('+').map(str::trim).filter(|p| !p.is_empty()).collect();
        let Some((key, modifiers)) = parts.split_last() else {
            return Err(ParseChordError::Empty);
        };

        let mut chars = key.chars();
        let (Some(k), None) = (chars.next(), chars.next()) else {
            return Err(ParseChordError::InvalidKey(key.to_string()));
        };

        let mut chord = KeyChord::new(k);
        for modifier in modifiers {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => chord.ctrl = true,
                "cmd" | "command" | "meta" | "super" => chord.meta = true,
                "shift" => chord.shift = true,
                "alt" | "option" => chord.alt = true,
                other => return Err(ParseChordError::UnknownModifier(other.to_string())),
            }
        }
        Ok(chord)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.meta {
            write!(f, "Cmd+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        write!(f, "{}", self.key.to_ascii_uppercase())
    }
}

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u64,
    active: Vec<u64>,
}

/// Table of live shortcut listeners for one window / surface.
///
/// Cloning shares the same table.
#[derive(Debug, Default, Clone)]
pub struct ShortcutRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. The registration lives until the guard is dropped.
    pub fn acquire(&self) -> ShortcutGuard {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.active.push(id);
        log::debug!("Shortcut listener {} registered ({} active)", id, inner.active.len());
        ShortcutGuard { registry: self.clone(), id }
    }

    pub fn active_listeners(&self) -> usize {
        self.inner.borrow().active.len()
    }

    fn is_registered(&self, id: u64) -> bool {
        self.inner.borrow().active.contains(&id)
    }

    fn release(&self, id: u64) {
        let mut inner = self.inner.borrow_mut();
        inner.active.retain(|&active| active != id);
        log::debug!("Shortcut listener {} released ({} active)", id, inner.active.len());
    }
}

/// Live shortcut registration; released on drop.
#[derive(Debug)]
pub struct ShortcutGuard {
    registry: ShortcutRegistry,
    id: u64,
}

impl ShortcutGuard {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.registry.is_registered(self.id)
    }

    /// Action bound to `chord` while this listener is registered
    pub fn resolve(&self, chord: &KeyChord) -> Option<ShortcutAction> {
        if !self.is_active() {
            return None;
        }
        chord.action()
    }
}

impl Drop for ShortcutGuard {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}
