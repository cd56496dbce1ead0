//! Type-ahead key buffer.
//!
//! A child typing quickly often presses the next letter before the UI has
//! advanced. Keystrokes are therefore kept in a short-lived ring buffer and
//! re-checked against the currently wanted letter whenever the drill state
//! changes, not only at the instant of the press.

use std::collections::VecDeque;

/// Maximum retained keystrokes; the oldest entry is evicted beyond this.
pub const CAPACITY: usize = 16;
/// Keystrokes older than this are never matched.
pub const TTL_MS: f64 = 3000.0;
/// Consecutive identical keys inside this window are treated as one press.
pub const REPEAT_GUARD_MS: f64 = 30.0;

#[derive(Debug, Clone, Copy)]
struct Entry {
    key: char,
    at_ms: f64,
}

/// Bounded ring of recent `{key, timestamp}` pairs in arrival order.
#[derive(Debug, Default)]
pub struct KeyBuffer {
    entries: VecDeque<Entry>,
    // Kept apart from the ring: the guard must still hold after the matched
    // entry has been consumed by a drain pass.
    last_recorded: Option<Entry>,
}

impl KeyBuffer {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(CAPACITY),
            last_recorded: None,
        }
    }

    /// Records a key press. Returns `false` when the repeat guard drops it
    /// (same key as the most recently recorded one, within the guard window).
    pub fn record(&mut self, key: char, now_ms: f64) -> bool {
        if let Some(last) = self.last_recorded {
            if last.key == key && now_ms - last.at_ms < REPEAT_GUARD_MS {
                return false;
            }
        }
        if self.entries.len() == CAPACITY {
            self.entries.pop_front();
        }
        let entry = Entry { key, at_ms: now_ms };
        self.entries.push_back(entry);
        self.last_recorded = Some(entry);
        true
    }

    /// Drops entries older than [`TTL_MS`]. Called before every scan so an
    /// expired keystroke can never be resurrected.
    pub fn purge_expired(&mut self, now_ms: f64) {
        self.entries.retain(|e| now_ms - e.at_ms < TTL_MS);
    }

    /// Removes the oldest entry equal to `wanted`, if any. Entries that do
    /// not match stay put; they may become valid after a later state change.
    pub fn take(&mut self, wanted: char) -> bool {
        if let Some(idx) = self.entries.iter().position(|e| e.key == wanted) {
            self.entries.remove(idx);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.last_recorded = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
