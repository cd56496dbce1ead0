//! Word-blending drill engine.
//!
//! Pure gameplay state machine: no browser APIs, no scheduled closures. The
//! host feeds it key presses and clock ticks; the engine mutates itself and
//! hands back a list of [`Action`]s (audio cues, feedback) for the host to
//! perform. Timed behavior (the blend animation) is derived from the phase's
//! own entry timestamp, so leaving a phase discards its whole timer group at
//! once and a stale callback can never touch newer state.

pub mod deck;
pub mod drill;
pub mod keybuf;

use deck::Deck;
use keybuf::KeyBuffer;

/// Spacing between blend animation steps.
pub const BLEND_STEP_MS: f64 = 1000.0;
/// Pause on the terminal "all red" step before typing begins.
pub const BLEND_HANDOFF_MS: f64 = 100.0;

/// Current step of the word drill. Typing progress and the blend animation
/// step live inside their variants, so they are created fresh on every phase
/// entry and torn down on exit.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// The learner must produce the letter at `slot` (key press or click).
    ClickLetter { slot: usize },
    /// Non-interactive staggered reveal of the first `len` letters.
    /// `step` counts letters highlighted so far; `len + 1` is the terminal
    /// all-red state.
    BlendPrefix { len: usize, entered_ms: f64, step: usize },
    /// The learner types the first `len` letters in order.
    TypePrefix { len: usize, index: usize, typed: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    TryAgain,
}

impl Verdict {
    /// Status text announced to assistive technology.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Correct => "Correct",
            Verdict::TryAgain => "Try again",
        }
    }
}

/// Side effects the host must perform on behalf of the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Pronounce a single letter sound.
    PlayLetter(char),
    /// Play the blended clip for a letter run (clip key, e.g. "DO" or "DOG").
    PlayBlend(String),
    /// Play the correct/wrong cue and show its transient status.
    Feedback(Verdict),
}

/// Per-letter visual classification, a pure function of the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterPaint {
    /// Not yet part of the drill focus.
    Idle,
    /// The letter the learner must produce now.
    Wanted,
    /// Already produced or typed.
    Done,
    /// Highlighted during the staggered blend reveal.
    Blending,
    /// Terminal all-red blend state.
    Blended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhaseKind {
    Click,
    Blend,
    Type,
}

/// Identity of a phase entry: same word, same kind, same sub-index.
/// Re-entering an identical signature must not restart audio or animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PhaseSignature {
    word_ordinal: u64,
    kind: PhaseKind,
    arg: usize,
}

pub struct WordPhaseEngine {
    deck: Deck<String>,
    word: String,
    word_ordinal: u64,
    phase: Phase,
    buffer: KeyBuffer,
    last_signature: Option<PhaseSignature>,
}

impl WordPhaseEngine {
    /// Draws the first word and enters `ClickLetter(0)`. The returned actions
    /// announce the first wanted letter.
    pub fn new(mut deck: Deck<String>, now_ms: f64) -> (Self, Vec<Action>) {
        let word = deck.draw();
        let mut engine = Self {
            deck,
            word,
            word_ordinal: 0,
            phase: Phase::ClickLetter { slot: 0 },
            buffer: KeyBuffer::new(),
            last_signature: None,
        };
        let actions = engine.enter_phase(Phase::ClickLetter { slot: 0 }, now_ms);
        (engine, actions)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// How many words have been completed since the engine started.
    pub fn words_completed(&self) -> u64 {
        self.word_ordinal
    }

    /// The letter the learner must produce now, if the phase is interactive.
    pub fn expected_letter(&self) -> Option<char> {
        match &self.phase {
            Phase::ClickLetter { slot } => self.letter_at(*slot),
            Phase::TypePrefix { len, index, .. } if index < len => self.letter_at(*index),
            _ => None,
        }
    }

    /// Letters typed so far in the current `TypePrefix` phase.
    pub fn typed(&self) -> &str {
        match &self.phase {
            Phase::TypePrefix { typed, .. } => typed,
            _ => "",
        }
    }

    /// True while the full word is being blended or typed.
    pub fn show_illustration(&self) -> bool {
        let n = self.word.chars().count();
        match &self.phase {
            Phase::BlendPrefix { len, .. } | Phase::TypePrefix { len, .. } => *len == n,
            Phase::ClickLetter { .. } => false,
        }
    }

    /// Visual classification for every letter of the current word.
    pub fn letter_paints(&self) -> Vec<LetterPaint> {
        let n = self.word.chars().count();
        (0..n)
            .map(|i| match &self.phase {
                Phase::ClickLetter { slot } => {
                    if i < *slot {
                        LetterPaint::Done
                    } else if i == *slot {
                        LetterPaint::Wanted
                    } else {
                        LetterPaint::Idle
                    }
                }
                Phase::BlendPrefix { len, step, .. } => {
                    if i >= *len {
                        LetterPaint::Idle
                    } else if *step == len + 1 {
                        LetterPaint::Blended
                    } else if i < *step {
                        LetterPaint::Blending
                    } else {
                        LetterPaint::Idle
                    }
                }
                Phase::TypePrefix { len, index, .. } => {
                    if i < *index {
                        LetterPaint::Done
                    } else if i == *index && i < *len {
                        LetterPaint::Wanted
                    } else {
                        LetterPaint::Idle
                    }
                }
            })
            .collect()
    }

    /// Input contract: one call per accepted key or alphabet-grid click.
    ///
    /// The key is recorded in the type-ahead buffer (subject to the repeat
    /// guard) and a drain pass runs immediately. A press during the
    /// non-interactive blend phase is held in the buffer only; it may be
    /// consumed once typing begins.
    pub fn submit_letter(&mut self, key: char, now_ms: f64) -> Vec<Action> {
        let key = key.to_ascii_uppercase();
        if !key.is_ascii_uppercase() {
            return Vec::new();
        }
        if !self.buffer.record(key, now_ms) {
            return Vec::new();
        }
        if !self.interactive() {
            return Vec::new();
        }
        let actions = self.drain_buffer(now_ms);
        if actions.is_empty() {
            // Nothing consumable, including the key that just arrived. It
            // stays in the buffer as a candidate for later state changes.
            return vec![Action::Feedback(Verdict::TryAgain)];
        }
        actions
    }

    /// Clock tick from the host's animation loop. Advances the blend
    /// animation and performs the timed handoff into `TypePrefix`.
    pub fn tick(&mut self, now_ms: f64) -> Vec<Action> {
        let Phase::BlendPrefix { len, entered_ms, step } = self.phase else {
            return Vec::new();
        };
        let elapsed = (now_ms - entered_ms).max(0.0);
        let due = if elapsed >= len as f64 * BLEND_STEP_MS {
            len + 1
        } else {
            // Step 1 lands with the clip start; each later step at the next
            // whole second.
            ((elapsed / BLEND_STEP_MS) as usize + 1).min(len)
        };
        if due > step {
            self.phase = Phase::BlendPrefix { len, entered_ms, step: due };
        }
        if elapsed >= len as f64 * BLEND_STEP_MS + BLEND_HANDOFF_MS {
            let mut actions = self.enter_phase(
                Phase::TypePrefix {
                    len,
                    index: 0,
                    typed: String::new(),
                },
                now_ms,
            );
            // A phase change alone can unblock keys buffered during the blend.
            actions.extend(self.drain_buffer(now_ms));
            return actions;
        }
        Vec::new()
    }

    /// Re-announces the sound for the current phase without advancing state.
    pub fn replay(&self) -> Vec<Action> {
        match &self.phase {
            Phase::ClickLetter { slot } => {
                self.letter_at(*slot).map(Action::PlayLetter).into_iter().collect()
            }
            Phase::BlendPrefix { len, .. } | Phase::TypePrefix { len, .. } => {
                vec![Action::PlayBlend(self.prefix(*len))]
            }
        }
    }

    /// Forced word reset: abandons the current word (and any pending blend
    /// schedule) and starts the next one at `ClickLetter(0)`.
    pub fn skip_word(&mut self, now_ms: f64) -> Vec<Action> {
        self.advance_word(now_ms)
    }

    fn interactive(&self) -> bool {
        matches!(
            self.phase,
            Phase::ClickLetter { .. } | Phase::TypePrefix { .. }
        )
    }

    fn letter_at(&self, idx: usize) -> Option<char> {
        self.word.chars().nth(idx)
    }

    fn prefix(&self, len: usize) -> String {
        self.word.chars().take(len).collect()
    }

    /// Scan-and-consume sweep: repeatedly consumes the oldest buffered entry
    /// matching the wanted letter until no match remains. Consuming one key
    /// changes the wanted letter, which may reveal another already-buffered
    /// match, so a fast out-of-order burst resolves in a single pass.
    fn drain_buffer(&mut self, now_ms: f64) -> Vec<Action> {
        let mut actions = Vec::new();
        while self.interactive() {
            let Some(wanted) = self.expected_letter() else {
                break;
            };
            self.buffer.purge_expired(now_ms);
            if !self.buffer.take(wanted) {
                break;
            }
            actions.push(Action::Feedback(Verdict::Correct));
            actions.extend(self.accept(wanted, now_ms));
        }
        actions
    }

    /// Applies the correct-letter transition for the current phase.
    fn accept(&mut self, ch: char, now_ms: f64) -> Vec<Action> {
        let word_len = self.word.chars().count();
        match self.phase.clone() {
            Phase::ClickLetter { slot } => {
                let next = if slot == 0 {
                    Phase::ClickLetter { slot: 1 }
                } else {
                    Phase::BlendPrefix {
                        len: slot + 1,
                        entered_ms: now_ms,
                        step: 1,
                    }
                };
                self.enter_phase(next, now_ms)
            }
            Phase::TypePrefix { len, index, mut typed } => {
                typed.push(ch);
                let index = index + 1;
                if index < len {
                    // Typing progress is not a phase entry; the drain loop
                    // re-evaluates against the new index on its own.
                    self.phase = Phase::TypePrefix { len, index, typed };
                    Vec::new()
                } else if len < word_len {
                    self.enter_phase(Phase::ClickLetter { slot: len }, now_ms)
                } else {
                    self.advance_word(now_ms)
                }
            }
            Phase::BlendPrefix { .. } => Vec::new(),
        }
    }

    fn advance_word(&mut self, now_ms: f64) -> Vec<Action> {
        self.word = self.deck.draw();
        self.word_ordinal += 1;
        self.buffer.clear();
        self.enter_phase(Phase::ClickLetter { slot: 0 }, now_ms)
    }

    /// Sole phase-transition point. Replacing `self.phase` drops the old
    /// phase's blend schedule wholesale; entry side effects are skipped when
    /// the signature matches the previous entry.
    fn enter_phase(&mut self, phase: Phase, _now_ms: f64) -> Vec<Action> {
        let signature = self.signature_of(&phase);
        if self.last_signature == Some(signature) {
            return Vec::new();
        }
        self.last_signature = Some(signature);
        self.phase = phase;
        match &self.phase {
            Phase::ClickLetter { slot } => self
                .letter_at(*slot)
                .map(Action::PlayLetter)
                .into_iter()
                .collect(),
            Phase::BlendPrefix { len, .. } => vec![Action::PlayBlend(self.prefix(*len))],
            Phase::TypePrefix { .. } => Vec::new(),
        }
    }

    fn signature_of(&self, phase: &Phase) -> PhaseSignature {
        let (kind, arg) = match phase {
            Phase::ClickLetter { slot } => (PhaseKind::Click, *slot),
            Phase::BlendPrefix { len, .. } => (PhaseKind::Blend, *len),
            Phase::TypePrefix { len, .. } => (PhaseKind::Type, *len),
        };
        PhaseSignature {
            word_ordinal: self.word_ordinal,
            kind,
            arg,
        }
    }
}
