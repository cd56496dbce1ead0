//! Audio cues with graceful degradation.
//!
//! Playback never fails outward: a clip is tried as ogg, then mp3, then (for
//! letters) synthesized speech, and if even speech is unavailable the game
//! simply continues silently. One owned element per sound category (clip,
//! letter, feedback) so a new request stops the previous one instead of
//! stacking, and nothing lives in module-level statics.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlAudioElement, SpeechSynthesisUtterance, window};

use crate::LETTER_VOICES;
use crate::engine::Verdict;

const CLIP_BASE: &str = "audio";
/// Feedback cues play quieter so they never drown a letter pronunciation.
const FEEDBACK_VOLUME: f64 = 0.4;
const SPEECH_RATE: f32 = 0.85;

pub struct GameAudio {
    clip: Option<HtmlAudioElement>,
    letter: Option<HtmlAudioElement>,
    feedback: Option<HtmlAudioElement>,
}

impl GameAudio {
    pub fn new() -> Self {
        Self {
            clip: None,
            letter: None,
            feedback: None,
        }
    }

    /// Plays a named clip (e.g. a blended prefix like "DO" or "DOG").
    pub fn play_clip(&mut self, name: &str) {
        if let Some(old) = self.clip.take() {
            let _ = old.pause();
        }
        self.clip = play_with_fallback(&name.to_ascii_lowercase(), None);
    }

    /// Pronounces a single letter, falling back to synthesized speech when no
    /// audio asset is available.
    pub fn play_letter(&mut self, ch: char) {
        if let Some(old) = self.letter.take() {
            let _ = old.pause();
        }
        let key = ch.to_ascii_lowercase().to_string();
        self.letter = play_with_fallback(&key, Some(ch));
    }

    /// Fire-and-forget correct/wrong cue. Re-triggering rewinds the playing
    /// cue instead of layering a second one.
    pub fn play_feedback(&mut self, verdict: Verdict) {
        let name = match verdict {
            Verdict::Correct => "correct",
            Verdict::TryAgain => "wrong",
        };
        if let Some(el) = &self.feedback {
            if el.src().contains(name) {
                el.set_current_time(0.0);
                let _ = el.play();
                return;
            }
            let _ = el.pause();
        }
        if let Ok(el) = HtmlAudioElement::new_with_src(&format!("{CLIP_BASE}/{name}.ogg")) {
            el.set_volume(FEEDBACK_VOLUME);
            let _ = el.play();
            self.feedback = Some(el);
        }
    }
}

impl Default for GameAudio {
    fn default() -> Self {
        Self::new()
    }
}

/// Starts playback of `<base>/<name>.ogg`; a load/decode error retries the
/// mp3 encoding, and a second error hands off to speech (letters only).
fn play_with_fallback(name: &str, speech_letter: Option<char>) -> Option<HtmlAudioElement> {
    let el = match HtmlAudioElement::new_with_src(&format!("{CLIP_BASE}/{name}.ogg")) {
        Ok(el) => el,
        Err(_) => {
            if let Some(ch) = speech_letter {
                speak_letter(ch);
            }
            return None;
        }
    };
    let mp3 = format!("{CLIP_BASE}/{name}.mp3");
    let handle = el.clone();
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        if handle.src().ends_with(".ogg") {
            handle.set_src(&mp3);
            let _ = handle.play();
        } else {
            web_sys::console::warn_1(&JsValue::from_str(
                "phonics-play: no audio asset, falling back to speech",
            ));
            if let Some(ch) = speech_letter {
                speak_letter(ch);
            }
        }
    }) as Box<dyn FnMut(_)>);
    let _ = el.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
    closure.forget();
    let _ = el.play();
    Some(el)
}

/// Speaks the letter's name and phonic sound from the fixed pronunciation
/// table. Silent when the environment has no speech synthesis.
fn speak_letter(ch: char) {
    let Some(win) = window() else { return };
    let Ok(synth) = win.speech_synthesis() else {
        return;
    };
    let text = LETTER_VOICES
        .iter()
        .find(|(letter, _, _)| *letter == ch)
        .map(|(_, name, sound)| format!("{name}. {sound}."))
        .unwrap_or_else(|| ch.to_string());
    if let Ok(utterance) = SpeechSynthesisUtterance::new_with_text(&text) {
        utterance.set_rate(SPEECH_RATE);
        synth.speak(&utterance);
    }
}
