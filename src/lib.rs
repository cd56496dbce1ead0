//! Phonics Play core crate.
//!
//! A browser phonics game for early readers with two drills: letter-sound
//! recognition and word blending/spelling. Gameplay logic lives in [`engine`]
//! as pure Rust (tested natively); [`game`] and [`audio`] hold the
//! DOM/audio glue and are only exercised in the browser.

use wasm_bindgen::prelude::*;

pub mod audio;
pub mod engine;
mod game;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Shared drill datasets
// -----------------------------------------------------------------------------

/// Word deck for the blending drill: uppercase three-letter CVC words.
pub const WORDS: &[&str] = &[
    "DOG", "CAT", "SUN", "PIG", "HAT", "BUS", "FOX", "BED", "CUP", "MAP",
    "HEN", "LOG", "JAM", "WEB", "TUB", "PEN", "BAT", "LIP", "POT", "RUG",
    "VAN", "KID", "MUD", "NET",
];

/// Per-letter pronunciation used by the speech-synthesis fallback:
/// `(letter, letter name, phonic sound)`.
pub const LETTER_VOICES: &[(char, &str, &str)] = &[
    ('A', "ay", "ah"),
    ('B', "bee", "buh"),
    ('C', "see", "kuh"),
    ('D', "dee", "duh"),
    ('E', "ee", "eh"),
    ('F', "eff", "fff"),
    ('G', "jee", "guh"),
    ('H', "aitch", "huh"),
    ('I', "eye", "ih"),
    ('J', "jay", "juh"),
    ('K', "kay", "kuh"),
    ('L', "ell", "lll"),
    ('M', "em", "mmm"),
    ('N', "en", "nnn"),
    ('O', "oh", "o"),
    ('P', "pee", "puh"),
    ('Q', "cue", "kwuh"),
    ('R', "ar", "rrr"),
    ('S', "ess", "sss"),
    ('T', "tee", "tuh"),
    ('U', "you", "uh"),
    ('V', "vee", "vvv"),
    ('W', "double you", "wuh"),
    ('X', "ex", "ks"),
    ('Y', "why", "yuh"),
    ('Z', "zee", "zzz"),
];

// -----------------------------------------------------------------------------
// Entry points
// -----------------------------------------------------------------------------

/// Launch the word blending drill (default gameplay path).
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::start_word_game()
}

/// Launch the letter-sound recognition drill.
#[wasm_bindgen]
pub fn start_letter_game() -> Result<(), JsValue> {
    game::start_letter_game()
}
