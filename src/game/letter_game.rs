//! Browser front-end for the letter-sound recognition drill.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use super::{
    STATUS_CLEAR_MS, build_alphabet_grid, ensure_element, install_key_listener,
    install_replay_button, performance_now,
};
use crate::audio::GameAudio;
use crate::engine::Action;
use crate::engine::drill::LetterDrill;

const PROMPT_STYLE: &str = "position:fixed; left:50%; top:30%; transform:translate(-50%,-50%); font-family:'Fira Code', monospace; font-size:40px; color:#eee; z-index:20;";

struct LetterGameState {
    drill: LetterDrill,
    audio: GameAudio,
    status: Option<(&'static str, f64)>,
}

thread_local! {
    static LETTER_GAME: RefCell<Option<LetterGameState>> = RefCell::new(None);
}

pub fn start_letter_game() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let now = performance_now();
    let (drill, actions) = LetterDrill::new(LetterDrill::alphabet(now as u64 | 1));

    ensure_element(&doc, "pp-prompt", PROMPT_STYLE)?
        .set_text_content(Some("Find the letter you hear"));
    ensure_element(&doc, "pp-status", super::STATUS_STYLE)?
        .set_attribute("aria-live", "polite")
        .ok();
    build_alphabet_grid(&doc, letter_game_pick)?;
    install_key_listener(&doc, letter_game_pick)?;
    install_replay_button(&doc, letter_game_replay)?;

    let mut state = LetterGameState {
        drill,
        audio: GameAudio::new(),
        status: None,
    };
    run_actions(&mut state, actions, now);
    LETTER_GAME.with(|cell| cell.replace(Some(state)));

    start_letter_loop();
    Ok(())
}

fn letter_game_pick(ch: char) {
    LETTER_GAME.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            let now = performance_now();
            let actions = state.drill.submit_letter(ch);
            run_actions(state, actions, now);
        }
    });
}

fn letter_game_replay() {
    LETTER_GAME.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            let now = performance_now();
            let actions = state.drill.replay();
            run_actions(state, actions, now);
        }
    });
}

fn run_actions(state: &mut LetterGameState, actions: Vec<Action>, now: f64) {
    for action in actions {
        match action {
            Action::PlayLetter(ch) => state.audio.play_letter(ch),
            Action::PlayBlend(clip) => state.audio.play_clip(&clip),
            Action::Feedback(verdict) => {
                state.audio.play_feedback(verdict);
                state.status = Some((verdict.label(), now));
            }
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

// Only the transient status needs the frame clock here; the drill itself has
// no timed phases.
fn start_letter_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        LETTER_GAME.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                let now = performance_now();
                if let Some((_, shown_at)) = state.status {
                    if now - shown_at >= STATUS_CLEAR_MS {
                        state.status = None;
                    }
                }
                if let Some(doc) = window().and_then(|w| w.document()) {
                    if let Some(el) = doc.get_element_by_id("pp-status") {
                        el.set_text_content(Some(
                            state.status.map(|(text, _)| text).unwrap_or(""),
                        ));
                    }
                }
            }
        });
        if let Some(w) = window() {
            let _ =
                w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
