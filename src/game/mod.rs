//! Browser front-end for the word blending drill.
//!
//! DOM-overlay rendering: id-addressed elements are created on demand, event
//! listeners are installed once with forgotten closures, and a
//! `requestAnimationFrame` loop drives the engine clock and repaints. All
//! gameplay decisions stay in [`crate::engine`]; this module only executes
//! the actions the engine hands back.

mod letter_game;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, window};

use crate::WORDS;
use crate::audio::GameAudio;
use crate::engine::deck::Deck;
use crate::engine::{Action, LetterPaint, WordPhaseEngine};

pub use letter_game::start_letter_game;

/// How long the "Correct" / "Try again" announcement stays visible.
const STATUS_CLEAR_MS: f64 = 1000.0;

const WORD_ROW_STYLE: &str = "position:fixed; left:50%; top:30%; transform:translate(-50%,-50%); display:flex; gap:24px; z-index:20;";
const STATUS_STYLE: &str = "position:fixed; left:50%; top:52%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:28px; color:#ffd166; z-index:30; min-height:36px;";
const PICTURE_STYLE: &str = "position:fixed; left:50%; top:12%; transform:translateX(-50%); width:120px; height:120px; background-size:contain; background-repeat:no-repeat; background-position:center; z-index:20;";
const GRID_STYLE: &str = "position:fixed; left:50%; bottom:24px; transform:translateX(-50%); display:grid; grid-template-columns:repeat(9, 56px); gap:8px; z-index:20;";
const TILE_STYLE: &str = "width:56px; height:56px; display:flex; align-items:center; justify-content:center; font-family:'Fira Code', monospace; font-size:28px; color:#eee; background:#222; border:2px solid #444; border-radius:10px; cursor:pointer; user-select:none;";
const REPLAY_STYLE: &str = "position:fixed; right:24px; top:24px; font-size:32px; cursor:pointer; z-index:30; user-select:none;";

struct WordGameState {
    engine: WordPhaseEngine,
    audio: GameAudio,
    status: Option<(&'static str, f64)>,
}

thread_local! {
    static WORD_GAME: RefCell<Option<WordGameState>> = RefCell::new(None);
}

pub fn start_word_game() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let now = performance_now();
    let words: Vec<String> = WORDS.iter().map(|w| w.to_string()).collect();
    // Clock-seeded shuffle; |1 avoids the degenerate zero seed at t=0.
    let deck = Deck::shuffled(words, now as u64 | 1);
    let (engine, actions) = WordPhaseEngine::new(deck, now);

    // Word tiles (one span per letter of the three-letter words)
    let row = ensure_element(&doc, "pp-word", WORD_ROW_STYLE)?;
    if row.child_element_count() == 0 {
        for i in 0..3 {
            let span = doc.create_element("span")?;
            span.set_id(&format!("pp-word-{i}"));
            span.set_attribute("style", &letter_style(LetterPaint::Idle)).ok();
            row.append_child(&span)?;
        }
    }
    ensure_element(&doc, "pp-status", STATUS_STYLE)?
        .set_attribute("aria-live", "polite")
        .ok();
    ensure_element(&doc, "pp-picture", PICTURE_STYLE)?;
    build_alphabet_grid(&doc, word_game_pick)?;
    install_key_listener(&doc, word_game_pick)?;
    install_replay_button(&doc, word_game_replay)?;

    let mut state = WordGameState {
        engine,
        audio: GameAudio::new(),
        status: None,
    };
    run_actions(&mut state, actions, now);
    WORD_GAME.with(|cell| cell.replace(Some(state)));

    start_word_loop();
    Ok(())
}

fn word_game_pick(ch: char) {
    WORD_GAME.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            let now = performance_now();
            let actions = state.engine.submit_letter(ch, now);
            run_actions(state, actions, now);
        }
    });
}

fn word_game_replay() {
    WORD_GAME.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            let now = performance_now();
            let actions = state.engine.replay();
            run_actions(state, actions, now);
        }
    });
}

fn run_actions(state: &mut WordGameState, actions: Vec<Action>, now: f64) {
    for action in actions {
        match action {
            Action::PlayLetter(ch) => state.audio.play_letter(ch),
            Action::PlayBlend(prefix) => state.audio.play_clip(&prefix),
            Action::Feedback(verdict) => {
                state.audio.play_feedback(verdict);
                state.status = Some((verdict.label(), now));
            }
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_word_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        WORD_GAME.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                let now = performance_now();
                let actions = state.engine.tick(now);
                run_actions(state, actions, now);
                render_word_game(state, now);
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

fn render_word_game(state: &mut WordGameState, now: f64) {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let paints = state.engine.letter_paints();
    for (i, (ch, paint)) in state.engine.word().chars().zip(paints).enumerate() {
        if let Some(el) = doc.get_element_by_id(&format!("pp-word-{i}")) {
            el.set_text_content(Some(&ch.to_string()));
            el.set_attribute("style", &letter_style(paint)).ok();
        }
    }
    if let Some((_, shown_at)) = state.status {
        if now - shown_at >= STATUS_CLEAR_MS {
            state.status = None;
        }
    }
    if let Some(el) = doc.get_element_by_id("pp-status") {
        el.set_text_content(Some(state.status.map(|(text, _)| text).unwrap_or("")));
    }
    if let Some(el) = doc.get_element_by_id("pp-picture") {
        let display = if state.engine.show_illustration() {
            "block"
        } else {
            "none"
        };
        let word = state.engine.word().to_ascii_lowercase();
        el.set_attribute(
            "style",
            &format!("{PICTURE_STYLE} display:{display}; background-image:url('img/{word}.svg');"),
        )
        .ok();
    }
}

fn letter_style(paint: LetterPaint) -> String {
    let (color, weight, shadow) = match paint {
        LetterPaint::Idle => ("#555", "normal", "none"),
        LetterPaint::Wanted => ("#ffd166", "bold", "0 0 18px rgba(255,209,102,0.7)"),
        LetterPaint::Done => ("#7bd88f", "bold", "none"),
        LetterPaint::Blending => ("#ff8c66", "bold", "0 0 14px rgba(255,140,102,0.6)"),
        LetterPaint::Blended => ("#ff4d4d", "bold", "0 0 18px rgba(255,77,77,0.8)"),
    };
    format!(
        "font-family:'Fira Code', monospace; font-size:96px; color:{color}; font-weight:{weight}; text-shadow:{shadow};"
    )
}

// --- Shared DOM helpers (also used by the letter drill) ----------------------

pub(crate) fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub(crate) fn ensure_element(doc: &Document, id: &str, style: &str) -> Result<Element, JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    let el = doc.create_element("div")?;
    el.set_id(id);
    el.set_attribute("style", style).ok();
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&el)?;
    Ok(el)
}

pub(crate) fn build_alphabet_grid(doc: &Document, on_pick: fn(char)) -> Result<(), JsValue> {
    let grid = ensure_element(doc, "pp-grid", GRID_STYLE)?;
    if grid.child_element_count() > 0 {
        return Ok(());
    }
    for ch in 'A'..='Z' {
        let tile = doc.create_element("div")?;
        tile.set_id(&format!("pp-key-{}", ch.to_ascii_lowercase()));
        tile.set_text_content(Some(&ch.to_string()));
        tile.set_attribute("style", TILE_STYLE).ok();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            on_pick(ch);
        }) as Box<dyn FnMut(_)>);
        tile.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        grid.append_child(&tile)?;
    }
    Ok(())
}

pub(crate) fn install_key_listener(doc: &Document, on_pick: fn(char)) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        let key = evt.key();
        if key.len() == 1 {
            let c = key.chars().next().unwrap();
            if c.is_ascii_alphabetic() {
                on_pick(c);
            }
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub(crate) fn install_replay_button(doc: &Document, on_replay: fn()) -> Result<(), JsValue> {
    let button = ensure_element(doc, "pp-replay", REPLAY_STYLE)?;
    button.set_text_content(Some("🔊"));
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        on_replay();
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
