//! Web entry point using ratzilla.
//!
//! The same [`App`] that drives the terminal renders into the browser DOM.
//! Quit bindings are logged and ignored since a page cannot close itself.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::Terminal;
use ratzilla::event::KeyEvent as RatzillaKeyEvent;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::event::AppKeyEvent;

fn handle_web_key(app: &mut App, key: AppKeyEvent) {
    app.handle_key(key);
    if app.should_exit() {
        tracing::info!("Exit requested, ignored in the browser");
        app.clear_exit();
    }
}

/// Keep Tab for panel focus instead of browser focus traversal.
fn setup_prevent_default() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
        if event.key() == "Tab" {
            event.prevent_default();
        }
    });

    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;

    // Prevent the closure from being dropped
    closure.forget();
    Ok(())
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    crate::init_logging_web();

    tracing::info!("epimeasures web version starting");

    setup_prevent_default()?;

    let app = Rc::new(RefCell::new(App::new()));

    let backend = DomBackend::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let terminal: Terminal<DomBackend> =
        Terminal::new(backend).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let app_clone = Rc::clone(&app);
    terminal.on_key_event(move |key_event: RatzillaKeyEvent| {
        let key: AppKeyEvent = (&key_event).into();
        handle_web_key(&mut app_clone.borrow_mut(), key);
    });

    terminal.draw_web(move |frame| {
        app.borrow_mut().draw(frame);
    });

    Ok(())
}
