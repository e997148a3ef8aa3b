// src/app/browser_event_manager.rs
//! Handles attaching and detaching the document-level keyup listener.
//! 元のゲームが addEventListener('keyup', ...) でやっていたことを、
//! Rust 側から wasm の Closure で組み立てるよ！⌨️

use std::sync::{Arc, Mutex};

use log::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, KeyboardEvent};

use crate::app::event_handler;
use crate::ecs::world::World;
use crate::log;

/// Attaches a keyup listener to the document that routes key codes into the
/// game's input handling.
///
/// クロージャの所有権は `closure_slot` に保存しておく。
/// Rust 側で Closure が drop されるとリスナーが無効になっちゃうからね！⚠️
pub(crate) fn attach_keyup_listener(
    world_arc: Arc<Mutex<World>>,
    closure_slot: Arc<Mutex<Option<Closure<dyn FnMut(Event)>>>>,
) -> Result<(), JsValue> {
    log("Attaching keyup listener...");

    let world_arc_clone = Arc::clone(&world_arc);
    let keyup_closure = Closure::wrap(Box::new(move |event: Event| {
        // Cast the generic Event to a KeyboardEvent
        if let Ok(keyboard_event) = event.dyn_into::<KeyboardEvent>() {
            event_handler::handle_key_up(&world_arc_clone, keyboard_event.key_code());
        } else {
            error!("Failed to cast event to KeyboardEvent in keyup listener");
        }
    }) as Box<dyn FnMut(Event)>);

    let window = window().ok_or("Failed to get window")?;
    let document = window.document().ok_or("Failed to get document")?;
    document
        .add_event_listener_with_callback("keyup", keyup_closure.as_ref().unchecked_ref())?;

    // Store the closure so it outlives this function call.
    *closure_slot
        .lock()
        .map_err(|e| JsValue::from_str(&format!("Failed to lock keyup closure slot: {}", e)))? =
        Some(keyup_closure);

    log("  Attached keyup listener.");
    Ok(())
}

/// Detaches the keyup listener from the document and drops the closure.
pub(crate) fn detach_keyup_listener(
    closure_slot: &Arc<Mutex<Option<Closure<dyn FnMut(Event)>>>>,
) -> Result<(), JsValue> {
    log("Detaching keyup listener...");
    let window = window().ok_or("Failed to get window")?;
    let document = window.document().ok_or("Failed to get document")?;

    let mut slot = closure_slot
        .lock()
        .map_err(|e| JsValue::from_str(&format!("Failed to lock keyup closure slot: {}", e)))?;

    if let Some(closure) = slot.take() {
        document.remove_event_listener_with_callback(
            "keyup",
            closure.as_ref().unchecked_ref(),
        )?;
        log("  Detached keyup listener.");
        // closure はここで drop される
    } else {
        log("  No keyup listener was attached.");
    }

    Ok(())
}
