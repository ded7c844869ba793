//! WASM entry points: logger setup and click wiring.
//!
//! The server renders the activity grid; this module only attaches behavior.
//! One delegated `click` listener on the document routes clicks on
//! `.activity-box` elements into the toggle flow, so templates need no inline
//! handlers. Requires a browser environment; the native build gets a no-op
//! stub.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;
#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
use crate::net::api::update_activity_on_server;
#[cfg(feature = "hydrate")]
use crate::util::activity_actions::{ToggleOutcome, toggle_activity};
#[cfg(feature = "hydrate")]
use crate::util::activity_dom::{ACTIVITY_BOX_CLASS, DomRegistry};

/// Initialize the console logger once at module load.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Install the delegated click handler on the current document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn attach_activity_handlers() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let handler = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
        if let Some((character_id, activity_id)) = clicked_activity_box(&event) {
            wasm_bindgen_futures::spawn_local(run_toggle(character_id, activity_id));
        }
    });
    if document
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .is_err()
    {
        log::error!("could not attach the activity click handler");
    }
    // Document-lifetime listener: the closure is intentionally leaked.
    handler.forget();
}

/// No-op stub used outside the browser build.
#[cfg(not(feature = "hydrate"))]
pub fn attach_activity_handlers() {}

/// The `(character id, activity id)` pair of a clicked activity box, or
/// `None` when the click landed elsewhere or the box lacks its attributes.
#[cfg(feature = "hydrate")]
fn clicked_activity_box(event: &web_sys::Event) -> Option<(String, String)> {
    let target = event.target()?;
    let element = target.dyn_ref::<web_sys::Element>()?;
    if !element.class_list().contains(ACTIVITY_BOX_CLASS) {
        return None;
    }
    let character_id = element.get_attribute("data-character-id")?;
    let activity_id = element.get_attribute("data-activity-id")?;
    Some((character_id, activity_id))
}

#[cfg(feature = "hydrate")]
async fn run_toggle(character_id: String, activity_id: String) {
    let Some(mut registry) = DomRegistry::from_window() else {
        return;
    };

    let outcome = toggle_activity(
        &mut registry,
        |request| async move {
            update_activity_on_server(&request.character_id, &request.activity_id, request.completed).await
        },
        &character_id,
        &activity_id,
    )
    .await;

    if let ToggleOutcome::Synced { rendered } = outcome {
        log::debug!("reconciled {rendered} activity boxes for character {character_id}");
    }
}
