//! DOM event listeners with explicit teardown.
//!
//! A listener is held through a guard value whose drop removes it from the
//! target, so wiring follows component lifetime instead of relying on
//! leaked closures.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::EventTarget;

/// An attached DOM event listener. Dropping the guard detaches it.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl EventListener {
    /// Attaches `handler` for `event_type` on `target`.
    pub fn new(
        target: &EventTarget,
        event_type: &'static str,
        handler: impl FnMut() + 'static,
    ) -> Self {
        let callback = Closure::new(handler);
        let _ = target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event_type,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(
                self.event_type,
                self.callback.as_ref().unchecked_ref(),
            );
    }
}
