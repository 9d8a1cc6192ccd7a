//! Re-rendering on window resize
//!
//! A [`ResizeSubscription`] registers one listener on `window` and a
//! `MutationObserver` on the document. The listeners are owned by the
//! observer callback itself, so they stay registered whether or not anyone
//! keeps the subscription value around. When the container is no longer
//! connected the observer removes the listener, using the same function
//! object that was registered, and frees both callbacks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Array, Function};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MutationObserver, MutationObserverInit, Window};

use crate::error::{describe_js_error, GridError};

const RESIZE_EVENT: &str = "resize";

type Slot = Rc<RefCell<Option<Listeners>>>;

/// Registered callbacks; dropping them unregisters both
struct Listeners {
    window: Window,
    observer: MutationObserver,
    listener: Function,
    active: Rc<Cell<bool>>,
    _on_resize: Closure<dyn FnMut()>,
    _on_mutation: Closure<dyn FnMut(Array, MutationObserver)>,
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.observer.disconnect();
        release(&self.window, &self.listener, &self.active);
    }
}

/// Handle to a resize listener tied to one container.
///
/// Dropping the handle leaves the listener in place; it goes away when the
/// container leaves the document or [`cancel`](Self::cancel) is called.
#[derive(Clone)]
pub struct ResizeSubscription {
    slot: Slot,
    active: Rc<Cell<bool>>,
}

impl ResizeSubscription {
    /// Call `render` on every window resize until `container` leaves the
    /// document
    pub fn attach(container: &Element, render: Rc<dyn Fn()>) -> Result<Self, GridError> {
        let window = web_sys::window().ok_or(GridError::MissingGlobal("window"))?;
        let document = window.document().ok_or(GridError::MissingGlobal("document"))?;
        let active = Rc::new(Cell::new(true));
        let slot: Slot = Rc::new(RefCell::new(None));

        let on_resize = {
            let active = active.clone();
            Closure::<dyn FnMut()>::new(move || {
                if active.get() {
                    render();
                }
            })
        };
        let listener: Function = on_resize.as_ref().unchecked_ref::<Function>().clone();

        // Holds `slot`, and through it itself, until the container goes away
        let on_mutation = {
            let slot = slot.clone();
            let container = container.clone();
            Closure::<dyn FnMut(Array, MutationObserver)>::new(move |_records: Array, _observer: MutationObserver| {
                if container.is_connected() {
                    return;
                }
                // wasm-bindgen defers freeing a closure dropped mid-call
                let listeners = slot.borrow_mut().take();
                drop(listeners);
            })
        };

        let observer = MutationObserver::new(on_mutation.as_ref().unchecked_ref())
            .map_err(|e| GridError::dom("new MutationObserver", e))?;
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer
            .observe_with_options(&document, &init)
            .map_err(|e| GridError::dom("MutationObserver.observe", e))?;

        if let Err(e) = window.add_event_listener_with_callback(RESIZE_EVENT, &listener) {
            observer.disconnect();
            return Err(GridError::dom("addEventListener(resize)", e));
        }
        log::debug!("Resize subscription attached");

        *slot.borrow_mut() = Some(Listeners {
            window,
            observer,
            listener,
            active: active.clone(),
            _on_resize: on_resize,
            _on_mutation: on_mutation,
        });

        Ok(Self { slot, active })
    }

    /// True until the container is removed or the subscription is cancelled
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Stop listening and free the callbacks. Safe to call more than once.
    pub fn cancel(&self) {
        let listeners = self.slot.borrow_mut().take();
        drop(listeners);
    }
}

/// Remove the resize listener if it is still registered
fn release(window: &Window, listener: &Function, active: &Cell<bool>) {
    if !active.replace(false) {
        return;
    }
    if let Err(e) = window.remove_event_listener_with_callback(RESIZE_EVENT, listener) {
        log::warn!("Failed to remove resize listener: {}", describe_js_error(&e));
    }
    log::debug!("Resize subscription released");
}
