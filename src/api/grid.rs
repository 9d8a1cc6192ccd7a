//! Grid entry points
//!
//! `gridify` waits for the container's images, lays it out once, and keeps
//! the returned handle subscribed to window resizes when asked to.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use super::helpers::{deserialize_or_default, serialize, to_js_error};
use crate::dom::{wait_for_images, DomSurface, ResizeSubscription};
use crate::error::{describe_js_error, GridError};
use crate::layout::{GridEngine, GridLayout, GridOptions};

/// Renders one container with one set of options
struct GridRenderer {
    container: HtmlElement,
    engine: GridEngine,
    last_layout: RefCell<Option<GridLayout>>,
}

impl GridRenderer {
    /// Run a layout pass. A container that has left the document is skipped,
    /// which covers image waits that finish after removal.
    fn render(&self) -> Result<Option<GridLayout>, GridError> {
        if !self.container.is_connected() {
            log::debug!("Skipping grid render: container is not in the document");
            return Ok(None);
        }

        let started = now_ms();
        let mut surface = DomSurface::collect(&self.container, self.engine.options().selector())?;
        let layout = self.engine.render(&mut surface);
        if let (Some(started), Some(finished)) = (started, now_ms()) {
            log::debug!("Grid render took {:.2}ms", finished - started);
        }

        *self.last_layout.borrow_mut() = Some(layout.clone());
        Ok(Some(layout))
    }

    /// Render from an event callback, where there is no caller to report to
    fn render_logged(&self) {
        if let Err(e) = self.render() {
            log::error!("Grid render failed: {}", e);
        }
    }
}

fn now_ms() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
}

/// A gridified container
#[wasm_bindgen]
pub struct GridHandle {
    renderer: Rc<GridRenderer>,
    subscription: Option<ResizeSubscription>,
}

impl GridHandle {
    /// Lay out `container` once its images are ready, and subscribe to
    /// resizes if `options.resizable` is set
    pub fn attach(container: HtmlElement, options: GridOptions) -> Result<Self, GridError> {
        let resizable = options.resizable;
        let renderer = Rc::new(GridRenderer {
            container,
            engine: GridEngine::new(options),
            last_layout: RefCell::new(None),
        });

        let pending = {
            let container = renderer.container.clone();
            let renderer = renderer.clone();
            wait_for_images(&container, move || renderer.render_logged())?
        };
        if pending > 0 {
            log::debug!("First grid render deferred until {} images settle", pending);
        }

        let subscription = if resizable {
            let render: Rc<dyn Fn()> = {
                let renderer = renderer.clone();
                Rc::new(move || renderer.render_logged())
            };
            Some(ResizeSubscription::attach(&renderer.container, render)?)
        } else {
            None
        };

        Ok(Self { renderer, subscription })
    }

    /// Run a layout pass now
    pub fn render_now(&self) -> Result<Option<GridLayout>, GridError> {
        self.renderer.render()
    }

    /// Result of the most recent pass
    pub fn layout(&self) -> Option<GridLayout> {
        self.renderer.last_layout.borrow().clone()
    }

    pub fn subscription(&self) -> Option<&ResizeSubscription> {
        self.subscription.as_ref()
    }
}

#[wasm_bindgen]
impl GridHandle {
    /// Force a layout pass; returns the layout, or `undefined` when the
    /// container is detached
    pub fn render(&self) -> Result<JsValue, JsValue> {
        match self.render_now().map_err(to_js_error)? {
            Some(layout) => serialize(&layout, "Failed to serialize grid layout"),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Layout from the most recent pass, or `undefined` before the first one
    #[wasm_bindgen(js_name = lastLayout)]
    pub fn last_layout(&self) -> Result<JsValue, JsValue> {
        match self.layout() {
            Some(layout) => serialize(&layout, "Failed to serialize grid layout"),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// True while resize events still re-render this container
    #[wasm_bindgen(js_name = isSubscribed)]
    pub fn is_subscribed(&self) -> bool {
        self.subscription.as_ref().map_or(false, ResizeSubscription::is_active)
    }

    /// Stop re-rendering on resize. Freeing the handle without calling
    /// this keeps the subscription until the container is removed.
    pub fn dispose(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
            log::debug!("Grid handle disposed");
        }
    }
}

/// Lay out `container` as a masonry grid
///
/// `options` may be omitted; see `GridOptions` for the recognised keys.
#[wasm_bindgen]
pub fn gridify(container: HtmlElement, options: JsValue) -> Result<GridHandle, JsValue> {
    let options: GridOptions =
        deserialize_or_default(options, "Failed to read grid options").map_err(to_js_error)?;
    GridHandle::attach(container, options).map_err(to_js_error)
}

/// Call `callback` once every image inside `container` has loaded or failed.
/// Returns how many images are being waited on; with none, `callback` has
/// already run.
#[wasm_bindgen(js_name = waitForImages)]
pub fn wait_for_images_js(container: &Element, callback: Function) -> Result<usize, JsValue> {
    wait_for_images(container, move || {
        if let Err(e) = callback.call0(&JsValue::NULL) {
            log::error!("waitForImages callback threw: {}", describe_js_error(&e));
        }
    })
    .map_err(to_js_error)
}
