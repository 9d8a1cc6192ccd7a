//! Waiting for images before the first layout pass
//!
//! Item heights depend on image sizes, so the first pass waits until every
//! `<img>` in the container has loaded or failed. Each image gets a detached
//! probe (`new Image()`) pointed at the same `src`; probe events count down a
//! [`CompletionLatch`]. The probe issues its own request even when the
//! visible image is already cached.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

use crate::error::GridError;
use crate::utils::CompletionLatch;

/// Call `on_ready` once every image under `container` has settled.
///
/// Returns the number of probes started. With no images `on_ready` has
/// already run when this returns.
pub fn wait_for_images(container: &Element, on_ready: impl FnOnce() + 'static) -> Result<usize, GridError> {
    let images = container
        .query_selector_all("img")
        .map_err(|e| GridError::dom("querySelectorAll(img)", e))?;
    let count = images.length() as usize;

    let latch = Rc::new(CompletionLatch::new(count, on_ready));
    if count == 0 {
        return Ok(0);
    }

    let mut started = 0;
    for i in 0..images.length() {
        let src = images
            .get(i)
            .and_then(|node| node.dyn_into::<Element>().ok())
            .and_then(|image| image.get_attribute("src"));

        match src {
            Some(src) => match probe(&src, latch.clone()) {
                Ok(()) => started += 1,
                Err(e) => {
                    log::warn!("Image probe for {} failed to start: {}", src, e);
                    latch.arrive();
                }
            },
            // Nothing to load
            None => latch.arrive(),
        }
    }

    log::debug!("Waiting on {} of {} images", started, count);
    Ok(started)
}

/// Load `src` in a detached image; load or error counts as one arrival
fn probe(src: &str, latch: Rc<CompletionLatch>) -> Result<(), GridError> {
    let image = HtmlImageElement::new().map_err(|e| GridError::dom("new Image()", e))?;

    let target = image.clone();
    // once_into_js frees the closure after its single call
    let settle = Closure::once_into_js(move || {
        target.set_onload(None);
        target.set_onerror(None);
        latch.arrive();
    });
    let settle: &js_sys::Function = settle.unchecked_ref();

    image.set_onload(Some(settle));
    image.set_onerror(Some(settle));
    image.set_src(src);
    Ok(())
}
