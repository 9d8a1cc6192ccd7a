//! Browser-backed grid surface
//!
//! Reads `clientWidth`/`clientHeight` and writes inline styles on a live
//! container and its matched items.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::error::{describe_js_error, GridError};
use crate::layout::{px, GridSurface, ItemStyle};

/// A container and the items matched by the selector, in document order
pub struct DomSurface {
    container: HtmlElement,
    items: Vec<HtmlElement>,
}

impl DomSurface {
    /// Collect the items of `container` matching `selector`. No selector
    /// means no items.
    pub fn collect(container: &HtmlElement, selector: Option<&str>) -> Result<Self, GridError> {
        let items = match selector {
            Some(selector) => matching_items(container, selector)?,
            None => Vec::new(),
        };

        Ok(Self {
            container: container.clone(),
            items,
        })
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub fn items(&self) -> &[HtmlElement] {
        &self.items
    }

    fn set_container_style(&self, property: &str, value: &str) {
        if let Err(e) = self.container.style().set_property(property, value) {
            log::warn!("Failed to set container {}: {}", property, describe_js_error(&e));
        }
    }
}

fn matching_items(container: &HtmlElement, selector: &str) -> Result<Vec<HtmlElement>, GridError> {
    let nodes = container
        .query_selector_all(selector)
        .map_err(|e| GridError::InvalidSelector {
            selector: selector.to_string(),
            message: describe_js_error(&e),
        })?;

    // Non-HTML matches (e.g. SVG) have no inline style to write
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

impl GridSurface for DomSurface {
    fn establish_origin(&mut self) {
        self.set_container_style("position", "relative");
    }

    fn width(&self) -> f64 {
        self.container.client_width() as f64
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn place_item(&mut self, index: usize, style: &ItemStyle) -> f64 {
        let Some(item) = self.items.get(index) else {
            return 0.0;
        };
        if let Err(e) = item.set_attribute("style", &style.to_css()) {
            log::warn!("Failed to style grid item {}: {}", index, describe_js_error(&e));
        }
        // Reading clientHeight forces layout with the new width
        item.client_height() as f64
    }

    fn set_height(&mut self, height: f64) {
        self.set_container_style("height", &px(height));
    }
}
