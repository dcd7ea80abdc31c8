//! DOM-backed surface.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::DomConfig;
use crate::surface::Surface;

/// [`Surface`] over elements looked up by id in the current document.
pub struct DomSurface {
    document: Document,
    dom: DomConfig,
}

impl DomSurface {
    #[must_use]
    pub const fn new(document: Document, dom: DomConfig) -> Self {
        Self { document, dom }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

impl Surface for DomSurface {
    fn is_mounted(&self) -> bool {
        [&self.dom.items_id, &self.dom.total_id, &self.dom.actions_id]
            .into_iter()
            .all(|id| self.element(id).is_some())
    }

    fn set_items_html(&self, html: &str) {
        if let Some(items) = self.element(&self.dom.items_id) {
            items.set_inner_html(html);
        }
    }

    fn set_total_text(&self, text: &str) {
        if let Some(total) = self.element(&self.dom.total_id) {
            total.set_text_content(Some(text));
        }
    }

    fn set_actions_visible(&self, visible: bool) {
        let Some(actions) = self
            .element(&self.dom.actions_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let display = if visible { "flex" } else { "none" };
        if actions.style().set_property("display", display).is_err() {
            tracing::warn!(display, "Failed to toggle cart actions");
        }
    }

    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if window.alert_with_message(message).is_err() {
            tracing::warn!(message, "Failed to show cart notice");
        }
    }
}
