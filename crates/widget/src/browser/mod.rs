//! Browser entry point: binds the cart to `localStorage` and the DOM.
//!
//! On load the widget
//! - binds every "add to cart" control on the page, and
//! - if the page has a cart item list, renders the cart and binds the
//!   remove, clear and checkout controls.

mod dom;
mod logging;
mod storage;

use std::rc::Rc;

use ludoteca_core::CartStore;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

pub use dom::DomSurface;
pub use storage::LocalStorage;

use crate::config::WidgetConfig;
use crate::controls::{CartAction, read_add_control, read_remove_control};
use crate::view::CartView;

type BrowserView = CartView<LocalStorage, DomSurface>;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    logging::init();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        tracing::warn!("No document, cart widget not started");
        return;
    };

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::wrap(Box::new(move || mount(&doc)) as Box<dyn FnMut()>);
        if document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .is_ok()
        {
            on_ready.forget();
        }
    } else {
        mount(&document);
    }
}

fn mount(document: &Document) {
    let config = WidgetConfig::default();
    let store = CartStore::with_key(LocalStorage, config.storage_key.clone());
    let surface = DomSurface::new(document.clone(), config.dom.clone());
    let view = Rc::new(CartView::new(store, surface, config));

    bind_add_controls(document, &view);

    let dom = &view.config().dom;
    let Some(items) = document.get_element_by_id(&dom.items_id) else {
        return;
    };

    report(view.render().map(|_| ()));
    bind_remove_controls(&items, &view);
    if let Some(clear) = document.get_element_by_id(&dom.clear_id) {
        on_click(&clear, &view, |_| Some(CartAction::Clear));
    }
    if let Some(checkout) = document.get_element_by_id(&dom.checkout_id) {
        on_click(&checkout, &view, |_| Some(CartAction::Checkout));
    }
}

/// Bind the page-wide "add to cart" controls.
fn bind_add_controls(document: &Document, view: &Rc<BrowserView>) {
    let Ok(controls) = document.query_selector_all(&view.config().dom.add_selector) else {
        tracing::warn!("Invalid add-to-cart selector");
        return;
    };

    for i in 0..controls.length() {
        let Some(control) = controls
            .item(i)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let source = control.clone();
        on_click(&control, view, move |_| {
            read_add_control(|name| source.get_attribute(name))
                .map(CartAction::Add)
                .map_err(|e| tracing::warn!(error = %e, "Ignoring add-to-cart control"))
                .ok()
        });
    }
}

/// Remove buttons are re-created on every render, so clicks are delegated
/// from the item list.
fn bind_remove_controls(items: &Element, view: &Rc<BrowserView>) {
    let remove_class = view.config().dom.remove_class.clone();
    on_click(items, view, move |event| {
        let target = event.target()?.dyn_into::<Element>().ok()?;
        if !target.class_list().contains(&remove_class) {
            return None;
        }
        read_remove_control(|name| target.get_attribute(name))
            .map(CartAction::Remove)
            .map_err(|e| tracing::warn!(error = %e, "Ignoring remove control"))
            .ok()
    });
}

/// Run the action `to_action` picks for each click on `element`.
fn on_click(
    element: &Element,
    view: &Rc<BrowserView>,
    to_action: impl Fn(&Event) -> Option<CartAction> + 'static,
) {
    let view = Rc::clone(view);
    let handler = Closure::wrap(Box::new(move |event: Event| {
        if let Some(action) = to_action(&event) {
            report(view.handle(action));
        }
    }) as Box<dyn FnMut(Event)>);

    if element
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .is_ok()
    {
        handler.forget();
    }
}

fn report(result: crate::error::Result<()>) {
    if let Err(e) = result {
        tracing::error!(error = %e, "Cart action failed");
    }
}
