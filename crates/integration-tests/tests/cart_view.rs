//! Integration tests for the cart view.
//!
//! These tests run user actions through `CartView` and check what ends up on
//! the surface and in storage.

#![allow(clippy::unwrap_used)]

use ludoteca_core::{DEFAULT_STORAGE_KEY, KeyValueStore, MemoryStore};
use ludoteca_integration_tests::{item, test_view};
use ludoteca_widget::controls::{ATTR_IMAGE, ATTR_INDEX, ATTR_NAME, ATTR_PRICE};
use ludoteca_widget::{
    CartAction, DisplayMode, MemorySurface, read_add_control, read_remove_control,
};

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_chess_example_total() {
    let (_storage, view) = test_view(MemorySurface::mounted());

    view.handle(CartAction::Add(item("Chess", 1999, Some("x"))))
        .unwrap();
    view.handle(CartAction::Add(item("Chess", 1999, None))).unwrap();

    assert_eq!(view.render().unwrap(), Some(DisplayMode::Items));
    let state = view.surface().state();
    assert_eq!(state.total_text, "Totale: €39.98");
    assert_eq!(state.items_html.matches("class=\"cart-item\"").count(), 1);
    assert!(state.items_html.contains("×2"));
}

#[test]
fn test_total_sums_all_lines() {
    let (_storage, view) = test_view(MemorySurface::mounted());
    view.store().add(item("Risiko", 3450, None)).unwrap();
    view.store().add(item("Risiko", 3450, None)).unwrap();
    view.store().add(item("Dixit", 2999, None)).unwrap();
    view.store().add(item("Uno", 1, None)).unwrap();

    view.render().unwrap();

    assert_eq!(view.surface().state().total_text, "Totale: €99.00");
    assert_eq!(view.summary().item_count, 4);
}

#[test]
fn test_render_skipped_on_pages_without_cart() {
    let (storage, view) = test_view(MemorySurface::detached());
    view.store().add(item("Chess", 1999, None)).unwrap();

    assert_eq!(view.render().unwrap(), None);
    assert_eq!(view.surface().state().items_html, "");
    assert!(storage.contains_key(DEFAULT_STORAGE_KEY));
}

// =============================================================================
// Actions
// =============================================================================

#[test]
fn test_removing_only_line_hides_actions() {
    let (_storage, view) = test_view(MemorySurface::mounted());
    view.store().add(item("Chess", 1999, None)).unwrap();
    view.render().unwrap();
    assert_eq!(view.surface().state().actions_visible, Some(true));

    view.handle(CartAction::Remove(0)).unwrap();

    let state = view.surface().state();
    assert_eq!(state.actions_visible, Some(false));
    assert_eq!(state.total_text, "");
    assert!(state.items_html.contains("Il tuo carrello è vuoto."));
    assert!(view.store().load().is_empty());
}

#[test]
fn test_clearing_empty_cart_stays_empty() {
    let (storage, view) = test_view(MemorySurface::mounted());

    view.handle(CartAction::Clear).unwrap();
    view.handle(CartAction::Clear).unwrap();

    assert_eq!(view.render().unwrap(), Some(DisplayMode::Empty));
    assert_eq!(storage.get(DEFAULT_STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_add_control_click_end_to_end() {
    let (_storage, view) = test_view(MemorySurface::detached());
    let attrs = |name: &str| match name {
        ATTR_NAME => Some("Carcassonne".to_string()),
        ATTR_PRICE => Some("32.90".to_string()),
        ATTR_IMAGE => Some("img/carcassonne.jpg".to_string()),
        _ => None,
    };

    let action = read_add_control(attrs).map(CartAction::Add).unwrap();
    view.handle(action).unwrap();

    assert_eq!(
        view.surface().take_notices(),
        ["Carcassonne è stato aggiunto al carrello."]
    );
    let cart = view.store().load();
    assert_eq!(cart.get(0).unwrap().image(), Some("img/carcassonne.jpg"));
}

#[test]
fn test_remove_control_click_end_to_end() {
    let (_storage, view) = test_view(MemorySurface::mounted());
    view.store().add(item("Chess", 1999, None)).unwrap();
    view.store().add(item("Go", 2500, None)).unwrap();
    view.render().unwrap();

    let index = read_remove_control(|name| (name == ATTR_INDEX).then(|| "1".to_string())).unwrap();
    view.handle(CartAction::Remove(index)).unwrap();

    let state = view.surface().state();
    assert!(state.items_html.contains("Chess"));
    assert!(!state.items_html.contains("Go"));
    assert_eq!(state.total_text, "Totale: €19.99");
}

#[test]
fn test_checkout_leaves_cart_untouched() {
    let (_storage, view) = test_view(MemorySurface::mounted());
    view.store().add(item("Chess", 1999, None)).unwrap();

    view.handle(CartAction::Checkout).unwrap();

    assert_eq!(view.surface().take_notices().len(), 1);
    assert_eq!(view.store().load().len(), 1);
}

#[test]
fn test_storage_key_from_config_is_respected() {
    let storage = MemoryStore::new();
    let config = ludoteca_widget::WidgetConfig {
        storage_key: "ludoteca-cart".to_string(),
        ..Default::default()
    };
    let view = ludoteca_widget::CartView::new(
        ludoteca_core::CartStore::with_key(&storage, config.storage_key.clone()),
        MemorySurface::mounted(),
        config,
    );

    view.handle(CartAction::Add(item("Chess", 1999, None))).unwrap();

    assert!(storage.contains_key("ludoteca-cart"));
    assert!(!storage.contains_key(DEFAULT_STORAGE_KEY));
}
