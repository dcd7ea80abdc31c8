//! Integration tests for the Ludoteca cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ludoteca-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Persistence behaviour of the cart through a key-value store
//! - `cart_view` - Rendering and user actions end to end

use std::rc::Rc;

use ludoteca_core::{CartStore, MemoryStore, NewItem};
use ludoteca_widget::{CartView, MemorySurface, WidgetConfig};
use rust_decimal::Decimal;

/// Cart view over a shared in-memory store, drawing into a mounted surface.
pub type TestView = CartView<Rc<MemoryStore>, MemorySurface>;

/// Build a view whose store is also returned, so tests can inspect or
/// pre-seed the raw persisted value.
#[must_use]
pub fn test_view(surface: MemorySurface) -> (Rc<MemoryStore>, TestView) {
    let storage = Rc::new(MemoryStore::new());
    let view = CartView::new(
        CartStore::new(Rc::clone(&storage)),
        surface,
        WidgetConfig::default(),
    );
    (storage, view)
}

/// An item priced in cents.
///
/// # Panics
///
/// Panics if `cents` is negative.
#[must_use]
pub fn item(name: &str, cents: i64, image: Option<&str>) -> NewItem {
    NewItem::new(name, Decimal::new(cents, 2), image.map(String::from))
        .unwrap_or_else(|e| panic!("invalid test item {name}: {e}"))
}
