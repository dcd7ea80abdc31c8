//! Cart view: draws the persisted cart onto a [`Surface`] and applies user
//! actions back to the [`CartStore`].

use askama::Template;
use ludoteca_core::{CartStore, KeyValueStore};
use tracing::{debug, info, instrument};

use crate::config::WidgetConfig;
use crate::controls::CartAction;
use crate::error::Result;
use crate::summary::CartSummary;
use crate::surface::Surface;
use crate::templates::{CartEmptyTemplate, CartItemsTemplate};

/// What a render put on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Empty-state message, no total, actions hidden.
    Empty,
    /// One row per line, total shown, actions visible.
    Items,
}

/// The cart widget.
pub struct CartView<S, P> {
    store: CartStore<S>,
    surface: P,
    config: WidgetConfig,
}

impl<S: KeyValueStore, P: Surface> CartView<S, P> {
    pub const fn new(store: CartStore<S>, surface: P, config: WidgetConfig) -> Self {
        Self {
            store,
            surface,
            config,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &CartStore<S> {
        &self.store
    }

    #[must_use]
    pub const fn surface(&self) -> &P {
        &self.surface
    }

    #[must_use]
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Display data for the persisted cart.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary::new(&self.store.load(), self.config.currency)
    }

    /// Draw the persisted cart.
    ///
    /// Returns `Ok(None)` without touching the surface when its regions are
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Render`](crate::WidgetError::Render) if a
    /// fragment template fails.
    #[instrument(skip(self))]
    pub fn render(&self) -> Result<Option<DisplayMode>> {
        if !self.surface.is_mounted() {
            debug!("Cart regions not found, skipping render");
            return Ok(None);
        }

        let summary = self.summary();
        let messages = &self.config.messages;

        if summary.is_empty() {
            let html = CartEmptyTemplate {
                message: &messages.empty_cart,
            }
            .render()?;
            self.surface.set_items_html(&html);
            self.surface.set_total_text("");
            self.surface.set_actions_visible(false);
            return Ok(Some(DisplayMode::Empty));
        }

        let html = CartItemsTemplate {
            rows: &summary.rows,
            remove_class: &self.config.dom.remove_class,
            remove_label: &messages.remove_label,
        }
        .render()?;
        self.surface.set_items_html(&html);
        self.surface
            .set_total_text(&format!("{}: {}", messages.total_label, summary.total));
        self.surface.set_actions_visible(true);

        debug!(lines = summary.rows.len(), total = %summary.total, "Rendered cart");
        Ok(Some(DisplayMode::Items))
    }

    /// Apply a user action.
    ///
    /// Adds confirm with a notice, removals and clears re-render, checkout
    /// only shows a notice.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError`](crate::WidgetError) if the cart cannot be
    /// saved or redrawn.
    #[instrument(skip(self))]
    pub fn handle(&self, action: CartAction) -> Result<()> {
        match action {
            CartAction::Add(item) => {
                let name = item.name().to_string();
                self.store.add(item)?;
                self.surface.notify(&self.config.messages.added(&name));
            }
            CartAction::Remove(index) => {
                self.store.remove(index)?;
                self.render()?;
            }
            CartAction::Clear => {
                self.store.clear()?;
                self.render()?;
            }
            CartAction::Checkout => {
                info!("Checkout requested but payments are not available");
                self.surface
                    .notify(&self.config.messages.checkout_unavailable);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ludoteca_core::{DEFAULT_STORAGE_KEY, MemoryStore, NewItem};
    use rust_decimal::Decimal;

    use super::*;
    use crate::surface::MemorySurface;

    fn view(surface: MemorySurface) -> CartView<MemoryStore, MemorySurface> {
        CartView::new(
            CartStore::new(MemoryStore::new()),
            surface,
            WidgetConfig::default(),
        )
    }

    fn chess() -> NewItem {
        NewItem::new("Chess", Decimal::new(1999, 2), Some("x".into())).unwrap()
    }

    #[test]
    fn test_render_skipped_without_regions() {
        let view = view(MemorySurface::detached());
        assert_eq!(view.render().unwrap(), None);
        assert_eq!(view.surface().state().actions_visible, None);
    }

    #[test]
    fn test_render_empty_hides_actions() {
        let view = view(MemorySurface::mounted());
        assert_eq!(view.render().unwrap(), Some(DisplayMode::Empty));

        let state = view.surface().state();
        assert!(state.items_html.contains("Il tuo carrello è vuoto."));
        assert_eq!(state.total_text, "");
        assert_eq!(state.actions_visible, Some(false));
    }

    #[test]
    fn test_render_items_shows_total() {
        let view = view(MemorySurface::mounted());
        view.store().add(chess()).unwrap();
        view.store().add(chess()).unwrap();

        assert_eq!(view.render().unwrap(), Some(DisplayMode::Items));

        let state = view.surface().state();
        assert!(state.items_html.contains("<strong>Chess</strong> ×2 - €19.99"));
        assert!(state.items_html.contains(r#"data-index="0""#));
        assert_eq!(state.total_text, "Totale: €39.98");
        assert_eq!(state.actions_visible, Some(true));
    }

    #[test]
    fn test_add_notifies_without_rendering() {
        let view = view(MemorySurface::mounted());
        view.handle(CartAction::Add(chess())).unwrap();

        let state = view.surface().state();
        assert_eq!(state.notices, ["Chess è stato aggiunto al carrello."]);
        assert_eq!(state.actions_visible, None);
        assert_eq!(view.store().load().len(), 1);
    }

    #[test]
    fn test_add_works_on_pages_without_cart_regions() {
        let view = view(MemorySurface::detached());
        view.handle(CartAction::Add(chess())).unwrap();
        assert_eq!(view.surface().take_notices().len(), 1);
        assert!(view.store().storage().contains_key(DEFAULT_STORAGE_KEY));
    }

    #[test]
    fn test_remove_rerenders() {
        let view = view(MemorySurface::mounted());
        view.store().add(chess()).unwrap();
        view.render().unwrap();

        view.handle(CartAction::Remove(0)).unwrap();

        let state = view.surface().state();
        assert!(view.store().load().is_empty());
        assert_eq!(state.actions_visible, Some(false));
    }

    #[test]
    fn test_remove_out_of_range_keeps_cart() {
        let view = view(MemorySurface::mounted());
        view.store().add(chess()).unwrap();

        view.handle(CartAction::Remove(5)).unwrap();

        assert_eq!(view.store().load().len(), 1);
        assert_eq!(view.surface().state().actions_visible, Some(true));
    }

    #[test]
    fn test_clear_rerenders_empty() {
        let view = view(MemorySurface::mounted());
        view.store().add(chess()).unwrap();

        view.handle(CartAction::Clear).unwrap();
        view.handle(CartAction::Clear).unwrap();

        assert!(!view.store().storage().contains_key(DEFAULT_STORAGE_KEY));
        assert_eq!(view.surface().state().actions_visible, Some(false));
    }

    #[test]
    fn test_checkout_shows_notice_and_keeps_cart() {
        let view = view(MemorySurface::mounted());
        view.store().add(chess()).unwrap();

        view.handle(CartAction::Checkout).unwrap();

        let notices = view.surface().take_notices();
        assert_eq!(notices.len(), 1);
        assert!(notices.first().unwrap().starts_with("Funzionalità di pagamento"));
        assert_eq!(view.store().load().len(), 1);
    }
}
