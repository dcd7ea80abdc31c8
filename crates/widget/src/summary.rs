//! Cart display data.
//!
//! Projects a [`Cart`] into preformatted strings so templates and text hosts
//! never do arithmetic or currency formatting themselves.

use ludoteca_core::{Cart, CurrencyCode, LineItem, Price};

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRowView {
    /// Position in the cart, carried by the row's remove control
    pub index: usize,
    pub name: String,
    pub quantity: u32,
    /// Unit price, e.g. "€19.99"
    pub unit_price: String,
    /// Unit price × quantity, e.g. "€39.98"
    pub line_price: String,
    pub image: Option<String>,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub rows: Vec<CartRowView>,
    /// Sum over all rows, e.g. "€39.98"
    pub total: String,
    pub item_count: u64,
}

impl CartSummary {
    #[must_use]
    pub fn new(cart: &Cart, currency: CurrencyCode) -> Self {
        Self {
            rows: cart
                .iter()
                .enumerate()
                .map(|(index, line)| CartRowView::new(index, line, currency))
                .collect(),
            total: Price::new(cart.total(), currency).display(),
            item_count: cart.item_count(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl CartRowView {
    fn new(index: usize, line: &LineItem, currency: CurrencyCode) -> Self {
        Self {
            index,
            name: line.name().to_string(),
            quantity: line.quantity().get(),
            unit_price: Price::new(line.price(), currency).display(),
            line_price: Price::new(line.line_total(), currency).display(),
            image: line.image().map(String::from),
        }
    }
}
