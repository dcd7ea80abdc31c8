//! The cart: an ordered list of line items keyed by name.

use core::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::{LineItem, NewItem};

/// Ordered collection of [`LineItem`]s.
///
/// Insertion order is display order. Adding an item whose name is already in
/// the cart bumps that line's quantity instead of appending a second line.
///
/// Serialized as a bare JSON array of line items.
///
/// # Examples
///
/// ```
/// use ludoteca_core::{Cart, NewItem};
/// use rust_decimal::Decimal;
///
/// let chess = NewItem::new("Chess", Decimal::new(1999, 2), None).unwrap();
///
/// let mut cart = Cart::new();
/// cart.add(chess.clone());
/// cart.add(chess);
///
/// assert_eq!(cart.len(), 1);
/// assert_eq!(cart.total(), Decimal::new(3998, 2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    /// Find the line with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|line| line.name() == name)
    }

    /// Add one unit of `item`.
    ///
    /// Returns the line's quantity after the add.
    pub fn add(&mut self, item: NewItem) -> NonZeroU32 {
        if let Some(line) = self.items.iter_mut().find(|line| line.name() == item.name()) {
            line.increment();
            return line.quantity();
        }
        let line = LineItem::from(item);
        let quantity = line.quantity();
        self.items.push(line);
        quantity
    }

    /// Remove the line at `index`.
    ///
    /// Returns `None` and leaves the cart untouched when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<LineItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Sum of unit price × quantity over all lines, saturating at
    /// [`Decimal::MAX`].
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(LineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|line| u64::from(line.quantity().get()))
            .sum()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = core::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
