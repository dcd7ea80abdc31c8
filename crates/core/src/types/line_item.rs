//! Cart line items.

use core::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::price::{PriceError, check_amount};

/// A product the shopper asked to add, before it becomes a cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    name: String,
    price: Decimal,
    image: Option<String>,
}

impl NewItem {
    /// Create a new item.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError`] if `price` is negative or above
    /// [`MAX_AMOUNT`](super::price::MAX_AMOUNT).
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        image: Option<String>,
    ) -> Result<Self, PriceError> {
        Ok(Self {
            name: name.into(),
            price: check_amount(price)?,
            image,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

/// One product entry in the cart.
///
/// The name is the line's key: a cart never holds two lines with the same
/// name. Quantity is at least one for as long as the line exists.
///
/// Serialized as `{"name": "Chess", "price": 19.99, "quantity": 2, "image": "x"}`
/// with the price as a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    name: String,
    #[serde(with = "unit_price")]
    price: Decimal,
    quantity: NonZeroU32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

impl LineItem {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    #[must_use]
    pub const fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Unit price multiplied by quantity, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price
            .saturating_mul(Decimal::from(self.quantity.get()))
    }

    /// Bump the quantity by one, saturating at `u32::MAX`.
    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }
}

impl From<NewItem> for LineItem {
    fn from(item: NewItem) -> Self {
        Self {
            name: item.name,
            price: item.price,
            quantity: NonZeroU32::MIN,
            image: item.image,
        }
    }
}

/// Price as a JSON number, rejecting out-of-range amounts on the way in.
mod unit_price {
    use rust_decimal::Decimal;
    use serde::{Deserializer, Serializer, de::Error as _};

    use super::check_amount;

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        check_amount(amount).map_err(D::Error::custom)
    }
}
