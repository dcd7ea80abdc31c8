//! User intents and the page controls that trigger them.
//!
//! Controls carry their data in `data-*` attributes. Parsing is written
//! against an attribute lookup so the same code serves DOM elements, CLI
//! arguments and tests.

use ludoteca_core::{NewItem, PriceError, parse_amount};
use thiserror::Error;

/// Item name on an "add to cart" control.
pub const ATTR_NAME: &str = "data-name";
/// Unit price on an "add to cart" control.
pub const ATTR_PRICE: &str = "data-price";
/// Optional image reference on an "add to cart" control.
pub const ATTR_IMAGE: &str = "data-image";
/// Row position on a remove control.
pub const ATTR_INDEX: &str = "data-index";

/// Something the shopper asked the cart to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of an item, then confirm.
    Add(NewItem),
    /// Remove the row at this position, then re-render.
    Remove(usize),
    /// Empty the cart, then re-render.
    Clear,
    /// Start checkout. Payment is not available; the user gets a notice.
    Checkout,
}

/// A control whose attributes cannot be turned into an action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("control is missing {0}")]
    MissingAttribute(&'static str),

    #[error("control has an invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    #[error("control has an invalid row index: {0:?}")]
    InvalidIndex(String),
}

/// Read an "add to cart" control.
///
/// The name must be non-blank and the price a non-negative decimal. A blank
/// image attribute counts as no image.
///
/// # Errors
///
/// Returns [`ControlError`] if the name or price is missing or invalid.
pub fn read_add_control(attr: impl Fn(&str) -> Option<String>) -> Result<NewItem, ControlError> {
    let name = attr(ATTR_NAME)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or(ControlError::MissingAttribute(ATTR_NAME))?;
    let price = attr(ATTR_PRICE).ok_or(ControlError::MissingAttribute(ATTR_PRICE))?;
    let price = parse_amount(&price)?;
    let image = attr(ATTR_IMAGE).filter(|image| !image.trim().is_empty());

    Ok(NewItem::new(name, price, image)?)
}

/// Read a row's remove control.
///
/// # Errors
///
/// Returns [`ControlError`] if the index is missing or not a non-negative
/// integer.
pub fn read_remove_control(attr: impl Fn(&str) -> Option<String>) -> Result<usize, ControlError> {
    let raw = attr(ATTR_INDEX).ok_or(ControlError::MissingAttribute(ATTR_INDEX))?;
    raw.trim()
        .parse()
        .map_err(|_| ControlError::InvalidIndex(raw))
}
