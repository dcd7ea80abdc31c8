//! Core types for the Ludoteca cart.
//!
//! This module provides type-safe wrappers for the cart's domain concepts.

pub mod cart;
pub mod line_item;
pub mod price;

pub use cart::Cart;
pub use line_item::{LineItem, NewItem};
pub use price::{CurrencyCode, MAX_AMOUNT, Price, PriceError, check_amount, parse_amount};
