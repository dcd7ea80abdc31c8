//! Ludoteca Widget - Shopping cart for the static shop pages.
//!
//! The widget keeps the cart in a key-value store (the browser's
//! `localStorage` in production), draws it into the cart page and turns
//! clicks into cart mutations.
//!
//! # Architecture
//!
//! - [`CartView`] owns a [`CartStore`](ludoteca_core::CartStore) and a
//!   [`Surface`]; it renders and handles [`CartAction`]s
//! - Askama templates produce the item list fragments with HTML escaping
//! - [`controls`] reads `data-*` attributes off page controls
//! - The `browser` module (feature `web`, wasm32 only) binds all of it to the
//!   DOM and `localStorage`

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod controls;
pub mod error;
pub mod summary;
pub mod surface;
pub mod templates;
pub mod view;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod browser;

pub use config::{ConfigError, DomConfig, Messages, WidgetConfig};
pub use controls::{CartAction, ControlError, read_add_control, read_remove_control};
pub use error::WidgetError;
pub use summary::{CartRowView, CartSummary};
pub use surface::{MemorySurface, Surface, SurfaceState};
pub use view::{CartView, DisplayMode};
