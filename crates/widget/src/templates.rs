//! Askama templates for the cart's item list.
//!
//! Both fragments are injected into the item list region as HTML. Item names
//! come from page attributes, so everything goes through askama's HTML
//! escaping.

use askama::Template;

use crate::summary::CartRowView;

/// Cart rows fragment.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate<'a> {
    pub rows: &'a [CartRowView],
    pub remove_class: &'a str,
    pub remove_label: &'a str,
}

/// Empty-state fragment.
#[derive(Template)]
#[template(path = "partials/cart_empty.html")]
pub struct CartEmptyTemplate<'a> {
    pub message: &'a str,
}
