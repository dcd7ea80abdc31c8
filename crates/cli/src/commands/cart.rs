//! Cart commands.
//!
//! Each command drives the same [`CartView`] the browser uses, with the
//! cart persisted in a [`FileStore`] and the view drawn into a
//! [`MemorySurface`] whose contents are written to `out`.

use std::error::Error;
use std::io::Write;
use std::path::Path;

use ludoteca_core::CartStore;
use ludoteca_widget::controls::{ATTR_IMAGE, ATTR_NAME, ATTR_PRICE};
use ludoteca_widget::{CartAction, CartView, MemorySurface, WidgetConfig, read_add_control};
use tracing::instrument;

use crate::file_store::FileStore;

/// Cart view used by the CLI.
pub type CliView = CartView<FileStore, MemorySurface>;

type CommandResult = Result<(), Box<dyn Error>>;

/// Open the cart persisted at `path`.
#[must_use]
pub fn open(path: &Path, config: WidgetConfig) -> CliView {
    let store = CartStore::with_key(FileStore::new(path), config.storage_key.clone());
    CartView::new(store, MemorySurface::mounted(), config)
}

/// Add one unit of an item.
///
/// # Errors
///
/// Returns an error if the price is invalid or the cart cannot be saved.
#[instrument(skip(view, out))]
pub fn add(
    view: &CliView,
    name: &str,
    price: &str,
    image: Option<&str>,
    out: &mut impl Write,
) -> CommandResult {
    let item = read_add_control(|attr| match attr {
        ATTR_NAME => Some(name.to_string()),
        ATTR_PRICE => Some(price.to_string()),
        ATTR_IMAGE => image.map(String::from),
        _ => None,
    })?;
    view.handle(CartAction::Add(item))?;
    write_notices(view, out)
}

/// Remove the line at `index`, then show the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved or written out.
#[instrument(skip(view, out))]
pub fn remove(view: &CliView, index: usize, out: &mut impl Write) -> CommandResult {
    if view.store().load().get(index).is_none() {
        writeln!(out, "No cart line at index {index}.")?;
    }
    view.handle(CartAction::Remove(index))?;
    show(view, out)
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the stored cart cannot be removed.
#[instrument(skip(view, out))]
pub fn clear(view: &CliView, out: &mut impl Write) -> CommandResult {
    view.handle(CartAction::Clear)?;
    writeln!(out, "{}", view.config().messages.empty_cart)?;
    Ok(())
}

/// Print the cart as a table.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn show(view: &CliView, out: &mut impl Write) -> CommandResult {
    let summary = view.summary();
    let messages = &view.config().messages;

    if summary.is_empty() {
        writeln!(out, "{}", messages.empty_cart)?;
        return Ok(());
    }

    let width = summary
        .rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Item".len());

    writeln!(out, "{:>3}  {:<width$}  {:>4}  {:>10}  {:>10}", "#", "Item", "Qty", "Price", "Line")?;
    for row in &summary.rows {
        writeln!(
            out,
            "{:>3}  {:<width$}  {:>4}  {:>10}  {:>10}",
            row.index, row.name, row.quantity, row.unit_price, row.line_price
        )?;
    }
    writeln!(out, "{}: {}", messages.total_label, summary.total)?;
    Ok(())
}

/// Print the cart fragment and total exactly as the widget draws them.
///
/// # Errors
///
/// Returns an error if a template fails or writing to `out` fails.
pub fn render(view: &CliView, out: &mut impl Write) -> CommandResult {
    view.render()?;
    let state = view.surface().state();
    writeln!(out, "{}", state.items_html.trim())?;
    if !state.total_text.is_empty() {
        writeln!(out, "{}", state.total_text)?;
    }
    Ok(())
}

/// Attempt checkout.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
#[instrument(skip(view, out))]
pub fn checkout(view: &CliView, out: &mut impl Write) -> CommandResult {
    view.handle(CartAction::Checkout)?;
    write_notices(view, out)
}

fn write_notices(view: &CliView, out: &mut impl Write) -> CommandResult {
    for notice in view.surface().take_notices() {
        writeln!(out, "{notice}")?;
    }
    Ok(())
}
