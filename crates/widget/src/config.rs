//! Widget configuration.
//!
//! Defaults match the markup of the shop's static pages and the Italian shop
//! copy. Native hosts can override them from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORAGE_KEY` - Key the cart is persisted under (default: `cartItems`)
//! - `CART_CURRENCY` - ISO 4217 code used for display (default: `EUR`)
//! - `CART_EMPTY_MESSAGE` - Text shown when the cart is empty
//! - `CART_CHECKOUT_MESSAGE` - Notice shown when checkout is clicked

use ludoteca_core::{CurrencyCode, DEFAULT_STORAGE_KEY};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Key the cart is persisted under
    pub storage_key: String,
    /// Currency used to format prices
    pub currency: CurrencyCode,
    /// Element ids and selectors of the page
    pub dom: DomConfig,
    /// User-facing copy
    pub messages: Messages,
}

/// Where the widget finds its regions and controls in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomConfig {
    /// Id of the item list region
    pub items_id: String,
    /// Id of the total region
    pub total_id: String,
    /// Id of the container holding the clear and checkout buttons
    pub actions_id: String,
    /// Id of the clear button
    pub clear_id: String,
    /// Id of the checkout button
    pub checkout_id: String,
    /// Selector matching page-wide "add to cart" controls
    pub add_selector: String,
    /// Class carried by each row's remove button
    pub remove_class: String,
}

/// User-facing copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Shown in the item list when the cart is empty
    pub empty_cart: String,
    /// Prefix of the total line
    pub total_label: String,
    /// Label of each row's remove button
    pub remove_label: String,
    /// Confirmation after an add; `{name}` is replaced by the item name
    pub added: String,
    /// Notice shown when checkout is clicked
    pub checkout_unavailable: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency: CurrencyCode::EUR,
            dom: DomConfig::default(),
            messages: Messages::default(),
        }
    }
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            items_id: "cart-items".to_string(),
            total_id: "cart-total".to_string(),
            actions_id: "cart-actions".to_string(),
            clear_id: "clear-cart".to_string(),
            checkout_id: "checkout".to_string(),
            add_selector: ".add-to-cart".to_string(),
            remove_class: "remove-item".to_string(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_cart: "Il tuo carrello è vuoto.".to_string(),
            total_label: "Totale".to_string(),
            remove_label: "Rimuovi".to_string(),
            added: "{name} è stato aggiunto al carrello.".to_string(),
            checkout_unavailable: "Funzionalità di pagamento non ancora implementata. \
                                   Contattaci per finalizzare l’acquisto."
                .to_string(),
        }
    }
}

impl Messages {
    /// Confirmation shown after `name` was added.
    #[must_use]
    pub fn added(&self, name: &str) -> String {
        self.added.replace("{name}", name)
    }
}

impl WidgetConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a variable lookup, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(key) = lookup("CART_STORAGE_KEY") {
            if key.trim().is_empty() {
                return Err(ConfigError::InvalidEnvVar(
                    "CART_STORAGE_KEY".to_string(),
                    "must not be empty".to_string(),
                ));
            }
            config.storage_key = key;
        }
        if let Some(code) = lookup("CART_CURRENCY") {
            config.currency = code
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("CART_CURRENCY".to_string(), e))?;
        }
        if let Some(message) = lookup("CART_EMPTY_MESSAGE") {
            config.messages.empty_cart = message;
        }
        if let Some(message) = lookup("CART_CHECKOUT_MESSAGE") {
            config.messages.checkout_unavailable = message;
        }

        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup<'a>(vars: &'a HashMap<&str, &str>) -> impl Fn(&str) -> Option<String> + 'a {
        |key: &str| vars.get(key).map(ToString::to_string)
    }

    #[test]
    fn test_defaults_match_page_markup() {
        let config = WidgetConfig::default();
        assert_eq!(config.storage_key, "cartItems");
        assert_eq!(config.currency, CurrencyCode::EUR);
        assert_eq!(config.dom.items_id, "cart-items");
        assert_eq!(config.dom.add_selector, ".add-to-cart");
    }

    #[test]
    fn test_added_message_substitutes_name() {
        let messages = Messages::default();
        assert_eq!(
            messages.added("Chess"),
            "Chess è stato aggiunto al carrello."
        );
    }

    #[test]
    fn test_from_lookup_empty_uses_defaults() {
        let vars = HashMap::new();
        let config = WidgetConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars = HashMap::from([
            ("CART_STORAGE_KEY", "basket"),
            ("CART_CURRENCY", "gbp"),
            ("CART_EMPTY_MESSAGE", "Nothing here."),
        ]);
        let config = WidgetConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.storage_key, "basket");
        assert_eq!(config.currency, CurrencyCode::GBP);
        assert_eq!(config.messages.empty_cart, "Nothing here.");
    }

    #[test]
    fn test_from_lookup_invalid_currency() {
        let vars = HashMap::from([("CART_CURRENCY", "doubloons")]);
        let err = WidgetConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(name, _) if name == "CART_CURRENCY"));
    }

    #[test]
    fn test_from_lookup_blank_storage_key() {
        let vars = HashMap::from([("CART_STORAGE_KEY", "  ")]);
        assert!(WidgetConfig::from_lookup(lookup(&vars)).is_err());
    }
}
