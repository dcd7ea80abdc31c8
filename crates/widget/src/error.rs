//! Widget error type.
//!
//! Nothing here is fatal to the page: callers log the error and leave the
//! cart as it was.

use ludoteca_core::CartError;
use thiserror::Error;

/// Errors from handling a cart action or drawing the cart.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Persisting the cart failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// A cart fragment template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

/// Result type alias for `WidgetError`.
pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use ludoteca_core::StorageError;

    use super::*;

    #[test]
    fn test_widget_error_display() {
        let err = WidgetError::from(CartError::Storage(StorageError::Unavailable(
            "localStorage disabled".to_string(),
        )));
        assert_eq!(
            err.to_string(),
            "Cart error: storage error: storage unavailable: localStorage disabled"
        );
    }
}
