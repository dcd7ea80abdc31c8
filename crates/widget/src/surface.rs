//! Presentation surface the cart view writes into.

use std::cell::RefCell;

/// The regions of a page the cart view draws on.
///
/// A surface owns three regions: the item list, the total line and the
/// actions container (clear + checkout). Notices go to the user directly
/// and work even on pages without a cart view.
pub trait Surface {
    /// Whether the item list, total and actions regions are all present.
    fn is_mounted(&self) -> bool;

    /// Replace the item list's contents with `html`.
    fn set_items_html(&self, html: &str);

    /// Replace the total line's text.
    fn set_total_text(&self, text: &str);

    /// Show or hide the actions container.
    fn set_actions_visible(&self, visible: bool);

    /// Tell the user something (e.g. an alert in the browser).
    fn notify(&self, message: &str);
}

impl<T: Surface + ?Sized> Surface for &T {
    fn is_mounted(&self) -> bool {
        (**self).is_mounted()
    }

    fn set_items_html(&self, html: &str) {
        (**self).set_items_html(html);
    }

    fn set_total_text(&self, text: &str) {
        (**self).set_total_text(text);
    }

    fn set_actions_visible(&self, visible: bool) {
        (**self).set_actions_visible(visible);
    }

    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}

/// Last state written to a [`MemorySurface`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceState {
    pub items_html: String,
    pub total_text: String,
    /// `None` until the view first shows or hides the actions
    pub actions_visible: Option<bool>,
    pub notices: Vec<String>,
}

/// Surface that records what was drawn, for native hosts and tests.
#[derive(Debug, Default)]
pub struct MemorySurface {
    mounted: bool,
    state: RefCell<SurfaceState>,
}

impl MemorySurface {
    /// A surface with all regions present.
    #[must_use]
    pub fn mounted() -> Self {
        Self {
            mounted: true,
            state: RefCell::default(),
        }
    }

    /// A surface with no cart regions, like a product listing page.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> SurfaceState {
        self.state.borrow().clone()
    }

    /// Drain the notices shown so far.
    pub fn take_notices(&self) -> Vec<String> {
        std::mem::take(&mut self.state.borrow_mut().notices)
    }
}

impl Surface for MemorySurface {
    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn set_items_html(&self, html: &str) {
        html.clone_into(&mut self.state.borrow_mut().items_html);
    }

    fn set_total_text(&self, text: &str) {
        text.clone_into(&mut self.state.borrow_mut().total_text);
    }

    fn set_actions_visible(&self, visible: bool) {
        self.state.borrow_mut().actions_visible = Some(visible);
    }

    fn notify(&self, message: &str) {
        self.state.borrow_mut().notices.push(message.to_string());
    }
}
