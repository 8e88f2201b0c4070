//! Header panel controller: panel visibility, search, login and cart requests
//!
//! `HeaderState` never owns cart data. It reads a snapshot handed in by the
//! caller and relays every change to a [`CartHost`].

use super::cart::{CartHost, CartLineItem, CartTotals};
use super::types::{Anchor, AuthProvider, Panel, PanelSet};

/// Section a successful search scrolls to
pub const SEARCH_TARGET: Anchor = Anchor::Montres;

/// Something that can bring a page section into view
pub trait Navigator {
    fn scroll_to(&mut self, anchor: Anchor);
}

#[derive(Clone, Debug, Default)]
pub struct HeaderState {
    pub panels: PanelSet,
    pub search_query: String,
    pub last_auth_provider: Option<AuthProvider>,
}

impl HeaderState {
    pub fn is_open(&self, panel: Panel) -> bool {
        self.panels.is_open(panel)
    }

    pub fn set_panel(&mut self, panel: Panel, open: bool) {
        tracing::debug!(panel = ?panel, open, "Setting panel visibility");
        self.panels.set(panel, open);
        if panel == Panel::Search && !open {
            self.search_query.clear();
        }
    }

    pub fn toggle_panel(&mut self, panel: Panel) {
        let open = !self.panels.is_open(panel);
        self.set_panel(panel, open);
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
    }

    /// Submit the current query. Returns whether navigation happened.
    pub fn submit_search(&mut self, navigator: &mut dyn Navigator) -> bool {
        if self.search_query.trim().is_empty() {
            tracing::debug!("Ignoring empty search submission");
            return false;
        }

        tracing::info!(query = %self.search_query.trim(), target = SEARCH_TARGET.href(), "Search submitted");
        navigator.scroll_to(SEARCH_TARGET);
        self.set_panel(Panel::Search, false);
        true
    }

    pub fn select_menu_item(&mut self, navigator: &mut dyn Navigator, anchor: Anchor) {
        navigator.scroll_to(anchor);
        self.set_panel(Panel::Menu, false);
    }

    /// Forward a quantity change, clamped at zero.
    ///
    /// Whether zero removes the line is left to the host.
    pub fn request_quantity_change(&self, host: &mut dyn CartHost, id: u32, new_quantity: i64) {
        let effective = new_quantity.clamp(0, u32::MAX as i64) as u32;
        tracing::debug!(id, requested = new_quantity, effective, "Requesting quantity change");
        host.update_cart_item(id, effective);
    }

    pub fn request_increment(&self, host: &mut dyn CartHost, item: &CartLineItem) {
        self.request_quantity_change(host, item.id, item.quantity as i64 + 1);
    }

    pub fn request_decrement(&self, host: &mut dyn CartHost, item: &CartLineItem) {
        self.request_quantity_change(host, item.id, item.quantity as i64 - 1);
    }

    pub fn request_remove(&self, host: &mut dyn CartHost, id: u32) {
        tracing::debug!(id, "Requesting removal");
        host.remove_from_cart(id);
    }

    pub fn request_checkout(&self, host: &mut dyn CartHost) {
        tracing::debug!("Requesting checkout");
        host.on_checkout();
    }

    pub fn select_auth_provider(&mut self, provider: AuthProvider) {
        tracing::info!(provider = %provider, "Logging in with {}", provider);
        self.last_auth_provider = Some(provider);
        self.set_panel(Panel::Login, false);
    }

    pub fn totals(&self, snapshot: &[CartLineItem]) -> CartTotals {
        CartTotals::from_items(snapshot)
    }
}
