//! Main application model with state management

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::config::{Config, ProductConfig, StoreConfig};
use crate::player::{PlayerCommand, PlayerEvent};
use super::cart::CartTotals;
use super::header::Navigator;
use super::showcase::ShowcaseState;
use super::storefront::{Storefront, StorefrontView};
use super::types::{Anchor, LoginOption, Panel, UiState};

const STATUS_TTL_SECS: u64 = 5;

/// Main application model containing all state
pub struct AppModel {
    store_info: StoreConfig,
    pub ui_state: Arc<Mutex<UiState>>,
    showcase: Arc<Mutex<ShowcaseState>>,
    storefront: Arc<Mutex<Storefront>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(config: &Config) -> Self {
        Self {
            store_info: config.store.clone(),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            showcase: Arc::new(Mutex::new(ShowcaseState::default())),
            storefront: Arc::new(Mutex::new(Storefront::new(
                config.catalog.products.clone(),
                config.store.currency.clone(),
            ))),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub fn store_info(&self) -> &StoreConfig {
        &self.store_info
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn get_showcase_state(&self) -> ShowcaseState {
        self.showcase.lock().await.clone()
    }

    pub async fn get_storefront_view(&self) -> StorefrontView {
        let anchor = self.ui_state.lock().await.page.current;
        self.storefront.lock().await.view(anchor)
    }

    pub async fn cart_totals(&self) -> CartTotals {
        let ui = self.ui_state.lock().await;
        let store = self.storefront.lock().await;
        ui.header.totals(store.cart_items())
    }

    // ========================================================================
    // Status notification & help
    // ========================================================================

    pub async fn set_status(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.status_message = Some(message);
        state.status_timestamp = Some(Instant::now());
    }

    pub async fn clear_status(&self) {
        let mut state = self.ui_state.lock().await;
        state.status_message = None;
        state.status_timestamp = None;
    }

    pub async fn has_status(&self) -> bool {
        self.ui_state.lock().await.status_message.is_some()
    }

    pub async fn auto_clear_old_status(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.status_timestamp {
            if timestamp.elapsed().as_secs() > STATUS_TTL_SECS {
                state.status_message = None;
                state.status_timestamp = None;
            }
        }
    }

    /// Move a pending storefront message into the status notification
    async fn sync_storefront_status(&self) {
        let message = self.storefront.lock().await.take_status();
        if let Some(message) = message {
            self.set_status(message).await;
        }
    }

    pub async fn show_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    // ========================================================================
    // Panels
    // ========================================================================

    pub async fn set_panel(&self, panel: Panel, open: bool) {
        let mut state = self.ui_state.lock().await;
        state.header.set_panel(panel, open);
        if open {
            Self::reset_panel_cursor(&mut state, panel);
        }
    }

    pub async fn toggle_panel(&self, panel: Panel) {
        let mut state = self.ui_state.lock().await;
        state.header.toggle_panel(panel);
        if state.header.is_open(panel) {
            Self::reset_panel_cursor(&mut state, panel);
        }
    }

    fn reset_panel_cursor(state: &mut UiState, panel: Panel) {
        match panel {
            Panel::Menu => {
                let current = state.page.current;
                state.menu_selected = Anchor::ALL.iter().position(|a| *a == current).unwrap_or(0);
            }
            Panel::Login => state.login_selected = 0,
            Panel::Cart => state.cart_selected = 0,
            Panel::Search => {}
        }
    }

    pub async fn topmost_panel(&self) -> Option<Panel> {
        self.ui_state.lock().await.header.panels.topmost()
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub async fn append_to_search(&self, c: char) {
        self.ui_state.lock().await.header.push_search_char(c);
    }

    pub async fn backspace_search(&self) {
        self.ui_state.lock().await.header.pop_search_char();
    }

    pub async fn submit_search(&self) -> bool {
        let mut state = self.ui_state.lock().await;
        let UiState { header, page, .. } = &mut *state;
        header.submit_search(page)
    }

    // ========================================================================
    // Menu
    // ========================================================================

    pub async fn menu_move_up(&self) {
        let mut state = self.ui_state.lock().await;
        state.menu_selected = state.menu_selected.saturating_sub(1);
    }

    pub async fn menu_move_down(&self) {
        let mut state = self.ui_state.lock().await;
        if state.menu_selected < Anchor::ALL.len() - 1 {
            state.menu_selected += 1;
        }
    }

    pub async fn select_menu_item(&self) -> Anchor {
        let mut state = self.ui_state.lock().await;
        let anchor = Anchor::ALL[state.menu_selected.min(Anchor::ALL.len() - 1)];
        let UiState { header, page, .. } = &mut *state;
        header.select_menu_item(page, anchor);
        anchor
    }

    pub async fn navigate_to(&self, anchor: Anchor) {
        self.ui_state.lock().await.page.scroll_to(anchor);
    }

    // ========================================================================
    // Login
    // ========================================================================

    pub async fn login_move_up(&self) {
        let mut state = self.ui_state.lock().await;
        state.login_selected = state.login_selected.saturating_sub(1);
    }

    pub async fn login_move_down(&self) {
        let mut state = self.ui_state.lock().await;
        if state.login_selected < LoginOption::ALL.len() - 1 {
            state.login_selected += 1;
        }
    }

    pub async fn select_login_option(&self) -> LoginOption {
        let mut state = self.ui_state.lock().await;
        let option = LoginOption::ALL[state.login_selected.min(LoginOption::ALL.len() - 1)];
        match option {
            LoginOption::Provider(provider) => state.header.select_auth_provider(provider),
            LoginOption::CreateAccount => tracing::debug!("Create account selected"),
        }
        option
    }

    // ========================================================================
    // Cart sidebar
    // ========================================================================

    pub async fn cart_move_up(&self) {
        let mut state = self.ui_state.lock().await;
        state.cart_selected = state.cart_selected.saturating_sub(1);
    }

    pub async fn cart_move_down(&self) {
        let mut state = self.ui_state.lock().await;
        let len = self.storefront.lock().await.cart_items().len();
        if state.cart_selected + 1 < len {
            state.cart_selected += 1;
        }
    }

    pub async fn increment_selected_item(&self) {
        let state = self.ui_state.lock().await;
        let mut store = self.storefront.lock().await;
        if let Some(item) = store.cart_items().get(state.cart_selected).cloned() {
            state.header.request_increment(&mut *store, &item);
        }
    }

    pub async fn decrement_selected_item(&self) {
        let state = self.ui_state.lock().await;
        let mut store = self.storefront.lock().await;
        if let Some(item) = store.cart_items().get(state.cart_selected).cloned() {
            state.header.request_decrement(&mut *store, &item);
        }
    }

    pub async fn remove_selected_item(&self) {
        let mut state = self.ui_state.lock().await;
        let mut store = self.storefront.lock().await;
        if let Some(id) = store.cart_items().get(state.cart_selected).map(|item| item.id) {
            state.header.request_remove(&mut *store, id);
        }
        state.cart_selected = state
            .cart_selected
            .min(store.cart_items().len().saturating_sub(1));
    }

    /// Returns the reference of the order this request placed, if any.
    pub async fn checkout(&self) -> Option<String> {
        let totals = self.cart_totals().await;
        tracing::info!(count = totals.count, amount = totals.amount, "Checkout requested");
        let placed = {
            let mut state = self.ui_state.lock().await;
            let mut store = self.storefront.lock().await;
            let had_items = CartTotals::from_items(store.cart_items()).count > 0;
            state.header.request_checkout(&mut *store);
            state.cart_selected = 0;
            if had_items && store.cart_items().is_empty() {
                store.last_order().map(|order| order.reference.clone())
            } else {
                None
            }
        };
        if let Some(reference) = &placed {
            tracing::debug!(reference = %reference, "Order placed");
        }
        self.sync_storefront_status().await;
        placed
    }

    // ========================================================================
    // Page
    // ========================================================================

    pub async fn product_move_up(&self) {
        let mut state = self.ui_state.lock().await;
        state.page.product_selected = state.page.product_selected.saturating_sub(1);
    }

    pub async fn product_move_down(&self) {
        let mut state = self.ui_state.lock().await;
        let count = self.storefront.lock().await.products_in(state.page.current).len();
        if state.page.product_selected + 1 < count {
            state.page.product_selected += 1;
        }
    }

    pub async fn add_selected_product(&self) -> Option<ProductConfig> {
        let product = {
            let state = self.ui_state.lock().await;
            let mut store = self.storefront.lock().await;
            let product = store
                .products_in(state.page.current)
                .get(state.page.product_selected)
                .cloned()?;
            store.add_product(product.id);
            product
        };
        self.sync_storefront_status().await;
        Some(product)
    }

    // ========================================================================
    // Showcase
    // ========================================================================

    pub async fn select_media(&self, index: i64) -> bool {
        self.showcase.lock().await.select(index)
    }

    pub async fn select_next_media(&self) -> Option<usize> {
        let mut showcase = self.showcase.lock().await;
        showcase.select_next().then_some(showcase.selected)
    }

    pub async fn select_prev_media(&self) -> Option<usize> {
        let mut showcase = self.showcase.lock().await;
        showcase.select_prev().then_some(showcase.selected)
    }

    pub async fn selected_media(&self) -> usize {
        self.showcase.lock().await.selected
    }

    pub async fn playback_request(&self) -> PlayerCommand {
        self.showcase.lock().await.playback_request()
    }

    pub async fn is_playing(&self) -> bool {
        self.showcase.lock().await.playing
    }

    pub async fn apply_player_event(&self, event: PlayerEvent) -> bool {
        self.showcase.lock().await.apply_player_event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> AppModel {
        AppModel::new(&Config::default())
    }

    #[tokio::test]
    async fn test_add_and_adjust_cart_through_header() {
        let model = model();
        model.navigate_to(Anchor::Montres).await;
        let product = model.add_selected_product().await.unwrap();
        assert_eq!(product.name, "Montre Royale");
        assert!(model.has_status().await);

        model.increment_selected_item().await;
        assert_eq!(model.cart_totals().await.count, 2);

        model.decrement_selected_item().await;
        model.decrement_selected_item().await;
        model.decrement_selected_item().await;
        let view = model.get_storefront_view().await;
        assert_eq!(view.cart.len(), 1);
        assert_eq!(view.cart[0].quantity, 0);

        model.remove_selected_item().await;
        assert!(model.get_storefront_view().await.cart.is_empty());
    }

    #[tokio::test]
    async fn test_no_product_outside_product_sections() {
        let model = model();
        assert!(model.add_selected_product().await.is_none());
    }

    #[tokio::test]
    async fn test_search_moves_page_to_watches() {
        let model = model();
        model.set_panel(Panel::Cart, true).await;
        model.set_panel(Panel::Search, true).await;
        for c in "Montre Royale".chars() {
            model.append_to_search(c).await;
        }
        assert!(model.submit_search().await);

        let ui = model.get_ui_state().await;
        assert_eq!(ui.page.current, Anchor::Montres);
        assert!(!ui.header.is_open(Panel::Search));
        assert!(ui.header.is_open(Panel::Cart));
    }

    #[tokio::test]
    async fn test_menu_selection_starts_at_current_section() {
        let model = model();
        model.navigate_to(Anchor::Lunettes).await;
        model.set_panel(Panel::Menu, true).await;
        model.menu_move_down().await;
        assert_eq!(model.select_menu_item().await, Anchor::Collections);
        assert!(!model.get_ui_state().await.header.is_open(Panel::Menu));
    }

    #[tokio::test]
    async fn test_create_account_keeps_login_open() {
        let model = model();
        model.set_panel(Panel::Login, true).await;
        model.login_move_down().await;
        model.login_move_down().await;
        assert_eq!(model.select_login_option().await, LoginOption::CreateAccount);
        assert!(model.get_ui_state().await.header.is_open(Panel::Login));
    }

    #[tokio::test]
    async fn test_checkout_reports_status() {
        let model = model();
        model.navigate_to(Anchor::Lunettes).await;
        model.add_selected_product().await;
        model.clear_status().await;

        let reference = model.checkout().await.unwrap();
        let ui = model.get_ui_state().await;
        assert!(ui.status_message.unwrap().contains(&reference));
        assert!(model.get_storefront_view().await.cart.is_empty());
    }

    #[tokio::test]
    async fn test_empty_checkout_places_no_order() {
        let model = model();
        model.navigate_to(Anchor::Montres).await;
        model.add_selected_product().await;
        assert!(model.checkout().await.is_some());

        // The earlier order stays on record but this request placed nothing
        assert!(model.checkout().await.is_none());
        let ui = model.get_ui_state().await;
        assert_eq!(ui.status_message.as_deref(), Some("Votre panier est vide"));
    }

    #[tokio::test]
    async fn test_zero_quantity_cart_places_no_order() {
        let model = model();
        model.navigate_to(Anchor::Montres).await;
        model.add_selected_product().await;
        model.decrement_selected_item().await;
        assert!(model.checkout().await.is_none());
        assert_eq!(model.get_storefront_view().await.cart.len(), 1);
    }
}
