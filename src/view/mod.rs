//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, popup placement)
//! - `layout`: Header bar and footer hints
//! - `page`: Current page section (products or text)
//! - `showcase`: Video showcase with progress gauge and stats
//! - `overlays`: Menu, search, login, cart sidebar, help and status overlays

mod utils;
mod layout;
mod page;
mod showcase;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::config::StoreConfig;
use crate::model::{Panel, ShowcaseState, StorefrontView, UiState};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        store: &StoreConfig,
        ui_state: &UiState,
        showcase: &ShowcaseState,
        storefront: &StorefrontView,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header: logo, nav, actions
                Constraint::Min(0),    // Page section + showcase
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        let totals = ui_state.header.totals(&storefront.cart);
        layout::render_header(frame, chunks[0], store, ui_state, totals.count);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        page::render_page(frame, body[0], store, ui_state, storefront);
        showcase::render_showcase(frame, body[1], showcase);
        layout::render_footer(frame, chunks[2]);

        // Panels drawn bottom-up so the topmost one ends up on top
        for panel in Panel::STACK.into_iter().rev() {
            if !ui_state.header.is_open(panel) {
                continue;
            }
            match panel {
                Panel::Menu => overlays::render_menu(frame, chunks[0], store, ui_state),
                Panel::Cart => overlays::render_cart_sidebar(frame, ui_state, storefront, totals),
                Panel::Login => overlays::render_login(frame, ui_state),
                Panel::Search => overlays::render_search(frame, ui_state),
            }
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }

        if ui_state.status_message.is_some() {
            overlays::render_status_notification(frame, ui_state);
        }
    }
}
