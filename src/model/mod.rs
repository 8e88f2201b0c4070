//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Panels, page anchors, login options and UI state
//! - `cart`: Cart line items, price parsing and totals
//! - `header`: Header panel controller (search, login, cart requests)
//! - `showcase`: Media showcase selection and playback mirror
//! - `storefront`: Catalog and authoritative cart owner
//! - `app_model`: Main application model with state management methods

mod types;
mod cart;
mod header;
mod showcase;
mod storefront;
mod app_model;

// Re-export all public types for convenient access
pub use types::{Anchor, LoginOption, Panel, UiState};

pub use cart::{format_amount, CartTotals};

pub use showcase::{ShowcaseState, SHOWCASE_MEDIA, SHOWCASE_STATS};

pub use storefront::StorefrontView;

pub use app_model::AppModel;
