//! The storefront owns the catalog and the authoritative cart

use chrono::Local;
use serde::Serialize;

use crate::config::ProductConfig;
use super::cart::{format_amount, CartHost, CartLineItem, CartTotals};
use super::types::Anchor;

/// Summary of a placed order, logged as JSON at checkout
#[derive(Clone, Debug, Serialize)]
pub struct OrderSummary {
    pub reference: String,
    pub placed_at: String,
    pub lines: Vec<CartLineItem>,
    pub item_count: u64,
    pub total: String,
}

/// Cloned cart and catalog data for one render pass
#[derive(Clone, Debug, Default)]
pub struct StorefrontView {
    pub cart: Vec<CartLineItem>,
    pub products: Vec<ProductConfig>,
    pub currency: String,
}

pub struct Storefront {
    catalog: Vec<ProductConfig>,
    cart: Vec<CartLineItem>,
    currency: String,
    last_order: Option<OrderSummary>,
    status: Option<String>,
}

impl Storefront {
    pub fn new(catalog: Vec<ProductConfig>, currency: impl Into<String>) -> Self {
        Self {
            catalog,
            cart: Vec::new(),
            currency: currency.into(),
            last_order: None,
            status: None,
        }
    }

    pub fn cart_items(&self) -> &[CartLineItem] {
        &self.cart
    }

    pub fn products_in(&self, anchor: Anchor) -> Vec<ProductConfig> {
        self.catalog
            .iter()
            .filter(|p| p.section.anchor() == anchor)
            .cloned()
            .collect()
    }

    pub fn view(&self, anchor: Anchor) -> StorefrontView {
        StorefrontView {
            cart: self.cart.clone(),
            products: self.products_in(anchor),
            currency: self.currency.clone(),
        }
    }

    pub fn last_order(&self) -> Option<&OrderSummary> {
        self.last_order.as_ref()
    }

    /// Status line produced by the last cart operation, if any
    pub fn take_status(&mut self) -> Option<String> {
        self.status.take()
    }

    /// Add one unit of a catalog product, merging with an existing line.
    pub fn add_product(&mut self, product_id: u32) -> bool {
        let Some(product) = self.catalog.iter().find(|p| p.id == product_id) else {
            tracing::warn!(product_id, "Unknown product");
            return false;
        };

        if let Some(line) = self.cart.iter_mut().find(|l| l.id == product_id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.cart.push(CartLineItem {
                id: product.id,
                name: product.name.clone(),
                price: product.price.clone(),
                image: product.image.clone(),
                quantity: 1,
            });
        }

        tracing::info!(product_id, name = %product.name, "Added to cart");
        self.status = Some(format!("{} ajouté au panier", product.name));
        true
    }
}

impl CartHost for Storefront {
    /// Zero keeps the row; removal is an explicit request.
    fn update_cart_item(&mut self, id: u32, quantity: u32) {
        match self.cart.iter_mut().find(|l| l.id == id) {
            Some(line) => {
                tracing::debug!(id, from = line.quantity, to = quantity, "Updating cart line");
                line.quantity = quantity;
            }
            None => tracing::debug!(id, "Quantity update for item not in cart"),
        }
    }

    fn remove_from_cart(&mut self, id: u32) {
        let before = self.cart.len();
        self.cart.retain(|l| l.id != id);
        if self.cart.len() < before {
            tracing::info!(id, "Removed from cart");
        }
    }

    fn on_checkout(&mut self) {
        let totals = CartTotals::from_items(&self.cart);
        if totals.count == 0 {
            self.status = Some("Votre panier est vide".to_string());
            return;
        }

        let now = Local::now();
        let order = OrderSummary {
            reference: format!("TV-{}", now.format("%Y%m%d-%H%M%S")),
            placed_at: now.to_rfc3339(),
            lines: self.cart.iter().filter(|l| l.quantity > 0).cloned().collect(),
            item_count: totals.count,
            total: format!("{} {}", format_amount(totals.amount), self.currency),
        };

        match serde_json::to_string(&order) {
            Ok(json) => tracing::info!(order = %json, "Checkout completed"),
            Err(e) => tracing::warn!(error = %e, reference = %order.reference, "Could not serialize order"),
        }

        self.status = Some(format!("Commande {} confirmée ({})", order.reference, order.total));
        self.cart.clear();
        self.last_order = Some(order);
    }
}
