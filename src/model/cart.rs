//! Cart line items, price parsing and derived totals
//!
//! The cart itself is owned by the storefront. Everything in here works on a
//! borrowed snapshot (`&[CartLineItem]`) and recomputes totals on every call.

use serde::{Deserialize, Serialize};

/// One product entry in the cart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: u32,
    pub name: String,
    /// Localized price text as displayed, e.g. `"1 500,00 DH"`
    pub price: String,
    pub image: String,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn unit_price(&self) -> f64 {
        parse_price(&self.price)
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price() * self.quantity as f64
    }
}

/// Aggregate metrics derived from a cart snapshot
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CartTotals {
    pub count: u64,
    pub amount: f64,
}

impl CartTotals {
    pub fn from_items(items: &[CartLineItem]) -> Self {
        items.iter().fold(Self::default(), |acc, item| Self {
            count: acc.count + item.quantity as u64,
            amount: acc.amount + item.line_total(),
        })
    }
}

/// Receives mutation requests for a cart it owns.
///
/// Implemented by whatever holds the authoritative cart; callers never touch
/// the collection directly.
pub trait CartHost {
    fn update_cart_item(&mut self, id: u32, quantity: u32);
    fn remove_from_cart(&mut self, id: u32);
    fn on_checkout(&mut self);
}

/// Parse a localized price string into an amount.
///
/// Keeps ASCII digits and commas, turns the first comma into a decimal point
/// and reads the longest numeric prefix. Anything without a numeric prefix
/// yields `0.0`.
pub fn parse_price(text: &str) -> f64 {
    let mut cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();
    if let Some(pos) = cleaned.find(',') {
        cleaned.replace_range(pos..pos + 1, ".");
    }

    let mut end = 0;
    let mut seen_point = false;
    for (i, c) in cleaned.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_point => seen_point = true,
            _ => break,
        }
    }

    match cleaned[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Format an amount the way the shop displays totals (fr-MA grouping).
///
/// Thousands are separated by a space, the decimal separator is a comma and
/// at most two fraction digits are shown, trailing zeros trimmed.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{}{}", sign, grouped)
    } else {
        let digits = format!("{:02}", fraction);
        format!("{}{},{}", sign, grouped, digits.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, price: &str, quantity: u32) -> CartLineItem {
        CartLineItem {
            id,
            name: format!("Article {}", id),
            price: price.to_string(),
            image: String::new(),
            quantity,
        }
    }

    #[test]
    fn test_totals_scenario() {
        let cart = vec![item(1, "1 500,00 DH", 2), item(2, "800,00 DH", 1)];
        let totals = CartTotals::from_items(&cart);
        assert_eq!(totals.count, 3);
        assert!((totals.amount - 3800.0).abs() < 1e-9);
    }

    #[test]
    fn test_totals_empty_cart() {
        let totals = CartTotals::from_items(&[]);
        assert_eq!(totals.count, 0);
        assert_eq!(totals.amount, 0.0);
    }

    #[test]
    fn test_unparseable_price_contributes_zero() {
        let cart = vec![item(1, "sur demande", 4), item(2, "250,50 DH", 2)];
        let totals = CartTotals::from_items(&cart);
        assert_eq!(totals.count, 6);
        assert!((totals.amount - 501.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_price_formats() {
        assert_eq!(parse_price("1 500,00 DH"), 1500.0);
        assert_eq!(parse_price("12.500,75 DH"), 12500.75);
        assert_eq!(parse_price("DH 950"), 950.0);
        assert_eq!(parse_price(",5"), 0.5);
        assert_eq!(parse_price("1,2,3"), 1.2);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("prix: --"), 0.0);
    }

    #[test]
    fn test_zero_quantity_line_counts_nothing() {
        let cart = vec![item(1, "1 000,00 DH", 0)];
        let totals = CartTotals::from_items(&cart);
        assert_eq!(totals.count, 0);
        assert_eq!(totals.amount, 0.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(3800.0), "3 800");
        assert_eq!(format_amount(1234.5), "1 234,5");
        assert_eq!(format_amount(999.99), "999,99");
        assert_eq!(format_amount(1_250_000.25), "1 250 000,25");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(f64::NAN), "0");
    }
}
