//! # Order
//!
//! An ordered collection of items with aggregate pricing.
//!
//! ## Order Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Order Operations                                 │
//! │                                                                         │
//! │  Caller Action            Method                  State Change          │
//! │  ─────────────            ──────                  ────────────          │
//! │                                                                         │
//! │  Ring up item ──────────► add_item() ──────────► items.push(item)      │
//! │                                                                         │
//! │  Ring up JSON ticket ───► add_ticket_json() ───► items.push(built)     │
//! │                                                                         │
//! │  Void line ─────────────► remove_item(i) ──────► items.remove(i)       │
//! │                                                                         │
//! │  Start over ────────────► clear() ─────────────► items.clear()         │
//! │                                                                         │
//! │  Show totals ───────────► subtotal/tax/grand_total/receipt (read only) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Insertion order is preserved; removal shifts later items down
//! - subtotal = Σ item totals, tax = subtotal × rate (exact),
//!   grand total = subtotal + tax
//! - Only the text receipt rounds tax and grand total to the cent
//! - A failed call leaves the order unchanged
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use stand_core::catalog::{Base, Size};
//! use stand_core::item::Drink;
//! use stand_core::order::Order;
//!
//! let mut order = Order::new();
//! order.add_item(Drink::new(Base::Water, Size::Small).unwrap()).unwrap();
//!
//! assert_eq!(order.subtotal().cents(), 150);
//! assert_eq!(order.tax(), Decimal::new(10875, 5)); // $0.10875
//! assert_eq!(order.grand_total(), Decimal::new(160875, 5));
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::config::StandConfig;
use crate::error::{CoreError, CoreResult};
use crate::item::{Item, Orderable};
use crate::money::Money;
use crate::receipt::Receipt;
use crate::ticket::ItemTicket;
use crate::types::TaxRate;

/// A customer order.
///
/// The order owns its items. Read access goes through `items()` (a shared
/// slice); the only mutations are `add_item`, `remove_item` and `clear`.
#[derive(Debug, Clone)]
pub struct Order {
    id: String,
    created_at: DateTime<Utc>,
    items: Vec<Item>,
    tax_rate: TaxRate,
    max_items: Option<usize>,
    store_name: Option<String>,
}

impl Order {
    /// Creates an empty, uncapped order at the default 7.25% tax rate.
    pub fn new() -> Self {
        Order {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            items: Vec::new(),
            tax_rate: TaxRate::default(),
            max_items: None,
            store_name: None,
        }
    }

    /// Creates an empty order using the configured tax rate, optional item
    /// cap and store name.
    pub fn with_config(config: &StandConfig) -> Self {
        Order {
            tax_rate: config.tax_rate(),
            max_items: config.pricing.max_order_items,
            store_name: config.store.name.clone(),
            ..Order::new()
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends an item.
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(OrderTooLarge)` if a cap is configured and the order is at it
    pub fn add_item(&mut self, item: impl Into<Item>) -> CoreResult<()> {
        if let Some(max) = self.max_items {
            if self.items.len() >= max {
                return Err(CoreError::OrderTooLarge { max });
            }
        }

        let item = item.into();
        debug!(
            order_id = %self.id,
            kind = %item.kind(),
            price = %item.total_price(),
            "Item added to order"
        );
        self.items.push(item);
        Ok(())
    }

    /// Builds and appends an item from a ticket.
    pub fn add_ticket(&mut self, ticket: &ItemTicket) -> CoreResult<()> {
        let item = ticket.build()?;
        self.add_item(item)
    }

    /// Appends an item described by untyped JSON.
    ///
    /// Anything that is not a drink, food or dessert ticket fails with
    /// `InvalidItemType` and the order is unchanged.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use stand_core::order::Order;
    /// use stand_core::CoreError;
    ///
    /// let mut order = Order::new();
    /// let err = order.add_ticket_json(&json!("a napkin")).unwrap_err();
    /// assert!(matches!(err, CoreError::InvalidItemType(_)));
    /// assert_eq!(order.num_items(), 0);
    /// ```
    pub fn add_ticket_json(&mut self, value: &Value) -> CoreResult<()> {
        let ticket = ItemTicket::from_value(value)?;
        self.add_ticket(&ticket)
    }

    /// Removes and returns the item at `index`; later items shift down.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<Item> {
        if index >= self.items.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let item = self.items.remove(index);
        debug!(order_id = %self.id, index, kind = %item.kind(), "Item removed from order");
        Ok(item)
    }

    /// Removes every item and restarts the order clock.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Read-only view of the items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    // =========================================================================
    // Totals
    // =========================================================================

    /// Sum of item totals (zero for an empty order).
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(Orderable::total_price).sum()
    }

    /// `subtotal × rate`, unrounded.
    pub fn tax(&self) -> Decimal {
        self.subtotal().calculate_tax(self.tax_rate)
    }

    pub fn grand_total(&self) -> Decimal {
        let subtotal = self.subtotal();
        subtotal.as_decimal() + subtotal.calculate_tax(self.tax_rate)
    }

    /// Structured receipt for rendering as text, JSON or UI state.
    pub fn receipt(&self) -> Receipt {
        let subtotal = self.subtotal();
        let tax = subtotal.calculate_tax(self.tax_rate);

        Receipt {
            order_id: self.id.clone(),
            store_name: self.store_name.clone(),
            item_count: self.items.len(),
            subtotal,
            tax,
            grand_total: subtotal.as_decimal() + tax,
            items: self.items.iter().map(Orderable::receipt_line).collect(),
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Order {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Base, DessertFlavor, Flavor, FoodType, Size};
    use crate::item::{Drink, Food, FrozenDessert};
    use crate::types::ItemKind;
    use serde_json::json;

    fn three_item_order() -> Order {
        let mut order = Order::new();
        order.add_item(Drink::new(Base::Water, Size::Small).unwrap()).unwrap();
        order.add_item(Food::new(FoodType::Hotdog).unwrap()).unwrap();
        order
            .add_item(FrozenDessert::new(DessertFlavor::Chocolate))
            .unwrap();
        order
    }

    #[test]
    fn test_empty_order() {
        let order = Order::new();
        assert!(order.is_empty());
        assert!(order.subtotal().is_zero());
        assert!(order.tax().is_zero());
        assert!(order.grand_total().is_zero());
        assert_eq!(order.receipt().item_count, 0);
    }

    #[test]
    fn test_single_drink_totals() {
        let mut order = Order::new();
        order.add_item(Drink::new(Base::Water, Size::Small).unwrap()).unwrap();

        assert_eq!(order.subtotal().cents(), 150);
        // 1.50 × 0.0725, not rounded to the cent
        assert_eq!(order.tax(), Decimal::new(10875, 5));
        assert_eq!(order.grand_total(), order.subtotal().as_decimal() + order.tax());
        assert_eq!(order.grand_total(), Decimal::new(160875, 5));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let order = three_item_order();
        let kinds: Vec<ItemKind> = order.iter().map(Orderable::kind).collect();
        assert_eq!(kinds, vec![ItemKind::Drink, ItemKind::Food, ItemKind::Dessert]);
        assert_eq!(order.subtotal().cents(), 150 + 230 + 300);
    }

    #[test]
    fn test_remove_shifts_items() {
        let mut order = three_item_order();
        let removed = order.remove_item(0).unwrap();

        assert_eq!(removed.kind(), ItemKind::Drink);
        assert_eq!(order.num_items(), 2);
        assert_eq!(order.get(0).unwrap().kind(), ItemKind::Food);
        assert_eq!(order.get(1).unwrap().kind(), ItemKind::Dessert);
    }

    #[test]
    fn test_remove_out_of_range_leaves_order_unchanged() {
        let mut order = three_item_order();
        let before = order.items().to_vec();

        let err = order.remove_item(5).unwrap_err();
        assert_eq!(err, CoreError::IndexOutOfRange { index: 5, len: 3 });
        assert_eq!(order.items(), before.as_slice());

        assert!(order.remove_item(3).is_err());
        assert_eq!(order.items(), before.as_slice());
    }

    #[test]
    fn test_non_item_ticket_rejected() {
        let mut order = three_item_order();

        let err = order
            .add_ticket_json(&json!({"kind": "gift_card", "amount": 20}))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidItemType(_)));

        let err = order.add_ticket_json(&json!(["water"])).unwrap_err();
        assert!(matches!(err, CoreError::InvalidItemType(_)));

        assert_eq!(order.num_items(), 3);
    }

    #[test]
    fn test_ticket_with_bad_option_leaves_order_unchanged() {
        let mut order = Order::new();
        let err = order
            .add_ticket_json(&json!({"kind": "drink", "base": "water", "size": "small", "flavors": ["grape"]}))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidOption { .. }));
        assert!(order.is_empty());
    }

    #[test]
    fn test_add_ticket_json() {
        let mut order = Order::new();
        order
            .add_ticket_json(&json!({"kind": "food", "type": "Hotdog", "toppings": ["bacon_bits", "chili"]}))
            .unwrap();
        assert_eq!(order.subtotal().cents(), 320);
    }

    #[test]
    fn test_default_order_is_uncapped() {
        let mut order = Order::new();
        for _ in 0..150 {
            order.add_item(Food::new(FoodType::Hotdog).unwrap()).unwrap();
        }
        assert_eq!(order.num_items(), 150);
        assert_eq!(order.subtotal().cents(), 150 * 230);

        let order = Order::with_config(&StandConfig::default());
        assert_eq!(order.max_items, None);
    }

    #[test]
    fn test_configured_item_cap() {
        let config = StandConfig {
            pricing: crate::config::PricingSettings {
                tax_rate_bps: 725,
                max_order_items: Some(2),
            },
            ..StandConfig::default()
        };
        let mut order = Order::with_config(&config);
        order.add_item(Food::new("corndog").unwrap()).unwrap();
        order.add_item(Food::new("corndog").unwrap()).unwrap();

        let err = order.add_item(Food::new("corndog").unwrap()).unwrap_err();
        assert_eq!(err, CoreError::OrderTooLarge { max: 2 });
        assert_eq!(order.num_items(), 2);
    }

    #[test]
    fn test_configured_tax_rate() {
        let mut config = StandConfig::default();
        config.pricing.tax_rate_bps = 1000;
        let mut order = Order::with_config(&config);
        order.add_item(Food::new("hotdog").unwrap()).unwrap();

        assert_eq!(order.tax(), Decimal::new(23, 2));
        assert_eq!(order.grand_total(), Decimal::new(253, 2));
    }

    #[test]
    fn test_receipt_projection() {
        let mut config = StandConfig::default();
        config.store.name = Some("Pier 3 Stand".to_string());
        let mut order = Order::with_config(&config);

        let mut drink = Drink::new(Base::Water, Size::Small).unwrap();
        drink.add_flavor(Flavor::Lemon).unwrap();
        order.add_item(drink).unwrap();

        let mut food = Food::new("hotdog").unwrap();
        food.add_topping("chili").unwrap();
        order.add_item(food).unwrap();

        let receipt = order.receipt();
        assert_eq!(receipt.order_id, order.id());
        assert_eq!(receipt.store_name.as_deref(), Some("Pier 3 Stand"));
        assert_eq!(receipt.item_count, 2);
        assert_eq!(receipt.subtotal.cents(), 165 + 290);
        assert_eq!(receipt.tax, order.tax());
        assert_eq!(receipt.grand_total, receipt.subtotal.as_decimal() + receipt.tax);
        assert_eq!(receipt.grand_total, order.grand_total());
        assert_eq!(receipt.items[0].kind(), ItemKind::Drink);
        assert_eq!(receipt.items[1].price().cents(), 290);

        let text = receipt.to_string();
        assert!(text.starts_with("Pier 3 Stand\n"));
        assert!(text.contains("1: drink - small water [lemon]  $1.65"));
        // 4.55 × 0.0725 = 0.329875
        assert!(text.contains("Tax: $0.33"));
        assert!(text.ends_with("Total: $4.88"));
    }

    #[test]
    fn test_clear() {
        let mut order = three_item_order();
        order.clear();
        assert!(order.is_empty());
        assert!(order.subtotal().is_zero());
    }
}
