//! Cart Ledger
//!
//! The ordered collection of cart line items and its mutation operations.
//! Insertion order is the display order. All operations are total: removing
//! an absent item or adjusting an absent quantity is a no-op, never an
//! error. The total is derived on every call, never cached.

use crate::models::product::Product;
use serde::{Deserialize, Serialize};

/// One cart line: a product snapshot plus a quantity (always >= 1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: i32,
}

impl CartItem {
    /// Line total in whole rupees: retail price x quantity
    pub fn line_total(&self) -> i64 {
        self.product.retail_price * i64::from(self.quantity)
    }
}

/// Ordered cart ledger
///
/// Invariants:
/// - at most one entry per product id
/// - every quantity is >= 1 (removal is the only path to absence)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartLedger {
    items: Vec<CartItem>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// If the product is already in the ledger its quantity is incremented
    /// in place (position preserved); otherwise a new line with quantity 1
    /// is appended. Never fails.
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Remove the line with the given product id. No-op if absent.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Adjust a line's quantity by `delta`, clamped at a floor of 1.
    ///
    /// The quantity can never be driven to zero through this operation;
    /// [`CartLedger::remove`] is the only path to absence. No-op if the
    /// product id is absent.
    pub fn set_quantity_delta(&mut self, product_id: &str, delta: i32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = (item.quantity + delta).max(1);
        }
    }

    /// Empty the ledger (used on successful order submission)
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Derived total in whole rupees, recomputed on every call
    pub fn total(&self) -> i64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::{Category, Supplier};

    fn product(id: &str, base_price: i64) -> Product {
        Product::new(
            id,
            format!("Product {}", id),
            Category::Accessories,
            Supplier::Newcom,
            base_price,
            "https://example.com/img.jpg",
            "Test product",
            &[],
        )
    }

    #[test]
    fn test_add_appends_with_quantity_one() {
        let mut ledger = CartLedger::new();
        let p = product("a", 100);
        ledger.add(&p);

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.items()[0].quantity, 1);
    }

    #[test]
    fn test_repeated_add_keeps_one_entry() {
        let mut ledger = CartLedger::new();
        let p = product("a", 100);
        for _ in 0..5 {
            ledger.add(&p);
        }

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.items()[0].quantity, 5);
    }

    #[test]
    fn test_add_preserves_position_on_increment() {
        let mut ledger = CartLedger::new();
        let a = product("a", 100);
        let b = product("b", 200);
        ledger.add(&a);
        ledger.add(&b);
        ledger.add(&a);

        let ids: Vec<&str> = ledger.items().iter().map(|i| i.product.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(ledger.items()[0].quantity, 2);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut ledger = CartLedger::new();
        ledger.add(&product("a", 100));
        ledger.remove("zzz");
        assert_eq!(ledger.len(), 1);

        ledger.remove("a");
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_quantity_floor_is_one() {
        let mut ledger = CartLedger::new();
        ledger.add(&product("a", 100));

        ledger.set_quantity_delta("a", -5);
        assert_eq!(ledger.items()[0].quantity, 1);

        ledger.set_quantity_delta("a", 3);
        assert_eq!(ledger.items()[0].quantity, 4);

        ledger.set_quantity_delta("a", -3);
        assert_eq!(ledger.items()[0].quantity, 1);
    }

    #[test]
    fn test_quantity_delta_never_creates_or_destroys() {
        let mut ledger = CartLedger::new();
        ledger.set_quantity_delta("ghost", 3);
        assert!(ledger.is_empty());

        ledger.add(&product("a", 100));
        ledger.set_quantity_delta("a", -100);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_total_recomputed() {
        let mut ledger = CartLedger::new();
        assert_eq!(ledger.total(), 0);

        // base 100000 -> retail 130000
        let a = product("a", 100_000);
        // base 50000 -> retail 65000
        let b = product("b", 50_000);

        ledger.add(&a);
        ledger.add(&b);
        ledger.add(&b);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total(), 130_000 + 2 * 65_000);

        ledger.remove("a");
        assert_eq!(ledger.total(), 130_000);

        ledger.clear();
        assert_eq!(ledger.total(), 0);
        assert!(ledger.is_empty());
    }
}
