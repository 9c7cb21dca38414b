//! Cart Aggregate
//!
//! Lines selected for the in-progress sale. At most one line per product,
//! every quantity strictly positive, insertion order preserved.

use rust_decimal::Decimal;

use crate::models::Product;

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn unit_price(&self) -> Decimal {
        self.product.price()
    }

    pub fn subtotal(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, product_id: u32) -> Option<u32> {
        self.line(product_id).map(|line| line.quantity)
    }

    fn line(&self, product_id: u32) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == product_id)
    }

    /// Add one unit, merging into the existing line for this product.
    pub fn add_product(&mut self, product: Product) {
        match self.lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine { product, quantity: 1 }),
        }
    }

    /// Set an absolute quantity. Zero or below removes the line; values past
    /// `u32::MAX` are capped.
    pub fn set_quantity(&mut self, product_id: u32, quantity: i64) {
        if quantity <= 0 {
            self.remove_product(product_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn remove_product(&mut self, product_id: u32) {
        self.lines.retain(|line| line.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: u32, price: Option<Decimal>) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            category_id: None,
            description: None,
            unit_price: None,
            retail_price: price,
            date_created: None,
            date_modified: None,
            category: None,
            category_name: None,
            is_active: true,
        }
    }

    fn euros(value: i64) -> Option<Decimal> {
        Some(Decimal::from(value))
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let mut cart = Cart::new();
        for _ in 0..3 {
            cart.add_product(make_product(1, euros(5)));
        }

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(1), Some(3));
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_product(make_product(2, euros(1)));
        cart.add_product(make_product(1, euros(1)));
        cart.add_product(make_product(2, euros(1)));

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn set_quantity_is_absolute() {
        let mut cart = Cart::new();
        cart.add_product(make_product(1, euros(5)));
        cart.set_quantity(1, 4);
        assert_eq!(cart.quantity_of(1), Some(4));
    }

    #[test]
    fn set_quantity_zero_or_negative_removes_line() {
        let mut cart = Cart::new();
        cart.add_product(make_product(1, euros(5)));
        cart.add_product(make_product(2, euros(3)));

        cart.set_quantity(1, 0);
        cart.set_quantity(2, -3);

        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_caps_huge_values_instead_of_removing() {
        let mut cart = Cart::new();
        cart.add_product(make_product(1, euros(5)));

        cart.set_quantity(1, i64::from(u32::MAX) + 1);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(1), Some(u32::MAX));

        cart.set_quantity(1, i64::MAX);
        assert_eq!(cart.quantity_of(1), Some(u32::MAX));
    }

    #[test]
    fn add_product_saturates_at_max_quantity() {
        let mut cart = Cart::new();
        cart.add_product(make_product(1, euros(5)));
        cart.set_quantity(1, i64::from(u32::MAX));

        cart.add_product(make_product(1, euros(5)));
        cart.add_product(make_product(2, euros(5)));

        assert_eq!(cart.quantity_of(1), Some(u32::MAX));
        assert_eq!(cart.item_count(), u32::MAX);
    }

    #[test]
    fn set_quantity_on_absent_product_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(make_product(1, euros(5)));
        let before = cart.clone();

        cart.set_quantity(9, 2);
        assert_eq!(cart, before);
    }

    #[test]
    fn remove_absent_product_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_product(make_product(1, euros(5)));
        let before = cart.clone();

        cart.remove_product(42);
        assert_eq!(cart, before);
    }

    #[test]
    fn totals_for_mixed_cart() {
        let mut cart = Cart::new();
        cart.add_product(make_product(1, euros(5)));
        cart.add_product(make_product(1, euros(5)));
        cart.add_product(make_product(2, euros(3)));

        assert_eq!(cart.total(), Decimal::new(1300, 2));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn missing_price_contributes_nothing() {
        let mut cart = Cart::new();
        cart.add_product(make_product(1, None));
        cart.add_product(make_product(2, Some(Decimal::new(250, 2))));

        assert_eq!(cart.total(), Decimal::new(250, 2));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let cart = Cart::new();
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn item_count_ignores_distinct_lines() {
        let mut cart = Cart::new();
        cart.add_product(make_product(1, euros(1)));
        cart.set_quantity(1, 7);
        cart.add_product(make_product(2, euros(1)));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 8);
    }

    #[test]
    fn clear_drops_everything() {
        let mut cart = Cart::new();
        cart.add_product(make_product(1, euros(1)));
        cart.add_product(make_product(2, euros(1)));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }
}
