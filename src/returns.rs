//! Returns
//!
//! Selection of sale lines to hand back and the refund they add up to.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::ReturnError;
use crate::models::{ReturnItem, ReturnRequest, Sale};

/// Sale ids are numeric; anything else cannot exist on the server.
pub fn parse_sale_id(input: &str) -> Result<u32, ReturnError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ReturnError::MissingSaleId);
    }
    trimmed.parse().map_err(|_| ReturnError::SaleNotFound)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnSelection {
    sale: Option<Sale>,
    /// sale item id -> quantity being returned
    selected: BTreeMap<u32, u32>,
}

impl ReturnSelection {
    pub fn for_sale(sale: Sale) -> Self {
        Self {
            sale: Some(sale),
            selected: BTreeMap::new(),
        }
    }

    pub fn sale(&self) -> Option<&Sale> {
        self.sale.as_ref()
    }

    fn sold_quantity(&self, item_id: u32) -> Option<u32> {
        self.sale
            .as_ref()?
            .items
            .iter()
            .find(|item| item.id == item_id)
            .map(|item| item.quantity)
    }

    /// Select with the full sold quantity, or deselect.
    pub fn toggle(&mut self, item_id: u32) {
        if self.selected.remove(&item_id).is_some() {
            return;
        }
        if let Some(sold) = self.sold_quantity(item_id) {
            self.selected.insert(item_id, sold);
        }
    }

    /// Zero or below deselects; anything else is capped at the sold quantity.
    pub fn set_quantity(&mut self, item_id: u32, quantity: i64) {
        let Some(sold) = self.sold_quantity(item_id) else {
            return;
        };
        match u32::try_from(quantity) {
            Ok(q) if q > 0 => {
                self.selected.insert(item_id, q.min(sold));
            }
            _ => {
                self.selected.remove(&item_id);
            }
        }
    }

    pub fn is_selected(&self, item_id: u32) -> bool {
        self.selected.contains_key(&item_id)
    }

    pub fn quantity_of(&self, item_id: u32) -> u32 {
        self.selected.get(&item_id).copied().unwrap_or(0)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Refund for one selected line, at the price charged.
    pub fn line_refund(&self, item_id: u32) -> Decimal {
        let Some(sale) = &self.sale else {
            return Decimal::ZERO;
        };
        sale.items
            .iter()
            .find(|item| item.id == item_id)
            .map(|item| item.retail_price * Decimal::from(self.quantity_of(item_id)))
            .unwrap_or(Decimal::ZERO)
    }

    pub fn refund(&self) -> Decimal {
        self.selected.keys().map(|id| self.line_refund(*id)).sum()
    }

    pub fn to_request(
        &self,
        staff_pin: &str,
        reason: Option<String>,
    ) -> Result<ReturnRequest, ReturnError> {
        let sale = self.sale.as_ref().ok_or(ReturnError::MissingSaleId)?;
        if self.selected.is_empty() {
            return Err(ReturnError::NothingSelected);
        }
        Ok(ReturnRequest {
            sale_id: sale.id,
            items: self
                .selected
                .iter()
                .map(|(id, qty)| ReturnItem {
                    sale_item_id: *id,
                    quantity: *qty,
                })
                .collect(),
            reason: reason.filter(|r| !r.trim().is_empty()),
            staff_pin: staff_pin.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SaleItem;

    fn make_item(id: u32, quantity: u32, cents: i64) -> SaleItem {
        SaleItem {
            id,
            sales_id: 42,
            product_id: id * 10,
            quantity,
            unit_price: None,
            retail_price: Decimal::new(cents, 2),
            total_price: None,
            discount: None,
            product_name: Some(format!("Item {}", id)),
        }
    }

    fn make_sale() -> Sale {
        Sale {
            id: 42,
            client_id: None,
            employee_id: Some(1234),
            currency_id: 1,
            total_price: Some(Decimal::new(1900, 2)),
            date: "2026-10-19T10:00:00".to_string(),
            sales_type_id: None,
            note: None,
            has_return: false,
            date_created: None,
            date_modified: None,
            item_count: 4,
            items: vec![make_item(1, 2, 500), make_item(2, 2, 450)],
        }
    }

    #[test]
    fn sale_id_input_validation() {
        assert!(matches!(parse_sale_id("  "), Err(ReturnError::MissingSaleId)));
        assert!(matches!(parse_sale_id("sale-001"), Err(ReturnError::SaleNotFound)));
        assert_eq!(parse_sale_id(" 42 ").unwrap(), 42);
    }

    #[test]
    fn toggle_selects_full_quantity_then_deselects() {
        let mut selection = ReturnSelection::for_sale(make_sale());
        selection.toggle(1);
        assert_eq!(selection.quantity_of(1), 2);

        selection.toggle(1);
        assert!(!selection.is_selected(1));
    }

    #[test]
    fn toggle_unknown_item_is_ignored() {
        let mut selection = ReturnSelection::for_sale(make_sale());
        selection.toggle(99);
        assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn quantity_is_clamped_and_zero_deselects() {
        let mut selection = ReturnSelection::for_sale(make_sale());
        selection.toggle(2);

        selection.set_quantity(2, 9);
        assert_eq!(selection.quantity_of(2), 2);

        selection.set_quantity(2, 1);
        assert_eq!(selection.quantity_of(2), 1);

        selection.set_quantity(2, 0);
        assert!(!selection.is_selected(2));
    }

    #[test]
    fn refund_sums_selected_lines() {
        let mut selection = ReturnSelection::for_sale(make_sale());
        selection.toggle(1);
        selection.set_quantity(2, 1);

        assert_eq!(selection.line_refund(2), Decimal::new(450, 2));
        assert_eq!(selection.refund(), Decimal::new(1450, 2));
    }

    #[test]
    fn request_requires_a_selection() {
        let selection = ReturnSelection::for_sale(make_sale());
        assert!(matches!(
            selection.to_request("1234", None),
            Err(ReturnError::NothingSelected)
        ));
    }

    #[test]
    fn request_lists_selected_lines() {
        let mut selection = ReturnSelection::for_sale(make_sale());
        selection.toggle(2);
        let request = selection
            .to_request("0000", Some("  ".to_string()))
            .unwrap();

        assert_eq!(request.sale_id, 42);
        assert_eq!(request.items, vec![ReturnItem { sale_item_id: 2, quantity: 2 }]);
        assert_eq!(request.reason, None);
        assert_eq!(request.staff_pin, "0000");
    }
}
