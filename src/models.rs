//! Frontend Models
//!
//! Data structures matching the POS API's flat JSON contract.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product category (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub date_created: Option<String>,
    pub date_modified: Option<String>,
}

/// Product data structure (matches backend `ProductView`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category_id: Option<u32>,
    pub description: Option<String>,
    pub unit_price: Option<Decimal>,
    pub retail_price: Option<Decimal>,
    pub date_created: Option<String>,
    pub date_modified: Option<String>,
    pub category: Option<Category>,
    pub category_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Product {
    /// Price charged at the till: retail price, falling back to unit price.
    /// A product with neither is free.
    pub fn price(&self) -> Decimal {
        self.retail_price
            .or(self.unit_price)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn category_label(&self) -> Option<&str> {
        self.category_name
            .as_deref()
            .or_else(|| self.category.as_ref().map(|c| c.name.as_str()))
    }
}

/// Completed sale (matches backend `SaleView`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: u32,
    pub client_id: Option<u32>,
    pub employee_id: Option<u32>,
    #[serde(default)]
    pub currency_id: u32,
    pub total_price: Option<Decimal>,
    pub date: String,
    pub sales_type_id: Option<u32>,
    pub note: Option<String>,
    #[serde(default)]
    pub has_return: bool,
    pub date_created: Option<String>,
    pub date_modified: Option<String>,
    #[serde(default)]
    pub item_count: u32,
    #[serde(default)]
    pub items: Vec<SaleItem>,
}

impl Sale {
    /// Server total, or the sum of the line totals when the server omitted it.
    pub fn total(&self) -> Decimal {
        self.total_price
            .unwrap_or_else(|| self.items.iter().map(SaleItem::line_total).sum())
    }
}

/// One line of a completed sale (matches backend `SalesItemView`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub id: u32,
    pub sales_id: u32,
    pub product_id: u32,
    pub quantity: u32,
    pub unit_price: Option<Decimal>,
    pub retail_price: Decimal,
    pub total_price: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub product_name: Option<String>,
}

impl SaleItem {
    pub fn line_total(&self) -> Decimal {
        self.total_price
            .unwrap_or(self.retail_price * Decimal::from(self.quantity))
    }

    pub fn display_name(&self) -> String {
        self.product_name
            .clone()
            .unwrap_or_else(|| format!("Product #{}", self.product_id))
    }
}

/// Checkout payload for `POST /sale/Checkout`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_type_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub items: Vec<SaleItemCreateRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemCreateRequest {
    pub product_id: u32,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    pub retail_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
}

/// Return payload for `POST /return`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    pub sale_id: u32,
    pub items: Vec<ReturnItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub staff_pin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnItem {
    pub sale_item_id: u32,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRecord {
    pub id: u32,
    pub sale_id: u32,
    #[serde(default)]
    pub items: Vec<ReturnItem>,
    pub total: Decimal,
    pub reason: Option<String>,
    pub staff_pin: String,
    pub created_at: String,
}

/// Daily report from `/report/daily`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub date: String,
    pub total_sales: u32,
    pub total_revenue: Decimal,
    pub total_returns: u32,
    pub return_amount: Decimal,
    pub net_revenue: Decimal,
    #[serde(default)]
    pub by_category: Vec<CategorySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: String,
    pub items_sold: u32,
    pub revenue: Decimal,
}

/// Staff role attached to a PIN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    #[default]
    Cashier,
    Manager,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Cashier => "cashier",
            StaffRole::Manager => "manager",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StaffRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cashier" => Ok(StaffRole::Cashier),
            "manager" => Ok(StaffRole::Manager),
            other => Err(format!("unknown staff role: {other}")),
        }
    }
}

/// Authenticated staff identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub pin: String,
    pub name: String,
    pub role: StaffRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_parses_flat_contract() {
        let json = r#"{
            "id": 7,
            "name": "Hot Dog",
            "categoryId": 2,
            "unitPrice": 3.1,
            "retailPrice": 4.5,
            "categoryName": "Food"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, 7);
        assert_eq!(product.price(), Decimal::new(450, 2));
        assert_eq!(product.category_label(), Some("Food"));
        assert!(product.is_active);
    }

    #[test]
    fn product_price_falls_back_to_unit_then_zero() {
        let mut product: Product = serde_json::from_str(r#"{"id":1,"name":"Water","unitPrice":1.5}"#).unwrap();
        assert_eq!(product.price(), Decimal::new(15, 1));

        product.unit_price = None;
        assert_eq!(product.price(), Decimal::ZERO);
    }

    #[test]
    fn category_label_uses_nested_category() {
        let product: Product = serde_json::from_str(
            r#"{"id":1,"name":"Soda","category":{"id":3,"name":"Drinks"}}"#,
        )
        .unwrap();
        assert_eq!(product.category_label(), Some("Drinks"));
    }

    #[test]
    fn sale_total_sums_lines_when_missing() {
        let json = r#"{
            "id": 42,
            "date": "2026-10-19T10:00:00",
            "items": [
                {"id":1,"salesId":42,"productId":7,"quantity":2,"retailPrice":5.0},
                {"id":2,"salesId":42,"productId":8,"quantity":1,"retailPrice":3.0,"totalPrice":3.0}
            ]
        }"#;
        let sale: Sale = serde_json::from_str(json).unwrap();

        assert_eq!(sale.total(), Decimal::new(13, 0));
        assert_eq!(sale.items[0].display_name(), "Product #7");
    }

    #[test]
    fn checkout_request_omits_empty_optionals() {
        let request = SaleCreateRequest {
            client_id: None,
            employee_id: Some(1234),
            currency_id: Some(1),
            total_price: Some(Decimal::new(500, 2)),
            sales_type_id: None,
            note: None,
            items: vec![],
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["employeeId"], 1234);
        assert_eq!(value["totalPrice"], 5.0);
        assert!(value.get("clientId").is_none());
        assert!(value.get("note").is_none());
    }

    #[test]
    fn staff_role_round_trips_lowercase() {
        assert_eq!("manager".parse::<StaffRole>(), Ok(StaffRole::Manager));
        assert!("owner".parse::<StaffRole>().is_err());
        assert_eq!(serde_json::to_string(&StaffRole::Cashier).unwrap(), "\"cashier\"");
    }
}
