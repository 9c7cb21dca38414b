//! Report Helpers
//!
//! Rows derived from a daily report for the per-category table.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::models::DailyReport;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub items_sold: u32,
    pub revenue: Decimal,
    /// Percent of category revenue, one decimal place
    pub share: Decimal,
}

/// Categories by revenue, highest first.
pub fn category_shares(report: &DailyReport) -> Vec<CategoryShare> {
    let total: Decimal = report.by_category.iter().map(|c| c.revenue).sum();
    let mut rows: Vec<CategoryShare> = report
        .by_category
        .iter()
        .map(|c| CategoryShare {
            category: c.category.clone(),
            items_sold: c.items_sold,
            revenue: c.revenue,
            share: if total.is_zero() {
                Decimal::ZERO
            } else {
                (c.revenue * Decimal::ONE_HUNDRED / total).round_dp(1)
            },
        })
        .collect();
    rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    rows
}

pub fn items_sold(report: &DailyReport) -> u32 {
    report.by_category.iter().map(|c| c.items_sold).sum()
}

/// Today's date as the API expects it (`YYYY-MM-DD`, UTC).
pub fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategorySummary;

    fn summary(category: &str, items_sold: u32, revenue: i64) -> CategorySummary {
        CategorySummary {
            category: category.to_string(),
            items_sold,
            revenue: Decimal::from(revenue),
        }
    }

    fn report(by_category: Vec<CategorySummary>) -> DailyReport {
        DailyReport {
            date: "2026-10-19".to_string(),
            total_sales: 3,
            total_revenue: Decimal::from(40),
            total_returns: 0,
            return_amount: Decimal::ZERO,
            net_revenue: Decimal::from(40),
            by_category,
        }
    }

    #[test]
    fn shares_sorted_by_revenue() {
        let rows = category_shares(&report(vec![
            summary("Drinks", 4, 10),
            summary("Food", 6, 30),
        ]));

        assert_eq!(rows[0].category, "Food");
        assert_eq!(rows[0].share, Decimal::new(750, 1));
        assert_eq!(rows[1].share, Decimal::new(250, 1));
    }

    #[test]
    fn zero_revenue_has_zero_share() {
        let rows = category_shares(&report(vec![summary("Games", 0, 0)]));
        assert_eq!(rows[0].share, Decimal::ZERO);
    }

    #[test]
    fn items_sold_sums_categories() {
        let r = report(vec![summary("Drinks", 4, 10), summary("Food", 6, 30)]);
        assert_eq!(items_sold(&r), 10);
    }

    #[test]
    fn today_is_iso_date() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert_eq!(&date[4..5], "-");
    }
}
