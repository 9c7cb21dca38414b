//! Display Formatting

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

/// `€4.50`, `-€1.00`
pub fn format_price(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{:.2}", symbol, rounded.abs())
    } else {
        format!("{}{:.2}", symbol, rounded.abs())
    }
}

/// `Oct 19, 2026, 3:04 PM`. Accepts RFC 3339 or the offset-less timestamps
/// the API emits; anything else is shown verbatim.
pub fn format_date_time(raw: &str) -> String {
    const OUT: &str = "%b %-d, %Y, %-I:%M %p";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(OUT).to_string();
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.format(OUT).to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_have_two_decimals() {
        assert_eq!(format_price(Decimal::new(13, 0), "€"), "€13.00");
        assert_eq!(format_price(Decimal::new(4505, 3), "€"), "€4.51");
        assert_eq!(format_price(Decimal::new(-150, 2), "$"), "-$1.50");
        assert_eq!(format_price(Decimal::ZERO, "€"), "€0.00");
    }

    #[test]
    fn dates_render_medium_short() {
        assert_eq!(format_date_time("2026-10-19T15:04:00"), "Oct 19, 2026, 3:04 PM");
        assert_eq!(format_date_time("2026-10-19T09:30:12.345Z"), "Oct 19, 2026, 9:30 AM");
        assert_eq!(format_date_time("yesterday"), "yesterday");
    }
}
