//! Checkout Orchestration
//!
//! Turns the cart and the logged-in staff member into a sale request,
//! submits it, and tracks the receipt until it is dismissed.

use crate::api::SalesGateway;
use crate::cart::{Cart, CartLine};
use crate::error::CheckoutError;
use crate::models::{Sale, SaleCreateRequest, SaleItemCreateRequest, Staff};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum CheckoutFlow {
    #[default]
    Idle,
    Submitting,
    /// Sale accepted; the receipt is on screen.
    Completed(Sale),
}

impl CheckoutFlow {
    pub fn is_submitting(&self) -> bool {
        matches!(self, CheckoutFlow::Submitting)
    }

    /// The cart is frozen from submission until the receipt is dismissed, so
    /// dismissal only ever clears lines that were sold.
    pub fn allows_cart_edits(&self) -> bool {
        matches!(self, CheckoutFlow::Idle)
    }

    pub fn receipt(&self) -> Option<&Sale> {
        match self {
            CheckoutFlow::Completed(sale) => Some(sale),
            _ => None,
        }
    }

    /// Close the receipt. This, not the checkout itself, empties the cart.
    pub fn dismiss_receipt(&mut self, cart: &mut Cart) {
        if let CheckoutFlow::Completed(sale) = self {
            log::info!("[Checkout] receipt for sale {} dismissed", sale.id);
            cart.clear();
            *self = CheckoutFlow::Idle;
        }
    }
}

#[derive(Debug)]
pub enum CheckoutOutcome {
    /// Nothing to sell; no request was sent.
    Skipped,
    Completed(Sale),
    Failed(CheckoutError),
}

fn line_request(line: &CartLine) -> SaleItemCreateRequest {
    SaleItemCreateRequest {
        product_id: line.product.id,
        quantity: line.quantity,
        unit_price: line.product.unit_price,
        retail_price: line.unit_price(),
        total_price: Some(line.subtotal()),
        discount: None,
    }
}

/// `None` for an empty cart.
pub fn build_sale_request(
    cart: &Cart,
    staff: Option<&Staff>,
    currency_id: u32,
) -> Option<SaleCreateRequest> {
    if cart.is_empty() {
        return None;
    }
    Some(SaleCreateRequest {
        client_id: None,
        employee_id: staff.and_then(|s| s.pin.parse().ok()),
        currency_id: Some(currency_id),
        total_price: Some(cart.total()),
        sales_type_id: None,
        note: staff.map(|s| format!("Staff PIN: {}", s.pin)),
        items: cart.lines().iter().map(line_request).collect(),
    })
}

/// Submit the cart once. The cart is only read, so a failure leaves it
/// ready for another attempt.
pub async fn run_checkout<G: SalesGateway>(
    gateway: &G,
    cart: &Cart,
    staff: Option<&Staff>,
    currency_id: u32,
) -> CheckoutOutcome {
    let Some(request) = build_sale_request(cart, staff, currency_id) else {
        return CheckoutOutcome::Skipped;
    };

    log::info!(
        "[Checkout] submitting {} lines, {} items",
        request.items.len(),
        cart.item_count()
    );
    match gateway.checkout(&request).await {
        Ok(sale) => {
            log::info!("[Checkout] sale {} created", sale.id);
            CheckoutOutcome::Completed(sale)
        }
        Err(e) => {
            log::error!("[Checkout] failed: {}", e);
            CheckoutOutcome::Failed(e.into())
        }
    }
}
