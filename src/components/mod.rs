//! UI Components
//!
//! Reusable Leptos components.

mod toasts;
mod pin_login;
mod header;
mod product_card;
mod product_grid;
mod cart_panel;
mod receipt;

pub use toasts::Toasts;
pub use pin_login::PinLogin;
pub use header::Header;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
pub use cart_panel::CartPanel;
pub use receipt::Receipt;
