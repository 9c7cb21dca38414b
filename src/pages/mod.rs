//! Screens
//!
//! Top-level views switched by the header navigation.

mod pos_screen;
mod returns_screen;
mod products_screen;
mod reports_screen;

pub use pos_screen::PosScreen;
pub use returns_screen::ReturnsScreen;
pub use products_screen::ProductsScreen;
pub use reports_screen::ReportsScreen;
