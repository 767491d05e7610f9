pub mod discover_controller;
pub mod quote_controller;

pub use discover_controller::DiscoverController;
pub use quote_controller::QuoteController;
