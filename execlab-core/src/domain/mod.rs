//! Domain types for execlab

pub mod book;
pub mod fill;
pub mod position;
pub mod signal;

pub use book::{BookSide, LiquidityBook, PriceLevel};
pub use fill::Fill;
pub use position::PositionState;
pub use signal::Signal;

/// Symbol type alias
pub type Symbol = String;
