//! Order-taking workflow.
//!
//! - [`resolve_selector`] - Selector token to [`DishType`](crate::menu::DishType)
//! - [`Order`] - Per-order quantities, repeat rules and receipt rendering
//! - [`process_order`] - Raw order line to receipt or [`InvalidOrder`]
//! - [`OrderError`] - Every way an order can be refused

mod error_types;
mod intake;
mod order;
mod selector;

pub use error_types::{InvalidOrder, OrderError};
pub use intake::process_order;
pub use order::{ERROR_MARKER, Order};
pub use selector::resolve_selector;
