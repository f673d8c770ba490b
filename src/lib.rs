//! # kitchen
//!
//! An order-taking simulator for a restaurant with a morning and a night menu.
//!
//! ## Overview
//!
//! A customer types one line: a meal time followed by dish selectors.
//!
//! ```text
//! morning, 1, 2, 3, 3
//! ```
//!
//! The line is validated against the menu of that meal time and turned into a
//! receipt listing each dish once, in category order, with a `(Nx)` suffix
//! for repeated dishes. A refused order reports why, together with the receipt
//! of everything accepted before the failure.
//!
//! ## Module Structure
//!
//! - `menu`: Dish types, meal times, menu items and the two fixed catalogs
//! - `workflow`: Selector resolution, order aggregation and order intake
//! - `config`: Interactive shell settings loaded from the environment
//! - `shell`: The read-process-print loop driven by the `kitchen` binary
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the menu types
//!
//! ## Example
//!
//! ```rust
//! use kitchen::prelude::*;
//!
//! assert_eq!(process_order("morning, 1, 2, 3, 3, 3").unwrap(), "eggs, toast, coffee(3x)");
//!
//! let error = process_order("night, 1, 1, 2").unwrap_err();
//! assert_eq!(error.message(), "Multiple orders of 'steak' are not allowed");
//! assert_eq!(error.partial_output(), Some("steak, error"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use kitchen::prelude::*;
/// ```
pub mod prelude {
    pub use crate::menu::{Catalog, DishType, MealTime, MenuItem};
    pub use crate::workflow::{InvalidOrder, Order, OrderError, process_order};
}

pub mod config;
pub mod menu;
pub mod shell;
pub mod workflow;
