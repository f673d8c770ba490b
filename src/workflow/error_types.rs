//! Order errors.
//!
//! - [`OrderError`] - Why a single step of an order was refused
//! - [`InvalidOrder`] - The failure returned by
//!   [`process_order`](crate::workflow::process_order), carrying the receipt
//!   built before the failure

use thiserror::Error;

use crate::menu::DishType;

// =============================================================================
// OrderError
// =============================================================================

/// A rule broken while taking an order.
///
/// The `Display` output is the message shown to the customer.
///
/// # Examples
///
/// ```
/// use kitchen::menu::DishType;
/// use kitchen::workflow::OrderError;
///
/// let error = OrderError::DishNotOffered {
///     dish_type: DishType::Desert,
///     meal_time_name: "morning".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "The dish type 'Desert' specified does not apply to 'morning' meals."
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The first token is missing or is not a meal-time keyword.
    #[error("Invalid meal time. Please input 'morning' or 'night'.")]
    InvalidMealTime {
        /// The rejected token.
        token: String,
    },

    /// A selector is not one of the digits `1` to `4`.
    #[error("Invalid dish type.")]
    InvalidDishSelector {
        /// The rejected token.
        token: String,
    },

    /// The dish type exists but is not served at this meal time.
    #[error("The dish type '{dish_type}' specified does not apply to '{meal_time_name}' meals.")]
    DishNotOffered {
        /// The requested dish type.
        dish_type: DishType,
        /// The meal time of the order, as the customer typed it.
        meal_time_name: String,
    },

    /// A dish that may only be ordered once was ordered again.
    #[error("Multiple orders of '{item_name}' are not allowed")]
    RepeatNotAllowed {
        /// Name of the menu item.
        item_name: &'static str,
    },

    /// The order names a meal time but no dishes.
    #[error("Please select items from the menu.")]
    EmptyOrder,
}

// =============================================================================
// InvalidOrder
// =============================================================================

/// A refused order.
///
/// Holds the reason and the receipt of everything accepted before the
/// failure, marked with a trailing `error` entry. An invalid meal time is
/// detected before any menu is chosen, so it carries no receipt.
///
/// # Examples
///
/// ```
/// use kitchen::workflow::process_order;
///
/// let error = process_order("night, 1, 1").unwrap_err();
/// assert_eq!(error.message(), "Multiple orders of 'steak' are not allowed");
/// assert_eq!(error.partial_output(), Some("steak, error"));
///
/// let error = process_order("lunch, 1").unwrap_err();
/// assert_eq!(error.partial_output(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct InvalidOrder {
    reason: OrderError,
    partial_output: Option<String>,
}

impl InvalidOrder {
    /// Creates a failure that has a partial receipt.
    #[must_use]
    pub const fn with_receipt(reason: OrderError, partial_output: String) -> Self {
        Self {
            reason,
            partial_output: Some(partial_output),
        }
    }

    /// Creates a failure raised before any receipt existed.
    #[must_use]
    pub const fn without_receipt(reason: OrderError) -> Self {
        Self {
            reason,
            partial_output: None,
        }
    }

    /// Returns why the order was refused.
    #[must_use]
    pub const fn reason(&self) -> &OrderError {
        &self.reason
    }

    /// Returns the message shown to the customer.
    #[must_use]
    pub fn message(&self) -> String {
        self.reason.to_string()
    }

    /// Returns the receipt built before the failure, ending in `error`.
    #[must_use]
    pub fn partial_output(&self) -> Option<&str> {
        self.partial_output.as_deref()
    }
}
