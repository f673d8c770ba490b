//! Order intake.
//!
//! Parses one raw order line, `<meal time>, <selector>, <selector>, ...`, and
//! runs it through an [`Order`] bound to the matching catalog.
//!
//! # Steps
//!
//! 1. Split on commas and trim every token
//! 2. Parse the first token as a [`MealTime`] (no receipt on failure); the
//!    trimmed token, in the customer's casing, names the meal in refusals
//! 3. Refuse an order with no selectors
//! 4. Resolve and add each selector in turn, stopping at the first failure
//! 5. Render the receipt

use crate::menu::{Catalog, MealTime};
use crate::workflow::{InvalidOrder, Order, OrderError, resolve_selector};

/// Separator between tokens of an order line.
const TOKEN_SEPARATOR: char = ',';

/// Processes one order line and returns its receipt.
///
/// # Errors
///
/// Returns [`InvalidOrder`] when the meal time is unknown, no dishes are
/// selected, a selector is not a dish type, a dish is not served at this
/// meal time, or a single-serving dish is repeated. Every failure except the
/// meal-time one carries the receipt of the dishes accepted so far.
///
/// # Examples
///
/// ```
/// use kitchen::workflow::process_order;
///
/// assert_eq!(process_order("morning, 1, 2, 3").unwrap(), "eggs, toast, coffee");
/// assert_eq!(process_order("night, 1, 2, 2, 4").unwrap(), "steak, potato(2x), cake");
///
/// let error = process_order("morning, 1, 2, 3, 4").unwrap_err();
/// assert_eq!(error.partial_output(), Some("eggs, toast, coffee, error"));
/// ```
pub fn process_order(raw_line: &str) -> Result<String, InvalidOrder> {
    let mut tokens = raw_line.split(TOKEN_SEPARATOR).map(str::trim);

    let meal_time_name = tokens.next().unwrap_or_default();
    let meal_time: MealTime = meal_time_name
        .parse()
        .map_err(InvalidOrder::without_receipt)?;

    let mut order = Order::with_meal_time_name(Catalog::for_meal_time(meal_time), meal_time_name);
    let mut selectors = tokens.peekable();

    if selectors.peek().is_none() {
        return Err(reject(&order, OrderError::EmptyOrder));
    }

    for selector in selectors {
        resolve_selector(selector)
            .and_then(|dish_type| order.add_dish(dish_type))
            .map_err(|reason| reject(&order, reason))?;
    }

    let receipt = order.render(false);
    tracing::debug!(%meal_time, %receipt, "order accepted");
    Ok(receipt)
}

fn reject(order: &Order<'_>, reason: OrderError) -> InvalidOrder {
    tracing::debug!(meal_time = %order.catalog().meal_time(), %reason, "order refused");
    order.reject(reason)
}
