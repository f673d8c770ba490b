//! Order aggregation.
//!
//! An [`Order`] is bound to one [`Catalog`] and counts how many of each dish
//! type has been ordered. Adding a dish either updates the count or fails
//! without touching it:
//!
//! 1. A dish type missing from the catalog fails with
//!    [`OrderError::DishNotOffered`], naming the meal time the way the order
//!    was opened with it
//! 2. A count of zero becomes one
//! 3. A non-zero count grows by one if the item allows repeats, otherwise the
//!    add fails with [`OrderError::RepeatNotAllowed`]
//!
//! Rendering is read-only and lists dishes in [`DishType::ALL`] order, so the
//! receipt does not depend on the order in which dishes were added.
//!
//! # Examples
//!
//! ```
//! use kitchen::menu::{Catalog, DishType, MealTime};
//! use kitchen::workflow::Order;
//!
//! let mut order = Order::new(Catalog::for_meal_time(MealTime::Morning));
//! order.add_dish(DishType::Drink).unwrap();
//! order.add_dish(DishType::Drink).unwrap();
//! order.add_dish(DishType::Entree).unwrap();
//!
//! assert_eq!(order.render(false), "eggs, coffee(2x)");
//! assert_eq!(order.render(true), "eggs, coffee(2x), error");
//! ```

use smallvec::SmallVec;

use crate::menu::{Catalog, DishType};
use crate::workflow::{InvalidOrder, OrderError};

/// Entry appended to the receipt of a refused order.
pub const ERROR_MARKER: &str = "error";

/// Separator between receipt entries.
const SEPARATOR: &str = ", ";

/// One dish per category plus the error marker.
type ReceiptEntries = SmallVec<[String; DishType::COUNT + 1]>;

// =============================================================================
// Order
// =============================================================================

/// The dishes ordered so far for one meal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order<'a> {
    catalog: &'a Catalog,
    meal_time_name: &'a str,
    quantities: [u32; DishType::COUNT],
}

impl<'a> Order<'a> {
    /// Starts an empty order against `catalog`, named by its meal-time keyword.
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self::with_meal_time_name(catalog, catalog.meal_time().keyword())
    }

    /// Starts an empty order against `catalog`, named by `meal_time_name`.
    ///
    /// The name is what refusals quote, e.g. `MORNING` when the customer
    /// typed it that way.
    #[must_use]
    pub const fn with_meal_time_name(catalog: &'a Catalog, meal_time_name: &'a str) -> Self {
        Self {
            catalog,
            meal_time_name,
            quantities: [0; DishType::COUNT],
        }
    }

    /// Returns the catalog this order is taken from.
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Returns the meal-time name quoted in refusals.
    #[must_use]
    pub const fn meal_time_name(&self) -> &'a str {
        self.meal_time_name
    }

    /// Returns how many of `dish_type` have been ordered.
    #[must_use]
    pub const fn quantity(&self, dish_type: DishType) -> u32 {
        self.quantities[dish_type.index()]
    }

    /// Returns `true` if no dish has been accepted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.iter().all(|quantity| *quantity == 0)
    }

    /// Adds one dish of `dish_type` to the order.
    ///
    /// # Errors
    ///
    /// - [`OrderError::DishNotOffered`] if the catalog has no item for `dish_type`
    /// - [`OrderError::RepeatNotAllowed`] if the item was already ordered and
    ///   may not be repeated
    ///
    /// The order is unchanged when an error is returned.
    pub fn add_dish(&mut self, dish_type: DishType) -> Result<(), OrderError> {
        let item = self
            .catalog
            .item(dish_type)
            .ok_or_else(|| OrderError::DishNotOffered {
                dish_type,
                meal_time_name: self.meal_time_name.to_string(),
            })?;

        let quantity = &mut self.quantities[dish_type.index()];
        if *quantity == 0 {
            *quantity = 1;
        } else if item.repeat_allowed() {
            *quantity = quantity.saturating_add(1);
        } else {
            return Err(OrderError::RepeatNotAllowed {
                item_name: item.name(),
            });
        }

        tracing::trace!(item = item.name(), quantity = *quantity, "dish added");
        Ok(())
    }

    /// Renders the receipt.
    ///
    /// Each ordered dish appears once, as its name or as `name(Nx)` when `N`
    /// is greater than one. With `mark_error` an `error` entry is appended.
    #[must_use]
    pub fn render(&self, mark_error: bool) -> String {
        let mut entries: ReceiptEntries = DishType::ALL
            .into_iter()
            .filter_map(|dish_type| {
                let quantity = self.quantity(dish_type);
                let item = self.catalog.item(dish_type)?;
                match quantity {
                    0 => None,
                    1 => Some(item.name().to_string()),
                    _ => Some(format!("{}({quantity}x)", item.name())),
                }
            })
            .collect();

        if mark_error {
            entries.push(ERROR_MARKER.to_string());
        }

        entries.join(SEPARATOR)
    }

    /// Turns `reason` into a refused order carrying the current receipt.
    #[must_use]
    pub fn reject(&self, reason: OrderError) -> InvalidOrder {
        InvalidOrder::with_receipt(reason, self.render(true))
    }
}
