//! Menu entries.

use super::DishType;

/// A dish offered on a menu.
///
/// Each item belongs to one [`DishType`] and states whether a customer may
/// order it more than once in a single order.
///
/// # Examples
///
/// ```
/// use kitchen::menu::{DishType, MenuItem};
///
/// const COFFEE: MenuItem = MenuItem::new("coffee", DishType::Drink, true);
/// assert_eq!(COFFEE.name(), "coffee");
/// assert!(COFFEE.repeat_allowed());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MenuItem {
    name: &'static str,
    dish_type: DishType,
    repeat_allowed: bool,
}

impl MenuItem {
    /// Creates a menu item.
    #[must_use]
    pub const fn new(name: &'static str, dish_type: DishType, repeat_allowed: bool) -> Self {
        Self {
            name,
            dish_type,
            repeat_allowed,
        }
    }

    /// Creates an item that may be ordered at most once per order.
    #[must_use]
    pub const fn single(name: &'static str, dish_type: DishType) -> Self {
        Self::new(name, dish_type, false)
    }

    /// Creates an item that may be ordered any number of times.
    #[must_use]
    pub const fn repeatable(name: &'static str, dish_type: DishType) -> Self {
        Self::new(name, dish_type, true)
    }

    /// Returns the name printed on receipts.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the category of this item.
    #[must_use]
    pub const fn dish_type(&self) -> DishType {
        self.dish_type
    }

    /// Returns `true` if the item may be ordered more than once.
    #[must_use]
    pub const fn repeat_allowed(&self) -> bool {
        self.repeat_allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn single_forbids_repeats() {
        let item = MenuItem::single("steak", DishType::Entree);

        assert_eq!(item.name(), "steak");
        assert_eq!(item.dish_type(), DishType::Entree);
        assert!(!item.repeat_allowed());
    }

    #[rstest]
    fn repeatable_allows_repeats() {
        let item = MenuItem::repeatable("potato", DishType::Side);

        assert!(item.repeat_allowed());
        assert_eq!(item, MenuItem::new("potato", DishType::Side, true));
    }
}
