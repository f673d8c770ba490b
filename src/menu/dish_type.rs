//! Dish categories.
//!
//! Defines [`DishType`], the four food categories a menu can offer, together
//! with the canonical order in which receipts list them.

use std::fmt;

// =============================================================================
// DishType
// =============================================================================

/// A food category on the menu.
///
/// Customers pick a category by its selector digit (`1` to `4`). Receipts
/// always list categories in the order of [`DishType::ALL`].
///
/// # Examples
///
/// ```
/// use kitchen::menu::DishType;
///
/// assert_eq!(DishType::Drink.selector(), 3);
/// assert_eq!(DishType::Desert.to_string(), "Desert");
/// assert_eq!(DishType::ALL.first(), Some(&DishType::Entree));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DishType {
    /// Main course.
    Entree,
    /// Side dish.
    Side,
    /// Beverage.
    Drink,
    /// Dessert course.
    Desert,
}

impl DishType {
    /// Number of dish categories.
    pub const COUNT: usize = 4;

    /// Every category, in receipt order.
    pub const ALL: [Self; Self::COUNT] = [Self::Entree, Self::Side, Self::Drink, Self::Desert];

    /// Returns the position of this category within [`DishType::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Entree => 0,
            Self::Side => 1,
            Self::Drink => 2,
            Self::Desert => 3,
        }
    }

    /// Returns the digit a customer types to order this category.
    #[must_use]
    pub const fn selector(self) -> u8 {
        match self {
            Self::Entree => 1,
            Self::Side => 2,
            Self::Drink => 3,
            Self::Desert => 4,
        }
    }

    /// Looks up the category for a selector digit.
    ///
    /// Returns `None` for anything outside `1..=4`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kitchen::menu::DishType;
    ///
    /// assert_eq!(DishType::from_selector(2), Some(DishType::Side));
    /// assert_eq!(DishType::from_selector(5), None);
    /// ```
    #[must_use]
    pub const fn from_selector(selector: i32) -> Option<Self> {
        match selector {
            1 => Some(Self::Entree),
            2 => Some(Self::Side),
            3 => Some(Self::Drink),
            4 => Some(Self::Desert),
            _ => None,
        }
    }

    /// Returns the category name as printed in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Entree => "Entree",
            Self::Side => "Side",
            Self::Drink => "Drink",
            Self::Desert => "Desert",
        }
    }
}

impl fmt::Display for DishType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
