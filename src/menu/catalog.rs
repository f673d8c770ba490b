//! Fixed per-meal-time menus.
//!
//! A [`Catalog`] maps each [`DishType`] it offers to one [`MenuItem`]. The
//! dish types a catalog holds are exactly the ones that may be ordered at its
//! meal time. The two catalogs of the restaurant are `static` values built at
//! compile time and never change, so they can be shared by any number of
//! orders without synchronization.
//!
//! | Meal time | Entree | Side | Drink | Desert |
//! |-----------|--------|------|-------|--------|
//! | morning | eggs | toast | coffee (repeatable) | - |
//! | night | steak | potato (repeatable) | wine | cake |
//!
//! # Examples
//!
//! ```
//! use kitchen::menu::{Catalog, DishType, MealTime};
//!
//! let catalog = Catalog::for_meal_time(MealTime::Morning);
//! assert_eq!(catalog.item(DishType::Entree).map(|item| item.name()), Some("eggs"));
//! assert!(!catalog.offers(DishType::Desert));
//! ```

use super::{DishType, MealTime, MenuItem};

// =============================================================================
// Catalog
// =============================================================================

/// The menu for one meal time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    meal_time: MealTime,
    slots: [Option<MenuItem>; DishType::COUNT],
}

static_assertions::assert_impl_all!(Catalog: Send, Sync);

impl Catalog {
    /// Builds a catalog from its items.
    ///
    /// # Panics
    ///
    /// Panics if two items share a dish type. In a `const` or `static`
    /// initializer this is a compile error.
    #[must_use]
    pub const fn new(meal_time: MealTime, items: &[MenuItem]) -> Self {
        let mut slots = [None; DishType::COUNT];
        let mut position = 0;
        while position < items.len() {
            let item = items[position];
            let slot = item.dish_type().index();
            assert!(slots[slot].is_none(), "a catalog holds one item per dish type");
            slots[slot] = Some(item);
            position += 1;
        }
        Self { meal_time, slots }
    }

    /// Returns the catalog served at `meal_time`.
    #[must_use]
    pub fn for_meal_time(meal_time: MealTime) -> &'static Self {
        match meal_time {
            MealTime::Morning => &MORNING_MENU,
            MealTime::Night => &NIGHT_MENU,
        }
    }

    /// Returns the meal time this catalog is served at.
    #[must_use]
    pub const fn meal_time(&self) -> MealTime {
        self.meal_time
    }

    /// Returns the item offered for `dish_type`, if any.
    #[must_use]
    pub const fn item(&self, dish_type: DishType) -> Option<&MenuItem> {
        self.slots[dish_type.index()].as_ref()
    }

    /// Returns `true` if `dish_type` can be ordered from this catalog.
    #[must_use]
    pub const fn offers(&self, dish_type: DishType) -> bool {
        self.slots[dish_type.index()].is_some()
    }

    /// Iterates over the offered items in receipt order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.slots.iter().flatten()
    }

    /// Returns the number of dish types offered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items().count()
    }

    /// Returns `true` if nothing can be ordered from this catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }
}

// =============================================================================
// Restaurant menus
// =============================================================================

/// Breakfast menu. Coffee may be ordered repeatedly; dessert is not served.
pub static MORNING_MENU: Catalog = Catalog::new(
    MealTime::Morning,
    &[
        MenuItem::single("eggs", DishType::Entree),
        MenuItem::single("toast", DishType::Side),
        MenuItem::repeatable("coffee", DishType::Drink),
    ],
);

/// Dinner menu. Potato may be ordered repeatedly.
pub static NIGHT_MENU: Catalog = Catalog::new(
    MealTime::Night,
    &[
        MenuItem::single("steak", DishType::Entree),
        MenuItem::repeatable("potato", DishType::Side),
        MenuItem::single("wine", DishType::Drink),
        MenuItem::single("cake", DishType::Desert),
    ],
);
