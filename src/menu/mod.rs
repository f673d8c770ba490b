//! Menu data.
//!
//! - [`DishType`] - The four food categories and their receipt order
//! - [`MealTime`] - Morning or night service
//! - [`MenuItem`] - A named dish with its repeat policy
//! - [`Catalog`] - The fixed menu for each meal time

mod catalog;
mod dish_type;
mod meal_time;
mod menu_item;

pub use catalog::{Catalog, MORNING_MENU, NIGHT_MENU};
pub use dish_type::DishType;
pub use meal_time::MealTime;
pub use menu_item::MenuItem;
