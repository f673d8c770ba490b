//! Serialization tests for the menu types (`serde` feature).

use kitchen::menu::{Catalog, DishType, MealTime};
use rstest::rstest;

#[rstest]
fn dish_type_serializes_as_variant_name() {
    assert_eq!(serde_json::to_string(&DishType::Desert).unwrap(), "\"Desert\"");
}

#[rstest]
fn meal_time_serializes_as_keyword() {
    assert_eq!(serde_json::to_string(&MealTime::Night).unwrap(), "\"night\"");

    let parsed: MealTime = serde_json::from_str("\"morning\"").unwrap();
    assert_eq!(parsed, MealTime::Morning);
}

#[rstest]
fn menu_item_serializes_all_fields() {
    let coffee = Catalog::for_meal_time(MealTime::Morning)
        .item(DishType::Drink)
        .unwrap();

    let value = serde_json::to_value(coffee).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "name": "coffee",
            "dish_type": "Drink",
            "repeat_allowed": true,
        })
    );
}
