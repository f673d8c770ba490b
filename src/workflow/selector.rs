//! Selector resolution.
//!
//! Turns a trimmed selector token into a [`DishType`]. The token must parse as
//! an integer in `1..=4`; any other text fails with
//! [`OrderError::InvalidDishSelector`].

use crate::menu::DishType;
use crate::workflow::OrderError;

/// Resolves a selector token to its dish type.
///
/// The caller trims the token. A leading `+` and leading zeros are accepted,
/// as for any decimal integer.
///
/// # Errors
///
/// Returns [`OrderError::InvalidDishSelector`] if the token is not an integer
/// or names no dish type.
///
/// # Examples
///
/// ```
/// use kitchen::menu::DishType;
/// use kitchen::workflow::resolve_selector;
///
/// assert_eq!(resolve_selector("3"), Ok(DishType::Drink));
/// assert!(resolve_selector("5").is_err());
/// assert!(resolve_selector("coffee").is_err());
/// ```
pub fn resolve_selector(token: &str) -> Result<DishType, OrderError> {
    token
        .parse::<i32>()
        .ok()
        .and_then(DishType::from_selector)
        .ok_or_else(|| OrderError::InvalidDishSelector {
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", DishType::Entree)]
    #[case("2", DishType::Side)]
    #[case("3", DishType::Drink)]
    #[case("4", DishType::Desert)]
    #[case("+4", DishType::Desert)]
    #[case("01", DishType::Entree)]
    fn resolves_selectors(#[case] token: &str, #[case] expected: DishType) {
        assert_eq!(resolve_selector(token), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("0")]
    #[case("5")]
    #[case("-1")]
    #[case("1.0")]
    #[case("one")]
    #[case("99999999999")]
    fn rejects_invalid_selectors(#[case] token: &str) {
        assert_eq!(
            resolve_selector(token),
            Err(OrderError::InvalidDishSelector {
                token: token.to_string()
            })
        );
    }
}
