//! Service periods.

use std::fmt;
use std::str::FromStr;

use crate::workflow::OrderError;

/// One of the two service periods of the restaurant.
///
/// Parsing ignores ASCII case, so `"Morning"` and `"NIGHT"` are accepted.
///
/// # Examples
///
/// ```
/// use kitchen::menu::MealTime;
///
/// let meal_time: MealTime = "Morning".parse().unwrap();
/// assert_eq!(meal_time, MealTime::Morning);
/// assert_eq!(meal_time.to_string(), "morning");
/// assert!("lunch".parse::<MealTime>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MealTime {
    /// Breakfast service.
    Morning,
    /// Dinner service.
    Night,
}

impl MealTime {
    /// Both service periods.
    pub const ALL: [Self; 2] = [Self::Morning, Self::Night];

    /// Returns the keyword customers type for this period.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Night => "night",
        }
    }

    /// Matches a token against the keywords, ignoring ASCII case.
    #[must_use]
    pub fn from_keyword(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|meal_time| token.eq_ignore_ascii_case(meal_time.keyword()))
    }
}

impl FromStr for MealTime {
    type Err = OrderError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(token).ok_or_else(|| OrderError::InvalidMealTime {
            token: token.to_string(),
        })
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("morning", MealTime::Morning)]
    #[case("MORNING", MealTime::Morning)]
    #[case("Morning", MealTime::Morning)]
    #[case("night", MealTime::Night)]
    #[case("NiGhT", MealTime::Night)]
    fn parses_keywords_ignoring_case(#[case] token: &str, #[case] expected: MealTime) {
        assert_eq!(token.parse::<MealTime>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("noon")]
    #[case("mornin")]
    #[case("nights")]
    #[case("1")]
    fn rejects_unknown_tokens(#[case] token: &str) {
        assert_eq!(
            token.parse::<MealTime>(),
            Err(OrderError::InvalidMealTime {
                token: token.to_string()
            })
        );
    }

    #[rstest]
    fn display_is_lowercase_keyword() {
        assert_eq!(MealTime::Morning.to_string(), "morning");
        assert_eq!(MealTime::Night.to_string(), "night");
    }
}
