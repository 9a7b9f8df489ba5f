//! Grammatical case numbers.

use std::fmt;

use super::INFLECTIONS_COUNT;

/// Error returned when a case number cannot be parsed or is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid case number {raw:?}: {reason}")]
pub struct InvalidCase {
    raw: String,
    reason: &'static str,
}

/// A grammatical case, numbered 1 through 6.
///
/// The inflection service numbers cases from 1 (nominative) to 6
/// (prepositional). `Case` guarantees the number is in range, so
/// [`Case::index`] is always a valid slot in an [`InflectionSet`].
///
/// # Examples
///
/// ```
/// use inflect_client::domain::Case;
///
/// let genitive = Case::parse("2").unwrap();
/// assert_eq!(genitive.number(), 2);
/// assert_eq!(genitive.index(), 1);
///
/// assert!(Case::parse("0").is_err());
/// assert!(Case::parse("7").is_err());
/// assert!(Case::parse("two").is_err());
/// ```
///
/// [`InflectionSet`]: super::InflectionSet
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Case(u8);

impl Case {
    /// All six cases in order.
    pub const ALL: [Case; INFLECTIONS_COUNT] =
        [Case(1), Case(2), Case(3), Case(4), Case(5), Case(6)];

    /// Build a case from its 1-based number.
    pub fn new(number: u8) -> Option<Self> {
        (1..=INFLECTIONS_COUNT as u8)
            .contains(&number)
            .then_some(Case(number))
    }

    /// Parse a case number as sent in the `case` attribute.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, InvalidCase> {
        let number: u8 = s.trim().parse().map_err(|_| InvalidCase {
            raw: s.to_string(),
            reason: "not an integer",
        })?;

        Case::new(number).ok_or_else(|| InvalidCase {
            raw: s.to_string(),
            reason: "must be between 1 and 6",
        })
    }

    /// The 1-based case number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// The 0-based slot index.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl fmt::Debug for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Case({})", self.0)
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
