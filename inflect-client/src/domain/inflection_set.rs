//! Fixed-size set of inflected forms.

use std::ops::Index;

use super::{Case, INFLECTIONS_COUNT};

/// The six inflected forms of a word, one slot per grammatical case.
///
/// A set always has exactly [`INFLECTIONS_COUNT`] slots. A slot the service
/// gave no form for holds the empty string.
///
/// # Examples
///
/// ```
/// use inflect_client::domain::{Case, InflectionSet};
///
/// let mut set = InflectionSet::empty();
/// set.set(Case::new(1).unwrap(), "Москва");
/// assert_eq!(&set[Case::new(1).unwrap()], "Москва");
/// assert_eq!(&set[Case::new(2).unwrap()], "");
/// assert_eq!(set.as_slice().len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InflectionSet([String; INFLECTIONS_COUNT]);

impl InflectionSet {
    /// A set with every slot empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A set with every slot holding `word`.
    pub fn filled(word: &str) -> Self {
        Self(std::array::from_fn(|_| word.to_string()))
    }

    /// Replace the form for `case`.
    pub fn set(&mut self, case: Case, text: impl Into<String>) {
        self.0[case.index()] = text.into();
    }

    /// The form for `case`, or `None` if the slot is empty.
    pub fn get(&self, case: Case) -> Option<&str> {
        let text = self.0[case.index()].as_str();
        (!text.is_empty()).then_some(text)
    }

    /// All six slots in case order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate over `(case, form)` pairs in case order.
    pub fn iter(&self) -> impl Iterator<Item = (Case, &str)> {
        Case::ALL.into_iter().zip(self.0.iter().map(String::as_str))
    }
}

impl Index<Case> for InflectionSet {
    type Output = str;

    fn index(&self, case: Case) -> &str {
        &self.0[case.index()]
    }
}
