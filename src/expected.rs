//! The `Unspecified` sentinel and the display text of table cells.

use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Text shown wherever a value is [`Expected::Unspecified`].
pub const UNSPECIFIED: &str = "Unspecified";

/// An expected output of the formatting layer.
///
/// `Unspecified` means the formatting routine is not defined for the message
/// type at all. It is not the same thing as an empty string, an empty set or
/// `None`, all of which are legitimate specified values. Code must branch on
/// the variant, never on emptiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected<T> {
    Unspecified,
    Specified(T),
}

impl<T> Expected<T> {
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Expected::Unspecified)
    }

    pub fn is_specified(&self) -> bool {
        !self.is_unspecified()
    }

    pub fn as_specified_mut(&mut self) -> Option<&mut T> {
        match self {
            Expected::Specified(value) => Some(value),
            Expected::Unspecified => None,
        }
    }
}

impl<T> Default for Expected<T> {
    fn default() -> Self {
        Expected::Unspecified
    }
}

/// A present key always deserializes to `Specified`; absence is handled by
/// `#[serde(default)]` on the containing struct.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Expected<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Expected::Specified)
    }
}

/// Display text of a value placed in the right-hand column of a metadata table.
///
/// Strings render raw. Everything else renders as its debug text.
pub trait CellText {
    fn cell_text(&self) -> Cow<'_, str>;

    /// Length in characters, the unit table padding is measured in.
    fn cell_len(&self) -> usize {
        self.cell_text().chars().count()
    }
}

impl CellText for str {
    fn cell_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl CellText for String {
    fn cell_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl CellText for Option<String> {
    fn cell_text(&self) -> Cow<'_, str> {
        match self {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Borrowed("None"),
        }
    }
}

impl CellText for BTreeSet<String> {
    fn cell_text(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{:?}", self))
    }
}

impl<T: CellText> CellText for Expected<T> {
    fn cell_text(&self) -> Cow<'_, str> {
        match self {
            Expected::Specified(value) => value.cell_text(),
            Expected::Unspecified => Cow::Borrowed(UNSPECIFIED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, Deserialize)]
    #[serde(default)]
    struct Outputs {
        agent: Expected<Option<String>>,
        packages: Expected<BTreeSet<String>>,
    }

    #[test]
    fn test_absent_key_is_unspecified() {
        let outputs: Outputs = serde_json::from_str("{}").unwrap();
        assert!(outputs.agent.is_unspecified());
        assert!(outputs.packages.is_unspecified());
    }

    #[test]
    fn test_null_is_specified_none() {
        let outputs: Outputs = serde_json::from_str(r#"{"agent": null}"#).unwrap();
        assert_eq!(outputs.agent, Expected::Specified(None));
        assert_eq!(outputs.agent.cell_text(), "None");
    }

    #[test]
    fn test_empty_values_are_not_unspecified() {
        let outputs: Outputs = serde_json::from_str(r#"{"agent": "", "packages": []}"#).unwrap();
        assert!(outputs.agent.is_specified());
        assert!(outputs.packages.is_specified());
        assert_eq!(outputs.agent.cell_len(), 0);
        assert_eq!(outputs.packages.cell_text(), "{}");
    }

    #[test]
    fn test_cell_text() {
        let set: BTreeSet<String> = ["ralph", "lmacken"].iter().map(|s| s.to_string()).collect();
        assert_eq!(Expected::Specified(set).cell_text(), r#"{"lmacken", "ralph"}"#);
        assert_eq!(Expected::<String>::Unspecified.cell_text(), "Unspecified");
        assert_eq!(Expected::Specified("plain".to_string()).cell_text(), "plain");
    }

    #[test]
    fn test_cell_len_counts_chars() {
        let value = Expected::Specified(Some("café".to_string()));
        assert_eq!(value.cell_len(), 4);
    }
}
