//! Month-name localization for the date picker.
//!
//! ## Usage
//!
//! Pick one of the built-in tables or inject a custom one to render month
//! names in another language.

const FRENCH: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const ENGLISH: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// An ordered table of twelve month names.
///
/// The month column renders these names; the numeric month value of the
/// current selection is independent of the table, so swapping locales changes
/// labels only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLocale {
    names: [String; 12],
}

impl MonthLocale {
    /// French month names (the default).
    pub fn french() -> Self {
        Self::from_names(FRENCH.map(str::to_string))
    }

    /// English month names.
    pub fn english() -> Self {
        Self::from_names(ENGLISH.map(str::to_string))
    }

    /// Builds a locale from a custom ordered table, January first.
    pub fn from_names(names: [String; 12]) -> Self {
        Self { names }
    }

    /// Returns the name for a 1-based month, or `None` when out of range.
    pub fn name(&self, month: u8) -> Option<&str> {
        if (1..=12).contains(&month) {
            Some(self.names[usize::from(month) - 1].as_str())
        } else {
            None
        }
    }

    /// Reverse lookup: the 1-based month for a rendered name.
    ///
    /// Total over arbitrary input; unknown names yield `None` instead of an
    /// invalid month index.
    pub fn index_of(&self, name: &str) -> Option<u8> {
        self.names
            .iter()
            .position(|candidate| candidate == name)
            .map(|index| index as u8 + 1)
    }

    /// All twelve names in calendar order.
    pub fn names(&self) -> &[String; 12] {
        &self.names
    }
}

impl Default for MonthLocale {
    fn default() -> Self {
        Self::french()
    }
}
