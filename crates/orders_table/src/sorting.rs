//! Field comparators and an index-decorated stable sort.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(ParseError::UnknownDirection(other.to_string())),
        }
    }
}

/// A single field value as seen by the comparator.
///
/// Values of different variants have no natural ordering and compare as
/// equal, as does `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Integer(i64),
    Number(f64),
    Text(&'a str),
}

impl PartialOrd for FieldValue<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// A field of some record type that the comparator can read.
pub trait SortKey: Copy {
    type Record;

    fn value_of(self, record: &Self::Record) -> FieldValue<'_>;
}

/// Builds a comparator over `key`.
///
/// Descending puts the larger value first. Ascending is the exact mirror of
/// descending, ties included.
pub fn comparator<K>(
    direction: SortDirection,
    key: K,
) -> impl Fn(&K::Record, &K::Record) -> Ordering
where
    K: SortKey,
{
    move |a, b| {
        let descending = descending_order(&key.value_of(a), &key.value_of(b));
        match direction {
            SortDirection::Descending => descending,
            SortDirection::Ascending => descending.reverse(),
        }
    }
}

fn descending_order(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match a.partial_cmp(b) {
        Some(Ordering::Less) => Ordering::Greater,
        Some(Ordering::Greater) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

/// Returns a sorted copy of `items`, keeping the input order of elements the
/// comparator reports as equal. `items` is left untouched.
///
/// The original index breaks ties, so stability does not depend on the
/// underlying sort primitive.
pub fn stable_sort<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut decorated: Vec<(usize, &T)> = items.iter().enumerate().collect();
    decorated.sort_unstable_by(|&(index_a, a), &(index_b, b)| {
        compare(a, b).then_with(|| index_a.cmp(&index_b))
    });
    decorated.into_iter().map(|(_, item)| item.clone()).collect()
}

#[cfg(test)]
#[path = "tests/sorting_tests.rs"]
mod tests;
