//! Shared filter infrastructure: the [`Comparator`] enum, the
//! [`RangeFilter`] slot map backing every filterable field, and the
//! [`FilterValue`] query-string encodings.

use chrono::{DateTime, NaiveDate, Utc};
use url::Url;

/// Comparison operator selecting which wire-key suffix a filter value is
/// emitted under.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Comparator {
    /// Exact match, emitted under the bare field name.
    Equal = 0,
    /// Emitted under `<field>.lt`.
    LessThan = 1,
    /// Emitted under `<field>.lte`.
    LessOrEqual = 2,
    /// Emitted under `<field>.gt`.
    GreaterThan = 3,
    /// Emitted under `<field>.gte`.
    GreaterOrEqual = 4,
}

impl Comparator {
    /// All comparators, in wire-emission order.
    pub const ALL: [Comparator; 5] = [
        Comparator::Equal,
        Comparator::LessThan,
        Comparator::LessOrEqual,
        Comparator::GreaterThan,
        Comparator::GreaterOrEqual,
    ];

    /// Query-key suffix for this comparator. Equality has none.
    pub fn key_suffix(self) -> Option<&'static str> {
        match self {
            Comparator::Equal => None,
            Comparator::LessThan => Some("lt"),
            Comparator::LessOrEqual => Some("lte"),
            Comparator::GreaterThan => Some("gt"),
            Comparator::GreaterOrEqual => Some("gte"),
        }
    }
}

/// Query-string encoding for filterable value types.
///
/// Calendar dates encode as `YYYY-MM-DD`; timestamps encode as a
/// millisecond epoch. Which encoding a field uses is fixed by the value
/// type it is declared with.
pub trait FilterValue {
    /// Renders the value as it appears in the query string.
    fn to_query_value(&self) -> String;
}

impl FilterValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl FilterValue for f64 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl FilterValue for NaiveDate {
    fn to_query_value(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl FilterValue for DateTime<Utc> {
    fn to_query_value(&self) -> String {
        self.timestamp_millis().to_string()
    }
}

/// One filterable field: a fixed mapping from [`Comparator`] to an optional
/// bound value.
///
/// Slots are independent. Setting one slot never touches the others, so a
/// range is expressed by populating two slots (e.g. `.gte` and `.lt`
/// together). An empty slot contributes no query key.
#[derive(Clone)]
pub struct RangeFilter<T> {
    slots: [Option<T>; 5],
}

impl<T> Default for RangeFilter<T> {
    fn default() -> Self {
        RangeFilter {
            slots: [None, None, None, None, None],
        }
    }
}

impl<T> RangeFilter<T> {
    /// Binds `value` under `comparator`, replacing any previous value in
    /// that slot only.
    pub fn set(&mut self, comparator: Comparator, value: T) {
        self.slots[comparator as usize] = Some(value);
    }

    /// Returns the value bound under `comparator`, if any.
    pub fn get(&self, comparator: Comparator) -> Option<&T> {
        self.slots[comparator as usize].as_ref()
    }

    /// True when no slot is populated.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterates populated slots in wire-emission order.
    pub fn iter(&self) -> impl Iterator<Item = (Comparator, &T)> + '_ {
        Comparator::ALL
            .iter()
            .filter_map(move |c| self.get(*c).map(|v| (*c, v)))
    }
}

impl<T: FilterValue> RangeFilter<T> {
    /// Appends one query pair per populated slot: the bare field name for
    /// equality, `<field>.<suffix>` for the range comparators.
    pub fn add_to_url(&self, url: &Url, field: &str) -> Url {
        let mut url = url.clone();
        for (comparator, value) in self.iter() {
            let key = match comparator.key_suffix() {
                None => field.to_string(),
                Some(suffix) => format!("{}.{}", field, suffix),
            };
            url.query_pairs_mut()
                .append_pair(key.as_str(), value.to_query_value().as_str());
        }
        url
    }
}
