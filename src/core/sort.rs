//! Tri-state column sorting for tabular views.
//!
//! Each column cycles through ascending, descending and unsorted.
//! Records expose their sortable fields through the [`Sortable`] trait,
//! which maps a finite set of column keys to typed field values. Sorting
//! never mutates the input collection.

use std::cmp::Ordering;

use crate::core::collation;

/// A resolved field value for comparison purposes.
///
/// `Missing` covers fields that are absent on a given record, such as a
/// profitability metric a fund does not report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Num(f64),
    Missing,
}

/// Maps column keys to field values for a record type.
pub trait Sortable {
    type Key: Copy + PartialEq;

    fn field(&self, key: Self::Key) -> FieldValue<'_>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current sort selection: at most one active column and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    pub column: Option<K>,
    pub direction: Option<SortDirection>,
}

impl<K: Copy + PartialEq> SortState<K> {
    pub const fn unsorted() -> Self {
        SortState {
            column: None,
            direction: None,
        }
    }

    /// Advances the sort cycle for `key`.
    ///
    /// Selecting an inactive column starts an ascending sort; selecting
    /// the active column again flips to descending, then a third
    /// selection clears the sort and restores input order.
    pub fn advance(&mut self, key: K) {
        use SortDirection::{Ascending, Descending};

        let active = self.column == Some(key);
        *self = match (active, self.direction) {
            (false, _) | (true, None) => SortState {
                column: Some(key),
                direction: Some(Ascending),
            },
            (true, Some(Ascending)) => SortState {
                column: Some(key),
                direction: Some(Descending),
            },
            (true, Some(Descending)) => SortState::unsorted(),
        };
    }
}

impl<K: Copy + PartialEq> Default for SortState<K> {
    fn default() -> Self {
        Self::unsorted()
    }
}

/// Returns a sorted copy of `items` according to `state`.
///
/// With no active column the input order is preserved. The sort is
/// stable, so records that compare equal keep their relative order.
pub fn sorted_view<T>(items: &[T], state: &SortState<T::Key>) -> Vec<T>
where
    T: Sortable + Clone,
{
    let mut view = items.to_vec();
    let (Some(column), Some(direction)) = (state.column, state.direction) else {
        return view;
    };

    view.sort_by(|a, b| {
        let ord = compare_fields(a.field(column), b.field(column));
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    view
}

fn compare_fields(a: FieldValue<'_>, b: FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Str(x), FieldValue::Str(y)) => collation::compare_es(x, y),
        (FieldValue::Num(x), FieldValue::Num(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        // Mismatched or missing values compare as equal. Possibly too
        // permissive (a string next to a missing value sorts nowhere in
        // particular), worth revisiting.
        _ => Ordering::Equal,
    }
}
