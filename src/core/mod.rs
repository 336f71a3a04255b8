//! Pure, synchronous building blocks for the fund views.

pub mod collation;
pub mod group;
pub mod names;
pub mod paginate;
pub mod quantity;
pub mod sort;

// Re-export main types for cleaner imports
pub use group::{CategoryBucket, OTHER_CATEGORY, group_by_category};
pub use paginate::Pagination;
pub use quantity::calculate_quantity;
pub use sort::{FieldValue, SortDirection, SortState, Sortable, sorted_view};
