//! Category grouping of portfolio positions.

/// Reserved bucket for items whose fund cannot be resolved in the catalog.
pub const OTHER_CATEGORY: &str = "OTHER";

/// One category bucket, in first-seen order within the grouped result.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBucket<T> {
    pub category: String,
    pub items: Vec<T>,
}

/// Partitions `items` into category buckets.
///
/// The category of each item is resolved through `category_of` (a lookup
/// against the funds catalog by id); unresolved items land in the
/// [`OTHER_CATEGORY`] bucket. Bucket order follows the first occurrence
/// of each category in the input. An empty input yields no buckets at
/// all, not even the sentinel one.
pub fn group_by_category<T, F, G>(items: &[T], id_of: F, category_of: G) -> Vec<CategoryBucket<T>>
where
    T: Clone,
    F: Fn(&T) -> &str,
    G: Fn(&str) -> Option<String>,
{
    let mut buckets: Vec<CategoryBucket<T>> = Vec::new();

    for item in items {
        let category = category_of(id_of(item)).unwrap_or_else(|| OTHER_CATEGORY.to_string());

        match buckets.iter_mut().find(|b| b.category == category) {
            Some(bucket) => bucket.items.push(item.clone()),
            None => buckets.push(CategoryBucket {
                category,
                items: vec![item.clone()],
            }),
        }
    }

    buckets
}
