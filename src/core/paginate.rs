//! Client-side pagination over an ordered collection.

/// 1-based pagination state.
///
/// Changing the page size always snaps back to the first page. The engine
/// never clamps `current_page` against the collection length; a page past
/// the end simply yields an empty slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    items_per_page: usize,
}

impl Pagination {
    pub fn new(items_per_page: usize) -> Self {
        Pagination {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.current_page = 1;
        self.items_per_page = items_per_page.max(1);
    }

    pub fn total_pages(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        len.div_ceil(self.items_per_page)
    }

    /// The current page's slice of `items`, clipped to the collection.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1) * self.items_per_page;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.items_per_page).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_partition_the_collection() {
        let items: Vec<u32> = (0..23).collect();
        let mut pagination = Pagination::new(5);
        let total_pages = pagination.total_pages(items.len());
        assert_eq!(total_pages, 5);

        let mut seen = Vec::new();
        for page in 1..=total_pages {
            pagination.set_page(page);
            seen.extend_from_slice(pagination.slice(&items));
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn test_last_page_is_clipped() {
        let items: Vec<u32> = (0..23).collect();
        let mut pagination = Pagination::new(10);
        pagination.set_page(3);
        assert_eq!(pagination.slice(&items), &[20, 21, 22]);
    }

    #[test]
    fn test_page_beyond_end_is_empty_not_an_error() {
        let items: Vec<u32> = (0..5).collect();
        let mut pagination = Pagination::new(10);
        pagination.set_page(4);
        assert!(pagination.slice(&items).is_empty());
    }

    #[test]
    fn test_changing_page_size_resets_to_first_page() {
        let mut pagination = Pagination::new(10);
        pagination.set_page(3);
        pagination.set_items_per_page(25);
        assert_eq!(pagination.current_page(), 1);
        assert_eq!(pagination.items_per_page(), 25);
    }

    #[test]
    fn test_changing_page_keeps_page_size() {
        let mut pagination = Pagination::new(10);
        pagination.set_page(7);
        assert_eq!(pagination.items_per_page(), 10);
        assert_eq!(pagination.current_page(), 7);
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<u32> = Vec::new();
        let pagination = Pagination::new(10);
        assert_eq!(pagination.total_pages(items.len()), 0);
        assert!(pagination.slice(&items).is_empty());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let pagination = Pagination::new(10);
        assert_eq!(pagination.total_pages(1), 1);
        assert_eq!(pagination.total_pages(10), 1);
        assert_eq!(pagination.total_pages(11), 2);
    }
}
