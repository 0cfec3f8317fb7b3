//! Page slicing for the roster table.
//!
//! Out-of-range page indices are never an error: they yield an empty page.

use log::debug;
use shared::PageSize;

/// Visible slice for a page plus the total element count
pub fn paginate<T>(items: &[T], page_index: usize, page_size: usize) -> (&[T], usize) {
    let total = items.len();
    let start = page_index.saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    (&items[start..end], total)
}

/// Number of pages needed to show `total` elements
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Current page position of the roster table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page_index: usize,
    page_size: PageSize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl PaginationState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_index: 0,
            page_size,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn set_page(&mut self, page_index: usize) {
        debug!("Moving to page {}", page_index);
        self.page_index = page_index;
    }

    /// Changing the page size always returns to the first page
    pub fn set_page_size(&mut self, page_size: PageSize) {
        debug!("Page size set to {}", page_size.rows());
        self.page_size = page_size;
        self.page_index = 0;
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    /// The slice of `items` visible at the current position
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.page_index, self.page_size.rows()).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_seven_by_five() {
        let items: Vec<u32> = (1..=7).collect();

        let (page, total) = paginate(&items, 0, 5);
        assert_eq!(page, &[1, 2, 3, 4, 5]);
        assert_eq!(total, 7);

        let (page, total) = paginate(&items, 1, 5);
        assert_eq!(page, &[6, 7]);
        assert_eq!(total, 7);

        let (page, total) = paginate(&items, 2, 5);
        assert!(page.is_empty());
        assert_eq!(total, 7);
    }

    #[test]
    fn test_paginate_far_out_of_range() {
        let items: Vec<u32> = (1..=3).collect();
        let (page, total) = paginate(&items, usize::MAX, 25);
        assert!(page.is_empty());
        assert_eq!(total, 3);
    }

    #[test]
    fn test_paginate_empty_and_zero_size() {
        let empty: Vec<u32> = Vec::new();
        let (page, total) = paginate(&empty, 0, 5);
        assert!(page.is_empty());
        assert_eq!(total, 0);

        let items: Vec<u32> = vec![1, 2, 3];
        assert!(paginate(&items, 0, 0).0.is_empty());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(7, 5), 2);
        assert_eq!(page_count(26, 25), 2);
        assert_eq!(page_count(3, 0), 0);
    }

    #[test]
    fn test_set_page_size_resets_to_first_page() {
        let mut state = PaginationState::new(PageSize::Five);
        state.set_page(3);
        assert_eq!(state.page_index(), 3);

        state.set_page_size(PageSize::Ten);
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.page_size(), PageSize::Ten);

        // Same size still resets
        state.set_page(2);
        state.set_page_size(PageSize::Ten);
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn test_visible() {
        let items: Vec<u32> = (1..=12).collect();
        let mut state = PaginationState::new(PageSize::Five);
        state.set_page(2);
        assert_eq!(state.visible(&items), &[11, 12]);
    }
}
