//! Carousel paging state machine.
//!
//! The carousel renders every product once and slides a viewport across
//! fixed-size pages; the only state is the current page index and the
//! responsive page size. Transitions keep the invariant
//! `0 <= index < total_pages` where
//! `total_pages = ceil(product_count / per_page)`.

use crate::config::Breakpoints;

/// Number of slides visible per page at the given viewport width.
pub fn slides_per_page(viewport_width: u32, breakpoints: &Breakpoints) -> usize {
    if viewport_width <= breakpoints.narrow_max {
        1
    } else if viewport_width <= breakpoints.medium_max {
        2
    } else {
        4
    }
}

/// Total number of pages for a catalog of `product_count` items.
///
/// Always at least 1, so an empty carousel still has a valid page 0.
pub fn total_pages(product_count: usize, per_page: usize) -> usize {
    debug_assert!(per_page > 0);
    product_count.div_ceil(per_page).max(1)
}

/// The current page of the carousel viewport.
///
/// All transitions take the current `total` page count as an argument;
/// the cursor itself never goes stale when the page size changes, callers
/// re-clamp with [`PageCursor::clamp_to`] after a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageCursor {
    index: usize,
}

impl PageCursor {
    /// Cursor at the first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current page index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Jump to `page`, clamping into `[0, total - 1]`.
    pub fn go_to(&mut self, page: usize, total: usize) {
        debug_assert!(total > 0);
        self.index = page.min(total - 1);
    }

    /// Advance one page, wrapping from the last page back to the first.
    pub fn next_wrapping(&mut self, total: usize) {
        debug_assert!(total > 0);
        self.index = if self.index + 1 >= total {
            0
        } else {
            self.index + 1
        };
    }

    /// Step back one page, wrapping from the first page to the last.
    pub fn prev_wrapping(&mut self, total: usize) {
        debug_assert!(total > 0);
        self.index = if self.index == 0 {
            total - 1
        } else {
            self.index - 1
        };
    }

    /// Re-establish the invariant after `total` shrinks (viewport resize).
    pub fn clamp_to(&mut self, total: usize) {
        debug_assert!(total > 0);
        if self.index >= total {
            self.index = total - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bp() -> Breakpoints {
        Breakpoints::default()
    }

    // === slides_per_page Tests ===

    #[test]
    fn test_slides_per_page_narrow() {
        assert_eq!(slides_per_page(320, &bp()), 1);
        assert_eq!(slides_per_page(768, &bp()), 1);
    }

    #[test]
    fn test_slides_per_page_medium() {
        assert_eq!(slides_per_page(769, &bp()), 2);
        assert_eq!(slides_per_page(1024, &bp()), 2);
    }

    #[test]
    fn test_slides_per_page_wide() {
        assert_eq!(slides_per_page(1025, &bp()), 4);
        assert_eq!(slides_per_page(2560, &bp()), 4);
    }

    #[test]
    fn test_slides_per_page_custom_breakpoints() {
        let custom = Breakpoints {
            narrow_max: 500,
            medium_max: 900,
        };
        assert_eq!(slides_per_page(500, &custom), 1);
        assert_eq!(slides_per_page(501, &custom), 2);
        assert_eq!(slides_per_page(901, &custom), 4);
    }

    // === total_pages Tests ===

    #[test]
    fn test_total_pages_exact_division() {
        assert_eq!(total_pages(8, 4), 2);
        assert_eq!(total_pages(4, 2), 2);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(9, 4), 3);
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(total_pages(1, 4), 1);
    }

    #[test]
    fn test_total_pages_empty_catalog_has_one_page() {
        assert_eq!(total_pages(0, 4), 1);
        assert_eq!(total_pages(0, 1), 1);
    }

    // === PageCursor Tests ===

    #[test]
    fn test_cursor_starts_at_zero() {
        assert_eq!(PageCursor::new().index(), 0);
    }

    #[test]
    fn test_go_to_within_range() {
        let mut cursor = PageCursor::new();
        cursor.go_to(2, 5);
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_go_to_clamps_past_end() {
        let mut cursor = PageCursor::new();
        cursor.go_to(99, 3);
        assert_eq!(cursor.index(), 2);

        cursor.go_to(3, 3);
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_next_wraps_to_first_page() {
        let mut cursor = PageCursor::new();
        cursor.go_to(2, 3);
        cursor.next_wrapping(3);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last_page() {
        let mut cursor = PageCursor::new();
        cursor.prev_wrapping(3);
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_nine_products_four_per_page_cycles_in_three() {
        // 9 items at 4 per page -> 3 pages; three advances return to 0.
        let total = total_pages(9, 4);
        assert_eq!(total, 3);

        let mut cursor = PageCursor::new();
        cursor.next_wrapping(total);
        assert_eq!(cursor.index(), 1);
        cursor.next_wrapping(total);
        assert_eq!(cursor.index(), 2);
        cursor.next_wrapping(total);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_single_page_wraps_in_place() {
        let mut cursor = PageCursor::new();
        cursor.next_wrapping(1);
        assert_eq!(cursor.index(), 0);
        cursor.prev_wrapping(1);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_clamp_after_page_count_shrinks() {
        // Resizing from 1 to 4 slides per page shrinks 12 items from 12
        // pages down to 3; a cursor on page 7 must land on the new last.
        let mut cursor = PageCursor::new();
        cursor.go_to(7, 12);
        assert_eq!(cursor.index(), 7);

        cursor.clamp_to(total_pages(12, 4));
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_clamp_keeps_valid_cursor() {
        let mut cursor = PageCursor::new();
        cursor.go_to(1, 3);
        cursor.clamp_to(3);
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_invariant_holds_after_transition_sequences() {
        let counts = [1usize, 2, 3, 4, 7, 9, 12];
        for &count in &counts {
            for per_page in [1usize, 2, 4] {
                let total = total_pages(count, per_page);
                let mut cursor = PageCursor::new();
                for step in 0..total * 2 + 3 {
                    match step % 4 {
                        0 => cursor.next_wrapping(total),
                        1 => cursor.prev_wrapping(total),
                        2 => cursor.go_to(step, total),
                        _ => cursor.clamp_to(total),
                    }
                    assert!(cursor.index() < total);
                }
            }
        }
    }
}
