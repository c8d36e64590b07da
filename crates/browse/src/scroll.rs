//! Infinite-scroll paging over a result list.
//!
//! The view shows the first `display_count` results and grows by one page
//! each time the user reaches the bottom. [`InfiniteScroll::load_more_after`]
//! reproduces the artificial loading latency of the browser; it is a
//! single-shot timer with no cancellation.

use std::time::Duration;
use tracing::debug;

/// Results revealed per page
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Simulated latency for revealing the next page
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfiniteScroll {
    page_size: usize,
    display_count: usize,
    total: usize,
    loading: bool,
}

impl InfiniteScroll {
    /// Start at the first page of `total` results
    pub fn new(total: usize) -> Self {
        Self::with_page_size(total, DEFAULT_PAGE_SIZE)
    }

    /// A page size of zero is treated as one
    pub fn with_page_size(total: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            display_count: page_size,
            total,
            loading: false,
        }
    }

    /// How many results are currently revealed
    pub fn display_count(&self) -> usize {
        self.display_count.min(self.total)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.display_count < self.total
    }

    /// The revealed prefix of `items`
    pub fn visible<'s, T>(&self, items: &'s [T]) -> &'s [T] {
        &items[..self.display_count.min(items.len())]
    }

    /// Reveal one more page, capped at the total.
    ///
    /// Returns whether anything new became visible.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.display_count = (self.display_count + self.page_size).min(self.total);
        debug!("Revealed {} of {} results", self.display_count, self.total);
        true
    }

    /// Same as [`load_more`](Self::load_more), after waiting `delay`.
    ///
    /// Does nothing (and doesn't wait) when everything is already visible.
    pub async fn load_more_after(&mut self, delay: Duration) -> bool {
        if !self.has_more() {
            return false;
        }
        self.loading = true;
        tokio::time::sleep(delay).await;
        self.loading = false;
        self.load_more()
    }

    /// The result list changed (new search or filters): back to page one
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.display_count = self.page_size;
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_grow_until_total() {
        let items: Vec<u32> = (0..30).collect();
        let mut scroll = InfiniteScroll::new(items.len());

        assert_eq!(scroll.visible(&items).len(), 12);
        assert!(scroll.has_more());

        assert!(scroll.load_more());
        assert_eq!(scroll.visible(&items).len(), 24);

        assert!(scroll.load_more());
        assert_eq!(scroll.display_count(), 30);
        assert!(!scroll.has_more());

        assert!(!scroll.load_more());
        assert_eq!(scroll.visible(&items), &items[..]);
    }

    #[test]
    fn test_short_list_fits_one_page() {
        let items = vec!['a', 'b', 'c'];
        let scroll = InfiniteScroll::new(items.len());
        assert_eq!(scroll.visible(&items), &['a', 'b', 'c']);
        assert_eq!(scroll.display_count(), 3);
        assert!(!scroll.has_more());
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut scroll = InfiniteScroll::with_page_size(10, 4);
        scroll.load_more();
        assert_eq!(scroll.display_count(), 8);

        scroll.reset(6);
        assert_eq!(scroll.display_count(), 4);
        assert_eq!(scroll.total(), 6);
    }

    #[test]
    fn test_zero_page_size() {
        let mut scroll = InfiniteScroll::with_page_size(3, 0);
        assert_eq!(scroll.page_size(), 1);
        assert!(scroll.load_more());
        assert_eq!(scroll.display_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_more_after_delay() {
        let mut scroll = InfiniteScroll::new(20);
        let start = tokio::time::Instant::now();

        assert!(scroll.load_more_after(DEFAULT_LOAD_DELAY).await);
        assert!(start.elapsed() >= DEFAULT_LOAD_DELAY);
        assert_eq!(scroll.display_count(), 20);
        assert!(!scroll.is_loading());

        let before = tokio::time::Instant::now();
        assert!(!scroll.load_more_after(DEFAULT_LOAD_DELAY).await);
        assert_eq!(before.elapsed(), Duration::ZERO);
    }
}
