// src/present/pager.rs
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Fixed-size, 1-based pagination over a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
}

/// The rows a page covers, for "Showing X to Y of N" lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub page: usize,
    pub total_pages: usize,
    /// 1-based position of the first row on the page (0 when empty).
    pub first: usize,
    /// 1-based position of the last row on the page (0 when empty).
    pub last: usize,
    pub total: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// A zero page size is treated as 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    #[must_use]
    pub fn contains(&self, page: usize, len: usize) -> bool {
        (1..=self.total_pages(len)).contains(&page)
    }

    /// Nearest valid page; 1 for an empty collection.
    #[must_use]
    pub fn clamp_page(&self, page: usize, len: usize) -> usize {
        page.clamp(1, self.total_pages(len).max(1))
    }

    /// Items on `page` after clamping it into range.
    #[must_use]
    pub fn page<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let page = self.clamp_page(page, items.len());
        let start = ((page - 1) * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        items.get(start..end).unwrap_or_default()
    }

    #[must_use]
    pub fn window(&self, page: usize, len: usize) -> PageWindow {
        let page = self.clamp_page(page, len);
        let start = ((page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        PageWindow {
            page,
            total_pages: self.total_pages(len),
            first: if end > start { start + 1 } else { 0 },
            last: end,
            total: len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn twenty_five_items_three_pages() {
        let pager = Pager::new(10);
        let data = items(25);
        assert_eq!(pager.total_pages(data.len()), 3);
        assert_eq!(pager.page(&data, 1), &items(10)[..]);
        assert_eq!(pager.page(&data, 3), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let pager = Pager::new(10);
        let data = items(25);
        assert_eq!(pager.page(&data, 0), pager.page(&data, 1));
        assert_eq!(pager.page(&data, 99), pager.page(&data, 3));
        assert!(!pager.contains(0, 25));
        assert!(!pager.contains(4, 25));
        assert!(pager.contains(3, 25));
    }

    #[test]
    fn empty_collection() {
        let pager = Pager::new(10);
        let data: Vec<usize> = Vec::new();
        assert_eq!(pager.total_pages(0), 0);
        assert!(pager.page(&data, 1).is_empty());
        let w = pager.window(1, 0);
        assert_eq!((w.page, w.first, w.last, w.total_pages), (1, 0, 0, 0));
    }

    #[test]
    fn exact_multiple() {
        let pager = Pager::new(10);
        assert_eq!(pager.total_pages(20), 2);
        assert_eq!(pager.page(&items(20), 2).len(), 10);
    }

    #[test]
    fn window_reports_showing_range() {
        let w = Pager::new(10).window(3, 25);
        assert_eq!(
            w,
            PageWindow {
                page: 3,
                total_pages: 3,
                first: 21,
                last: 25,
                total: 25
            }
        );
    }

    #[test]
    fn zero_page_size_is_one() {
        assert_eq!(Pager::new(0).page_size(), 1);
    }
}
