//! Client-side pagination over an in-memory row set.

/// Page sizes offered by the table controls.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 20, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages needed for `len` rows; never less than 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Rows `[(page - 1) * page_size, page * page_size)`, clipped to the slice.
/// Pages are 1-based; page 0 is treated as page 1.
pub fn page_slice<T>(rows: &[T], page_size: usize, page: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// Current page and page size of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Back to the first page (the row set changed).
    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.page < self.total_pages(len)
    }

    /// No-op on the first page.
    pub fn previous(&mut self) {
        if self.has_previous() {
            self.page -= 1;
        }
    }

    /// No-op on the last page.
    pub fn next(&mut self, len: usize) {
        if self.has_next(len) {
            self.page += 1;
        }
    }

    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        page_slice(rows, self.page_size, self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(31, 10), 4);
        assert_eq!(total_pages(100, 50), 2);
        assert_eq!(total_pages(7, 0), 7);
    }

    #[test]
    fn test_total_pages_matches_ceiling() {
        for len in 1..200usize {
            for size in [1usize, 3, 10, 20, 50] {
                let expected = (len as f64 / size as f64).ceil() as usize;
                assert_eq!(total_pages(len, size), expected, "len={len} size={size}");
            }
        }
    }

    #[test]
    fn test_page_slice_bounds() {
        let rows: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&rows, 10, 1), &rows[0..10]);
        assert_eq!(page_slice(&rows, 10, 3), &rows[20..25]);
        assert!(page_slice(&rows, 10, 4).is_empty());
        assert_eq!(page_slice(&rows, 10, 0), &rows[0..10]);
        assert!(page_slice::<u32>(&[], 10, 1).is_empty());
    }

    #[test]
    fn test_navigation_clamps() {
        let mut pager = Pager::default();
        pager.previous();
        assert_eq!(pager.page(), 1);

        pager.next(25);
        pager.next(25);
        assert_eq!(pager.page(), 3);
        pager.next(25);
        assert_eq!(pager.page(), 3);
        assert!(!pager.has_next(25));

        // Empty table: a single page, no navigation
        let mut empty = Pager::default();
        empty.next(0);
        assert_eq!(empty.page(), 1);
        assert_eq!(empty.total_pages(0), 1);
    }

    #[test]
    fn test_page_size_change_and_reset() {
        let rows: Vec<u32> = (1..=45).collect();
        let mut pager = Pager::new(10);
        pager.next(rows.len());
        pager.next(rows.len());
        assert_eq!(pager.slice(&rows), &rows[20..30]);

        pager.set_page_size(20);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.total_pages(rows.len()), 3);

        pager.next(rows.len());
        pager.reset();
        assert_eq!(pager.page(), 1);

        pager.set_page_size(0);
        assert_eq!(pager.page_size(), 1);
    }
}
