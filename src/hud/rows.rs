//! Line fitter: how many data rows fit per page, and how many pages result.

/// Result of fitting content rows into a viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowPaging {
    /// Data rows shown per page, always at least 1.
    pub rows_per_page: usize,
    /// Total row pages, always at least 1.
    pub total_pages: usize,
}

/// Compute row paging for a viewport.
///
/// Inputs:
/// - `content_rows`: data rows below the headers
/// - `header_rows`: rows already consumed by headers on every page
/// - `viewport_rows`: total text rows the viewport can hold
///
/// Output: rows per page (clamped to at least 1 so a tiny viewport never
/// divides by zero) and the page count, computed with ceiling division.
/// One row is reserved for the navigation label line.
pub fn row_paging(content_rows: usize, header_rows: usize, viewport_rows: usize) -> RowPaging {
    let rows_per_page = viewport_rows
        .saturating_sub(header_rows)
        .saturating_sub(1)
        .max(1);
    let total_pages = if content_rows <= rows_per_page {
        1
    } else {
        content_rows.div_ceil(rows_per_page)
    };
    RowPaging {
        rows_per_page,
        total_pages,
    }
}

impl RowPaging {
    /// Half-open content-row range `[start, end)` shown by 1-based `page`.
    pub fn page_bounds(&self, page: usize, content_rows: usize) -> (usize, usize) {
        let page = page.clamp(1, self.total_pages);
        let start = (page - 1) * self.rows_per_page;
        let end = (start + self.rows_per_page).min(content_rows);
        (start.min(end), end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Row paging of a long table into a 10-line viewport
    ///
    /// - Input: 23 content rows, 2 header rows, 10 viewport rows
    /// - Output: 7 rows per page, 4 pages; page 3 covers rows 15-21 and
    ///   page 4 covers rows 22-23 (1-indexed)
    #[test]
    fn rows_scenario_23_rows_in_10_line_viewport() {
        let p = row_paging(23, 2, 10);
        assert_eq!(p.rows_per_page, 7);
        assert_eq!(p.total_pages, 4);
        assert_eq!(p.page_bounds(3, 23), (14, 21));
        assert_eq!(p.page_bounds(4, 23), (21, 23));
    }

    /// What: Page count is non-decreasing in content size
    ///
    /// - Input: Content sizes 0..=200 against a fixed viewport
    /// - Output: `total_pages` never decreases
    #[test]
    fn rows_page_count_monotonic() {
        let mut last = 0;
        for content in 0..=200 {
            let p = row_paging(content, 2, 12);
            assert!(p.total_pages >= last, "regressed at {content}");
            last = p.total_pages;
        }
    }

    /// What: Degenerate viewports clamp to one row per page, never zero
    ///
    /// - Input: Viewports smaller than the header block
    /// - Output: `rows_per_page == 1`, page count equals content rows
    #[test]
    fn rows_tiny_viewport_clamps() {
        let p = row_paging(5, 4, 3);
        assert_eq!(p.rows_per_page, 1);
        assert_eq!(p.total_pages, 5);
        let q = row_paging(0, 0, 0);
        assert_eq!(q.rows_per_page, 1);
        assert_eq!(q.total_pages, 1);
    }

    /// What: Content that exactly fills a page needs exactly one page
    ///
    /// - Input: Content equal to, one less than, and one more than a page
    /// - Output: 1, 1, and 2 pages respectively
    #[test]
    fn rows_exact_fit_boundaries() {
        let p = row_paging(7, 2, 10);
        assert_eq!(p.total_pages, 1);
        assert_eq!(row_paging(6, 2, 10).total_pages, 1);
        assert_eq!(row_paging(8, 2, 10).total_pages, 2);
    }

    /// What: Out-of-range page indices clamp in `page_bounds`
    ///
    /// - Input: Page 0 and page 99 for small content
    /// - Output: First and last page ranges
    #[test]
    fn rows_page_bounds_clamp() {
        let p = row_paging(10, 0, 6);
        assert_eq!(p.page_bounds(0, 10), (0, 5));
        assert_eq!(p.page_bounds(99, 10), (5, 10));
    }
}
