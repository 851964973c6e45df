/// Resolved pagination window for list endpoints. `number` is 1-based;
/// requests below 1 are normalized to the first page, requests past the end
/// simply yield an empty item list.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub number: i64,
    pub size: i64,
}

impl Page {
    pub fn from_query(page: Option<i64>, per_page: Option<i64>) -> Self {
        Self {
            number: page.unwrap_or(1).max(1),
            size: per_page.unwrap_or(10).max(1),
        }
    }

    pub fn limit(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.size
    }

    /// Page count for `total` rows: `ceil(total / size)`, 0 when empty.
    pub fn total_pages(&self, total: i64) -> i64 {
        (total + self.size - 1) / self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_ten() {
        let page = Page::from_query(None, None);
        assert_eq!(page.number, 1);
        assert_eq!(page.size, 10);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn offset_advances_with_page_number() {
        let page = Page::from_query(Some(3), Some(25));
        assert_eq!(page.offset(), 50);
        assert_eq!(page.limit(), 25);
    }

    #[test]
    fn page_below_one_is_normalized() {
        let page = Page::from_query(Some(0), Some(-5));
        assert_eq!(page.number, 1);
        assert_eq!(page.size, 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::from_query(None, Some(10));
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(1), 1);
        assert_eq!(page.total_pages(10), 1);
        assert_eq!(page.total_pages(11), 2);
        assert_eq!(page.total_pages(95), 10);
    }
}
