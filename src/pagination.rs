use serde::Serialize;
use thiserror::Error;

/// Page size used when the request does not pick one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
/// Page sizes offered by the results table.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 20, 50];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page size must be greater than zero")]
    ZeroPageSize,

    #[error("page {page} is out of range (1..={total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },
}

/// Number of pages needed for `total_items`; zero for an empty list.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Pages shown to the user: an empty result still has one (empty) page.
fn display_pages(total_items: usize, page_size: usize) -> usize {
    total_pages(total_items, page_size).max(1)
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Navigation state of the results table.
///
/// `current_page` always stays within `1..=max(1, total_pages)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        Ok(Self {
            current_page: 1,
            page_size,
            total_items: 0,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages, never less than one.
    pub fn total_pages(&self) -> usize {
        display_pages(self.total_items, self.page_size)
    }

    /// Replaces the item count, clamping the current page into range.
    pub fn with_total_items(self, total_items: usize) -> Self {
        let mut next = Self {
            total_items,
            ..self
        };
        next.current_page = next.current_page.clamp(1, next.total_pages());
        next
    }

    /// Changes the page size; the user always lands back on the first page.
    pub fn set_page_size(self, page_size: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        Ok(Self {
            current_page: 1,
            page_size,
            ..self
        })
    }

    /// Moves to `page`, refusing pages outside the valid range.
    pub fn go_to(self, page: usize) -> Result<Self, PaginationError> {
        let total_pages = self.total_pages();
        if page == 0 || page > total_pages {
            return Err(PaginationError::PageOutOfRange { page, total_pages });
        }
        Ok(Self {
            current_page: page,
            ..self
        })
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Next page, or `None` when already on the last one.
    pub fn next(self) -> Option<Self> {
        self.go_to(self.current_page + 1).ok()
    }

    /// Previous page, or `None` when already on the first one.
    pub fn prev(self) -> Option<Self> {
        if !self.has_prev() {
            return None;
        }
        self.go_to(self.current_page - 1).ok()
    }

    /// Half-open index range of the visible slice.
    pub fn bounds(&self) -> (usize, usize) {
        let start = ((self.current_page - 1) * self.page_size).min(self.total_items);
        let end = (self.current_page * self.page_size).min(self.total_items);
        (start, end)
    }

    /// One-based index of the first visible item, zero when empty.
    pub fn first_item(&self) -> usize {
        let (start, end) = self.bounds();
        if start == end { 0 } else { start + 1 }
    }

    /// One-based index of the last visible item, zero when empty.
    pub fn last_item(&self) -> usize {
        self.bounds().1
    }
}

/// A single page of results together with the data the table footer needs.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub first_item: usize,
    pub last_item: usize,
    pub has_prev: bool,
    pub has_next: bool,
    /// Target of the "previous" link, absent on the first page.
    pub prev_page: Option<usize>,
    /// Target of the "next" link, absent on the last page.
    pub next_page: Option<usize>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, state: PageState) -> Self {
        let pages = get_pages(state.total_pages(), state.current_page(), 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: state.current_page(),
            page_size: state.page_size(),
            total_pages: state.total_pages(),
            total_items: state.total_items(),
            first_item: state.first_item(),
            last_item: state.last_item(),
            has_prev: state.has_prev(),
            has_next: state.has_next(),
            prev_page: state.prev().map(|s| s.current_page()),
            next_page: state.next().map(|s| s.current_page()),
        }
    }

    /// Converts every item on the page, keeping the navigation data.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            pages: self.pages,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_items: self.total_items,
            first_item: self.first_item,
            last_item: self.last_item,
            has_prev: self.has_prev,
            has_next: self.has_next,
            prev_page: self.prev_page,
            next_page: self.next_page,
        }
    }
}

/// Cuts page `page` out of `items`.
///
/// Pages past the end are an error rather than being clamped so that the
/// navigation state and the displayed rows never disagree.
pub fn paginate<T>(
    items: Vec<T>,
    page: usize,
    page_size: usize,
) -> Result<Paginated<T>, PaginationError> {
    let state = PageState::new(page_size)?
        .with_total_items(items.len())
        .go_to(page)?;

    let (start, end) = state.bounds();
    let slice = items.into_iter().skip(start).take(end - start).collect();

    Ok(Paginated::new(slice, state))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn short_list_fits_on_first_page() {
        let page = paginate(numbers(7), 1, 10).expect("valid page");
        assert_eq!(page.items, numbers(7));
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
        assert!(!page.has_prev);
    }

    #[test]
    fn empty_list_shows_one_empty_page() {
        let page = paginate(Vec::<usize>::new(), 1, 10).expect("valid page");
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.first_item, 0);
        assert_eq!(page.last_item, 0);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn slices_have_full_size_except_last() {
        let items = numbers(25);
        for (page, expected) in [(1, 10), (2, 10), (3, 5)] {
            let slice = paginate(items.clone(), page, 10).expect("valid page");
            assert_eq!(slice.items.len(), expected);
        }

        let even = paginate(numbers(20), 2, 10).expect("valid page");
        assert_eq!(even.items, (11..=20).collect::<Vec<_>>());
    }

    #[test]
    fn twenty_five_records_scenario() {
        let first = paginate(numbers(25), 1, 10).expect("valid page");
        assert_eq!(first.items, numbers(10));
        assert_eq!(first.total_pages, 3);
        assert_eq!((first.first_item, first.last_item), (1, 10));

        assert_eq!(
            paginate(numbers(25), 4, 10).unwrap_err(),
            PaginationError::PageOutOfRange {
                page: 4,
                total_pages: 3
            }
        );

        let state = PageState::new(10)
            .and_then(|s| s.with_total_items(25).go_to(3))
            .expect("valid state");
        assert!(!state.has_next());
        assert_eq!(state.next(), None);

        let resized = state.set_page_size(20).expect("valid size");
        assert_eq!(resized.current_page(), 1);
        let (start, end) = resized.bounds();
        assert_eq!((start, end), (0, 20));
    }

    #[test]
    fn rejects_zero_page_and_zero_size() {
        assert_eq!(
            paginate(numbers(3), 1, 0).unwrap_err(),
            PaginationError::ZeroPageSize
        );
        assert!(matches!(
            paginate(numbers(3), 0, 10),
            Err(PaginationError::PageOutOfRange { page: 0, .. })
        ));
    }

    #[test]
    fn shrinking_total_clamps_current_page() {
        let state = PageState::new(10)
            .and_then(|s| s.with_total_items(50).go_to(5))
            .expect("valid state");

        assert_eq!(state.with_total_items(12).current_page(), 2);
        assert_eq!(state.with_total_items(0).current_page(), 1);
    }

    #[test]
    fn navigation_moves_between_edges() {
        let state = PageState::new(10)
            .map(|s| s.with_total_items(35))
            .expect("valid state");

        assert_eq!(state.prev(), None);
        let second = state.next().expect("has next");
        assert_eq!(second.current_page(), 2);
        assert_eq!(second.prev().map(|s| s.current_page()), Some(1));
    }

    #[test]
    fn link_targets_follow_navigation() {
        let middle = paginate(numbers(25), 2, 10).expect("valid page");
        assert_eq!((middle.prev_page, middle.next_page), (Some(1), Some(3)));

        let last = paginate(numbers(25), 3, 10).expect("valid page");
        assert_eq!((last.prev_page, last.next_page), (Some(2), None));

        let only = paginate(Vec::<usize>::new(), 1, 10).expect("valid page");
        assert_eq!((only.prev_page, only.next_page), (None, None));
    }

    #[test]
    fn page_links_collapse_into_gaps() {
        let state = PageState::new(1)
            .and_then(|s| s.with_total_items(20).go_to(10))
            .expect("valid state");
        let page = Paginated::new(vec![10], state);

        assert_eq!(
            page.pages,
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20),
            ]
        );
    }
}
