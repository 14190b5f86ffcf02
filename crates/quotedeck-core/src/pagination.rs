//! Stateless pagination over an ordered collection.
//!
//! Pages are 1-based. Every call recomputes the window from scratch; there is
//! no cursor. Asking for a page past the end yields an empty window instead
//! of an error, because callers may hold a page index from before a filter
//! narrowed the collection.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::ValidationError;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => panic!("default page size must be non-zero"),
};

/// Bounded slice of a collection plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow<T> {
    pub items: Vec<T>,
    pub page_index: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> PageWindow<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based position of the first item in the source collection, if any.
    pub fn first_item_number(&self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        Some((self.page_index - 1) * self.page_size + 1)
    }

    /// Index to move to for "next", or `None` when already on the last page.
    pub fn next_page_index(&self) -> Option<usize> {
        self.has_next.then_some(self.page_index + 1)
    }

    /// Index to move to for "previous", or `None` on the first page.
    pub fn previous_page_index(&self) -> Option<usize> {
        self.has_previous.then_some(self.page_index - 1)
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PageWindow<U> {
        PageWindow {
            items: self.items.into_iter().map(f).collect(),
            page_index: self.page_index,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }
}

/// Number of pages needed for `total_items`; zero items means zero pages.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Validated page size and 1-based page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_size: NonZeroUsize,
    page_index: NonZeroUsize,
}

impl PageRequest {
    pub fn new(page_size: usize, page_index: usize) -> Result<Self, ValidationError> {
        let page_size = NonZeroUsize::new(page_size).ok_or(ValidationError::ZeroPageSize)?;
        let page_index = NonZeroUsize::new(page_index).ok_or(ValidationError::ZeroPageIndex)?;
        Ok(Self {
            page_size,
            page_index,
        })
    }

    /// First page of `page_size` items.
    pub const fn first(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            page_index: NonZeroUsize::MIN,
        }
    }

    /// Same page size, different page. Index 0 is clamped to 1.
    pub fn with_page(self, page_index: usize) -> Self {
        Self {
            page_index: NonZeroUsize::new(page_index).unwrap_or(NonZeroUsize::MIN),
            ..self
        }
    }

    pub const fn page_size(self) -> usize {
        self.page_size.get()
    }

    pub const fn page_index(self) -> usize {
        self.page_index.get()
    }

    /// Slices this page out of `items`.
    ///
    /// A page that starts at or past the end is returned empty with both
    /// navigation flags cleared.
    pub fn apply<T: Clone>(self, items: &[T]) -> PageWindow<T> {
        let page_size = self.page_size();
        let page_index = self.page_index();
        let total_items = items.len();
        let total_pages = total_pages(total_items, page_size);
        let start = (page_index - 1).saturating_mul(page_size);

        if start >= total_items {
            return PageWindow {
                items: Vec::new(),
                page_index,
                page_size,
                total_items,
                total_pages,
                has_previous: false,
                has_next: false,
            };
        }

        let end = start.saturating_add(page_size).min(total_items);
        PageWindow {
            items: items[start..end].to_vec(),
            page_index,
            page_size,
            total_items,
            total_pages,
            has_previous: page_index > 1,
            has_next: end < total_items,
        }
    }
}

/// Slices page `page_index` (1-based) of `page_size` items out of `items`.
pub fn paginate<T: Clone>(
    items: &[T],
    page_size: usize,
    page_index: usize,
) -> Result<PageWindow<T>, ValidationError> {
    Ok(PageRequest::new(page_size, page_index)?.apply(items))
}

/// Caller-side "next" transition: advances only when the window has a next page.
pub fn next_page<T>(current: usize, window: &PageWindow<T>) -> usize {
    if window.has_next {
        current + 1
    } else {
        current.max(1)
    }
}

/// Caller-side "previous" transition: never goes below page 1.
pub fn previous_page(current: usize) -> usize {
    current.saturating_sub(1).max(1)
}
