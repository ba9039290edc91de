// src/domain/pagination.rs

pub const PAGE_SIZE: usize = 9;

/// Current page (1-based) over the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl PaginationState {
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Page 0 is treated as page 1; pages past the end are kept and render empty.
    pub fn go_to(&mut self, page_number: usize) {
        self.current = page_number.max(1);
    }

    pub fn slice<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        page(filtered, self.current, self.page_size)
    }

    pub fn total_pages(&self, filtered_len: usize) -> usize {
        total_pages(filtered_len, self.page_size)
    }
}

/// The half-open window `[(n-1)*size, n*size)` clipped to `filtered`.
/// Out-of-range pages, page 0 included, give an empty slice.
pub fn page<T>(filtered: &[T], page_number: usize, page_size: usize) -> &[T] {
    if page_number == 0 {
        return &[];
    }
    let start = (page_number - 1)
        .saturating_mul(page_size)
        .min(filtered.len());
    let end = start.saturating_add(page_size).min(filtered.len());
    &filtered[start..end]
}

/// `max(1, ceil(len / size))`.
pub fn total_pages(filtered_len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    filtered_len.div_ceil(page_size).max(1)
}
