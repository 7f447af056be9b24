use serde::Deserialize;

/// Largest page size a client may request.
pub const MAX_ENTRIES: u64 = 100;

const DEFAULT_ENTRIES: u64 = 10;

/// Highest page index whose row offset still fits in a signed 64-bit SQL integer.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_ENTRIES;

/// `page` / `entries` query parameters shared by every paginated endpoint.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

pub(crate) fn default_entries() -> u64 {
    DEFAULT_ENTRIES
}

impl PaginationParams {
    pub fn new(page: u64, entries: u64) -> Self {
        Self { page, entries }
    }

    /// Page size clamped to `1..=MAX_ENTRIES`.
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_ENTRIES)
    }

    /// Zero-indexed page capped at `MAX_PAGE`.
    pub fn page_index(&self) -> u64 {
        self.page.min(MAX_PAGE)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(0, DEFAULT_ENTRIES)
    }
}

/// One page of results with the totals needed to render pagination controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, params: PaginationParams) -> Self {
        let per_page = params.per_page();
        Self {
            items,
            total,
            page: params.page_index(),
            per_page,
            total_pages: total.div_ceil(per_page),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
