use std::num::NonZeroUsize;

use url::Url;

use crate::{PAGE_PARAM, QUERY_PARAM};

/// Query and page currently applied to the list.
///
/// The current page is always at least `1`, and the visible window is always derived from it, so the two can never
/// drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    current_page: usize,
    page_size: NonZeroUsize,
}

/// Half-open range `[low, high)` of indices into the filtered entries that are shown on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWindow {
    pub low: usize,
    pub high: usize,
}

impl VisibleWindow {
    pub fn contains(&self, index: usize) -> bool {
        index >= self.low && index < self.high
    }
}

impl SearchState {
    pub fn new(query: impl Into<String>, page: Option<&str>, page_size: NonZeroUsize) -> Self {
        Self {
            query: query.into(),
            current_page: coerce_page(page),
            page_size,
        }
    }

    /// State described by the `query` and `page` parameters of `location`, if any.
    pub fn from_url(location: &Url, page_size: NonZeroUsize) -> Self {
        let mut query = None;
        let mut page = None;

        for (key, value) in location.query_pairs() {
            // Same as `URLSearchParams.get`, the first occurrence wins.
            if key == QUERY_PARAM && query.is_none() {
                query = Some(value.into_owned());
            } else if key == PAGE_PARAM && page.is_none() {
                page = Some(value.into_owned());
            }
        }

        Self::new(query.unwrap_or_default(), page.as_deref(), page_size)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Replace the query. A new query always starts back from the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.current_page = 1;
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn window(&self) -> VisibleWindow {
        let low = (self.current_page - 1).saturating_mul(self.page_size());

        VisibleWindow {
            low,
            high: low.saturating_add(self.page_size()),
        }
    }

    /// Whether the next page holds at least one of `filtered_len` entries.
    pub fn can_advance(&self, filtered_len: usize) -> bool {
        self.current_page.saturating_mul(self.page_size()) < filtered_len
    }

    pub fn can_go_back(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the "next page" link is displayed.
    ///
    /// NOTE: This is `(page + 1) * page_size <= filtered_len`, which is stricter than [`Self::can_advance`] as soon as
    /// pages hold more than one entry: a partially filled last page is reachable but its link stays hidden. Pages
    /// already linked from elsewhere rely on this boundary, so it is kept as is.
    pub fn shows_next_link(&self, filtered_len: usize) -> bool {
        self.current_page
            .saturating_add(1)
            .saturating_mul(self.page_size())
            <= filtered_len
    }

    pub fn shows_previous_link(&self) -> bool {
        self.can_go_back()
    }

    /// `location` with its `query` and `page` parameters set to this state. Other parameters are kept.
    pub fn apply_to_url(&self, location: &Url) -> Url {
        let retained: Vec<(String, String)> = location
            .query_pairs()
            .filter(|(key, _)| key != QUERY_PARAM && key != PAGE_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut url = location.clone();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(retained)
            .append_pair(QUERY_PARAM, &self.query)
            .append_pair(PAGE_PARAM, &self.current_page.to_string());

        url
    }
}

/// Page number from user input. Anything that isn't a positive integer means the first page.
fn coerce_page(raw: Option<&str>) -> usize {
    raw.and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}
