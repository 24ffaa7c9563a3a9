//! Seam between the list and the page hosting it.
use url::Url;

/// Pagination links of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageLink {
    Previous,
    Next,
}

/// Everything an [`ArticlesList`](crate::ArticlesList) needs from the page hosting it.
///
/// The search input and both pagination links are optional on the page. Implementations should silently ignore
/// calls targeting an element that doesn't exist, the matching feature is then simply inert.
pub trait ListHost {
    /// Show or hide the list item of the article identified by `slug`. Items are never removed from the page.
    fn set_item_visible(&mut self, slug: &str, visible: bool);

    fn set_link_visible(&mut self, link: PageLink, visible: bool);

    /// Reflect the initial query in the search input.
    fn set_search_value(&mut self, _value: &str) {}

    /// Update the address bar to `location` and push a new history entry, without navigating.
    fn push_history(&mut self, location: &Url);
}
