use log::{debug, trace};
use url::Url;

use crate::entry::{Entry, filter_entries, parse_entries};
use crate::errors::InitializationError;
use crate::host::{ListHost, PageLink};
use crate::options::ListOptions;
use crate::state::{SearchState, VisibleWindow};

/// Searchable, paginated list of articles.
///
/// Only two things change the state of the list: a new search query ([`ArticlesList::on_query_change`]) and a click
/// on a pagination link ([`ArticlesList::on_page_change`]). Both re-render the whole list through its [`ListHost`].
pub struct ArticlesList<H: ListHost> {
    host: H,
    entries: Vec<Entry>,
    state: SearchState,
    location: Url,
}

/// What a render left on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    /// Slugs of the visible articles, in list order.
    pub visible: Vec<String>,
    pub previous_link: bool,
    pub next_link: bool,
    /// Location pushed to the history.
    pub location: Url,
}

impl<H: ListHost> ArticlesList<H> {
    /// Build a list from the entries serialized on its hosting element, then render it once.
    ///
    /// The initial query and page are read from `location`. Nothing is rendered if the entries are missing or
    /// malformed.
    pub fn new(
        mut host: H,
        options: ListOptions,
        serialized_entries: Option<&str>,
        location: &Url,
    ) -> Result<Self, InitializationError> {
        let entries = parse_entries(serialized_entries)?;
        let state = SearchState::from_url(location, options.page_size);

        debug!(
            target: "articles-list",
            "Loaded {} entries (query: {:?}, page: {})",
            entries.len(),
            state.query(),
            state.current_page()
        );

        host.set_search_value(state.query());

        let mut list = Self {
            host,
            entries,
            state,
            location: location.clone(),
        };
        list.render();

        Ok(list)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Location as of the last render.
    pub fn location(&self) -> &Url {
        &self.location
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn filtered(&self) -> Vec<&Entry> {
        filter_entries(&self.entries, self.state.query())
    }

    pub fn visible_window(&self) -> VisibleWindow {
        self.state.window()
    }

    /// Apply a new search query. The list always goes back to its first page.
    pub fn on_query_change(&mut self, query: impl Into<String>) -> RenderSnapshot {
        self.state.set_query(query);
        trace!(target: "articles-list", "Query changed to {:?}", self.state.query());

        self.render()
    }

    /// Follow a pagination link.
    ///
    /// The link is followed only if there is a page in that direction, whether or not the link is currently
    /// displayed. Returns `None`, without rendering, otherwise.
    pub fn on_page_change(&mut self, link: PageLink) -> Option<RenderSnapshot> {
        let current_page = self.state.current_page();

        let next_page = match link {
            PageLink::Next if self.state.can_advance(self.filtered().len()) => current_page + 1,
            PageLink::Previous if self.state.can_go_back() => current_page - 1,
            _ => {
                trace!(target: "articles-list", "Ignored {:?} link on page {}", link, current_page);
                return None;
            }
        };

        self.state.set_current_page(next_page);
        trace!(target: "articles-list", "Moved to page {}", next_page);

        Some(self.render())
    }

    /// Bring the page in line with the current state.
    ///
    /// Every article is hidden, then the filtered articles inside the visible window are shown again. Pagination links
    /// are updated and the new state is pushed to the history.
    pub fn render(&mut self) -> RenderSnapshot {
        let filtered = filter_entries(&self.entries, self.state.query());
        let window = self.state.window();

        for entry in &self.entries {
            self.host.set_item_visible(&entry.slug, false);
        }

        let mut visible = Vec::new();
        for (index, entry) in filtered.iter().enumerate() {
            let shown = window.contains(index);
            self.host.set_item_visible(&entry.slug, shown);

            if shown {
                visible.push(entry.slug.clone());
            }
        }

        let next_link = self.state.shows_next_link(filtered.len());
        let previous_link = self.state.shows_previous_link();
        self.host.set_link_visible(PageLink::Next, next_link);
        self.host.set_link_visible(PageLink::Previous, previous_link);

        self.location = self.state.apply_to_url(&self.location);
        self.host.push_history(&self.location);

        debug!(
            target: "articles-list",
            "Rendered page {} ({} of {} matching entries visible)",
            self.state.current_page(),
            visible.len(),
            filtered.len()
        );

        RenderSnapshot {
            visible,
            previous_link,
            next_link,
            location: self.location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::entry::serialize_entries;
    use crate::host::testing::RecordingHost;

    fn scenario_entries() -> String {
        serialize_entries(&[
            Entry::new("a", "Intro"),
            Entry::new("b", "Advanced Topics"),
            Entry::new("c", "Intro Part 2"),
        ])
        .unwrap()
    }

    fn location(query: &str) -> Url {
        Url::parse(&format!("https://example.com/articles/{}", query)).unwrap()
    }

    fn with_page_size(page_size: usize) -> ListOptions {
        ListOptions {
            page_size: NonZeroUsize::new(page_size).unwrap(),
        }
    }

    fn new_list(query: &str) -> ArticlesList<RecordingHost> {
        ArticlesList::new(
            RecordingHost::default(),
            ListOptions::default(),
            Some(&scenario_entries()),
            &location(query),
        )
        .unwrap()
    }

    #[test]
    fn test_initial_render() {
        let list = new_list("");

        assert_eq!(list.filtered().len(), 3);
        assert_eq!(list.host().visible_items(), vec!["a"]);
        assert!(list.host().link_visible(PageLink::Next));
        assert!(!list.host().link_visible(PageLink::Previous));
        assert_eq!(list.host().search_value.as_deref(), Some(""));
        assert_eq!(list.host().history.len(), 1);
        assert_eq!(
            list.location().as_str(),
            "https://example.com/articles/?query=&page=1"
        );
    }

    #[test]
    fn test_query_change_filters_entries() {
        let mut list = new_list("");

        let snapshot = list.on_query_change("intro");

        let filtered: Vec<_> = list.filtered().iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(filtered, vec!["a", "c"]);
        assert_eq!(list.state().current_page(), 1);
        assert_eq!(snapshot.visible, vec!["a"]);
        assert!(snapshot.next_link);
        assert!(!snapshot.previous_link);
        assert_eq!(list.host().visible_items(), vec!["a"]);
    }

    #[test]
    fn test_next_page_after_query() {
        let mut list = new_list("");
        list.on_query_change("intro");

        let snapshot = list.on_page_change(PageLink::Next).unwrap();

        assert_eq!(list.state().current_page(), 2);
        assert_eq!(snapshot.visible, vec!["c"]);
        assert!(!snapshot.next_link);
        assert!(snapshot.previous_link);
        assert_eq!(list.host().visible_items(), vec!["c"]);
        assert_eq!(
            snapshot.location.as_str(),
            "https://example.com/articles/?query=intro&page=2"
        );
    }

    #[test]
    fn test_initial_state_from_url() {
        let list = new_list("?query=advanced&page=1");

        assert_eq!(list.state().query(), "advanced");
        assert_eq!(list.host().search_value.as_deref(), Some("advanced"));
        let filtered: Vec<_> = list.filtered().iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(filtered, vec!["b"]);
        assert_eq!(list.host().visible_items(), vec!["b"]);
    }

    #[test]
    fn test_missing_entries_fail_without_render() {
        let mut host = RecordingHost::default();

        assert!(matches!(
            ArticlesList::new(&mut host, ListOptions::default(), None, &location("?query=intro")),
            Err(InitializationError::MissingEntries)
        ));
        assert!(host.is_untouched());
    }

    #[test]
    fn test_malformed_entries_fail_without_render() {
        let mut host = RecordingHost::default();

        for entries in ["oops", "[{\"slug\": 12}]"] {
            assert!(matches!(
                ArticlesList::new(&mut host, ListOptions::default(), Some(entries), &location("")),
                Err(InitializationError::MalformedEntries { .. })
            ));
        }
        assert!(host.is_untouched());
    }

    #[test]
    fn test_host_outlives_list() {
        let mut host = RecordingHost::default();

        let list = ArticlesList::new(
            &mut host,
            ListOptions::default(),
            Some(&scenario_entries()),
            &location(""),
        )
        .unwrap();
        drop(list);

        assert_eq!(host.visible_items(), vec!["a"]);
        assert_eq!(host.history.len(), 1);
    }

    #[test]
    fn test_query_change_always_resets_page() {
        let mut list = new_list("?page=3");
        assert_eq!(list.state().current_page(), 3);

        list.on_query_change("");
        assert_eq!(list.state().current_page(), 1);

        list.on_page_change(PageLink::Next);
        list.on_page_change(PageLink::Next);
        assert_eq!(list.state().current_page(), 3);

        list.on_query_change("i");
        assert_eq!(list.state().current_page(), 1);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut list = new_list("?query=intro&page=2");

        let first = list.render();
        let items = list.host().items.clone();
        let second = list.render();

        assert_eq!(first, second);
        assert_eq!(list.host().items, items);
        assert_eq!(list.host().history.len(), 3);
    }

    #[test]
    fn test_single_entry_pages() {
        for page in 1..=5 {
            let list = new_list(&format!("?page={}", page));
            let visible = list.host().visible_items();

            match page {
                1 => assert_eq!(visible, vec!["a"]),
                2 => assert_eq!(visible, vec!["b"]),
                3 => assert_eq!(visible, vec!["c"]),
                _ => assert!(visible.is_empty(), "page {page} should be empty"),
            }
        }
    }

    #[test]
    fn test_previous_page() {
        let mut list = new_list("?page=3");

        assert!(list.on_page_change(PageLink::Previous).is_some());
        assert_eq!(list.host().visible_items(), vec!["b"]);
        assert!(list.on_page_change(PageLink::Previous).is_some());
        assert_eq!(list.state().current_page(), 1);
        assert!(!list.host().link_visible(PageLink::Previous));
    }

    #[test]
    fn test_unavailable_links_do_nothing() {
        let mut list = new_list("");
        let pushed = list.host().history.len();

        assert!(list.on_page_change(PageLink::Previous).is_none());
        assert_eq!(list.state().current_page(), 1);

        list.on_query_change("advanced");
        assert!(list.on_page_change(PageLink::Next).is_none());
        assert_eq!(list.state().current_page(), 1);
        assert_eq!(list.host().history.len(), pushed + 1);
    }

    #[test]
    fn test_hidden_next_link_still_reaches_partial_page() {
        let entries = serialize_entries(
            &(0..5)
                .map(|i| Entry::new(format!("post-{i}"), format!("Post {i}")))
                .collect::<Vec<_>>(),
        )
        .unwrap();
        let mut list = ArticlesList::new(
            RecordingHost::default(),
            with_page_size(2),
            Some(&entries),
            &location("?page=2"),
        )
        .unwrap();

        assert_eq!(list.host().visible_items(), vec!["post-2", "post-3"]);
        // Page 3 holds "post-4", but the link is hidden by the display boundary.
        assert!(!list.host().link_visible(PageLink::Next));

        let snapshot = list.on_page_change(PageLink::Next).unwrap();
        assert_eq!(snapshot.visible, vec!["post-4"]);
        assert!(snapshot.previous_link);
    }

    #[test]
    fn test_every_entry_hidden_before_showing_window() {
        let mut list = new_list("?query=intro");
        list.on_query_change("advanced");

        assert_eq!(list.host().items.get("a"), Some(&false));
        assert_eq!(list.host().items.get("c"), Some(&false));
        assert_eq!(list.host().items.get("b"), Some(&true));
    }
}
