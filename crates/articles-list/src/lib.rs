//! Client-side list of blog articles that can be searched and paginated.
//!
//! The hosting page renders every article as a list item inside a `<blog-articles-list>` element and attaches the
//! serialized entries to it (see [`entry`]). [`ArticlesList`] then hides and shows those items according to a text
//! query and a page number, both of which are kept in sync with the URL.
//!
//! The state machine itself is independent of the browser: everything that touches the page goes through the
//! [`ListHost`] trait. When compiled to WebAssembly, the crate also provides the DOM implementation of that trait and
//! registers the custom tag on startup.
//!
//! ## Example
//! ```rs
//! use blog_articles_list::{ArticlesList, ListOptions};
//!
//! let location = url::Url::parse("https://example.com/articles/?query=intro&page=1")?;
//! let mut list = ArticlesList::new(host, ListOptions::default(), Some(serialized), &location)?;
//!
//! list.on_query_change("advanced");
//! list.on_page_change(PageLink::Next);
//! ```

pub mod entry;
pub mod errors;
pub mod host;
pub mod registry;

mod list;
mod options;
mod state;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod logging;

pub use entry::{Entry, filter_entries};
pub use errors::InitializationError;
pub use host::{ListHost, PageLink};
pub use list::{ArticlesList, RenderSnapshot};
pub use options::ListOptions;
pub use state::{SearchState, VisibleWindow};

/// Name of the custom tag hosting the list.
pub const TAG_NAME: &str = "blog-articles-list";

/// Query-string parameter holding the search query.
pub const QUERY_PARAM: &str = "query";

/// Query-string parameter holding the current page.
pub const PAGE_PARAM: &str = "page";
