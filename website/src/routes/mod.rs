mod articles;
mod index;
#[path = "404.rs"]
mod not_found;

pub use articles::{ArticlePage, ArticleParams, ArticlesIndex};
pub use index::Index;
pub use not_found::NotFound;
