use std::cmp::Ordering;

use blog_articles_list::Entry;
use blog_articles_list::entry::serialize_entries;
use chrono::{DateTime, Utc};
use maudit::content::{ContentSources, glob_markdown, markdown_entry};
use maudit::content_sources;
use thiserror::Error;

#[markdown_entry]
pub struct ArticleContent {
    pub title: String,
    pub description: String,
    /// Unix timestamp, in seconds.
    pub created_at: i64,
    /// Slugs of other articles.
    pub related_posts: Option<Vec<String>>,
    pub archived: Option<bool>,
}

impl ArticleContent {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at, 0)
    }

    pub fn formatted_date(&self) -> String {
        self.created_at()
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_default()
    }

    pub fn is_archived(&self) -> bool {
        self.archived.unwrap_or(false)
    }

    pub fn related_posts(&self) -> &[String] {
        self.related_posts.as_deref().unwrap_or_default()
    }
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Article `{article}` lists `{related}` as a related post, but no such article exists")]
    UnknownRelatedPost { article: String, related: String },

    #[error("Could not serialize the articles list")]
    ArticlesList(#[from] serde_json::Error),
}

pub fn content_sources() -> ContentSources {
    content_sources!["articles" => glob_markdown::<ArticleContent>("content/articles/*.md")]
}

/// Resolve the related posts of `article` with `lookup`, failing on the first slug that names no article.
pub fn resolve_related_posts<T>(
    article: &str,
    related_posts: &[String],
    lookup: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>, SiteError> {
    related_posts
        .iter()
        .map(|related| {
            lookup(related).ok_or_else(|| SiteError::UnknownRelatedPost {
                article: article.to_string(),
                related: related.clone(),
            })
        })
        .collect()
}

/// Newest articles first. Articles published at the same time are ordered by slug, to keep builds stable.
pub fn newest_first(a: (&str, &ArticleContent), b: (&str, &ArticleContent)) -> Ordering {
    b.1.created_at
        .cmp(&a.1.created_at)
        .then_with(|| a.0.cmp(b.0))
}

/// Value of the `data-entries` attribute of `<blog-articles-list>`.
pub fn articles_list_data<'a>(
    articles: impl IntoIterator<Item = (&'a str, &'a ArticleContent)>,
) -> Result<String, SiteError> {
    let entries = articles
        .into_iter()
        .map(|(slug, article)| Entry::new(slug, article.title.as_str()))
        .collect::<Vec<_>>();

    Ok(serialize_entries(&entries)?)
}
