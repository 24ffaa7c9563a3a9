use maud::{PreEscaped, html};
use maudit::route::prelude::*;

use crate::content::{ArticleContent, articles_list_data, newest_first, resolve_related_posts};
use crate::layout::{SeoMeta, layout};

/// Articles shown per page of the articles list.
const ARTICLES_PER_PAGE: usize = 1;

/// Loads the articles list script, generated by `cargo xtask build-widget`.
const ARTICLES_LIST_SCRIPT: &str =
    r#"import init from "/pkg/blog_articles_list.js"; init();"#;

#[route("/articles/")]
pub struct ArticlesIndex;

impl Route for ArticlesIndex {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let mut articles = ctx
            .content::<ArticleContent>("articles")
            .entries()
            .filter(|article| !article.data(ctx).is_archived())
            .collect::<Vec<_>>();

        articles.sort_by(|a, b| newest_first((a.id.as_str(), a.data(ctx)), (b.id.as_str(), b.data(ctx))));

        let list_data = articles_list_data(
            articles
                .iter()
                .map(|article| (article.id.as_str(), article.data(ctx)))
                .collect::<Vec<_>>(),
        )?;
        let canonical_url = ctx.canonical_url();

        layout(
            html! {
                section.mb-8 {
                    h1.text-5xl.font-bold.mb-6 { "Articles" }
                    input.w-full.rounded.border.border-latte-surface1.bg-latte-mantle."px-4"."py-2"
                        type="search" name="query" placeholder="Search articles..." aria-label="Search articles";
                }

                blog-articles-list data-entries=(list_data) data-page-size=(ARTICLES_PER_PAGE) {
                    ul.space-y-8 {
                        @for article in &articles {
                            li.(article.id) data-slug=(article.id) {
                                a."hover:text-latte-mauve" href=(ArticlePage.url(ArticleParams { slug: article.id.clone() })) {
                                    h2.text-3xl.font-bold { (article.data(ctx).title) }
                                }
                                p.text-lg.text-latte-subtext1.italic { (article.data(ctx).description) }
                                span.text-sm.text-latte-overlay1 { (article.data(ctx).formatted_date()) }
                            }
                        }
                    }

                    nav.flex.justify-between.mt-10 {
                        a.previous-page-link.text-latte-sapphire."hover:underline" href="#" { "← Previous page" }
                        a.next-page-link.text-latte-sapphire."hover:underline" href="#" { "Next page →" }
                    }
                }

                script type="module" { (PreEscaped(ARTICLES_LIST_SCRIPT)) }
            },
            ctx,
            Some(SeoMeta {
                title: "Articles".to_string(),
                description: Some("Every article of the blog, searchable.".to_string()),
                canonical_url,
            }),
        )
    }
}

#[route("/articles/[slug]/")]
pub struct ArticlePage;

#[derive(Params, Clone)]
pub struct ArticleParams {
    pub slug: String,
}

impl Route<ArticleParams> for ArticlePage {
    fn pages(&self, ctx: &mut DynamicRouteContext) -> Pages<ArticleParams> {
        ctx.content::<ArticleContent>("articles").into_pages(|article| {
            Page::from_params(ArticleParams {
                slug: article.id.clone(),
            })
        })
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let slug = ctx.params::<ArticleParams>().slug;
        let articles = ctx.content::<ArticleContent>("articles");
        let article = articles.get_entry(&slug);

        // A broken reference fails the build instead of silently dropping the link.
        let related = resolve_related_posts(&slug, article.data(ctx).related_posts(), |related| {
            articles.get_entry_safe(related)
        })?;

        let ArticleContent {
            title,
            description,
            ..
        } = article.data(ctx);
        let canonical_url = ctx.canonical_url();

        layout(
            html! {
                article {
                    section.mb-6.border-b.border-latte-surface0.pb-4 {
                        p.text-sm.font-bold.text-latte-overlay1 { (article.data(ctx).formatted_date()) }
                        h1."text-5xl"."sm:text-6xl".font-bold.mb-3 { (title) }
                        p.text-xl."sm:text-2xl".italic.text-latte-subtext1 { (description) }
                        @if article.data(ctx).is_archived() {
                            p.mt-4.text-latte-peach { "This article is archived and may be out of date." }
                        }
                    }

                    section.prose.prose-lg.prose-latte.max-w-none {
                        (PreEscaped(article.render(ctx)))
                    }
                }

                @if !related.is_empty() {
                    aside.mt-16 {
                        h2.text-2xl.font-bold.mb-4 { "Related articles" }
                        ul.space-y-2 {
                            @for related in &related {
                                li {
                                    a.text-latte-sapphire."hover:underline" href=(ArticlePage.url(ArticleParams { slug: related.id.clone() })) {
                                        (related.data(ctx).title)
                                    }
                                }
                            }
                        }
                    }
                }
            },
            ctx,
            Some(SeoMeta {
                title: title.to_string(),
                description: Some(description.clone()),
                canonical_url,
            }),
        )
    }
}
