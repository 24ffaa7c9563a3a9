use maud::html;
use maudit::route::prelude::*;

use crate::content::{ArticleContent, newest_first};
use crate::layout::layout;
use crate::routes::{ArticlePage, ArticleParams};

const LATEST_ARTICLES: usize = 3;

#[route("/")]
pub struct Index;

impl Route for Index {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let mut articles = ctx
            .content::<ArticleContent>("articles")
            .entries()
            .filter(|article| !article.data(ctx).is_archived())
            .collect::<Vec<_>>();

        articles.sort_by(|a, b| newest_first((a.id.as_str(), a.data(ctx)), (b.id.as_str(), b.data(ctx))));
        articles.truncate(LATEST_ARTICLES);

        layout(
            html! {
                section.mb-12 {
                    h2.text-4xl.font-bold.mb-3 { "Hello!" }
                    p.text-lg { "Welcome to my blog, where I write about the things I build and the things I break." }
                }

                section {
                    h2.text-2xl.font-bold.mb-4 { "Latest articles" }
                    ul.space-y-6 {
                        @for article in &articles {
                            li {
                                a."hover:text-latte-mauve" href=(ArticlePage.url(ArticleParams { slug: article.id.clone() })) {
                                    h3.text-xl.font-bold { (article.data(ctx).title) }
                                }
                                p.text-latte-subtext1 { (article.data(ctx).description) }
                                span.text-sm.text-latte-overlay1 { (article.data(ctx).formatted_date()) }
                            }
                        }
                    }
                    a.inline-block.mt-8.text-latte-sapphire."hover:underline" href="/articles/" { "See all articles..." }
                }
            },
            ctx,
            None,
        )
    }
}
