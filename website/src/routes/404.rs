use maud::html;
use maudit::route::prelude::*;

use crate::layout::{SeoMeta, layout};

#[route("404.html", sitemap(exclude = true))]
pub struct NotFound;

impl Route for NotFound {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        layout(
            html! {
                div.text-center.my-24.flex.items-center.flex-col."gap-y-4" {
                    h1.text-6xl.font-bold { "404 - Not Found" }
                    p.text-xl { "There is nothing to read here, yet." }
                    a.text-latte-sapphire."hover:underline" href="/articles/" { "Browse the articles" }
                }
            },
            ctx,
            Some(SeoMeta {
                title: "404 - Page Not Found".to_string(),
                ..Default::default()
            }),
        )
    }
}
