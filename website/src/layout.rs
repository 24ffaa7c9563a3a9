use maud::{DOCTYPE, Markup, html};
mod header;

pub use header::header;
use maudit::maud::generator;
use maudit::route::PageContext;
use maudit::route::prelude::StyleOptions;

use crate::{SITE_DESCRIPTION, SITE_NAME};

pub struct SeoMeta {
    pub title: String,
    pub description: Option<String>,
    pub canonical_url: Option<String>,
}

impl Default for SeoMeta {
    fn default() -> Self {
        Self {
            title: SITE_NAME.to_string(),
            description: Some(SITE_DESCRIPTION.to_string()),
            canonical_url: None,
        }
    }
}

impl SeoMeta {
    pub fn render(&self) -> Markup {
        let formatted_title = if self.title == SITE_NAME {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, SITE_NAME)
        };

        let description = self
            .description
            .as_deref()
            .unwrap_or(SITE_DESCRIPTION);

        html! {
            title { (formatted_title) }
            meta name="description" content=(description);

            meta property="og:title" content=(formatted_title);
            meta property="og:description" content=(description);
            meta property="og:type" content="website";
            @if let Some(canonical_url) = &self.canonical_url {
                meta property="og:url" content=(canonical_url);
                link rel="canonical" href=(canonical_url);
            }
        }
    }
}

pub fn layout(
    main: Markup,
    ctx: &mut PageContext,
    seo: Option<SeoMeta>,
) -> Result<Markup, Box<dyn std::error::Error>> {
    ctx.assets
        .include_style_with_options("assets/style.css", StyleOptions { tailwind: true })?;

    let seo_data = seo.unwrap_or_default();

    Ok(html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (generator())
                (seo_data.render())
            }
            body.bg-latte-base.text-latte-text {
                (header(true))
                main.container.mx-auto."px-6"."py-10"."max-w-[80ch]" {
                    (main)
                }
                footer.bg-latte-mantle.text-latte-subtext0 {
                    div.container.mx-auto.px-8.py-8.text-center {
                        p.text-sm { "Copyright © " (SITE_NAME) }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use maudit::route::RenderResult;

    use super::*;
    use crate::content::SiteError;

    type LayoutFn = fn(Markup, &mut PageContext, Option<SeoMeta>) -> Result<Markup, Box<dyn std::error::Error>>;

    #[test]
    fn test_site_errors_become_render_errors() {
        let _: LayoutFn = layout;

        let result: Result<Markup, Box<dyn std::error::Error>> = Err(SiteError::UnknownRelatedPost {
            article: "intro".to_string(),
            related: "missing".to_string(),
        }
        .into());

        assert!(matches!(
            RenderResult::from(result),
            RenderResult::Err(err) if err.to_string().contains("`missing`")
        ));
    }

    #[test]
    fn test_markup_renders() {
        let result: Result<Markup, Box<dyn std::error::Error>> = Ok(html! { p { "Hello" } });

        assert!(matches!(
            RenderResult::from(result),
            RenderResult::Text(text) if text == "<p>Hello</p>"
        ));
    }
}
