use content::content_sources;
use maudit::{AssetsOptions, BuildOptions, BuildOutput, SitemapOptions, coronate, routes};

mod content;
mod layout;
mod routes;

use routes::*;

pub const SITE_NAME: &str = "Notes from the workbench";
pub const SITE_DESCRIPTION: &str = "A personal blog about software, tools and the occasional side project.";
pub const SITE_URL: &str = "https://blog.example.com";

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    coronate(
        routes![Index, ArticlesIndex, ArticlePage, NotFound],
        content_sources(),
        build_options(),
    )
}

fn build_options() -> BuildOptions {
    BuildOptions {
        base_url: Some(SITE_URL.to_string()),
        assets: AssetsOptions {
            tailwind_binary_path: "./node_modules/.bin/tailwindcss".into(),
            ..Default::default()
        },
        sitemap: SitemapOptions {
            enabled: true,
            ..Default::default()
        },
        ..Default::default()
    }
}
