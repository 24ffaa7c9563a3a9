use maud::Markup;
use maud::html;

pub fn header(bottom_border: bool) -> Markup {
    let border = if bottom_border { "border-b" } else { "" };

    html! {
        header.px-8.py-4.text-latte-text.bg-latte-base."border-latte-surface0".(border) {
            div.container.flex.items-center.gap-x-8.mx-auto {
                a.flex.gap-x-2.items-center."hover:text-latte-mauve" href="/" {
                    h1.text-2xl.font-bold.tracking-wide { (crate::SITE_NAME) }
                }
                nav.text-lg.flex.gap-x-12.relative."top-[2px]" {
                    a."hover:text-latte-mauve" href="/articles/" { "Articles" }
                }
            }
        }
    }
}
