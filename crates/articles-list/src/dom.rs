//! Browser side of the list: mounts an [`ArticlesList`] on every `<blog-articles-list>` element of the page.
use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info, warn};
use url::Url;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, History, HtmlElement, HtmlInputElement, MouseEvent};

use crate::host::{ListHost, PageLink};
use crate::list::ArticlesList;
use crate::logging::init_logging;
use crate::options::ListOptions;
use crate::registry::register;
use crate::TAG_NAME;

type SharedList = Rc<RefCell<ArticlesList<DomHost>>>;

/// [`ListHost`] backed by the elements of the page.
struct DomHost {
    root: Element,
    search_input: Option<HtmlInputElement>,
    previous_link: Option<HtmlElement>,
    next_link: Option<HtmlElement>,
    history: Option<History>,
}

impl DomHost {
    fn new(root: Element, document: &Document, history: Option<History>) -> Self {
        let search_input = document
            .query_selector("input[type=search]")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok());

        Self {
            previous_link: html_child(&root, "a.previous-page-link"),
            next_link: html_child(&root, "a.next-page-link"),
            search_input,
            history,
            root,
        }
    }

    fn link(&self, link: PageLink) -> Option<&HtmlElement> {
        match link {
            PageLink::Previous => self.previous_link.as_ref(),
            PageLink::Next => self.next_link.as_ref(),
        }
    }
}

impl ListHost for DomHost {
    fn set_item_visible(&mut self, slug: &str, visible: bool) {
        let selector = format!("li[data-slug=\"{}\"]", escape_attribute_value(slug));
        if let Some(item) = html_child(&self.root, &selector) {
            set_display(&item, if visible { "list-item" } else { "none" });
        }
    }

    fn set_link_visible(&mut self, link: PageLink, visible: bool) {
        if let Some(element) = self.link(link) {
            set_display(element, if visible { "unset" } else { "none" });
        }
    }

    fn set_search_value(&mut self, value: &str) {
        if let Some(input) = &self.search_input {
            input.set_value(value);
        }
    }

    fn push_history(&mut self, location: &Url) {
        let Some(history) = &self.history else {
            return;
        };

        if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(location.as_str())) {
            warn!(target: "articles-list", "Could not push {} to the history: {:?}", location, err);
        }
    }
}

fn html_child(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

fn set_display(element: &HtmlElement, display: &str) {
    if let Err(err) = element.style().set_property("display", display) {
        warn!(target: "articles-list", "Could not set display to {}: {:?}", display, err);
    }
}

fn escape_attribute_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let elements = document.query_selector_all(TAG_NAME)?;
    let first = elements
        .get(0)
        .and_then(|node| node.dyn_into::<Element>().ok());
    init_logging(
        first
            .and_then(|element| element.get_attribute("data-log-level"))
            .as_deref(),
    );

    if !register(TAG_NAME) {
        return Ok(());
    }

    let location = Url::parse(&window.location().href()?)
        .map_err(|err| JsValue::from_str(&format!("invalid location: {}", err)))?;
    let history = window.history().ok();

    let mut mounted = 0;
    for index in 0..elements.length() {
        let Some(root) = elements
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };

        // A list that fails to initialize stays inert, the others are still mounted.
        match mount(root, &document, history.clone(), &location) {
            Ok(()) => mounted += 1,
            Err(err) => error!(target: "articles-list", "{}", err),
        }
    }

    info!(target: "articles-list", "Mounted {} list(s)", mounted);

    Ok(())
}

fn mount(
    root: Element,
    document: &Document,
    history: Option<History>,
    location: &Url,
) -> Result<(), crate::InitializationError> {
    let options =
        ListOptions::from_page_size_attribute(root.get_attribute("data-page-size").as_deref());
    let entries = root.get_attribute("data-entries");
    let host = DomHost::new(root, document, history);

    let list = ArticlesList::new(host, options, entries.as_deref(), location)?;
    bind_events(Rc::new(RefCell::new(list)));

    Ok(())
}

/// Listeners are bound once and always act on the state of the list at the time of the event.
///
/// The search input is shared by every list of the page, so each list adds its own listener instead of replacing the
/// input's handler.
fn bind_events(list: SharedList) {
    let (search_input, previous_link, next_link) = {
        let list = list.borrow();
        let host = list.host();
        (
            host.search_input.clone(),
            host.previous_link.clone(),
            host.next_link.clone(),
        )
    };

    if let Some(input) = search_input {
        let widget = Rc::clone(&list);
        let target = input.clone();
        let on_keyup = Closure::<dyn FnMut()>::new(move || {
            widget.borrow_mut().on_query_change(target.value());
        });

        listen(&input, "keyup", on_keyup.as_ref().unchecked_ref());
        // Lives as long as the page.
        on_keyup.forget();
    }

    for (element, link) in [
        (previous_link, PageLink::Previous),
        (next_link, PageLink::Next),
    ] {
        let Some(element) = element else {
            continue;
        };

        let widget = Rc::clone(&list);
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            event.prevent_default();
            widget.borrow_mut().on_page_change(link);
        });

        listen(&element, "click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

fn listen(target: &EventTarget, event: &str, listener: &js_sys::Function) {
    if let Err(err) = target.add_event_listener_with_callback(event, listener) {
        warn!(target: "articles-list", "Could not listen to {}: {:?}", event, err);
    }
}
