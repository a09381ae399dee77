//! DOM binding of the product table search, compiled for the `web` feature.
//!
//! The page renders a container with the search inputs and a search button
//! carrying the target route. Once the document is parsed the button gets a
//! `click` listener and every input a `keydown` listener; both end up in
//! [`SearchTrigger::perform_search`].

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    KeyboardEvent,
};

use crate::search_trigger::{
    FieldSource, KeyCode, KeyPress, Navigator, RouteSource, SearchField, SearchTrigger,
};

pub const PRODUCTS_CONTAINER_ID: &str = "products-container";
pub const SEARCH_BUTTON_ID: &str = "search-products";
pub const SEARCH_ROUTE_ATTRIBUTE: &str = "data-js-search-route";
pub const SEARCH_PARAM_SELECTOR: &str = ".search-param";

struct FieldContainer(Element);

impl FieldContainer {
    fn elements(&self) -> Vec<Element> {
        let Ok(nodes) = self.0.query_selector_all(SEARCH_PARAM_SELECTOR) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

fn element_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

impl FieldSource for FieldContainer {
    fn search_fields(&self) -> Vec<SearchField> {
        self.elements()
            .iter()
            .map(|element| {
                SearchField::from_attribute(element.get_attribute("name"), element_value(element))
            })
            .collect()
    }
}

struct SearchButton(Element);

impl RouteSource for SearchButton {
    fn search_route(&self) -> String {
        self.0
            .get_attribute(SEARCH_ROUTE_ATTRIBUTE)
            .unwrap_or_default()
    }
}

struct WindowLocation;

impl Navigator for WindowLocation {
    fn assign(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().assign(url) {
            web_sys::console::error_1(&err);
        }
    }
}

type PageTrigger = SearchTrigger<FieldContainer, SearchButton, WindowLocation>;

fn key_press(event: &KeyboardEvent) -> KeyPress {
    KeyPress {
        key: Some(event.key()),
        key_code: Some(KeyCode::Number(event.key_code())),
    }
}

/// Installs the search handlers on `document`. Returns `false` without
/// touching the page when the container or the button is missing.
pub fn install(document: &Document) -> bool {
    let container = document.get_element_by_id(PRODUCTS_CONTAINER_ID);
    let button = document.get_element_by_id(SEARCH_BUTTON_ID);

    let (Some(container), Some(button)) = (container, button) else {
        return false;
    };
    let container = FieldContainer(container);
    let fields = container.elements();

    let Some(trigger) = PageTrigger::install(
        Some(container),
        Some(SearchButton(button.clone())),
        WindowLocation,
    ) else {
        return false;
    };
    let trigger = Rc::new(trigger);

    let on_click = {
        let trigger = Rc::clone(&trigger);
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| trigger.activate())
    };
    if button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .is_err()
    {
        return false;
    }
    on_click.forget();

    for field in fields {
        let trigger = Rc::clone(&trigger);
        let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            trigger.key_down(&key_press(&event));
        });
        if field
            .add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())
            .is_ok()
        {
            on_key_down.forget();
        }
    }

    true
}

/// WebAssembly entry point.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        install(&document);
        return;
    }

    let on_ready = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            install(&document);
        }
    });
    if document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .is_ok()
    {
        on_ready.forget();
    }
}
