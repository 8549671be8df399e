use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

pub(crate) fn window() -> Option<Window> {
    web_sys::window()
}

pub(crate) fn document() -> Option<Document> {
    window()?.document()
}

pub(crate) fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub(crate) fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Вешает обработчик на всё время жизни страницы.
pub(crate) fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        tracing::warn!(event, error = ?err, "failed to attach listener");
    }
    closure.forget();
}

pub(crate) fn add_classes(element: &Element, classes: &[&str]) {
    let list = element.class_list();
    for class in classes {
        let _ = list.add_1(class);
    }
}

pub(crate) fn remove_classes(element: &Element, classes: &[&str]) {
    let list = element.class_list();
    for class in classes {
        let _ = list.remove_1(class);
    }
}

pub(crate) fn set_class(element: &Element, class: &str, enabled: bool) {
    let _ = element.class_list().toggle_with_force(class, enabled);
}

/// Высота фиксированной шапки, `0`, если шапки нет.
pub(crate) fn header_height() -> f64 {
    document()
        .and_then(|doc| doc.query_selector("header").ok().flatten())
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map_or(0.0, |header| f64::from(header.offset_height()))
}

pub(crate) fn page_y_offset() -> f64 {
    window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

pub(crate) fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// `IntersectionObserver`, который живёт вместе со страницей. Обработчик
/// получает только пересекающиеся элементы.
pub(crate) fn observe_intersections(
    threshold: f64,
    root_margin: &str,
    mut on_visible: impl FnMut(Element, &IntersectionObserver) + 'static,
) -> Option<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(entry.target(), &observer);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options);
    callback.forget();

    match observer {
        Ok(observer) => Some(observer),
        Err(err) => {
            tracing::warn!(error = ?err, "IntersectionObserver is not available");
            None
        }
    }
}

pub(crate) fn supports_intersection_observer() -> bool {
    window().is_some_and(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
}
