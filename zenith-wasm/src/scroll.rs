//! Эффекты прокрутки: плавные якоря, автопрокрутка на главной, появление
//! блоков и параллакс.

use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};
use zenith_core::config::ScrollConfig;
use zenith_core::scroll;

use crate::dom;

const REVEAL_HIDDEN_CLASSES: [&str; 5] =
    ["opacity-0", "translate-y-6", "transition-all", "duration-500", "ease-out"];
const REVEAL_VISIBLE_CLASS: &str = "animate-fade-in-up";

fn scroll_to_element(target: &Element) {
    let top = target.get_bounding_client_rect().top();
    dom::smooth_scroll_to(scroll::scroll_target(
        top,
        dom::page_y_offset(),
        dom::header_height(),
    ));
}

fn root_style_smooth() {
    let Some(root) = dom::document()
        .and_then(|doc| doc.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let _ = root.style().set_property("scroll-behavior", "smooth");
}

/// Ссылки `a[href^="#"]` прокручивают страницу с поправкой на шапку и
/// записывают якорь в историю.
pub(crate) fn bind_smooth_anchors() {
    for anchor in dom::query_all(r##"a[href^="#"]"##) {
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = scroll::anchor_target(&href) else {
                return;
            };
            event.prevent_default();

            // невалидный селектор (`#1abc`) просто не найдётся
            let Some(target) = dom::document().and_then(|doc| doc.query_selector(selector).ok().flatten())
            else {
                return;
            };
            scroll_to_element(&target);

            if let Some(history) = dom::window().and_then(|w| w.history().ok()) {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(selector));
            }
        });
    }
    root_style_smooth();
}

fn start_auto_scroll(config: ScrollConfig) {
    let Some(pathname) = dom::window().and_then(|w| w.location().pathname().ok()) else {
        return;
    };
    if !scroll::should_auto_scroll(&pathname, &config.auto_scroll_paths) {
        return;
    }
    let Some(home) = dom::by_id(&config.home_section_id) else {
        return;
    };

    let welcome_id = config.welcome_section_id.clone();
    let delay = config.auto_scroll_delay;
    let observer = dom::observe_intersections(
        config.auto_scroll_threshold,
        &config.auto_scroll_root_margin,
        move |target, observer| {
            observer.unobserve(&target);
            let welcome_id = welcome_id.clone();
            spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                if let Some(welcome) = dom::by_id(&welcome_id) {
                    tracing::debug!("auto-scrolling to welcome section");
                    scroll_to_element(&welcome);
                }
            });
        },
    );
    if let Some(observer) = observer {
        observer.observe(&home);
    }
}

/// Автопрокрутка к приветствию после полной загрузки главной страницы.
pub(crate) fn bind_auto_scroll(config: &ScrollConfig) {
    let Some(window) = dom::window() else {
        return;
    };
    let loaded = window
        .document()
        .is_some_and(|doc| doc.ready_state() == "complete");
    if loaded {
        start_auto_scroll(config.clone());
        return;
    }

    let mut pending = Some(config.clone());
    dom::listen(&window, "load", move |_| {
        if let Some(config) = pending.take() {
            start_auto_scroll(config);
        }
    });
}

/// `[data-animate]` появляются при первом попадании в окно.
pub(crate) fn bind_reveal(config: &ScrollConfig) {
    let elements = dom::query_all("[data-animate]");
    if elements.is_empty() {
        return;
    }
    for element in &elements {
        dom::add_classes(element, &REVEAL_HIDDEN_CLASSES);
    }

    let observer = dom::observe_intersections(
        config.reveal_threshold,
        &config.reveal_root_margin,
        |target, observer| {
            dom::add_classes(&target, &[REVEAL_VISIBLE_CLASS]);
            observer.unobserve(&target);
        },
    );
    match observer {
        Some(observer) => elements.iter().for_each(|el| observer.observe(el)),
        // без наблюдателя блоки не должны остаться невидимыми
        None => elements
            .iter()
            .for_each(|el| dom::add_classes(el, &[REVEAL_VISIBLE_CLASS])),
    }
}

/// `[data-parallax]` сдвигаются пропорционально прокрутке. Скорость читается
/// из атрибута при каждом обновлении.
pub(crate) fn bind_parallax(config: &ScrollConfig) {
    let layers: Vec<HtmlElement> = dom::query_all("[data-parallax]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    if layers.is_empty() {
        return;
    }

    let default_speed = config.default_parallax_speed;
    let update = move || {
        let offset = dom::page_y_offset();
        for layer in &layers {
            let speed = scroll::parallax_speed(
                layer.get_attribute("data-parallax-speed").as_deref(),
                default_speed,
            );
            let _ = layer
                .style()
                .set_property("transform", &scroll::parallax_transform(offset, speed));
        }
    };
    update();

    if let Some(window) = dom::window() {
        dom::listen(&window, "scroll", move |_| update());
    }
}
