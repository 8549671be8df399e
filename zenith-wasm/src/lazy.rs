use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

use crate::dom;

const DATA_SRC: &str = "data-src";
const PENDING_CLASSES: [&str; 3] = ["opacity-0", "transition-opacity", "duration-500"];

fn swap_source(img: &Element) {
    let Some(src) = img.get_attribute(DATA_SRC) else {
        return;
    };
    if let Some(image) = img.dyn_ref::<HtmlImageElement>() {
        let loaded = image.clone();
        dom::listen(image, "load", move |_| {
            dom::add_classes(&loaded, &["opacity-100"]);
            dom::remove_classes(&loaded, &["opacity-0"]);
        });
        image.set_src(&src);
    } else {
        let _ = img.set_attribute("src", &src);
    }
    let _ = img.remove_attribute(DATA_SRC);
}

/// `img[data-src]` получают настоящий `src`, когда подходят к окну на
/// `root_margin`. Без `IntersectionObserver` картинки грузятся сразу.
pub(crate) fn bind_lazy_images(root_margin: &str) {
    let images = dom::query_all("img[data-src]");
    if images.is_empty() {
        return;
    }

    if !dom::supports_intersection_observer() {
        images.iter().for_each(swap_source);
        return;
    }

    let observer = dom::observe_intersections(0.0, root_margin, |img, observer| {
        swap_source(&img);
        observer.unobserve(&img);
    });
    let Some(observer) = observer else {
        images.iter().for_each(swap_source);
        return;
    };

    for img in &images {
        dom::add_classes(img, &PENDING_CLASSES);
        observer.observe(img);
    }
}
