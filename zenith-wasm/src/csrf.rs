use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlInputElement};
use zenith_core::csrf::{self, CsrfLookup, CsrfToken};

use crate::dom;

/// Токен из разметки и cookie текущей страницы.
pub(crate) struct PageCsrf;

impl CsrfLookup for PageCsrf {
    fn meta_tag(&self) -> Option<String> {
        let selector = format!("meta[name=\"{}\"]", csrf::META_NAME);
        let meta = dom::document()?.query_selector(&selector).ok()??;
        Some(meta.get_attribute("content").unwrap_or_default())
    }

    fn form_field(&self) -> Option<String> {
        let selector = format!("[name=\"{}\"]", csrf::FORM_FIELD);
        let field = dom::document()?.query_selector(&selector).ok()??;
        let value = field
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .or_else(|| field.get_attribute("value"))
            .unwrap_or_default();
        Some(value)
    }

    fn cookie(&self) -> Option<String> {
        let document = dom::document()?.dyn_into::<HtmlDocument>().ok()?;
        let cookies = document.cookie().ok()?;
        let raw = csrf::cookie_value(&cookies, csrf::COOKIE_NAME)?;
        js_sys::decode_uri_component(raw).ok().map(String::from)
    }
}

/// Определяет токен один раз при загрузке страницы.
pub(crate) fn resolve_page_token() -> Option<CsrfToken> {
    match csrf::resolve(&PageCsrf) {
        Some((token, source)) => {
            tracing::debug!(?source, "csrf token resolved");
            Some(token)
        }
        None => {
            tracing::warn!("csrf token not found, protected requests will be rejected");
            None
        }
    }
}
