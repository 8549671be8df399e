//! `navigator.share` и `navigator.clipboard`.
//!
//! Оба API вызываются через `Reflect`: браузер может не иметь любого из них,
//! а отсутствие нативного шаринга это штатный путь (копирование ссылки).

use async_trait::async_trait;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use zenith_core::interactions::{NativeShareError, SharePlatform};
use zenith_core::models::SharePayload;

fn navigator() -> Option<JsValue> {
    web_sys::window().map(|w| JsValue::from(w.navigator()))
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn describe(err: &JsValue) -> String {
    Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

async fn call_promise(function: &Function, this: &JsValue, arg: &JsValue) -> Result<JsValue, JsValue> {
    let promise = function.call1(this, arg)?.dyn_into::<Promise>()?;
    JsFuture::from(promise).await
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BrowserShare;

#[async_trait(?Send)]
impl SharePlatform for BrowserShare {
    fn can_share(&self) -> bool {
        navigator().is_some_and(|nav| method(&nav, "share").is_some())
    }

    async fn share(&self, payload: &SharePayload) -> Result<(), NativeShareError> {
        let nav = navigator().ok_or_else(|| NativeShareError::Failed("no navigator".into()))?;
        let share = method(&nav, "share")
            .ok_or_else(|| NativeShareError::Failed("navigator.share is missing".into()))?;

        let data = Object::new();
        for (key, value) in [
            ("title", payload.title.as_str()),
            ("text", payload.text.as_str()),
            ("url", payload.url.as_str()),
        ] {
            let _ = Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value));
        }

        match call_promise(&share, &nav, &data).await {
            Ok(_) => Ok(()),
            Err(err) => match describe(&err).as_str() {
                "AbortError" => Err(NativeShareError::Cancelled),
                other => Err(NativeShareError::Failed(other.to_string())),
            },
        }
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), String> {
        let nav = navigator().ok_or("no navigator")?;
        let clipboard = Reflect::get(&nav, &JsValue::from_str("clipboard"))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
            .ok_or("navigator.clipboard is missing")?;
        let write_text = method(&clipboard, "writeText").ok_or("clipboard.writeText is missing")?;

        call_promise(&write_text, &clipboard, &JsValue::from_str(text))
            .await
            .map(|_| ())
            .map_err(|err| describe(&err))
    }
}
